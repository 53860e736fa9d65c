//! Host-side helper: `cargo run` builds the WASM package into `static/pkg`
//! and serves `static/` locally so the sketch pages can be opened.

use std::process::ExitCode;

#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_PORT: u16 = 8000;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() -> ExitCode {
    // Only meaningful on the host.
    ExitCode::SUCCESS
}

#[cfg(not(target_arch = "wasm32"))]
fn run() -> std::io::Result<()> {
    use std::process::{Command, Stdio};
    use std::{env, io};

    let port = match env::var("SKETCHES_PORT") {
        Ok(value) => value.parse().map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("SKETCHES_PORT={value:?} is not a port"),
            )
        })?,
        Err(_) => DEFAULT_PORT,
    };

    log::info!("building wasm package");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(status) if status.success() => {}
        Ok(status) => {
            return Err(io::Error::other(format!("wasm-pack exited with {status}")));
        }
        Err(_) => {
            log::warn!("wasm-pack not found in PATH, serving whatever is already in static/pkg");
        }
    }

    log::info!("serving static/ at http://127.0.0.1:{port}");
    let status = Command::new("python3")
        .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .status()?;

    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!("http server exited with {status}")))
    }
}
