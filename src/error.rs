use crate::config::ConfigError;

/// Why a sketch stopped during setup. Nothing retries; the sketch logs this
/// and never starts its frame loop.
#[derive(Debug, thiserror::Error)]
pub enum SketchError {
    #[error("WebGL context unavailable")]
    ContextUnavailable,
    #[error("element not found: {0}")]
    MissingElement(&'static str),
    #[error("{0} shader failed to compile")]
    ShaderCompile(&'static str),
    #[error("program failed to link")]
    ProgramLink,
    #[error("unable to create {0}")]
    Resource(&'static str),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("javascript error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SketchError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        SketchError::Js(format!("{value:?}"))
    }
}

#[cfg(target_arch = "wasm32")]
impl From<SketchError> for wasm_bindgen::JsValue {
    fn from(err: SketchError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
