//! Page-level configuration read from `data-*` attributes.

use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown sketch: {0:?}")]
    UnknownSketch(String),
    #[error("attribute {name} is not a number: {value:?}")]
    NotANumber { name: &'static str, value: String },
    #[error("attribute {name} is not a boolean: {value:?}")]
    NotABool { name: &'static str, value: String },
}

/// Which sketch a page runs, from `<body data-sketch="...">`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SketchKind {
    Image,
    ImageEffects,
    Matrix,
    Orthographic3d,
    Camera,
    DirectionalLight,
    PointLight,
}

impl SketchKind {
    pub const ALL: [SketchKind; 7] = [
        SketchKind::Image,
        SketchKind::ImageEffects,
        SketchKind::Matrix,
        SketchKind::Orthographic3d,
        SketchKind::Camera,
        SketchKind::DirectionalLight,
        SketchKind::PointLight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SketchKind::Image => "image",
            SketchKind::ImageEffects => "image-effects",
            SketchKind::Matrix => "matrix",
            SketchKind::Orthographic3d => "orthographic-3d",
            SketchKind::Camera => "camera",
            SketchKind::DirectionalLight => "directional-light",
            SketchKind::PointLight => "point-light",
        }
    }
}

impl fmt::Display for SketchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SketchKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        SketchKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::UnknownSketch(s.to_owned()))
    }
}

/// Construction parameters for [`crate::camera::Camera`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    /// Vertical field of view in radians.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
    /// Orbit radius, also the initial distance from the origin.
    pub radius: f32,
    /// Attach pointer-drag orbit controls.
    pub controls: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: PI * 0.25,
            near: 0.1,
            far: 10000.0,
            radius: 500.0,
            controls: false,
        }
    }
}

impl CameraConfig {
    /// Overrides defaults with whatever `attr` yields for `data-fov`,
    /// `data-near`, `data-far`, `data-radius` and `data-controls`.
    ///
    /// Values are not range-checked; a degenerate frustum is accepted.
    pub fn with_overrides<F>(mut self, attr: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = attr("data-fov") {
            self.fov = parse_f32("data-fov", &v)?;
        }
        if let Some(v) = attr("data-near") {
            self.near = parse_f32("data-near", &v)?;
        }
        if let Some(v) = attr("data-far") {
            self.far = parse_f32("data-far", &v)?;
        }
        if let Some(v) = attr("data-radius") {
            self.radius = parse_f32("data-radius", &v)?;
        }
        if let Some(v) = attr("data-controls") {
            self.controls = parse_bool("data-controls", &v)?;
        }
        Ok(self)
    }
}

fn parse_f32(name: &'static str, value: &str) -> Result<f32, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::NotANumber {
        name,
        value: value.to_owned(),
    })
}

fn parse_bool(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim() {
        // A bare `data-controls` attribute reads as an empty string.
        "" | "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::NotABool {
            name,
            value: value.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn sketch_names_round_trip() {
        for kind in SketchKind::ALL {
            assert_eq!(kind.name().parse::<SketchKind>(), Ok(kind));
        }
        assert_eq!(" Point-Light ".parse::<SketchKind>(), Ok(SketchKind::PointLight));
    }

    #[test]
    fn unknown_sketch_is_rejected() {
        assert_eq!(
            "spot-light".parse::<SketchKind>(),
            Err(ConfigError::UnknownSketch("spot-light".into()))
        );
    }

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let attrs: HashMap<&str, &str> =
            HashMap::from([("data-radius", "10"), ("data-controls", ""), ("data-far", " 100 ")]);
        let config = CameraConfig::default()
            .with_overrides(|name| attrs.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.radius, 10.0);
        assert_eq!(config.far, 100.0);
        assert!(config.controls);
        assert_eq!(config.near, 0.1);
        assert_eq!(config.fov, PI * 0.25);
    }

    #[test]
    fn bad_number_names_the_attribute() {
        let err = CameraConfig::default()
            .with_overrides(|name| (name == "data-near").then(|| "close".to_string()))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::NotANumber {
                name: "data-near",
                value: "close".into()
            }
        );
    }
}
