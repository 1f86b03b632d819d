#[cfg(feature = "svg-io")]
pub mod svg;

#[cfg(feature = "json-io")]
pub mod json;

use crate::errors::GeometryError;

/// Generic I/O and format‑conversion errors.
///
/// Many I/O features are behind cargo feature‑flags.
/// When a feature is disabled the corresponding variant does not exist.
#[derive(Debug)]
pub enum IoError {
    StdIo(std::io::Error),
    Geometry(GeometryError),

    MalformedInput(String),

    #[cfg(feature = "json-io")]
    /// Error bubbled up from `serde_json` while parsing a scene.
    Json(serde_json::Error),
}

impl std::fmt::Display for IoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use IoError::*;

        match self {
            StdIo(error) => write!(f, "std::io::Error: {error}"),
            Geometry(error) => write!(f, "Invalid geometry: {error}"),

            MalformedInput(msg) => write!(f, "Input is malformed: {msg}"),

            #[cfg(feature = "json-io")]
            Json(error) => write!(f, "JSON parsing error: {error}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<std::io::Error> for IoError {
    fn from(value: std::io::Error) -> Self {
        Self::StdIo(value)
    }
}

impl From<GeometryError> for IoError {
    fn from(value: GeometryError) -> Self {
        Self::Geometry(value)
    }
}

#[cfg(feature = "json-io")]
impl From<serde_json::Error> for IoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}
