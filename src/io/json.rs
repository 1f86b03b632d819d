//! Scenes as JSON documents.
//!
//! ```json
//! {
//!   "reflector": [[x, y, z], [x, y, z], [x, y, z], [x, y, z]],
//!   "target":    [[x, y, z], [x, y, z], [x, y, z], [x, y, z]],
//!   "incident":  [x, y, z]
//! }
//! ```
//!
//! `"sun_vector"` (pointing toward the sun) may replace `"incident"`.

use super::IoError;
use crate::errors::GeometryError;
use crate::float_types::Real;
use crate::quad::Quad3;
use crate::reflection::incident_from_sun;
use crate::scene::Scene;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SceneJson {
    reflector: [[Real; 3]; 4],
    target: [[Real; 3]; 4],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    incident: Option<[Real; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sun_vector: Option<[Real; 3]>,
}

impl TryFrom<SceneJson> for Scene {
    type Error = GeometryError;

    fn try_from(json: SceneJson) -> Result<Self, Self::Error> {
        let incident = match (json.incident, json.sun_vector) {
            (Some(d), None) => Vector3::from(d),
            (None, Some(s)) => incident_from_sun(&Vector3::from(s))?,
            (Some(_), Some(_)) => {
                return Err(GeometryError::InvalidScene(
                    "give either \"incident\" or \"sun_vector\", not both".into(),
                ));
            },
            (None, None) => {
                return Err(GeometryError::InvalidScene(
                    "missing \"incident\" or \"sun_vector\"".into(),
                ));
            },
        };
        Ok(Scene::new(
            Quad3::from_arrays(json.reflector),
            Quad3::from_arrays(json.target),
            incident,
        ))
    }
}

/// Parse a scene from a JSON string.
pub fn scene_from_json(text: &str) -> Result<Scene, IoError> {
    let json: SceneJson = serde_json::from_str(text)?;
    Ok(Scene::try_from(json)?)
}

/// Serialize a scene, always writing `"incident"`.
pub fn scene_to_json(scene: &Scene) -> Result<String, IoError> {
    let json = SceneJson {
        reflector: scene.reflector.corners.map(|c| c.coords.into()),
        target: scene.target.corners.map(|c| c.coords.into()),
        incident: Some(scene.incident.into()),
        sun_vector: None,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

/// Read and parse a scene file.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, IoError> {
    let text = std::fs::read_to_string(path)?;
    scene_from_json(&text)
}
