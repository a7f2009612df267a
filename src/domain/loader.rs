//! Skeleton document loading
//!
//! Document layout (root under the `stickman` key):
//! ```json
//! { "stickman": { "name": "torso", "width": 0.3,
//!                 "start": {"x": 0, "y": 0}, "end": {"x": 0, "y": 0.8},
//!                 "shape_type": "box", "layer": "middle",
//!                 "children": [ ... ] } }
//! ```
//! `layer` defaults to `middle` and `children` to an empty list; every
//! other field is required.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::skeleton::{Bone, BoneId, Layer, ShapeKind, Skeleton};
use super::vec2::Vec2;

pub const DOCUMENT_ROOT_KEY: &str = "stickman";

#[derive(Debug, Error, PartialEq)]
pub enum SkeletonLoadError {
    #[error("skeleton document not found: {0}")]
    NotFound(String),
    #[error("failed to read skeleton document {path}: {message}")]
    Io { path: String, message: String },
    #[error("skeleton document is not valid JSON: {0}")]
    ParseError(String),
    #[error("skeleton node is missing required field `{0}`")]
    MissingField(String),
    #[error("unknown shape_type `{0}` (expected \"box\" or \"circle\")")]
    InvalidShapeKind(String),
    #[error("unknown layer `{0}` (expected \"middle\", \"left\" or \"right\")")]
    InvalidLayer(String),
    #[error("coordinate `{0}` is not a finite number")]
    InvalidCoordinate(String),
    #[error("bone `{bone}` has non-positive width {width}")]
    InvalidWidth { bone: String, width: f32 },
}

#[derive(Deserialize)]
struct RawDocument {
    stickman: Option<RawBone>,
}

#[derive(Deserialize)]
struct RawPoint {
    x: Option<f32>,
    y: Option<f32>,
}

#[derive(Deserialize)]
struct RawBone {
    name: Option<String>,
    width: Option<f32>,
    start: Option<RawPoint>,
    end: Option<RawPoint>,
    shape_type: Option<String>,
    layer: Option<String>,
    children: Option<Vec<RawBone>>,
}

impl RawPoint {
    fn to_vec2(&self, field: &str) -> Result<Vec2, SkeletonLoadError> {
        let x = finite(self.x, field, "x")?;
        let y = finite(self.y, field, "y")?;
        Ok(Vec2::new(x, y))
    }
}

impl RawBone {
    fn to_bone(&self) -> Result<Bone, SkeletonLoadError> {
        let name = self.name.clone().ok_or_else(|| missing("name"))?;
        let width = self.width.ok_or_else(|| missing("width"))?;
        let start = self.start.as_ref().ok_or_else(|| missing("start"))?.to_vec2("start")?;
        let end = self.end.as_ref().ok_or_else(|| missing("end"))?.to_vec2("end")?;
        let shape_str = self.shape_type.as_deref().ok_or_else(|| missing("shape_type"))?;

        let shape = ShapeKind::parse(shape_str)
            .ok_or_else(|| SkeletonLoadError::InvalidShapeKind(shape_str.to_string()))?;

        let layer = match self.layer.as_deref() {
            None => Layer::Middle,
            Some(s) => Layer::parse(s).ok_or_else(|| SkeletonLoadError::InvalidLayer(s.to_string()))?,
        };

        if !(width.is_finite() && width > 0.0) {
            return Err(SkeletonLoadError::InvalidWidth { bone: name, width });
        }

        Ok(Bone::new(name, start, end, width, shape).with_layer(layer))
    }
}

// Out-of-range JSON numbers arrive as infinities after the f32 cast.
fn finite(value: Option<f32>, field: &str, axis: &str) -> Result<f32, SkeletonLoadError> {
    match value {
        None => Err(SkeletonLoadError::MissingField(format!("{}.{}", field, axis))),
        Some(v) if !v.is_finite() => Err(SkeletonLoadError::InvalidCoordinate(format!("{}.{}", field, axis))),
        Some(v) => Ok(v),
    }
}

fn missing(field: &str) -> SkeletonLoadError {
    SkeletonLoadError::MissingField(field.to_string())
}

impl Skeleton {
    /// Parse a full document (root node under `"stickman"`).
    pub fn from_document_json(json: &str) -> Result<Self, SkeletonLoadError> {
        let doc: RawDocument =
            serde_json::from_str(json).map_err(|e| SkeletonLoadError::ParseError(e.to_string()))?;
        let root = doc.stickman.ok_or_else(|| missing(DOCUMENT_ROOT_KEY))?;
        build_tree(root)
    }

    /// Parse a bare bone node (no top-level key).
    pub fn from_node_json(json: &str) -> Result<Self, SkeletonLoadError> {
        let root: RawBone =
            serde_json::from_str(json).map_err(|e| SkeletonLoadError::ParseError(e.to_string()))?;
        build_tree(root)
    }

    /// Read and parse a skeleton document from disk.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, SkeletonLoadError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SkeletonLoadError::NotFound(path.display().to_string()),
            _ => SkeletonLoadError::Io {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;

        let skeleton = Self::from_document_json(&json)?;
        console_log!("loaded skeleton '{}' ({} bones) from {}", skeleton.root().name, skeleton.len(), path.display());
        Ok(skeleton)
    }
}

fn build_tree(raw: RawBone) -> Result<Skeleton, SkeletonLoadError> {
    let mut skeleton = Skeleton::new(raw.to_bone()?);
    attach_children(&mut skeleton, Skeleton::ROOT, raw.children.unwrap_or_default())?;
    Ok(skeleton)
}

// Pre-order: each child is inserted before its own subtree, so ids follow document order.
fn attach_children(
    skeleton: &mut Skeleton,
    parent: BoneId,
    children: Vec<RawBone>,
) -> Result<(), SkeletonLoadError> {
    for raw in children {
        let bone = raw.to_bone()?;
        if let Some(id) = skeleton.add_child(parent, bone) {
            attach_children(skeleton, id, raw.children.unwrap_or_default())?;
        }
    }
    Ok(())
}
