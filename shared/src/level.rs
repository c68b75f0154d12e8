//! Level decoding and world setup.
//!
//! A level arrives as a base64 text blob wrapping a JSON document with two
//! parts: `elements` (one oriented bounding box per mesh, in file order) and
//! `meta` (optional per-element overrides keyed by element id). Setup is the one
//! place in the crate that can fail; everything after it degrades to defaults.

use std::collections::BTreeMap;

use base64::{
    Engine as _, alphabet,
    engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig},
};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{
    body::World,
    collision::Vec3,
    error::{LevelError, Result},
    geometry::{from_planar, rotate, to_planar},
    motion::{Motion, MotionKind, Mover},
};

/// Standard alphabet, padding optional, trailing bits ignored.
const LEVEL_ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Decode a base64 text blob. ASCII whitespace is ignored.
pub fn decode_blob(text: &str) -> Result<Vec<u8>> {
    let compact: Vec<u8> = text.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    Ok(LEVEL_ENGINE.decode(compact)?)
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

/// One level element: a mesh reduced to its local bounding box and placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: String,
    pub bounding_box: BoundingBox,
    /// Yaw of the element (radians).
    #[serde(default)]
    pub rotation_about_y: f32,
    #[serde(default = "Vec3::zeros")]
    pub translation: Vec3,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundsShape {
    #[default]
    Box,
    Circle,
}

/// Motion as written in the level file. `kind` stays a string so an unknown
/// kind can be dropped with a warning instead of failing the whole level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionDef {
    pub kind: String,
    pub amount: Vec3,
    pub interval: u64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub pause: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementMeta {
    #[serde(default)]
    pub bounds_shape: BoundsShape,
    #[serde(default)]
    pub sensor: bool,
    #[serde(default)]
    pub padding: f32,
    #[serde(default)]
    pub motion: Option<MotionDef>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    pub elements: Vec<Element>,
    #[serde(default)]
    pub meta: BTreeMap<String, ElementMeta>,
}

impl LevelData {
    /// Decode and parse a level blob.
    pub fn from_blob(text: &str) -> Result<Self> {
        let bytes = decode_blob(text)?;
        let level: LevelData = serde_json::from_slice(&bytes)?;
        level.validate()?;
        Ok(level)
    }

    /// Reject documents that cannot produce a sane world.
    pub fn validate(&self) -> Result<()> {
        for element in &self.elements {
            let BoundingBox { min, max } = element.bounding_box;
            let finite = min.iter().chain(max.iter()).chain(element.translation.iter()).all(|v| v.is_finite())
                && element.rotation_about_y.is_finite();
            if !finite {
                return Err(LevelError::Invalid(format!("element `{}` has a non-finite coordinate", element.id)));
            }
            if min.x > max.x || min.y > max.y || min.z > max.z {
                return Err(LevelError::Invalid(format!("element `{}` has an inverted bounding box", element.id)));
            }
        }
        for (id, meta) in &self.meta {
            if !meta.padding.is_finite() {
                return Err(LevelError::Invalid(format!("meta `{id}` has a non-finite padding")));
            }
            if let Some(motion) = &meta.motion {
                if motion.interval == 0 {
                    return Err(LevelError::Invalid(format!("meta `{id}` has a zero motion interval")));
                }
                if !motion.amount.iter().all(|v| v.is_finite()) {
                    return Err(LevelError::Invalid(format!("meta `{id}` has a non-finite motion amount")));
                }
            }
        }
        Ok(())
    }

    /// Build the fixed level bodies in element order, plus the movers driving
    /// the ones that have motion.
    pub fn build(&self, allowed_step_size: f32) -> (World, Vec<Mover>) {
        let mut world = World::new(allowed_step_size);
        let mut movers = Vec::new();
        let default_meta = ElementMeta::default();

        for element in &self.elements {
            let meta = self.meta.get(&element.id).unwrap_or(&default_meta);
            let BoundingBox { min, max } = element.bounding_box;

            let local_center = (min + max) * 0.5;
            let offset = rotate(to_planar(local_center), element.rotation_about_y);
            let center = element.translation + from_planar(offset, local_center.y);

            let mut size = max - min;
            size.x = (size.x - 2.0 * meta.padding).max(0.0);
            size.z = (size.z - 2.0 * meta.padding).max(0.0);

            let body = match meta.bounds_shape {
                BoundsShape::Box => world.create_box(center, size, element.rotation_about_y, false, meta.sensor),
                BoundsShape::Circle => {
                    let diameter = size.x.max(size.z);
                    world.create_cylinder(
                        center,
                        Vec3::new(diameter, size.y, diameter),
                        element.rotation_about_y,
                        false,
                        meta.sensor,
                    )
                }
            };
            let body_id = body.id;

            if let Some(def) = &meta.motion {
                match motion_from_def(def) {
                    Some(motion) => movers.push(Mover {
                        name: element.id.clone(),
                        body_id,
                        motion,
                        base: center,
                    }),
                    None => warn!("element `{}`: unknown motion kind `{}`, left static", element.id, def.kind),
                }
            }
        }

        for id in self.meta.keys() {
            if !self.elements.iter().any(|e| &e.id == id) {
                debug!("meta entry `{id}` matches no element");
            }
        }

        info!(
            "level built: {} elements, {} bodies, {} movers",
            self.elements.len(),
            world.bodies().len(),
            movers.len()
        );
        (world, movers)
    }
}

fn motion_from_def(def: &MotionDef) -> Option<Motion> {
    let kind = match def.kind.to_ascii_lowercase().as_str() {
        "linear" | "z" => MotionKind::Linear,
        "sine" | "sinusoidal" => MotionKind::Sine,
        _ => return None,
    };
    Some(Motion {
        kind,
        amount: def.amount,
        interval_ms: def.interval,
        offset_ms: def.offset,
        pause_ms: def.pause,
    })
}
