//! Well-path and collector data types.

use crate::constants;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// One sample along a well trajectory: spatial position plus measured
/// depth (cumulative distance along the path from its start).
///
/// Serialized as a four-element array `[x, y, z, md]` to match the
/// external dataset shape. Measured depth is usually monotonic along a
/// well but no invariant is enforced on input; consumers tolerate
/// non-monotonic data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "[f64; 4]", try_from = "Vec<f64>")]
pub struct WellPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub md: f64,
}

impl WellPoint {
    pub fn new(x: f64, y: f64, z: f64, md: f64) -> Self {
        Self { x, y, z, md }
    }

    /// Build a point from a raw component slice, failing fast on any
    /// shape violation. This is the only error path in the engine.
    pub fn from_slice(components: &[f64]) -> Result<Self> {
        match components {
            &[x, y, z, md] => Ok(Self { x, y, z, md }),
            other => Err(Error::MalformedWellPoint { len: other.len() }),
        }
    }
}

impl From<WellPoint> for [f64; 4] {
    fn from(p: WellPoint) -> Self {
        [p.x, p.y, p.z, p.md]
    }
}

impl TryFrom<Vec<f64>> for WellPoint {
    type Error = Error;

    fn try_from(components: Vec<f64>) -> Result<Self> {
        Self::from_slice(&components)
    }
}

/// Mapping from well name to its ordered point sequence. Point order
/// defines the path polyline and is preserved end-to-end; map order is
/// deterministic so scene output is stable across runs.
pub type Wells = BTreeMap<String, Vec<WellPoint>>;

/// Validate a raw component-row dataset into [`Wells`], attaching the
/// well name and point index to any shape violation.
pub fn wells_from_raw(raw: BTreeMap<String, Vec<Vec<f64>>>) -> Result<Wells> {
    let mut wells = Wells::new();
    for (name, rows) in raw {
        let mut points = Vec::with_capacity(rows.len());
        for (index, row) in rows.iter().enumerate() {
            let point = WellPoint::from_slice(row).map_err(|source| Error::InvalidWell {
                well: name.clone(),
                index,
                source: Box::new(source),
            })?;
            points.push(point);
        }
        wells.insert(name, points);
    }
    debug!(
        "Validated {} wells ({} points)",
        wells.len(),
        wells.values().map(Vec::len).sum::<usize>()
    );
    Ok(wells)
}

/// An ellipsoidal zone of influence around a region of interest.
///
/// The optional lobe parameters deform the rendered blob surface only;
/// the containment test always uses the undeformed ellipsoid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectorRadial {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display color (CSS hex string).
    pub color: String,

    pub cx: f64,
    pub cy: f64,
    pub cz: f64,
    /// Per-axis radii, each expected > 0. Degenerate radii are floored
    /// at a small epsilon by consumers rather than rejected.
    pub rx: f64,
    pub ry: f64,
    pub rz: f64,

    /// Lobe amplitude, 0 to ~0.45.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lobe_amp: Option<f64>,
    /// Primary harmonic frequency along u.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lobe_freq_u: Option<f64>,
    /// Primary harmonic frequency along v.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lobe_freq_v: Option<f64>,
    /// Superellipsoid shape exponent in (0, 1].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<f64>,
}

impl CollectorRadial {
    /// Lobe amplitude with the documented default applied.
    pub fn lobe_amp(&self) -> f64 {
        self.lobe_amp.unwrap_or(constants::DEFAULT_LOBE_AMP)
    }

    /// Primary u-frequency with the documented default applied.
    pub fn lobe_freq_u(&self) -> f64 {
        self.lobe_freq_u.unwrap_or(constants::DEFAULT_LOBE_FREQ_U)
    }

    /// Primary v-frequency with the documented default applied.
    pub fn lobe_freq_v(&self) -> f64 {
        self.lobe_freq_v.unwrap_or(constants::DEFAULT_LOBE_FREQ_V)
    }

    /// Shape exponent with the documented default applied.
    pub fn power(&self) -> f64 {
        self.power.unwrap_or(constants::DEFAULT_POWER)
    }
}
