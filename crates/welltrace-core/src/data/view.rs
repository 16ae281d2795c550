//! View-state types: axis ranges, slicing, display modes, presets.

use super::model::{CollectorRadial, WellPoint};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Padded axis-aligned bounds over well and collector data.
///
/// Invariant: min ≤ max on every axis. X/Y/Z carry symmetric padding;
/// the measured-depth bounds are raw min/max because they drive a
/// value-mapped color scale and slider range where padding would
/// desynchronize displayed values from data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ranges {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub z_min: f64,
    pub z_max: f64,
    pub md_min: f64,
    pub md_max: f64,
}

impl Ranges {
    /// Degenerate default used when no points exist: [0, 1] everywhere.
    pub const UNIT: Ranges = Ranges {
        x_min: 0.0,
        x_max: 1.0,
        y_min: 0.0,
        y_max: 1.0,
        z_min: 0.0,
        z_max: 1.0,
        md_min: 0.0,
        md_max: 1.0,
    };

    pub fn span_x(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn span_y(&self) -> f64 {
        self.y_max - self.y_min
    }

    pub fn span_z(&self) -> f64 {
        self.z_max - self.z_min
    }

    /// Largest spatial span, used for camera fitting.
    pub fn max_spatial_span(&self) -> f64 {
        self.span_x().max(self.span_y()).max(self.span_z())
    }

    /// Value interval a slice slider covers in the given mode.
    pub fn slice_bounds(&self, mode: SliceMode) -> (f64, f64) {
        match mode {
            SliceMode::Z => (self.z_min, self.z_max),
            SliceMode::Md => (self.md_min, self.md_max),
        }
    }
}

/// How collector zones are rendered in the 3D scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectorMode {
    /// Highlighted in-zone path intervals plus hit markers.
    Points,
    /// Lobed volumetric blob surface plus equator outline.
    Blob,
}

/// Which quantity a slice filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SliceMode {
    /// Keep points at or above a Z cut plane.
    Z,
    /// Keep points drilled up to a measured depth.
    Md,
}

impl fmt::Display for SliceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Z => write!(f, "z"),
            Self::Md => write!(f, "md"),
        }
    }
}

/// Slice filter state.
///
/// The keep predicates are deliberately asymmetric: Z-slicing reveals
/// what lies above a horizontal cut (z ≥ value), MD-slicing reveals
/// what has been drilled so far along the path (md ≤ value).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliceSettings {
    pub enabled: bool,
    pub mode: SliceMode,
    pub value: f64,
}

impl SliceSettings {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            mode: SliceMode::Z,
            value: 0.0,
        }
    }

    /// Whether a point survives the slice filter.
    pub fn keeps(&self, p: &WellPoint) -> bool {
        if !self.enabled {
            return true;
        }
        match self.mode {
            SliceMode::Z => p.z >= self.value,
            SliceMode::Md => p.md <= self.value,
        }
    }

    /// Clamp the slice value into the range the current mode covers.
    /// Called when the mode or the underlying ranges change.
    pub fn clamp_to(&mut self, ranges: &Ranges) {
        let (min, max) = ranges.slice_bounds(self.mode);
        self.value = self.value.clamp(min, max);
    }
}

/// Camera view-angle presets for the 3D scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewPreset {
    #[serde(rename = "3d")]
    ThreeD,
    Xy,
    Xz,
    Yz,
}

impl ViewPreset {
    /// Scene view angles (alpha elevation, beta azimuth) in degrees.
    /// The orbit controller clamps the pole-adjacent pairs away from
    /// exact 0 when applying a preset interactively.
    pub fn angles(&self) -> (f64, f64) {
        match self {
            Self::Xy => (90.0, 0.0),
            Self::Xz => (0.0, 0.0),
            Self::Yz => (0.0, 90.0),
            Self::ThreeD => (35.0, 25.0),
        }
    }
}

/// Coordinate pair a 2D projection collapses onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectionPlane {
    Xy,
    Xz,
    Yz,
}

impl ProjectionPlane {
    /// Project a well point onto this plane.
    pub fn project(&self, p: &WellPoint) -> [f64; 2] {
        match self {
            Self::Xy => [p.x, p.y],
            Self::Xz => [p.x, p.z],
            Self::Yz => [p.y, p.z],
        }
    }

    /// Collector ellipse footprint on this plane:
    /// (center1, center2, radius1, radius2).
    pub fn collector_footprint(&self, c: &CollectorRadial) -> (f64, f64, f64, f64) {
        match self {
            Self::Xy => (c.cx, c.cy, c.rx, c.ry),
            Self::Xz => (c.cx, c.cz, c.rx, c.rz),
            Self::Yz => (c.cy, c.cz, c.ry, c.rz),
        }
    }

    /// Axis ranges on this plane: (min1, max1, min2, max2).
    pub fn axis_ranges(&self, r: &Ranges) -> (f64, f64, f64, f64) {
        match self {
            Self::Xy => (r.x_min, r.x_max, r.y_min, r.y_max),
            Self::Xz => (r.x_min, r.x_max, r.z_min, r.z_max),
            Self::Yz => (r.y_min, r.y_max, r.z_min, r.z_max),
        }
    }

    /// Axis display names on this plane.
    pub fn axis_names(&self) -> (&'static str, &'static str) {
        match self {
            Self::Xy => ("X", "Y"),
            Self::Xz => ("X", "Z"),
            Self::Yz => ("Y", "Z"),
        }
    }

    /// The view preset a click on this projection panel selects.
    pub fn view_preset(&self) -> ViewPreset {
        match self {
            Self::Xy => ViewPreset::Xy,
            Self::Xz => ViewPreset::Xz,
            Self::Yz => ViewPreset::Yz,
        }
    }
}
