//! Typed scene-description tree.
//!
//! The declarative output contract of the scene builders: a tree of
//! series, axis, legend, color-scale, and view-control values that an
//! external renderer turns into pixels. Everything is a concrete,
//! serializable value; surfaces are pre-tessellated vertex grids.

use serde::Serialize;
use welltrace_core::WellPoint;

/// Row-major grid of tessellated surface vertices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceGrid {
    /// Number of vertex rows (v samples).
    pub rows: usize,
    /// Number of vertex columns (u samples).
    pub cols: usize,
    /// `rows * cols` vertices, row-major.
    pub vertices: Vec<[f64; 3]>,
}

impl SurfaceGrid {
    /// Build a grid by sampling `f(row, col)` over the full grid.
    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> [f64; 3]) -> Self {
        let mut vertices = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                vertices.push(f(r, c));
            }
        }
        Self {
            rows,
            cols,
            vertices,
        }
    }

    pub fn vertex(&self, row: usize, col: usize) -> [f64; 3] {
        self.vertices[row * self.cols + col]
    }
}

/// One renderable series in the 3D scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Series3d {
    /// A connected polyline through 3D points (fourth component is
    /// measured depth, used by the color scale).
    #[serde(rename_all = "camelCase")]
    Polyline3 {
        name: String,
        points: Vec<WellPoint>,
        width: f64,
        opacity: f64,
        /// Explicit color; `None` lets the color scale / theme decide.
        color: Option<String>,
        /// Silent series do not respond to hover or selection.
        silent: bool,
    },
    /// Discrete point markers.
    #[serde(rename_all = "camelCase")]
    Markers3 {
        name: String,
        points: Vec<WellPoint>,
        size: f64,
        opacity: f64,
        color: Option<String>,
        silent: bool,
    },
    /// A tessellated surface (collector blob or slice plane).
    #[serde(rename_all = "camelCase")]
    Surface {
        name: String,
        grid: SurfaceGrid,
        opacity: f64,
        color: Option<String>,
        silent: bool,
    },
}

impl Series3d {
    pub fn name(&self) -> &str {
        match self {
            Self::Polyline3 { name, .. }
            | Self::Markers3 { name, .. }
            | Self::Surface { name, .. } => name,
        }
    }
}

/// A 2D polyline series in a projection panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series2d {
    pub name: String,
    pub points: Vec<[f64; 2]>,
    pub width: f64,
    pub opacity: f64,
    pub color: Option<String>,
}

/// One axis of a scene: value range plus display name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
    pub name: String,
}

/// Initial camera orientation of the 3D scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewControl {
    /// Elevation in degrees.
    pub alpha: f64,
    /// Azimuth in degrees.
    pub beta: f64,
    pub distance: f64,
}

/// One legend entry per well; a deselected entry dims its series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntry {
    pub name: String,
    pub selected: bool,
}

/// Value-mapped color scale over measured depth. Applies only to the
/// series listed in `series_indices` (well-path polylines), never to
/// collector or slice-plane series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
    pub series_indices: Vec<usize>,
    pub palette: Vec<String>,
}

/// Complete declarative description of the 3D scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneDescription {
    pub legend: Vec<LegendEntry>,
    pub color_scale: ColorScale,
    pub x_axis: AxisRange,
    pub y_axis: AxisRange,
    pub z_axis: AxisRange,
    pub view: ViewControl,
    pub series: Vec<Series3d>,
}

/// Declarative description of one orthogonal 2D projection panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene2d {
    pub x_axis: AxisRange,
    pub y_axis: AxisRange,
    pub series: Vec<Series2d>,
}
