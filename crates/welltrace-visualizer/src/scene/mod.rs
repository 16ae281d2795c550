//! Scene option building
//!
//! This module provides:
//! - The typed scene-description tree (description)
//! - The 3D scene builder (scene3d)
//! - The orthogonal 2D projection builders (projection)
//! - Well-isolation selection logic (selection)

pub mod description;
pub mod projection;
pub mod scene3d;
pub mod selection;

pub use description::{
    AxisRange, ColorScale, LegendEntry, Scene2d, SceneDescription, Series2d, Series3d,
    SurfaceGrid, ViewControl,
};
pub use projection::build_2d_projection;
pub use scene3d::{build_3d_scene, SceneConfig};
pub use selection::{base_series_name, series_name, WellSelection, SERIES_NAME_SEPARATOR};
