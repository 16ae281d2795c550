//! # Welltrace Visualizer
//!
//! Geometry and visualization engine for 3D well-trajectory data:
//! bounds computation, collector zone geometry (containment, run
//! splitting, blob surfaces), declarative 3D/2D scene building, and a
//! frame-coalescing orbit camera controller shared across panels.

pub mod bounds;
pub mod camera;
pub mod collector;
pub mod controls;
pub mod scene;

pub use bounds::{
    compute_ranges, compute_ranges_with_collectors, merge_ranges, BoundsAccumulator,
};
pub use camera::CameraState;
pub use collector::{
    build_blob_surface, collect_hits, ellipse_polyline, is_inside, slice_points, split_runs,
    BlobGeometry,
};
pub use controls::{CameraTarget, OrbitController};
pub use scene::{
    base_series_name, build_2d_projection, build_3d_scene, series_name, AxisRange, ColorScale,
    LegendEntry, Scene2d, SceneConfig, SceneDescription, Series2d, Series3d, SurfaceGrid,
    ViewControl, WellSelection,
};
