//! 3D scene assembly.
//!
//! Composes well-path polylines, collector representations, slice
//! planes, and view presets into one declarative scene description.

use crate::bounds::compute_ranges;
use crate::collector::{build_blob_surface, is_inside, slice_points, split_runs};
use crate::scene::description::{
    AxisRange, ColorScale, LegendEntry, SceneDescription, Series3d, SurfaceGrid, ViewControl,
};
use crate::scene::selection::series_name;
use tracing::debug;
use welltrace_core::constants::{
    DEFAULT_DISTANCE, MD_PALETTE, SLICE_PLANE_COLOR, SLICE_PLANE_OPACITY, SLICE_PLANE_STEPS,
    STICK_COLOR,
};
use welltrace_core::{
    CollectorMode, CollectorRadial, Ranges, SliceMode, SliceSettings, ViewPreset, WellPoint,
    Wells,
};

/// Explicit scene-builder configuration. Every knob is a named field;
/// comparison panels supply `ranges_override` to share one bounding
/// box instead of passing untyped extras.
#[derive(Debug, Clone)]
pub struct SceneConfig<'a> {
    pub wells: &'a Wells,
    pub collectors: &'a [CollectorRadial],
    pub collector_mode: CollectorMode,
    /// Isolates one well's point-mode collector intervals; all well
    /// polylines remain visible with legend-driven opacity.
    pub selected_well: Option<&'a str>,
    pub show_sticks: bool,
    pub show_heads: bool,
    pub show_collectors: bool,
    pub slice: SliceSettings,
    pub view_preset: ViewPreset,
    /// Externally-supplied axis ranges (e.g. merged bounds shared by
    /// synchronized panels). When absent, ranges come from the wells.
    pub ranges_override: Option<Ranges>,
}

/// Translucent horizontal plane at the slice Z value, spanning the
/// scene's X/Y extent.
fn slice_plane(ranges: &Ranges, z: f64) -> Series3d {
    let steps = SLICE_PLANE_STEPS;
    let grid = SurfaceGrid::from_fn(steps + 1, steps + 1, |row, col| {
        let u = col as f64 / steps as f64;
        let v = row as f64 / steps as f64;
        [
            ranges.x_min + u * ranges.span_x(),
            ranges.y_min + v * ranges.span_y(),
            z,
        ]
    });

    Series3d::Surface {
        name: "Slice plane".to_string(),
        grid,
        opacity: SLICE_PLANE_OPACITY,
        color: Some(SLICE_PLANE_COLOR.to_string()),
        silent: true,
    }
}

/// Build the 3D scene description.
///
/// Series order: optional Z slice plane, collector blobs + outlines
/// (blob mode), then per well its sliced polyline, optional stick and
/// head/tail markers, and in points mode one interval + hit-marker
/// pair per contiguous in-zone run per collector. The measured-depth
/// color scale applies only to the well polylines.
pub fn build_3d_scene(config: &SceneConfig<'_>) -> SceneDescription {
    let ranges = config
        .ranges_override
        .unwrap_or_else(|| compute_ranges(config.wells));

    let legend: Vec<LegendEntry> = config
        .wells
        .keys()
        .map(|name| LegendEntry {
            name: name.clone(),
            selected: config
                .selected_well
                .map_or(true, |selected| selected == name.as_str()),
        })
        .collect();

    let mut series: Vec<Series3d> = Vec::new();
    let mut well_series_indices: Vec<usize> = Vec::new();

    // Slicing by measured depth has no single spatial plane, so only
    // the Z mode draws one; MD slicing stays a pure point filter.
    if config.slice.enabled && config.slice.mode == SliceMode::Z {
        series.push(slice_plane(&ranges, config.slice.value));
    }

    if config.show_collectors && config.collector_mode == CollectorMode::Blob {
        for c in config.collectors {
            let blob = build_blob_surface(c);
            series.push(Series3d::Surface {
                name: series_name(&[&c.name, "blob"]),
                grid: blob.surface,
                opacity: 0.38,
                color: Some(c.color.clone()),
                silent: false,
            });
            series.push(Series3d::Polyline3 {
                name: series_name(&[&c.name, "outline"]),
                points: blob.outline,
                width: 4.0,
                opacity: 0.95,
                color: Some(c.color.clone()),
                silent: true,
            });
        }
    }

    for (name, raw_points) in config.wells {
        if raw_points.is_empty() {
            continue;
        }

        let points = slice_points(raw_points, &config.slice);

        well_series_indices.push(series.len());
        series.push(Series3d::Polyline3 {
            name: name.clone(),
            points: points.clone(),
            width: 4.0,
            opacity: 0.95,
            color: None,
            silent: false,
        });

        // Sticks span the path's original (unsliced) depth extent so
        // the full borehole stays legible while slicing.
        if config.show_sticks {
            let head = raw_points[0];
            let tail = raw_points[raw_points.len() - 1];
            let local_min_z = raw_points.iter().map(|p| p.z).fold(f64::MAX, f64::min);
            let local_max_z = raw_points.iter().map(|p| p.z).fold(f64::MIN, f64::max);

            series.push(Series3d::Polyline3 {
                name: series_name(&[name, "stick"]),
                points: vec![
                    WellPoint::new(head.x, head.y, local_max_z, head.md),
                    WellPoint::new(head.x, head.y, local_min_z, tail.md),
                ],
                width: 6.0,
                opacity: 0.95,
                color: Some(STICK_COLOR.to_string()),
                silent: true,
            });
        }

        if config.show_heads && !points.is_empty() {
            series.push(Series3d::Markers3 {
                name: series_name(&[name, "points"]),
                points: vec![points[0], points[points.len() - 1]],
                size: 10.0,
                opacity: 0.95,
                color: None,
                silent: false,
            });
        }

        if config.show_collectors && config.collector_mode == CollectorMode::Points {
            let visible = config
                .selected_well
                .map_or(true, |selected| selected == name.as_str());
            if visible {
                for c in config.collectors {
                    for run in split_runs(&points, |p| is_inside(p, c)) {
                        series.push(Series3d::Polyline3 {
                            name: series_name(&[&c.name, name, "interval"]),
                            points: run.to_vec(),
                            width: 10.0,
                            opacity: 0.7,
                            color: Some(c.color.clone()),
                            silent: false,
                        });
                        series.push(Series3d::Markers3 {
                            name: series_name(&[&c.name, name, "hits"]),
                            points: run.to_vec(),
                            size: 5.0,
                            opacity: 0.95,
                            color: Some(c.color.clone()),
                            silent: true,
                        });
                    }
                }
            }
        }
    }

    let (alpha, beta) = config.view_preset.angles();

    debug!(
        "Built 3D scene: {} series ({} well polylines), slice={} mode={:?}",
        series.len(),
        well_series_indices.len(),
        config.slice.enabled,
        config.collector_mode
    );

    SceneDescription {
        legend,
        color_scale: ColorScale {
            min: ranges.md_min,
            max: ranges.md_max,
            series_indices: well_series_indices,
            palette: MD_PALETTE.iter().map(|c| c.to_string()).collect(),
        },
        x_axis: AxisRange {
            min: ranges.x_min,
            max: ranges.x_max,
            name: "X".to_string(),
        },
        y_axis: AxisRange {
            min: ranges.y_min,
            max: ranges.y_max,
            name: "Y".to_string(),
        },
        z_axis: AxisRange {
            min: ranges.z_min,
            max: ranges.z_max,
            name: "Z".to_string(),
        },
        view: ViewControl {
            alpha,
            beta,
            distance: DEFAULT_DISTANCE,
        },
        series,
    }
}
