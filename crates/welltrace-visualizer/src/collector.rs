//! Collector zone geometry.
//!
//! Containment tests, in-zone run splitting, slice filtering, and the
//! lobed parametric "blob" surface used to visualize a collector's
//! volumetric extent.

use crate::scene::SurfaceGrid;
use glam::DVec3;
use std::collections::BTreeMap;
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::trace;
use welltrace_core::constants::{
    BLOB_HARMONIC_A, BLOB_HARMONIC_B, BLOB_RADIAL_FLOOR, EQUATOR_SEGMENTS, RADIUS_EPSILON,
    SURFACE_STEP,
};
use welltrace_core::{CollectorRadial, SliceSettings, WellPoint, Wells};

/// Axis-aligned ellipsoid containment test.
///
/// The point's offset from the collector center is normalized by each
/// axis radius (floored at a small epsilon) and the squared norm is
/// compared against 1. Lobe deformation is deliberately NOT applied:
/// the test stays closed-form and fast, which means a point near the
/// surface of a rendered blob can disagree with the lobed silhouette.
pub fn is_inside(p: &WellPoint, c: &CollectorRadial) -> bool {
    let offset = DVec3::new(p.x - c.cx, p.y - c.cy, p.z - c.cz);
    let radii = DVec3::new(
        c.rx.max(RADIUS_EPSILON),
        c.ry.max(RADIUS_EPSILON),
        c.rz.max(RADIUS_EPSILON),
    );
    (offset / radii).length_squared() <= 1.0
}

/// Partition an ordered point sequence into maximal contiguous runs
/// satisfying `predicate`, preserving input order. Runs are returned
/// as sub-slices of the input; a failing point terminates the current
/// run and the trailing run is flushed.
pub fn split_runs<F>(points: &[WellPoint], predicate: F) -> Vec<&[WellPoint]>
where
    F: Fn(&WellPoint) -> bool,
{
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;

    for (i, p) in points.iter().enumerate() {
        if predicate(p) {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(s) = start.take() {
            runs.push(&points[s..i]);
        }
    }
    if let Some(s) = start {
        runs.push(&points[s..]);
    }

    runs
}

/// Apply the slice filter to a point sequence, preserving order.
pub fn slice_points(points: &[WellPoint], slice: &SliceSettings) -> Vec<WellPoint> {
    if !slice.enabled {
        return points.to_vec();
    }
    points.iter().copied().filter(|p| slice.keeps(p)).collect()
}

/// All in-zone points per well per collector, keyed by well name then
/// collector id.
pub fn collect_hits(
    wells: &Wells,
    collectors: &[CollectorRadial],
) -> BTreeMap<String, BTreeMap<String, Vec<WellPoint>>> {
    let mut out = BTreeMap::new();
    for (well_name, points) in wells {
        let mut per_collector = BTreeMap::new();
        for c in collectors {
            let hits: Vec<WellPoint> =
                points.iter().copied().filter(|p| is_inside(p, c)).collect();
            per_collector.insert(c.id.clone(), hits);
        }
        out.insert(well_name.clone(), per_collector);
    }
    out
}

/// Blob surface plus its equatorial outline.
#[derive(Debug, Clone, PartialEq)]
pub struct BlobGeometry {
    pub surface: SurfaceGrid,
    /// v = 0 ring, generated independently of the surface tessellation
    /// density for a crisp silhouette. Measured depth is zero on every
    /// outline point.
    pub outline: Vec<WellPoint>,
}

/// Signed power: `sign(v) * |v|^p`. Produces superellipsoid-like
/// rounding (p near 1) or squaring (p near 0) of the trig products.
fn signed_pow(v: f64, p: f64) -> f64 {
    v.signum() * v.abs().powf(p)
}

/// Radial modulation of the blob: a base radius of 1 plus the primary
/// lobe harmonic and two fixed-weight higher-frequency terms, floored
/// to prevent self-intersection.
fn radial(c: &CollectorRadial, u: f64, v: f64) -> f64 {
    let fu = c.lobe_freq_u();
    let fv = c.lobe_freq_v();
    let r = 1.0
        + c.lobe_amp() * (fu * u).sin() * (fv * v).cos()
        + BLOB_HARMONIC_A * ((fu + 1.0) * (u + v)).sin()
        + BLOB_HARMONIC_B * ((fv + 2.0) * (u - v)).cos();
    r.max(BLOB_RADIAL_FLOOR)
}

fn blob_vertex(c: &CollectorRadial, u: f64, v: f64) -> [f64; 3] {
    let rr = radial(c, u, v);
    let p = c.power();
    let center = DVec3::new(c.cx, c.cy, c.cz);
    let radii = DVec3::new(c.rx, c.ry, c.rz);
    let shaped = DVec3::new(
        signed_pow(v.cos() * u.cos(), p),
        signed_pow(v.cos() * u.sin(), p),
        signed_pow(v.sin(), p),
    );
    let vertex = center + radii * rr * shaped;
    [vertex.x, vertex.y, vertex.z]
}

/// Generate the closed parametric blob surface over u ∈ [−π, π],
/// v ∈ [−π/2, π/2], sampled at the fixed parametric step, plus the
/// equatorial outline ring.
pub fn build_blob_surface(c: &CollectorRadial) -> BlobGeometry {
    let u_segments = ((2.0 * PI) / SURFACE_STEP).ceil() as usize;
    let v_segments = (PI / SURFACE_STEP).ceil() as usize;

    trace!(
        "Blob tessellation for '{}': {}x{} segments",
        c.id,
        u_segments,
        v_segments
    );

    let surface = SurfaceGrid::from_fn(v_segments + 1, u_segments + 1, |row, col| {
        let v = -FRAC_PI_2 + (row as f64 / v_segments as f64) * PI;
        let u = -PI + (col as f64 / u_segments as f64) * 2.0 * PI;
        blob_vertex(c, u, v)
    });

    let mut outline = Vec::with_capacity(EQUATOR_SEGMENTS + 1);
    for i in 0..=EQUATOR_SEGMENTS {
        let u = -PI + (i as f64 / EQUATOR_SEGMENTS as f64) * 2.0 * PI;
        let rr = radial(c, u, 0.0);
        outline.push(WellPoint::new(
            c.cx + c.rx * rr * u.cos(),
            c.cy + c.ry * rr * u.sin(),
            c.cz,
            0.0,
        ));
    }

    BlobGeometry { surface, outline }
}

/// Closed sampled ellipse outline on a 2D plane, parametrized by
/// angle. Used for collector footprints in the projection panels.
pub fn ellipse_polyline(c1: f64, c2: f64, r1: f64, r2: f64, segments: usize) -> Vec<[f64; 2]> {
    let segments = segments.max(3);
    let mut points = Vec::with_capacity(segments + 1);
    for i in 0..=segments {
        let t = (i as f64 / segments as f64) * 2.0 * PI;
        points.push([c1 + t.cos() * r1, c2 + t.sin() * r2]);
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use welltrace_core::SliceMode;

    fn collector(center: [f64; 3], radii: [f64; 3]) -> CollectorRadial {
        CollectorRadial {
            id: "c".into(),
            name: "C".into(),
            color: "#1c7ed6".into(),
            cx: center[0],
            cy: center[1],
            cz: center[2],
            rx: radii[0],
            ry: radii[1],
            rz: radii[2],
            lobe_amp: None,
            lobe_freq_u: None,
            lobe_freq_v: None,
            power: None,
        }
    }

    #[test]
    fn test_is_inside_basic_ellipsoid() {
        let c = collector([0.0, 0.0, 0.0], [2.0, 3.0, 4.0]);
        assert!(is_inside(&WellPoint::new(0.0, 0.0, 0.0, 0.0), &c));
        assert!(is_inside(&WellPoint::new(2.0, 0.0, 0.0, 0.0), &c));
        assert!(!is_inside(&WellPoint::new(2.1, 0.0, 0.0, 0.0), &c));
        assert!(is_inside(&WellPoint::new(0.0, 0.0, -4.0, 0.0), &c));
    }

    #[test]
    fn test_is_inside_tolerates_zero_radius() {
        let c = collector([0.0, 0.0, 0.0], [0.0, 1.0, 1.0]);
        // Must not panic or divide by zero; any x offset is outside.
        assert!(!is_inside(&WellPoint::new(0.5, 0.0, 0.0, 0.0), &c));
    }

    #[test]
    fn test_scenario_single_point_hit() {
        // Well A with three points, collector at (10,0,0) radius 2.
        let points = vec![
            WellPoint::new(0.0, 0.0, 0.0, 0.0),
            WellPoint::new(10.0, 0.0, 0.0, 10.0),
            WellPoint::new(10.0, 10.0, 0.0, 20.0),
        ];
        let c = collector([10.0, 0.0, 0.0], [2.0, 2.0, 2.0]);

        assert!(!is_inside(&points[0], &c));
        assert!(is_inside(&points[1], &c));
        assert!(!is_inside(&points[2], &c));

        let runs = split_runs(&points, |p| is_inside(p, &c));
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0], &points[1..2]);
    }

    #[test]
    fn test_collect_hits_keys_by_well_then_collector() {
        let mut wells = Wells::new();
        wells.insert(
            "A".to_string(),
            vec![
                WellPoint::new(0.0, 0.0, 0.0, 0.0),
                WellPoint::new(10.0, 0.0, 0.0, 10.0),
                WellPoint::new(10.0, 10.0, 0.0, 20.0),
            ],
        );
        wells.insert("B".to_string(), vec![WellPoint::new(50.0, 50.0, 0.0, 0.0)]);

        let near = collector([10.0, 0.0, 0.0], [2.0, 2.0, 2.0]);
        let mut far = collector([50.0, 50.0, 0.0], [1.0, 1.0, 1.0]);
        far.id = "far".into();

        let hits = collect_hits(&wells, &[near.clone(), far]);

        assert_eq!(hits["A"][&near.id].len(), 1);
        assert_eq!(hits["A"][&near.id][0], WellPoint::new(10.0, 0.0, 0.0, 10.0));
        assert!(hits["A"]["far"].is_empty());
        assert!(hits["B"][&near.id].is_empty());
        assert_eq!(hits["B"]["far"].len(), 1);
    }

    #[test]
    fn test_split_runs_no_match_is_empty() {
        let points = vec![WellPoint::new(0.0, 0.0, 0.0, 0.0); 5];
        let runs = split_runs(&points, |_| false);
        assert!(runs.is_empty());
    }

    #[test]
    fn test_split_runs_full_match_is_one_run() {
        let points: Vec<WellPoint> = (0..4)
            .map(|i| WellPoint::new(i as f64, 0.0, 0.0, i as f64))
            .collect();
        let runs = split_runs(&points, |_| true);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0], points.as_slice());
    }

    #[test]
    fn test_split_runs_counts_maximal_blocks() {
        let points: Vec<WellPoint> = (0..7)
            .map(|i| WellPoint::new(i as f64, 0.0, 0.0, 0.0))
            .collect();
        // Matches at x = 1, 2, 4, 6 -> blocks [1,2], [4], [6].
        let runs = split_runs(&points, |p| matches!(p.x as i64, 1 | 2 | 4 | 6));
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].len(), 2);
        assert_eq!(runs[1].len(), 1);
        assert_eq!(runs[2].len(), 1);
    }

    #[test]
    fn test_slice_points_disabled_returns_all() {
        let points = vec![
            WellPoint::new(0.0, 0.0, -10.0, 0.0),
            WellPoint::new(0.0, 0.0, -20.0, 15.0),
        ];
        let slice = SliceSettings::disabled();
        assert_eq!(slice_points(&points, &slice), points);
    }

    #[test]
    fn test_slice_points_md_mode() {
        let points = vec![
            WellPoint::new(0.0, 0.0, 0.0, 0.0),
            WellPoint::new(1.0, 0.0, -5.0, 10.0),
            WellPoint::new(2.0, 0.0, -10.0, 20.0),
        ];
        let slice = SliceSettings {
            enabled: true,
            mode: SliceMode::Md,
            value: 10.0,
        };
        let kept = slice_points(&points, &slice);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].md, 10.0);
    }

    #[test]
    fn test_blob_surface_shape_and_floor() {
        let c = collector([100.0, -50.0, -200.0], [10.0, 8.0, 6.0]);
        let blob = build_blob_surface(&c);

        assert_eq!(
            blob.surface.vertices.len(),
            blob.surface.rows * blob.surface.cols
        );
        assert_eq!(blob.outline.len(), EQUATOR_SEGMENTS + 1);

        // Every vertex stays within the inflated radius and outside a
        // floor-scaled core on each axis.
        let max_rr = 1.0 + c.lobe_amp() + BLOB_HARMONIC_A + BLOB_HARMONIC_B;
        for v in &blob.surface.vertices {
            assert!((v[0] - c.cx).abs() <= c.rx * max_rr + 1e-9);
            assert!((v[1] - c.cy).abs() <= c.ry * max_rr + 1e-9);
            assert!((v[2] - c.cz).abs() <= c.rz * max_rr + 1e-9);
        }
    }

    #[test]
    fn test_blob_outline_lies_on_equator_plane() {
        let c = collector([0.0, 0.0, -123.0], [5.0, 5.0, 5.0]);
        let blob = build_blob_surface(&c);
        for p in &blob.outline {
            assert_eq!(p.z, -123.0);
            assert_eq!(p.md, 0.0);
        }
        // Closed ring: first and last samples coincide (u = ±π).
        let first = blob.outline.first().unwrap();
        let last = blob.outline.last().unwrap();
        assert!((first.x - last.x).abs() < 1e-9);
        assert!((first.y - last.y).abs() < 1e-9);
    }

    #[test]
    fn test_ellipse_polyline_is_closed() {
        let poly = ellipse_polyline(10.0, -5.0, 3.0, 2.0, 96);
        assert_eq!(poly.len(), 97);
        assert_eq!(poly[0], [13.0, -5.0]);
        let last = poly[96];
        assert!((last[0] - 13.0).abs() < 1e-9);
        assert!((last[1] - (-5.0)).abs() < 1e-9);
    }
}
