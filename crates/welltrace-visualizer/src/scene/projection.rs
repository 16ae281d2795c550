//! Orthogonal 2D projection panels.
//!
//! Projects every well path and every collector's ellipse footprint
//! onto one coordinate pair (XY, XZ, or YZ). Used by the
//! click-to-select-view panels; independent of slicing.

use crate::bounds::compute_ranges;
use crate::collector::ellipse_polyline;
use crate::scene::description::{AxisRange, Scene2d, Series2d};
use tracing::debug;
use welltrace_core::constants::ELLIPSE_SEGMENTS;
use welltrace_core::{CollectorRadial, ProjectionPlane, Wells};

/// Build one 2D projection panel.
pub fn build_2d_projection(
    plane: ProjectionPlane,
    wells: &Wells,
    collectors: &[CollectorRadial],
) -> Scene2d {
    let ranges = compute_ranges(wells);
    let (min1, max1, min2, max2) = plane.axis_ranges(&ranges);
    let (name1, name2) = plane.axis_names();

    let mut series = Vec::with_capacity(wells.len() + collectors.len());

    for (name, points) in wells {
        if points.is_empty() {
            continue;
        }
        series.push(Series2d {
            name: name.clone(),
            points: points.iter().map(|p| plane.project(p)).collect(),
            width: 1.5,
            opacity: 0.9,
            color: None,
        });
    }

    for c in collectors {
        let (c1, c2, r1, r2) = plane.collector_footprint(c);
        series.push(Series2d {
            name: c.name.clone(),
            points: ellipse_polyline(c1, c2, r1, r2, ELLIPSE_SEGMENTS),
            width: 2.5,
            opacity: 0.95,
            color: Some(c.color.clone()),
        });
    }

    debug!("Built {:?} projection: {} series", plane, series.len());

    Scene2d {
        x_axis: AxisRange {
            min: min1,
            max: max1,
            name: name1.to_string(),
        },
        y_axis: AxisRange {
            min: min2,
            max: max2,
            name: name2.to_string(),
        },
        series,
    }
}
