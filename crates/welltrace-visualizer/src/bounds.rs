//! Bounds computation over well-path and collector data.
//!
//! Produces the padded axis ranges that drive axis scaling, slice
//! slider bounds, and the measured-depth color scale. All operations
//! are total: an empty dataset yields a unit default range instead of
//! NaN or infinity.

use tracing::debug;
use welltrace_core::constants::{
    BLOB_HARMONIC_A, BLOB_HARMONIC_B, BLOB_HEADROOM, MIN_SPAN, RANGE_PAD_XY, RANGE_PAD_Z,
};
use welltrace_core::{CollectorRadial, Ranges, WellPoint, Wells};

/// Running min/max accumulator over the four well-point axes.
#[derive(Debug, Clone, Copy)]
pub struct BoundsAccumulator {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
    pub min_z: f64,
    pub max_z: f64,
    pub min_md: f64,
    pub max_md: f64,
}

impl Default for BoundsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundsAccumulator {
    pub fn new() -> Self {
        Self {
            min_x: f64::MAX,
            max_x: f64::MIN,
            min_y: f64::MAX,
            max_y: f64::MIN,
            min_z: f64::MAX,
            max_z: f64::MIN,
            min_md: f64::MAX,
            max_md: f64::MIN,
        }
    }

    pub fn update(&mut self, p: &WellPoint) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
        self.min_z = self.min_z.min(p.z);
        self.max_z = self.max_z.max(p.z);
        self.min_md = self.min_md.min(p.md);
        self.max_md = self.max_md.max(p.md);
    }

    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.max_x.is_finite()
            && self.min_y.is_finite()
            && self.max_y.is_finite()
            && self.min_z.is_finite()
            && self.max_z.is_finite()
            && self.min_md.is_finite()
            && self.max_md.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
            && self.min_z <= self.max_z
            && self.min_md <= self.max_md
    }
}

/// Symmetric padding with a span floor, so coincident points never
/// produce a degenerate range.
fn pad_range(min: f64, max: f64, pad: f64) -> (f64, f64) {
    let span = (max - min).max(MIN_SPAN);
    let p = span * pad;
    (min - p, max + p)
}

/// How far a blob surface can bulge beyond the nominal radius: the
/// lobe amplitude plus the two fixed harmonic weights plus headroom.
fn blob_inflation(c: &CollectorRadial) -> f64 {
    1.0 + c.lobe_amp() + BLOB_HARMONIC_A + BLOB_HARMONIC_B + BLOB_HEADROOM
}

/// Compute padded axis ranges over every point of every well.
///
/// X/Y spans are padded by 8%, Z by 12%. Measured-depth bounds stay
/// raw because they feed a value-mapped color scale and slider where
/// padding would desynchronize displayed values from data. An empty
/// dataset yields [`Ranges::UNIT`].
pub fn compute_ranges(wells: &Wells) -> Ranges {
    let mut acc = BoundsAccumulator::new();
    for points in wells.values() {
        for p in points {
            acc.update(p);
        }
    }

    if !acc.is_valid() {
        debug!("No well points, using unit default ranges");
        return Ranges::UNIT;
    }

    let (x_min, x_max) = pad_range(acc.min_x, acc.max_x, RANGE_PAD_XY);
    let (y_min, y_max) = pad_range(acc.min_y, acc.max_y, RANGE_PAD_XY);
    let (z_min, z_max) = pad_range(acc.min_z, acc.max_z, RANGE_PAD_Z);

    Ranges {
        x_min,
        x_max,
        y_min,
        y_max,
        z_min,
        z_max,
        md_min: acc.min_md,
        md_max: acc.max_md,
    }
}

/// Compute ranges that also cover collector blob surfaces.
///
/// Starts from [`compute_ranges`], expands each spatial axis by every
/// collector's radius times its inflation factor, then re-pads, so the
/// rendered bounding box never clips a bulging blob. Measured-depth
/// bounds are untouched.
pub fn compute_ranges_with_collectors(wells: &Wells, collectors: &[CollectorRadial]) -> Ranges {
    let base = compute_ranges(wells);

    let mut min_x = base.x_min;
    let mut max_x = base.x_max;
    let mut min_y = base.y_min;
    let mut max_y = base.y_max;
    let mut min_z = base.z_min;
    let mut max_z = base.z_max;

    for c in collectors {
        let factor = blob_inflation(c);
        min_x = min_x.min(c.cx - c.rx * factor);
        max_x = max_x.max(c.cx + c.rx * factor);
        min_y = min_y.min(c.cy - c.ry * factor);
        max_y = max_y.max(c.cy + c.ry * factor);
        min_z = min_z.min(c.cz - c.rz * factor);
        max_z = max_z.max(c.cz + c.rz * factor);
    }

    let (x_min, x_max) = pad_range(min_x, max_x, RANGE_PAD_XY);
    let (y_min, y_max) = pad_range(min_y, max_y, RANGE_PAD_XY);
    let (z_min, z_max) = pad_range(min_z, max_z, RANGE_PAD_Z);

    Ranges {
        x_min,
        x_max,
        y_min,
        y_max,
        z_min,
        z_max,
        ..base
    }
}

/// Per-axis union of two ranges. Used to give independently-scoped
/// scenes (predicted vs. actual) an identical bounding box so they
/// stay visually comparable.
pub fn merge_ranges(a: &Ranges, b: &Ranges) -> Ranges {
    Ranges {
        x_min: a.x_min.min(b.x_min),
        x_max: a.x_max.max(b.x_max),
        y_min: a.y_min.min(b.y_min),
        y_max: a.y_max.max(b.y_max),
        z_min: a.z_min.min(b.z_min),
        z_max: a.z_max.max(b.z_max),
        md_min: a.md_min.min(b.md_min),
        md_max: a.md_max.max(b.md_max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_well(points: Vec<WellPoint>) -> Wells {
        let mut wells = Wells::new();
        wells.insert("A".to_string(), points);
        wells
    }

    #[test]
    fn test_empty_wells_yield_unit_ranges() {
        let r = compute_ranges(&Wells::new());
        assert_eq!(r, Ranges::UNIT);
    }

    #[test]
    fn test_well_with_no_points_yields_unit_ranges() {
        let r = compute_ranges(&one_well(vec![]));
        assert_eq!(r, Ranges::UNIT);
    }

    #[test]
    fn test_padding_expands_but_md_stays_raw() {
        let wells = one_well(vec![
            WellPoint::new(0.0, 0.0, -100.0, 0.0),
            WellPoint::new(10.0, 20.0, -200.0, 150.0),
        ]);
        let r = compute_ranges(&wells);

        assert!((r.x_min - (-0.8)).abs() < 1e-12);
        assert!((r.x_max - 10.8).abs() < 1e-12);
        assert!((r.y_min - (-1.6)).abs() < 1e-12);
        assert!((r.y_max - 21.6).abs() < 1e-12);
        assert!((r.z_min - (-212.0)).abs() < 1e-12);
        assert!((r.z_max - (-88.0)).abs() < 1e-12);
        assert_eq!(r.md_min, 0.0);
        assert_eq!(r.md_max, 150.0);
    }

    #[test]
    fn test_coincident_points_do_not_collapse() {
        let wells = one_well(vec![
            WellPoint::new(5.0, 5.0, 5.0, 5.0),
            WellPoint::new(5.0, 5.0, 5.0, 5.0),
        ]);
        let r = compute_ranges(&wells);
        assert!(r.x_min < r.x_max);
        assert!(r.y_min < r.y_max);
        assert!(r.z_min < r.z_max);
        assert!(r.x_min.is_finite() && r.x_max.is_finite());
    }

    #[test]
    fn test_collector_inflation_covers_blob_bulge() {
        let wells = one_well(vec![WellPoint::new(0.0, 0.0, 0.0, 0.0)]);
        let c = CollectorRadial {
            id: "c".into(),
            name: "C".into(),
            color: "#000".into(),
            cx: 0.0,
            cy: 0.0,
            cz: 0.0,
            rx: 10.0,
            ry: 10.0,
            rz: 10.0,
            lobe_amp: Some(0.22),
            lobe_freq_u: None,
            lobe_freq_v: None,
            power: None,
        };
        let r = compute_ranges_with_collectors(&wells, &[c]);

        // factor = 1 + 0.22 + 0.12 + 0.08 + 0.10 = 1.52, radius 10
        assert!(r.x_min <= -15.2);
        assert!(r.x_max >= 15.2);
        assert!(r.z_min <= -15.2);
        assert!(r.z_max >= 15.2);
    }

    #[test]
    fn test_merge_is_commutative_and_bounding() {
        let a = Ranges {
            x_min: -5.0,
            x_max: 2.0,
            y_min: 0.0,
            y_max: 1.0,
            z_min: -10.0,
            z_max: 0.0,
            md_min: 0.0,
            md_max: 50.0,
        };
        let b = Ranges {
            x_min: -1.0,
            x_max: 9.0,
            y_min: -3.0,
            y_max: 0.5,
            z_min: -2.0,
            z_max: 4.0,
            md_min: 10.0,
            md_max: 80.0,
        };

        let ab = merge_ranges(&a, &b);
        let ba = merge_ranges(&b, &a);
        assert_eq!(ab, ba);

        assert_eq!(ab.x_min, -5.0);
        assert_eq!(ab.x_max, 9.0);
        assert_eq!(ab.y_min, -3.0);
        assert_eq!(ab.y_max, 1.0);
        assert_eq!(ab.z_min, -10.0);
        assert_eq!(ab.z_max, 4.0);
        assert_eq!(ab.md_min, 0.0);
        assert_eq!(ab.md_max, 80.0);
    }
}
