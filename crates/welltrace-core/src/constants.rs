//! Shared numeric constants
//!
//! The geometric and interaction contract of the engine lives here so
//! that the bounds calculator, collector geometry, scene builders, and
//! camera controller all agree on the same values.

/// Symmetric padding fraction applied to the X and Y axis spans.
pub const RANGE_PAD_XY: f64 = 0.08;

/// Symmetric padding fraction applied to the Z axis span.
pub const RANGE_PAD_Z: f64 = 0.12;

/// Minimum axis span used when padding, so coincident points never
/// produce a zero (or negative) span.
pub const MIN_SPAN: f64 = 1e-9;

/// Floor applied to collector radii before division in the
/// containment test.
pub const RADIUS_EPSILON: f64 = 1e-9;

/// Default lobe-deformation amplitude when a collector omits it.
pub const DEFAULT_LOBE_AMP: f64 = 0.22;

/// Default angular frequency of the primary lobe harmonic (u axis).
pub const DEFAULT_LOBE_FREQ_U: f64 = 3.0;

/// Default angular frequency of the primary lobe harmonic (v axis).
pub const DEFAULT_LOBE_FREQ_V: f64 = 2.0;

/// Default superellipsoid shape exponent. Lower values square the
/// surface off, values near 1.0 keep it round.
pub const DEFAULT_POWER: f64 = 0.62;

/// Fixed weight of the first higher-frequency blob harmonic.
pub const BLOB_HARMONIC_A: f64 = 0.12;

/// Fixed weight of the second higher-frequency blob harmonic.
pub const BLOB_HARMONIC_B: f64 = 0.08;

/// Lower bound on the radial modulation, preventing surface
/// self-intersection when the harmonics interfere destructively.
pub const BLOB_RADIAL_FLOOR: f64 = 0.55;

/// Extra inflation headroom used when expanding ranges to cover blob
/// surfaces, on top of the lobe amplitude and the two fixed harmonics.
pub const BLOB_HEADROOM: f64 = 0.10;

/// Parametric sampling step for the blob surface grid (radians).
pub const SURFACE_STEP: f64 = 0.11;

/// Number of segments in the blob equator outline.
pub const EQUATOR_SEGMENTS: usize = 120;

/// Number of segments in a 2D projected collector ellipse.
pub const ELLIPSE_SEGMENTS: usize = 96;

/// Grid subdivisions per side of the tessellated slice plane.
pub const SLICE_PLANE_STEPS: usize = 10;

/// Orbit drag sensitivity in degrees of rotation per pixel moved.
pub const DRAG_SENSITIVITY: f64 = 0.25;

/// Elevation clamp, keeping the camera off the poles.
pub const ALPHA_MIN: f64 = 0.1;
/// Elevation clamp, keeping the camera off the poles.
pub const ALPHA_MAX: f64 = 179.9;

/// Multiplicative wheel-zoom factor per unit of wheel delta.
pub const WHEEL_ZOOM_FACTOR: f64 = 0.0015;

/// Camera distance clamp.
pub const DISTANCE_MIN: f64 = 70.0;
/// Camera distance clamp.
pub const DISTANCE_MAX: f64 = 900.0;

/// Default camera elevation in degrees.
pub const DEFAULT_ALPHA: f64 = 35.0;
/// Default camera azimuth in degrees.
pub const DEFAULT_BETA: f64 = 25.0;
/// Default camera distance.
pub const DEFAULT_DISTANCE: f64 = 250.0;

/// Distance multiplier used when fitting the camera to data bounds.
pub const FIT_DISTANCE_FACTOR: f64 = 1.35;
/// Minimum fitted camera distance.
pub const FIT_DISTANCE_MIN: f64 = 120.0;

/// Measured-depth color scale, from shallow to deep.
pub const MD_PALETTE: [&str; 4] = ["#1c7ed6", "#37b24d", "#f59f00", "#f03e3e"];

/// Color of the surface-to-bottom stick markers.
pub const STICK_COLOR: &str = "#2563eb";

/// Color of the translucent Z slice plane.
pub const SLICE_PLANE_COLOR: &str = "#111827";

/// Opacity of the translucent Z slice plane.
pub const SLICE_PLANE_OPACITY: f64 = 0.08;
