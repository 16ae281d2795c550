//! Data model for the Welltrace engine
//!
//! Wells and collectors are supplied by the caller per render and are
//! treated as immutable snapshots; ranges and view settings are derived
//! values owned by the engine.

mod model;
mod view;

pub use model::{wells_from_raw, CollectorRadial, WellPoint, Wells};
pub use view::{
    CollectorMode, ProjectionPlane, Ranges, SliceMode, SliceSettings, ViewPreset,
};
