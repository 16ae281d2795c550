//! # Welltrace Core
//!
//! Core types and utilities for the Welltrace well-trajectory
//! visualization engine. Provides the data model (wells, collectors,
//! ranges), input validation, and the shared numeric constants used by
//! the geometry and scene-building layers.

pub mod constants;
pub mod data;
pub mod error;

pub use data::{
    wells_from_raw, CollectorMode, CollectorRadial, ProjectionPlane, Ranges, SliceMode,
    SliceSettings, ViewPreset, WellPoint, Wells,
};

pub use error::{Error, Result};
