//! Celestial size comparison
//!
//! The catalog of bodies, the scaling engine that turns radii spanning
//! many orders of magnitude into display sizes, and the pieces the viewer
//! builds on top of them.

pub mod canvas;
pub mod catalog;
pub mod color;
pub mod comparison;
pub mod config;
pub mod error;
pub mod prefetch;
pub mod rings;
pub mod scaling;
pub mod selection;

pub use catalog::{BodyDetails, BodyKind, Catalog, CelestialBody};
pub use color::Rgb;
pub use config::{ViewMode, ViewerConfig};
pub use error::{Error, Result};
pub use scaling::{compute_scaling, RatioBand, ScalingOptions, ScalingResult};
pub use selection::{Comparison, SelectionPair};
