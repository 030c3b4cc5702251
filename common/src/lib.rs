//! Common utilities for the size comparison viewer
//!
//! This crate provides the shared graphics setup, the orbital camera and the
//! small vertex/buffer helpers used by the viewer's renderer.

pub mod graphics;
pub mod camera;

pub use graphics::*;
pub use camera::*;

/// Physical constants used by the catalog
pub mod constants {
    /// Mean Earth radius in km, the unit of every catalog radius
    pub const EARTH_RADIUS_KM: f64 = 6371.0;

    /// Convert a radius in km to Earth radii
    pub fn km_to_earth_radii(km: f64) -> f64 {
        km / EARTH_RADIUS_KM
    }

    /// Convert a radius in Earth radii to km
    pub fn earth_radii_to_km(radius: f64) -> f64 {
        radius * EARTH_RADIUS_KM
    }
}
