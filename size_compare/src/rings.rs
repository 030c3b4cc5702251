//! Planetary rings and black hole accretion disks

use std::f32::consts::{FRAC_PI_2, TAU};

use common::Vertex;
use glam::{Quat, Vec3};

use crate::catalog::{BodyKind, CelestialBody};
use crate::color::Rgb;

/// Ring planes are tipped toward the default viewpoint so they are not edge-on
const VIEW_INCLINATION: f32 = 0.3;
/// Extra twist for bands flagged `tilted`
const BAND_TILT: f32 = 0.35;

/// One flat annulus, radii in scene units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingBand {
    pub inner: f64,
    pub outer: f64,
    pub color: Rgb,
    pub opacity: f32,
    /// Rotated out of the main ring plane
    pub tilted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RingSystem {
    /// Main ring first
    pub bands: Vec<RingBand>,
    pub segments: u32,
    /// Ring plane faces the viewer (Uranus)
    pub sideways: bool,
}

impl RingSystem {
    fn new(display_radius: f64, segments: u32, sideways: bool, bands: &[(f64, f64, u32, f32, bool)]) -> Self {
        Self {
            bands: bands
                .iter()
                .map(|&(inner, outer, hex, opacity, tilted)| RingBand {
                    inner: inner * display_radius,
                    outer: outer * display_radius,
                    color: Rgb::from_hex(hex),
                    opacity,
                    tilted,
                })
                .collect(),
            segments,
            sideways,
        }
    }

    /// Orientation of a band's plane; bands are built in the XZ plane
    pub fn band_rotation(&self, band: &RingBand) -> Quat {
        let plane = if self.sideways {
            Quat::from_rotation_x(FRAC_PI_2)
        } else {
            Quat::from_rotation_x(VIEW_INCLINATION)
        };
        if band.tilted {
            plane * Quat::from_rotation_y(BAND_TILT)
        } else {
            plane
        }
    }

    /// Triangle list for every band around `center`, colors in linear space
    pub fn vertices(&self, center: Vec3) -> Vec<Vertex> {
        let segments = self.segments.max(3);
        let mut vertices = Vec::with_capacity(self.bands.len() * segments as usize * 6);

        for band in &self.bands {
            let rotation = self.band_rotation(band);
            let color = band.color.to_linear_rgba(band.opacity);
            let inner = band.inner as f32;
            let outer = band.outer as f32;

            let point = |radius: f32, i: u32| {
                let angle = i as f32 / segments as f32 * TAU;
                let local = Vec3::new(radius * angle.cos(), 0.0, radius * angle.sin());
                Vertex::new((center + rotation * local).to_array(), color)
            };

            for i in 0..segments {
                let (a, b) = (point(inner, i), point(outer, i));
                let (c, d) = (point(outer, i + 1), point(inner, i + 1));
                vertices.extend_from_slice(&[a, b, c, a, c, d]);
            }
        }

        vertices
    }
}

/// Rings of a body at the given display radius, if it has any
pub fn ring_system(body: &CelestialBody, display_radius: f64) -> Option<RingSystem> {
    if body.kind == BodyKind::BlackHole {
        return Some(RingSystem::new(
            display_radius,
            32,
            false,
            &[(1.2, 2.0, 0xFF6600, 0.3, false)],
        ));
    }

    let system = match body.id.as_str() {
        "saturn" => RingSystem::new(
            display_radius,
            64,
            false,
            &[
                (1.2, 2.3, 0xD4AF37, 0.6, false),
                (1.4, 1.6, 0xF5DEB3, 0.4, false),
                (1.7, 1.9, 0xDDDDDD, 0.3, false),
                (2.0, 2.2, 0xC0C0C0, 0.2, false),
            ],
        ),
        "jupiter" => RingSystem::new(display_radius, 32, false, &[(1.1, 1.4, 0x8B4513, 0.2, false)]),
        "uranus" => RingSystem::new(
            display_radius,
            32,
            true,
            &[
                (1.3, 1.8, 0x4FD0E7, 0.3, false),
                (1.15, 1.25, 0x87CEEB, 0.15, true),
                (1.35, 1.45, 0xB0E0E6, 0.1, true),
            ],
        ),
        "neptune" => RingSystem::new(display_radius, 32, false, &[(1.2, 1.6, 0x4B70DD, 0.25, false)]),
        _ => return None,
    };

    Some(system)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use approx::assert_relative_eq;

    #[test]
    fn test_saturn_rings() {
        let catalog = Catalog::builtin().unwrap();
        let rings = ring_system(catalog.get("saturn").unwrap(), 6.0).unwrap();

        assert_eq!(rings.segments, 64);
        assert_eq!(rings.bands.len(), 4);
        assert_relative_eq!(rings.bands[0].inner, 7.2, epsilon = 1e-12);
        assert_relative_eq!(rings.bands[0].outer, 13.8, epsilon = 1e-12);
        assert_eq!(rings.bands[0].color, Rgb::from_hex(0xD4AF37));
        assert!(!rings.sideways);
    }

    #[test]
    fn test_uranus_is_sideways_with_tilted_bands() {
        let catalog = Catalog::builtin().unwrap();
        let rings = ring_system(catalog.get("uranus").unwrap(), 1.0).unwrap();

        assert!(rings.sideways);
        assert_eq!(rings.bands.iter().filter(|b| b.tilted).count(), 2);
    }

    #[test]
    fn test_black_holes_get_accretion_disk() {
        let catalog = Catalog::builtin().unwrap();
        for id in ["sagittarius_a", "ton_618"] {
            let disk = ring_system(catalog.get(id).unwrap(), 2.0).unwrap();
            assert_eq!(disk.bands.len(), 1);
            assert_relative_eq!(disk.bands[0].inner, 2.4);
            assert_relative_eq!(disk.bands[0].outer, 4.0);
            assert_relative_eq!(disk.bands[0].opacity, 0.3);
        }
    }

    #[test]
    fn test_ringless_bodies() {
        let catalog = Catalog::builtin().unwrap();
        for id in ["earth", "sun", "moon", "ceres", "milky_way"] {
            assert!(ring_system(catalog.get(id).unwrap(), 1.0).is_none(), "{id}");
        }
    }

    #[test]
    fn test_vertices_stay_within_band() {
        let catalog = Catalog::builtin().unwrap();
        let rings = ring_system(catalog.get("neptune").unwrap(), 2.0).unwrap();
        let center = Vec3::new(-5.0, 0.0, 0.0);
        let vertices = rings.vertices(center);

        assert_eq!(vertices.len(), 32 * 6);
        for v in &vertices {
            let d = (Vec3::from_array(v.position) - center).length();
            assert!(d >= 2.4 - 1e-4 && d <= 3.2 + 1e-4, "{d}");
        }
    }

    #[test]
    fn test_sideways_plane_faces_viewer() {
        let catalog = Catalog::builtin().unwrap();
        let rings = ring_system(catalog.get("uranus").unwrap(), 1.0).unwrap();
        let main = rings.band_rotation(&rings.bands[0]);
        // XZ plane normal becomes the viewing axis
        let normal = main * Vec3::Y;
        assert_relative_eq!(normal.z.abs(), 1.0, epsilon = 1e-6);
    }
}
