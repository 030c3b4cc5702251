//! Scaling engine
//!
//! Turns two true radii into display radii, a center-to-center spacing and a
//! viewpoint distance. Proportions are exact while the size ratio is small,
//! relaxed in a middle band, and replaced by fixed sizes for extreme ratios
//! so neither body ever collapses below visibility.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Tunables for `compute_scaling`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScalingOptions {
    /// Vertical field of view
    pub field_of_view_degrees: f64,
    /// Headroom beyond a tight framing
    pub margin_factor: f64,
    /// Floor for the smaller body
    pub min_display_size: f64,
    /// Ceiling for the larger body
    pub max_display_size: Option<f64>,
    /// Multiplier on the sum of the display radii
    pub spacing_factor: f64,
    /// Display radius of the larger body
    pub target_large_size: f64,
    /// Smaller body's size once the ratio is extreme
    pub extreme_small_size: f64,
    /// Middle band floor, as a multiple of `min_display_size`
    pub compromise_floor_factor: f64,
    /// Ratios up to this keep exact proportions
    pub proportional_ratio_limit: f64,
    /// Ratios above this use fixed sizes
    pub extreme_ratio_threshold: f64,
    pub min_viewpoint_distance: f64,
}

impl Default for ScalingOptions {
    fn default() -> Self {
        Self {
            field_of_view_degrees: 75.0,
            margin_factor: 1.4,
            min_display_size: 0.3,
            max_display_size: Some(8.0),
            spacing_factor: 1.8,
            target_large_size: 6.0,
            extreme_small_size: 1.5,
            compromise_floor_factor: 1.5,
            proportional_ratio_limit: 10.0,
            extreme_ratio_threshold: 100.0,
            min_viewpoint_distance: 5.0,
        }
    }
}

impl ScalingOptions {
    /// Reject option sets that could break the floor/ceiling guarantees
    pub fn validate(&self) -> Result<()> {
        let finite = [
            self.field_of_view_degrees,
            self.margin_factor,
            self.min_display_size,
            self.spacing_factor,
            self.target_large_size,
            self.extreme_small_size,
            self.compromise_floor_factor,
            self.proportional_ratio_limit,
            self.extreme_ratio_threshold,
            self.min_viewpoint_distance,
        ]
        .iter()
        .chain(self.max_display_size.iter())
        .all(|v| v.is_finite());
        if !finite {
            return Err(invalid("scaling options must be finite"));
        }

        if self.field_of_view_degrees <= 0.0 || self.field_of_view_degrees >= 180.0 {
            return Err(invalid(format!(
                "field of view must be between 0 and 180 degrees, got {}",
                self.field_of_view_degrees
            )));
        }
        if self.margin_factor < 1.0 {
            return Err(invalid(format!(
                "margin factor must be at least 1, got {}",
                self.margin_factor
            )));
        }
        if self.spacing_factor < 1.0 {
            return Err(invalid(format!(
                "spacing factor must be at least 1, got {}",
                self.spacing_factor
            )));
        }
        if self.min_display_size <= 0.0 {
            return Err(invalid(format!(
                "minimum display size must be positive, got {}",
                self.min_display_size
            )));
        }
        if self.target_large_size < self.min_display_size {
            return Err(invalid(format!(
                "target size {} is below the minimum display size {}",
                self.target_large_size, self.min_display_size
            )));
        }
        if let Some(max) = self.max_display_size {
            if max < self.target_large_size {
                return Err(invalid(format!(
                    "maximum display size {} is below the target size {}",
                    max, self.target_large_size
                )));
            }
        }
        if self.extreme_small_size < self.min_display_size
            || self.extreme_small_size > self.target_large_size
        {
            return Err(invalid(format!(
                "extreme small size {} must lie between {} and {}",
                self.extreme_small_size, self.min_display_size, self.target_large_size
            )));
        }
        if self.compromise_floor_factor < 1.0
            || self.compromise_floor() > self.target_large_size
        {
            return Err(invalid(format!(
                "compromise floor factor {} must be at least 1 and keep the floor below the target size",
                self.compromise_floor_factor
            )));
        }
        if self.proportional_ratio_limit < 1.0
            || self.extreme_ratio_threshold < self.proportional_ratio_limit
        {
            return Err(invalid(format!(
                "ratio thresholds must satisfy 1 <= {} <= {}",
                self.proportional_ratio_limit, self.extreme_ratio_threshold
            )));
        }
        if self.min_viewpoint_distance <= 0.0 {
            return Err(invalid(format!(
                "minimum viewpoint distance must be positive, got {}",
                self.min_viewpoint_distance
            )));
        }

        Ok(())
    }

    /// Band a size ratio falls into
    pub fn band_for_ratio(&self, ratio: f64) -> RatioBand {
        if ratio <= self.proportional_ratio_limit {
            RatioBand::Proportional
        } else if ratio <= self.extreme_ratio_threshold {
            RatioBand::Compromise
        } else {
            RatioBand::Fixed
        }
    }

    fn compromise_floor(&self) -> f64 {
        self.min_display_size * self.compromise_floor_factor
    }

    fn half_fov_tan(&self) -> f64 {
        (self.field_of_view_degrees.to_radians() / 2.0).tan()
    }
}

/// How strictly a ratio keeps its proportions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RatioBand {
    /// Exact proportions, unless the floor forced a cap
    Proportional,
    /// Larger body at the target size, smaller one lifted to a raised floor
    Compromise,
    /// Fixed sizes regardless of the true ratio
    Fixed,
}

/// Output of the scaling engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingResult {
    pub display_radius_a: f64,
    pub display_radius_b: f64,
    /// Center-to-center distance
    pub spacing: f64,
    pub viewpoint_distance: f64,
    pub band: RatioBand,
    /// Larger true radius over the smaller one
    pub ratio: f64,
    /// Display radius over true radius, per body
    pub scale_factor_a: f64,
    pub scale_factor_b: f64,
    pub field_of_view_degrees: f64,
}

impl ScalingResult {
    /// X coordinates of A and B
    ///
    /// The pair is shifted so the composition, from A's far edge to B's far
    /// edge, is centered on the origin.
    pub fn centers(&self) -> (f64, f64) {
        let half = self.spacing / 2.0;
        let shift = (self.display_radius_a - self.display_radius_b) / 2.0;
        (shift - half, shift + half)
    }

    /// Width of the composition from A's far edge to B's far edge
    pub fn scene_width(&self) -> f64 {
        self.spacing + self.display_radius_a + self.display_radius_b
    }

    /// Height of the frustum slice at the viewpoint distance
    pub fn visible_extent(&self) -> f64 {
        2.0 * self.viewpoint_distance * (self.field_of_view_degrees.to_radians() / 2.0).tan()
    }

    /// Viewpoint distance for a viewport with the given width/height ratio
    ///
    /// The field of view is vertical, so a portrait viewport has to back
    /// off for the composition to fit horizontally.
    pub fn viewpoint_distance_for_aspect(&self, aspect: f64) -> f64 {
        if aspect.is_finite() && aspect > 0.0 && aspect < 1.0 {
            self.viewpoint_distance / aspect
        } else {
            self.viewpoint_distance
        }
    }

    /// True when the display sizes keep the true ratio exactly
    pub fn is_proportional(&self) -> bool {
        if self.band == RatioBand::Fixed || !self.ratio.is_finite() {
            return false;
        }
        let (large, small) = if self.display_radius_a >= self.display_radius_b {
            (self.display_radius_a, self.display_radius_b)
        } else {
            (self.display_radius_b, self.display_radius_a)
        };
        ((large / small) - self.ratio).abs() <= self.ratio * 1e-9
    }
}

/// Compute display radii, spacing and viewpoint distance for two radii
pub fn compute_scaling(
    radius_a: f64,
    radius_b: f64,
    options: &ScalingOptions,
) -> Result<ScalingResult> {
    check_radius("radius_a", radius_a)?;
    check_radius("radius_b", radius_b)?;
    options.validate()?;

    let a_is_large = radius_a >= radius_b;
    let (max_r, min_r) = if a_is_large {
        (radius_a, radius_b)
    } else {
        (radius_b, radius_a)
    };
    let ratio = max_r / min_r;
    let band = options.band_for_ratio(ratio);

    let target = options.target_large_size;
    let floor = options.min_display_size;
    let proportional = min_r / max_r * target;

    let (large, small) = match band {
        RatioBand::Proportional => {
            if proportional >= floor {
                (target, proportional)
            } else {
                // Grow the pair from the floor, then cap the larger body
                let mut large = ratio * floor;
                let mut small = floor;
                if let Some(max) = options.max_display_size {
                    if large > max {
                        small = (small * max / large).max(floor);
                        large = max;
                    }
                }
                (large, small)
            }
        }
        RatioBand::Compromise => (target, proportional.max(options.compromise_floor())),
        RatioBand::Fixed => (target, options.extreme_small_size),
    };

    let spacing = (large + small) * options.spacing_factor;
    let total_width = spacing + large + small;
    let viewpoint_distance = (total_width * options.margin_factor
        / (2.0 * options.half_fov_tan()))
    .max(options.min_viewpoint_distance);

    let (display_radius_a, display_radius_b) = if a_is_large {
        (large, small)
    } else {
        (small, large)
    };

    Ok(ScalingResult {
        display_radius_a,
        display_radius_b,
        spacing,
        viewpoint_distance,
        band,
        ratio,
        scale_factor_a: display_radius_a / radius_a,
        scale_factor_b: display_radius_b / radius_b,
        field_of_view_degrees: options.field_of_view_degrees,
    })
}

fn check_radius(name: &str, radius: f64) -> Result<()> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(invalid(format!("{name} must be positive and finite, got {radius}")))
    }
}

fn invalid(message: impl Into<String>) -> Error {
    Error::InvalidInput(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn defaults() -> ScalingOptions {
        ScalingOptions::default()
    }

    #[test]
    fn test_earth_moon() {
        let options = defaults();
        let r = compute_scaling(1.0, 0.273, &options).unwrap();

        assert_eq!(r.band, RatioBand::Proportional);
        assert_relative_eq!(r.display_radius_a, 6.0);
        assert_relative_eq!(r.display_radius_b, 0.273 * 6.0, epsilon = 1e-12);
        assert!(r.spacing > 0.0);
        assert!(r.visible_extent() >= r.scene_width());
        assert!(r.is_proportional());
    }

    #[test]
    fn test_sun_earth_fixed_band() {
        let options = defaults();
        let r = compute_scaling(109.0, 1.0, &options).unwrap();

        assert_eq!(r.band, RatioBand::Fixed);
        assert_relative_eq!(r.ratio, 109.0);
        assert_relative_eq!(r.display_radius_a, 6.0);
        assert_relative_eq!(r.display_radius_b, 1.5);
        assert!(r.display_radius_b >= options.min_display_size);
        assert!(r.display_radius_a <= options.max_display_size.unwrap());
        assert!(!r.is_proportional());
    }

    #[test]
    fn test_compromise_band_raises_floor() {
        let options = defaults();
        let r = compute_scaling(1.0, 0.02, &options).unwrap();
        assert_eq!(r.band, RatioBand::Compromise);
        assert_relative_eq!(r.display_radius_a, 6.0);
        assert_relative_eq!(r.display_radius_b, 0.45, epsilon = 1e-12);

        // Proportional size wins once it clears the raised floor
        let r = compute_scaling(1.0, 0.09, &options).unwrap();
        assert_eq!(r.band, RatioBand::Compromise);
        assert_relative_eq!(r.display_radius_b, 0.54, epsilon = 1e-12);
    }

    #[test]
    fn test_band_boundaries_are_inclusive() {
        let options = defaults();
        assert_eq!(options.band_for_ratio(10.0), RatioBand::Proportional);
        assert_eq!(options.band_for_ratio(10.5), RatioBand::Compromise);
        assert_eq!(options.band_for_ratio(100.0), RatioBand::Compromise);
        assert_eq!(options.band_for_ratio(100.5), RatioBand::Fixed);
    }

    #[test]
    fn test_proportional_floor_with_cap() {
        // Widen the low band so the floor kicks in before the compromise band
        let options = ScalingOptions {
            proportional_ratio_limit: 50.0,
            ..defaults()
        };
        let r = compute_scaling(40.0, 1.0, &options).unwrap();
        assert_eq!(r.band, RatioBand::Proportional);
        assert_relative_eq!(r.display_radius_a, 8.0);
        assert_relative_eq!(r.display_radius_b, 0.3);

        // Without a ceiling the floor derivation keeps the exact ratio
        let options = ScalingOptions {
            max_display_size: None,
            ..options
        };
        let r = compute_scaling(40.0, 1.0, &options).unwrap();
        assert_relative_eq!(r.display_radius_a, 12.0, epsilon = 1e-12);
        assert_relative_eq!(r.display_radius_b, 0.3);
        assert!(r.is_proportional());
    }

    #[test]
    fn test_symmetry() {
        let options = defaults();
        for (a, b) in [(1.0, 0.273), (109.0, 1.0), (1.0, 0.02), (3.0, 3.0)] {
            let ab = compute_scaling(a, b, &options).unwrap();
            let ba = compute_scaling(b, a, &options).unwrap();
            assert_eq!(ab.display_radius_a, ba.display_radius_b);
            assert_eq!(ab.display_radius_b, ba.display_radius_a);
            assert_eq!(ab.spacing, ba.spacing);
            assert_eq!(ab.viewpoint_distance, ba.viewpoint_distance);
        }
    }

    #[test]
    fn test_equal_radii() {
        let r = compute_scaling(2.5, 2.5, &defaults()).unwrap();
        assert_eq!(r.display_radius_a, 6.0);
        assert_eq!(r.display_radius_b, 6.0);
        assert_eq!(r.ratio, 1.0);
    }

    #[test]
    fn test_idempotent() {
        let options = defaults();
        let first = compute_scaling(11.21, 0.074, &options).unwrap();
        let second = compute_scaling(11.21, 0.074, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_monotonic_within_band() {
        let options = defaults();
        let mut previous: Option<(RatioBand, f64)> = None;
        for i in 1..=2000 {
            let b = i as f64 * 0.001;
            let r = compute_scaling(1.0, b, &options).unwrap();
            if let Some((band, display)) = previous {
                if band == r.band {
                    assert!(r.display_radius_b >= display, "b = {b}");
                }
            }
            previous = Some((r.band, r.display_radius_b));
        }
    }

    #[test]
    fn test_viewpoint_floor() {
        let options = ScalingOptions {
            target_large_size: 0.5,
            min_display_size: 0.1,
            extreme_small_size: 0.2,
            ..defaults()
        };
        let r = compute_scaling(1.0, 1.0, &options).unwrap();
        assert_eq!(r.viewpoint_distance, 5.0);
    }

    #[test]
    fn test_viewpoint_frames_scene() {
        let options = defaults();
        let r = compute_scaling(1.0, 0.5, &options).unwrap();
        let expected = r.scene_width() * options.margin_factor
            / (2.0 * (options.field_of_view_degrees.to_radians() / 2.0).tan());
        assert_relative_eq!(r.viewpoint_distance, expected.max(5.0), epsilon = 1e-12);
        assert_relative_eq!(r.visible_extent(), r.scene_width() * 1.4, epsilon = 1e-9);
    }

    #[test]
    fn test_portrait_aspect_backs_off() {
        let r = compute_scaling(1.0, 0.5, &defaults()).unwrap();
        assert_eq!(r.viewpoint_distance_for_aspect(1.5), r.viewpoint_distance);
        assert_relative_eq!(
            r.viewpoint_distance_for_aspect(0.5),
            r.viewpoint_distance * 2.0
        );
        assert_eq!(r.viewpoint_distance_for_aspect(0.0), r.viewpoint_distance);
    }

    #[test]
    fn test_centers_balance_the_composition() {
        for (a, b) in [(1.0, 0.273), (0.273, 1.0), (5.0, 1.0), (2.0, 2.0)] {
            let r = compute_scaling(a, b, &defaults()).unwrap();
            let (xa, xb) = r.centers();
            assert_relative_eq!(xb - xa, r.spacing, epsilon = 1e-12);
            assert_relative_eq!(xa - r.display_radius_a, -r.scene_width() / 2.0, epsilon = 1e-12);
            assert_relative_eq!(xb + r.display_radius_b, r.scene_width() / 2.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_overflowing_ratio_is_not_proportional() {
        let r = compute_scaling(1e300, 1e-300, &defaults()).unwrap();
        assert!(r.ratio.is_infinite());
        assert_eq!(r.band, RatioBand::Fixed);
        assert!(!r.is_proportional());
    }

    #[test]
    fn test_invalid_radius() {
        let options = defaults();
        for (a, b) in [(0.0, 5.0), (-1.0, 5.0), (5.0, f64::NAN), (f64::INFINITY, 1.0)] {
            assert!(matches!(
                compute_scaling(a, b, &options),
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_invalid_options() {
        let cases = [
            ScalingOptions { field_of_view_degrees: 0.0, ..defaults() },
            ScalingOptions { field_of_view_degrees: 180.0, ..defaults() },
            ScalingOptions { margin_factor: 0.9, ..defaults() },
            ScalingOptions { spacing_factor: 0.5, ..defaults() },
            ScalingOptions { min_display_size: 0.0, ..defaults() },
            ScalingOptions { max_display_size: Some(5.0), ..defaults() },
            ScalingOptions { extreme_small_size: 7.0, ..defaults() },
            ScalingOptions { compromise_floor_factor: 30.0, ..defaults() },
            ScalingOptions { extreme_ratio_threshold: 5.0, ..defaults() },
            ScalingOptions { min_viewpoint_distance: 0.0, ..defaults() },
            ScalingOptions { margin_factor: f64::NAN, ..defaults() },
            ScalingOptions { max_display_size: Some(f64::INFINITY), ..defaults() },
        ];
        for options in cases {
            assert!(
                matches!(options.validate(), Err(Error::InvalidInput(_))),
                "{options:?}"
            );
            assert!(compute_scaling(1.0, 2.0, &options).is_err());
        }
        assert!(defaults().validate().is_ok());
    }

    #[test]
    fn test_scale_factors() {
        let r = compute_scaling(109.0, 1.0, &defaults()).unwrap();
        assert_relative_eq!(r.scale_factor_a, 6.0 / 109.0);
        assert_relative_eq!(r.scale_factor_b, 1.5);
    }
}
