//! Pixel layout for the flat 2D view

use crate::error::{Error, Result};
use crate::scaling::ScalingResult;

/// A circle in canvas pixels, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasCircle {
    pub center: [f64; 2],
    pub radius: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasLayout {
    pub first: CanvasCircle,
    pub second: CanvasCircle,
    pub pixels_per_unit: f64,
}

/// Map a scaling result onto a `width` x `height` canvas
///
/// The shorter canvas side spans the visible extent, so the same margin
/// that frames the 3D scene keeps both circles inside the canvas.
pub fn layout(result: &ScalingResult, width: f64, height: f64) -> Result<CanvasLayout> {
    if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
        return Err(Error::InvalidInput(format!(
            "canvas size must be positive, got {width}x{height}"
        )));
    }

    let pixels_per_unit = width.min(height) / result.visible_extent();
    let mid = [width / 2.0, height / 2.0];
    let (xa, xb) = result.centers();

    Ok(CanvasLayout {
        first: CanvasCircle {
            center: [mid[0] + xa * pixels_per_unit, mid[1]],
            radius: result.display_radius_a * pixels_per_unit,
        },
        second: CanvasCircle {
            center: [mid[0] + xb * pixels_per_unit, mid[1]],
            radius: result.display_radius_b * pixels_per_unit,
        },
        pixels_per_unit,
    })
}
