//! Human-readable size comparisons

use crate::catalog::CelestialBody;

/// Sentence naming the larger body and how many times larger it is
pub fn size_comparison_text(a: &CelestialBody, b: &CelestialBody) -> String {
    if a.radius == b.radius {
        return format!("{} and {} are the same size", a.name, b.name);
    }

    let (larger, ratio) = if a.radius > b.radius {
        (a, a.radius / b.radius)
    } else {
        (b, b.radius / a.radius)
    };

    format!("{} is {} times larger", larger.name, format_ratio(ratio))
}

fn format_ratio(ratio: f64) -> String {
    if ratio > 1000.0 {
        format!("{:.1}k", ratio / 1000.0)
    } else if ratio > 100.0 {
        format!("{}", ratio.round())
    } else {
        format!("{:.1}", ratio)
    }
}

/// Radius relative to Earth, e.g. `"11.21x Earth"`
///
/// Values of a million Earth radii and up switch to scientific notation.
pub fn format_relative_radius(radius: f64, decimals: usize) -> String {
    if radius >= 1.0e6 {
        format!("{:.2e}x Earth", radius)
    } else {
        format!("{:.*}x Earth", decimals, radius)
    }
}

/// Whole kilometres with thousands separators, e.g. `"69,911 km"`
pub fn format_radius_km(km: f64) -> String {
    let digits = format!("{:.0}", km.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if km < 0.0 { "-" } else { "" };
    format!("{sign}{grouped} km")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BodyKind, Catalog};
    use crate::color::Rgb;

    fn body(name: &str, radius: f64) -> CelestialBody {
        CelestialBody::new(name, name, BodyKind::Planet, radius, Rgb::from_hex(0x808080))
    }

    #[test]
    fn test_small_ratio() {
        let catalog = Catalog::builtin().unwrap();
        let earth = catalog.get("earth").unwrap();
        let moon = catalog.get("moon").unwrap();
        assert_eq!(size_comparison_text(earth, moon), "Earth is 3.7 times larger");
        assert_eq!(size_comparison_text(moon, earth), "Earth is 3.7 times larger");
    }

    #[test]
    fn test_rounded_ratio() {
        let catalog = Catalog::builtin().unwrap();
        let sun = catalog.get("sun").unwrap();
        let earth = catalog.get("earth").unwrap();
        assert_eq!(size_comparison_text(earth, sun), "Sun is 109 times larger");
    }

    #[test]
    fn test_thousands_ratio() {
        let a = body("Big", 2500.0);
        let b = body("Small", 1.0);
        assert_eq!(size_comparison_text(&a, &b), "Big is 2.5k times larger");
    }

    #[test]
    fn test_same_size() {
        let a = body("A", 2.0);
        let b = body("B", 2.0);
        assert_eq!(size_comparison_text(&a, &b), "A and B are the same size");
    }

    #[test]
    fn test_relative_radius() {
        assert_eq!(format_relative_radius(11.21, 2), "11.21x Earth");
        assert_eq!(format_relative_radius(0.00094, 3), "0.001x Earth");
        assert_eq!(format_relative_radius(6.28e6, 2), "6.28e6x Earth");
    }

    #[test]
    fn test_radius_km() {
        assert_eq!(format_radius_km(6371.0), "6,371 km");
        assert_eq!(format_radius_km(69_911.4), "69,911 km");
        assert_eq!(format_radius_km(256.0), "256 km");
        assert_eq!(format_radius_km(1_188_000_000.0), "1,188,000,000 km");
    }
}
