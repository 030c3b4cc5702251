//! Immutable catalog of celestial bodies
//!
//! Radii are relative to Earth (Earth = 1). The catalog is built once at
//! start-up, validated, and only ever lent out by shared reference.

mod builtin;

use std::collections::HashMap;

use crate::color::Rgb;
use crate::error::{Error, Result};

/// Celestial body types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Star,
    Planet,
    DwarfPlanet,
    Moon,
    Asteroid,
    StellarRemnant,
    BlackHole,
    Galaxy,
}

impl BodyKind {
    /// Dropdown group order
    pub const ALL: [BodyKind; 8] = [
        BodyKind::Planet,
        BodyKind::DwarfPlanet,
        BodyKind::Moon,
        BodyKind::Asteroid,
        BodyKind::Star,
        BodyKind::StellarRemnant,
        BodyKind::BlackHole,
        BodyKind::Galaxy,
    ];

    /// Heading used when grouping bodies for selection
    pub fn group_label(self) -> &'static str {
        match self {
            BodyKind::Star => "Stars",
            BodyKind::Planet => "Solar System Planets",
            BodyKind::DwarfPlanet => "Dwarf Planets",
            BodyKind::Moon => "Moons",
            BodyKind::Asteroid => "Asteroids",
            BodyKind::StellarRemnant => "Stellar Remnants",
            BodyKind::BlackHole => "Black Holes",
            BodyKind::Galaxy => "Galaxies",
        }
    }

    /// Stars and galaxies glow instead of reflecting light
    pub fn is_self_luminous(self) -> bool {
        matches!(self, BodyKind::Star | BodyKind::StellarRemnant | BodyKind::Galaxy)
    }

    /// Bodies that get a faint atmosphere halo in the 3D view
    pub fn reflects_light(self) -> bool {
        matches!(
            self,
            BodyKind::Planet | BodyKind::DwarfPlanet | BodyKind::Moon | BodyKind::Asteroid
        )
    }
}

/// Free-form descriptive metadata, shown in the details window
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BodyDetails {
    pub classification: String,
    pub mass: String,
    pub temperature: String,
    pub age: String,
    pub composition: String,
    pub facts: Vec<String>,
}

impl BodyDetails {
    pub fn new(
        classification: &str,
        mass: &str,
        temperature: &str,
        age: &str,
        composition: &str,
        facts: &[&str],
    ) -> Self {
        Self {
            classification: classification.to_string(),
            mass: mass.to_string(),
            temperature: temperature.to_string(),
            age: age.to_string(),
            composition: composition.to_string(),
            facts: facts.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub id: String,
    pub name: String,
    pub kind: BodyKind,
    /// Radius in Earth radii
    pub radius: f64,
    pub color: Rgb,
    pub description: String,
    pub details: BodyDetails,
    /// Preview image file name inside the assets directory
    pub image: Option<String>,
}

impl CelestialBody {
    pub fn new(id: &str, name: &str, kind: BodyKind, radius: f64, color: Rgb) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            radius,
            color,
            description: String::new(),
            details: BodyDetails::default(),
            image: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_details(mut self, details: BodyDetails) -> Self {
        self.details = details;
        self
    }

    pub fn with_image(mut self, file_name: &str) -> Self {
        self.image = Some(file_name.to_string());
        self
    }

    /// Radius in km
    pub fn radius_km(&self) -> f64 {
        common::constants::earth_radii_to_km(self.radius)
    }
}

/// Lookup table of every known body, in insertion order
#[derive(Debug, Clone)]
pub struct Catalog {
    bodies: Vec<CelestialBody>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Validate and index `bodies`
    pub fn new(bodies: Vec<CelestialBody>) -> Result<Self> {
        let mut index = HashMap::with_capacity(bodies.len());

        for (i, body) in bodies.iter().enumerate() {
            if body.id.is_empty() {
                return Err(Error::InvalidInput(format!(
                    "body '{}' has an empty id",
                    body.name
                )));
            }
            if !body.radius.is_finite() || body.radius <= 0.0 {
                return Err(Error::InvalidInput(format!(
                    "body '{}' has invalid radius {}",
                    body.id, body.radius
                )));
            }
            if index.insert(body.id.clone(), i).is_some() {
                return Err(Error::InvalidInput(format!(
                    "duplicate body id '{}'",
                    body.id
                )));
            }
        }

        Ok(Self { bodies, index })
    }

    /// The bundled data set
    pub fn builtin() -> Result<Self> {
        Self::new(builtin::bodies())
    }

    pub fn get(&self, id: &str) -> Result<&CelestialBody> {
        self.index
            .get(id)
            .map(|&i| &self.bodies[i])
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Every id in catalog order; each call starts a fresh pass
    pub fn list_ids(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.bodies.iter().map(|b| b.id.as_str())
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = &CelestialBody> + '_ {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Bodies grouped by kind in `BodyKind::ALL` order, skipping empty groups
    pub fn grouped(&self) -> Vec<(BodyKind, Vec<&CelestialBody>)> {
        BodyKind::ALL
            .iter()
            .filter_map(|&kind| {
                let members: Vec<&CelestialBody> =
                    self.bodies.iter().filter(|b| b.kind == kind).collect();
                (!members.is_empty()).then_some((kind, members))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(id: &str, radius: f64) -> CelestialBody {
        CelestialBody::new(id, id, BodyKind::Planet, radius, Rgb::from_hex(0xFFFFFF))
    }

    #[test]
    fn test_get_known_body() {
        let catalog = Catalog::builtin().unwrap();
        let earth = catalog.get("earth").unwrap();
        assert_eq!(earth.name, "Earth");
        assert_eq!(earth.radius, 1.0);
        assert_eq!(earth.kind, BodyKind::Planet);
    }

    #[test]
    fn test_get_unknown_body() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.get("not-a-real-planet"),
            Err(Error::NotFound("not-a-real-planet".to_string()))
        );
    }

    #[test]
    fn test_list_ids_is_stable_and_restartable() {
        let catalog = Catalog::builtin().unwrap();
        let first: Vec<&str> = catalog.list_ids().collect();
        let second: Vec<&str> = catalog.list_ids().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), catalog.len());
        assert_eq!(first[0], "sun");
    }

    #[test]
    fn test_builtin_invariants() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.len() >= 30);
        for body in catalog.iter() {
            assert!(body.radius > 0.0 && body.radius.is_finite(), "{}", body.id);
            assert!(!body.name.is_empty(), "{}", body.id);
            assert!(!body.description.is_empty(), "{}", body.id);
            assert!(!body.details.classification.is_empty(), "{}", body.id);
            assert!(!body.details.facts.is_empty(), "{}", body.id);
        }
    }

    #[test]
    fn test_builtin_radius_range() {
        let catalog = Catalog::builtin().unwrap();
        let min = catalog.iter().map(|b| b.radius).fold(f64::INFINITY, f64::min);
        let max = catalog.iter().map(|b| b.radius).fold(0.0, f64::max);
        assert!(min < 0.001);
        assert!(max > 1.0e13);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![body("a", 1.0), body("a", 2.0)]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_radius_rejected() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Catalog::new(vec![body("a", radius)]);
            assert!(matches!(result, Err(Error::InvalidInput(_))), "{radius}");
        }
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = Catalog::new(vec![body("", 1.0)]);
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_grouped_follows_kind_order() {
        let catalog = Catalog::builtin().unwrap();
        let groups = catalog.grouped();

        let kinds: Vec<BodyKind> = groups.iter().map(|(k, _)| *k).collect();
        let expected: Vec<BodyKind> = BodyKind::ALL
            .iter()
            .copied()
            .filter(|k| kinds.contains(k))
            .collect();
        assert_eq!(kinds, expected);

        let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(total, catalog.len());

        let (kind, planets) = &groups[0];
        assert_eq!(*kind, BodyKind::Planet);
        let names: Vec<&str> = planets.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
    }

    #[test]
    fn test_radius_km() {
        let catalog = Catalog::builtin().unwrap();
        let earth = catalog.get("earth").unwrap();
        assert_eq!(earth.radius_km(), 6371.0);
    }
}
