//! The selected pair of bodies and its derived comparison

use crate::catalog::Catalog;
use crate::comparison::size_comparison_text;
use crate::error::Result;
use crate::scaling::{compute_scaling, ScalingOptions, ScalingResult};

/// Ids of the two bodies being compared
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SelectionPair {
    pub first: String,
    pub second: String,
}

impl SelectionPair {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    pub fn swapped(&self) -> Self {
        Self::new(self.second.clone(), self.first.clone())
    }
}

/// Everything the views need for one selection
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub pair: SelectionPair,
    pub scaling: ScalingResult,
    pub summary: String,
}

impl Comparison {
    pub fn compute(catalog: &Catalog, pair: &SelectionPair, options: &ScalingOptions) -> Result<Self> {
        let first = catalog.get(&pair.first)?;
        let second = catalog.get(&pair.second)?;
        let scaling = compute_scaling(first.radius, second.radius, options)?;

        log::debug!(
            "{} vs {}: ratio {:.3}, {:?} band, display {:.3} / {:.3}, distance {:.2}",
            first.id,
            second.id,
            scaling.ratio,
            scaling.band,
            scaling.display_radius_a,
            scaling.display_radius_b,
            scaling.viewpoint_distance
        );

        Ok(Self {
            pair: pair.clone(),
            scaling,
            summary: size_comparison_text(first, second),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_compute_default_pair() {
        let catalog = Catalog::builtin().unwrap();
        let pair = SelectionPair::new("earth", "mars");
        let comparison = Comparison::compute(&catalog, &pair, &ScalingOptions::default()).unwrap();

        assert_eq!(comparison.pair, pair);
        assert_eq!(comparison.summary, "Earth is 1.9 times larger");
        assert_eq!(comparison.scaling.display_radius_a, 6.0);
    }

    #[test]
    fn test_swapped_mirrors_scaling() {
        let catalog = Catalog::builtin().unwrap();
        let options = ScalingOptions::default();
        let pair = SelectionPair::new("jupiter", "io");

        let forward = Comparison::compute(&catalog, &pair, &options).unwrap();
        let backward = Comparison::compute(&catalog, &pair.swapped(), &options).unwrap();

        assert_eq!(pair.swapped().swapped(), pair);
        assert_eq!(forward.scaling.display_radius_a, backward.scaling.display_radius_b);
        assert_eq!(forward.summary, backward.summary);
    }

    #[test]
    fn test_unknown_id() {
        let catalog = Catalog::builtin().unwrap();
        let pair = SelectionPair::new("earth", "not-a-real-planet");
        assert_eq!(
            Comparison::compute(&catalog, &pair, &ScalingOptions::default()),
            Err(Error::NotFound("not-a-real-planet".to_string()))
        );
    }
}
