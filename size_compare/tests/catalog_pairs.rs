// Scaling properties checked over every pair of bundled bodies.

use size_compare::canvas;
use size_compare::{compute_scaling, Catalog, Comparison, Error, ScalingOptions, SelectionPair};

fn pairs(catalog: &Catalog) -> Vec<(&str, &str)> {
    let ids: Vec<&str> = catalog.list_ids().collect();
    ids.iter()
        .flat_map(|a| ids.iter().map(move |b| (*a, *b)))
        .collect()
}

#[test]
fn every_pair_is_visible_and_framed() {
    let catalog = Catalog::builtin().unwrap();
    let options = ScalingOptions::default();
    let max = options.max_display_size.unwrap();

    for (a, b) in pairs(&catalog) {
        let ra = catalog.get(a).unwrap().radius;
        let rb = catalog.get(b).unwrap().radius;
        let r = compute_scaling(ra, rb, &options).unwrap();

        assert!(r.display_radius_a > 0.0 && r.display_radius_b > 0.0, "{a}/{b}");
        assert!(r.viewpoint_distance > 0.0, "{a}/{b}");
        assert!(
            r.display_radius_a.min(r.display_radius_b) >= options.min_display_size,
            "{a}/{b}: floor"
        );
        assert!(r.display_radius_a.max(r.display_radius_b) <= max, "{a}/{b}: ceiling");
        assert!(
            r.spacing >= r.display_radius_a + r.display_radius_b,
            "{a}/{b}: overlap"
        );
        assert!(r.visible_extent() >= r.scene_width(), "{a}/{b}: framing");
    }
}

#[test]
fn every_pair_is_symmetric_and_idempotent() {
    let catalog = Catalog::builtin().unwrap();
    let options = ScalingOptions::default();

    for (a, b) in pairs(&catalog) {
        let ra = catalog.get(a).unwrap().radius;
        let rb = catalog.get(b).unwrap().radius;

        let ab = compute_scaling(ra, rb, &options).unwrap();
        let ba = compute_scaling(rb, ra, &options).unwrap();
        assert_eq!(ab.display_radius_a, ba.display_radius_b, "{a}/{b}");
        assert_eq!(ab.display_radius_b, ba.display_radius_a, "{a}/{b}");
        assert_eq!(ab.viewpoint_distance, ba.viewpoint_distance, "{a}/{b}");

        assert_eq!(ab, compute_scaling(ra, rb, &options).unwrap(), "{a}/{b}");
    }
}

#[test]
fn display_size_grows_with_radius_within_a_band() {
    let catalog = Catalog::builtin().unwrap();
    let options = ScalingOptions::default();

    let mut radii: Vec<f64> = catalog.iter().map(|b| b.radius).collect();
    radii.sort_by(|x, y| x.total_cmp(y));

    for fixed in catalog.iter() {
        let mut previous = None;
        for &radius in &radii {
            let r = compute_scaling(fixed.radius, radius, &options).unwrap();
            if let Some((band, display)) = previous {
                if band == r.band {
                    assert!(r.display_radius_b >= display, "{} vs {}", fixed.id, radius);
                }
            }
            previous = Some((r.band, r.display_radius_b));
        }
    }
}

#[test]
fn every_pair_fits_the_canvas() {
    let catalog = Catalog::builtin().unwrap();
    let options = ScalingOptions::default();

    for (a, b) in pairs(&catalog) {
        let comparison =
            Comparison::compute(&catalog, &SelectionPair::new(a, b), &options).unwrap();
        let layout = canvas::layout(&comparison.scaling, 1200.0, 500.0).unwrap();

        for circle in [layout.first, layout.second] {
            assert!(circle.center[0] - circle.radius >= 0.0, "{a}/{b}");
            assert!(circle.center[0] + circle.radius <= 1200.0, "{a}/{b}");
            assert!(circle.center[1] - circle.radius >= 0.0, "{a}/{b}");
            assert!(circle.center[1] + circle.radius <= 500.0, "{a}/{b}");
        }
        assert!(!comparison.summary.is_empty());
    }
}

#[test]
fn every_pair_fits_the_canvas_without_margin() {
    let catalog = Catalog::builtin().unwrap();
    let options = ScalingOptions {
        margin_factor: 1.0,
        spacing_factor: 1.0,
        ..ScalingOptions::default()
    };
    options.validate().unwrap();

    for (a, b) in pairs(&catalog) {
        let comparison =
            Comparison::compute(&catalog, &SelectionPair::new(a, b), &options).unwrap();
        let layout = canvas::layout(&comparison.scaling, 1000.0, 1000.0).unwrap();

        for circle in [layout.first, layout.second] {
            assert!(circle.center[0] - circle.radius >= -1e-9, "{a}/{b}");
            assert!(circle.center[0] + circle.radius <= 1000.0 + 1e-9, "{a}/{b}");
        }
    }
}

#[test]
fn invalid_inputs_are_rejected() {
    let options = ScalingOptions::default();
    assert!(matches!(
        compute_scaling(0.0, 5.0, &options),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        compute_scaling(-1.0, 5.0, &options),
        Err(Error::InvalidInput(_))
    ));

    let catalog = Catalog::builtin().unwrap();
    assert_eq!(
        catalog.get("not-a-real-planet"),
        Err(Error::NotFound("not-a-real-planet".to_string()))
    );
}
