use proptest::prelude::*;

use starmap_core::generate;
use starmap_core::io::request::{arb_request, GenerationRequest};
use starmap_core::morse::encode;
use starmap_core::params::{DerivedParameters, Family};
use starmap_core::scene::{Layer, Primitive, Scene};

fn amara() -> GenerationRequest {
    GenerationRequest {
        name: "Amara".to_string(),
        hair_type: "Coils (4A–4C)".to_string(),
        density: 4,
        porosity: 3,
        length: "Medium".to_string(),
        elasticity: 4,
        message: "Texture is strength".to_string(),
    }
}

fn layer(scene: &Scene, layer: Layer) -> Vec<Primitive> {
    scene.layer(layer).cloned().collect()
}

fn caption_texts(scene: &Scene) -> Vec<String> {
    scene
        .layer(Layer::Caption)
        .filter_map(|primitive| match primitive {
            Primitive::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn amara_scenario_matches_expected_parameters() {
    let request = amara();
    let params = DerivedParameters::derive(
        &request.hair_type,
        request.density,
        request.porosity,
        &request.length,
        request.elasticity,
    );
    assert_eq!(params.family, Family::Coil);
    assert_eq!(params.star_count, 570);
    assert!((params.variance_factor - 0.61).abs() < 1e-9);
    assert_eq!(params.radius_scale, 0.93);

    let scene = generate(&request);
    assert!(!scene.items.is_empty());
    assert_eq!(layer(&scene, Layer::Stars).len(), 570);
    let pattern = layer(&scene, Layer::Pattern);
    assert_eq!(pattern.len(), 3);
    assert!(pattern
        .iter()
        .all(|primitive| matches!(primitive, Primitive::Polyline(_))));
    assert_eq!(
        caption_texts(&scene),
        vec![
            "Amara".to_string(),
            "Coils (4A–4C) • Density 4 • Porosity 3 • Medium • Elasticity 4".to_string(),
            "Message encoded in ring (Morse).".to_string(),
        ]
    );
}

#[test]
fn identical_requests_yield_identical_scenes() {
    let first = generate(&amara());
    let second = generate(&amara());
    assert_eq!(first, second);
    assert_eq!(
        first.to_json().expect("scene serializes"),
        second.to_json().expect("scene serializes")
    );
}

#[test]
fn renaming_moves_stars_but_not_the_ring() {
    let base = generate(&amara());
    let renamed = generate(&GenerationRequest {
        name: "Zola".to_string(),
        ..amara()
    });

    assert_ne!(layer(&base, Layer::Stars), layer(&renamed, Layer::Stars));
    assert_ne!(layer(&base, Layer::Pattern), layer(&renamed, Layer::Pattern));
    assert_eq!(layer(&base, Layer::Ring), layer(&renamed, Layer::Ring));
}

#[test]
fn changing_the_message_changes_the_ring() {
    let base = generate(&amara());
    let other = generate(&GenerationRequest {
        message: "Roots run deep".to_string(),
        ..amara()
    });
    assert_ne!(layer(&base, Layer::Ring), layer(&other, Layer::Ring));
}

#[test]
fn out_of_range_sliders_behave_like_bounds() {
    let low = generate(&GenerationRequest {
        density: 0,
        porosity: -3,
        elasticity: -3,
        ..amara()
    });
    let low_bound = generate(&GenerationRequest {
        density: 1,
        porosity: 1,
        elasticity: 1,
        ..amara()
    });
    assert_eq!(low, low_bound);
    assert_eq!(layer(&low, Layer::Stars).len(), 330);

    let high = generate(&GenerationRequest {
        density: 99,
        porosity: 99,
        elasticity: 99,
        ..amara()
    });
    let high_bound = generate(&GenerationRequest {
        density: 5,
        porosity: 5,
        elasticity: 5,
        ..amara()
    });
    assert_eq!(high, high_bound);
    assert_eq!(layer(&high, Layer::Stars).len(), 650);
}

#[test]
fn blank_inputs_fall_back() {
    let blank = generate(&GenerationRequest {
        name: "  ".to_string(),
        message: String::new(),
        ..amara()
    });
    assert_eq!(caption_texts(&blank)[0], "Anonymous");

    let explicit = generate(&GenerationRequest {
        name: "Anonymous".to_string(),
        message: "Texture is strength".to_string(),
        ..amara()
    });
    assert_eq!(blank, explicit);
}

#[test]
fn each_family_draws_its_own_path_count() {
    for (hair_type, expected) in [
        ("Locs", 5),
        ("4b", 3),
        ("2a", 1),
        ("3c", 6),
        ("something else", 6),
    ] {
        let scene = generate(&GenerationRequest {
            hair_type: hair_type.to_string(),
            ..amara()
        });
        assert_eq!(
            layer(&scene, Layer::Pattern).len(),
            expected,
            "pattern paths for {hair_type}"
        );
    }
}

#[test]
fn only_pattern_paths_are_clipped() {
    let scene = generate(&amara());
    for item in &scene.items {
        if let Primitive::Polyline(path) = &item.primitive {
            assert_eq!(item.layer, Layer::Pattern);
            assert!(path.clipped);
        }
    }
}

#[test]
fn message_without_mappable_characters_has_no_ring() {
    let scene = generate(&GenerationRequest {
        message: "### $$$".to_string(),
        ..amara()
    });
    assert_eq!(
        scene.layer_order(),
        vec![
            Layer::Background,
            Layer::Outline,
            Layer::Stars,
            Layer::Pattern,
            Layer::Caption,
        ]
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn any_request_generates_a_complete_scene(request in arb_request()) {
        let scene = generate(&request);
        let message = request.normalized().message;
        let has_marks = encode(&message).iter().flatten().next().is_some();

        let mut expected = vec![Layer::Background, Layer::Outline, Layer::Stars, Layer::Pattern];
        if has_marks {
            expected.push(Layer::Ring);
        }
        expected.push(Layer::Caption);
        prop_assert_eq!(scene.layer_order(), expected);
        prop_assert_eq!(scene.layer(Layer::Caption).count(), 3);
    }
}
