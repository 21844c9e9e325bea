use aeroprop::bio::{self, CombinedModification, combined, compose, with_defaults};
use aeroprop::design::catalog::{standard_2_blade, typical_condition};
use aeroprop::design::{DesignError, FeatureKind, FeatureSet};

#[test]
fn composing_an_empty_set_returns_the_baseline() {
    let baseline = standard_2_blade();
    let composed = compose(&baseline, &FeatureSet::new()).unwrap();
    assert!(composed.features.is_empty());
    assert_eq!(composed.name, baseline.name);
}

#[test]
fn mismatched_key_and_params_are_rejected() {
    let baseline = standard_2_blade();
    let mut features = FeatureSet::new();
    features.insert(
        FeatureKind::OwlSerrations,
        FeatureKind::HumpbackTubercles.default_params(),
    );
    let err = compose(&baseline, &features).unwrap_err();
    assert!(matches!(err, DesignError::MismatchedFeatureParams { .. }));
}

#[test]
fn out_of_window_feature_fails_composition() {
    let baseline = standard_2_blade();
    let mut features = FeatureSet::new();
    features.insert(
        FeatureKind::OwlSerrations,
        FeatureKind::OwlSerrations.default_params().with_primary(0.5),
    );
    assert!(compose(&baseline, &features).is_err());
}

#[test]
fn combination_is_independent_of_insertion_order() {
    let baseline = standard_2_blade();
    let condition = typical_condition();

    let forward = with_defaults(&[
        FeatureKind::OwlSerrations,
        FeatureKind::HumpbackTubercles,
        FeatureKind::DragonflyCorrugations,
    ]);
    let reverse = with_defaults(&[
        FeatureKind::DragonflyCorrugations,
        FeatureKind::HumpbackTubercles,
        FeatureKind::OwlSerrations,
    ]);

    let a = combined(&compose(&baseline, &forward).unwrap(), &condition);
    let b = combined(&compose(&baseline, &reverse).unwrap(), &condition);
    assert_eq!(a.cuts, b.cuts);
    assert_eq!(a.thrust_factor, b.thrust_factor);
    assert_eq!(a.complexity_score, b.complexity_score);
}

#[test]
fn combined_cuts_are_subadditive_per_component() {
    let baseline = standard_2_blade();
    let condition = typical_condition();
    let owl = combined(
        &compose(&baseline, &with_defaults(&[FeatureKind::OwlSerrations])).unwrap(),
        &condition,
    );
    let tubercles = combined(
        &compose(&baseline, &with_defaults(&[FeatureKind::HumpbackTubercles])).unwrap(),
        &condition,
    );
    let both = combined(
        &compose(
            &baseline,
            &with_defaults(&[FeatureKind::OwlSerrations, FeatureKind::HumpbackTubercles]),
        )
        .unwrap(),
        &condition,
    );

    // Both features cut tonal noise; the combination keeps the larger cut
    // intact and discounts the smaller one.
    let linear_sum = owl.cuts.tonal_db + tubercles.cuts.tonal_db;
    let larger = owl.cuts.tonal_db.max(tubercles.cuts.tonal_db);
    assert!(both.cuts.tonal_db < linear_sum);
    assert!(both.cuts.tonal_db > larger);
}

#[test]
fn penalties_compound_multiplicatively() {
    let baseline = standard_2_blade();
    let condition = typical_condition();
    let all = combined(
        &compose(&baseline, &with_defaults(&FeatureKind::ALL)).unwrap(),
        &condition,
    );

    let expected: f64 = all
        .per_feature
        .iter()
        .map(|(_, m)| 1.0 - m.thrust_penalty)
        .product();
    assert!((all.thrust_factor - expected).abs() < 1e-12);
    assert!(all.thrust_factor < 1.0);
    assert_eq!(all.complexity_score, 3);
}

#[test]
fn identity_modification_changes_nothing() {
    let identity = CombinedModification::identity();
    assert_eq!(identity.thrust_factor, 1.0);
    assert_eq!(identity.complexity_score, 0);
    assert_eq!(identity.cuts, aeroprop::noise::NoiseCuts::NONE);

    let baseline = standard_2_blade();
    let bare = combined(&baseline, &typical_condition());
    assert_eq!(bare.cuts, identity.cuts);
    assert_eq!(bare.thrust_factor, 1.0);
}

#[test]
fn synergy_discount_is_a_true_discount() {
    assert!(bio::SYNERGY_DISCOUNT > 0.0 && bio::SYNERGY_DISCOUNT < 1.0);
}
