use aeroprop::bio::{compose, with_defaults};
use aeroprop::design::FeatureKind;
use aeroprop::design::catalog::{standard_2_blade, typical_condition};
use aeroprop::evaluate::evaluate;

fn reduction_for(kinds: &[FeatureKind], baseline_ntr: f64) -> f64 {
    let design = compose(&standard_2_blade(), &with_defaults(kinds)).unwrap();
    evaluate(&design, &typical_condition(), Some(baseline_ntr))
        .unwrap()
        .performance
        .reduction_percent
        .unwrap()
}

#[test]
fn baseline_ntr_matches_bench_calibration() {
    let evaluation = evaluate(&standard_2_blade(), &typical_condition(), None).unwrap();
    assert!(
        (evaluation.performance.ntr_db_per_n - 37.104).abs() < 1e-2,
        "ntr = {}",
        evaluation.performance.ntr_db_per_n
    );
    assert_eq!(evaluation.performance.reduction_percent, None);
    assert_eq!(evaluation.modification.thrust_factor, 1.0);
}

#[test]
fn all_three_features_meet_the_default_target() {
    let baseline = evaluate(&standard_2_blade(), &typical_condition(), None).unwrap();
    let baseline_ntr = baseline.performance.ntr_db_per_n;

    let design = compose(&standard_2_blade(), &with_defaults(&FeatureKind::ALL)).unwrap();
    let evaluation = evaluate(&design, &typical_condition(), Some(baseline_ntr)).unwrap();
    let reduction = evaluation.performance.reduction_percent.unwrap();

    assert!((reduction - 16.79).abs() < 0.05, "reduction = {}", reduction);
    assert_eq!(evaluation.performance.target_met, Some(true));
    assert_eq!(evaluation.modification.complexity_score, 3);
    // The combined design trades a little thrust for the noise cuts.
    assert!(evaluation.thrust.thrust_n < baseline.thrust.thrust_n);
}

#[test]
fn positive_pair_shows_diminishing_returns() {
    let baseline_ntr = evaluate(&standard_2_blade(), &typical_condition(), None)
        .unwrap()
        .performance
        .ntr_db_per_n;

    let owl = reduction_for(&[FeatureKind::OwlSerrations], baseline_ntr);
    let tubercles = reduction_for(&[FeatureKind::HumpbackTubercles], baseline_ntr);
    let pair = reduction_for(
        &[FeatureKind::OwlSerrations, FeatureKind::HumpbackTubercles],
        baseline_ntr,
    );

    assert!(owl > 0.0 && tubercles > 0.0);
    assert!((owl - 6.98).abs() < 0.05, "owl = {owl}");
    assert!((tubercles - 11.96).abs() < 0.05, "tubercles = {tubercles}");
    // Better than either alone, but below the linear sum.
    assert!(pair > owl.max(tubercles));
    assert!(pair < owl + tubercles, "pair = {pair}");
}

#[test]
fn corrugations_alone_hurt_ntr_at_the_reference_point() {
    let baseline_ntr = evaluate(&standard_2_blade(), &typical_condition(), None)
        .unwrap()
        .performance
        .ntr_db_per_n;
    // Tonal noise dominates the baseline; a broadband-only cut cannot pay
    // for its thrust penalty here.
    let reduction = reduction_for(&[FeatureKind::DragonflyCorrugations], baseline_ntr);
    assert!(reduction < 0.0, "reduction = {reduction}");
}
