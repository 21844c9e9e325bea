use std::cmp::Ordering;

use aeroprop::design::FeatureKind;
use aeroprop::design::catalog::{standard_2_blade, typical_condition};
use aeroprop::optimize::{OptimizeError, SearchConfig, optimize, rank};

#[test]
fn full_pool_sweep_meets_the_default_target() {
    let outcome = optimize(
        &standard_2_blade(),
        &typical_condition(),
        &SearchConfig::default(),
    )
    .unwrap();

    // 3 singles, 3 pairs, 1 triple over a 3-point grid.
    assert_eq!(outcome.evaluated, 3 * 3 + 3 * 9 + 27);
    assert_eq!(outcome.excluded, 0);
    assert!(outcome.target_met);
    assert!((outcome.baseline_ntr - 37.104).abs() < 1e-2);

    let best = &outcome.candidates[0];
    assert!(best.target_met);
    assert!((best.reduction_percent - 20.23).abs() < 0.05, "best = {}", best.reduction_percent);
    // The winner pairs serrations with tubercles at full depth/amplitude.
    assert!(best.design.features.contains_key(&FeatureKind::OwlSerrations));
    assert!(
        best.design
            .features
            .contains_key(&FeatureKind::HumpbackTubercles)
    );
}

#[test]
fn ranking_is_best_first_and_consistent_with_the_comparator() {
    let outcome = optimize(
        &standard_2_blade(),
        &typical_condition(),
        &SearchConfig::default(),
    )
    .unwrap();

    for pair in outcome.candidates.windows(2) {
        assert_ne!(rank(&pair[0], &pair[1]), Ordering::Greater);
        assert!(pair[0].reduction_percent >= pair[1].reduction_percent);
    }
}

#[test]
fn exact_reduction_ties_break_by_complexity_then_penalty() {
    let config = SearchConfig {
        grid_points: 1,
        ..SearchConfig::default()
    };
    let outcome = optimize(&standard_2_blade(), &typical_condition(), &config).unwrap();
    let template = outcome.candidates[0].clone();

    let mut simple = template.clone();
    simple.reduction_percent = 10.0;
    simple.complexity_score = 1;
    simple.penalty_percent = 2.0;

    let mut intricate = template.clone();
    intricate.reduction_percent = 10.0;
    intricate.complexity_score = 2;
    intricate.penalty_percent = 1.0;

    // Equal reduction: the lower complexity score wins, even against a
    // smaller penalty.
    assert_eq!(rank(&simple, &intricate), Ordering::Less);
    assert_eq!(rank(&intricate, &simple), Ordering::Greater);

    // Equal reduction and complexity: the lower penalty wins.
    let mut cheap = simple.clone();
    cheap.penalty_percent = 0.5;
    assert_eq!(rank(&cheap, &simple), Ordering::Less);

    // Any reduction edge outranks both tie-breakers.
    let mut louder_but_better = template;
    louder_but_better.reduction_percent = 10.5;
    louder_but_better.complexity_score = 3;
    louder_but_better.penalty_percent = 5.0;
    assert_eq!(rank(&louder_but_better, &simple), Ordering::Less);
}

#[test]
fn corrugation_only_pool_reports_best_effort_without_target() {
    let config = SearchConfig {
        feature_pool: vec![FeatureKind::DragonflyCorrugations],
        ..SearchConfig::default()
    };
    let outcome = optimize(&standard_2_blade(), &typical_condition(), &config).unwrap();

    assert!(!outcome.target_met);
    assert!(!outcome.candidates.is_empty());
    // The broadband-only feature cannot beat a tonal-dominated baseline.
    assert!(outcome.candidates[0].reduction_percent < 15.0);
    assert!(!outcome.candidates[0].target_met);
}

#[test]
fn empty_pool_is_an_error() {
    let config = SearchConfig {
        feature_pool: Vec::new(),
        ..SearchConfig::default()
    };
    let err = optimize(&standard_2_blade(), &typical_condition(), &config).unwrap_err();
    assert!(matches!(err, OptimizeError::EmptyPool));
}

#[test]
fn penalty_budget_excludes_expensive_combinations() {
    let config = SearchConfig {
        penalty_budget_percent: Some(1.0),
        ..SearchConfig::default()
    };
    let outcome = optimize(&standard_2_blade(), &typical_condition(), &config).unwrap();

    assert!(outcome.excluded > 0);
    for candidate in &outcome.candidates {
        assert!(candidate.penalty_percent <= 1.0);
    }
}

#[test]
fn defaults_only_grid_enumerates_the_power_set() {
    let config = SearchConfig {
        grid_points: 1,
        ..SearchConfig::default()
    };
    let outcome = optimize(&standard_2_blade(), &typical_condition(), &config).unwrap();
    assert_eq!(outcome.evaluated, 7);
}

#[test]
fn max_candidates_caps_the_enumeration() {
    let config = SearchConfig {
        max_candidates: 5,
        ..SearchConfig::default()
    };
    let outcome = optimize(&standard_2_blade(), &typical_condition(), &config).unwrap();
    assert_eq!(outcome.evaluated, 5);
}

#[test]
fn duplicate_pool_entries_are_deduplicated() {
    let config = SearchConfig {
        feature_pool: vec![FeatureKind::OwlSerrations, FeatureKind::OwlSerrations],
        grid_points: 1,
        ..SearchConfig::default()
    };
    let outcome = optimize(&standard_2_blade(), &typical_condition(), &config).unwrap();
    assert_eq!(outcome.evaluated, 1);
}
