//! Feature-sweep optimizer.
//!
//! Enumerates the non-empty power set of the configured feature pool and
//! grids each feature's primary parameter across its physical window. Each
//! candidate is an independent pure evaluation, so the sweep runs on a
//! rayon worker pool without shared state. Candidates that fail validation
//! are excluded from the ranking rather than failing the search.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use aeroprop_bio::compose;
use aeroprop_design::{FeatureKind, FeatureSet, OperatingCondition, PropellerDesign};
use aeroprop_metrics::DEFAULT_TARGET_PERCENT;
use rayon::prelude::*;
use serde::Serialize;

use crate::evaluate::{evaluate_with_target, EvaluateError, Evaluation};

/// Search-space configuration for [`optimize`].
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Features the search may combine.
    pub feature_pool: Vec<FeatureKind>,
    /// NTR-reduction target in percent.
    pub target_percent: f64,
    /// Grid points per feature primary parameter (1 = defaults only).
    pub grid_points: usize,
    /// Optional cap on the combined aerodynamic penalty, percent.
    pub penalty_budget_percent: Option<f64>,
    /// Hard cap on enumerated candidates.
    pub max_candidates: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            feature_pool: FeatureKind::ALL.to_vec(),
            target_percent: DEFAULT_TARGET_PERCENT,
            grid_points: 3,
            penalty_budget_percent: None,
            max_candidates: 512,
        }
    }
}

/// One evaluated point of the search space.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub design: PropellerDesign,
    pub evaluation: Evaluation,
    pub reduction_percent: f64,
    /// Combined aerodynamic penalty, percent of baseline thrust.
    pub penalty_percent: f64,
    pub complexity_score: u8,
    pub target_met: bool,
}

/// Ranked search result. `candidates` is sorted best-first; when no
/// candidate reaches the target the best one is still first and
/// `target_met` is false.
#[derive(Debug, Clone, Serialize)]
pub struct SearchOutcome {
    pub baseline_ntr: f64,
    pub candidates: Vec<Candidate>,
    pub target_met: bool,
    /// Candidates enumerated (before exclusions).
    pub evaluated: usize,
    /// Candidates dropped for validation errors or a blown penalty budget.
    pub excluded: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum OptimizeError {
    #[error("baseline evaluation failed: {0}")]
    Baseline(#[from] EvaluateError),
    #[error("feature pool is empty")]
    EmptyPool,
}

/// Run the sweep: power set of the pool × per-feature parameter grid,
/// ranked by reduction, then manufacturing complexity, then penalty.
pub fn optimize(
    baseline: &PropellerDesign,
    condition: &OperatingCondition,
    config: &SearchConfig,
) -> Result<SearchOutcome, OptimizeError> {
    let pool: Vec<FeatureKind> = config
        .feature_pool
        .iter()
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    if pool.is_empty() {
        return Err(OptimizeError::EmptyPool);
    }

    let bare = baseline.bare();
    let baseline_ntr = evaluate_with_target(&bare, condition, None, config.target_percent)?
        .performance
        .ntr_db_per_n;

    let mut feature_sets = enumerate_feature_sets(&pool, config.grid_points.max(1));
    feature_sets.truncate(config.max_candidates);
    let evaluated = feature_sets.len();

    let mut candidates: Vec<Candidate> = feature_sets
        .into_par_iter()
        .filter_map(|set| {
            let design = compose(&bare, &set).ok()?;
            let evaluation =
                evaluate_with_target(&design, condition, Some(baseline_ntr), config.target_percent)
                    .ok()?;
            let penalty_percent = (1.0 - evaluation.modification.thrust_factor) * 100.0;
            if let Some(budget) = config.penalty_budget_percent {
                if penalty_percent > budget {
                    return None;
                }
            }
            let reduction_percent = evaluation.performance.reduction_percent.unwrap_or(0.0);
            let target_met = evaluation.performance.target_met.unwrap_or(false);
            let complexity_score = evaluation.modification.complexity_score;
            Some(Candidate {
                design,
                evaluation,
                reduction_percent,
                penalty_percent,
                complexity_score,
                target_met,
            })
        })
        .collect();

    candidates.sort_by(rank);
    let target_met = candidates.first().map(|c| c.target_met).unwrap_or(false);
    let excluded = evaluated - candidates.len();

    Ok(SearchOutcome {
        baseline_ntr,
        candidates,
        target_met,
        evaluated,
        excluded,
    })
}

/// Ranking order: reduction descending; exact ties broken by lower
/// manufacturing-complexity score, then lower aerodynamic penalty.
pub fn rank(a: &Candidate, b: &Candidate) -> Ordering {
    b.reduction_percent
        .total_cmp(&a.reduction_percent)
        .then_with(|| a.complexity_score.cmp(&b.complexity_score))
        .then_with(|| a.penalty_percent.total_cmp(&b.penalty_percent))
}

/// Non-empty subsets of the pool, each crossed with a grid over every
/// member feature's primary parameter window. Wavelengths stay at their
/// defaults; depth/amplitude carries the first-order effect.
fn enumerate_feature_sets(pool: &[FeatureKind], grid_points: usize) -> Vec<FeatureSet> {
    let mut sets = Vec::new();
    for mask in 1u32..(1 << pool.len()) {
        let subset: Vec<FeatureKind> = pool
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, kind)| *kind)
            .collect();
        cross_parameter_grid(&subset, grid_points, &mut sets);
    }
    sets
}

fn cross_parameter_grid(subset: &[FeatureKind], grid_points: usize, out: &mut Vec<FeatureSet>) {
    // Odometer over grid indices, one digit per feature in the subset.
    let mut indices = vec![0usize; subset.len()];
    loop {
        let set: FeatureSet = subset
            .iter()
            .zip(&indices)
            .map(|(kind, idx)| {
                let window = kind.primary_window();
                let value = if grid_points == 1 {
                    window.default
                } else {
                    window.min
                        + (window.max - window.min) * (*idx as f64) / (grid_points as f64 - 1.0)
                };
                (*kind, kind.default_params().with_primary(value))
            })
            .collect();
        out.push(set);

        let mut digit = 0;
        loop {
            if digit == indices.len() {
                return;
            }
            indices[digit] += 1;
            if indices[digit] < grid_points {
                break;
            }
            indices[digit] = 0;
            digit += 1;
        }
    }
}
