//! Design evaluator: Noise → Thrust → Metrics for one (design, condition)
//! pair. Stateless; every call recomputes from immutable inputs.

use aeroprop_bio::{combined, CombinedModification};
use aeroprop_design::{OperatingCondition, PropellerDesign};
use aeroprop_metrics::{MetricsError, PerformanceResult, DEFAULT_TARGET_PERCENT};
use aeroprop_noise::{NoiseComponents, NoiseError};
use aeroprop_thrust::{ThrustBreakdown, ThrustError};
use serde::Serialize;

/// Structured result of one evaluation: the headline metrics plus the raw
/// component breakdowns for diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub performance: PerformanceResult,
    pub components: NoiseComponents,
    pub thrust: ThrustBreakdown,
    pub modification: CombinedModification,
}

/// Top-level evaluation error.
#[derive(Debug, thiserror::Error)]
pub enum EvaluateError {
    #[error("noise analysis failed: {0}")]
    Noise(#[from] NoiseError),
    #[error("thrust analysis failed: {0}")]
    Thrust(#[from] ThrustError),
    #[error("metrics computation failed: {0}")]
    Metrics(#[from] MetricsError),
}

/// Evaluate a design at a condition, against an optional baseline NTR and
/// the default 15% reduction target.
pub fn evaluate(
    design: &PropellerDesign,
    condition: &OperatingCondition,
    baseline_ntr: Option<f64>,
) -> Result<Evaluation, EvaluateError> {
    evaluate_with_target(design, condition, baseline_ntr, DEFAULT_TARGET_PERCENT)
}

/// Evaluate with an explicit reduction target (percent).
pub fn evaluate_with_target(
    design: &PropellerDesign,
    condition: &OperatingCondition,
    baseline_ntr: Option<f64>,
    target_percent: f64,
) -> Result<Evaluation, EvaluateError> {
    let modification = combined(design, condition);
    let components = aeroprop_noise::analyze(design, condition, &modification.cuts)?;
    let thrust = aeroprop_thrust::blade_element(design, condition, modification.thrust_factor)?;
    let performance = aeroprop_metrics::performance(
        components.total_db,
        thrust.thrust_n,
        thrust.power_w,
        thrust.efficiency,
        baseline_ntr,
        target_percent,
    )?;

    Ok(Evaluation {
        performance,
        components,
        thrust,
        modification,
    })
}
