//! Aeroacoustic performance metrics, centred on the Noise-to-Thrust Ratio.

use serde::Serialize;
use thiserror::Error;

/// Default NTR-reduction target (percent) for design studies.
pub const DEFAULT_TARGET_PERCENT: f64 = 15.0;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("thrust must be positive to form an NTR (got {0} N)")]
    NonPositiveThrust(f64),
    #[error("baseline NTR must be positive (got {0} dB/N)")]
    UndefinedRatio(f64),
}

/// Evaluated performance of one design at one condition.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PerformanceResult {
    pub total_noise_db: f64,
    pub thrust_n: f64,
    pub power_w: f64,
    pub efficiency: f64,
    pub ntr_db_per_n: f64,
    /// NTR reduction relative to the supplied baseline, percent.
    pub reduction_percent: Option<f64>,
    /// Whether the reduction meets the configured target.
    pub target_met: Option<bool>,
}

/// Noise-to-Thrust Ratio in dB/N. Lower is better.
pub fn noise_to_thrust_ratio(total_noise_db: f64, thrust_n: f64) -> Result<f64, MetricsError> {
    if thrust_n <= 0.0 {
        return Err(MetricsError::NonPositiveThrust(thrust_n));
    }
    Ok(total_noise_db / thrust_n)
}

/// Percentage NTR reduction relative to a baseline; positive means the
/// modified design is quieter per newton.
pub fn reduction_percent(baseline_ntr: f64, ntr: f64) -> Result<f64, MetricsError> {
    if baseline_ntr <= 0.0 {
        return Err(MetricsError::UndefinedRatio(baseline_ntr));
    }
    Ok((baseline_ntr - ntr) / baseline_ntr * 100.0)
}

/// Assemble the full result, deriving the reduction and target flag when a
/// baseline NTR is available.
pub fn performance(
    total_noise_db: f64,
    thrust_n: f64,
    power_w: f64,
    efficiency: f64,
    baseline_ntr: Option<f64>,
    target_percent: f64,
) -> Result<PerformanceResult, MetricsError> {
    let ntr = noise_to_thrust_ratio(total_noise_db, thrust_n)?;
    let reduction = baseline_ntr
        .map(|baseline| reduction_percent(baseline, ntr))
        .transpose()?;
    Ok(PerformanceResult {
        total_noise_db,
        thrust_n,
        power_w,
        efficiency,
        ntr_db_per_n: ntr,
        reduction_percent: reduction,
        target_met: reduction.map(|r| r >= target_percent),
    })
}
