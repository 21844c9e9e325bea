//! Bio-inspired feature modifiers and their combination rules.
//!
//! Each feature is a pure strategy over its validated parameter window:
//! per-component noise cuts (dB), an aerodynamic penalty fraction, and a
//! manufacturing-complexity ordinal. Cuts are conditionally scaled by the
//! mechanism's applicability (shedding frequency for serrations, Reynolds
//! number for corrugations) rather than applied uniformly.

mod factory;
mod modifiers;

pub use factory::{compose, with_defaults};
pub use modifiers::{modification, FeatureModification, ManufacturingComplexity};

use aeroprop_design::{FeatureKind, OperatingCondition, PropellerDesign};
use aeroprop_noise::NoiseCuts;
use serde::Serialize;

/// Geometric weight applied to the k-th largest cut per component when
/// several features target the same mechanism. Keeps combined reductions
/// strictly below the linear sum (diminishing returns) and independent of
/// insertion order.
pub const SYNERGY_DISCOUNT: f64 = 0.85;

/// Aggregate effect of every feature attached to a design.
#[derive(Debug, Clone, Serialize)]
pub struct CombinedModification {
    /// Synergy-discounted per-component noise cuts.
    pub cuts: NoiseCuts,
    /// Product of `1 - penalty_i` over active features.
    pub thrust_factor: f64,
    /// Sum of manufacturing-complexity scores over active features.
    pub complexity_score: u8,
    pub per_feature: Vec<(FeatureKind, FeatureModification)>,
}

impl CombinedModification {
    /// Identity element: no features, no cuts, unit thrust factor.
    pub fn identity() -> Self {
        CombinedModification {
            cuts: NoiseCuts::NONE,
            thrust_factor: 1.0,
            complexity_score: 0,
            per_feature: Vec::new(),
        }
    }
}

/// Combine the modifications of all features attached to `design`.
///
/// Per component the positive cuts are sorted descending and summed with
/// weights `SYNERGY_DISCOUNT^k`; thrust penalties compound
/// multiplicatively. The feature set is keyed, so the result is a pure
/// function of the set, never of construction order.
pub fn combined(design: &PropellerDesign, condition: &OperatingCondition) -> CombinedModification {
    if design.features.is_empty() {
        return CombinedModification::identity();
    }

    let per_feature: Vec<(FeatureKind, FeatureModification)> = design
        .features
        .iter()
        .map(|(kind, params)| (*kind, modification(params, design, condition)))
        .collect();

    let cuts = NoiseCuts {
        broadband_db: discounted_sum(per_feature.iter().map(|(_, m)| m.broadband_cut_db)),
        tonal_db: discounted_sum(per_feature.iter().map(|(_, m)| m.tonal_cut_db)),
        vortex_db: discounted_sum(per_feature.iter().map(|(_, m)| m.vortex_cut_db)),
    };
    let thrust_factor = per_feature
        .iter()
        .fold(1.0, |f, (_, m)| f * (1.0 - m.thrust_penalty));
    let complexity_score = per_feature
        .iter()
        .map(|(_, m)| m.complexity.score())
        .sum();

    CombinedModification {
        cuts,
        thrust_factor,
        complexity_score,
        per_feature,
    }
}

fn discounted_sum(cuts: impl Iterator<Item = f64>) -> f64 {
    let mut positive: Vec<f64> = cuts.filter(|c| *c > 0.0).collect();
    positive.sort_by(|a, b| b.total_cmp(a));
    positive
        .iter()
        .enumerate()
        .map(|(k, cut)| cut * SYNERGY_DISCOUNT.powi(k as i32))
        .sum()
}
