//! Design factory: compose a baseline with a validated set of features.

use aeroprop_design::{DesignError, FeatureKind, FeatureSet, PropellerDesign};

/// Compose a baseline design with the requested feature set.
///
/// Every parameter record is validated against its physical window and
/// against its map key before the design is produced; nothing is clamped.
/// An empty set returns a design identical to the baseline.
pub fn compose(
    baseline: &PropellerDesign,
    features: &FeatureSet,
) -> Result<PropellerDesign, DesignError> {
    baseline.validate()?;
    for (kind, params) in features {
        if params.kind() != *kind {
            return Err(DesignError::MismatchedFeatureParams {
                expected: *kind,
                found: params.kind(),
            });
        }
        params.validate()?;
    }

    let mut composed = baseline.clone();
    composed.features = features.clone();
    Ok(composed)
}

/// Build a feature set from kinds, each at its default parameters.
pub fn with_defaults(kinds: &[FeatureKind]) -> FeatureSet {
    kinds
        .iter()
        .map(|kind| (*kind, kind.default_params()))
        .collect()
}
