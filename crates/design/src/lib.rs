//! Propeller design and operating-condition records.
//!
//! Everything here is an immutable value type: analyses never mutate a
//! design, and invalid physical inputs are rejected at validation rather
//! than clamped.

pub mod catalog;
mod condition;
mod feature;
mod propeller;

pub use condition::OperatingCondition;
pub use feature::{FeatureKind, FeatureParams, ParamWindow};
pub use propeller::{FeatureSet, PropellerDesign};

/// Documented physical windows for feature parameters.
pub mod feature_windows {
    pub use crate::feature::{
        CORRUGATION_DEPTH, CORRUGATION_WAVELENGTH, OWL_DEPTH, OWL_WAVELENGTH, TUBERCLE_AMPLITUDE,
        TUBERCLE_WAVELENGTH,
    };
}

use thiserror::Error;

/// Validation errors for designs, conditions, and feature parameters.
#[derive(Debug, Error)]
pub enum DesignError {
    #[error("invalid operating condition: {field} = {value}")]
    InvalidOperatingCondition { field: &'static str, value: f64 },
    #[error("invalid geometry: {field} = {value}")]
    InvalidGeometry { field: &'static str, value: f64 },
    #[error(
        "{feature} parameter {parameter} = {value} outside physical window [{min}, {max}]"
    )]
    InvalidParameterRange {
        feature: FeatureKind,
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("unknown bio-inspired feature '{0}'")]
    UnknownFeature(String),
    #[error("feature parameters for {found} supplied under {expected} key")]
    MismatchedFeatureParams {
        expected: FeatureKind,
        found: FeatureKind,
    },
}
