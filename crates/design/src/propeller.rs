use std::collections::BTreeMap;

use aeroprop_core::{air, constants};
use serde::Serialize;

use crate::{DesignError, FeatureKind, FeatureParams, OperatingCondition};

/// Keyed set of applied features. A `BTreeMap` gives set semantics over
/// feature kinds: insertion order can never influence a result.
pub type FeatureSet = BTreeMap<FeatureKind, FeatureParams>;

/// Geometric and aerodynamic description of a propeller, plus any applied
/// bio-inspired feature records.
#[derive(Debug, Clone, Serialize)]
pub struct PropellerDesign {
    pub name: String,
    pub num_blades: u32,
    pub diameter_m: f64,
    pub chord_root_m: f64,
    pub chord_tip_m: f64,
    pub mean_chord_m: f64,
    pub blade_thickness_m: f64,
    pub pitch_deg: f64,
    pub angle_of_attack_deg: f64,
    /// Lift-curve slope (per rad); thin-airfoil 2π for the baselines.
    pub cl_slope: f64,
    pub features: FeatureSet,
}

impl PropellerDesign {
    /// Blade tip radius (m).
    pub fn radius_m(&self) -> f64 {
        self.diameter_m / 2.0
    }

    /// Blade tip speed (m/s) at the given condition.
    pub fn tip_speed_m_s(&self, condition: &OperatingCondition) -> f64 {
        condition.angular_rate_rad_s() * self.radius_m()
    }

    /// Representative section speed at 75% radius (m/s).
    pub fn effective_speed_m_s(&self, condition: &OperatingCondition) -> f64 {
        constants::EFFECTIVE_RADIUS_FRACTION * self.tip_speed_m_s(condition)
    }

    /// Chord Reynolds number at the representative section.
    pub fn reynolds_number(&self, condition: &OperatingCondition) -> f64 {
        air::reynolds_number(
            condition.air_density_kg_m3,
            self.effective_speed_m_s(condition),
            self.mean_chord_m,
            condition.temperature_c,
        )
    }

    /// Reject non-physical geometry and out-of-window feature parameters.
    pub fn validate(&self) -> Result<(), DesignError> {
        if self.num_blades == 0 {
            return Err(DesignError::InvalidGeometry {
                field: "num_blades",
                value: 0.0,
            });
        }
        for (field, value) in [
            ("diameter_m", self.diameter_m),
            ("chord_root_m", self.chord_root_m),
            ("chord_tip_m", self.chord_tip_m),
            ("mean_chord_m", self.mean_chord_m),
            ("blade_thickness_m", self.blade_thickness_m),
        ] {
            if value <= 0.0 || !value.is_finite() {
                return Err(DesignError::InvalidGeometry { field, value });
            }
        }
        for (kind, params) in &self.features {
            if params.kind() != *kind {
                return Err(DesignError::MismatchedFeatureParams {
                    expected: *kind,
                    found: params.kind(),
                });
            }
            params.validate()?;
        }
        Ok(())
    }

    /// Copy of this design with no features attached.
    pub fn bare(&self) -> PropellerDesign {
        let mut design = self.clone();
        design.features = FeatureSet::new();
        design
    }
}
