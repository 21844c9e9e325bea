//! Scenario assembly: raw catalog records into validated design types.
//!
//! Catalog parsing (YAML/TOML) lives in `aeroprop_config`; this module
//! owns the conversion and lookup logic so front-ends work with
//! `PropellerDesign` and `OperatingCondition` only.

use std::path::Path;
use std::str::FromStr;

use aeroprop_config::{ConditionRecord, ConfigError, FeatureRecord, PropellerRecord};
use aeroprop_core::air::density_from_state;
use aeroprop_design::{
    DesignError, FeatureKind, FeatureParams, FeatureSet, OperatingCondition, PropellerDesign,
};

pub use aeroprop_design::catalog::{preset, typical_condition, PRESET_NAMES};

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Design(#[from] DesignError),
    #[error("unknown preset '{name}' (expected one of {})", PRESET_NAMES.join(", "))]
    UnknownPreset { name: String },
    #[error("no propeller named '{0}' in catalog")]
    NotFound(String),
    #[error("catalog is empty")]
    EmptyCatalog,
}

/// Look up a built-in preset, with a listing error instead of `None`.
pub fn preset_design(name: &str) -> Result<PropellerDesign, ScenarioError> {
    preset(name).ok_or_else(|| ScenarioError::UnknownPreset {
        name: name.to_string(),
    })
}

/// Load a catalog and select one propeller by name, or the first record
/// when `name` is `None`.
pub fn load_design<P: AsRef<Path>>(
    path: P,
    name: Option<&str>,
) -> Result<PropellerDesign, ScenarioError> {
    let records = aeroprop_config::load_propellers(path)?;
    let record = match name {
        Some(name) => records
            .into_iter()
            .find(|r| r.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| ScenarioError::NotFound(name.to_string()))?,
        None => records.into_iter().next().ok_or(ScenarioError::EmptyCatalog)?,
    };
    design_from_record(&record)
}

/// Load every condition record from a catalog.
pub fn load_conditions<P: AsRef<Path>>(path: P) -> Result<Vec<OperatingCondition>, ScenarioError> {
    let records = aeroprop_config::load_conditions(path)?;
    let mut conditions = Vec::with_capacity(records.len());
    for record in &records {
        let condition = condition_from_record(record);
        condition.validate()?;
        conditions.push(condition);
    }
    Ok(conditions)
}

/// Convert a raw propeller record into a validated design.
pub fn design_from_record(record: &PropellerRecord) -> Result<PropellerDesign, ScenarioError> {
    let mut features = FeatureSet::new();
    for feature in &record.features {
        let (kind, params) = feature_from_record(feature)?;
        features.insert(kind, params);
    }

    let design = PropellerDesign {
        name: record.name.clone(),
        num_blades: record.num_blades,
        diameter_m: record.diameter_m,
        chord_root_m: record.chord_root_m,
        chord_tip_m: record.chord_tip_m,
        mean_chord_m: record.mean_chord_m,
        blade_thickness_m: record.blade_thickness_m,
        pitch_deg: record.pitch_deg,
        angle_of_attack_deg: record.angle_of_attack_deg,
        cl_slope: record.cl_slope.unwrap_or(2.0 * std::f64::consts::PI),
        features,
    };
    design.validate()?;
    Ok(design)
}

/// Convert a condition record, deriving density from the ideal-gas law
/// when the record omits it.
pub fn condition_from_record(record: &ConditionRecord) -> OperatingCondition {
    let air_density_kg_m3 = record
        .air_density_kg_m3
        .unwrap_or_else(|| density_from_state(record.ambient_pressure_pa, record.temperature_c));
    OperatingCondition {
        rpm: record.rpm,
        air_density_kg_m3,
        temperature_c: record.temperature_c,
        ambient_pressure_pa: record.ambient_pressure_pa,
        forward_velocity_m_s: record.forward_velocity_m_s,
    }
}

fn feature_from_record(record: &FeatureRecord) -> Result<(FeatureKind, FeatureParams), ScenarioError> {
    let kind = FeatureKind::from_str(&record.kind)?;
    let params = match kind.default_params() {
        FeatureParams::OwlSerrations {
            depth_ratio,
            wavelength_ratio,
        } => FeatureParams::OwlSerrations {
            depth_ratio: record.depth_ratio.unwrap_or(depth_ratio),
            wavelength_ratio: record.wavelength_ratio.unwrap_or(wavelength_ratio),
        },
        FeatureParams::HumpbackTubercles {
            amplitude_ratio,
            wavelength_ratio,
        } => FeatureParams::HumpbackTubercles {
            amplitude_ratio: record.amplitude_ratio.unwrap_or(amplitude_ratio),
            wavelength_ratio: record.wavelength_ratio.unwrap_or(wavelength_ratio),
        },
        FeatureParams::DragonflyCorrugations {
            depth_ratio,
            wavelength_ratio,
        } => FeatureParams::DragonflyCorrugations {
            depth_ratio: record.depth_ratio.unwrap_or(depth_ratio),
            wavelength_ratio: record.wavelength_ratio.unwrap_or(wavelength_ratio),
        },
    };
    params.validate()?;
    Ok((kind, params))
}
