//! Catalog models and loaders for propeller and operating-condition records.
//!
//! Catalogs are YAML lists or directories of per-record TOML files; parsed
//! records are raw data only, converted into validated design types by the
//! scenario layer.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Propeller record parsed from a catalog.
#[derive(Debug, Deserialize, Clone)]
pub struct PropellerRecord {
    pub name: String,
    pub num_blades: u32,
    pub diameter_m: f64,
    pub chord_root_m: f64,
    pub chord_tip_m: f64,
    pub mean_chord_m: f64,
    pub blade_thickness_m: f64,
    pub pitch_deg: f64,
    pub angle_of_attack_deg: f64,
    /// Lift-curve slope per radian; defaults to thin-airfoil 2π.
    #[serde(default)]
    pub cl_slope: Option<f64>,
    #[serde(default)]
    pub features: Vec<FeatureRecord>,
}

/// One requested bio-inspired feature, by catalog identifier. Omitted
/// parameters fall back to the feature's documented defaults.
#[derive(Debug, Deserialize, Clone)]
pub struct FeatureRecord {
    pub kind: String,
    #[serde(default)]
    pub depth_ratio: Option<f64>,
    #[serde(default)]
    pub amplitude_ratio: Option<f64>,
    #[serde(default)]
    pub wavelength_ratio: Option<f64>,
}

/// Operating-condition record parsed from a catalog.
#[derive(Debug, Deserialize, Clone)]
pub struct ConditionRecord {
    pub rpm: f64,
    /// Omitted density is derived from pressure and temperature.
    #[serde(default)]
    pub air_density_kg_m3: Option<f64>,
    #[serde(default = "default_temperature_c")]
    pub temperature_c: f64,
    #[serde(default = "default_pressure_pa")]
    pub ambient_pressure_pa: f64,
    #[serde(default)]
    pub forward_velocity_m_s: f64,
}

fn default_temperature_c() -> f64 {
    20.0
}

fn default_pressure_pa() -> f64 {
    101_325.0
}

/// Errors that can occur while loading catalog files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load propeller records from a YAML file or a directory of TOML files.
pub fn load_propellers<P: AsRef<Path>>(path: P) -> Result<Vec<PropellerRecord>, ConfigError> {
    load_records(path)
}

/// Load operating-condition records from a YAML file or TOML directory.
pub fn load_conditions<P: AsRef<Path>>(path: P) -> Result<Vec<ConditionRecord>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
