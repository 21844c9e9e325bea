use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::DesignError;

/// The three bio-inspired blade modifications under study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureKind {
    /// Owl-inspired trailing-edge serrations.
    OwlSerrations,
    /// Humpback-whale-inspired leading-edge tubercles.
    HumpbackTubercles,
    /// Dragonfly-inspired chordwise corrugations.
    DragonflyCorrugations,
}

impl FeatureKind {
    pub const ALL: [FeatureKind; 3] = [
        FeatureKind::OwlSerrations,
        FeatureKind::HumpbackTubercles,
        FeatureKind::DragonflyCorrugations,
    ];

    /// Catalog identifier used in configuration files and CLI arguments.
    pub fn identifier(&self) -> &'static str {
        match self {
            FeatureKind::OwlSerrations => "owl_serrations",
            FeatureKind::HumpbackTubercles => "humpback_tubercles",
            FeatureKind::DragonflyCorrugations => "dragonfly_corrugations",
        }
    }

    /// Window for the feature's primary parameter (depth or amplitude
    /// fraction), used by the optimizer's grid refinement.
    pub fn primary_window(&self) -> ParamWindow {
        match self {
            FeatureKind::OwlSerrations => OWL_DEPTH,
            FeatureKind::HumpbackTubercles => TUBERCLE_AMPLITUDE,
            FeatureKind::DragonflyCorrugations => CORRUGATION_DEPTH,
        }
    }

    /// Default parameter record for the feature.
    pub fn default_params(&self) -> FeatureParams {
        match self {
            FeatureKind::OwlSerrations => FeatureParams::OwlSerrations {
                depth_ratio: OWL_DEPTH.default,
                wavelength_ratio: OWL_WAVELENGTH.default,
            },
            FeatureKind::HumpbackTubercles => FeatureParams::HumpbackTubercles {
                amplitude_ratio: TUBERCLE_AMPLITUDE.default,
                wavelength_ratio: TUBERCLE_WAVELENGTH.default,
            },
            FeatureKind::DragonflyCorrugations => FeatureParams::DragonflyCorrugations {
                depth_ratio: CORRUGATION_DEPTH.default,
                wavelength_ratio: CORRUGATION_WAVELENGTH.default,
            },
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for FeatureKind {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "owl_serrations" => Ok(FeatureKind::OwlSerrations),
            "humpback_tubercles" => Ok(FeatureKind::HumpbackTubercles),
            "dragonfly_corrugations" => Ok(FeatureKind::DragonflyCorrugations),
            other => Err(DesignError::UnknownFeature(other.to_string())),
        }
    }
}

/// Inclusive physical window for a feature parameter, with its default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamWindow {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl ParamWindow {
    /// Position of `value` within the window, in [0, 1].
    pub fn normalized(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

// Documented physical windows, as fractions of chord (serrations,
// corrugations) or of local chord / span (tubercles).
pub const OWL_DEPTH: ParamWindow = ParamWindow { min: 0.03, max: 0.10, default: 0.07 };
pub const OWL_WAVELENGTH: ParamWindow = ParamWindow { min: 0.01, max: 0.05, default: 0.025 };
pub const TUBERCLE_AMPLITUDE: ParamWindow = ParamWindow { min: 0.06, max: 0.15, default: 0.12 };
pub const TUBERCLE_WAVELENGTH: ParamWindow = ParamWindow { min: 0.15, max: 0.35, default: 0.25 };
pub const CORRUGATION_DEPTH: ParamWindow = ParamWindow { min: 0.02, max: 0.05, default: 0.035 };
pub const CORRUGATION_WAVELENGTH: ParamWindow = ParamWindow { min: 0.03, max: 0.08, default: 0.05 };

/// Geometry parameters for one applied feature, as fractions of the
/// relevant blade dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "feature", rename_all = "snake_case")]
pub enum FeatureParams {
    OwlSerrations {
        depth_ratio: f64,
        wavelength_ratio: f64,
    },
    HumpbackTubercles {
        amplitude_ratio: f64,
        wavelength_ratio: f64,
    },
    DragonflyCorrugations {
        depth_ratio: f64,
        wavelength_ratio: f64,
    },
}

impl FeatureParams {
    pub fn kind(&self) -> FeatureKind {
        match self {
            FeatureParams::OwlSerrations { .. } => FeatureKind::OwlSerrations,
            FeatureParams::HumpbackTubercles { .. } => FeatureKind::HumpbackTubercles,
            FeatureParams::DragonflyCorrugations { .. } => FeatureKind::DragonflyCorrugations,
        }
    }

    /// Reject parameters outside their documented physical windows.
    pub fn validate(&self) -> Result<(), DesignError> {
        match *self {
            FeatureParams::OwlSerrations {
                depth_ratio,
                wavelength_ratio,
            } => {
                check_window(self.kind(), "depth_ratio", depth_ratio, OWL_DEPTH)?;
                check_window(self.kind(), "wavelength_ratio", wavelength_ratio, OWL_WAVELENGTH)
            }
            FeatureParams::HumpbackTubercles {
                amplitude_ratio,
                wavelength_ratio,
            } => {
                check_window(self.kind(), "amplitude_ratio", amplitude_ratio, TUBERCLE_AMPLITUDE)?;
                check_window(
                    self.kind(),
                    "wavelength_ratio",
                    wavelength_ratio,
                    TUBERCLE_WAVELENGTH,
                )
            }
            FeatureParams::DragonflyCorrugations {
                depth_ratio,
                wavelength_ratio,
            } => {
                check_window(self.kind(), "depth_ratio", depth_ratio, CORRUGATION_DEPTH)?;
                check_window(
                    self.kind(),
                    "wavelength_ratio",
                    wavelength_ratio,
                    CORRUGATION_WAVELENGTH,
                )
            }
        }
    }

    /// Copy of this record with the primary parameter (depth or amplitude)
    /// replaced; wavelengths are left untouched.
    pub fn with_primary(&self, value: f64) -> FeatureParams {
        match *self {
            FeatureParams::OwlSerrations { wavelength_ratio, .. } => FeatureParams::OwlSerrations {
                depth_ratio: value,
                wavelength_ratio,
            },
            FeatureParams::HumpbackTubercles { wavelength_ratio, .. } => {
                FeatureParams::HumpbackTubercles {
                    amplitude_ratio: value,
                    wavelength_ratio,
                }
            }
            FeatureParams::DragonflyCorrugations { wavelength_ratio, .. } => {
                FeatureParams::DragonflyCorrugations {
                    depth_ratio: value,
                    wavelength_ratio,
                }
            }
        }
    }
}

fn check_window(
    feature: FeatureKind,
    parameter: &'static str,
    value: f64,
    window: ParamWindow,
) -> Result<(), DesignError> {
    if !value.is_finite() || !window.contains(value) {
        return Err(DesignError::InvalidParameterRange {
            feature,
            parameter,
            value,
            min: window.min,
            max: window.max,
        });
    }
    Ok(())
}
