//! Baseline propeller presets used for comparison against bio-inspired
//! variants. An immutable lookup table keyed by name; values mirror common
//! 10-inch commercial UAV propellers.

use crate::{FeatureSet, OperatingCondition, PropellerDesign};

/// Standard 2-blade commercial UAV propeller (10 inch / 0.254 m).
pub fn standard_2_blade() -> PropellerDesign {
    PropellerDesign {
        name: "Standard 2-Blade Commercial".to_string(),
        num_blades: 2,
        diameter_m: 0.254,
        chord_root_m: 0.035,
        chord_tip_m: 0.015,
        mean_chord_m: 0.025,
        blade_thickness_m: 0.005,
        pitch_deg: 10.0,
        angle_of_attack_deg: 5.0,
        cl_slope: 2.0 * std::f64::consts::PI,
        features: FeatureSet::new(),
    }
}

/// Standard 3-blade commercial UAV propeller.
pub fn standard_3_blade() -> PropellerDesign {
    PropellerDesign {
        name: "Standard 3-Blade Commercial".to_string(),
        num_blades: 3,
        chord_root_m: 0.030,
        chord_tip_m: 0.012,
        mean_chord_m: 0.021,
        ..standard_2_blade()
    }
}

/// Standard 4-blade commercial UAV propeller.
pub fn standard_4_blade() -> PropellerDesign {
    PropellerDesign {
        name: "Standard 4-Blade Commercial".to_string(),
        num_blades: 4,
        chord_root_m: 0.028,
        chord_tip_m: 0.010,
        mean_chord_m: 0.019,
        ..standard_2_blade()
    }
}

/// Typical bench operating point: 5000 RPM at sea level, 20 °C, hover.
pub fn typical_condition() -> OperatingCondition {
    OperatingCondition::hover(5000.0)
}

/// Preset lookup by case-insensitive key (`standard_2_blade` etc.).
pub fn preset(name: &str) -> Option<PropellerDesign> {
    match name.trim().to_ascii_lowercase().as_str() {
        "standard_2_blade" => Some(standard_2_blade()),
        "standard_3_blade" => Some(standard_3_blade()),
        "standard_4_blade" => Some(standard_4_blade()),
        _ => None,
    }
}

/// Names accepted by [`preset`].
pub const PRESET_NAMES: [&str; 3] = ["standard_2_blade", "standard_3_blade", "standard_4_blade"];
