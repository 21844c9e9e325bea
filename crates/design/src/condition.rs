use aeroprop_core::{air, constants, units};
use serde::Serialize;

use crate::DesignError;

/// Operating point for a propeller analysis.
///
/// Immutable input to every analysis; `forward_velocity_m_s` may be zero
/// for hover.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OperatingCondition {
    pub rpm: f64,
    pub air_density_kg_m3: f64,
    pub temperature_c: f64,
    pub ambient_pressure_pa: f64,
    pub forward_velocity_m_s: f64,
}

impl OperatingCondition {
    /// Hover condition at sea-level standard atmosphere.
    pub fn hover(rpm: f64) -> Self {
        Self {
            rpm,
            air_density_kg_m3: constants::SEA_LEVEL_DENSITY_KG_M3,
            temperature_c: 20.0,
            ambient_pressure_pa: constants::STANDARD_PRESSURE_PA,
            forward_velocity_m_s: 0.0,
        }
    }

    /// Reject non-positive rotor speed or air density.
    pub fn validate(&self) -> Result<(), DesignError> {
        if self.rpm <= 0.0 {
            return Err(DesignError::InvalidOperatingCondition {
                field: "rpm",
                value: self.rpm,
            });
        }
        if self.air_density_kg_m3 <= 0.0 {
            return Err(DesignError::InvalidOperatingCondition {
                field: "air_density_kg_m3",
                value: self.air_density_kg_m3,
            });
        }
        if self.forward_velocity_m_s < 0.0 {
            return Err(DesignError::InvalidOperatingCondition {
                field: "forward_velocity_m_s",
                value: self.forward_velocity_m_s,
            });
        }
        Ok(())
    }

    /// Rotor angular rate (rad/s).
    pub fn angular_rate_rad_s(&self) -> f64 {
        units::rpm_to_rad_s(self.rpm)
    }

    /// Dynamic viscosity of the ambient air (Pa·s).
    pub fn dynamic_viscosity(&self) -> f64 {
        air::dynamic_viscosity(self.temperature_c)
    }
}
