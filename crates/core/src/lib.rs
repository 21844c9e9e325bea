//! Core units, constants, and shared acoustic primitives for the aeroprop workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Reference pressure for sound pressure level, 20 µPa.
    pub const REFERENCE_PRESSURE_PA: f64 = 2.0e-5;
    /// Sea-level standard air density (kg/m³).
    pub const SEA_LEVEL_DENSITY_KG_M3: f64 = 1.225;
    /// Standard ambient pressure (Pa).
    pub const STANDARD_PRESSURE_PA: f64 = 101_325.0;
    /// Specific gas constant for dry air (J/(kg·K)).
    pub const AIR_GAS_CONSTANT: f64 = 287.058;
    /// Strouhal number for blunt trailing-edge vortex shedding.
    pub const STROUHAL_NUMBER: f64 = 0.2;
    /// Fraction of tip radius used as the representative blade section.
    pub const EFFECTIVE_RADIUS_FRACTION: f64 = 0.75;
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert rotor speed in rev/min to angular rate in rad/s.
    #[inline]
    pub fn rpm_to_rad_s(rpm: f64) -> f64 {
        rpm * 2.0 * std::f64::consts::PI / 60.0
    }

    /// Convert rotor speed in rev/min to rev/s.
    #[inline]
    pub fn rpm_to_rev_s(rpm: f64) -> f64 {
        rpm / 60.0
    }

    /// Convert degrees to radians.
    #[inline]
    pub fn deg_to_rad(deg: f64) -> f64 {
        deg.to_radians()
    }

    /// Convert Celsius to Kelvin.
    #[inline]
    pub fn celsius_to_kelvin(celsius: f64) -> f64 {
        celsius + 273.15
    }
}

/// Sound-pressure-level arithmetic shared by the noise and bio crates.
///
/// Levels are energy quantities: combining components means summing
/// 10^(dB/10) terms, never adding decibels linearly.
pub mod acoustics {
    use super::constants::REFERENCE_PRESSURE_PA;

    /// Sound pressure level (dB re 20 µPa) of an rms pressure.
    ///
    /// Non-positive pressures map to 0 dB; the semi-empirical source models
    /// only ever produce positive pressures for valid inputs.
    #[inline]
    pub fn spl_from_pressure(pressure_pa: f64) -> f64 {
        if pressure_pa <= 0.0 {
            return 0.0;
        }
        20.0 * (pressure_pa / REFERENCE_PRESSURE_PA).log10()
    }

    /// Energy-domain summation of SPL components:
    /// `10 * log10(sum(10^(dB_i/10)))`.
    #[inline]
    pub fn energy_sum_db(levels: &[f64]) -> f64 {
        let total: f64 = levels.iter().map(|db| 10f64.powf(db / 10.0)).sum();
        10.0 * total.log10()
    }

    /// Subtract a dB cut from a component level, flooring at 0 dB.
    #[inline]
    pub fn apply_cut_db(level_db: f64, cut_db: f64) -> f64 {
        (level_db - cut_db).max(0.0)
    }
}

/// Air property helpers used for Reynolds-number gating.
pub mod air {
    use super::constants::AIR_GAS_CONSTANT;
    use super::units::celsius_to_kelvin;

    /// Dynamic viscosity of air from Sutherland's law (Pa·s).
    #[inline]
    pub fn dynamic_viscosity(temperature_c: f64) -> f64 {
        let t = celsius_to_kelvin(temperature_c);
        1.458e-6 * t.powf(1.5) / (t + 110.4)
    }

    /// Ideal-gas air density (kg/m³) from pressure and temperature.
    #[inline]
    pub fn density_from_state(pressure_pa: f64, temperature_c: f64) -> f64 {
        pressure_pa / (AIR_GAS_CONSTANT * celsius_to_kelvin(temperature_c))
    }

    /// Chord Reynolds number for a blade section.
    #[inline]
    pub fn reynolds_number(density_kg_m3: f64, velocity_m_s: f64, chord_m: f64, temperature_c: f64) -> f64 {
        density_kg_m3 * velocity_m_s * chord_m / dynamic_viscosity(temperature_c)
    }
}
