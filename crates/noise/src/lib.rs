//! Semi-empirical propeller noise models.
//!
//! Three independent source mechanisms are modelled at a 1 m observer
//! distance: turbulent-boundary-layer broadband noise, blade-passage tonal
//! noise, and trailing-edge vortex shedding. Components combine by energy
//! summation; bio-inspired dB cuts are applied per component before the
//! total is formed.

use aeroprop_core::acoustics::{apply_cut_db, energy_sum_db, spl_from_pressure};
use aeroprop_core::constants::{SEA_LEVEL_DENSITY_KG_M3, STROUHAL_NUMBER};
use aeroprop_core::units::rpm_to_rev_s;
use aeroprop_design::{DesignError, OperatingCondition, PropellerDesign};
use serde::Serialize;
use thiserror::Error;

// Empirical source strengths calibrated against the reference bench
// dataset (2-blade 0.254 m propeller at 5000 RPM).
const BROADBAND_COEFF: f64 = 1.0e-3;
const TONAL_COEFF: f64 = 5.0e-3;
const VORTEX_COEFF: f64 = 8.0e-4;

#[derive(Debug, Error)]
pub enum NoiseError {
    #[error(transparent)]
    InvalidInput(#[from] DesignError),
}

/// Per-component dB reductions applied before energy summation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NoiseCuts {
    pub broadband_db: f64,
    pub tonal_db: f64,
    pub vortex_db: f64,
}

impl NoiseCuts {
    pub const NONE: NoiseCuts = NoiseCuts {
        broadband_db: 0.0,
        tonal_db: 0.0,
        vortex_db: 0.0,
    };
}

/// Sound-pressure-level breakdown for one design and condition.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct NoiseComponents {
    pub broadband_db: f64,
    pub tonal_db: f64,
    pub vortex_db: f64,
    pub total_db: f64,
    /// Blade passage frequency, fundamental (Hz).
    pub blade_passage_hz: f64,
    /// Vortex shedding frequency (Hz).
    pub shedding_hz: f64,
}

/// Compute the noise breakdown, applying any active feature cuts.
pub fn analyze(
    design: &PropellerDesign,
    condition: &OperatingCondition,
    cuts: &NoiseCuts,
) -> Result<NoiseComponents, NoiseError> {
    design.validate()?;
    condition.validate()?;

    let density_ratio = condition.air_density_kg_m3 / SEA_LEVEL_DENSITY_KG_M3;
    let tip_speed = design.tip_speed_m_s(condition);
    let section_speed = design.effective_speed_m_s(condition);

    let broadband = apply_cut_db(
        broadband_spl(design, density_ratio, section_speed),
        cuts.broadband_db,
    );
    let tonal = apply_cut_db(
        tonal_spl(design, density_ratio, tip_speed),
        cuts.tonal_db,
    );
    let vortex = apply_cut_db(
        vortex_spl(design, density_ratio, section_speed),
        cuts.vortex_db,
    );

    Ok(NoiseComponents {
        broadband_db: broadband,
        tonal_db: tonal,
        vortex_db: vortex,
        total_db: energy_sum_db(&[broadband, tonal, vortex]),
        blade_passage_hz: rpm_to_rev_s(condition.rpm) * f64::from(design.num_blades),
        shedding_hz: shedding_frequency(design, condition),
    })
}

/// Vortex shedding frequency from the Strouhal relation.
pub fn shedding_frequency(design: &PropellerDesign, condition: &OperatingCondition) -> f64 {
    STROUHAL_NUMBER * design.effective_speed_m_s(condition) / design.blade_thickness_m
}

/// Turbulent-boundary-layer broadband noise; ~U^5.5 scaling with section
/// speed, grows with angle of attack.
fn broadband_spl(design: &PropellerDesign, density_ratio: f64, section_speed: f64) -> f64 {
    let aoa_factor = 1.0 + 0.5 * design.angle_of_attack_deg.abs() / 15.0;
    let pressure = BROADBAND_COEFF
        * density_ratio
        * section_speed.powf(5.5)
        * design.mean_chord_m
        * design.blade_thickness_m
        * aoa_factor;
    spl_from_pressure(pressure)
}

/// Blade-passage tonal noise at the fundamental; ~U^4 with tip speed,
/// grows with blade count.
fn tonal_spl(design: &PropellerDesign, density_ratio: f64, tip_speed: f64) -> f64 {
    let pressure =
        TONAL_COEFF * density_ratio * tip_speed.powi(4) * f64::from(design.num_blades) / 2.0;
    spl_from_pressure(pressure)
}

/// Coherent vortex shedding from the blunt trailing edge; ~U^3 scaling.
fn vortex_spl(design: &PropellerDesign, density_ratio: f64, section_speed: f64) -> f64 {
    let pressure =
        VORTEX_COEFF * density_ratio * section_speed.powi(3) * design.blade_thickness_m;
    spl_from_pressure(pressure)
}
