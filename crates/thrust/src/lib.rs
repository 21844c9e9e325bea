//! Thrust and power models.
//!
//! The primary model is a blade-element integration with linear chord
//! taper and a thin-airfoil lift slope; a momentum-theory estimate is kept
//! as a cross-check. Aerodynamic penalties from bio-inspired features are
//! applied as a multiplicative factor on the integrated thrust.

use aeroprop_design::{DesignError, OperatingCondition, PropellerDesign};
use serde::Serialize;
use thiserror::Error;

/// Number of radial stations for the blade-element integration.
const BLADE_ELEMENTS: usize = 20;
/// Inner cutoff of the lifting portion of the blade, as a fraction of R.
const ROOT_CUTOFF_FRACTION: f64 = 0.2;

#[derive(Debug, Error)]
pub enum ThrustError {
    #[error(transparent)]
    InvalidInput(#[from] DesignError),
    #[error("design and condition yield non-positive thrust ({thrust_n} N)")]
    NonPositiveThrust { thrust_n: f64 },
}

/// Integrated forces and derived quantities for one design and condition.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThrustBreakdown {
    pub thrust_n: f64,
    pub torque_nm: f64,
    pub power_w: f64,
    /// Induced-power efficiency (ideal power over shaft power, capped at 1).
    pub efficiency: f64,
    /// Multiplicative factor applied for feature aerodynamic penalties.
    pub penalty_factor: f64,
}

/// Blade-element thrust with an aerodynamic penalty factor applied.
///
/// `penalty_factor` is the product of `1 - penalty_i` over active features
/// (1.0 for a bare design). A combination whose penalties drive thrust
/// non-positive is a configuration error, not a value to clamp.
pub fn blade_element(
    design: &PropellerDesign,
    condition: &OperatingCondition,
    penalty_factor: f64,
) -> Result<ThrustBreakdown, ThrustError> {
    design.validate()?;
    condition.validate()?;

    let rho = condition.air_density_kg_m3;
    let omega = condition.angular_rate_rad_s();
    let radius = design.radius_m();
    let blades = f64::from(design.num_blades);
    let pitch_rad = design.pitch_deg.to_radians();
    let cl = design.cl_slope * pitch_rad;
    let cd = 0.01 + 0.05 * pitch_rad * pitch_rad;

    let r_inner = ROOT_CUTOFF_FRACTION * radius;
    let dr = (radius - r_inner) / (BLADE_ELEMENTS as f64 - 1.0);

    let mut thrust = 0.0;
    let mut torque = 0.0;
    for i in 0..BLADE_ELEMENTS {
        let r = r_inner + dr * i as f64;
        let chord = design.chord_root_m
            + (design.chord_tip_m - design.chord_root_m) * (r / radius);
        let q = 0.5 * rho * (omega * r).powi(2) * chord * dr * blades;
        thrust += q * cl;
        torque += q * cd * r;
    }

    let effective_thrust = thrust * penalty_factor;
    if effective_thrust <= 0.0 || !effective_thrust.is_finite() {
        return Err(ThrustError::NonPositiveThrust {
            thrust_n: effective_thrust,
        });
    }

    let power = torque * omega;
    let efficiency = if power > 0.0 {
        let disk_area = std::f64::consts::PI * radius * radius;
        let v_induced = (effective_thrust / (2.0 * rho * disk_area)).sqrt();
        (effective_thrust * v_induced / power).min(1.0)
    } else {
        0.0
    };

    Ok(ThrustBreakdown {
        thrust_n: effective_thrust,
        torque_nm: torque,
        power_w: power,
        efficiency,
        penalty_factor,
    })
}

/// Momentum-theory hover thrust from disk area and shaft power:
/// `T = sqrt(2 ρ A P)`. Cross-check estimator only.
pub fn momentum_theory(
    condition: &OperatingCondition,
    diameter_m: f64,
    power_w: f64,
) -> Result<f64, ThrustError> {
    condition.validate()?;
    if diameter_m <= 0.0 {
        return Err(ThrustError::InvalidInput(DesignError::InvalidGeometry {
            field: "diameter_m",
            value: diameter_m,
        }));
    }
    let area = std::f64::consts::PI * (diameter_m / 2.0).powi(2);
    Ok((2.0 * condition.air_density_kg_m3 * area * power_w.max(0.0)).sqrt())
}

/// Advance ratio `J = V / (n D)` for forward flight.
pub fn advance_ratio(condition: &OperatingCondition, diameter_m: f64) -> f64 {
    let n = condition.rpm / 60.0;
    if n * diameter_m == 0.0 {
        return 0.0;
    }
    condition.forward_velocity_m_s / (n * diameter_m)
}
