use aeroprop::design::OperatingCondition;
use aeroprop::design::catalog::{standard_2_blade, typical_condition};
use aeroprop::thrust::{self, ThrustError};

#[test]
fn reference_thrust_matches_bench_calibration() {
    let design = standard_2_blade();
    let condition = typical_condition();
    let breakdown = thrust::blade_element(&design, &condition, 1.0).unwrap();

    assert!(
        (breakdown.thrust_n - 5.2227056).abs() < 1e-6,
        "thrust = {}",
        breakdown.thrust_n
    );
    assert!(breakdown.torque_nm > 0.0);
    assert!(breakdown.power_w > 0.0);
    assert!(breakdown.efficiency > 0.0 && breakdown.efficiency <= 1.0);
}

#[test]
fn penalty_factor_strictly_reduces_thrust() {
    let design = standard_2_blade();
    let condition = typical_condition();
    let bare = thrust::blade_element(&design, &condition, 1.0).unwrap();
    let penalized = thrust::blade_element(&design, &condition, 0.9).unwrap();

    assert!(penalized.thrust_n < bare.thrust_n);
    assert!((penalized.thrust_n - 0.9 * bare.thrust_n).abs() < 1e-9);
    // Torque and power come from drag, which the feature penalty leaves alone.
    assert!((penalized.power_w - bare.power_w).abs() < 1e-9);
}

#[test]
fn zero_pitch_yields_non_positive_thrust_error() {
    let mut design = standard_2_blade();
    design.pitch_deg = 0.0;
    let condition = typical_condition();
    let err = thrust::blade_element(&design, &condition, 1.0).unwrap_err();
    assert!(matches!(err, ThrustError::NonPositiveThrust { .. }));
}

#[test]
fn thrust_rises_with_rpm() {
    let design = standard_2_blade();
    let slow = thrust::blade_element(&design, &OperatingCondition::hover(4000.0), 1.0).unwrap();
    let fast = thrust::blade_element(&design, &OperatingCondition::hover(6000.0), 1.0).unwrap();
    assert!(fast.thrust_n > slow.thrust_n);
}

#[test]
fn momentum_theory_agrees_within_an_order_of_magnitude() {
    let design = standard_2_blade();
    let condition = typical_condition();
    let be = thrust::blade_element(&design, &condition, 1.0).unwrap();
    let mt = thrust::momentum_theory(&condition, design.diameter_m, be.power_w).unwrap();

    assert!(mt > 0.0);
    let ratio = be.thrust_n / mt;
    assert!(ratio > 1.0 && ratio < 10.0, "ratio = {}", ratio);
}

#[test]
fn advance_ratio_is_zero_in_hover() {
    let condition = typical_condition();
    assert_eq!(thrust::advance_ratio(&condition, 0.254), 0.0);

    let mut forward = condition;
    forward.forward_velocity_m_s = 10.0;
    let j = thrust::advance_ratio(&forward, 0.254);
    assert!((j - 0.4724).abs() < 1e-3, "J = {}", j);
}
