use aeroprop_design::feature_windows::{
    CORRUGATION_DEPTH, OWL_DEPTH, OWL_WAVELENGTH, TUBERCLE_AMPLITUDE,
};
use aeroprop_design::{FeatureParams, OperatingCondition, PropellerDesign};
use aeroprop_noise::shedding_frequency;
use serde::Serialize;

/// Ordinal fabrication-difficulty rating. Reporting and tie-breaking only;
/// it never enters the physics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ManufacturingComplexity {
    Low,
    Moderate,
    High,
}

impl ManufacturingComplexity {
    pub fn score(&self) -> u8 {
        match self {
            ManufacturingComplexity::Low => 0,
            ManufacturingComplexity::Moderate => 1,
            ManufacturingComplexity::High => 2,
        }
    }
}

/// Effect of one feature at one operating point: per-component noise cuts
/// in dB (bounded by the feature's documented window), an aerodynamic
/// penalty fraction, and the complexity ordinal.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FeatureModification {
    pub broadband_cut_db: f64,
    pub tonal_cut_db: f64,
    pub vortex_cut_db: f64,
    /// Thrust loss fraction, within [0, 0.05].
    pub thrust_penalty: f64,
    pub complexity: ManufacturingComplexity,
}

/// Evaluate one feature's modification. Parameters are assumed validated
/// (the factory rejects out-of-window values before a design can carry
/// them).
pub fn modification(
    params: &FeatureParams,
    design: &PropellerDesign,
    condition: &OperatingCondition,
) -> FeatureModification {
    match *params {
        FeatureParams::OwlSerrations {
            depth_ratio,
            wavelength_ratio,
        } => owl_serrations(depth_ratio, wavelength_ratio, design, condition),
        FeatureParams::HumpbackTubercles {
            amplitude_ratio,
            wavelength_ratio,
        } => humpback_tubercles(amplitude_ratio, wavelength_ratio, design),
        FeatureParams::DragonflyCorrugations {
            depth_ratio,
            wavelength_ratio,
        } => dragonfly_corrugations(depth_ratio, wavelength_ratio, design, condition),
    }
}

/// Trailing-edge serrations break up coherent vortex structures, cutting
/// vortex-shedding and tonal noise. Effective only while the shedding
/// frequency sits in the serrations' working band (~200 Hz to 20 kHz);
/// outside it the cut rolls off proportionally.
fn owl_serrations(
    depth_ratio: f64,
    wavelength_ratio: f64,
    design: &PropellerDesign,
    condition: &OperatingCondition,
) -> FeatureModification {
    let w = OWL_DEPTH.normalized(depth_ratio);
    let f_shed = shedding_frequency(design, condition);
    let band_gate = if f_shed < 200.0 {
        f_shed / 200.0
    } else if f_shed > 20_000.0 {
        20_000.0 / f_shed
    } else {
        1.0
    };
    // Detuning away from the most effective tooth spacing.
    let detune = 1.0
        - 0.5 * (wavelength_ratio - OWL_WAVELENGTH.default).abs() / OWL_WAVELENGTH.default;
    let scale = band_gate * detune.max(0.0);

    FeatureModification {
        broadband_cut_db: 0.0,
        tonal_cut_db: (6.0 + 12.0 * w.sqrt()) * scale,
        vortex_cut_db: (8.0 + 12.0 * w.sqrt()) * scale,
        thrust_penalty: 0.004 + 0.008 * w,
        complexity: ManufacturingComplexity::Low,
    }
}

/// Leading-edge tubercles modify the spanwise loading and delay
/// separation, cutting tonal noise across a broad operating range and a
/// small amount of broadband. More effective at higher section incidence.
fn humpback_tubercles(
    amplitude_ratio: f64,
    wavelength_ratio: f64,
    design: &PropellerDesign,
) -> FeatureModification {
    let a = TUBERCLE_AMPLITUDE.normalized(amplitude_ratio);
    let aoa_factor = 0.6 + 0.4 * (design.angle_of_attack_deg.abs() / 10.0).min(1.0);
    // Spanwise tubercle count; fewer than four weakens the vortex breakup.
    let count = (1.0 / wavelength_ratio).floor().max(3.0);
    let count_factor = (count / 4.0).min(1.0);

    FeatureModification {
        broadband_cut_db: 2.0 + 4.0 * a,
        tonal_cut_db: (14.0 + 22.0 * a.sqrt()) * aoa_factor * count_factor,
        vortex_cut_db: 0.0,
        thrust_penalty: 0.006 + 0.012 * a,
        complexity: ManufacturingComplexity::High,
    }
}

/// Chordwise corrugations damp boundary-layer turbulence at low Reynolds
/// numbers. Full effect below Re 1e5, fading to a quarter by 5e5 and
/// decaying exponentially beyond.
fn dragonfly_corrugations(
    depth_ratio: f64,
    wavelength_ratio: f64,
    design: &PropellerDesign,
    condition: &OperatingCondition,
) -> FeatureModification {
    let d = CORRUGATION_DEPTH.normalized(depth_ratio);
    let re = design.reynolds_number(condition);
    let re_gate = if re <= 1.0e5 {
        1.0
    } else if re <= 5.0e5 {
        1.0 - 0.75 * (re - 1.0e5) / 4.0e5
    } else {
        0.25 * (-(re - 5.0e5) / 5.0e5).exp()
    };
    // Pleat steepness relative to the reference profile (2h/λ = 1.4).
    let steepness = 2.0 * depth_ratio / wavelength_ratio;
    let profile_factor = (steepness / 1.4).min(1.0);

    FeatureModification {
        broadband_cut_db: (6.0 + 8.0 * d.sqrt()) * re_gate * profile_factor,
        tonal_cut_db: 0.0,
        vortex_cut_db: 0.0,
        thrust_penalty: 0.008 + 0.012 * d,
        complexity: ManufacturingComplexity::Moderate,
    }
}
