use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, anyhow};
use clap::Parser;

use aeroprop::design::{FeatureKind, PropellerDesign};
use aeroprop::export::{report, sweep};
use aeroprop::optimize::{SearchConfig, SearchOutcome, optimize};
use aeroprop::scenario;

/// Sweep bio-inspired feature combinations for a baseline propeller and
/// rank them by noise-to-thrust-ratio reduction.
#[derive(Parser, Debug)]
#[command(author, version, about = "Bio-inspired propeller design sweep (CSV/JSON)")]
struct Cli {
    /// Built-in baseline preset (standard_2_blade, standard_3_blade,
    /// standard_4_blade); ignored when --catalog is given
    #[arg(long, default_value = "standard_2_blade")]
    preset: String,

    /// Propeller catalog (YAML file or directory of TOML files)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Propeller name within the catalog (default: first record)
    #[arg(long)]
    name: Option<String>,

    /// Rotor speed override in RPM (default: 5000 RPM hover)
    #[arg(long)]
    rpm: Option<f64>,

    /// Features to sweep (comma-separated identifiers; default: all three)
    #[arg(long, value_delimiter = ',')]
    features: Vec<String>,

    /// NTR reduction target in percent
    #[arg(long, default_value_t = 15.0)]
    target: f64,

    /// Grid points per feature primary parameter
    #[arg(long, default_value_t = 3)]
    grid: usize,

    /// Maximum combined thrust penalty in percent (unset: no budget)
    #[arg(long)]
    budget: Option<f64>,

    /// Hard cap on enumerated candidates
    #[arg(long, default_value_t = 512)]
    max_candidates: usize,

    /// Output CSV file (use '-' for stdout)
    #[arg(long, default_value = "artifacts/sweep.csv")]
    output: PathBuf,

    /// Also write the full ranked outcome as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Rows shown in the stdout summary
    #[arg(long, default_value_t = 10)]
    top: usize,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let baseline = match &cli.catalog {
        Some(path) => scenario::load_design(path, cli.name.as_deref())
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => scenario::preset_design(&cli.preset)?,
    };

    let mut condition = scenario::typical_condition();
    if let Some(rpm) = cli.rpm {
        condition.rpm = rpm;
    }

    let feature_pool = if cli.features.is_empty() {
        FeatureKind::ALL.to_vec()
    } else {
        cli.features
            .iter()
            .map(|s| FeatureKind::from_str(s).map_err(|e| anyhow!(e)))
            .collect::<anyhow::Result<Vec<_>>>()?
    };

    let config = SearchConfig {
        feature_pool,
        target_percent: cli.target,
        grid_points: cli.grid,
        penalty_budget_percent: cli.budget,
        max_candidates: cli.max_candidates,
    };
    let outcome = optimize(&baseline, &condition, &config)?;

    let mut writer = sweep::writer_for_path(&cli.output)?;
    sweep::write_header(writer.as_mut())?;
    for (index, candidate) in outcome.candidates.iter().enumerate() {
        let features = feature_label(&candidate.design);
        let record = sweep::Record {
            rank: index + 1,
            features: &features,
            total_noise_db: candidate.evaluation.components.total_db,
            broadband_db: candidate.evaluation.components.broadband_db,
            tonal_db: candidate.evaluation.components.tonal_db,
            vortex_db: candidate.evaluation.components.vortex_db,
            thrust_n: candidate.evaluation.thrust.thrust_n,
            power_w: candidate.evaluation.thrust.power_w,
            ntr_db_per_n: candidate.evaluation.performance.ntr_db_per_n,
            reduction_percent: candidate.reduction_percent,
            penalty_percent: candidate.penalty_percent,
            complexity_score: candidate.complexity_score,
            target_met: candidate.target_met,
        };
        record.write_to(writer.as_mut())?;
    }
    writer.flush()?;

    if let Some(path) = &cli.json {
        let mut json_writer = sweep::writer_for_path(path)?;
        report::write_json(json_writer.as_mut(), &outcome)?;
        json_writer.flush()?;
    }

    if cli.output != PathBuf::from("-") {
        print_summary(&baseline, &outcome, cli.target, cli.top);
    }

    Ok(())
}

fn print_summary(baseline: &PropellerDesign, outcome: &SearchOutcome, target: f64, top: usize) {
    println!("Baseline: {}", baseline.name);
    println!("Baseline NTR: {:.4} dB/N", outcome.baseline_ntr);
    println!(
        "Candidates: {} evaluated, {} excluded",
        outcome.evaluated, outcome.excluded
    );
    println!(
        "Target: {:.1}% reduction: {}",
        target,
        if outcome.target_met { "met" } else { "not met" }
    );
    println!();
    println!(
        "{:<4} {:<55} {:>10} {:>9} {:>5}",
        "rank", "features", "reduction%", "penalty%", "cmplx"
    );
    for (index, candidate) in outcome.candidates.iter().take(top).enumerate() {
        println!(
            "{:<4} {:<55} {:>10.3} {:>9.3} {:>5}",
            index + 1,
            feature_label(&candidate.design),
            candidate.reduction_percent,
            candidate.penalty_percent,
            candidate.complexity_score,
        );
    }
}

fn feature_label(design: &PropellerDesign) -> String {
    if design.features.is_empty() {
        return "baseline".to_string();
    }
    design
        .features
        .keys()
        .map(|kind| kind.identifier())
        .collect::<Vec<_>>()
        .join("+")
}
