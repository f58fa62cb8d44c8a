use anyhow::Context;
use clap::{Parser, ValueEnum};
use huntcore::catalog;
use huntcore::prelude::Variant;
use huntcore::telemetry::RunRecorder;
use std::fs;
use std::path::PathBuf;

use generator::scan::{build_ring_catalog, ScanConfig};
use report::RunSummary;
use workflow::config::HuntConfig;
use workflow::runner::Runner;

mod chart;
mod generator;
mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Sky-scan anomaly hunting driver")]
struct Args {
    /// Ring-metrics CSV produced by the survey scan
    #[arg(long)]
    input: Option<PathBuf>,
    /// Load a hunt config from YAML (overrides the threshold flags)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Filter variant to run
    #[arg(long, value_enum, default_value = "strict")]
    variant: VariantArg,
    /// Galactic exclusion half-band, degrees (strict variant only)
    #[arg(long, default_value_t = 20.0)]
    galactic_cut: f64,
    #[arg(long, default_value_t = 0.80)]
    hurst_min: f64,
    #[arg(long, default_value_t = 0.20)]
    corr_min: f64,
    /// Relaxed correlation floor tried when the primary pass is empty
    #[arg(long)]
    corr_fallback: Option<f64>,
    /// Directory receiving the ranked list, sky map, and summary
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,
    /// Fabricate a synthetic catalog instead of reading --input
    #[arg(long, default_value_t = false)]
    synthetic: bool,
    #[arg(long, default_value_t = 768)]
    rings: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariantArg {
    Strict,
    Elite,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Strict => Variant::Strict,
            VariantArg::Elite => Variant::Elite,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config.as_ref() {
        HuntConfig::load(path)?
    } else {
        let variant = Variant::from(args.variant);
        let galactic_cut = match variant {
            Variant::Strict => Some(args.galactic_cut),
            Variant::Elite => None,
        };
        HuntConfig::from_args(
            variant,
            galactic_cut,
            args.hurst_min,
            args.corr_min,
            args.corr_fallback,
            args.out_dir.clone(),
        )
    };

    let records = if args.synthetic {
        build_ring_catalog(&ScanConfig {
            rings: args.rings,
            seed: args.seed,
            ..ScanConfig::default()
        })
    } else {
        let input = args
            .input
            .as_ref()
            .context("either --input or --synthetic is required")?;
        catalog::load_rings(input)?
    };

    let recorder = RunRecorder::new();
    recorder.record_loaded(records.len());

    let runner = Runner::new(config.clone());
    let outcome = runner.execute(&records)?;
    recorder.record_candidates(outcome.summary.candidates);

    fs::create_dir_all(&config.out_dir).with_context(|| {
        format!("creating output directory {}", config.out_dir.display())
    })?;

    let candidates_path = config.out_dir.join("candidates.csv");
    catalog::write_candidates(&candidates_path, &outcome.survivors)?;
    recorder.record_artifact();

    let chart_path = config.out_dir.join("sky_map.png");
    let caption = format!(
        "{} hunt: {} candidates of {} rings",
        config.variant, outcome.summary.candidates, outcome.summary.total
    );
    chart::sky_map::render(
        &chart_path,
        &records,
        &outcome.survivors,
        config.galactic_cut,
        &caption,
    )?;
    recorder.record_artifact();

    let summary_path = config.out_dir.join("summary.json");
    let summary = RunSummary::new(config.variant, &outcome.summary, &outcome.survivors);
    report::write_summary(&summary_path, &summary)?;
    recorder.record_artifact();

    report::console::print_report(config.variant, &outcome.summary, &outcome.survivors);

    let (loaded, candidates, artifacts) = recorder.snapshot();
    log::info!(
        "run complete: {} rings in, {} candidates, {} artifacts under {}",
        loaded,
        candidates,
        artifacts,
        config.out_dir.display()
    );
    Ok(())
}
