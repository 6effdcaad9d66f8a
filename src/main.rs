mod cli;
mod config;
mod dataset;
mod engine;
mod error;
mod input;
mod report;
mod types;

use crate::error::{EcoindexError, Result};
use crate::types::config::EcoindexConfig;
use crate::types::result::{Grade, ScoreReport, ScoredPage};
use clap::Parser;
use std::path::{Path, PathBuf};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const GRADE_GATE: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let config = config::load_config(Path::new("."))?;
    let dataset_path: Option<PathBuf> = cli.dataset.clone().or_else(|| {
        config
            .as_ref()
            .and_then(|cfg| cfg.dataset_path().map(PathBuf::from))
    });
    let loaded = dataset::load(dataset_path.as_deref())?;

    match cli.command {
        cli::Commands::Compute(cmd) => {
            let metrics = types::metrics::PageMetrics::new(cmd.nodes, cmd.size, cmd.requests)?;
            let ecoindex = engine::evaluate(&loaded.dataset.quantiles, &metrics);
            let page = ScoredPage {
                url: cmd.url,
                source: None,
                metrics,
                ecoindex,
            };
            let report = ScoreReport::new(loaded.fingerprint.clone(), vec![page]);

            let format = resolve_format(cmd.format, config.as_ref())?;
            println!("{}", report::render(&report, format)?);

            Ok(gate_code(cmd.min_grade, &report).unwrap_or(exit_code::SUCCESS))
        }
        cli::Commands::Batch(cmd) => {
            let batch = input::collect(&cmd.path)?;
            let pages = batch
                .entries
                .into_iter()
                .map(|sourced| {
                    let ecoindex = engine::evaluate(&loaded.dataset.quantiles, &sourced.entry.metrics);
                    ScoredPage {
                        url: sourced.entry.url,
                        source: Some(sourced.source.display().to_string()),
                        metrics: sourced.entry.metrics,
                        ecoindex,
                    }
                })
                .collect();
            let report = ScoreReport::new(loaded.fingerprint.clone(), pages);

            let format = resolve_format(cmd.format, config.as_ref())?;
            println!("{}", report::render(&report, format)?);

            if batch.skipped > 0 {
                eprintln!(
                    "warning: skipped {} invalid or unreadable entries",
                    batch.skipped
                );
            }
            if let Some(code) = gate_code(cmd.min_grade, &report) {
                Ok(code)
            } else if batch.skipped > 0 {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Dataset => {
            let reference = &loaded.dataset;
            println!("source: {}", loaded.source);
            println!("fingerprint: sha256:{}", loaded.fingerprint);
            println!(
                "tables: dom_size {} breakpoints, nb_request {}, response_size {}",
                reference.quantiles.dom_size.len(),
                reference.quantiles.nb_request.len(),
                reference.quantiles.response_size.len()
            );
            println!(
                "medians: dom_size {}, nb_request {}, response_size {}",
                reference.medians.dom_size,
                reference.medians.nb_request,
                reference.medians.response_size
            );
            println!(
                "targets: dom_size {}, nb_request {}, response_size {}",
                reference.targets.dom_size,
                reference.targets.nb_request,
                reference.targets.response_size
            );
            println!("grades:");
            for entry in &reference.grades {
                println!("  {}  {:>3}  {}", entry.grade, entry.value, entry.color);
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_format(
    flag: Option<cli::ReportFormat>,
    config: Option<&EcoindexConfig>,
) -> Result<report::OutputFormat> {
    if let Some(format) = flag {
        return Ok(match format {
            cli::ReportFormat::Text => report::OutputFormat::Text,
            cli::ReportFormat::Json => report::OutputFormat::Json,
            cli::ReportFormat::Md => report::OutputFormat::Md,
        });
    }
    match config.and_then(|cfg| cfg.output_format()) {
        None => Ok(report::OutputFormat::Text),
        Some("text") => Ok(report::OutputFormat::Text),
        Some("json") => Ok(report::OutputFormat::Json),
        Some("md") => Ok(report::OutputFormat::Md),
        Some(other) => Err(EcoindexError::ConfigParse(format!(
            "unknown output format: {other}"
        ))),
    }
}

fn gate_code(floor: Option<cli::GradeFloor>, report: &ScoreReport) -> Option<i32> {
    let floor = grade_from_floor(floor?);
    let worst = report.worst_grade()?;
    if worst > floor {
        eprintln!("grade gate: worst grade {worst} is below the {floor} floor");
        Some(exit_code::GRADE_GATE)
    } else {
        None
    }
}

fn grade_from_floor(floor: cli::GradeFloor) -> Grade {
    match floor {
        cli::GradeFloor::A => Grade::A,
        cli::GradeFloor::B => Grade::B,
        cli::GradeFloor::C => Grade::C,
        cli::GradeFloor::D => Grade::D,
        cli::GradeFloor::E => Grade::E,
        cli::GradeFloor::F => Grade::F,
        cli::GradeFloor::G => Grade::G,
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
