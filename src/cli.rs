//! CLI definition and dispatch.

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::json_report::JsonReportAdapter;
use crate::adapters::text_report::TextReportAdapter;
use crate::domain::config_validation::indicator_params_from_config;
use crate::domain::error::SigengineError;
use crate::domain::indicator::{compute_all_with, IndicatorParams};
use crate::domain::price::PricePoint;
use crate::domain::report::AnalysisReport;
use crate::domain::signal::synthesize_from_set;
use crate::domain::synthetic;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(name = "sigengine", about = "Technical indicator and trading signal engine")]
pub struct Cli {
    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    Ramp,
    Flat,
    Wave,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute indicators and signals for a price series
    Analyze {
        #[arg(short, long)]
        prices: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print only the trading signals for a price series
    Signals {
        #[arg(short, long)]
        prices: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Validate an indicator configuration
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// Write a synthetic price series as CSV to stdout
    Generate {
        #[arg(long, value_enum, default_value_t = Shape::Wave)]
        shape: Shape,
        #[arg(long, default_value_t = 60)]
        count: usize,
        #[arg(long, default_value_t = 100.0)]
        start: f64,
        /// Final price for `ramp`, amplitude for `wave`
        #[arg(long)]
        end: Option<f64>,
    },
}

/// Install the fmt subscriber on stderr. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .try_init();
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Analyze {
            prices,
            config,
            format,
            output,
        } => run_analyze(&prices, config.as_deref(), format, output.as_deref()),
        Command::Signals { prices, config } => run_signals(&prices, config.as_deref()),
        Command::Validate { config } => run_validate(&config),
        Command::Generate {
            shape,
            count,
            start,
            end,
        } => run_generate(shape, count, start, end),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Section holding output options such as `pretty`.
pub const REPORT_SECTION: &str = "report";

fn load_config(config_path: Option<&Path>) -> Result<FileConfigAdapter, SigengineError> {
    match config_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading config");
            FileConfigAdapter::from_file(path)
        }
        None => Ok(FileConfigAdapter::empty()),
    }
}

pub fn load_params(config_path: Option<&Path>) -> Result<IndicatorParams, SigengineError> {
    indicator_params_from_config(&load_config(config_path)?)
}

/// Load, compute and synthesize: the whole pipeline for one price file.
pub fn analyze(
    data_port: &dyn DataPort,
    prices: &Path,
    params: IndicatorParams,
) -> Result<AnalysisReport, SigengineError> {
    let series = data_port.load_series(prices)?;
    let indicators = compute_all_with(&series, &params);
    if indicators.is_empty() {
        tracing::warn!(
            points = series.len(),
            "series too short for every indicator"
        );
    }
    let signals = synthesize_from_set(&indicators);
    Ok(AnalysisReport::new(&series, params, indicators, signals))
}

fn run_analyze(
    prices: &Path,
    config: Option<&Path>,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<(), SigengineError> {
    let config = load_config(config)?;
    let params = indicator_params_from_config(&config)?;
    let report = analyze(&CsvAdapter::new(PathBuf::from(".")), prices, params)?;

    let reporter: Box<dyn ReportPort> = match format {
        OutputFormat::Text => Box::new(TextReportAdapter::new()),
        OutputFormat::Json => Box::new(JsonReportAdapter::new(config.get_bool(
            REPORT_SECTION,
            "pretty",
            true,
        ))),
    };

    match output {
        Some(path) => {
            let mut file = fs::File::create(path)?;
            reporter.write(&report, &mut file)?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            reporter.write(&report, &mut lock)?;
        }
    }
    Ok(())
}

fn run_signals(prices: &Path, config: Option<&Path>) -> Result<(), SigengineError> {
    let params = load_params(config)?;
    let report = analyze(&CsvAdapter::new(PathBuf::from(".")), prices, params)?;
    let stdout = io::stdout();
    TextReportAdapter::signals_only().write(&report, &mut stdout.lock())
}

fn run_validate(config: &Path) -> Result<(), SigengineError> {
    let adapter = FileConfigAdapter::from_file(config)?;
    let params = indicator_params_from_config(&adapter)?;
    println!("Configuration is valid: {params}");
    Ok(())
}

pub fn generate_points(shape: Shape, count: usize, start: f64, end: Option<f64>) -> Vec<PricePoint> {
    match shape {
        Shape::Ramp => synthetic::linear_ramp(count, start, end.unwrap_or(start)),
        Shape::Flat => synthetic::flat(count, start),
        Shape::Wave => synthetic::sine_wave(count, start, end.unwrap_or(start * 0.05), 20),
    }
}

pub fn write_csv(points: &[PricePoint], out: &mut dyn Write) -> Result<(), SigengineError> {
    let mut wtr = csv::Writer::from_writer(out);
    let to_err = |e: csv::Error| SigengineError::Data {
        reason: format!("CSV write error: {e}"),
    };
    wtr.write_record(["timestamp", "label", "price", "volume"])
        .map_err(to_err)?;
    for p in points {
        wtr.write_record([
            p.timestamp.to_string(),
            p.label.clone(),
            p.price.to_string(),
            p.volume.to_string(),
        ])
        .map_err(to_err)?;
    }
    wtr.flush()?;
    Ok(())
}

fn run_generate(
    shape: Shape,
    count: usize,
    start: f64,
    end: Option<f64>,
) -> Result<(), SigengineError> {
    let points = generate_points(shape, count, start, end);
    synthetic::into_series(points.clone())?;
    let stdout = io::stdout();
    write_csv(&points, &mut stdout.lock())
}
