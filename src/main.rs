use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use slowc::web::{self, Config};
use slowc::{Encounter, SeverityReport};

#[derive(Parser)]
#[command(name = "slowc")]
#[command(about = "Severity loss of well clear for aircraft encounters")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that an encounter file holds two aligned trajectories
    Validate { encounter: PathBuf },
    /// Compute the SLoWC series of an encounter file
    Compute {
        encounter: PathBuf,
        /// YAML config with threshold overrides
        #[arg(long)]
        config: Option<PathBuf>,
        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
        /// Include geometry and penetration ratios per sample
        #[arg(long)]
        detail: bool,
    },
    /// Serve the HTTP API
    Serve {
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { encounter } => validate(&encounter),
        Commands::Compute {
            encounter,
            config,
            json,
            detail,
        } => compute(&encounter, config.as_deref(), json, detail),
        Commands::Serve { config } => serve(config.as_deref()).await,
    }
}

fn validate(path: &Path) -> ExitCode {
    let encounter = match Encounter::from_file(path) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Invalid encounter: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match encounter.ownship.check_aligned(&encounter.intruder) {
        Ok(()) => {
            println!("Encounter is valid ({} samples)", encounter.ownship.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Invalid encounter: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn compute(path: &Path, config: Option<&Path>, json: bool, detail: bool) -> ExitCode {
    let config = match Config::load(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let encounter = match Encounter::from_file(path) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Invalid encounter: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let report = match encounter.calculator(config.thresholds) {
        Ok(calculator) => calculator.report(),
        Err(e) => {
            eprintln!("Invalid encounter: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error serializing report: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_report(&report, detail);
    }

    ExitCode::SUCCESS
}

fn print_report(report: &SeverityReport, detail: bool) {
    for s in &report.samples {
        if detail {
            println!(
                "t={:>10.2}  slowc={:>6.2}  range={:>10.1}ft  hmd={:>10.1}ft  dh={:>7.1}ft  tcpa={:>7.1}s  pen=({:.3}, {:.3}, {:.3})",
                s.timestamp,
                s.severity,
                s.geometry.range_ft,
                s.geometry.hmd_ft,
                s.geometry.dh_ft,
                s.geometry.t_cpa_s,
                s.ratios.range_pen,
                s.ratios.hmd_pen,
                s.ratios.dh_pen
            );
        } else {
            println!("t={:>10.2}  slowc={:>6.2}", s.timestamp, s.severity);
        }
    }

    match report.peak {
        Some(peak) => println!(
            "Peak SLoWC {:.2} at t={:.2} (sample {})",
            peak.severity, peak.timestamp, peak.index
        ),
        None => println!("Encounter has no samples"),
    }
}

async fn serve(config: Option<&Path>) -> ExitCode {
    let config = match Config::load(config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match web::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}
