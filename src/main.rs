use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{arg, Command};
use tracing::info;

use hospital_rvns::instance::Hospital;
use hospital_rvns::rvns::{RvnsConfig, RvnsSolver};

fn cli() -> Command {
    Command::new("hospital-rvns")
        .about("Solves integrated patient admission and nurse-to-room scheduling")
        .arg(
            arg!(<INSTANCE> "Path to the instance json file")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--"time-limit" [SECONDS] "Wall-clock budget in seconds")
                .default_value("60")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(arg!(--seed [SEED] "RNG seed for a reproducible run").value_parser(clap::value_parser!(u64)))
        .arg(
            arg!(--output [PATH] "Where to write the solution json")
                .default_value("solution.json")
                .value_parser(clap::value_parser!(PathBuf)),
        )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let matches = cli().get_matches();
    let instance_path: &PathBuf = matches.get_one("INSTANCE").unwrap();
    let time_limit_secs: u64 = *matches.get_one("time-limit").unwrap();
    let output_path: &PathBuf = matches.get_one("output").unwrap();

    let hospital = Hospital::load(instance_path)
        .with_context(|| format!("failed to load instance {}", instance_path.display()))?;
    info!(
        days = hospital.days,
        patients = hospital.patients.len(),
        nurses = hospital.nurses.len(),
        "instance loaded"
    );

    let mut config = RvnsConfig::new().with_time_limit_ms(time_limit_secs * 1000);
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(seed);
    }

    let result = RvnsSolver::run(&hospital, &config);
    info!(
        initial = result.initial_cost,
        best = result.best_cost,
        iterations = result.iterations,
        "search complete"
    );
    for (label, cost) in result.breakdown.entries() {
        if cost > 0 {
            info!(constraint = label, cost, "residual cost");
        }
    }

    let json = serde_json::to_string_pretty(&result.best)?;
    fs::write(output_path, json)
        .with_context(|| format!("failed to write solution to {}", output_path.display()))?;
    info!(path = %output_path.display(), "solution written");
    Ok(())
}
