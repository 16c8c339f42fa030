//! # freud runner
//!
//! Runs the simulation engine for a preset or a JSON parameter file and
//! prints the canonical runlog hash.
//!
//! ## Usage
//!
//! ```text
//! freud [--preset NAME] [--params FILE] [--seed N] [--export PATH]
//! ```
//!
//! `--preset` and `--params` are mutually exclusive; with neither, the
//! baseline preset runs. `--seed` overrides the seed of whatever record
//! was resolved. `--export` writes the runlog as pretty JSON.

use std::path::PathBuf;
use std::process::exit;

use freud_cli::{export, presets};
use freud_engine::run_simulation;
use freud_graph::SimParams;
use freud_runlog::runlog_hash;

struct CliConfig {
    params: SimParams,
    export_path: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "freud_engine=info,freud=info".into()),
        )
        .init();

    let config = parse_args();

    if let Err(err) = config.params.validate() {
        eprintln!("error: {err}");
        exit(2);
    }

    let outcome = match run_simulation(&config.params) {
        Ok(o) => o,
        Err(err) => {
            eprintln!("error: {err}");
            exit(1);
        }
    };

    let hash = match runlog_hash(&outcome.runlog) {
        Ok(h) => h,
        Err(err) => {
            eprintln!("error: {err}");
            exit(1);
        }
    };

    if let Some(path) = &config.export_path {
        if let Err(err) = export::write_runlog(path, &outcome.runlog) {
            eprintln!("error: failed to export runlog: {err}");
            exit(1);
        }
        tracing::info!(path = %path.display(), "runlog exported");
    }

    let last = outcome.runlog.steps.last();
    tracing::info!(
        steps = outcome.runlog.steps.len(),
        final_active = last.map(|s| s.active_nodes.len()).unwrap_or(0),
        final_delta = last.map(|s| s.delta).unwrap_or(0.0),
        "run finished"
    );
    println!("{hash}");
}

fn parse_args() -> CliConfig {
    let mut preset: Option<String> = None;
    let mut params_file: Option<PathBuf> = None;
    let mut seed: Option<u32> = None;
    let mut export_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--preset" => preset = Some(expect_value(&mut args, "--preset")),
            "--params" => params_file = Some(expect_value(&mut args, "--params").into()),
            "--seed" => {
                let raw = expect_value(&mut args, "--seed");
                seed = Some(raw.parse().unwrap_or_else(|_| {
                    eprintln!("error: --seed expects a non-negative integer, got `{raw}`");
                    exit(2);
                }));
            }
            "--export" => export_path = Some(expect_value(&mut args, "--export").into()),
            "--help" | "-h" => {
                print_usage();
                exit(0);
            }
            other => {
                eprintln!("error: unknown argument `{other}`");
                print_usage();
                exit(2);
            }
        }
    }

    if preset.is_some() && params_file.is_some() {
        eprintln!("error: --preset and --params are mutually exclusive");
        exit(2);
    }

    let mut params = if let Some(name) = preset {
        presets::resolve(&name).unwrap_or_else(|| {
            eprintln!(
                "error: unknown preset `{name}` (known: {})",
                presets::names().join(", ")
            );
            exit(2);
        })
    } else if let Some(path) = params_file {
        let raw = std::fs::read_to_string(&path).unwrap_or_else(|err| {
            eprintln!("error: cannot read {}: {err}", path.display());
            exit(2);
        });
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            eprintln!("error: invalid parameter file {}: {err}", path.display());
            exit(2);
        })
    } else {
        SimParams::default()
    };

    if let Some(seed) = seed {
        params.seed = seed;
    }

    CliConfig {
        params,
        export_path,
    }
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> String {
    args.next().unwrap_or_else(|| {
        eprintln!("error: {flag} expects a value");
        exit(2);
    })
}

fn print_usage() {
    eprintln!("usage: freud [--preset NAME] [--params FILE] [--seed N] [--export PATH]");
    eprintln!("presets: {}", presets::names().join(", "));
}
