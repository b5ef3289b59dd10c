//! affinity-play — run a narrative script against a fresh relationship session.
//!
//! Usage: affinity-play <script> [--config <path>]
//!
//! Every `@addlove` / `@showstats` line in the script is executed in order;
//! other lines are narration and ignored. A final stat dump is printed to
//! stdout. Set `RUST_LOG` to override the configured log level.

use std::path::PathBuf;

use affinity_core::AffinityConfig;
use affinity_script::ScriptSession;
use anyhow::{Context, bail};
use tracing_subscriber::EnvFilter;

/// Parsed command line.
#[derive(Debug, PartialEq, Eq)]
struct Args {
    script_path: PathBuf,
    config_path: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return Ok(());
    }

    let Args {
        script_path,
        config_path,
    } = parse_args(&args[1..]).inspect_err(|_| print_usage())?;

    let config = match &config_path {
        Some(path) => AffinityConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AffinityConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let script = std::fs::read_to_string(&script_path)
        .with_context(|| format!("reading script {}", script_path.display()))?;

    let mut session = ScriptSession::from_config(&config);
    let report = session.run_script(&script);

    if let Some(store) = session.end() {
        println!("{}", store.dump_stats());
    }
    println!(
        "{} commands executed, {} skipped, {} unparseable",
        report.executed, report.skipped, report.parse_errors
    );
    Ok(())
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let mut script_path: Option<PathBuf> = None;
    let mut config_path: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" if i + 1 < args.len() => {
                i += 1;
                config_path = Some(PathBuf::from(&args[i]));
            }
            "--config" => bail!("--config requires a path"),
            arg if !arg.starts_with("--") && script_path.is_none() => {
                script_path = Some(PathBuf::from(arg));
            }
            other => bail!("unknown argument: {other}"),
        }
        i += 1;
    }

    let Some(script_path) = script_path else {
        bail!("no script given");
    };
    Ok(Args {
        script_path,
        config_path,
    })
}

fn print_usage() {
    eprintln!("Usage: affinity-play <script> [--config <path>]");
    eprintln!();
    eprintln!("Runs @addlove / @showstats commands from a narrative script.");
}
