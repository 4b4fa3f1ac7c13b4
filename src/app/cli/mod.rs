//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::HookOptions;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "scaffold-hook")]
#[command(version)]
#[command(
    about = "Ensure the bounded-context directory skeleton exists in a generated project",
    long_about = None
)]
struct Cli {
    /// Generated project root (defaults to the current directory)
    #[arg(short = 'C', long, value_name = "DIR")]
    base_dir: Option<PathBuf>,
    /// TOML layout listing the directory templates to ensure
    #[arg(short, long, value_name = "FILE")]
    layout: Option<PathBuf>,
    /// JSON or YAML file with context values
    #[arg(short, long, value_name = "FILE")]
    context_file: Option<PathBuf>,
    /// Context value, e.g. `--set context_name=billing` (repeatable)
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,
    /// Log each resolved and created directory to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let options = HookOptions {
        base_dir: cli.base_dir,
        layout: cli.layout,
        context_file: cli.context_file,
        assignments: cli.set,
    };

    let result: Result<(), AppError> = crate::run_hook(&options).map(|_| ());

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("scaffold_hook=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when the CLI is driven from tests.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
