use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use sysprobe::checks::{filter_cases, render_listing, run_suite, suite, RunMode};
use sysprobe::logging::init_tracing;
use sysprobe::settings::load_settings;

#[derive(Parser, Debug)]
#[command(name = "sysprobe", version, about = "Drive OS primitives and check what they do")]
struct Cli {
    /// Settings file (TOML). Defaults to the per-user config directory.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the available cases
    List,
    /// Run the suite, or the cases whose name contains FILTER
    Run {
        #[arg(long)]
        filter: Option<String>,
        /// Run cases one after another instead of in parallel
        #[arg(long)]
        serial: bool,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    match real_main() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("sysprobe: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether every selected case passed.
fn real_main() -> Result<bool> {
    let cli = Cli::parse();
    let settings = load_settings(cli.config.as_deref()).context("failed to load settings")?;
    let _guard = init_tracing(&settings.logging).context("failed to initialise logging")?;

    match cli.command {
        Command::List => {
            print!("{}", render_listing(&suite()));
            Ok(true)
        }
        Command::Run {
            filter,
            serial,
            format,
        } => {
            let mut cases = suite();
            if let Some(f) = &filter {
                cases = filter_cases(cases, f);
                if cases.is_empty() {
                    anyhow::bail!("no case matches `{}`", f);
                }
            }
            let mode = if serial { RunMode::Serial } else { RunMode::Parallel };
            tracing::info!(cases = cases.len(), ?mode, "running suite");
            let report = run_suite(&cases, &settings, mode);
            match format {
                Format::Text => print!("{}", report.render_text()),
                Format::Json => println!("{}", report.render_json().context("failed to encode report")?),
            }
            Ok(report.all_passed())
        }
    }
}
