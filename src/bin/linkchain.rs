#![forbid(unsafe_code)]
//! Builds a small chain from genesis and dumps it.

use clap::Parser;
use colored::*;
use linkchain::blockchain::Blockchain;
use linkchain::config::{load_config, ConfigOverrides, DEFAULT_CONFIG_PATH};
use linkchain::display::{render_chain, OutputFormat};
use linkchain::driver;
use linkchain::logging::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the config file; defaults apply if it does not exist
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Number of blocks to derive and append after genesis
    #[arg(long)]
    rounds: Option<usize>,
    /// How to print the final chain
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Default log level when RUST_LOG is unset
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?.apply_overrides(ConfigOverrides {
        rounds: cli.rounds,
        output_format: cli.format,
        log_level: cli.log_level,
    })?;

    init_logging(&config.logging.level, config.logging.log_format()?);

    let report = driver::run(Blockchain::new(), config.driver.rounds);
    if !report.failures.is_empty() {
        eprintln!(
            "{}",
            format!(
                "{} of {} rounds were rejected",
                report.failures.len(),
                config.driver.rounds
            )
            .yellow()
        );
    }

    let format = config.output.format;
    if format == OutputFormat::Table {
        println!("{}", "LinkChain".bright_cyan().bold());
        println!("{}", "---------".bright_cyan());
    }
    println!("{}", render_chain(&report.chain, format)?);

    Ok(())
}
