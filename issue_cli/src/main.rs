mod bridge;
mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use commands::Output;
use issue_taxonomy::config::RuntimeConfig;
use std::error::Error;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = bridge::init(cli.verbose) {
        eprintln!("Error: failed to initialize logging: {}", e);
        process::exit(2);
    }

    match run(cli) {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => RuntimeConfig::from_file(path)?,
        None => RuntimeConfig::default(),
    };

    if let Some(dir) = cli.resources {
        config.resources.resource_dir = Some(dir);
    }
    config.resources.strict_validation |= cli.strict;

    log::debug!(
        "Resource directory: {}",
        config
            .resources
            .resource_dir
            .as_ref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| "<bundled>".to_string())
    );

    commands::execute(cli.command, &config.resources, Output::from_flag(cli.json))
}
