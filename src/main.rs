//! Folio - a static site generator for a personal portfolio.

mod cli;
mod config;
mod content;
mod core;
mod embed;
mod image;
mod logger;
mod page;
mod render;
mod utils;

use anyhow::{Result, bail};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_site};
use config::{SiteConfig, cfg, clear_clean_flag, init_config};
use utils::plural_count;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(SiteConfig::load(cli)?);

    match &cli.command {
        Commands::Build { .. } => {
            let report = build_site(&config, false)?;
            if !report.faults.is_empty() {
                bail!("{} failed to render", plural_count(report.faults.len(), "page"));
            }
            Ok(())
        }
        Commands::Serve { .. } => {
            // Faulted pages still get the error view; keep serving.
            build_site(&config, false)?;
            clear_clean_flag();
            cli::serve::serve_site(cfg())
        }
        Commands::Query { args } => cli::query::run_query(args),
        Commands::Resolve { paths } => cli::resolve::run_resolve(paths, &config),
        Commands::Theme { action } => cli::theme::run_theme(*action, &config),
    }
}
