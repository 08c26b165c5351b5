//! Blogi - a markdown blog generator with a built-in publish endpoint.

#![allow(dead_code)]

mod auth;
mod cli;
mod config;
mod editor;
mod embed;
mod frontmatter;
mod generator;
mod logger;
mod markdown;
mod page;
mod publish;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config, false).map(|_| ()),
        Commands::Serve { no_build, .. } => {
            cli::serve::setup_shutdown_handler()?;
            if !no_build {
                cli::build::build_site(&config, false)?;
            }
            cli::serve::serve_site(&config)
        }
        Commands::New { args } => cli::new::new_article(&config, args).map(|_| ()),
        Commands::Preview { file, write } => cli::preview::preview_file(file, write.as_deref()),
        Commands::Publish { file, password } => {
            cli::publish::publish_file(&config, file, password.as_deref()).map(|_| ())
        }
    }
}
