//! tola-asset - dependency-ordered asset tags from an assets.toml manifest.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    tola_asset::logger::set_verbose(cli.verbose);

    let manifest = cli::load_manifest(&cli.config)?;

    match &cli.command {
        Commands::Render {
            group,
            prefix,
            versioning,
        } => cli::render::render(&manifest, group.as_deref(), prefix.as_deref(), *versioning),
        Commands::Order { group, json } => cli::order::print_order(&manifest, group, *json),
        Commands::Check => cli::check::check(&manifest),
    }
}
