//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Render dependency-ordered asset tags from an assets.toml manifest
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Manifest path; searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "assets.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the include tags of a group (styles then scripts when omitted)
    #[command(visible_alias = "r")]
    Render {
        /// Group to render, e.g. `style` or `script`
        group: Option<String>,

        /// Base path for local sources, overriding `[dispatch] path`
        #[arg(short, long)]
        prefix: Option<String>,

        /// Append the file mtime to local sources
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        versioning: Option<bool>,
    },

    /// Print asset names of a group in emission order
    #[command(visible_alias = "o")]
    Order {
        /// Group to arrange
        group: String,

        /// Print a JSON array instead of one name per line
        #[arg(long)]
        json: bool,
    },

    /// Arrange every group and report dependency cycles
    #[command(visible_alias = "c")]
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_render_flags() {
        let cli = Cli::parse_from(["tola-asset", "render", "style", "-p", "/static", "--versioning"]);
        let Commands::Render {
            group,
            prefix,
            versioning,
        } = cli.command
        else {
            panic!("expected render");
        };
        assert_eq!(group.as_deref(), Some("style"));
        assert_eq!(prefix.as_deref(), Some("/static"));
        assert_eq!(versioning, Some(true));
    }

    #[test]
    fn test_parse_versioning_off_and_globals() {
        let cli = Cli::parse_from([
            "tola-asset",
            "render",
            "--versioning",
            "false",
            "-C",
            "site/assets.toml",
            "-v",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("site/assets.toml"));
        assert!(matches!(
            cli.command,
            Commands::Render {
                group: None,
                versioning: Some(false),
                ..
            }
        ));
    }

    #[test]
    fn test_parse_order_json() {
        let cli = Cli::parse_from(["tola-asset", "o", "script", "--json"]);
        assert!(matches!(cli.command, Commands::Order { json: true, .. }));
    }
}
