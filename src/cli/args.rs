//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::content::{Category, Tag};

/// Folio static portfolio site generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: folio.toml)
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = "folio.toml",
        value_hint = clap::ValueHint::FilePath
    )]
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
    /// Render every page into the output directory
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Build, then serve the output directory locally
    #[command(visible_alias = "s")]
    Serve {
        #[command(flatten)]
        build_args: BuildArgs,

        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long)]
        interface: Option<std::net::IpAddr>,

        /// Port number to listen on
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Filter writings and print them as JSON
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },

    /// Show how image paths resolve against the asset directory
    #[command(visible_alias = "r")]
    Resolve {
        /// Site-root image URLs, e.g. /images/hero.jpg
        #[arg(required = true)]
        paths: Vec<String>,
    },

    /// Show or change the persisted color theme
    #[command(visible_alias = "t")]
    Theme {
        /// New theme; omit to print the current one
        action: Option<ThemeAction>,
    },
}

/// Shared build arguments for Build and Serve commands
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(short, long)]
    pub clean: bool,

    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Writing category
    #[arg(short, long, default_value = "poems")]
    pub category: String,

    /// Case-insensitive text to look for in titles and excerpts
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Keep writings carrying any of these tags (repeatable)
    #[arg(short, long = "tag", value_enum)]
    pub tags: Vec<Tag>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Filter output to specific fields (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub fields: Option<Vec<String>>,
}

/// `theme` subcommand argument.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

impl QueryArgs {
    /// Category parsed from the raw argument; `None` for unknown ids.
    pub fn category(&self) -> Option<Category> {
        Category::from_id(&self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_with_tags() {
        let cli = Cli::try_parse_from([
            "folio", "query", "--category", "shayari", "--tag", "love", "--tag", "self-growth",
        ])
        .unwrap();
        let Commands::Query { args } = cli.command else {
            panic!("expected query");
        };
        assert_eq!(args.category(), Some(Category::Shayari));
        assert_eq!(args.tags, vec![Tag::Love, Tag::SelfGrowth]);
        assert_eq!(args.search, "");
    }

    #[test]
    fn test_aliases_and_global_flags() {
        let cli = Cli::try_parse_from(["folio", "s", "-p", "8080", "--verbose"]).unwrap();
        assert!(matches!(cli.command, Commands::Serve { port: Some(8080), .. }));
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("folio.toml"));

        let cli = Cli::try_parse_from(["folio", "t", "toggle"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Theme {
                action: Some(ThemeAction::Toggle)
            }
        ));
    }

    #[test]
    fn test_resolve_takes_several_paths() {
        let cli = Cli::try_parse_from(["folio", "r", "/a.jpg", "/b.png"]).unwrap();
        let Commands::Resolve { paths } = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(paths, ["/a.jpg", "/b.png"]);
        assert!(Cli::try_parse_from(["folio", "resolve"]).is_err());
    }
}
