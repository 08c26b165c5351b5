//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Blogi markdown blog generator CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Output directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Content directory path (relative to project root)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub content: Option<PathBuf>,

    /// Config file path (default: blogi.toml)
    #[arg(short = 'C', long, global = true, default_value = "blogi.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Build the site
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        build_args: BuildArgs,
    },

    /// Serve the built site and the publish endpoint
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

        /// Serve the existing output without building first
        #[arg(long)]
        no_build: bool,
    },

    /// Create a new article draft in the content directory
    #[command(visible_alias = "n")]
    New {
        #[command(flatten)]
        args: NewArgs,
    },

    /// Render a markdown file to HTML
    #[command(visible_alias = "p")]
    Preview {
        /// Markdown file to render
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Write HTML to a file instead of stdout
        #[arg(short = 'w', long = "write", value_hint = clap::ValueHint::FilePath)]
        write: Option<PathBuf>,
    },

    /// Publish a markdown file to the content store
    Publish {
        /// Markdown file with a frontmatter header
        #[arg(value_hint = clap::ValueHint::FilePath)]
        file: PathBuf,

        /// Publish password
        #[arg(long, env = "BLOGI_PUBLISH_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
}

/// Shared build arguments for Build and Serve commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct BuildArgs {
    /// Clean output directory completely before building
    #[arg(long)]
    pub clean: bool,

    /// Minify sitemap and feed XML
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,

    /// Enable RSS feed generation
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub rss: Option<bool>,

    /// Enable sitemap generation
    #[arg(short = 'S', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Override site URL used in the sitemap and feed.
    ///
    /// Example:
    ///   blogi build --site-url "https://staging.blogi.com"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// `new` command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct NewArgs {
    /// Article title
    pub title: String,

    /// Category name (e.g., Technology)
    #[arg(long)]
    pub category: String,

    /// Author name
    #[arg(short, long)]
    pub author: Option<String>,

    /// Comma-separated tags
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Explicit slug (generated from the title when omitted)
    #[arg(long)]
    pub slug: Option<String>,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_build(&self) -> bool {
        matches!(self.command, Commands::Build { .. })
    }
    pub const fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve { .. })
    }
    pub const fn is_publish(&self) -> bool {
        matches!(self.command, Commands::Publish { .. })
    }
}
