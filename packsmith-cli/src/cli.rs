//! Command-line argument definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "packsmith",
    about = "Build integration packages from log samples",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build a package: field schemas and README from sample files
    Build {
        /// Package name
        #[arg(long)]
        name: String,

        /// Directory to write the package into
        #[arg(long)]
        package_dir: PathBuf,

        /// Data stream and its samples file as NAME=PATH; repeatable.
        /// Sample files hold NDJSON or a JSON array of documents.
        #[arg(long = "data-stream", value_name = "NAME=PATH", required = true)]
        data_streams: Vec<String>,

        /// Directory of template overrides shadowing the builtin templates
        #[arg(long)]
        templates: Option<PathBuf>,
    },
}

/// One `NAME=PATH` data-stream argument, split.
pub fn parse_stream_arg(arg: &str) -> Option<(&str, &str)> {
    let (name, path) = arg.split_once('=')?;
    if name.is_empty() || path.is_empty() {
        return None;
    }
    Some((name, path))
}
