//! Packsmith command-line interface
//!
//! `packsmith build` turns sample files into an integration package:
//! field schemas per data stream plus a rendered README.
//!
//! Exit codes:
//! - 0: success
//! - 1: error

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{parse_stream_arg, Cli, Commands};
use packsmith::{DataStream, Integration, PackageBuilder};
use packsmith_common::FsWriter;
use packsmith_fields::parse_samples;

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("packsmith=debug,packsmith_fields=debug,packsmith_templating=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build {
            name,
            package_dir,
            data_streams,
            templates,
        } => build(&name, &package_dir, &data_streams, templates.as_deref()),
    }
}

fn build(
    name: &str,
    package_dir: &Path,
    stream_args: &[String],
    templates: Option<&Path>,
) -> Result<()> {
    let mut integration = Integration::new(name);
    for arg in stream_args {
        let Some((stream_name, samples_path)) = parse_stream_arg(arg) else {
            bail!("invalid --data-stream '{arg}', expected NAME=PATH");
        };
        let raw = fs::read_to_string(samples_path)
            .with_context(|| format!("reading samples file {samples_path}"))?;
        let samples = parse_samples(&raw)
            .with_context(|| format!("parsing samples for data stream '{stream_name}'"))?;
        integration = integration.data_stream(DataStream::new(stream_name, samples));
    }

    let builder = match templates {
        Some(dir) => PackageBuilder::with_template_dir(dir)
            .with_context(|| format!("loading template overrides from {}", dir.display()))?,
        None => PackageBuilder::new(),
    };

    let summary = builder
        .build(&integration, package_dir, &FsWriter::new())
        .with_context(|| format!("building package '{name}'"))?;

    println!(
        "Built package '{}' with {} data stream(s):",
        summary.package,
        summary.data_streams.len()
    );
    for file in &summary.files {
        println!("  {}", file.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn build_end_to_end_from_sample_files() {
        let temp = TempDir::new().unwrap();
        let samples = temp.path().join("access.ndjson");
        fs::write(
            &samples,
            "{\"@timestamp\": \"2024-05-17T08:00:12Z\", \"message\": \"GET /\"}\n",
        )
        .unwrap();

        let pkg = temp.path().join("out");
        build(
            "nginx",
            &pkg,
            &[format!("access={}", samples.display())],
            None,
        )
        .unwrap();

        assert!(pkg.join("docs/README.md").is_file());
        assert!(pkg.join("data_stream/access/fields/fields.yml").is_file());
    }

    #[test]
    fn build_rejects_malformed_stream_arg() {
        let temp = TempDir::new().unwrap();
        let err = build("nginx", temp.path(), &["no-separator".into()], None).unwrap_err();
        assert!(err.to_string().contains("expected NAME=PATH"));
    }

    #[test]
    fn build_fails_on_missing_samples_file() {
        let temp = TempDir::new().unwrap();
        let err = build(
            "nginx",
            temp.path(),
            &["access=/no/such/file.ndjson".into()],
            None,
        )
        .unwrap_err();
        assert!(err.to_string().contains("reading samples file"));
    }
}
