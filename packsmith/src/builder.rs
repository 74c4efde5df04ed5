//! Package build orchestration
//!
//! Ties the pipeline together: field mapping per data stream, then the
//! README over the collected per-stream field lists.

use std::path::Path;

use packsmith_common::Writer;
use tracing::{debug, info};

use crate::error::{BuildError, Result};
use crate::fields_build::create_field_mapping;
use crate::integration::Integration;
use crate::layout::PackageLayout;
use crate::readme::{create_readme, DataStreamFields};
use crate::templates::TemplateSet;

/// What a build wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    /// Package name.
    pub package: String,
    /// Data streams built, in input order.
    pub data_streams: Vec<String>,
    /// Files written, in write order.
    pub files: Vec<std::path::PathBuf>,
}

/// Builds integration packages from an [`Integration`] descriptor.
#[derive(Debug, Clone, Default)]
pub struct PackageBuilder {
    templates: TemplateSet,
}

impl PackageBuilder {
    /// Builder using the builtin template set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder whose templates are shadowed by an override directory.
    pub fn with_template_dir(dir: &Path) -> Result<Self> {
        Ok(Self {
            templates: TemplateSet::with_override_dir(dir)?,
        })
    }

    /// Build the package into `package_dir`.
    ///
    /// Writes the field files of every data stream and the package README,
    /// and returns a summary of what was written. Errors are fatal for the
    /// whole invocation; partially written output is left as is.
    pub fn build(
        &self,
        integration: &Integration,
        package_dir: &Path,
        writer: &dyn Writer,
    ) -> Result<BuildSummary> {
        if integration.data_streams.is_empty() {
            return Err(BuildError::NoDataStreams {
                name: integration.name.clone(),
            });
        }

        let layout = PackageLayout::new(package_dir);
        let mut streams = Vec::with_capacity(integration.data_streams.len());
        let mut files = Vec::new();

        for stream in &integration.data_streams {
            debug!(
                package = %integration.name,
                data_stream = %stream.name,
                samples = stream.samples.len(),
                "building field mapping"
            );
            let fields = create_field_mapping(
                &integration.name,
                &stream.name,
                &layout,
                &self.templates,
                writer,
                &stream.samples,
            )?;
            files.push(layout.base_fields_path(&stream.name));
            files.push(layout.fields_path(&stream.name));
            streams.push(DataStreamFields::new(stream.name.clone(), fields));
        }

        create_readme(
            &layout,
            &integration.name,
            &streams,
            &self.templates,
            writer,
        )?;
        files.push(layout.build_readme_path());
        files.push(layout.readme_path());

        info!(
            package = %integration.name,
            data_streams = streams.len(),
            files = files.len(),
            "package build complete"
        );
        Ok(BuildSummary {
            package: integration.name.clone(),
            data_streams: streams.iter().map(|s| s.datastream.clone()).collect(),
            files,
        })
    }
}
