//! Package README rendering
//!
//! Renders the package README template with the integration name and the
//! per-stream field lists, then writes the result to both documentation
//! targets: the build docs directory and the top-level docs directory.

use packsmith_common::Writer;
use packsmith_fields::FieldDef;
use packsmith_templating::PartialLoader;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::layout::PackageLayout;
use crate::templates::TemplateSet;

/// The merged field list of one data stream, ready for documentation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DataStreamFields {
    pub datastream: String,
    pub fields: Vec<FieldDef>,
}

impl DataStreamFields {
    pub fn new(datastream: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            datastream: datastream.into(),
            fields,
        }
    }
}

/// Render context handed to the README template. Every key is always
/// present so the template never dereferences a missing value.
#[derive(Serialize)]
struct ReadmeContext {
    package_name: String,
    fields: Vec<ReadmeStream>,
}

#[derive(Serialize)]
struct ReadmeStream {
    datastream: String,
    fields: Vec<ReadmeField>,
}

#[derive(Serialize)]
struct ReadmeField {
    name: String,
    description: String,
    #[serde(rename = "type")]
    type_: String,
}

impl From<&DataStreamFields> for ReadmeStream {
    fn from(stream: &DataStreamFields) -> Self {
        Self {
            datastream: stream.datastream.clone(),
            fields: stream
                .fields
                .iter()
                .map(|field| ReadmeField {
                    name: field.name.clone(),
                    description: field.description.clone().unwrap_or_default(),
                    type_: field.type_.to_string(),
                })
                .collect(),
        }
    }
}

/// Render the package README and write it to both docs targets.
///
/// Returns the rendered document.
pub fn create_readme(
    layout: &PackageLayout,
    package_name: &str,
    streams: &[DataStreamFields],
    templates: &TemplateSet,
    writer: &dyn Writer,
) -> Result<String> {
    let engine = templates.engine()?;
    let template = templates.get("package_readme.md")?;

    let context = ReadmeContext {
        package_name: package_name.to_string(),
        fields: streams.iter().map(ReadmeStream::from).collect(),
    };
    let rendered = engine.render_data(&template, &context)?;

    writer.ensure_dir(&layout.docs_dir())?;
    writer.ensure_dir(&layout.build_docs_dir())?;
    writer.write(&layout.build_readme_path(), &rendered)?;
    writer.write(&layout.readme_path(), &rendered)?;

    debug!(
        package = package_name,
        streams = streams.len(),
        bytes = rendered.len(),
        "wrote package README"
    );
    Ok(rendered)
}
