//! Field mapping for one data stream
//!
//! Builds the two field files of a data stream and returns the merged
//! field list for documentation: the base fields come from a rendered
//! template and are written to `base-fields.yml`, the custom fields are
//! inferred from the stream's samples and written to `fields/fields.yml`.

use packsmith_common::Writer;
use packsmith_fields::{infer_from_samples, merge_fields, FieldDef, FieldsError};
use packsmith_templating::{PartialLoader, TemplateEngine};
use serde_json::Value;
use tracing::debug;

use crate::error::{BuildError, Result};
use crate::layout::PackageLayout;
use crate::templates::TemplateSet;

/// Build the field mapping for one data stream.
///
/// Writes `base-fields.yml` and `fields/fields.yml` under the stream's
/// directory and returns the merged field list; base definitions shadow
/// inferred ones with the same name.
pub fn create_field_mapping(
    package_name: &str,
    data_stream_name: &str,
    layout: &PackageLayout,
    templates: &TemplateSet,
    writer: &dyn Writer,
    samples: &[Value],
) -> Result<Vec<FieldDef>> {
    let engine = templates.engine()?;

    let base = create_base_fields(
        package_name,
        data_stream_name,
        layout,
        templates,
        &engine,
        writer,
    )?;
    let custom = create_custom_fields(data_stream_name, layout, writer, samples)?;

    Ok(merge_fields(base, custom))
}

/// Render the base-field template with `{module, dataset}`, write it, and
/// parse it back into definitions.
fn create_base_fields(
    package_name: &str,
    data_stream_name: &str,
    layout: &PackageLayout,
    templates: &TemplateSet,
    engine: &TemplateEngine,
    writer: &dyn Writer,
) -> Result<Vec<FieldDef>> {
    let dataset = format!("{package_name}.{data_stream_name}");
    let template = templates.get("base_fields.yml")?;
    let rendered = engine.render_data(
        &template,
        &serde_json::json!({
            "module": package_name,
            "dataset": dataset,
        }),
    )?;

    writer.ensure_dir(&layout.data_stream_dir(data_stream_name))?;
    writer.write(&layout.base_fields_path(data_stream_name), &rendered)?;

    let base: Vec<FieldDef> = serde_yaml::from_str(&rendered)?;
    debug!(
        data_stream = data_stream_name,
        count = base.len(),
        "wrote base fields"
    );
    Ok(base)
}

/// Infer custom fields from the stream's samples and write them.
fn create_custom_fields(
    data_stream_name: &str,
    layout: &PackageLayout,
    writer: &dyn Writer,
    samples: &[Value],
) -> Result<Vec<FieldDef>> {
    let custom = infer_from_samples(samples).map_err(|e| match e {
        FieldsError::NoSamples => BuildError::NoSamples {
            data_stream: data_stream_name.to_string(),
        },
        other => other.into(),
    })?;

    let rendered = serde_yaml::to_string(&custom)?;
    writer.write(&layout.fields_path(data_stream_name), &rendered)?;

    debug!(
        data_stream = data_stream_name,
        count = custom.len(),
        "wrote custom fields"
    );
    Ok(custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use packsmith_common::MemoryWriter;
    use packsmith_fields::FieldType;
    use serde_json::json;

    fn sample_batch() -> Vec<Value> {
        vec![
            json!({"@timestamp": "2024-05-17T08:00:12Z", "message": "GET /", "status": 200}),
            json!({"message": "POST /login", "source": {"ip": "10.0.0.1"}}),
        ]
    }

    #[test]
    fn writes_both_field_files() {
        let layout = PackageLayout::new("pkg");
        let writer = MemoryWriter::new();

        create_field_mapping(
            "nginx",
            "access",
            &layout,
            &TemplateSet::builtin(),
            &writer,
            &sample_batch(),
        )
        .unwrap();

        let base = writer
            .contents(&layout.base_fields_path("access"))
            .expect("base-fields.yml written");
        assert!(base.contains("value: \"nginx.access\"")
            || base.contains("value: nginx.access"));
        assert!(base.contains("event.module"));

        let custom = writer
            .contents(&layout.fields_path("access"))
            .expect("fields.yml written");
        let parsed: Vec<FieldDef> = serde_yaml::from_str(&custom).unwrap();
        assert!(parsed.iter().any(|f| f.name == "message"));
    }

    #[test]
    fn merged_list_contains_base_and_custom() {
        let layout = PackageLayout::new("pkg");
        let writer = MemoryWriter::new();

        let merged = create_field_mapping(
            "nginx",
            "access",
            &layout,
            &TemplateSet::builtin(),
            &writer,
            &sample_batch(),
        )
        .unwrap();

        let names: Vec<&str> = merged.iter().map(|f| f.name.as_str()).collect();
        assert!(names.contains(&"event.dataset"));
        assert!(names.contains(&"message"));
        assert!(names.contains(&"source.ip"));
        // sorted output
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn base_definition_shadows_inferred_timestamp() {
        let layout = PackageLayout::new("pkg");
        let writer = MemoryWriter::new();

        // "@timestamp" arrives as a plain string that is not a timestamp,
        // so inference alone would call it a keyword
        let merged = create_field_mapping(
            "nginx",
            "access",
            &layout,
            &TemplateSet::builtin(),
            &writer,
            &[json!({"@timestamp": "not-a-date"})],
        )
        .unwrap();

        let ts = merged.iter().find(|f| f.name == "@timestamp").unwrap();
        assert_eq!(ts.type_, FieldType::Date);
        assert_eq!(ts.description.as_deref(), Some("Event timestamp."));
    }

    #[test]
    fn empty_samples_fail_with_stream_name() {
        let layout = PackageLayout::new("pkg");
        let writer = MemoryWriter::new();

        let err = create_field_mapping(
            "nginx",
            "access",
            &layout,
            &TemplateSet::builtin(),
            &writer,
            &[],
        )
        .unwrap_err();

        match err {
            BuildError::NoSamples { data_stream } => assert_eq!(data_stream, "access"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
