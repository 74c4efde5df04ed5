//! Field list flattening and merging
//!
//! Field definitions arrive in two shapes: curated base lists (already
//! flat) and inferred custom lists (nested groups). Flattening expands
//! groups into dotted leaf names and produces the final, deduplicated,
//! name-sorted list written to disk.

use std::collections::HashSet;

use tracing::debug;

use crate::types::{FieldDef, FieldType};

/// Expand group definitions into dotted leaf names, dedupe by name, and
/// sort by name.
///
/// The first occurrence of a name wins; later duplicates are dropped. A
/// group without children is kept as an `object` leaf rather than being
/// silently discarded.
pub fn flatten_fields(fields: Vec<FieldDef>) -> Vec<FieldDef> {
    let mut flat = Vec::new();
    for field in fields {
        expand(field, None, &mut flat);
    }

    let mut seen = HashSet::new();
    let before = flat.len();
    flat.retain(|field| seen.insert(field.name.clone()));
    if flat.len() < before {
        debug!(dropped = before - flat.len(), "dropped duplicate field names");
    }

    flat.sort_by(|a, b| a.name.cmp(&b.name));
    flat
}

/// Merge a base field list with custom fields.
///
/// Concatenates base then custom and flattens; because deduplication is
/// first-occurrence-wins, base definitions shadow custom ones with the
/// same name.
pub fn merge_fields(base: Vec<FieldDef>, custom: Vec<FieldDef>) -> Vec<FieldDef> {
    let mut fields = base;
    fields.extend(custom);
    flatten_fields(fields)
}

fn expand(field: FieldDef, prefix: Option<&str>, out: &mut Vec<FieldDef>) {
    let name = match prefix {
        Some(prefix) => format!("{prefix}.{}", field.name),
        None => field.name.clone(),
    };

    match field.fields {
        Some(children) if !children.is_empty() => {
            for child in children {
                expand(child, Some(&name), out);
            }
        }
        _ => {
            let type_ = if field.type_ == FieldType::Group {
                // Childless group: keep the name, downgrade the type.
                FieldType::Object
            } else {
                field.type_
            };
            out.push(FieldDef {
                name,
                type_,
                description: field.description,
                value: field.value,
                fields: None,
            });
        }
    }
}
