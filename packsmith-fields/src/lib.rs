//! Field schema inference for Packsmith
//!
//! `packsmith-fields` turns raw log samples into field definitions. It is a
//! pure, schema-only crate: samples go in as JSON documents, a merged
//! representative document is built, and field definitions with inferred
//! types come out. File writes happen in the builder, not here.
//!
//! # Pipeline
//!
//! - [`merge_samples`] — deep-merge heterogeneous samples into one
//!   representative document
//! - [`infer_fields`] — walk the merged document and emit typed field
//!   definitions, nested objects as groups
//! - [`flatten_fields`] — expand groups into dotted leaf names, dedupe,
//!   sort
//! - [`merge_fields`] — combine a base field list with inferred custom
//!   fields; base definitions win on name collisions

pub mod error;
pub mod infer;
pub mod merge;
pub mod samples;
pub mod types;

pub use error::{FieldsError, Result};
pub use infer::{infer_fields, infer_from_samples};
pub use merge::{flatten_fields, merge_fields};
pub use samples::{merge_samples, parse_samples};
pub use types::{FieldDef, FieldType};
