//! Integration package builder
//!
//! `packsmith` assembles an integration package from observed log samples.
//! For each data stream it renders the base field template, infers custom
//! fields from the stream's samples, merges the two lists, and writes the
//! field files; it then renders the package README from the collected
//! per-stream field lists and writes it to both documentation targets.
//!
//! The pipeline is linear and stateless — one invocation per package
//! build. Filesystem effects go through the
//! [`Writer`](packsmith_common::Writer) capability; everything else is a
//! pure transform.
//!
//! ```no_run
//! use packsmith::{DataStream, Integration, PackageBuilder};
//! use packsmith_common::FsWriter;
//! use serde_json::json;
//!
//! # fn main() -> packsmith::Result<()> {
//! let integration = Integration::new("nginx").data_stream(DataStream::new(
//!     "access",
//!     vec![json!({"@timestamp": "2024-05-17T08:00:12Z", "message": "GET /"})],
//! ));
//!
//! let summary = PackageBuilder::new()
//!     .build(&integration, "packages/nginx".as_ref(), &FsWriter::new())?;
//! println!("wrote {} files", summary.files.len());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod error;
pub mod fields_build;
pub mod integration;
pub mod layout;
pub mod readme;
pub mod templates;

pub use builder::{BuildSummary, PackageBuilder};
pub use error::{BuildError, Result};
pub use fields_build::create_field_mapping;
pub use integration::{DataStream, Integration};
pub use layout::PackageLayout;
pub use readme::{create_readme, DataStreamFields};
pub use templates::TemplateSet;
