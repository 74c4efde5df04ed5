//! Package directory layout
//!
//! Computes the target paths under a caller-supplied package directory.
//! The layout is an external filesystem contract: data streams live under
//! `data_stream/<name>/`, the README is written both to the build docs
//! directory (`_dev/build/docs/`) and the top-level `docs/` directory.

use std::path::{Path, PathBuf};

/// Target paths for one package build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLayout {
    root: PathBuf,
}

impl PackageLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The package directory itself.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory for one data stream.
    pub fn data_stream_dir(&self, stream: &str) -> PathBuf {
        self.root.join("data_stream").join(stream)
    }

    /// `base-fields.yml` for one data stream.
    pub fn base_fields_path(&self, stream: &str) -> PathBuf {
        self.data_stream_dir(stream).join("base-fields.yml")
    }

    /// `fields/fields.yml` for one data stream.
    pub fn fields_path(&self, stream: &str) -> PathBuf {
        self.data_stream_dir(stream).join("fields").join("fields.yml")
    }

    /// Docs directory rendered into the built package.
    pub fn build_docs_dir(&self) -> PathBuf {
        self.root.join("_dev").join("build").join("docs")
    }

    /// Top-level docs directory.
    pub fn docs_dir(&self) -> PathBuf {
        self.root.join("docs")
    }

    /// README target in the build docs directory.
    pub fn build_readme_path(&self) -> PathBuf {
        self.build_docs_dir().join("README.md")
    }

    /// README target in the top-level docs directory.
    pub fn readme_path(&self) -> PathBuf {
        self.docs_dir().join("README.md")
    }
}
