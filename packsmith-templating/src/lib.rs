//! Template engine for Packsmith
//!
//! A thin wrapper over Liquid that gives the builder what it needs:
//! named placeholder substitution, loops over structured render data, and
//! template resolution across a set of scoped directories.
//!
//! [`TemplateEngine`] owns a configured `liquid::Parser`. Templates can
//! reference partials by name; partial content comes from anything that
//! implements [`PartialLoader`] — a directory scan ([`DirLoader`]), an
//! in-memory map ([`MapLoader`]), or a caller-provided source.

pub mod engine;
pub mod error;
pub mod partials;
pub mod template;

pub use engine::TemplateEngine;
pub use error::{Result, TemplatingError};
pub use partials::{DirLoader, MapLoader, PartialLoader, PartialLoaderAdapter};
pub use template::Template;
