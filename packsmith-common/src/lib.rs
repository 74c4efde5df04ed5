//! Shared infrastructure for the Packsmith ecosystem
//!
//! This crate holds the pieces every other Packsmith crate leans on:
//!
//! - **Writer capability** ([`Writer`]): all filesystem effects in the
//!   build pipeline go through this trait, keeping the merge and
//!   inference logic pure and independently testable. [`FsWriter`] is the
//!   real implementation; [`MemoryWriter`] captures writes for tests.
//! - **Error classification** ([`ErrorSeverity`], [`Severity`]): a shared
//!   severity scale implemented by the error enums of the other crates.

pub mod error;
pub mod fs;

pub use error::{ErrorSeverity, Severity};
pub use fs::{FsWriter, MemoryWriter, Writer};
