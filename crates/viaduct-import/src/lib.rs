//! Importer for legacy line saves.
//!
//! This crate converts the legacy line/station save format into a viaduct
//! diagram graph:
//!
//! - [`save`]: serde model of the external format
//! - [`interchange`]: resolver turning raw transfer groups into per-type
//!   transfer attributes
//! - [`import_line_save`]: the importer itself
//!
//! The importer runs to completion (or stops at the first bad record) on the
//! calling thread; it holds no external resources and needs no cleanup.

pub mod interchange;
pub mod save;

mod error;
mod import;

pub use error::ImportError;
pub use import::import_line_save;
