//! Error types for viaduct operations.
//!
//! This module provides the main error type [`ViaductError`] which wraps the
//! error conditions that can occur while loading, importing, and editing a
//! diagram.

use std::io;

use thiserror::Error;

use viaduct_core::error::{GraphError, RegistryError};
use viaduct_import::ImportError;

/// The main error type for viaduct operations.
#[derive(Debug, Error)]
pub enum ViaductError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The save or document JSON could not be deserialized at all.
    #[error("invalid document: {0}")]
    Document(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Import(#[from] ImportError),
}
