//! Error adapter for converting ViaductError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. None of the
//! library errors carry source spans, so the adapter contributes error codes
//! and help text rather than annotated snippets.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use viaduct::{ImportError, ViaductError};

/// Adapter wrapping a [`ViaductError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a ViaductError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ViaductError::Io(_) => "viaduct::io",
            ViaductError::Document(_) => "viaduct::document",
            ViaductError::Graph(_) => "viaduct::graph",
            ViaductError::Registry(_) => "viaduct::registry",
            ViaductError::Import(_) => "viaduct::import",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match &self.0 {
            ViaductError::Import(err) => Some(Box::new(format!(
                "stations imported before `{}` stay in the document; fix the record and re-import",
                err.station()
            ))),
            ViaductError::Registry(_) => Some(Box::new(
                "the document references an element type this build does not know about",
            )),
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// Convert a [`ViaductError`] into a list of reportable errors.
///
/// Viaduct errors abort at the first failure, so the list always holds one
/// entry; the list shape keeps the rendering loop uniform.
pub fn to_reportables(err: &ViaductError) -> Vec<ErrorAdapter<'_>> {
    vec![ErrorAdapter(err)]
}

/// Convenience for tests: whether this error wraps a per-station import
/// failure for the given external id.
pub fn names_station(err: &ViaductError, external_id: &str) -> bool {
    matches!(err, ViaductError::Import(import_err) if import_err.station() == external_id)
}
