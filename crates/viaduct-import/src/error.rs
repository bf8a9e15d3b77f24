//! Error type for the import lifecycle.

use thiserror::Error;

use viaduct_core::error::{GraphError, RegistryError};

/// An import failure, carrying the external id of the offending station.
///
/// The importer stops at the first failing record. Stations and edges
/// committed before the failure are left in the graph; see
/// [`import_line_save`](crate::import_line_save) for the rollback policy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImportError {
    /// A non-sentinel station record has no bilingual name pair.
    #[error("station `{station}` is missing its name pair")]
    MissingName { station: String },

    /// A station record's transfer block is absent or has no group list.
    #[error("station `{station}` has a malformed transfer group list")]
    MalformedTransfer { station: String },

    /// A station's adjacency list names an external id the save does not define.
    #[error("station `{station}` links to unknown station `{child}`")]
    UnknownChild { station: String, child: String },

    /// The registry does not know the station type inferred for this record.
    #[error("station `{station}`: {source}")]
    Registry {
        station: String,
        source: RegistryError,
    },

    /// A graph mutation failed while committing this record.
    #[error("station `{station}`: {source}")]
    Graph { station: String, source: GraphError },
}

impl ImportError {
    /// External id of the station whose processing failed.
    pub fn station(&self) -> &str {
        match self {
            ImportError::MissingName { station }
            | ImportError::MalformedTransfer { station }
            | ImportError::UnknownChild { station, .. }
            | ImportError::Registry { station, .. }
            | ImportError::Graph { station, .. } => station,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_accessor() {
        let err = ImportError::MissingName {
            station: "stn-03".to_string(),
        };
        assert_eq!(err.station(), "stn-03");
    }

    #[test]
    fn test_display_names_the_station() {
        let err = ImportError::UnknownChild {
            station: "stn-03".to_string(),
            child: "stn-99".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "station `stn-03` links to unknown station `stn-99`"
        );
    }
}
