use std::io;

use netgen_core::GraphError;
use thiserror::Error;

/// Errors raised while reading an edge list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EdgeListError {
    /// The input held no edge records.
    #[error("edge list contains no edges")]
    EmptyInput,
    /// A record lacked its source or target column.
    #[error("line {line}: missing `{column}` column")]
    MissingColumn {
        /// 1-based line number of the record.
        line: usize,
        /// Column that was absent.
        column: &'static str,
    },
    /// A column could not be parsed as a node identifier.
    #[error("line {line}: `{value}` is not a valid node identifier")]
    InvalidNode {
        /// 1-based line number of the record.
        line: usize,
        /// Raw column text.
        value: String,
    },
    /// The graph rejected an edge.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The CSV reader rejected a record, for example invalid UTF-8.
    #[error("malformed record: {0}")]
    Csv(#[source] csv::Error),
    /// Reading from the underlying source failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl EdgeListError {
    /// Routes I/O failures surfaced by the CSV reader to [`Self::Io`].
    pub(crate) fn from_csv(err: csv::Error) -> Self {
        if err.is_io_error() {
            Self::Io(io::Error::from(err))
        } else {
            Self::Csv(err)
        }
    }

    /// Stable machine-readable code for the error.
    ///
    /// # Examples
    /// ```
    /// use netgen_providers_edgelist::EdgeListError;
    ///
    /// assert_eq!(EdgeListError::EmptyInput.code(), "EDGELIST_EMPTY_INPUT");
    /// ```
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "EDGELIST_EMPTY_INPUT",
            Self::MissingColumn { .. } => "EDGELIST_MISSING_COLUMN",
            Self::InvalidNode { .. } => "EDGELIST_INVALID_NODE",
            Self::Graph(_) => "EDGELIST_GRAPH_FAILURE",
            Self::Csv(_) => "EDGELIST_MALFORMED_RECORD",
            Self::Io(_) => "EDGELIST_IO",
        }
    }
}
