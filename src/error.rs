//! Error types shared by the whole pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::CandidateIdSet;

/// The error type for generation operations.
///
/// `Io`, `Http`, `Body`, `Json` and `NotAList` are resource-acquisition failures and abort whatever is
/// being constructed. The rest are per-id failures that the driver records and moves past.
#[derive(Error, Debug)]
pub enum Error {
    /// A file could not be opened, read or written.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The remote API could not be reached or answered with a non-2xx status.
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("could not read the response body of {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON: {0}")]
    Json(#[from] sonic_rs::Error),

    /// The remote API answered with something other than an array of objects.
    #[error("expected a JSON array from {0}")]
    NotAList(String),

    /// A fetched record lacks a field every record of its category must carry.
    #[error("record {codename:?} has no usable {field:?} field")]
    MissingField { field: &'static str, codename: String },

    /// The ruleset's format needs CN and/or EN text that the corpus does not have.
    #[error("source text not provided for {id}")]
    MissingText { id: String },

    #[error("no stat record for {ids}")]
    MissingStat { ids: CandidateIdSet },

    #[error("id {0} was never registered")]
    UnregisteredId(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { path: path.into(), source }
    }
}
