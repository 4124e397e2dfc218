//! Error types for the indexing pipeline
//!
//! Indexing, counting, filtering and sorting cannot fail; only the two ends
//! of the pipeline touch the outside world.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum YogaError {
    #[error("cannot read input {source_name}: {error}")]
    Input {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    #[error("malformed index in {source_name}: {error}")]
    MalformedIndex {
        source_name: String,
        #[source]
        error: serde_json::Error,
    },

    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, YogaError>;
