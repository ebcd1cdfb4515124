use thiserror::Error;

/// Failures writing a [`crate::CaseTable`] to disk. Serialization itself
/// (building the table from solved cases) cannot fail — every symbol a
/// solved expression can mention is already known at that point — so
/// this enum only covers I/O.
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to write case table to {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize case table: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
