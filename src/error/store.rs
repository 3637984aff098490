use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or saving the persisted guild configuration document.
///
/// A parse failure is deliberately unrecovered: the store never attempts schema
/// repair or partial recovery, and it never writes over a file it could not read.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        /// Path of the file that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file exists but does not contain a valid document.
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        /// Path of the file that could not be parsed
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Failed to serialize the document before writing it out.
    #[error("Failed to serialize config document: {0}")]
    Serialize(#[source] serde_json::Error),

    /// Failed to create the data directory or write the configuration file.
    #[error("Failed to write config file '{path}': {source}")]
    Write {
        /// Path of the file that could not be written
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
