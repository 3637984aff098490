use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to create or access the temporary directory.
    #[error("Test environment I/O error: {0}")]
    Io(#[from] std::io::Error),
}
