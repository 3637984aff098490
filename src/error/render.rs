use std::path::PathBuf;

use thiserror::Error;

/// Failures while rendering a QR code image to disk.
///
/// These surface to the user with the underlying message, matching the encoder
/// error reporting of the `/qr` command. Color validity is decided here rather
/// than at option parsing time: the resolver passes unknown tokens through
/// verbatim and the renderer rejects them if they are not a usable color.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A color value was not a recognizable hex color specification.
    #[error("Invalid color value '{0}'")]
    InvalidColor(String),

    /// The payload could not be encoded as a QR code (e.g. too long).
    #[error("Failed to encode QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// The rendered image could not be written to disk.
    #[error("Failed to write QR image: {0}")]
    ImageWrite(#[from] image::ImageError),

    /// The temp directory could not be created.
    #[error("Failed to prepare temp directory '{path}': {source}")]
    TempDir {
        /// The directory that could not be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The blocking render task was cancelled or panicked.
    #[error("QR render task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}
