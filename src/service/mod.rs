//! Business logic invoked by the command handlers.
//!
//! Services are stateless apart from configured paths: the color resolver maps
//! user color tokens onto concrete values, and the QR render service turns a
//! payload into an image artifact on disk.

pub mod color;
pub mod qr;
