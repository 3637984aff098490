//! File-backed persistence layer.
//!
//! This module contains store structs that handle reading and writing the
//! application's persisted documents. Stores load a whole document from disk,
//! apply a mutation, and rewrite the file in full, converting raw I/O and JSON
//! failures into `StoreError` at the persistence boundary.

pub mod live_channel;

#[cfg(test)]
mod test;
