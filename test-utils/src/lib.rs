//! Beaconbot Test Utils
//!
//! Provides shared testing utilities for building unit and integration tests for
//! the bot. The application persists its state in plain files under configurable
//! directories, so tests run against an isolated temporary directory tree instead
//! of the deployment `data/` and `temp/` paths.
//!
//! # Overview
//!
//! The test utilities consist of two main components:
//! - **TestContext**: Test environment owning an isolated temporary directory
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::context::TestContext;
//!
//! #[tokio::test]
//! async fn test_store_operations() {
//!     let test = TestContext::new().unwrap();
//!     let store = LiveChannelStore::new(test.data_dir());
//!     // Perform store operations...
//! }
//! ```

pub mod context;
pub mod error;
