//! Shared testing utilities for the reading-platform backend.
//!
//! Offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus factories that
//! create entities with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: fluent builder for configuring test environments
//! - **TestContext**: test environment containing database and session
//! - **TestError**: error types that can occur during test setup
//! - **factory**: per-entity factories with overridable defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::User;
//!
//! #[tokio::test]
//! async fn test_user_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(User)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
