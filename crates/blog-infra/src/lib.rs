//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`:
//! the SeaORM-backed post repository and its in-memory counterpart
//! used in tests.

pub mod database;

pub use database::{DatabaseConfig, InMemoryPostRepository, PostgresPostRepository, connect};
