//! Database layer - connection pool, schema, and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections) - no Arc<Mutex<Connection>>
//! - Schema creation is idempotent and runs at startup
//! - Not-found is a typed error, mapped to 404 at the HTTP boundary

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
