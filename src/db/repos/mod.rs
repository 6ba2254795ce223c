//! Repository implementations for database access
//!
//! Repositories borrow the pool and expose the persistence operations the
//! handlers need; every call is a single implicit transaction.

pub mod items;

pub use items::{DbError, ItemRepo};
