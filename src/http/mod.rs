//! HTTP layer
//!
//! Axum server with:
//! - Server-rendered pages (askama)
//! - Redirect-after-POST with one-shot flash notices
//! - Request tracing
//! - Graceful shutdown

pub mod error;
pub mod flash;
pub mod routes;
pub mod server;
pub mod templates;

pub use error::AppError;
pub use flash::FlashStore;
pub use server::{router, run_server, AppState, ServerConfig};
