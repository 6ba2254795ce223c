//! itemctl: a small item catalog served over HTTP
//!
//! Five routes over one SQLite table: paginated listing, create, edit, and
//! delete with confirmation, all server-rendered. Mutations follow
//! redirect-after-POST with one-shot flash notices.

pub mod db;
pub mod http;
pub mod models;

pub use http::{router, run_server, AppState, ServerConfig};
