//! The Uwumi web server.
//!
//! Public landing and auth pages, plus the gated `/admin` dashboard and its
//! JSON endpoints.

pub mod api;
pub mod app;
pub mod errors;
pub mod gate;
pub mod headers;
pub mod tracing;
