//! This module contains the pages and API endpoints of the server.
pub mod dashboard;
pub mod landing;
pub mod routes;
pub mod session;
pub mod state;
pub mod utils;
