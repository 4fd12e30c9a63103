//! Command line entrypoint and small shared helpers.
pub mod cli;
pub mod paths;
