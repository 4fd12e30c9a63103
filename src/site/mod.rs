//! Site content and server-side rendering.
//!
//! Pages are plain strings of HTML built from the static content model, the
//! dashboard's mock stats and live GitHub analytics. Charts are inline SVG.
pub mod chart;
pub mod content;
pub mod format;
pub mod html;
pub mod mock;
pub mod pages;
