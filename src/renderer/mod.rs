//! SVG renderer for the annotation overlay
//!
//! This module takes positioned annotations and produces an SVG string with
//! guide lines, leader lines and wrapped labels, using CSS classes for styling.

pub mod config;
pub mod svg;
pub mod wrap;

pub use config::SvgConfig;
pub use svg::{render_overlay, render_overlay_with_stylesheet, ChartScale};
pub use wrap::wrap_label;
