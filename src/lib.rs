//! Burn-up annotations - due-date marker placement for burn-up charts
//!
//! This library groups task due-date annotations by date proximity, assigns
//! each a label position that avoids overlapping its neighbours, and renders
//! the result as an SVG overlay.
//!
//! # Example
//!
//! ```rust
//! use burnup_annotations::{place_annotations, AnnotationInput};
//! use chrono::NaiveDate;
//!
//! let due = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let positions = place_annotations(&[
//!     AnnotationInput::new("apollo", "Design", due, "Design review"),
//!     AnnotationInput::new("apollo", "Build", due, "Build"),
//! ]);
//!
//! assert_eq!(positions.len(), 2);
//! assert!(positions.iter().all(|p| (10.0..=95.0).contains(&p.y)));
//! ```

pub mod error;
pub mod layout;
pub mod manifest;
pub mod renderer;
pub mod stylesheet;

use std::path::Path;

pub use error::ManifestError;
pub use layout::{
    AnnotationInput, GroupId, LayoutConfig, LogObserver, NoopObserver, PlacementObserver,
    PositionReport, PositionedAnnotation, Resolution,
};
pub use manifest::AnnotationManifest;
pub use renderer::{render_overlay, render_overlay_with_stylesheet, wrap_label, SvgConfig};

use thiserror::Error;

// Re-export Stylesheet for public API
pub use stylesheet::{Stylesheet, StylesheetError};

/// Errors that can occur in the file-based render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// Error while loading the annotation manifest
    #[error("manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// The requested project has no visible annotations
    #[error("unknown project '{name}' (known projects: {known})")]
    UnknownProject { name: String, known: String },
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for colour resolution
    pub stylesheet: Stylesheet,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet for colour resolution
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }
}

/// Position annotations with the default configuration, logging progress
pub fn place_annotations(annotations: &[AnnotationInput]) -> Vec<PositionedAnnotation> {
    place_annotations_with(annotations, &LayoutConfig::default(), &mut LogObserver)
}

/// Position annotations with a custom configuration and observer
pub fn place_annotations_with(
    annotations: &[AnnotationInput],
    config: &LayoutConfig,
    observer: &mut dyn PlacementObserver,
) -> Vec<PositionedAnnotation> {
    layout::compute(annotations, config, observer)
}

/// Position annotations and render the overlay with default configuration
pub fn render(annotations: &[AnnotationInput]) -> String {
    render_with_config(annotations, RenderConfig::default())
}

/// Position annotations and render the overlay with custom configuration
///
/// # Example
///
/// ```rust
/// use burnup_annotations::{render_with_config, AnnotationInput, RenderConfig, SvgConfig};
/// use chrono::NaiveDate;
///
/// let due = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let config = RenderConfig::new().with_svg(SvgConfig::default().with_label_max_chars(12));
/// let svg = render_with_config(&[AnnotationInput::new("p", "t", due, "Kickoff")], config);
///
/// assert!(svg.contains("Kickoff"));
/// assert!(svg.contains("Due: 03/01"));
/// ```
pub fn render_with_config(annotations: &[AnnotationInput], config: RenderConfig) -> String {
    let positions = place_annotations_with(annotations, &config.layout, &mut LogObserver);
    render_overlay_with_stylesheet(&positions, &config.svg, &config.stylesheet)
}

/// Load a manifest, optionally restrict it to one project, and position its annotations
pub fn place_manifest(
    path: &Path,
    project: Option<&str>,
    config: &LayoutConfig,
) -> Result<Vec<PositionedAnnotation>, RenderError> {
    let manifest = AnnotationManifest::from_file(path)?;
    let annotations = select_project(manifest, project)?;
    Ok(place_annotations_with(&annotations, config, &mut LogObserver))
}

/// All annotations, or those of `project` if one is named
pub fn select_project(
    manifest: AnnotationManifest,
    project: Option<&str>,
) -> Result<Vec<AnnotationInput>, RenderError> {
    match project {
        None => Ok(manifest.into_annotations()),
        Some(name) => {
            let selected = manifest.for_project(name);
            if selected.is_empty() {
                return Err(RenderError::UnknownProject {
                    name: name.to_string(),
                    known: manifest.projects().join(", "),
                });
            }
            Ok(selected)
        }
    }
}
