//! Annotation manifests: the TOML files annotations are read from
//!
//! ```toml
//! [[annotation]]
//! project = "apollo"
//! task_name = "Design review"
//! end_date = 2024-03-01
//! label = "Design review sign-off"   # optional, defaults to task_name
//! show = true                        # optional, hidden entries are dropped
//! ```

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use log::debug;
use serde::Deserialize;

use crate::error::ManifestError;
use crate::layout::AnnotationInput;

/// TOML structure for deserializing manifests
#[derive(Deserialize)]
struct TomlManifest {
    #[serde(default)]
    annotation: Vec<TomlAnnotation>,
}

#[derive(Deserialize)]
struct TomlAnnotation {
    project: String,
    task_name: String,
    end_date: toml::Value,
    label: Option<String>,
    #[serde(default = "default_show")]
    show: bool,
}

fn default_show() -> bool {
    true
}

/// The visible annotations of a manifest, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnnotationManifest {
    annotations: Vec<AnnotationInput>,
}

impl AnnotationManifest {
    /// Load manifest from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load manifest from TOML string
    ///
    /// Entries with `show = false` are skipped, and only the first entry for
    /// each (project, task) pair is kept.
    pub fn from_str(content: &str) -> Result<Self, ManifestError> {
        let parsed: TomlManifest = toml::from_str(content)?;

        let mut seen = HashSet::new();
        let mut annotations = Vec::new();
        for (i, entry) in parsed.annotation.into_iter().enumerate() {
            let index = i + 1;
            if entry.project.trim().is_empty() {
                return Err(ManifestError::empty_field(index, "project"));
            }
            if entry.task_name.trim().is_empty() {
                return Err(ManifestError::empty_field(index, "task_name"));
            }
            let end_date = parse_end_date(index, &entry.end_date)?;

            if !entry.show {
                debug!(index, task = entry.task_name.as_str(); "Skipping hidden annotation");
                continue;
            }
            if !seen.insert((entry.project.clone(), entry.task_name.clone())) {
                debug!(index, task = entry.task_name.as_str(); "Skipping duplicate annotation");
                continue;
            }

            let label = entry.label.unwrap_or_else(|| entry.task_name.clone());
            annotations.push(AnnotationInput::new(
                entry.project,
                entry.task_name,
                end_date,
                label,
            ));
        }

        Ok(Self { annotations })
    }

    pub fn annotations(&self) -> &[AnnotationInput] {
        &self.annotations
    }

    pub fn into_annotations(self) -> Vec<AnnotationInput> {
        self.annotations
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Distinct project names in order of first appearance
    pub fn projects(&self) -> Vec<&str> {
        let mut projects: Vec<&str> = Vec::new();
        for annotation in &self.annotations {
            if !projects.contains(&annotation.project.as_str()) {
                projects.push(&annotation.project);
            }
        }
        projects
    }

    /// Annotations of one project, in manifest order
    pub fn for_project(&self, project: &str) -> Vec<AnnotationInput> {
        self.annotations
            .iter()
            .filter(|a| a.project == project)
            .cloned()
            .collect()
    }
}

/// Accept either a TOML local date or a `YYYY-MM-DD` string
fn parse_end_date(index: usize, value: &toml::Value) -> Result<NaiveDate, ManifestError> {
    match value {
        toml::Value::Datetime(datetime) => datetime
            .date
            .and_then(|d| NaiveDate::from_ymd_opt(d.year.into(), d.month.into(), d.day.into()))
            .ok_or_else(|| ManifestError::invalid_date(index, datetime.to_string())),
        toml::Value::String(text) => NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
            .map_err(|_| ManifestError::invalid_date(index, text.as_str())),
        other => Err(ManifestError::invalid_date(index, other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_native_and_string_dates() {
        let manifest = AnnotationManifest::from_str(
            r#"
[[annotation]]
project = "apollo"
task_name = "Design"
end_date = 2024-03-01

[[annotation]]
project = "apollo"
task_name = "Build"
end_date = "2024-03-15"
label = "Build phase"
"#,
        )
        .expect("Should parse");

        assert_eq!(
            manifest.annotations(),
            &[
                AnnotationInput::new("apollo", "Design", date(2024, 3, 1), "Design"),
                AnnotationInput::new("apollo", "Build", date(2024, 3, 15), "Build phase"),
            ]
        );
    }

    #[test]
    fn test_empty_manifest() {
        let manifest = AnnotationManifest::from_str("").expect("Should parse");
        assert!(manifest.is_empty());
        assert!(manifest.projects().is_empty());
    }

    #[test]
    fn test_hidden_and_duplicate_entries_dropped() {
        let manifest = AnnotationManifest::from_str(
            r#"
[[annotation]]
project = "apollo"
task_name = "Design"
end_date = 2024-03-01
show = false

[[annotation]]
project = "apollo"
task_name = "Build"
end_date = 2024-03-05

[[annotation]]
project = "apollo"
task_name = "Build"
end_date = 2024-04-05
"#,
        )
        .expect("Should parse");

        assert_eq!(manifest.len(), 1);
        assert_eq!(manifest.annotations()[0].end_date, date(2024, 3, 5));
    }

    #[test]
    fn test_projects_and_filter() {
        let manifest = AnnotationManifest::from_str(
            r#"
[[annotation]]
project = "zeus"
task_name = "A"
end_date = 2024-01-01

[[annotation]]
project = "apollo"
task_name = "B"
end_date = 2024-01-02

[[annotation]]
project = "zeus"
task_name = "C"
end_date = 2024-01-03
"#,
        )
        .expect("Should parse");

        assert_eq!(manifest.projects(), vec!["zeus", "apollo"]);
        let zeus: Vec<String> = manifest
            .for_project("zeus")
            .into_iter()
            .map(|a| a.task_name)
            .collect();
        assert_eq!(zeus, vec!["A", "C"]);
        assert!(manifest.for_project("hermes").is_empty());
    }

    #[test]
    fn test_invalid_date_reports_entry() {
        let err = AnnotationManifest::from_str(
            r#"
[[annotation]]
project = "apollo"
task_name = "Design"
end_date = "2024-02-30"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ManifestError::InvalidDate { index: 1, .. }));
    }

    #[test]
    fn test_datetime_without_date_rejected() {
        let err = AnnotationManifest::from_str(
            r#"
[[annotation]]
project = "apollo"
task_name = "Design"
end_date = 10:30:00
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ManifestError::InvalidDate { index: 1, .. }));
    }

    #[test]
    fn test_blank_task_name_rejected() {
        let err = AnnotationManifest::from_str(
            r#"
[[annotation]]
project = "apollo"
task_name = "  "
end_date = 2024-01-01
"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ManifestError::EmptyField { index: 1, field: "task_name" }
        ));
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let err = AnnotationManifest::from_str(
            r#"
[[annotation]]
project = "apollo"
end_date = 2024-01-01
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ManifestError::Parse(_)));
    }
}
