//! Diagnostic hooks for the placement pipeline

use log::{debug, info, warn};

use super::report::PositionReport;
use super::types::PositionedAnnotation;

/// How a single annotation was settled by the collision resolver
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// The base position collided with nothing
    Clear,
    /// Moved away from its base height `from` to a collision-free slot
    Adjusted { from: f64 },
    /// No free slot found; the base height was kept despite overlaps
    Unresolved,
}

impl Resolution {
    /// Whether the annotation ended up free of collisions
    pub fn is_resolved(&self) -> bool {
        !matches!(self, Resolution::Unresolved)
    }
}

/// Receives progress events while annotations are being placed.
///
/// Every method has an empty default so observers only implement what they
/// care about. Observers never influence the computed positions.
pub trait PlacementObserver {
    fn started(&mut self, _annotation_count: usize) {}

    fn grouped(&mut self, _group_count: usize) {}

    fn collisions_found(
        &mut self,
        _index: usize,
        _annotation: &PositionedAnnotation,
        _count: usize,
    ) {
    }

    fn placed(
        &mut self,
        _index: usize,
        _annotation: &PositionedAnnotation,
        _resolution: Resolution,
    ) {
    }

    fn finished(&mut self, _report: &PositionReport) {}
}

/// Observer that discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PlacementObserver for NoopObserver {}

/// Observer that forwards events to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl PlacementObserver for LogObserver {
    fn started(&mut self, annotation_count: usize) {
        info!(annotation_count; "Positioning annotations");
    }

    fn grouped(&mut self, group_count: usize) {
        debug!(group_count; "Annotations grouped by date proximity");
    }

    fn collisions_found(&mut self, index: usize, annotation: &PositionedAnnotation, count: usize) {
        debug!(
            index,
            task = short_name(&annotation.task.task_name),
            collisions = count;
            "Base position collides, adjusting"
        );
    }

    fn placed(&mut self, index: usize, annotation: &PositionedAnnotation, resolution: Resolution) {
        let task = short_name(&annotation.task.task_name);
        match resolution {
            Resolution::Clear => debug!(index, task, y = annotation.y; "No collisions"),
            Resolution::Adjusted { from } => {
                debug!(index, task, from, y = annotation.y; "Adjusted to free slot")
            }
            Resolution::Unresolved => warn!(
                index,
                task,
                y = annotation.y;
                "Unable to avoid all collisions, keeping base height"
            ),
        }
    }

    fn finished(&mut self, report: &PositionReport) {
        info!(annotation_count = report.annotation_count(); "Annotation positioning completed");
        for group in report.groups() {
            info!("{group}");
        }
    }
}

/// Task names are clipped in log lines to keep them on one row
fn short_name(name: &str) -> &str {
    match name.char_indices().nth(25) {
        Some((end, _)) => &name[..end],
        None => name,
    }
}
