//! Layout engine for due-date annotations
//!
//! This module takes the annotations of one chart and computes where each
//! label goes: annotations are grouped by date proximity, given a base
//! position from their group size, and then nudged vertically so labels do
//! not overlap.

pub mod collision;
pub mod config;
pub mod grouping;
pub mod observer;
pub mod placement;
pub mod report;
pub mod types;

pub use collision::{collides, resolve_collisions};
pub use config::{LayoutConfig, DEFAULT_SCAN_STEP, MIN_SCAN_STEP};
pub use grouping::group_by_proximity;
pub use observer::{LogObserver, NoopObserver, PlacementObserver, Resolution};
pub use placement::{assign_base_positions, base_heights, horizontal_offsets};
pub use report::{GroupSummary, PositionReport};
pub use types::*;

/// Compute final positions for a set of annotations.
///
/// The result has one entry per input, ordered by group and then by due
/// date. The computation is deterministic and keeps no state between calls.
pub fn compute(
    annotations: &[AnnotationInput],
    config: &LayoutConfig,
    observer: &mut dyn PlacementObserver,
) -> Vec<PositionedAnnotation> {
    if annotations.is_empty() {
        return Vec::new();
    }

    observer.started(annotations.len());
    let groups = group_by_proximity(annotations, config.proximity_days);
    observer.grouped(groups.len());

    let base_positions = assign_base_positions(&groups);
    let positions = resolve_collisions(base_positions, config, observer);

    observer.finished(&PositionReport::from_positions(&positions));
    positions
}
