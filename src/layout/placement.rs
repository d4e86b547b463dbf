//! Base positions for grouped annotations
//!
//! Each group gets a fan of heights from the top of the chart downwards and a
//! symmetric horizontal stagger, both determined only by the group size.

use super::types::{AnnotationInput, GroupId, PositionedAnnotation};

/// Lowest height handed out by the generic (5+) table
const MIN_BASE_HEIGHT: f64 = 15.0;

/// Total horizontal span, in days, of the generic (5+) offset table
const OFFSET_SPAN: f64 = 6.0;

/// Base vertical heights for a group of `size` annotations, top first
pub fn base_heights(size: usize) -> Vec<f64> {
    match size {
        0 => vec![],
        1 => vec![80.0],
        2 => vec![90.0, 70.0],
        3 => vec![95.0, 80.0, 65.0],
        4 => vec![95.0, 83.0, 71.0, 59.0],
        n => {
            let step = 80.0 / n as f64;
            (0..n)
                .map(|i| (95.0 - i as f64 * step).floor().max(MIN_BASE_HEIGHT))
                .collect()
        }
    }
}

/// Horizontal offsets in days for a group of `size` annotations, left first
pub fn horizontal_offsets(size: usize) -> Vec<f64> {
    match size {
        0 => vec![],
        1 => vec![0.0],
        2 => vec![-1.0, 1.0],
        3 => vec![-2.0, 0.0, 2.0],
        4 => vec![-2.0, -0.7, 0.7, 2.0],
        n => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|i| OFFSET_SPAN * (i as f64 / last) - OFFSET_SPAN / 2.0)
                .collect()
        }
    }
}

/// Flatten groups into base positions, preserving group and member order
pub fn assign_base_positions(groups: &[Vec<AnnotationInput>]) -> Vec<PositionedAnnotation> {
    let mut positions = Vec::with_capacity(groups.iter().map(Vec::len).sum());
    for (index, group) in groups.iter().enumerate() {
        let heights = base_heights(group.len());
        let offsets = horizontal_offsets(group.len());
        for ((task, y), x_offset) in group.iter().zip(heights).zip(offsets) {
            positions.push(PositionedAnnotation::new(
                task.clone(),
                y,
                x_offset,
                GroupId(index),
            ));
        }
    }
    positions
}
