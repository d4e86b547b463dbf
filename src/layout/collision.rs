//! Greedy collision resolution between annotation labels.
//!
//! Annotations are settled one at a time in base-position order. Each is
//! checked against those already settled and, if it overlaps any of them,
//! moved vertically: first through the configured shift candidates around its
//! base height, then by scanning the whole range from top to bottom. Settled
//! annotations are never revisited.

use super::config::LayoutConfig;
use super::observer::{PlacementObserver, Resolution};
use super::types::{days_between, PositionedAnnotation, MAX_Y, MIN_Y};

/// Whether two labels are close enough on both axes to overlap on screen
pub fn collides(a: &PositionedAnnotation, b: &PositionedAnnotation, config: &LayoutConfig) -> bool {
    let horizontal = (days_between(a.end_date, b.end_date) + a.x_offset - b.x_offset).abs();
    let vertical = (a.y - b.y).abs();
    horizontal < config.horizontal_clearance && vertical < config.vertical_clearance
}

/// Number of settled annotations `candidate` overlaps
pub fn collision_count(
    candidate: &PositionedAnnotation,
    settled: &[PositionedAnnotation],
    config: &LayoutConfig,
) -> usize {
    settled
        .iter()
        .filter(|other| collides(candidate, other, config))
        .count()
}

/// Settle every base position in order, adjusting heights to avoid overlaps
pub fn resolve_collisions(
    base_positions: Vec<PositionedAnnotation>,
    config: &LayoutConfig,
    observer: &mut dyn PlacementObserver,
) -> Vec<PositionedAnnotation> {
    let mut settled: Vec<PositionedAnnotation> = Vec::with_capacity(base_positions.len());
    for (index, position) in base_positions.into_iter().enumerate() {
        let count = collision_count(&position, &settled, config);
        let (position, resolution) = if count == 0 {
            (position, Resolution::Clear)
        } else {
            observer.collisions_found(index, &position, count);
            match find_free_slot(&position, &settled, config) {
                Some(y) => {
                    let from = position.y;
                    (position.with_y(y), Resolution::Adjusted { from })
                }
                None => (position, Resolution::Unresolved),
            }
        };
        observer.placed(index, &position, resolution);
        settled.push(position);
    }
    settled
}

/// First collision-free height for `position`, if any exists.
///
/// Tries `base + shift` for each shift candidate inside `[MIN_Y, MAX_Y]`,
/// then every scan step from `MAX_Y` down to `MIN_Y`.
fn find_free_slot(
    position: &PositionedAnnotation,
    settled: &[PositionedAnnotation],
    config: &LayoutConfig,
) -> Option<f64> {
    let is_free = |y: f64| {
        let moved = position.with_y(y);
        collision_count(&moved, settled, config) == 0
    };

    let shifted = config
        .shift_candidates
        .iter()
        .map(|shift| position.y + shift)
        .filter(|y| (MIN_Y..=MAX_Y).contains(y));

    shifted
        .chain(scan_heights(config.effective_scan_step()))
        .find(|&y| is_free(y))
}

/// Heights visited by the fallback scan, top to bottom, both ends included.
///
/// `step` must be positive; see `LayoutConfig::effective_scan_step`.
fn scan_heights(step: f64) -> impl Iterator<Item = f64> {
    debug_assert!(step > 0.0);
    let steps = ((MAX_Y - MIN_Y) / step).floor() as usize;
    (0..=steps).map(move |k| MAX_Y - k as f64 * step)
}
