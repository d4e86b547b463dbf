//! Behavioural properties of annotation placement

use chrono::{Days, NaiveDate};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use burnup_annotations::layout::{
    assign_base_positions, collides, compute, group_by_proximity, LayoutConfig, MAX_Y, MIN_Y,
};
use burnup_annotations::{AnnotationInput, GroupId, NoopObserver, PositionedAnnotation};

fn at_day(offset: u64, name: &str) -> AnnotationInput {
    let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    AnnotationInput::new("apollo", name, base + Days::new(offset), name)
}

fn place(input: &[AnnotationInput]) -> Vec<PositionedAnnotation> {
    compute(input, &LayoutConfig::default(), &mut NoopObserver)
}

fn heights(positions: &[PositionedAnnotation]) -> Vec<f64> {
    positions.iter().map(|p| p.y).collect()
}

fn offsets(positions: &[PositionedAnnotation]) -> Vec<f64> {
    positions.iter().map(|p| p.x_offset).collect()
}

#[test]
fn test_chained_dates_share_one_group() {
    let positions = place(&[at_day(0, "a"), at_day(4, "b"), at_day(8, "c")]);

    assert_eq!(positions.len(), 3);
    assert!(positions.iter().all(|p| p.group_id == GroupId(0)));
    // labels are 6 days apart after offsets, so the base fan survives
    assert_eq!(heights(&positions), vec![95.0, 80.0, 65.0]);
    assert_eq!(offsets(&positions), vec![-2.0, 0.0, 2.0]);
}

#[test]
fn test_distant_dates_form_separate_groups() {
    let positions = place(&[at_day(10, "late"), at_day(0, "early")]);

    let summary: Vec<(&str, usize, f64)> = positions
        .iter()
        .map(|p| (p.task.task_name.as_str(), p.group_id.0, p.y))
        .collect();
    assert_eq!(summary, vec![("early", 0, 80.0), ("late", 1, 80.0)]);
}

#[test]
fn test_same_day_pair_is_separated() {
    let positions = place(&[at_day(3, "a"), at_day(3, "b")]);
    let config = LayoutConfig::default();

    assert!(!collides(&positions[0], &positions[1], &config));
    // 70 collides with 90, 85 too; 55 is the first clear candidate
    assert_eq!(heights(&positions), vec![90.0, 55.0]);
    assert_eq!(offsets(&positions), vec![-1.0, 1.0]);
}

#[test]
fn test_five_member_group_uses_generic_tables() {
    // consecutive dates are exactly 5 days apart, so they chain into one group
    let input: Vec<AnnotationInput> = (0..5)
        .map(|i| at_day(i * 5, &format!("t{i}")))
        .collect();

    let groups = group_by_proximity(&input, 5);
    assert_eq!(groups.len(), 1);
    let base = assign_base_positions(&groups);
    assert_eq!(heights(&base), vec![95.0, 79.0, 63.0, 47.0, 31.0]);
    assert_eq!(offsets(&base), vec![-3.0, -1.5, 0.0, 1.5, 3.0]);

    // labels end up 6.5 days apart, so nothing moves
    assert_eq!(place(&input), base);
}

#[test]
fn test_end_dates_never_shifted() {
    let input = vec![at_day(2, "a"), at_day(2, "b"), at_day(3, "c"), at_day(4, "d")];
    for pos in place(&input) {
        assert_eq!(pos.end_date, pos.task.end_date);
    }
}

#[test]
fn test_dense_cluster_terminates_in_range() {
    let input: Vec<AnnotationInput> = (0..20).map(|i| at_day(0, &format!("t{i}"))).collect();
    let positions = place(&input);

    assert_eq!(positions.len(), 20);
    assert!(positions.iter().all(|p| (MIN_Y..=MAX_Y).contains(&p.y)));
    assert!(positions.iter().all(|p| p.group_id == GroupId(0)));
}

#[test]
fn test_dense_cluster_with_zero_scan_step_terminates() {
    let config = LayoutConfig {
        scan_step: 0.0,
        ..Default::default()
    };
    let input: Vec<AnnotationInput> = (0..12).map(|i| at_day(0, &format!("t{i}"))).collect();
    let positions = compute(&input, &config, &mut NoopObserver);

    assert_eq!(positions.len(), 12);
    assert!(positions.iter().all(|p| (MIN_Y..=MAX_Y).contains(&p.y)));
}

#[test]
fn test_output_keeps_every_task() {
    let input = vec![at_day(30, "x"), at_day(0, "y"), at_day(2, "z"), at_day(31, "w")];
    let mut placed: Vec<String> = place(&input)
        .into_iter()
        .map(|p| p.task.task_name)
        .collect();
    placed.sort();
    assert_eq!(placed, vec!["w", "x", "y", "z"]);
}

// ===================
// Property tests
// ===================

fn annotations_strategy() -> impl Strategy<Value = Vec<AnnotationInput>> {
    prop::collection::vec(0u64..60, 0..40).prop_map(|days| {
        days.into_iter()
            .enumerate()
            .map(|(i, day)| at_day(day, &format!("task-{i}")))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_one_output_per_input(input in annotations_strategy()) {
        prop_assert_eq!(place(&input).len(), input.len());
    }

    #[test]
    fn prop_heights_within_range(input in annotations_strategy()) {
        for pos in place(&input) {
            prop_assert!((MIN_Y..=MAX_Y).contains(&pos.y), "y out of range: {}", pos.y);
        }
    }

    #[test]
    fn prop_placement_is_deterministic(input in annotations_strategy()) {
        prop_assert_eq!(place(&input), place(&input));
    }

    #[test]
    fn prop_groups_numbered_in_order(input in annotations_strategy()) {
        let positions = place(&input);
        let mut expected = 0;
        for pos in &positions {
            prop_assert!(pos.group_id.0 == expected || pos.group_id.0 == expected + 1);
            expected = pos.group_id.0;
        }
    }
}
