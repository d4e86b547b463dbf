//! Date-proximity clustering of annotations.
//!
//! Annotations are visited in due-date order and each one joins the first
//! existing group holding *any* member within `proximity_days` of it. Since
//! only one member has to be close, groups chain: days 0, 4 and 8 end up
//! together even though 0 and 8 are eight days apart.

use super::types::AnnotationInput;

/// Cluster annotations by due-date proximity.
///
/// Groups are returned in creation order and are never empty. Members keep
/// the order of a stable sort by `end_date`.
pub fn group_by_proximity(
    annotations: &[AnnotationInput],
    proximity_days: i64,
) -> Vec<Vec<AnnotationInput>> {
    let mut sorted: Vec<&AnnotationInput> = annotations.iter().collect();
    sorted.sort_by_key(|a| a.end_date);

    let mut groups: Vec<Vec<AnnotationInput>> = Vec::new();
    for annotation in sorted {
        let home = groups.iter().position(|group| {
            group.iter().any(|member| {
                (annotation.end_date - member.end_date).num_days().abs() <= proximity_days
            })
        });
        match home {
            Some(index) => groups[index].push(annotation.clone()),
            None => groups.push(vec![annotation.clone()]),
        }
    }
    groups
}
