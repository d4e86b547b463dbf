//! Per-group placement statistics

use std::collections::BTreeMap;
use std::fmt;

use super::types::{GroupId, PositionedAnnotation};

/// Summary of one proximity group after placement
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroupSummary {
    pub group_id: GroupId,
    pub count: usize,
    pub min_y: f64,
    pub max_y: f64,
}

impl fmt::Display for GroupSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Group {}: {} annotations, height range {:.0}-{:.0}",
            self.group_id.0 + 1,
            self.count,
            self.min_y,
            self.max_y
        )
    }
}

/// Read-only statistics over a placed annotation list
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PositionReport {
    groups: Vec<GroupSummary>,
}

impl PositionReport {
    /// Collect per-group count and height range, ordered by group id
    pub fn from_positions(positions: &[PositionedAnnotation]) -> Self {
        let mut by_group: BTreeMap<GroupId, GroupSummary> = BTreeMap::new();
        for pos in positions {
            by_group
                .entry(pos.group_id)
                .and_modify(|summary| {
                    summary.count += 1;
                    summary.min_y = summary.min_y.min(pos.y);
                    summary.max_y = summary.max_y.max(pos.y);
                })
                .or_insert(GroupSummary {
                    group_id: pos.group_id,
                    count: 1,
                    min_y: pos.y,
                    max_y: pos.y,
                });
        }
        Self {
            groups: by_group.into_values().collect(),
        }
    }

    pub fn groups(&self) -> &[GroupSummary] {
        &self.groups
    }

    pub fn group(&self, id: GroupId) -> Option<&GroupSummary> {
        self.groups.iter().find(|g| g.group_id == id)
    }

    pub fn annotation_count(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }
}

impl fmt::Display for PositionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in &self.groups {
            writeln!(f, "{group}")?;
        }
        Ok(())
    }
}
