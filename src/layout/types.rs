//! Core types for the annotation layout engine

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

/// Lowest vertical slot an annotation may occupy (percent of chart height)
pub const MIN_Y: f64 = 10.0;

/// Highest vertical slot an annotation may occupy (percent of chart height)
pub const MAX_Y: f64 = 95.0;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// A due-date marker for one task, as handed over by the data layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationInput {
    pub project: String,
    pub task_name: String,
    pub end_date: NaiveDate,
    pub label: String,
}

impl AnnotationInput {
    pub fn new(
        project: impl Into<String>,
        task_name: impl Into<String>,
        end_date: NaiveDate,
        label: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            task_name: task_name.into(),
            end_date,
            label: label.into(),
        }
    }
}

/// Index of the proximity cluster an annotation was placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(pub usize);

/// An annotation with its computed screen position
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedAnnotation {
    /// The original annotation, kept for rendering
    pub task: AnnotationInput,
    /// Vertical slot on a 0-100 scale, always within `[MIN_Y, MAX_Y]`
    pub y: f64,
    /// Horizontal stagger in days, applied only when drawing the label
    pub x_offset: f64,
    /// Original due date; the guide line stays anchored here
    pub end_date: NaiveDate,
    pub group_id: GroupId,
}

impl PositionedAnnotation {
    pub fn new(task: AnnotationInput, y: f64, x_offset: f64, group_id: GroupId) -> Self {
        let end_date = task.end_date;
        Self {
            task,
            y,
            x_offset,
            end_date,
            group_id,
        }
    }

    /// Copy of this annotation moved to a different vertical slot
    pub fn with_y(&self, y: f64) -> Self {
        Self { y, ..self.clone() }
    }

    /// Where the label is drawn: the due date shifted by `x_offset` days.
    ///
    /// Saturates at the ends of the calendar instead of overflowing.
    pub fn display_date(&self) -> NaiveDateTime {
        let midnight = self.end_date.and_time(NaiveTime::MIN);
        let millis = (self.x_offset * MILLIS_PER_DAY).round() as i64;
        midnight
            .checked_add_signed(TimeDelta::milliseconds(millis))
            .unwrap_or(if millis < 0 {
                NaiveDateTime::MIN
            } else {
                NaiveDateTime::MAX
            })
    }

    /// Label position on the time axis, in fractional days after `origin`
    pub fn display_day(&self, origin: NaiveDate) -> f64 {
        days_between(self.end_date, origin) + self.x_offset
    }
}

/// Signed whole calendar days from `b` to `a`
pub fn days_between(a: NaiveDate, b: NaiveDate) -> f64 {
    (a - b).num_days() as f64
}
