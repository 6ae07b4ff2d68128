use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project priority levels.
///
/// Ordering follows severity (Critical sorts first), which is the order
/// priorities are presented in filter dropdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Chart color for this priority level.
    pub fn color(&self) -> &'static str {
        match self {
            Priority::Critical => "#ff4444",
            Priority::High => "#ff8800",
            Priority::Medium => "#4CAF50",
            Priority::Low => "#2196F3",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Critical => "Critical",
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        };
        f.write_str(s)
    }
}

/// Health status attached to an individual stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    #[default]
    Normal,
    Critical,
    Warning,
    Completed,
    Delayed,
}

impl StageStatus {
    /// Chart color for this status. Normal doubles as the default color.
    pub fn color(&self) -> &'static str {
        match self {
            StageStatus::Critical => "#ff4444",
            StageStatus::Warning => "#ff9800",
            StageStatus::Delayed => "#ff5722",
            StageStatus::Completed => "#4CAF50",
            StageStatus::Normal => "#2196F3",
        }
    }
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StageStatus::Normal => "normal",
            StageStatus::Critical => "critical",
            StageStatus::Warning => "warning",
            StageStatus::Completed => "completed",
            StageStatus::Delayed => "delayed",
        };
        f.write_str(s)
    }
}

/// Overall project status derived from progress and dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedStatus {
    Completed,
    Overdue,
    InProgress,
    NotStarted,
}

impl DerivedStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DerivedStatus::Completed => "Completed",
            DerivedStatus::Overdue => "Overdue",
            DerivedStatus::InProgress => "In Progress",
            DerivedStatus::NotStarted => "Not Started",
        }
    }
}

/// A single stage within a project's timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageRecord {
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,

    #[serde(default)]
    pub progress_percent: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StageStatus>,
}

impl StageRecord {
    /// Whole days covered by this stage.
    pub fn duration_days(&self) -> i64 {
        days_between(self.start, self.end)
    }
}

/// One project row on the dashboard.
///
/// Records are produced by an external data loader and treated as
/// read-only input by the filter engine and the modal controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    pub category: String,
    pub priority: Priority,
    pub team_lead: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub progress_percent: u8,

    pub start: NaiveDate,
    pub end: NaiveDate,

    #[serde(default)]
    pub stages: Vec<StageRecord>,
}

impl ProjectRecord {
    /// Whole days between project start and end.
    pub fn total_duration_days(&self) -> i64 {
        days_between(self.start, self.end)
    }

    /// Derive the overall status from progress and the end date.
    pub fn derived_status(&self, today: NaiveDate) -> DerivedStatus {
        if self.progress_percent >= 100 {
            DerivedStatus::Completed
        } else if today > self.end {
            DerivedStatus::Overdue
        } else if self.progress_percent > 0 {
            DerivedStatus::InProgress
        } else {
            DerivedStatus::NotStarted
        }
    }
}

/// Format a date for display, e.g. "Jan 5, 2026".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Whole days between two dates. Negative when `end` precedes `start`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}
