use crate::models::{Priority, ProjectRecord};
use std::collections::BTreeSet;

/// User-selected filter criteria.
///
/// Each field is optional; absent (or empty-string) criteria impose no
/// constraint. Criteria are transient values recomputed on every user
/// interaction, never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    pub category: Option<String>,
    pub priority: Option<Priority>,
    pub team: Option<String>,
    pub search: Option<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        active(&self.category).is_none()
            && self.priority.is_none()
            && active(&self.team).is_none()
            && active(&self.search).is_none()
    }

    /// A record passes iff it matches every active criterion.
    pub fn matches(&self, project: &ProjectRecord) -> bool {
        if let Some(category) = active(&self.category) {
            if project.category != category {
                return false;
            }
        }

        if let Some(priority) = self.priority {
            if project.priority != priority {
                return false;
            }
        }

        if let Some(team) = active(&self.team) {
            if project.team_lead != team {
                return false;
            }
        }

        if let Some(search) = active(&self.search) {
            let haystack = format!("{} {}", project.name, project.description).to_lowercase();
            if !haystack.contains(&search.to_lowercase()) {
                return false;
            }
        }

        true
    }
}

/// Treat empty strings like absent criteria.
fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// The derived, render-ready subset plus visible/total counts.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredResult {
    pub records: Vec<ProjectRecord>,
    pub visible: usize,
    pub total: usize,
}

impl FilteredResult {
    /// Counter text for the results element, e.g. "3 of 10 projects visible".
    pub fn label(&self) -> String {
        format!("{} of {} projects visible", self.visible, self.total)
    }
}

/// Apply the criteria to the full collection.
///
/// Pure with respect to its inputs: the same criteria and records always
/// yield the same subset, in the original relative order, and `records` is
/// never mutated.
pub fn apply_filters(criteria: &FilterCriteria, records: &[ProjectRecord]) -> FilteredResult {
    let passing: Vec<ProjectRecord> = records
        .iter()
        .filter(|project| criteria.matches(project))
        .cloned()
        .collect();

    FilteredResult {
        visible: passing.len(),
        total: records.len(),
        records: passing,
    }
}

/// Equivalent to applying empty criteria: the full collection, in order.
pub fn clear_all(records: &[ProjectRecord]) -> FilteredResult {
    apply_filters(&FilterCriteria::default(), records)
}

/// Distinct values present in the collection, for filter dropdowns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    pub categories: Vec<String>,
    pub priorities: Vec<Priority>,
    pub teams: Vec<String>,
}

/// Derive selectable filter options: distinct values, sorted ascending by
/// their natural ordering, duplicates collapsed.
pub fn filter_options(records: &[ProjectRecord]) -> FilterOptions {
    let categories: BTreeSet<String> = records.iter().map(|p| p.category.clone()).collect();
    let priorities: BTreeSet<Priority> = records.iter().map(|p| p.priority).collect();
    let teams: BTreeSet<String> = records.iter().map(|p| p.team_lead.clone()).collect();

    FilterOptions {
        categories: categories.into_iter().collect(),
        priorities: priorities.into_iter().collect(),
        teams: teams.into_iter().collect(),
    }
}
