//! Integration tests for the filter engine
//!
//! Property tests cover idempotence and the clear-all equivalence; the
//! example-based tests pin the exact-match and substring semantics.

use chrono::NaiveDate;
use ganttboard::models::{Priority, ProjectRecord};
use ganttboard::services::{FilterCriteria, apply_filters, clear_all, filter_options};
use proptest::prelude::*;

fn record(name: &str, category: &str, priority: Priority, team: &str) -> ProjectRecord {
    ProjectRecord {
        name: name.to_string(),
        category: category.to_string(),
        priority,
        team_lead: team.to_string(),
        description: String::new(),
        progress_percent: 0,
        start: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
        stages: Vec::new(),
    }
}

fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Critical),
        Just(Priority::High),
        Just(Priority::Medium),
        Just(Priority::Low),
    ]
}

fn record_strategy() -> impl Strategy<Value = ProjectRecord> {
    (
        "[a-zA-Z ]{0,20}",
        prop_oneof![Just("Infra"), Just("App"), Just("Data")],
        priority_strategy(),
        prop_oneof![Just("Bob"), Just("alice"), Just("Team X")],
    )
        .prop_map(|(name, category, priority, team)| record(&name, category, priority, team))
}

fn criteria_strategy() -> impl Strategy<Value = FilterCriteria> {
    (
        proptest::option::of(prop_oneof![
            Just(String::new()),
            Just("Infra".to_string()),
            Just("App".to_string()),
        ]),
        proptest::option::of(priority_strategy()),
        proptest::option::of(prop_oneof![
            Just("Bob".to_string()),
            Just("alice".to_string()),
        ]),
        proptest::option::of("[a-zA-Z]{0,5}"),
    )
        .prop_map(|(category, priority, team, search)| FilterCriteria {
            category,
            priority,
            team,
            search,
        })
}

proptest! {
    /// Filtering an already-filtered subset changes nothing.
    #[test]
    fn prop_apply_filters_is_idempotent(
        records in proptest::collection::vec(record_strategy(), 0..20),
        criteria in criteria_strategy(),
    ) {
        let once = apply_filters(&criteria, &records);
        let twice = apply_filters(&criteria, &once.records);

        prop_assert_eq!(&once.records, &twice.records);
        prop_assert_eq!(twice.visible, once.visible);
    }

    /// Clearing filters restores the full collection in original order.
    #[test]
    fn prop_clear_all_restores_collection(
        records in proptest::collection::vec(record_strategy(), 0..20),
    ) {
        let result = clear_all(&records);

        prop_assert_eq!(&result.records, &records);
        prop_assert_eq!(result.visible, records.len());
        prop_assert_eq!(result.total, records.len());
    }

    /// Every visible record satisfies every active criterion.
    #[test]
    fn prop_visible_records_match_criteria(
        records in proptest::collection::vec(record_strategy(), 0..20),
        criteria in criteria_strategy(),
    ) {
        let result = apply_filters(&criteria, &records);
        for project in &result.records {
            prop_assert!(criteria.matches(project));
        }
    }
}

#[test]
fn test_substring_search_on_description() {
    let mut records = vec![
        record("Alpha", "Infra", Priority::High, "Bob"),
        record("Beta", "App", Priority::Low, "alice"),
    ];
    records[0].description = "Migrate billing pipeline".to_string();

    let visible = |term: &str| {
        let criteria = FilterCriteria {
            search: Some(term.to_string()),
            ..Default::default()
        };
        apply_filters(&criteria, &records).visible
    };

    assert_eq!(visible("billing"), 1);
    assert_eq!(visible("BILL"), 1);
    assert_eq!(visible("invoicing"), 0);
}

#[test]
fn test_conjunctive_filters_with_counts() {
    let records = vec![
        record("Alpha", "Infra", Priority::High, "Bob"),
        record("Beta", "Infra", Priority::Low, "alice"),
        record("Gamma", "App", Priority::High, "Bob"),
        record("Delta", "Infra", Priority::High, "Team X"),
    ];

    let criteria = FilterCriteria {
        category: Some("Infra".to_string()),
        priority: Some(Priority::High),
        ..Default::default()
    };

    let result = apply_filters(&criteria, &records);
    assert_eq!(result.visible, 2);
    assert_eq!(result.total, 4);
    assert_eq!(result.label(), "2 of 4 projects visible");
}

#[test]
fn test_team_options_dedup_bytewise_order() {
    let records = vec![
        record("Alpha", "Infra", Priority::High, "Bob"),
        record("Beta", "Infra", Priority::Low, "alice"),
        record("Gamma", "App", Priority::High, "Bob"),
    ];

    let options = filter_options(&records);
    assert_eq!(options.teams, vec!["Bob", "alice"]);
    assert_eq!(options.categories, vec!["App", "Infra"]);
    assert_eq!(options.priorities, vec![Priority::High, Priority::Low]);
}
