//! Integration tests for DashboardController with state change events
//!
//! These tests verify that the controller correctly:
//! - Emits state change events on mutations
//! - Supports multiple subscribers
//! - Invokes the render hook exactly once per filter operation
//! - Maintains consistency when shared across tasks

use chrono::NaiveDate;
use ganttboard::models::{Priority, ProjectRecord};
use ganttboard::{DashboardController, FilterCriteria, StateChange};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::time::{Duration, timeout};

fn record(name: &str, category: &str, priority: Priority, team: &str) -> ProjectRecord {
    ProjectRecord {
        name: name.to_string(),
        category: category.to_string(),
        priority,
        team_lead: team.to_string(),
        description: String::new(),
        progress_percent: 0,
        start: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
        end: NaiveDate::from_ymd_opt(2026, 5, 1).unwrap(),
        stages: Vec::new(),
    }
}

fn fixture() -> Vec<ProjectRecord> {
    vec![
        record("Alpha", "Infra", Priority::High, "Bob"),
        record("Beta", "Infra", Priority::Low, "alice"),
        record("Gamma", "App", Priority::Critical, "Bob"),
    ]
}

#[tokio::test]
async fn test_state_change_events_emitted() {
    let controller = DashboardController::new();
    let mut rx = controller.subscribe();

    controller.set_projects(fixture());

    let event = timeout(Duration::from_millis(100), rx.recv())
        .await
        .expect("Timeout waiting for event")
        .expect("Channel closed");

    assert!(
        matches!(event, StateChange::ProjectsReplaced { total: 3 }),
        "Expected ProjectsReplaced event, got: {:?}",
        event
    );
}

#[tokio::test]
async fn test_multiple_subscribers_receive_events() {
    let controller = DashboardController::new();
    let mut rx1 = controller.subscribe();
    let mut rx2 = controller.subscribe();

    controller.set_projects(fixture());
    controller.apply_filters(FilterCriteria {
        category: Some("Infra".to_string()),
        ..Default::default()
    });

    for rx in [&mut rx1, &mut rx2] {
        let first = timeout(Duration::from_millis(100), rx.recv())
            .await
            .expect("Timeout")
            .expect("Channel closed");
        assert!(matches!(first, StateChange::ProjectsReplaced { .. }));

        let second = timeout(Duration::from_millis(100), rx.recv())
            .await
            .expect("Timeout")
            .expect("Channel closed");
        assert!(matches!(
            second,
            StateChange::FiltersApplied {
                visible: 2,
                total: 3
            }
        ));
    }
}

#[tokio::test]
async fn test_render_hook_fires_once_per_filter_operation() {
    let controller = DashboardController::new();
    controller.set_projects(fixture());

    let renders = Arc::new(AtomicUsize::new(0));
    let renders_clone = Arc::clone(&renders);
    controller.set_render_hook(move || {
        renders_clone.fetch_add(1, Ordering::SeqCst);
    });

    controller.apply_filters(FilterCriteria {
        priority: Some(Priority::High),
        ..Default::default()
    });
    assert_eq!(renders.load(Ordering::SeqCst), 1);

    controller.clear_filters();
    assert_eq!(renders.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_shared_controller_across_tasks() {
    let controller = DashboardController::new();
    controller.set_projects(fixture());

    let clone = controller.clone();
    let handle = tokio::spawn(async move {
        clone.apply_filters(FilterCriteria {
            team: Some("Bob".to_string()),
            ..Default::default()
        })
    });

    let result = handle.await.unwrap();
    assert_eq!(result.visible, 2);
    assert_eq!(controller.visible_projects().len(), 2);
}

#[test]
fn test_results_label_tracks_operations() {
    let controller = DashboardController::new();
    controller.set_projects(fixture());
    assert_eq!(controller.results_label(), "3 of 3 projects visible");

    controller.apply_filters(FilterCriteria {
        category: Some("App".to_string()),
        ..Default::default()
    });
    assert_eq!(controller.results_label(), "1 of 3 projects visible");

    controller.clear_filters();
    assert_eq!(controller.results_label(), "3 of 3 projects visible");
}

#[test]
fn test_filter_options_follow_collection() {
    let controller = DashboardController::new();
    controller.set_projects(fixture());

    let options = controller.filter_options();
    assert_eq!(options.categories, vec!["App", "Infra"]);
    assert_eq!(options.priorities, vec![Priority::Critical, Priority::High, Priority::Low]);

    controller.set_projects(vec![record("Solo", "Data", Priority::Medium, "Team X")]);
    let options = controller.filter_options();
    assert_eq!(options.categories, vec!["Data"]);
    assert_eq!(options.teams, vec!["Team X"]);
}
