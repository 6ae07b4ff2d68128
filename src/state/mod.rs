// Dashboard state management
//
// This module provides the DashboardController, which owns the project
// collection and the derived visible subset behind Arc<RwLock<T>> and emits
// change events for presentation-layer updates. The collection and subset
// are deliberately not process-wide globals: every consumer goes through the
// controller.

use crate::models::ProjectRecord;
use crate::services::filter::{self, FilterCriteria, FilterOptions, FilteredResult};
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

/// Change events emitted when dashboard state is modified.
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    /// The project collection was replaced by the external data loader
    ProjectsReplaced { total: usize },

    /// Filter criteria were applied and the visible subset recomputed
    FiltersApplied { visible: usize, total: usize },

    /// All filters were cleared; the full collection is visible again
    FiltersCleared { total: usize },
}

/// Everything the dashboard knows: the full collection, the derived visible
/// subset, and the criteria that produced it.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub projects: Vec<ProjectRecord>,
    pub visible: Vec<ProjectRecord>,
    pub criteria: FilterCriteria,
}

type RenderHook = Box<dyn Fn() + Send + Sync>;

/// Owner of the project collection and its filtered subset.
///
/// The controller is the sole writer of the visible subset. Each filter or
/// clear operation triggers exactly one re-filter, one [`StateChange`]
/// broadcast, and one invocation of the registered render hook (if any).
/// Locks are never held across await points; all mutation happens between
/// discrete event callbacks.
pub struct DashboardController {
    state: Arc<RwLock<DashboardState>>,
    state_tx: broadcast::Sender<StateChange>,
    render_hook: Arc<RwLock<Option<RenderHook>>>,
}

impl DashboardController {
    pub fn new() -> Self {
        let (state_tx, _) = broadcast::channel(100);
        Self {
            state: Arc::new(RwLock::new(DashboardState::default())),
            state_tx,
            render_hook: Arc::new(RwLock::new(None)),
        }
    }

    /// Replace the project collection and recompute the visible subset
    /// under the current criteria.
    pub fn set_projects(&self, projects: Vec<ProjectRecord>) {
        let total = projects.len();
        {
            let mut state = self.state.write().unwrap();
            state.projects = projects;
            let result = filter::apply_filters(&state.criteria, &state.projects);
            state.visible = result.records;
        }

        let _ = self.state_tx.send(StateChange::ProjectsReplaced { total });
        tracing::info!("Project collection replaced: {} records", total);
    }

    /// Apply new filter criteria. Triggers exactly one re-filter and, if
    /// registered, one render callback.
    pub fn apply_filters(&self, criteria: FilterCriteria) -> FilteredResult {
        let result = {
            let mut state = self.state.write().unwrap();
            let result = filter::apply_filters(&criteria, &state.projects);
            state.criteria = criteria;
            state.visible = result.records.clone();
            result
        };

        let _ = self.state_tx.send(StateChange::FiltersApplied {
            visible: result.visible,
            total: result.total,
        });
        self.notify_render();

        tracing::debug!("Filters applied: {}", result.label());
        result
    }

    /// Clear all filters; the full collection becomes visible, in original
    /// order.
    pub fn clear_filters(&self) -> FilteredResult {
        let result = {
            let mut state = self.state.write().unwrap();
            let result = filter::clear_all(&state.projects);
            state.criteria = FilterCriteria::default();
            state.visible = result.records.clone();
            result
        };

        let _ = self.state_tx.send(StateChange::FiltersCleared {
            total: result.total,
        });
        self.notify_render();

        result
    }

    /// Distinct category/priority/team values present in the collection.
    pub fn filter_options(&self) -> FilterOptions {
        let state = self.state.read().unwrap();
        filter::filter_options(&state.projects)
    }

    /// Clone of the current visible subset.
    pub fn visible_projects(&self) -> Vec<ProjectRecord> {
        self.state.read().unwrap().visible.clone()
    }

    /// Counter text, e.g. "3 of 10 projects visible".
    pub fn results_label(&self) -> String {
        let state = self.state.read().unwrap();
        format!(
            "{} of {} projects visible",
            state.visible.len(),
            state.projects.len()
        )
    }

    /// Get a read-only snapshot of the current state.
    pub fn snapshot(&self) -> DashboardState {
        self.state.read().unwrap().clone()
    }

    /// Execute a function with read access to the state.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&DashboardState) -> R,
    {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Subscribe to state change events.
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.state_tx.subscribe()
    }

    /// Register the redraw trigger invoked after every successful
    /// filter/clear operation. Takes no arguments; the callee reads the
    /// current visible subset from the controller.
    pub fn set_render_hook<F>(&self, hook: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        *self.render_hook.write().unwrap() = Some(Box::new(hook));
    }

    fn notify_render(&self) {
        if let Some(hook) = self.render_hook.read().unwrap().as_ref() {
            hook();
        }
    }
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new()
    }
}

// Make DashboardController cloneable for sharing across tasks
impl Clone for DashboardController {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            state_tx: self.state_tx.clone(),
            render_hook: Arc::clone(&self.render_hook),
        }
    }
}
