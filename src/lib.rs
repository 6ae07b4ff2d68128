// Ganttboard - Project Gantt dashboard runtime
//
// This is the library crate containing the chart-library loader, the filter
// engine, the detail modal controller, and the dashboard state management.
// The binary crate (main.rs) provides the headless entry point.

pub mod config;
pub mod loader;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ConfigManager;
pub use loader::{ErrorInfo, LibraryLoader, LoadErrorKind, LoaderEvent, LoaderState};
pub use models::{DashboardConfig, ProjectRecord};
pub use services::{FilterCriteria, ModalController};
pub use state::{DashboardController, StateChange};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
