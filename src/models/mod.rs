//! Data models for the Ganttboard dashboard.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`ProjectRecord`] / [`StageRecord`]: externally supplied project rows and
//!   their nested stages, treated as read-only input everywhere
//! - [`Priority`] / [`StageStatus`]: exhaustive enumerations with total color
//!   mappings (no string-keyed dispatch)
//! - [`DashboardConfig`]: the immutable settings object consumed at startup
//!
//! Config structs derive `Serialize`/`Deserialize` for YAML persistence;
//! project records deserialize from the JSON payloads an external loader
//! produces.

pub mod project;
pub mod settings;

pub use project::{
    DerivedStatus, Priority, ProjectRecord, StageRecord, StageStatus, days_between, format_date,
};
pub use settings::{
    DashboardConfig, EnvironmentMode, EnvironmentSettings, LibrarySettings, LoadingSettings,
    MessageSettings, UiSettings,
};
