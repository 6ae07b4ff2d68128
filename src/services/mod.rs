//! Services module - Pure dashboard logic with no presentation dependencies.
//!
//! # Components
//!
//! - [`filter`]: derives the visible subset of the project collection from
//!   user-selected criteria, and computes the distinct values offered as
//!   filter options. Pure functions over explicit inputs.
//! - [`modal`]: the project-detail overlay state machine and its display
//!   projection.
//!
//! Both services take records as read-only input; ownership of the
//! collection lives in [`crate::state::DashboardController`].

pub mod filter;
pub mod modal;

pub use filter::{FilterCriteria, FilterOptions, FilteredResult, apply_filters, clear_all, filter_options};
pub use modal::{CloseTrigger, ModalController, ModalState, ModalView, StageView};
