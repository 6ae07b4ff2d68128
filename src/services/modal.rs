use crate::models::{ProjectRecord, format_date};

/// Modal lifecycle states.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    Open(ProjectRecord),
}

/// The affordances that dismiss an open modal. All of them route through
/// [`ModalController::close_modal`] so the state stays consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseTrigger {
    CloseButton,
    OutsideClick,
    EscapeKey,
}

/// Display projection of an open modal, with placeholder text substituted
/// for missing fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ModalView {
    pub name: String,
    pub category: String,
    pub priority: String,
    pub team: String,
    pub progress: String,
    pub description: String,
    pub stages: Vec<StageView>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StageView {
    pub name: String,
    pub date_range: String,
    pub progress: String,
    pub status: Option<String>,
}

/// Manages the project-detail overlay lifecycle.
#[derive(Debug, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, ModalState::Open(_))
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// Open the modal on `record`. If the modal is already open, the
    /// displayed record is replaced.
    pub fn show_project_modal(&mut self, record: ProjectRecord) {
        self.state = ModalState::Open(record);
    }

    /// Close the modal. Returns whether a transition occurred; closing an
    /// already-closed modal is a no-op.
    pub fn close_modal(&mut self) -> bool {
        if self.is_open() {
            self.state = ModalState::Closed;
            true
        } else {
            false
        }
    }

    /// Dismiss via a UI affordance. Every trigger takes the same path.
    pub fn dismiss(&mut self, trigger: CloseTrigger) -> bool {
        tracing::debug!("Modal dismissed via {:?}", trigger);
        self.close_modal()
    }

    /// Build the display projection for the open record, or None when
    /// closed.
    pub fn view(&self) -> Option<ModalView> {
        let ModalState::Open(record) = &self.state else {
            return None;
        };

        Some(ModalView {
            name: placeholder(&record.name, "Unknown Project"),
            category: placeholder(&record.category, "N/A"),
            priority: record.priority.to_string(),
            team: placeholder(&record.team_lead, "N/A"),
            progress: format!("{}%", record.progress_percent),
            description: placeholder(&record.description, "No description available"),
            stages: record
                .stages
                .iter()
                .map(|stage| StageView {
                    name: stage.name.clone(),
                    date_range: format!(
                        "{} to {}",
                        format_date(stage.start),
                        format_date(stage.end)
                    ),
                    progress: format!("{}%", stage.progress_percent),
                    status: stage.status.map(|status| status.to_string()),
                })
                .collect(),
        })
    }
}

fn placeholder(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value.to_string()
    }
}
