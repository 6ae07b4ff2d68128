use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Dashboard configuration from Ganttboard.yaml
///
/// Constructed once at startup and read-only thereafter. Every section
/// has full defaults so a missing or partial file still yields a
/// working configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub library: LibrarySettings,

    #[serde(default)]
    pub environment: EnvironmentSettings,

    #[serde(default)]
    pub loading: LoadingSettings,

    #[serde(default)]
    pub messages: MessageSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Charting backend descriptor: identifier plus local and CDN sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibrarySettings {
    #[serde(default = "default_library_id")]
    pub id: String,

    #[serde(default = "default_library_version")]
    pub version: String,

    #[serde(default = "default_local_path")]
    pub local_path: String,

    #[serde(default = "default_cdn_path")]
    pub cdn_path: String,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            id: default_library_id(),
            version: default_library_version(),
            local_path: default_local_path(),
            cdn_path: default_cdn_path(),
        }
    }
}

/// Where the charting backend is sourced from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentMode {
    #[default]
    Local,
    Cdn,
    Auto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentSettings {
    #[serde(default)]
    pub mode: EnvironmentMode,

    #[serde(default = "default_offline")]
    pub offline: bool,

    #[serde(default)]
    pub debug: bool,
}

impl Default for EnvironmentSettings {
    fn default() -> Self {
        Self {
            mode: EnvironmentMode::default(),
            offline: default_offline(),
            debug: false,
        }
    }
}

/// Loading policy: per-attempt timeout and the retry budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadingSettings {
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    #[serde(default = "default_retry_attempts")]
    pub retry_attempts: u32,

    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    #[serde(default = "default_show_loading_indicator")]
    pub show_loading_indicator: bool,
}

impl LoadingSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Default for LoadingSettings {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            retry_attempts: default_retry_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
            show_loading_indicator: default_show_loading_indicator(),
        }
    }
}

/// User-visible error texts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSettings {
    #[serde(default = "default_load_error_message")]
    pub load_error: String,

    #[serde(default = "default_load_timeout_message")]
    pub load_timeout: String,
}

impl Default for MessageSettings {
    fn default() -> Self {
        Self {
            load_error: default_load_error_message(),
            load_timeout: default_load_timeout_message(),
        }
    }
}

/// Presentation knobs for the loading indicator and error banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    #[serde(default = "default_error_display_duration_ms")]
    pub error_display_duration_ms: u64,

    #[serde(default = "default_loading_indicator_class")]
    pub loading_indicator_class: String,

    #[serde(default = "default_error_class")]
    pub error_class: String,
}

impl UiSettings {
    pub fn error_display_duration(&self) -> Duration {
        Duration::from_millis(self.error_display_duration_ms)
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            error_display_duration_ms: default_error_display_duration_ms(),
            loading_indicator_class: default_loading_indicator_class(),
            error_class: default_error_class(),
        }
    }
}

fn default_library_id() -> String {
    "d3".to_string()
}

fn default_library_version() -> String {
    "v7".to_string()
}

fn default_local_path() -> String {
    "static/js/d3.v7.min.js".to_string()
}

fn default_cdn_path() -> String {
    "https://d3js.org/d3.v7.min.js".to_string()
}

fn default_offline() -> bool {
    true
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_retry_attempts() -> u32 {
    2
}

fn default_retry_delay_ms() -> u64 {
    1_000
}

fn default_show_loading_indicator() -> bool {
    true
}

fn default_load_error_message() -> String {
    "Failed to load the charting library. Please ensure the file is accessible.".to_string()
}

fn default_load_timeout_message() -> String {
    "Charting library loading timed out. Please check the file location.".to_string()
}

fn default_error_display_duration_ms() -> u64 {
    5_000
}

fn default_loading_indicator_class() -> String {
    "gantt-loading".to_string()
}

fn default_error_class() -> String {
    "gantt-error".to_string()
}
