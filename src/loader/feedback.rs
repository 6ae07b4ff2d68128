use std::time::Duration;

/// User-visible loading feedback surface.
///
/// The real overlay (spinner, error banner) lives in whatever presentation
/// layer hosts the dashboard; the loader only signals transitions through
/// this trait. `load_failed` carries the configured display duration so the
/// implementation can auto-dismiss the banner independently of the
/// indicator.
pub trait LoaderFeedback: Send + Sync {
    fn loading_started(&self);
    fn loading_finished(&self);
    fn load_failed(&self, message: &str, display_for: Duration);
}

/// Feedback sink that does nothing. Useful for headless callers and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFeedback;

impl LoaderFeedback for NullFeedback {
    fn loading_started(&self) {}
    fn loading_finished(&self) {}
    fn load_failed(&self, _message: &str, _display_for: Duration) {}
}

/// Feedback sink that reports transitions through the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFeedback;

impl LoaderFeedback for LogFeedback {
    fn loading_started(&self) {
        tracing::info!("Loading visualization library...");
    }

    fn loading_finished(&self) {
        tracing::info!("Loading indicator removed");
    }

    fn load_failed(&self, message: &str, display_for: Duration) {
        tracing::warn!(
            "Loading error (shown for {:.1}s): {}",
            display_for.as_secs_f32(),
            message
        );
    }
}
