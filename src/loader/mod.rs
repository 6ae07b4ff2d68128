//! Charting-backend loader with timeout, retry, and fan-out semantics.
//!
//! The [`LibraryLoader`] installs the external charting library exactly once
//! per process. Every attempt races the injector against a configured
//! timeout; transport failures, timeouts, and verification failures (the
//! asset fetched but no handle appeared in the registry) all consume the same
//! retry budget. The first [`load()`](LibraryLoader::load) caller drives the
//! attempt loop; callers arriving while an attempt is in flight wait on the
//! same terminal outcome, so only one injection sequence ever runs.
//!
//! After terminal failure the loader stays failed: later `load()` calls get
//! the stored error immediately. Re-arming for a fresh cycle is deliberately
//! not offered (see DESIGN.md).

mod feedback;
mod injector;
mod registry;

pub use feedback::{LoaderFeedback, LogFeedback, NullFeedback};
pub use injector::{AssetInjector, ResourceInjector};
pub use registry::{HandleRegistry, LibraryHandle};

use crate::models::{
    DashboardConfig, EnvironmentMode, EnvironmentSettings, LibrarySettings, LoadingSettings,
    MessageSettings, UiSettings,
};
use std::sync::Mutex;
use thiserror::Error;
use tokio::sync::{broadcast, oneshot};
use tokio::time::{sleep, timeout};

/// Classification of a failed load attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadErrorKind {
    #[error("resource fetch failed")]
    TransportFailure,

    #[error("no completion within the configured timeout")]
    Timeout,

    #[error("resource loaded but the library handle is absent")]
    VerificationFailure,
}

/// Terminal load failure, surfaced to every pending subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ErrorInfo {
    pub kind: LoadErrorKind,

    /// The configured user-facing message for this error kind.
    pub message: String,

    /// Total attempts made (initial + retries).
    pub attempts: u32,
}

/// Read-only diagnostic snapshot of the loader.
///
/// At most one of `loaded`/`loading` is true at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderState {
    pub loaded: bool,
    pub loading: bool,
    pub error: Option<ErrorInfo>,
    pub retry_count: u32,
}

/// Broadcast exactly once per terminal outcome.
#[derive(Debug, Clone)]
pub enum LoaderEvent {
    Loaded(LibraryHandle),
    LoadFailed(ErrorInfo),
}

enum LoadPhase {
    Idle,
    Loading,
    Loaded(LibraryHandle),
    Failed(ErrorInfo),
}

struct LoaderInner {
    phase: LoadPhase,
    retry_count: u32,
    waiters: Vec<oneshot::Sender<Result<LibraryHandle, ErrorInfo>>>,
}

enum Gate {
    Drive,
    Wait(oneshot::Receiver<Result<LibraryHandle, ErrorInfo>>),
}

/// Loads the charting backend once, with retry/timeout/verification.
///
/// Generic over the injector (how assets are fetched) and the feedback sink
/// (how loading/error indication reaches the user), both of which belong to
/// the hosting presentation layer.
pub struct LibraryLoader<I, F> {
    library: LibrarySettings,
    environment: EnvironmentSettings,
    loading: LoadingSettings,
    messages: MessageSettings,
    ui: UiSettings,

    injector: I,
    feedback: F,
    registry: HandleRegistry,

    inner: Mutex<LoaderInner>,
    events: broadcast::Sender<LoaderEvent>,
}

impl<I, F> LibraryLoader<I, F>
where
    I: ResourceInjector,
    F: LoaderFeedback,
{
    pub fn new(config: &DashboardConfig, injector: I, feedback: F, registry: HandleRegistry) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            library: config.library.clone(),
            environment: config.environment.clone(),
            loading: config.loading.clone(),
            messages: config.messages.clone(),
            ui: config.ui.clone(),
            injector,
            feedback,
            registry,
            inner: Mutex::new(LoaderInner {
                phase: LoadPhase::Idle,
                retry_count: 0,
                waiters: Vec::new(),
            }),
            events,
        }
    }

    /// Load the charting library, or join the load already in flight.
    ///
    /// All callers that arrive before the terminal outcome receive the same
    /// result. After terminal success the stored handle is returned
    /// immediately; after terminal failure the stored error is returned
    /// immediately, without retrying.
    pub async fn load(&self) -> Result<LibraryHandle, ErrorInfo> {
        let gate = {
            let mut inner = self.inner.lock().unwrap();
            match &inner.phase {
                LoadPhase::Loaded(handle) => return Ok(handle.clone()),
                LoadPhase::Failed(error) => return Err(error.clone()),
                LoadPhase::Loading => {
                    let (tx, rx) = oneshot::channel();
                    inner.waiters.push(tx);
                    Gate::Wait(rx)
                }
                LoadPhase::Idle => {
                    inner.phase = LoadPhase::Loading;
                    Gate::Drive
                }
            }
        };

        match gate {
            Gate::Drive => self.drive().await,
            Gate::Wait(rx) => rx.await.unwrap_or_else(|_| {
                // Driver dropped without completing; report as transport failure
                Err(ErrorInfo {
                    kind: LoadErrorKind::TransportFailure,
                    message: self.messages.load_error.clone(),
                    attempts: self.inner.lock().unwrap().retry_count + 1,
                })
            }),
        }
    }

    /// True only if loading succeeded and the handle is still registered.
    pub fn is_loaded(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        matches!(inner.phase, LoadPhase::Loaded(_)) && self.registry.contains(&self.library.id)
    }

    /// Diagnostic snapshot of the current loading state.
    pub fn state(&self) -> LoaderState {
        let inner = self.inner.lock().unwrap();
        LoaderState {
            loaded: matches!(inner.phase, LoadPhase::Loaded(_)),
            loading: matches!(inner.phase, LoadPhase::Loading),
            error: match &inner.phase {
                LoadPhase::Failed(error) => Some(error.clone()),
                _ => None,
            },
            retry_count: inner.retry_count,
        }
    }

    /// Subscribe to the terminal outcome broadcast.
    pub fn subscribe(&self) -> broadcast::Receiver<LoaderEvent> {
        self.events.subscribe()
    }

    pub fn registry(&self) -> &HandleRegistry {
        &self.registry
    }

    /// Resolve the asset source from the configured environment mode.
    fn source_path(&self) -> &str {
        match self.environment.mode {
            EnvironmentMode::Local => &self.library.local_path,
            EnvironmentMode::Cdn => &self.library.cdn_path,
            EnvironmentMode::Auto => {
                if self.environment.offline {
                    &self.library.local_path
                } else {
                    &self.library.cdn_path
                }
            }
        }
    }

    /// Run the attempt loop until a terminal outcome.
    async fn drive(&self) -> Result<LibraryHandle, ErrorInfo> {
        let source = self.source_path().to_string();

        if self.loading.show_loading_indicator {
            self.feedback.loading_started();
        }
        tracing::debug!("Loading {} from {}", self.library.id, source);

        loop {
            let kind = match timeout(self.loading.timeout(), self.injector.inject(&source)).await {
                Ok(Ok(())) => match self.registry.get(&self.library.id) {
                    Some(handle) => return self.complete_success(handle),
                    None => LoadErrorKind::VerificationFailure,
                },
                Ok(Err(err)) => {
                    if self.environment.debug {
                        tracing::debug!("{} fetch attempt failed: {:#}", self.library.id, err);
                    }
                    LoadErrorKind::TransportFailure
                }
                // The elapsed timeout cancels the in-flight attempt, so a
                // late completion can never race a fired timer.
                Err(_) => LoadErrorKind::Timeout,
            };

            let retry = {
                let mut inner = self.inner.lock().unwrap();
                if inner.retry_count < self.loading.retry_attempts {
                    inner.retry_count += 1;
                    Some(inner.retry_count)
                } else {
                    None
                }
            };

            match retry {
                Some(attempt) => {
                    if self.environment.debug {
                        tracing::debug!(
                            "Retrying {} load after {} (attempt {}/{})",
                            self.library.id,
                            kind,
                            attempt,
                            self.loading.retry_attempts
                        );
                    }
                    sleep(self.loading.retry_delay()).await;
                }
                None => return self.complete_failure(kind),
            }
        }
    }

    fn complete_success(&self, handle: LibraryHandle) -> Result<LibraryHandle, ErrorInfo> {
        let waiters = {
            let mut inner = self.inner.lock().unwrap();
            inner.phase = LoadPhase::Loaded(handle.clone());
            std::mem::take(&mut inner.waiters)
        };

        for waiter in waiters {
            let _ = waiter.send(Ok(handle.clone()));
        }

        self.feedback.loading_finished();
        let _ = self.events.send(LoaderEvent::Loaded(handle.clone()));

        tracing::info!("{} {} loaded successfully", handle.id, handle.version);
        Ok(handle)
    }

    fn complete_failure(&self, kind: LoadErrorKind) -> Result<LibraryHandle, ErrorInfo> {
        let message = match kind {
            LoadErrorKind::Timeout => self.messages.load_timeout.clone(),
            LoadErrorKind::TransportFailure | LoadErrorKind::VerificationFailure => {
                self.messages.load_error.clone()
            }
        };

        let (error, waiters) = {
            let mut inner = self.inner.lock().unwrap();
            let error = ErrorInfo {
                kind,
                message,
                attempts: inner.retry_count + 1,
            };
            inner.phase = LoadPhase::Failed(error.clone());
            (error, std::mem::take(&mut inner.waiters))
        };

        for waiter in waiters {
            let _ = waiter.send(Err(error.clone()));
        }

        self.feedback.loading_finished();
        self.feedback
            .load_failed(&error.message, self.ui.error_display_duration());
        let _ = self.events.send(LoaderEvent::LoadFailed(error.clone()));

        tracing::error!(
            "{} loading failed after {} attempts: {}",
            self.library.id,
            error.attempts,
            error.message
        );
        Err(error)
    }
}
