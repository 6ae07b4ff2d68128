//! Ganttboard - Project Gantt dashboard runtime
//!
//! Main entry point for the headless dashboard host.
//!
//! # Overview
//!
//! This binary initializes:
//! - Logging infrastructure (file rotation + console output)
//! - Tokio async runtime (4 worker threads for asset fetching and file I/O)
//! - Configuration loading ([`ConfigManager`])
//! - Chart-library loading ([`LibraryLoader`] with retry/timeout/fan-out)
//! - Dashboard state ([`DashboardController`])
//!
//! # Execution Flow
//!
//! 1. Initialize logging → logs/ganttboard.<date>
//! 2. Create tokio runtime with 4 worker threads
//! 3. Load YAML configuration from Ganttboard Data/
//! 4. Attempt the chart-library load; a terminal failure is reported but the
//!    filter and modal surfaces stay usable
//! 5. Optionally load a project collection from a JSON file given as the
//!    first CLI argument
//! 6. Shutdown tokio runtime with 5s timeout
//!
//! # Configuration Files
//!
//! Expected in `Ganttboard Data/` directory:
//! - `Ganttboard Config.yaml`: Library paths, environment mode, retry and
//!   timeout parameters, message texts (optional; defaults apply)

use anyhow::{Context, Result};
use ganttboard::loader::{AssetInjector, HandleRegistry, LibraryLoader, LogFeedback};
use ganttboard::{APP_NAME, ConfigManager, DashboardController, ProjectRecord, VERSION};

fn main() -> Result<()> {
    let _guard = ganttboard::logging::setup_logging("logs", "ganttboard", false, true)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(4)
        .thread_name("ganttboard-worker")
        .build()?;

    let config_manager = ConfigManager::new("Ganttboard Data")?;
    let config = config_manager.load_config()?;

    tracing::info!(
        "Loaded configuration - library: {} {}, mode: {:?}",
        config.library.id,
        config.library.version,
        config.environment.mode
    );

    let controller = DashboardController::new();

    runtime.block_on(async {
        let registry = HandleRegistry::new();
        let injector = AssetInjector::new(registry.clone(), config.library.clone());
        let loader = LibraryLoader::new(&config, injector, LogFeedback, registry);

        match loader.load().await {
            Ok(handle) => {
                tracing::info!(
                    "Chart library ready: {} {} ({} bytes)",
                    handle.id,
                    handle.version,
                    handle.source_len
                );
            }
            Err(error) => {
                // Dashboard stays interactive without the chart surface
                tracing::warn!(
                    "Chart library unavailable after {} attempts: {}",
                    error.attempts,
                    error
                );
            }
        }
    });

    if let Some(data_path) = std::env::args().nth(1) {
        let projects = load_projects(&data_path)?;
        controller.set_projects(projects);
    }

    controller.set_render_hook(|| {
        tracing::debug!("Render requested");
    });

    tracing::info!("Dashboard ready: {}", controller.results_label());

    runtime.shutdown_timeout(std::time::Duration::from_secs(5));

    tracing::info!("Application shutdown complete");
    Ok(())
}

/// Read a project collection from a JSON file.
fn load_projects(path: &str) -> Result<Vec<ProjectRecord>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read project data: {}", path))?;

    let projects: Vec<ProjectRecord> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse project data: {}", path))?;

    tracing::info!("Loaded {} projects from {}", projects.len(), path);
    Ok(projects)
}
