//! Application state management
//!
//! One owned state object behind all dashboard screens. The rendering
//! layer reads snapshots and sends intents; it never touches the registry,
//! log buffer, or advice list directly.

use std::sync::{Arc, RwLock};

use tracing::info;

use crate::advice::{AdviceClient, AdviceProvider};
use crate::app::options::DashboardOptions;
use crate::errors::CoreError;
use crate::lifecycle::{self, DeploySettings, DeployTicket};
use crate::models::advice::AdviceItem;
use crate::models::build_log::{LogLine, LogMode};
use crate::models::project::{Framework, Project};
use crate::playback::{LogSequencer, PlaybackTicket};
use crate::registry::ProjectRegistry;

/// Main dashboard state
pub struct DashboardState {
    registry: Arc<ProjectRegistry>,
    sequencer: LogSequencer,
    advice: Arc<dyn AdviceProvider>,
    advice_list: RwLock<Vec<AdviceItem>>,
    deploy_settings: DeploySettings,
}

impl DashboardState {
    /// Initialize dashboard state with a live advice client
    pub fn new(options: DashboardOptions) -> Result<Self, CoreError> {
        let client = AdviceClient::new(options.advice.clone())?;
        Ok(Self::with_provider(options, Arc::new(client)))
    }

    /// Initialize dashboard state with a caller-supplied advice source
    pub fn with_provider(options: DashboardOptions, advice: Arc<dyn AdviceProvider>) -> Self {
        info!("Initializing dashboard state...");

        let registry = if options.seed_sample_projects {
            ProjectRegistry::seeded()
        } else {
            ProjectRegistry::new()
        };

        Self {
            registry: Arc::new(registry),
            sequencer: LogSequencer::new(options.playback),
            advice,
            advice_list: RwLock::new(Vec::new()),
            deploy_settings: options.deploy,
        }
    }

    /// The shared project registry
    pub fn registry(&self) -> Arc<ProjectRegistry> {
        self.registry.clone()
    }

    // --- Intents ---

    /// Deploy a new project and start replaying the matching build script.
    ///
    /// Must be called within a tokio runtime.
    pub fn request_deploy(&self, name: &str, repo: &str, framework: Framework) -> DeployTicket {
        let ticket = lifecycle::request_deploy(
            &self.registry,
            &self.deploy_settings,
            name,
            repo,
            framework,
        );

        let mode = if repo.trim().is_empty() || repo == lifecycle::MANUAL_UPLOAD_REPO {
            LogMode::Manual
        } else {
            LogMode::Git
        };
        self.sequencer.play(mode);

        ticket
    }

    /// Restart log playback in the given mode
    pub fn change_log_mode(&self, mode: LogMode) -> PlaybackTicket {
        self.sequencer.play(mode)
    }

    /// Fetch a fresh advice set for the given project and store it,
    /// wholesale-replacing the previous set.
    pub async fn request_advice(&self, project_id: &str) -> Result<Vec<AdviceItem>, CoreError> {
        let project = self
            .registry
            .get(project_id)
            .ok_or_else(|| CoreError::NotFound(format!("project {project_id}")))?;

        let items = self
            .advice
            .get_advice(&project.name, project.framework)
            .await;

        let mut current = self.advice_list.write().unwrap_or_else(|e| e.into_inner());
        *current = items.clone();

        Ok(items)
    }

    // --- Read-only snapshots ---

    /// Current projects, most-recently-created first
    pub fn projects(&self) -> Vec<Project> {
        self.registry.list()
    }

    /// Lines emitted so far by the current playback run
    pub fn build_log(&self) -> Vec<LogLine> {
        self.sequencer.buffer().snapshot()
    }

    /// Whether the build log is still being replayed
    pub fn is_build_log_replaying(&self) -> bool {
        self.sequencer.is_replaying()
    }

    /// The most recently stored advice set
    pub fn advice(&self) -> Vec<AdviceItem> {
        let current = self.advice_list.read().unwrap_or_else(|e| e.into_inner());
        current.clone()
    }
}
