//! Deployment lifecycle

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::models::project::{Framework, Project, ProjectStatus};
use crate::registry::ProjectRegistry;
use crate::timer::TimerHandle;
use crate::utils::{generate_id, hostname_slug};

/// Repo reference recorded for drag-and-drop deployments
pub const MANUAL_UPLOAD_REPO: &str = "manual-upload";

/// Lifecycle settings
#[derive(Debug, Clone)]
pub struct DeploySettings {
    /// Simulated build time before a project flips to online
    pub build_delay: Duration,

    /// Domain all project URLs live under
    pub platform_domain: String,
}

impl Default for DeploySettings {
    fn default() -> Self {
        Self {
            build_delay: Duration::from_secs(10),
            platform_domain: "nova.app".to_string(),
        }
    }
}

/// Receipt for a scheduled deployment
#[derive(Debug)]
pub struct DeployTicket {
    /// ID of the project that was created
    pub project_id: String,

    /// Handle to the pending building -> online transition
    pub timer: TimerHandle,
}

/// Create a new building project and schedule its transition to online.
///
/// Empty inputs degrade to placeholders instead of being rejected: a blank
/// name becomes "unnamed-project" and a blank repo becomes the
/// manual-upload sentinel. The new record is prepended to the registry and
/// one timer is spawned that, after `settings.build_delay`, flips that
/// project to online. The timer matches by project ID, never by position,
/// so registry reordering in the interim is harmless; concurrent deploys
/// each carry their own timer.
///
/// Must be called within a tokio runtime.
pub fn request_deploy(
    registry: &Arc<ProjectRegistry>,
    settings: &DeploySettings,
    name: &str,
    repo: &str,
    framework: Framework,
) -> DeployTicket {
    let name = name.trim();
    let repo = repo.trim();

    let host = if name.is_empty() {
        "project".to_string()
    } else {
        hostname_slug(name)
    };

    let project = Project {
        id: generate_id(),
        name: if name.is_empty() {
            "unnamed-project".to_string()
        } else {
            name.to_string()
        },
        repo: if repo.is_empty() {
            MANUAL_UPLOAD_REPO.to_string()
        } else {
            repo.to_string()
        },
        status: ProjectStatus::Building,
        url: format!("{}.{}", host, settings.platform_domain),
        last_deployed: "Just now".to_string(),
        framework,
        traffic: 0,
    };

    let project_id = project.id.clone();
    info!("Deploy requested: {} ({})", project.name, project_id);
    registry.insert(project);

    let timer = schedule_transition(registry.clone(), project_id.clone(), settings.build_delay);

    DeployTicket { project_id, timer }
}

/// Spawn the one-shot building -> online transition for `project_id`
fn schedule_transition(
    registry: Arc<ProjectRegistry>,
    project_id: String,
    delay: Duration,
) -> TimerHandle {
    let handle = tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let flipped = registry.update(&project_id, |p| {
            if p.status.can_transition(ProjectStatus::Online) {
                p.status = ProjectStatus::Online;
            }
        });

        if flipped {
            info!("Build complete, project {} is online", project_id);
        } else {
            debug!("Build timer fired for unknown project {}", project_id);
        }
    });

    TimerHandle::new(handle)
}
