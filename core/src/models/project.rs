//! Project models

use serde::{Deserialize, Serialize};

/// Deployment status of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    /// Serving traffic
    Online,

    /// Build in progress
    Building,

    /// Last deployment failed
    Failed,

    /// Created but never deployed
    Idle,
}

impl ProjectStatus {
    /// Whether the lifecycle may move a project from `self` to `to`.
    ///
    /// Only `Building -> Online` is ever driven by the build timer;
    /// `Failed` and `Idle` are accepted as data but no transition
    /// produces them.
    pub fn can_transition(self, to: ProjectStatus) -> bool {
        matches!((self, to), (ProjectStatus::Building, ProjectStatus::Online))
    }
}

/// Framework tag attached to a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    React,
    Nextjs,
    Vue,
    Static,
}

impl std::fmt::Display for Framework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Framework::React => "react",
            Framework::Nextjs => "nextjs",
            Framework::Vue => "vue",
            Framework::Static => "static",
        };
        f.write_str(s)
    }
}

/// A deployed (or deploying) project as shown on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique project ID
    pub id: String,

    /// Display name
    pub name: String,

    /// Source repository reference, or "manual-upload" for drag-and-drop
    pub repo: String,

    /// Current status
    pub status: ProjectStatus,

    /// Public URL under the platform domain
    pub url: String,

    /// Human-readable last-deployed label, e.g. "2h ago" or "Just now"
    pub last_deployed: String,

    /// Framework tag
    pub framework: Framework,

    /// Traffic counter
    pub traffic: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_transition_table() {
        assert!(ProjectStatus::Building.can_transition(ProjectStatus::Online));

        assert!(!ProjectStatus::Online.can_transition(ProjectStatus::Building));
        assert!(!ProjectStatus::Building.can_transition(ProjectStatus::Failed));
        assert!(!ProjectStatus::Idle.can_transition(ProjectStatus::Online));
        assert!(!ProjectStatus::Failed.can_transition(ProjectStatus::Online));
    }

    #[test]
    fn test_status_serde_values() {
        let json = serde_json::to_string(&ProjectStatus::Building).unwrap();
        assert_eq!(json, "\"building\"");

        let framework: Framework = serde_json::from_str("\"static\"").unwrap();
        assert_eq!(framework, Framework::Static);
    }
}
