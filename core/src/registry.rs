//! In-memory project registry

use std::sync::RwLock;

use crate::models::project::{Framework, Project, ProjectStatus};

/// Ordered, in-memory collection of dashboard projects.
///
/// Most-recently-created projects come first. The registry is the single
/// owner of project records; the rendering layer only ever sees snapshots.
/// Projects are never deleted within a session.
pub struct ProjectRegistry {
    projects: RwLock<Vec<Project>>,
}

impl ProjectRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            projects: RwLock::new(Vec::new()),
        }
    }

    /// Create a registry pre-populated with the sample projects a fresh
    /// dashboard ships with.
    pub fn seeded() -> Self {
        let registry = Self::new();
        registry.insert(Project {
            id: "2".to_string(),
            name: "saas-landing".to_string(),
            repo: "github.com/user/saas-app".to_string(),
            status: ProjectStatus::Online,
            url: "saas-prod.nova.app".to_string(),
            last_deployed: "5h ago".to_string(),
            framework: Framework::React,
            traffic: 8200,
        });
        registry.insert(Project {
            id: "1".to_string(),
            name: "main-portfolio".to_string(),
            repo: "github.com/user/portfolio".to_string(),
            status: ProjectStatus::Online,
            url: "portfolio.nova.app".to_string(),
            last_deployed: "1h ago".to_string(),
            framework: Framework::Nextjs,
            traffic: 15400,
        });
        registry
    }

    /// Snapshot of all projects, most-recently-created first
    pub fn list(&self) -> Vec<Project> {
        let projects = self.projects.read().unwrap_or_else(|e| e.into_inner());
        projects.clone()
    }

    /// Look up a project by ID
    pub fn get(&self, id: &str) -> Option<Project> {
        let projects = self.projects.read().unwrap_or_else(|e| e.into_inner());
        projects.iter().find(|p| p.id == id).cloned()
    }

    /// Prepend a project
    pub fn insert(&self, project: Project) {
        let mut projects = self.projects.write().unwrap_or_else(|e| e.into_inner());
        projects.insert(0, project);
    }

    /// Apply an in-place mutation to the project with the given ID.
    ///
    /// Returns `false` (and changes nothing) when no such project exists.
    pub fn update<F>(&self, id: &str, mutator: F) -> bool
    where
        F: FnOnce(&mut Project),
    {
        let mut projects = self.projects.write().unwrap_or_else(|e| e.into_inner());
        match projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                mutator(project);
                true
            }
            None => false,
        }
    }

    /// Number of registered projects
    pub fn len(&self) -> usize {
        let projects = self.projects.read().unwrap_or_else(|e| e.into_inner());
        projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ProjectRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}
