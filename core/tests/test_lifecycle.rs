//! Deployment lifecycle tests

use std::sync::Arc;
use std::time::Duration;

use novadeploy_core::lifecycle::{request_deploy, DeploySettings, MANUAL_UPLOAD_REPO};
use novadeploy_core::models::project::{Framework, ProjectStatus};
use novadeploy_core::registry::ProjectRegistry;

fn settings() -> DeploySettings {
    DeploySettings::default()
}

#[tokio::test(start_paused = true)]
async fn test_deploy_creates_building_project() {
    let registry = Arc::new(ProjectRegistry::new());

    let ticket = request_deploy(
        &registry,
        &settings(),
        "demo-app",
        "github.com/user/demo",
        Framework::React,
    );

    let project = registry.get(&ticket.project_id).unwrap();
    assert_eq!(project.status, ProjectStatus::Building);
    assert_eq!(project.name, "demo-app");
    assert_eq!(project.repo, "github.com/user/demo");
    assert_eq!(project.url, "demo-app.nova.app");
    assert_eq!(project.last_deployed, "Just now");
    assert_eq!(project.traffic, 0);

    // New deployments go to the front of the list
    assert_eq!(registry.list()[0].id, ticket.project_id);
}

#[tokio::test(start_paused = true)]
async fn test_deploy_transitions_to_online_after_delay() {
    let registry = Arc::new(ProjectRegistry::new());

    let ticket = request_deploy(
        &registry,
        &settings(),
        "demo-app",
        "github.com/user/demo",
        Framework::Nextjs,
    );
    let before = registry.get(&ticket.project_id).unwrap();

    tokio::time::sleep(Duration::from_secs(9)).await;
    assert_eq!(
        registry.get(&ticket.project_id).unwrap().status,
        ProjectStatus::Building
    );

    tokio::time::sleep(Duration::from_secs(2)).await;
    let after = registry.get(&ticket.project_id).unwrap();
    assert_eq!(after.status, ProjectStatus::Online);

    // Every field but status survives the transition untouched
    assert_eq!(after.id, before.id);
    assert_eq!(after.name, before.name);
    assert_eq!(after.repo, before.repo);
    assert_eq!(after.url, before.url);
    assert_eq!(after.last_deployed, before.last_deployed);
    assert_eq!(after.framework, before.framework);
    assert_eq!(after.traffic, before.traffic);
}

#[tokio::test(start_paused = true)]
async fn test_empty_inputs_get_placeholders() {
    let registry = Arc::new(ProjectRegistry::new());

    let ticket = request_deploy(&registry, &settings(), "demo-app", "", Framework::React);
    let project = registry.get(&ticket.project_id).unwrap();
    assert_eq!(project.repo, MANUAL_UPLOAD_REPO);
    assert_eq!(project.url, "demo-app.nova.app");

    let ticket = request_deploy(&registry, &settings(), "", "", Framework::Static);
    let project = registry.get(&ticket.project_id).unwrap();
    assert_eq!(project.name, "unnamed-project");
    assert_eq!(project.url, "project.nova.app");

    tokio::time::sleep(Duration::from_secs(11)).await;
    assert_eq!(
        registry.get(&ticket.project_id).unwrap().status,
        ProjectStatus::Online
    );
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_deploys_transition_independently() {
    let registry = Arc::new(ProjectRegistry::new());

    let first = request_deploy(
        &registry,
        &settings(),
        "first-app",
        "github.com/user/first",
        Framework::React,
    );

    tokio::time::sleep(Duration::from_secs(4)).await;

    let second = request_deploy(
        &registry,
        &settings(),
        "second-app",
        "github.com/user/second",
        Framework::Vue,
    );
    assert_ne!(first.project_id, second.project_id);

    // 7s after the second deploy: first (11s old) is done, second is not
    tokio::time::sleep(Duration::from_secs(7)).await;
    assert_eq!(
        registry.get(&first.project_id).unwrap().status,
        ProjectStatus::Online
    );
    assert_eq!(
        registry.get(&second.project_id).unwrap().status,
        ProjectStatus::Building
    );

    tokio::time::sleep(Duration::from_secs(4)).await;
    assert_eq!(
        registry.get(&second.project_id).unwrap().status,
        ProjectStatus::Online
    );
}

#[tokio::test(start_paused = true)]
async fn test_transition_matches_by_id_not_position() {
    let registry = Arc::new(ProjectRegistry::new());

    let ticket = request_deploy(
        &registry,
        &settings(),
        "target-app",
        "github.com/user/target",
        Framework::React,
    );

    // Pile more deployments on top so the target is no longer first
    request_deploy(&registry, &settings(), "later-1", "", Framework::Static);
    request_deploy(&registry, &settings(), "later-2", "", Framework::Static);
    assert_ne!(registry.list()[0].id, ticket.project_id);

    tokio::time::sleep(Duration::from_secs(11)).await;
    assert_eq!(
        registry.get(&ticket.project_id).unwrap().status,
        ProjectStatus::Online
    );
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_timer_leaves_project_building() {
    let registry = Arc::new(ProjectRegistry::new());

    let ticket = request_deploy(
        &registry,
        &settings(),
        "stuck-app",
        "github.com/user/stuck",
        Framework::React,
    );
    ticket.timer.cancel();

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(
        registry.get(&ticket.project_id).unwrap().status,
        ProjectStatus::Building
    );
}
