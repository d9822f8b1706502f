//! Dashboard configuration options

use crate::advice::AdviceConfig;
use crate::lifecycle::DeploySettings;
use crate::playback::PlaybackOptions;

/// Main dashboard options
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    /// Deployment lifecycle settings
    pub deploy: DeploySettings,

    /// Log playback options
    pub playback: PlaybackOptions,

    /// Advice client configuration
    pub advice: AdviceConfig,

    /// Start with the sample projects a fresh dashboard ships with
    pub seed_sample_projects: bool,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            deploy: DeploySettings::default(),
            playback: PlaybackOptions::default(),
            advice: AdviceConfig::default(),
            seed_sample_projects: true,
        }
    }
}

impl DashboardOptions {
    /// Defaults, with the advice API key read from the environment
    pub fn from_env() -> Self {
        Self {
            advice: AdviceConfig::from_env(),
            ..Self::default()
        }
    }
}
