//! Optimization advice models

use serde::{Deserialize, Serialize};

/// Estimated impact of a recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// A single deployment optimization recommendation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdviceItem {
    /// Short headline
    pub title: String,

    /// Recommendation body
    pub content: String,

    /// Estimated impact
    pub impact: Impact,
}
