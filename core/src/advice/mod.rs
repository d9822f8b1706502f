//! Deployment advice

pub mod client;
pub mod fallback;

pub use client::{AdviceClient, AdviceConfig, AdviceProvider, FailurePolicy};
pub use fallback::fallback_advice;
