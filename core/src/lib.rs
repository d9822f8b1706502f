//! NovaDeploy Core
//!
//! Non-rendering core of the NovaDeploy cloud-deployment dashboard:
//! project registry, simulated deployment lifecycle, canned build log
//! playback, and the AI advice client. Consumed as a library by a view
//! layer; holds no persistent state.

pub mod advice;
pub mod analytics;
pub mod app;
pub mod errors;
pub mod lifecycle;
pub mod logs;
pub mod models;
pub mod playback;
pub mod registry;
pub mod timer;
pub mod utils;
