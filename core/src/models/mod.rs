//! Data models

pub mod advice;
pub mod build_log;
pub mod project;
