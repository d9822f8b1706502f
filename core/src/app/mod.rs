//! Dashboard application state

pub mod options;
pub mod state;
