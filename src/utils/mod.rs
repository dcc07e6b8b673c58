//! Utilities - terminal styling and logging setup

pub mod logging;
pub mod styling;

pub use logging::*;
pub use styling::*;
