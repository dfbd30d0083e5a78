//! CLI library components for the course editor.

pub mod edit;
pub mod logging;
