//! CLI library components for the shopping trends dashboard.

pub mod logging;
pub mod present;
