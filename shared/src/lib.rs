// Shared library root
// Data models and formatting helpers used by both the engine and the GUI.

pub mod models;
pub mod utils;
