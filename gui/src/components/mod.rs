pub mod calculators;
pub mod history_panel;
pub mod navbar;
pub mod toast;
