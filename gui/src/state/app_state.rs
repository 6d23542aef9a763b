// Global application state: the selected tool tab. Everything else is owned
// by the individual panels.

use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Standard,
    Scientific,
    Units,
    Currency,
    Bmi,
    Finance,
    Mortgage,
    LoanEmi,
    Exercise,
    Dates,
    Tip,
    Vedic,
    Percentage,
}

impl Tab {
    pub const ALL: [Tab; 13] = [
        Tab::Standard,
        Tab::Scientific,
        Tab::Units,
        Tab::Currency,
        Tab::Bmi,
        Tab::Finance,
        Tab::Mortgage,
        Tab::LoanEmi,
        Tab::Exercise,
        Tab::Dates,
        Tab::Tip,
        Tab::Vedic,
        Tab::Percentage,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Standard => "standard",
            Tab::Scientific => "scientific",
            Tab::Units => "units",
            Tab::Currency => "currency",
            Tab::Bmi => "bmi",
            Tab::Finance => "finance",
            Tab::Mortgage => "mortgage",
            Tab::LoanEmi => "loan-emi",
            Tab::Exercise => "exercise",
            Tab::Dates => "dates",
            Tab::Tip => "tip",
            Tab::Vedic => "vedic",
            Tab::Percentage => "percentage",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Standard => "Standard",
            Tab::Scientific => "Scientific",
            Tab::Units => "Unit Converter",
            Tab::Currency => "Currency",
            Tab::Bmi => "BMI",
            Tab::Finance => "Finance",
            Tab::Mortgage => "Mortgage",
            Tab::LoanEmi => "Loan EMI",
            Tab::Exercise => "Exercise",
            Tab::Dates => "Dates",
            Tab::Tip => "Tip",
            Tab::Vedic => "Vedic Math",
            Tab::Percentage => "Percentage",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.iter().copied().find(|t| t.id() == id)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub active_tab: Tab,
}

impl AppState {
    pub fn from_config(config: &AppConfig) -> Self {
        let active_tab = Tab::from_id(&config.app.default_tab).unwrap_or_else(|| {
            tracing::warn!(tab = %config.app.default_tab, "Unknown default tab in config, falling back to standard");
            Tab::Standard
        });
        AppState { active_tab }
    }
}
