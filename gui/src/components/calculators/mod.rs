// One module per tool panel. Each panel owns its own signals and calls the
// engine synchronously from its event handlers.

pub mod bmi;
pub mod currency_converter;
pub mod date_calc;
pub mod exercise;
pub mod finance;
pub mod loan_emi;
pub mod mortgage;
pub mod percentage;
pub mod scientific;
pub mod standard;
pub mod tip;
pub mod unit_converter;
pub mod vedic;
