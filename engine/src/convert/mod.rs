// Conversion tools: fixed unit tables and the mock currency rate provider.

pub mod currency;
pub mod units;
