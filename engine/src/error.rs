use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("{function} is undefined for {argument}")]
    MathDomain { function: &'static str, argument: String },

    #[error("Invalid input for {field}: {value:?}")]
    InvalidInput { field: &'static str, value: String },

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    #[error("Date out of range")]
    DateOutOfRange,
}

impl EngineError {
    pub fn math_domain(function: &'static str, argument: f64) -> Self {
        EngineError::MathDomain {
            function,
            argument: shared::utils::format_number(argument),
        }
    }

    pub fn invalid_input(field: &'static str, value: impl Into<String>) -> Self {
        EngineError::InvalidInput { field, value: value.into() }
    }

    /// Domain errors are the recoverable, user-facing class: a math function
    /// fed an argument outside its domain, or a field that failed to parse.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            EngineError::DivisionByZero
                | EngineError::MathDomain { .. }
                | EngineError::InvalidInput { .. }
        )
    }
}
