// Two-operand accumulator shared by the standard and scientific panels.
// Strictly left-to-right: each operator press resolves the previous pending
// computation before storing the new operator. No precedence.

use crate::error::EngineError;
use shared::utils::format_number;

pub const ZERO_DISPLAY: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "×",
            BinaryOp::Divide => "÷",
            BinaryOp::Power => "^",
        }
    }

    /// Division by zero yields the NaN sentinel, never an error; callers that
    /// need to surface it (equals) check the result.
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Subtract => a - b,
            BinaryOp::Multiply => a * b,
            BinaryOp::Divide => {
                if b == 0.0 {
                    f64::NAN
                } else {
                    a / b
                }
            }
            BinaryOp::Power => a.powf(b),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryFn {
    Sin,
    Cos,
    Tan,
    Log10,
    Ln,
    Sqrt,
    Reciprocal,
    Square,
}

impl UnaryFn {
    pub fn label(&self) -> &'static str {
        match self {
            UnaryFn::Sin => "sin",
            UnaryFn::Cos => "cos",
            UnaryFn::Tan => "tan",
            UnaryFn::Log10 => "log",
            UnaryFn::Ln => "ln",
            UnaryFn::Sqrt => "sqrt",
            UnaryFn::Reciprocal => "1/x",
            UnaryFn::Square => "x²",
        }
    }

    pub fn apply(&self, x: f64) -> Result<f64, EngineError> {
        match self {
            UnaryFn::Sin => Ok(x.sin()),
            UnaryFn::Cos => Ok(x.cos()),
            UnaryFn::Tan => Ok(x.tan()),
            UnaryFn::Log10 => {
                if x <= 0.0 {
                    Err(EngineError::math_domain("log", x))
                } else {
                    Ok(x.log10())
                }
            }
            UnaryFn::Ln => {
                if x <= 0.0 {
                    Err(EngineError::math_domain("ln", x))
                } else {
                    Ok(x.ln())
                }
            }
            UnaryFn::Sqrt => {
                if x < 0.0 {
                    Err(EngineError::math_domain("sqrt", x))
                } else {
                    Ok(x.sqrt())
                }
            }
            UnaryFn::Reciprocal => {
                if x == 0.0 {
                    Err(EngineError::DivisionByZero)
                } else {
                    Ok(1.0 / x)
                }
            }
            UnaryFn::Square => Ok(x * x),
        }
    }
}

/// The expression/result pair produced by a completed evaluation, ready to be
/// recorded into the history log by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub expression: String,
    pub result: String,
}

/// Single-register calculator state. The pending operand and operator live in
/// one `Option` so they are set and cleared together.
#[derive(Debug, Clone)]
pub struct Accumulator {
    display: String,
    pending: Option<(f64, BinaryOp)>,
    awaiting_fresh_entry: bool,
}

impl Accumulator {
    pub fn new() -> Self {
        Accumulator {
            display: ZERO_DISPLAY.to_string(),
            pending: None,
            awaiting_fresh_entry: false,
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    fn display_value(&self) -> f64 {
        // The display only ever holds digits we appended or a formatted
        // result, so a parse failure means an empty buffer; treat it as zero.
        self.display.parse().unwrap_or(0.0)
    }

    /// Ghost line above the display: "12 +" while the right operand is
    /// being entered.
    pub fn pending_preview(&self) -> Option<String> {
        self.pending
            .as_ref()
            .map(|(value, op)| format!("{} {}", format_number(*value), op.symbol()))
    }

    pub fn enter_digit(&mut self, digit: char) {
        debug_assert!(digit.is_ascii_digit());
        if self.display == ZERO_DISPLAY || self.awaiting_fresh_entry {
            self.display = digit.to_string();
            self.awaiting_fresh_entry = false;
        } else {
            self.display.push(digit);
        }
    }

    /// A second decimal point in the same number is ignored.
    pub fn enter_point(&mut self) {
        if self.awaiting_fresh_entry {
            self.display = "0.".to_string();
            self.awaiting_fresh_entry = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Stores the operator; if one is already pending, resolves it first and
    /// carries the intermediate result as the new left operand.
    pub fn push_operator(&mut self, op: BinaryOp) {
        let current = self.display_value();
        match self.pending.take() {
            None => {
                self.pending = Some((current, op));
            }
            Some((left, prev_op)) => {
                let result = prev_op.apply(left, current);
                self.pending = Some((result, op));
                self.display = format_number(result);
            }
        }
        self.awaiting_fresh_entry = true;
    }

    /// Resolves the pending computation. Returns `Ok(None)` when nothing is
    /// pending (repeated equals is a no-op), `Ok(Some(_))` with the history
    /// record on success. A division by zero returns an error and leaves the
    /// whole state untouched, matching the unary error policy.
    pub fn equals(&mut self) -> Result<Option<Evaluation>, EngineError> {
        let Some((left, op)) = self.pending else {
            return Ok(None);
        };
        let right = self.display_value();
        let result = op.apply(left, right);
        if result.is_nan() && op == BinaryOp::Divide && right == 0.0 {
            tracing::warn!(left, "Division by zero rejected");
            return Err(EngineError::DivisionByZero);
        }
        let result_text = format_number(result);
        let evaluation = Evaluation {
            expression: format!("{} {} {}", format_number(left), op.symbol(), self.display),
            result: result_text.clone(),
        };
        self.pending = None;
        self.display = result_text;
        self.awaiting_fresh_entry = true;
        Ok(Some(evaluation))
    }

    /// Applies a scientific function to the display value immediately. Domain
    /// errors leave display and pending state untouched.
    pub fn apply_unary(&mut self, function: UnaryFn) -> Result<Evaluation, EngineError> {
        let argument = self.display_value();
        let result = function.apply(argument)?;
        let result_text = format_number(result);
        let evaluation = Evaluation {
            expression: format!("{}({})", function.label(), self.display),
            result: result_text.clone(),
        };
        self.display = result_text;
        self.awaiting_fresh_entry = true;
        Ok(evaluation)
    }

    pub fn clear(&mut self) {
        self.display = ZERO_DISPLAY.to_string();
        self.pending = None;
        self.awaiting_fresh_entry = false;
    }

    pub fn backspace(&mut self) {
        self.display.pop();
        if self.display.is_empty() {
            self.display = ZERO_DISPLAY.to_string();
        }
    }

    /// Replay a history result as the start of a new chain. Pending operator
    /// state is not restored.
    pub fn load_value(&mut self, text: &str) {
        self.display = text.to_string();
        self.pending = None;
        self.awaiting_fresh_entry = true;
    }
}

impl Default for Accumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_number(acc: &mut Accumulator, text: &str) {
        for ch in text.chars() {
            if ch == '.' {
                acc.enter_point();
            } else {
                acc.enter_digit(ch);
            }
        }
    }

    #[test]
    fn test_simple_chain() {
        let mut acc = Accumulator::new();
        type_number(&mut acc, "12");
        acc.push_operator(BinaryOp::Add);
        type_number(&mut acc, "3");
        let eval = acc.equals().unwrap().unwrap();
        assert_eq!(acc.display(), "15");
        assert_eq!(eval.expression, "12 + 3");
        assert_eq!(eval.result, "15");
    }

    #[test]
    fn test_left_to_right_no_precedence() {
        // 2 + 3 × 4 resolves as (2 + 3) × 4 = 20
        let mut acc = Accumulator::new();
        type_number(&mut acc, "2");
        acc.push_operator(BinaryOp::Add);
        type_number(&mut acc, "3");
        acc.push_operator(BinaryOp::Multiply);
        assert_eq!(acc.display(), "5");
        type_number(&mut acc, "4");
        acc.equals().unwrap();
        assert_eq!(acc.display(), "20");
    }

    #[test]
    fn test_repeated_equals_is_noop() {
        let mut acc = Accumulator::new();
        type_number(&mut acc, "8");
        acc.push_operator(BinaryOp::Subtract);
        type_number(&mut acc, "3");
        assert!(acc.equals().unwrap().is_some());
        assert_eq!(acc.display(), "5");
        assert!(acc.equals().unwrap().is_none());
        assert_eq!(acc.display(), "5");
    }

    #[test]
    fn test_division_by_zero_leaves_state_untouched() {
        let mut acc = Accumulator::new();
        type_number(&mut acc, "9");
        acc.push_operator(BinaryOp::Divide);
        type_number(&mut acc, "0");
        assert_eq!(acc.equals(), Err(EngineError::DivisionByZero));
        assert_eq!(acc.display(), "0");
        assert_eq!(acc.pending_preview().as_deref(), Some("9 ÷"));
        // The chain is still live: replace the right operand and resolve.
        type_number(&mut acc, "3");
        assert_eq!(acc.equals().unwrap().unwrap().result, "3");
    }

    #[test]
    fn test_decimal_point_guard() {
        let mut acc = Accumulator::new();
        type_number(&mut acc, "1.5");
        acc.enter_point();
        type_number(&mut acc, "5");
        assert_eq!(acc.display(), "1.55");
    }

    #[test]
    fn test_fresh_entry_after_operator() {
        let mut acc = Accumulator::new();
        type_number(&mut acc, "7");
        acc.push_operator(BinaryOp::Multiply);
        assert_eq!(acc.display(), "7");
        type_number(&mut acc, "6");
        assert_eq!(acc.display(), "6");
        acc.equals().unwrap();
        assert_eq!(acc.display(), "42");
    }

    #[test]
    fn test_point_after_operator_starts_zero_point() {
        let mut acc = Accumulator::new();
        type_number(&mut acc, "1");
        acc.push_operator(BinaryOp::Add);
        acc.enter_point();
        assert_eq!(acc.display(), "0.");
        type_number(&mut acc, "5");
        acc.equals().unwrap();
        assert_eq!(acc.display(), "1.5");
    }

    #[test]
    fn test_backspace() {
        let mut acc = Accumulator::new();
        type_number(&mut acc, "123");
        acc.backspace();
        assert_eq!(acc.display(), "12");
        acc.backspace();
        acc.backspace();
        assert_eq!(acc.display(), "0");
        acc.backspace();
        assert_eq!(acc.display(), "0");
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut acc = Accumulator::new();
        type_number(&mut acc, "42");
        acc.push_operator(BinaryOp::Add);
        acc.clear();
        assert_eq!(acc.display(), "0");
        assert!(acc.pending_preview().is_none());
    }

    #[test]
    fn test_power_chain() {
        let mut acc = Accumulator::new();
        type_number(&mut acc, "2");
        acc.push_operator(BinaryOp::Power);
        type_number(&mut acc, "10");
        acc.equals().unwrap();
        assert_eq!(acc.display(), "1024");
    }

    #[test]
    fn test_unary_success_records_expression() {
        let mut acc = Accumulator::new();
        type_number(&mut acc, "9");
        let eval = acc.apply_unary(UnaryFn::Sqrt).unwrap();
        assert_eq!(eval.expression, "sqrt(9)");
        assert_eq!(eval.result, "3");
        assert_eq!(acc.display(), "3");
    }

    #[test]
    fn test_unary_domain_error_leaves_display() {
        let mut acc = Accumulator::new();
        type_number(&mut acc, "4");
        acc.push_operator(BinaryOp::Subtract);
        type_number(&mut acc, "8");
        acc.equals().unwrap();
        assert_eq!(acc.display(), "-4");
        assert!(acc.apply_unary(UnaryFn::Sqrt).is_err());
        assert_eq!(acc.display(), "-4");
    }

    #[test]
    fn test_log_of_nonpositive_rejected() {
        let mut acc = Accumulator::new();
        assert!(acc.apply_unary(UnaryFn::Log10).is_err());
        assert!(acc.apply_unary(UnaryFn::Ln).is_err());
        assert!(acc.apply_unary(UnaryFn::Reciprocal).is_err());
        assert_eq!(acc.display(), "0");
    }

    #[test]
    fn test_reciprocal_and_square() {
        let mut acc = Accumulator::new();
        type_number(&mut acc, "4");
        let eval = acc.apply_unary(UnaryFn::Reciprocal).unwrap();
        assert_eq!(eval.result, "0.25");
        let eval = acc.apply_unary(UnaryFn::Square).unwrap();
        assert_eq!(eval.expression, "x²(0.25)");
        assert_eq!(eval.result, "0.0625");
    }

    #[test]
    fn test_load_value_drops_pending() {
        let mut acc = Accumulator::new();
        type_number(&mut acc, "5");
        acc.push_operator(BinaryOp::Add);
        acc.load_value("99");
        assert_eq!(acc.display(), "99");
        assert!(acc.pending_preview().is_none());
        // next digit starts a new number
        acc.enter_digit('1');
        assert_eq!(acc.display(), "1");
    }
}
