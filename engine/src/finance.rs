// Finance formulas: compound interest, amortized payments (loan, mortgage,
// EMI all share one formula), ROI, and the tip split.

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundFrequency {
    Annual,
    SemiAnnual,
    Quarterly,
    Monthly,
    Daily,
}

impl CompoundFrequency {
    pub const ALL: [CompoundFrequency; 5] = [
        CompoundFrequency::Annual,
        CompoundFrequency::SemiAnnual,
        CompoundFrequency::Quarterly,
        CompoundFrequency::Monthly,
        CompoundFrequency::Daily,
    ];

    pub fn periods_per_year(&self) -> f64 {
        match self {
            CompoundFrequency::Annual => 1.0,
            CompoundFrequency::SemiAnnual => 2.0,
            CompoundFrequency::Quarterly => 4.0,
            CompoundFrequency::Monthly => 12.0,
            CompoundFrequency::Daily => 365.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompoundFrequency::Annual => "Annual",
            CompoundFrequency::SemiAnnual => "Semi-Annual",
            CompoundFrequency::Quarterly => "Quarterly",
            CompoundFrequency::Monthly => "Monthly",
            CompoundFrequency::Daily => "Daily",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentSummary {
    pub future_value: f64,
    pub interest_earned: f64,
}

/// Compound interest: A = P(1 + r/n)^(nt).
pub fn compound_interest(
    principal: f64,
    annual_rate_pct: f64,
    years: f64,
    frequency: CompoundFrequency,
) -> InvestmentSummary {
    let r = annual_rate_pct / 100.0;
    let n = frequency.periods_per_year();
    let future_value = principal * (1.0 + r / n).powf(n * years);
    InvestmentSummary {
        future_value,
        interest_earned: future_value - principal,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentSummary {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

impl PaymentSummary {
    const ZERO: PaymentSummary = PaymentSummary {
        monthly_payment: 0.0,
        total_payment: 0.0,
        total_interest: 0.0,
    };
}

/// Amortized monthly payment: M = P·r·(1+r)^n / ((1+r)^n − 1), with r the
/// monthly rate and n the number of monthly payments. Non-positive inputs
/// produce a zeroed summary rather than an error; the panels recompute live
/// while fields are being edited.
pub fn amortized_payment(principal: f64, annual_rate_pct: f64, months: f64) -> PaymentSummary {
    if principal <= 0.0 || annual_rate_pct <= 0.0 || months <= 0.0 {
        return PaymentSummary::ZERO;
    }
    let r = annual_rate_pct / 100.0 / 12.0;
    let growth = (1.0 + r).powf(months);
    let monthly_payment = principal * r * growth / (growth - 1.0);
    let total_payment = monthly_payment * months;
    PaymentSummary {
        monthly_payment,
        total_payment,
        total_interest: total_payment - principal,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortgageSummary {
    pub loan_amount: f64,
    pub payment: PaymentSummary,
}

pub fn mortgage(
    home_price: f64,
    down_payment: f64,
    years: f64,
    annual_rate_pct: f64,
) -> MortgageSummary {
    let loan_amount = home_price - down_payment;
    if loan_amount <= 0.0 {
        return MortgageSummary { loan_amount, payment: PaymentSummary::ZERO };
    }
    MortgageSummary {
        loan_amount,
        payment: amortized_payment(loan_amount, annual_rate_pct, years * 12.0),
    }
}

/// Return on investment as a percentage of the initial cost.
pub fn roi(initial_cost: f64, final_value: f64) -> Result<f64, EngineError> {
    if initial_cost == 0.0 {
        return Err(EngineError::invalid_input("initial cost", "0"));
    }
    Ok((final_value - initial_cost) / initial_cost * 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipSummary {
    pub tip: f64,
    pub total: f64,
    pub per_person: f64,
}

/// Splits the bill; zero or negative bills zero everything, and a people
/// count below one is treated as one.
pub fn tip(bill: f64, tip_pct: f64, people: i64) -> TipSummary {
    if bill <= 0.0 {
        return TipSummary { tip: 0.0, total: 0.0, per_person: 0.0 };
    }
    let people = people.max(1) as f64;
    let tip = bill * tip_pct / 100.0;
    let total = bill + tip;
    TipSummary { tip, total, per_person: total / people }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-2
    }

    #[test]
    fn test_compound_interest_annual() {
        // 1000 at 5% for 10 years, annually: 1000 * 1.05^10 = 1628.89
        let summary = compound_interest(1000.0, 5.0, 10.0, CompoundFrequency::Annual);
        assert!(close(summary.future_value, 1628.89));
        assert!(close(summary.interest_earned, 628.89));
    }

    #[test]
    fn test_compound_interest_monthly_beats_annual() {
        let annual = compound_interest(1000.0, 5.0, 10.0, CompoundFrequency::Annual);
        let monthly = compound_interest(1000.0, 5.0, 10.0, CompoundFrequency::Monthly);
        assert!(monthly.future_value > annual.future_value);
    }

    #[test]
    fn test_amortized_payment_known_value() {
        // 10000 at 6% over 36 months -> 304.22/month
        let summary = amortized_payment(10000.0, 6.0, 36.0);
        assert!(close(summary.monthly_payment, 304.22));
        assert!(close(summary.total_payment, summary.monthly_payment * 36.0));
        assert!(close(summary.total_interest, summary.total_payment - 10000.0));
    }

    #[test]
    fn test_amortized_payment_guards() {
        assert_eq!(amortized_payment(0.0, 6.0, 36.0), PaymentSummary::ZERO);
        assert_eq!(amortized_payment(1000.0, 0.0, 36.0), PaymentSummary::ZERO);
        assert_eq!(amortized_payment(1000.0, 6.0, 0.0), PaymentSummary::ZERO);
    }

    #[test]
    fn test_mortgage() {
        // 300000 home, 60000 down, 30 years at 4.5% -> 1216.04/month
        let summary = mortgage(300000.0, 60000.0, 30.0, 4.5);
        assert_eq!(summary.loan_amount, 240000.0);
        assert!(close(summary.payment.monthly_payment, 1216.04));
    }

    #[test]
    fn test_mortgage_fully_paid_down() {
        let summary = mortgage(100000.0, 100000.0, 30.0, 4.5);
        assert_eq!(summary.payment, PaymentSummary::ZERO);
    }

    #[test]
    fn test_roi() {
        assert!(close(roi(5000.0, 7500.0).unwrap(), 50.0));
        assert!(close(roi(100.0, 80.0).unwrap(), -20.0));
        assert!(roi(0.0, 100.0).is_err());
    }

    #[test]
    fn test_tip_split() {
        let summary = tip(50.0, 15.0, 2);
        assert!(close(summary.tip, 7.5));
        assert!(close(summary.total, 57.5));
        assert!(close(summary.per_person, 28.75));
    }

    #[test]
    fn test_tip_guards() {
        assert_eq!(tip(0.0, 15.0, 2).total, 0.0);
        let summary = tip(50.0, 15.0, 0);
        assert!(close(summary.per_person, summary.total));
    }
}
