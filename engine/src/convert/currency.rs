// Currency conversion against a rate provider. The rates shipped here are
// hardcoded demo data; a live source would implement `RateProvider` and the
// conversion formula stays untouched.

use crate::error::EngineError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Currency {
    pub code: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

pub const CURRENCIES: &[Currency] = &[
    Currency { code: "USD", name: "US Dollar", symbol: "$" },
    Currency { code: "EUR", name: "Euro", symbol: "€" },
    Currency { code: "GBP", name: "British Pound", symbol: "£" },
    Currency { code: "JPY", name: "Japanese Yen", symbol: "¥" },
    Currency { code: "CAD", name: "Canadian Dollar", symbol: "C$" },
    Currency { code: "AUD", name: "Australian Dollar", symbol: "A$" },
    Currency { code: "CHF", name: "Swiss Franc", symbol: "CHF" },
    Currency { code: "CNY", name: "Chinese Yuan", symbol: "¥" },
    Currency { code: "INR", name: "Indian Rupee", symbol: "₹" },
    Currency { code: "MXN", name: "Mexican Peso", symbol: "$" },
    Currency { code: "SGD", name: "Singapore Dollar", symbol: "S$" },
    Currency { code: "NZD", name: "New Zealand Dollar", symbol: "NZ$" },
    Currency { code: "BRL", name: "Brazilian Real", symbol: "R$" },
    Currency { code: "KRW", name: "South Korean Won", symbol: "₩" },
    Currency { code: "RUB", name: "Russian Ruble", symbol: "₽" },
];

pub fn currency(code: &str) -> Result<&'static Currency, EngineError> {
    CURRENCIES
        .iter()
        .find(|c| c.code == code)
        .ok_or_else(|| EngineError::UnknownCurrency(code.to_string()))
}

/// Lookup interface between the conversion formula and the rate data.
pub trait RateProvider {
    fn rate(&self, from: &str, to: &str) -> Option<f64>;
}

const USD_RATES: &[(&str, f64)] = &[
    ("EUR", 0.91), ("GBP", 0.78), ("JPY", 151.12), ("CAD", 1.35), ("AUD", 1.51),
    ("CHF", 0.89), ("CNY", 7.23), ("INR", 83.45), ("MXN", 16.82), ("SGD", 1.34),
    ("NZD", 1.63), ("BRL", 5.05), ("KRW", 1347.26), ("RUB", 92.30),
];

const EUR_RATES: &[(&str, f64)] = &[
    ("USD", 1.10), ("GBP", 0.85), ("JPY", 166.07), ("CAD", 1.48), ("AUD", 1.66),
    ("CHF", 0.97), ("CNY", 7.94), ("INR", 91.70), ("MXN", 18.48), ("SGD", 1.47),
    ("NZD", 1.79), ("BRL", 5.55), ("KRW", 1480.99), ("RUB", 101.53),
];

const GBP_RATES: &[(&str, f64)] = &[
    ("USD", 1.29), ("EUR", 1.17), ("JPY", 194.57), ("CAD", 1.73), ("AUD", 1.94),
    ("CHF", 1.14), ("CNY", 9.30), ("INR", 107.41), ("MXN", 21.65), ("SGD", 1.73),
    ("NZD", 2.10), ("BRL", 6.50), ("KRW", 1735.52), ("RUB", 118.97),
];

/// Demo-only rate table: direct USD/EUR/GBP quotes, everything else derived
/// as a cross rate through USD.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockRates;

impl MockRates {
    fn direct(from: &str, to: &str) -> Option<f64> {
        let table = match from {
            "USD" => USD_RATES,
            "EUR" => EUR_RATES,
            "GBP" => GBP_RATES,
            _ => return None,
        };
        table.iter().find(|(code, _)| *code == to).map(|(_, r)| *r)
    }
}

impl RateProvider for MockRates {
    fn rate(&self, from: &str, to: &str) -> Option<f64> {
        if from == to {
            return Some(1.0);
        }
        if let Some(rate) = Self::direct(from, to) {
            return Some(rate);
        }
        if let Some(reverse) = Self::direct(to, from) {
            return Some(1.0 / reverse);
        }
        // Cross rate through USD: from -> USD -> to.
        let usd_to_from = Self::direct("USD", from)?;
        let usd_to_to = Self::direct("USD", to)?;
        Some(usd_to_to / usd_to_from)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub rate: f64,
    pub converted: f64,
}

pub fn convert(
    amount: f64,
    from: &str,
    to: &str,
    provider: &impl RateProvider,
) -> Result<Conversion, EngineError> {
    currency(from)?;
    currency(to)?;
    let rate = provider
        .rate(from, to)
        .ok_or_else(|| EngineError::UnknownCurrency(format!("{}/{}", from, to)))?;
    Ok(Conversion { amount, rate, converted: amount * rate })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_rate() {
        let conv = convert(100.0, "USD", "EUR", &MockRates).unwrap();
        assert_eq!(conv.rate, 0.91);
        assert!((conv.converted - 91.0).abs() < 1e-9);
    }

    #[test]
    fn test_same_currency_is_one() {
        let conv = convert(50.0, "JPY", "JPY", &MockRates).unwrap();
        assert_eq!(conv.rate, 1.0);
        assert_eq!(conv.converted, 50.0);
    }

    #[test]
    fn test_inverse_fallback() {
        // No JPY table, so JPY -> USD comes from 1 / USD->JPY.
        let conv = convert(1000.0, "JPY", "USD", &MockRates).unwrap();
        assert!((conv.rate - 1.0 / 151.12).abs() < 1e-12);
    }

    #[test]
    fn test_cross_rate_through_usd() {
        // CAD -> INR has no direct or inverse quote.
        let conv = convert(1.0, "CAD", "INR", &MockRates).unwrap();
        assert!((conv.rate - 83.45 / 1.35).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_currency_rejected() {
        assert!(matches!(
            convert(1.0, "USD", "XYZ", &MockRates),
            Err(EngineError::UnknownCurrency(_))
        ));
    }

    #[test]
    fn test_currency_lookup() {
        assert_eq!(currency("INR").unwrap().symbol, "₹");
        assert!(currency("ZZZ").is_err());
    }
}
