use serde::{Deserialize, Serialize};

use std::fmt::Display;
use std::str::FromStr;

/// The single currency an inventory prices its parts in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Pkr,
    Usd,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Pkr => "PKR",
            Currency::Usd => "USD",
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PKR" => Ok(Currency::Pkr),
            "USD" => Ok(Currency::Usd),
            other => Err(format!("unsupported currency: {other}")),
        }
    }
}

/// An amount tagged with its currency.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Money {
    pub amount: f64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    pub fn zero(currency: Currency) -> Self {
        Self::new(0.0, currency)
    }
}

impl Display for Money {
    /// `PKR 1,234,567.89`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fixed = format!("{:.2}", self.amount.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if self.amount < 0.0 { "-" } else { "" };
        write!(f, "{} {}{}.{}", self.currency, sign, grouped, cents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::new(1234567.891, Currency::Pkr).to_string(), "PKR 1,234,567.89");
        assert_eq!(Money::new(350.0, Currency::Usd).to_string(), "USD 350.00");
        assert_eq!(Money::new(1000.0, Currency::Usd).to_string(), "USD 1,000.00");
        assert_eq!(Money::zero(Currency::Pkr).to_string(), "PKR 0.00");
    }

    #[test]
    fn test_currency_parse() {
        assert_eq!("usd".parse::<Currency>(), Ok(Currency::Usd));
        assert_eq!(" PKR".parse::<Currency>(), Ok(Currency::Pkr));
        assert!("EUR".parse::<Currency>().is_err());
    }
}
