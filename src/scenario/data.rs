//! Scenario parameters for a single buy vs rent projection

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

pub const DEFAULT_APARTMENT_PRICE: f64 = 6_000_000.0;
pub const DEFAULT_DOWN_PAYMENT_FRACTION: f64 = 0.15;
pub const DEFAULT_MORTGAGE_YEARS: u32 = 50;
pub const DEFAULT_ANNUAL_INTEREST_RATE: f64 = 0.03;
pub const DEFAULT_MONTHLY_FEE: f64 = 5_000.0;
pub const DEFAULT_ANNUAL_AMORTIZATION_RATE: f64 = 0.02;
pub const DEFAULT_ANNUAL_PROPERTY_APPRECIATION: f64 = 0.02;
pub const DEFAULT_MONTHLY_RENT: f64 = 18_000.0;
pub const DEFAULT_ANNUAL_INVESTMENT_RETURN: f64 = 0.05;

/// Longest horizon accepted, keeps every run bounded
pub const MAX_MORTGAGE_YEARS: u32 = 500;

/// Inputs for one projection run. All rates are fractions (0.03 = 3%).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioParameters {
    /// Purchase price of the apartment
    pub apartment_price: f64,

    /// Share of the price paid up front, in [0, 1)
    pub down_payment_fraction: f64,

    /// Projection horizon in years
    pub mortgage_years: u32,

    pub annual_interest_rate: f64,

    /// Monthly housing association fee (avgift)
    pub monthly_fee: f64,

    /// Annual principal repayment (amortering) as a share of the original loan
    pub annual_amortization_rate: f64,

    /// May be negative for a declining market
    pub annual_property_appreciation: f64,

    pub monthly_rent: f64,

    pub annual_investment_return: f64,
}

impl Default for ScenarioParameters {
    fn default() -> Self {
        Self {
            apartment_price: DEFAULT_APARTMENT_PRICE,
            down_payment_fraction: DEFAULT_DOWN_PAYMENT_FRACTION,
            mortgage_years: DEFAULT_MORTGAGE_YEARS,
            annual_interest_rate: DEFAULT_ANNUAL_INTEREST_RATE,
            monthly_fee: DEFAULT_MONTHLY_FEE,
            annual_amortization_rate: DEFAULT_ANNUAL_AMORTIZATION_RATE,
            annual_property_appreciation: DEFAULT_ANNUAL_PROPERTY_APPRECIATION,
            monthly_rent: DEFAULT_MONTHLY_RENT,
            annual_investment_return: DEFAULT_ANNUAL_INVESTMENT_RETURN,
        }
    }
}

impl ScenarioParameters {
    /// Check every field against its domain.
    ///
    /// Reports the first offending field. Negative interest and investment
    /// returns are accepted as stress scenarios as long as they stay above -100%.
    pub fn validate(&self) -> Result<()> {
        let rates = [
            ("apartment_price", self.apartment_price),
            ("down_payment_fraction", self.down_payment_fraction),
            ("annual_interest_rate", self.annual_interest_rate),
            ("monthly_fee", self.monthly_fee),
            ("annual_amortization_rate", self.annual_amortization_rate),
            ("annual_property_appreciation", self.annual_property_appreciation),
            ("monthly_rent", self.monthly_rent),
            ("annual_investment_return", self.annual_investment_return),
        ];
        for (field, value) in rates {
            if !value.is_finite() {
                return Err(ProjectionError::invalid(
                    field,
                    format!("must be a finite number, got {}", value),
                ));
            }
        }

        if self.apartment_price <= 0.0 {
            return Err(ProjectionError::invalid(
                "apartment_price",
                format!("must be positive, got {}", self.apartment_price),
            ));
        }
        if !(0.0..1.0).contains(&self.down_payment_fraction) {
            return Err(ProjectionError::invalid(
                "down_payment_fraction",
                format!("must be in [0, 1), got {}", self.down_payment_fraction),
            ));
        }
        if self.mortgage_years == 0 {
            return Err(ProjectionError::invalid(
                "mortgage_years",
                "must be at least one year",
            ));
        }
        if self.mortgage_years > MAX_MORTGAGE_YEARS {
            return Err(ProjectionError::invalid(
                "mortgage_years",
                format!(
                    "must not exceed {} years, got {}",
                    MAX_MORTGAGE_YEARS, self.mortgage_years
                ),
            ));
        }
        if self.monthly_fee < 0.0 {
            return Err(ProjectionError::invalid(
                "monthly_fee",
                format!("cannot be negative, got {}", self.monthly_fee),
            ));
        }
        if self.annual_amortization_rate < 0.0 {
            return Err(ProjectionError::invalid(
                "annual_amortization_rate",
                format!(
                    "cannot be negative (balance would grow), got {}",
                    self.annual_amortization_rate
                ),
            ));
        }
        if self.annual_interest_rate < -1.0 {
            return Err(ProjectionError::invalid(
                "annual_interest_rate",
                format!("cannot be below -100%, got {}", self.annual_interest_rate),
            ));
        }
        // amortization + interest on the loan bounds both the buyer's yearly
        // cost and the renter's monthly savings from below
        if self.annual_interest_rate + self.annual_amortization_rate < 0.0 {
            return Err(ProjectionError::invalid(
                "annual_interest_rate",
                format!(
                    "cannot be below the negative amortization rate {} \
                     (costs and renter savings would turn negative), got {}",
                    -self.annual_amortization_rate, self.annual_interest_rate
                ),
            ));
        }
        if self.annual_property_appreciation < -1.0 {
            return Err(ProjectionError::invalid(
                "annual_property_appreciation",
                format!(
                    "cannot be below -100%, got {}",
                    self.annual_property_appreciation
                ),
            ));
        }
        if self.monthly_rent <= 0.0 {
            return Err(ProjectionError::invalid(
                "monthly_rent",
                format!("must be positive, got {}", self.monthly_rent),
            ));
        }
        if self.annual_investment_return < -1.0 {
            return Err(ProjectionError::invalid(
                "annual_investment_return",
                format!(
                    "cannot be below -100%, got {}",
                    self.annual_investment_return
                ),
            ));
        }

        Ok(())
    }
}

/// A scenario with a display name, as read from a batch file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedScenario {
    pub name: String,
    pub parameters: ScenarioParameters,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(params: ScenarioParameters) -> Option<&'static str> {
        params.validate().err().and_then(|e| e.field())
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(ScenarioParameters::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_price() {
        let params = ScenarioParameters {
            apartment_price: 0.0,
            ..Default::default()
        };
        assert_eq!(field_of(params), Some("apartment_price"));
    }

    #[test]
    fn test_down_payment_bounds() {
        let full = ScenarioParameters {
            down_payment_fraction: 1.0,
            ..Default::default()
        };
        assert_eq!(field_of(full), Some("down_payment_fraction"));

        let negative = ScenarioParameters {
            down_payment_fraction: -0.1,
            ..Default::default()
        };
        assert_eq!(field_of(negative), Some("down_payment_fraction"));

        let zero = ScenarioParameters {
            down_payment_fraction: 0.0,
            ..Default::default()
        };
        assert!(zero.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_years_and_rent() {
        let years = ScenarioParameters {
            mortgage_years: 0,
            ..Default::default()
        };
        assert_eq!(field_of(years), Some("mortgage_years"));

        let rent = ScenarioParameters {
            monthly_rent: -100.0,
            ..Default::default()
        };
        assert_eq!(field_of(rent), Some("monthly_rent"));
    }

    #[test]
    fn test_rejects_non_finite() {
        let params = ScenarioParameters {
            annual_interest_rate: f64::NAN,
            ..Default::default()
        };
        assert_eq!(field_of(params), Some("annual_interest_rate"));
    }

    #[test]
    fn test_stress_rates_are_accepted() {
        let params = ScenarioParameters {
            annual_interest_rate: -0.005,
            annual_property_appreciation: -0.05,
            annual_investment_return: -0.3,
            ..Default::default()
        };
        assert!(params.validate().is_ok());

        let collapse = ScenarioParameters {
            annual_investment_return: -1.5,
            ..Default::default()
        };
        assert_eq!(field_of(collapse), Some("annual_investment_return"));
    }

    #[test]
    fn test_interest_below_minus_one_is_rejected() {
        let params = ScenarioParameters {
            annual_interest_rate: -1.5,
            ..Default::default()
        };
        assert_eq!(field_of(params), Some("annual_interest_rate"));
    }

    #[test]
    fn test_interest_outweighing_amortization_is_rejected() {
        // -5% interest against 2% amortization would give a negative
        // buying cost and negative renter savings
        let params = ScenarioParameters {
            annual_interest_rate: -0.05,
            mortgage_years: 10,
            ..Default::default()
        };
        assert_eq!(field_of(params), Some("annual_interest_rate"));

        let zero_amortization = ScenarioParameters {
            annual_interest_rate: -0.001,
            annual_amortization_rate: 0.0,
            ..Default::default()
        };
        assert_eq!(field_of(zero_amortization), Some("annual_interest_rate"));

        // Savings of exactly zero are still allowed
        let break_even = ScenarioParameters {
            annual_interest_rate: -0.02,
            annual_amortization_rate: 0.02,
            ..Default::default()
        };
        assert!(break_even.validate().is_ok());
    }

    #[test]
    fn test_rejects_negative_amortization() {
        let params = ScenarioParameters {
            annual_amortization_rate: -0.01,
            ..Default::default()
        };
        assert_eq!(field_of(params), Some("annual_amortization_rate"));
    }

    #[test]
    fn test_missing_json_fields_use_defaults() {
        let params: ScenarioParameters =
            serde_json::from_str(r#"{"apartment_price": 3000000, "mortgage_years": 25}"#).unwrap();
        assert_eq!(params.apartment_price, 3_000_000.0);
        assert_eq!(params.mortgage_years, 25);
        assert_eq!(params.monthly_rent, DEFAULT_MONTHLY_RENT);
        assert_eq!(params.down_payment_fraction, DEFAULT_DOWN_PAYMENT_FRACTION);
    }
}
