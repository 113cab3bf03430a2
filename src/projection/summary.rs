//! Scalar comparison between the buying and renting series

use serde::{Deserialize, Serialize};
use std::fmt;

use super::series::{BuyingSeries, RentingSeries};

/// Which way of housing a verdict points to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tenure {
    Buying,
    Renting,
}

impl fmt::Display for Tenure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tenure::Buying => write!(f, "Buying"),
            Tenure::Renting => write!(f, "Renting"),
        }
    }
}

/// Totals and end-of-horizon wealth for both scenarios
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub total_buying_cost: f64,
    pub total_renting_cost: f64,

    /// Positive when buying cost more
    pub cost_difference: f64,

    pub final_buying_net_worth: f64,
    pub final_renting_net_worth: f64,

    /// Positive when buying built more wealth
    pub net_worth_difference: f64,
}

impl ComparisonSummary {
    pub fn cheaper_option(&self) -> Tenure {
        if self.cost_difference > 0.0 {
            Tenure::Renting
        } else {
            Tenure::Buying
        }
    }

    pub fn wealthier_option(&self) -> Tenure {
        if self.net_worth_difference < 0.0 {
            Tenure::Renting
        } else {
            Tenure::Buying
        }
    }
}

/// Buyer's final net worth: `equity + property_value - mortgage_balance`.
///
/// Equity and `property_value - mortgage_balance` both measure the ownership
/// stake, so the paid-in part is counted twice. `BuyingYear::market_equity`
/// is the single-count measure.
pub fn buying_net_worth(equity: f64, property_value: f64, mortgage_balance: f64) -> f64 {
    equity + property_value - mortgage_balance
}

/// Summarize both series. Empty series contribute zero.
pub fn summarize(buying: &BuyingSeries, renting: &RentingSeries) -> ComparisonSummary {
    let total_buying_cost = buying.total_cost();
    let total_renting_cost = renting.total_cost();

    let final_buying_net_worth = buying
        .last()
        .map(|r| buying_net_worth(r.equity_built, r.property_value, r.mortgage_balance))
        .unwrap_or(0.0);
    let final_renting_net_worth = renting.last().map(|r| r.investment_value).unwrap_or(0.0);

    ComparisonSummary {
        total_buying_cost,
        total_renting_cost,
        cost_difference: total_buying_cost - total_renting_cost,
        final_buying_net_worth,
        final_renting_net_worth,
        net_worth_difference: final_buying_net_worth - final_renting_net_worth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::project;
    use crate::scenario::ScenarioParameters;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_year_summary() {
        let params = ScenarioParameters {
            mortgage_years: 1,
            ..Default::default()
        };
        let summary = project(&params).unwrap().summary;

        assert_relative_eq!(summary.total_buying_cost, 315_000.0, max_relative = 1e-12);
        assert_relative_eq!(summary.total_renting_cost, 216_000.0);
        // 1,002,000 equity + 6,120,000 property - 4,998,000 balance
        assert_relative_eq!(summary.final_buying_net_worth, 2_124_000.0, max_relative = 1e-12);
        assert_relative_eq!(summary.final_renting_net_worth, 1_212_750.0, max_relative = 1e-12);
        assert_eq!(summary.cheaper_option(), Tenure::Renting);
        assert_eq!(summary.wealthier_option(), Tenure::Buying);
    }

    #[test]
    fn test_default_horizon_summary() {
        let summary = project(&ScenarioParameters::default()).unwrap().summary;

        assert_relative_eq!(summary.total_buying_cost, 12_001_500.0, max_relative = 1e-9);
        assert_relative_eq!(summary.total_renting_cost, 10_800_000.0, max_relative = 1e-12);
        assert_relative_eq!(summary.cost_difference, 1_201_500.0, max_relative = 1e-6);
        assert_relative_eq!(
            summary.final_buying_net_worth,
            22_149_528.174441647,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            summary.final_renting_net_worth,
            66_373_585.65988936,
            max_relative = 1e-9
        );
        assert_eq!(summary.wealthier_option(), Tenure::Renting);
    }

    #[test]
    fn test_differences_are_exact() {
        for years in [3, 17, 50] {
            let params = ScenarioParameters {
                mortgage_years: years,
                annual_property_appreciation: -0.01,
                ..Default::default()
            };
            let s = project(&params).unwrap().summary;
            assert_eq!(s.cost_difference, s.total_buying_cost - s.total_renting_cost);
            assert_eq!(
                s.net_worth_difference,
                s.final_buying_net_worth - s.final_renting_net_worth
            );
        }
    }

    #[test]
    fn test_net_worth_formula_counts_equity_twice() {
        assert_eq!(buying_net_worth(1_000.0, 5_000.0, 4_000.0), 2_000.0);
    }

    #[test]
    fn test_empty_series() {
        let s = summarize(&BuyingSeries::default(), &RentingSeries::default());
        assert_eq!(s.total_buying_cost, 0.0);
        assert_eq!(s.net_worth_difference, 0.0);
        assert_eq!(s.cheaper_option(), Tenure::Buying);
    }

    #[test]
    fn test_tenure_display() {
        assert_eq!(Tenure::Renting.to_string(), "Renting");
    }
}
