//! Yearly output series for the buying and renting scenarios

use serde::{Deserialize, Serialize};

/// One year of the buying scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuyingYear {
    pub year: u32,

    /// Amortization + interest + avgift paid during the year (0 for year 0)
    pub total_cost: f64,

    /// Down payment plus amortization paid to date
    pub equity_built: f64,

    pub property_value: f64,

    /// Closing loan balance, never negative
    pub mortgage_balance: f64,
}

impl BuyingYear {
    /// Property value net of the outstanding loan
    pub fn market_equity(&self) -> f64 {
        self.property_value - self.mortgage_balance
    }
}

/// One year of the renting scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentingYear {
    pub year: u32,

    /// Rent paid during the year (0 for year 0)
    pub total_cost: f64,

    /// Invested capital at year end; this is also the renter's total capital
    pub investment_value: f64,
}

/// Buying scenario, one row per year from 0 through the horizon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuyingSeries {
    pub years: Vec<BuyingYear>,
}

impl BuyingSeries {
    pub fn with_capacity(horizon_years: u32) -> Self {
        Self {
            years: Vec::with_capacity(horizon_years as usize + 1),
        }
    }

    pub fn push(&mut self, row: BuyingYear) {
        self.years.push(row);
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn last(&self) -> Option<&BuyingYear> {
        self.years.last()
    }

    pub fn total_cost(&self) -> f64 {
        self.years.iter().map(|r| r.total_cost).sum()
    }

    pub fn costs(&self) -> Vec<f64> {
        self.years.iter().map(|r| r.total_cost).collect()
    }

    pub fn mortgage_balances(&self) -> Vec<f64> {
        self.years.iter().map(|r| r.mortgage_balance).collect()
    }

    pub fn property_values(&self) -> Vec<f64> {
        self.years.iter().map(|r| r.property_value).collect()
    }

    /// Per-year market equity, the buying wealth curve
    pub fn market_equity(&self) -> Vec<f64> {
        self.years.iter().map(|r| r.market_equity()).collect()
    }

    /// First year the loan is fully repaid, if within the horizon
    pub fn payoff_year(&self) -> Option<u32> {
        self.years
            .iter()
            .find(|r| r.mortgage_balance <= 0.0)
            .map(|r| r.year)
    }
}

/// Renting scenario, one row per year from 0 through the horizon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RentingSeries {
    pub years: Vec<RentingYear>,
}

impl RentingSeries {
    pub fn with_capacity(horizon_years: u32) -> Self {
        Self {
            years: Vec::with_capacity(horizon_years as usize + 1),
        }
    }

    pub fn push(&mut self, row: RentingYear) {
        self.years.push(row);
    }

    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    pub fn last(&self) -> Option<&RentingYear> {
        self.years.last()
    }

    pub fn total_cost(&self) -> f64 {
        self.years.iter().map(|r| r.total_cost).sum()
    }

    pub fn costs(&self) -> Vec<f64> {
        self.years.iter().map(|r| r.total_cost).collect()
    }

    pub fn investment_values(&self) -> Vec<f64> {
        self.years.iter().map(|r| r.investment_value).collect()
    }
}
