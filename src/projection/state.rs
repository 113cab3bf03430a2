//! Running state carried from one projection year to the next

use super::constants::DerivedConstants;
use super::series::{BuyingYear, RentingYear};
use crate::scenario::ScenarioParameters;

/// Buyer's position at the close of a year
#[derive(Debug, Clone)]
pub struct BuyingState {
    /// Year index (0 = purchase date)
    pub year: u32,

    pub property_value: f64,

    /// Closing balance, the base for next year's interest
    pub mortgage_balance: f64,

    pub equity: f64,
}

impl BuyingState {
    /// Position on the purchase date, before any payment
    pub fn initial(params: &ScenarioParameters, constants: &DerivedConstants) -> Self {
        Self {
            year: 0,
            property_value: params.apartment_price,
            mortgage_balance: constants.mortgage_amount,
            equity: constants.down_payment,
        }
    }

    pub fn snapshot(&self, total_cost: f64) -> BuyingYear {
        BuyingYear {
            year: self.year,
            total_cost,
            equity_built: self.equity,
            property_value: self.property_value,
            mortgage_balance: self.mortgage_balance,
        }
    }
}

/// Renter's position at the close of a year
#[derive(Debug, Clone)]
pub struct RentingState {
    pub year: u32,

    /// Invested capital, seeded with the down payment
    pub investment_value: f64,
}

impl RentingState {
    pub fn initial(constants: &DerivedConstants) -> Self {
        Self {
            year: 0,
            investment_value: constants.down_payment,
        }
    }

    pub fn snapshot(&self, total_cost: f64) -> RentingYear {
        RentingYear {
            year: self.year,
            total_cost,
            investment_value: self.investment_value,
        }
    }
}
