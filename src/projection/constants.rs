//! Constants derived once from the scenario parameters

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scenario::ScenarioParameters;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Values computed once per run and never mutated afterwards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedConstants {
    pub down_payment: f64,

    /// Original loan amount
    pub mortgage_amount: f64,

    /// Constant monthly principal repayment (amortering)
    pub monthly_amortization: f64,

    /// Horizon in months (informational, the series is yearly)
    pub horizon_months: u32,

    /// Monthly amount the renter invests: amortization plus first-year
    /// interest on the full loan, held constant for the whole horizon
    pub monthly_savings: f64,

    pub loan_to_value: f64,
}

/// Validate the parameters and derive the per-run constants
pub fn derive_constants(params: &ScenarioParameters) -> Result<DerivedConstants> {
    params.validate()?;

    let down_payment = params.apartment_price * params.down_payment_fraction;
    let mortgage_amount = params.apartment_price - down_payment;
    let monthly_amortization =
        (mortgage_amount * params.annual_amortization_rate) / MONTHS_PER_YEAR;
    let monthly_savings =
        monthly_amortization + (mortgage_amount * params.annual_interest_rate / MONTHS_PER_YEAR);

    if params.annual_amortization_rate == 0.0 && mortgage_amount > 0.0 {
        warn!("amortization rate is zero; the loan of {:.0} never amortizes", mortgage_amount);
    }

    let constants = DerivedConstants {
        down_payment,
        mortgage_amount,
        monthly_amortization,
        horizon_months: params.mortgage_years * 12,
        monthly_savings,
        loan_to_value: mortgage_amount / params.apartment_price,
    };
    debug!("derived constants: {:?}", constants);

    Ok(constants)
}
