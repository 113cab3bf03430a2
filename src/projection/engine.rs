//! Core projection engine for yearly buy vs rent projections

use log::debug;

use super::constants::{derive_constants, DerivedConstants, MONTHS_PER_YEAR};
use super::report::ProjectionReport;
use super::series::{BuyingSeries, RentingSeries};
use super::state::{BuyingState, RentingState};
use super::summary::summarize;
use crate::error::Result;
use crate::scenario::ScenarioParameters;

/// Projection engine for a single validated scenario
///
/// Holds only the immutable inputs of one run, so projecting twice yields
/// identical output.
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    params: ScenarioParameters,
    constants: DerivedConstants,
}

impl ProjectionEngine {
    /// Validate the parameters and derive the run constants
    pub fn new(params: ScenarioParameters) -> Result<Self> {
        let constants = derive_constants(&params)?;
        Ok(Self { params, constants })
    }

    pub fn parameters(&self) -> &ScenarioParameters {
        &self.params
    }

    pub fn constants(&self) -> &DerivedConstants {
        &self.constants
    }

    pub fn project_buying(&self) -> BuyingSeries {
        project_buying(&self.params, &self.constants)
    }

    pub fn project_renting(&self) -> RentingSeries {
        project_renting(&self.params, &self.constants)
    }

    /// Run both scenarios and the comparison
    pub fn run(&self) -> ProjectionReport {
        let buying = self.project_buying();
        let renting = self.project_renting();
        let summary = summarize(&buying, &renting);
        debug!(
            "projected {} years: cost difference {:.0}, net worth difference {:.0}",
            self.params.mortgage_years, summary.cost_difference, summary.net_worth_difference
        );

        ProjectionReport {
            parameters: self.params,
            constants: self.constants,
            buying,
            renting,
            summary,
        }
    }
}

/// Validate, project and summarize in one call
pub fn project(params: &ScenarioParameters) -> Result<ProjectionReport> {
    Ok(ProjectionEngine::new(*params)?.run())
}

/// Yearly buying scenario: amortization, interest and avgift paid, equity
/// built and property value.
///
/// Interest for a year is charged at a flat rate on the previous year's
/// closing balance. Scheduled amortization keeps being charged as a cost
/// after the balance reaches zero.
pub fn project_buying(params: &ScenarioParameters, constants: &DerivedConstants) -> BuyingSeries {
    let mut series = BuyingSeries::with_capacity(params.mortgage_years);
    let mut state = BuyingState::initial(params, constants);
    series.push(state.snapshot(0.0));

    let monthly_interest_rate = params.annual_interest_rate / MONTHS_PER_YEAR;
    let yearly_amortization = constants.monthly_amortization * MONTHS_PER_YEAR;
    let yearly_fee = params.monthly_fee * MONTHS_PER_YEAR;

    for year in 1..=params.mortgage_years {
        state.year = year;

        let yearly_interest = (state.mortgage_balance * monthly_interest_rate) * MONTHS_PER_YEAR;
        let total_cost = yearly_amortization + yearly_interest + yearly_fee;

        state.mortgage_balance = (state.mortgage_balance - yearly_amortization).max(0.0);

        // Paid-to-date can exceed neither the loan nor the nominal schedule
        let paid_amortization = (constants.mortgage_amount - state.mortgage_balance)
            .min(constants.monthly_amortization * MONTHS_PER_YEAR * year as f64);
        state.equity = constants.down_payment + paid_amortization;

        state.property_value *= 1.0 + params.annual_property_appreciation;

        series.push(state.snapshot(total_cost));
    }

    series
}

/// Yearly renting scenario: rent paid, and the down payment plus the fixed
/// monthly savings invested.
///
/// The year's contributions are added as a lump sum before that year's
/// return is applied.
pub fn project_renting(params: &ScenarioParameters, constants: &DerivedConstants) -> RentingSeries {
    let mut series = RentingSeries::with_capacity(params.mortgage_years);
    let mut state = RentingState::initial(constants);
    series.push(state.snapshot(0.0));

    let yearly_rent = params.monthly_rent * MONTHS_PER_YEAR;
    let yearly_contribution = constants.monthly_savings * MONTHS_PER_YEAR;

    for year in 1..=params.mortgage_years {
        state.year = year;
        state.investment_value += yearly_contribution;
        state.investment_value *= 1.0 + params.annual_investment_return;

        series.push(state.snapshot(yearly_rent));
    }

    series
}
