//! Scenario runner for batch and sensitivity projections
//!
//! Every run builds its own engine from the given parameters, so runs are
//! independent and can be fanned out across threads.

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::projection::{project, ProjectionReport};
use crate::scenario::{NamedScenario, ScenarioParameters};

/// Rate fields that can be swept in a sensitivity run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SensitivityField {
    InterestRate,
    AmortizationRate,
    PropertyAppreciation,
    InvestmentReturn,
    DownPaymentFraction,
}

impl SensitivityField {
    /// Copy of `base` with this field set to `value`
    pub fn apply(&self, base: &ScenarioParameters, value: f64) -> ScenarioParameters {
        let mut params = *base;
        match self {
            SensitivityField::InterestRate => params.annual_interest_rate = value,
            SensitivityField::AmortizationRate => params.annual_amortization_rate = value,
            SensitivityField::PropertyAppreciation => params.annual_property_appreciation = value,
            SensitivityField::InvestmentReturn => params.annual_investment_return = value,
            SensitivityField::DownPaymentFraction => params.down_payment_fraction = value,
        }
        params
    }
}

/// Runner for one or many projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
///
/// // Sweep the mortgage rate
/// let results = runner.run_sensitivity(&base, SensitivityField::InterestRate, &[0.02, 0.04]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner;

impl ScenarioRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run a single projection
    pub fn run(&self, params: &ScenarioParameters) -> Result<ProjectionReport> {
        project(params)
    }

    /// Run many projections in parallel; results keep the input order
    pub fn run_batch(&self, scenarios: &[ScenarioParameters]) -> Vec<Result<ProjectionReport>> {
        debug!("running batch of {} scenarios", scenarios.len());
        scenarios.par_iter().map(project).collect()
    }

    /// Run named scenarios in parallel, pairing each result with its name
    pub fn run_named(
        &self,
        scenarios: &[NamedScenario],
    ) -> Vec<(String, Result<ProjectionReport>)> {
        scenarios
            .par_iter()
            .map(|s| (s.name.clone(), project(&s.parameters)))
            .collect()
    }

    /// Vary one rate field of `base` across `values`
    pub fn run_sensitivity(
        &self,
        base: &ScenarioParameters,
        field: SensitivityField,
        values: &[f64],
    ) -> Vec<Result<ProjectionReport>> {
        let scenarios: Vec<_> = values.iter().map(|&v| field.apply(base, v)).collect();
        self.run_batch(&scenarios)
    }
}
