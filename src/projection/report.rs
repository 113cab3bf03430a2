//! Complete projection result and its tabular export

use serde::{Deserialize, Serialize};
use std::io::Write;

use super::constants::DerivedConstants;
use super::series::{BuyingSeries, RentingSeries};
use super::summary::ComparisonSummary;
use crate::error::Result;
use crate::scenario::ScenarioParameters;

/// Everything one projection run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionReport {
    pub parameters: ScenarioParameters,
    pub constants: DerivedConstants,
    pub buying: BuyingSeries,
    pub renting: RentingSeries,
    pub summary: ComparisonSummary,
}

/// Both scenarios side by side for one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyRow {
    pub year: u32,
    pub buying_cost: f64,
    pub renting_cost: f64,
    pub equity_built: f64,
    pub property_value: f64,
    pub mortgage_balance: f64,
    pub buying_market_equity: f64,
    pub investment_value: f64,
}

impl ProjectionReport {
    /// Zip the two series into one row per year
    pub fn yearly_table(&self) -> Vec<YearlyRow> {
        self.buying
            .years
            .iter()
            .zip(&self.renting.years)
            .map(|(b, r)| YearlyRow {
                year: b.year,
                buying_cost: b.total_cost,
                renting_cost: r.total_cost,
                equity_built: b.equity_built,
                property_value: b.property_value,
                mortgage_balance: b.mortgage_balance,
                buying_market_equity: b.market_equity(),
                investment_value: r.investment_value,
            })
            .collect()
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write the yearly table as CSV with a header row
pub fn write_yearly_csv<W: Write>(report: &ProjectionReport, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in report.yearly_table() {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}
