//! Load scenario batches from CSV
//!
//! Columns are named after the `ScenarioParameters` fields, plus an optional
//! `name` column. Missing columns or empty cells fall back to the defaults.

use super::{NamedScenario, ScenarioParameters};
use crate::error::Result;
use csv::{ReaderBuilder, Trim};
use std::path::Path;

/// Raw CSV row; every column is optional
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct CsvRow {
    name: Option<String>,
    apartment_price: Option<f64>,
    down_payment_fraction: Option<f64>,
    mortgage_years: Option<u32>,
    annual_interest_rate: Option<f64>,
    monthly_fee: Option<f64>,
    annual_amortization_rate: Option<f64>,
    annual_property_appreciation: Option<f64>,
    monthly_rent: Option<f64>,
    annual_investment_return: Option<f64>,
}

impl CsvRow {
    fn into_scenario(self, row_number: usize) -> NamedScenario {
        let defaults = ScenarioParameters::default();
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("scenario-{}", row_number));

        NamedScenario {
            name,
            parameters: ScenarioParameters {
                apartment_price: self.apartment_price.unwrap_or(defaults.apartment_price),
                down_payment_fraction: self
                    .down_payment_fraction
                    .unwrap_or(defaults.down_payment_fraction),
                mortgage_years: self.mortgage_years.unwrap_or(defaults.mortgage_years),
                annual_interest_rate: self
                    .annual_interest_rate
                    .unwrap_or(defaults.annual_interest_rate),
                monthly_fee: self.monthly_fee.unwrap_or(defaults.monthly_fee),
                annual_amortization_rate: self
                    .annual_amortization_rate
                    .unwrap_or(defaults.annual_amortization_rate),
                annual_property_appreciation: self
                    .annual_property_appreciation
                    .unwrap_or(defaults.annual_property_appreciation),
                monthly_rent: self.monthly_rent.unwrap_or(defaults.monthly_rent),
                annual_investment_return: self
                    .annual_investment_return
                    .unwrap_or(defaults.annual_investment_return),
            },
        }
    }
}

/// Load all scenarios from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<NamedScenario>> {
    let file = std::fs::File::open(path)?;
    load_scenarios_from_reader(file)
}

/// Load scenarios from any reader (e.g., string buffer, request body)
///
/// Values are not validated here; invalid scenarios surface when projected.
pub fn load_scenarios_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<NamedScenario>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let mut scenarios = Vec::new();

    for (i, result) in csv_reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        scenarios.push(row.into_scenario(i + 1));
    }

    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProjectionError;

    #[test]
    fn test_load_named_and_unnamed_rows() {
        let data = "\
name,apartment_price,mortgage_years,annual_interest_rate
base,6000000,50,0.03
,4000000,30,0.045
";
        let scenarios = load_scenarios_from_reader(data.as_bytes()).unwrap();
        assert_eq!(scenarios.len(), 2);

        assert_eq!(scenarios[0].name, "base");
        assert_eq!(scenarios[0].parameters.mortgage_years, 50);

        assert_eq!(scenarios[1].name, "scenario-2");
        assert_eq!(scenarios[1].parameters.apartment_price, 4_000_000.0);
        assert_eq!(scenarios[1].parameters.annual_interest_rate, 0.045);
        // Columns not present take the defaults
        assert_eq!(
            scenarios[1].parameters.monthly_rent,
            ScenarioParameters::default().monthly_rent
        );
    }

    #[test]
    fn test_unparseable_value_is_csv_error() {
        let data = "apartment_price,mortgage_years\nlots,10\n";
        let err = load_scenarios_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, ProjectionError::Csv(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_scenarios("does/not/exist.csv").unwrap_err();
        assert!(matches!(err, ProjectionError::Io(_)));
    }
}
