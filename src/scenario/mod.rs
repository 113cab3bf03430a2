//! Scenario parameters and batch loading

mod data;
pub mod loader;

pub use data::{
    NamedScenario, ScenarioParameters, DEFAULT_ANNUAL_AMORTIZATION_RATE,
    DEFAULT_ANNUAL_INTEREST_RATE, DEFAULT_ANNUAL_INVESTMENT_RETURN,
    DEFAULT_ANNUAL_PROPERTY_APPRECIATION, DEFAULT_APARTMENT_PRICE, DEFAULT_DOWN_PAYMENT_FRACTION,
    DEFAULT_MONTHLY_FEE, DEFAULT_MONTHLY_RENT, DEFAULT_MORTGAGE_YEARS, MAX_MORTGAGE_YEARS,
};
pub use loader::{load_scenarios, load_scenarios_from_reader};
