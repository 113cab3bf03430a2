//! Housing Projection - Year-by-year buy vs rent comparison for a single household
//!
//! This library provides:
//! - Scenario parameters with validation and CSV batch loading
//! - Buying projection (amortization, interest, avgift, equity, property value)
//! - Renting projection (rent paid, invested savings)
//! - Comparison summary of total costs and final net worth
//! - Batch and sensitivity runs over many scenarios

pub mod error;
pub mod scenario;
pub mod projection;
pub mod runner;
pub mod format;

// Re-export commonly used types
pub use error::{ProjectionError, Result};
pub use scenario::{NamedScenario, ScenarioParameters};
pub use projection::{
    project, ComparisonSummary, DerivedConstants, ProjectionEngine, ProjectionReport, Tenure,
};
pub use runner::{ScenarioRunner, SensitivityField};
pub use format::{format_currency, format_percent};
