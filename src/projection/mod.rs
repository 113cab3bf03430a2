//! Projection engine for yearly buy vs rent projections

mod constants;
mod state;
mod engine;
mod series;
mod summary;
mod payment;
mod report;

pub use constants::{derive_constants, DerivedConstants, MONTHS_PER_YEAR};
pub use state::{BuyingState, RentingState};
pub use engine::{project, project_buying, project_renting, ProjectionEngine};
pub use series::{BuyingSeries, BuyingYear, RentingSeries, RentingYear};
pub use summary::{buying_net_worth, summarize, ComparisonSummary, Tenure};
pub use payment::monthly_mortgage_payment;
pub use report::{write_yearly_csv, ProjectionReport, YearlyRow};
