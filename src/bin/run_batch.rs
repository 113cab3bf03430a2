//! Run every scenario in a CSV file and write one summary row per scenario
//!
//! Scenarios are projected in parallel; rows keep the input order.

use anyhow::{Context, Result};
use clap::Parser;
use housing_projection::scenario::load_scenarios;
use housing_projection::ScenarioRunner;
use log::{info, warn};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Batch buy vs rent projections
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// CSV of scenarios (columns named after the scenario fields, optional `name`)
    input: PathBuf,

    /// Summary CSV path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
}

/// One output line per scenario
#[derive(Debug, Default, Serialize)]
struct SummaryRow {
    name: String,
    mortgage_years: Option<u32>,
    total_buying_cost: Option<f64>,
    total_renting_cost: Option<f64>,
    cost_difference: Option<f64>,
    final_buying_net_worth: Option<f64>,
    final_renting_net_worth: Option<f64>,
    net_worth_difference: Option<f64>,
    cheaper: Option<String>,
    wealthier: Option<String>,
    error: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("loading scenarios from {}", args.input.display()))?;
    info!("loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    let results = ScenarioRunner::new().run_named(&scenarios);

    let rows: Vec<SummaryRow> = results
        .into_iter()
        .map(|(name, result)| match result {
            Ok(report) => {
                let s = report.summary;
                SummaryRow {
                    name,
                    mortgage_years: Some(report.parameters.mortgage_years),
                    total_buying_cost: Some(s.total_buying_cost),
                    total_renting_cost: Some(s.total_renting_cost),
                    cost_difference: Some(s.cost_difference),
                    final_buying_net_worth: Some(s.final_buying_net_worth),
                    final_renting_net_worth: Some(s.final_renting_net_worth),
                    net_worth_difference: Some(s.net_worth_difference),
                    cheaper: Some(s.cheaper_option().to_string()),
                    wealthier: Some(s.wealthier_option().to_string()),
                    error: None,
                }
            }
            Err(e) => {
                warn!("scenario {} rejected: {}", name, e);
                SummaryRow {
                    name,
                    error: Some(e.to_string()),
                    ..Default::default()
                }
            }
        })
        .collect();

    let failed = rows.iter().filter(|r| r.error.is_some()).count();

    let writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout().lock()),
    };
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in &rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;

    info!(
        "projected {} scenarios ({} rejected) in {:?}",
        rows.len(),
        failed,
        start.elapsed()
    );

    Ok(())
}
