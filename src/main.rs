//! Housing Projection CLI
//!
//! Runs a buy vs rent projection for one scenario. The base scenario comes
//! from the defaults or a JSON file; individual flags override it.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use housing_projection::projection::{monthly_mortgage_payment, write_yearly_csv, ProjectionEngine};
use housing_projection::{format_currency, format_percent, ProjectionReport, ScenarioParameters};
use housing_projection::{ScenarioRunner, SensitivityField};
use log::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SweepField {
    Interest,
    Amortization,
    Appreciation,
    InvestmentReturn,
    DownPayment,
}

impl From<SweepField> for SensitivityField {
    fn from(field: SweepField) -> Self {
        match field {
            SweepField::Interest => SensitivityField::InterestRate,
            SweepField::Amortization => SensitivityField::AmortizationRate,
            SweepField::Appreciation => SensitivityField::PropertyAppreciation,
            SweepField::InvestmentReturn => SensitivityField::InvestmentReturn,
            SweepField::DownPayment => SensitivityField::DownPaymentFraction,
        }
    }
}

/// Compare buying an apartment with renting and investing the difference
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON file with scenario parameters (missing fields use defaults)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Apartment price (SEK)
    #[arg(long)]
    apartment_price: Option<f64>,

    /// Down payment as a fraction of the price (0.15 = 15%)
    #[arg(long)]
    down_payment: Option<f64>,

    /// Projection horizon in years
    #[arg(long)]
    years: Option<u32>,

    /// Annual mortgage interest rate as a fraction
    #[arg(long)]
    interest_rate: Option<f64>,

    /// Monthly avgift (SEK)
    #[arg(long)]
    monthly_fee: Option<f64>,

    /// Annual amortization rate as a fraction of the loan
    #[arg(long)]
    amortization_rate: Option<f64>,

    /// Annual property appreciation as a fraction (may be negative)
    #[arg(long, allow_hyphen_values = true)]
    appreciation: Option<f64>,

    /// Monthly rent (SEK)
    #[arg(long)]
    rent: Option<f64>,

    /// Annual investment return as a fraction
    #[arg(long, allow_hyphen_values = true)]
    investment_return: Option<f64>,

    /// Output format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write the yearly table as CSV to this path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Number of years printed in the text table
    #[arg(long, default_value_t = 10)]
    years_shown: usize,

    /// Sweep one rate across --sweep-values instead of a single run
    #[arg(long, value_enum, requires = "sweep_values")]
    sweep: Option<SweepField>,

    /// Comma-separated values for --sweep
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, requires = "sweep")]
    sweep_values: Vec<f64>,
}

impl Args {
    fn scenario(&self) -> Result<ScenarioParameters> {
        let mut params = match &self.scenario {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("opening scenario file {}", path.display()))?;
                serde_json::from_reader(file)
                    .with_context(|| format!("parsing scenario file {}", path.display()))?
            }
            None => ScenarioParameters::default(),
        };

        if let Some(v) = self.apartment_price {
            params.apartment_price = v;
        }
        if let Some(v) = self.down_payment {
            params.down_payment_fraction = v;
        }
        if let Some(v) = self.years {
            params.mortgage_years = v;
        }
        if let Some(v) = self.interest_rate {
            params.annual_interest_rate = v;
        }
        if let Some(v) = self.monthly_fee {
            params.monthly_fee = v;
        }
        if let Some(v) = self.amortization_rate {
            params.annual_amortization_rate = v;
        }
        if let Some(v) = self.appreciation {
            params.annual_property_appreciation = v;
        }
        if let Some(v) = self.rent {
            params.monthly_rent = v;
        }
        if let Some(v) = self.investment_return {
            params.annual_investment_return = v;
        }

        Ok(params)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let params = args.scenario()?;

    if let Some(field) = args.sweep {
        return run_sweep(&params, field, &args.sweep_values);
    }

    let engine = ProjectionEngine::new(params).context("invalid scenario")?;
    let report = engine.run();
    info!("projection complete: {} years", params.mortgage_years);

    match args.format {
        OutputFormat::Text => print_text(&report, args.years_shown),
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Csv => write_yearly_csv(&report, std::io::stdout().lock())?,
    }

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_yearly_csv(&report, BufWriter::new(file))?;
        info!("yearly table written to {}", path.display());
    }

    Ok(())
}

fn print_text(report: &ProjectionReport, years_shown: usize) {
    let p = &report.parameters;
    let c = &report.constants;
    let s = &report.summary;

    println!("Buy vs Rent Projection ({} years)", p.mortgage_years);
    println!("{}", "=".repeat(40));

    println!("\nLoan & Amortization:");
    println!("  Loan Amount:          {}", format_currency(c.mortgage_amount));
    println!("  Loan-to-Value:        {}", format_percent(c.loan_to_value));
    println!("  Amortization Rate:    {} annually", format_percent(p.annual_amortization_rate));
    println!("  Monthly Amortization: {}", format_currency(c.monthly_amortization));
    println!("  Renter Savings/Month: {}", format_currency(c.monthly_savings));
    if let Some(payment) =
        monthly_mortgage_payment(c.mortgage_amount, p.annual_interest_rate, p.mortgage_years)
    {
        println!("  Annuity Equivalent:   {} per month", format_currency(payment));
    }

    println!("\nCosts:");
    println!("  Total Buying Costs:   {}", format_currency(s.total_buying_cost));
    println!("  Total Renting Costs:  {}", format_currency(s.total_renting_cost));
    println!(
        "  Cost Difference:      {} ({} is cheaper)",
        format_currency(s.cost_difference.abs()),
        s.cheaper_option()
    );

    println!("\nNet Worth:");
    println!("  Final Buying:         {}", format_currency(s.final_buying_net_worth));
    println!("  Final Renting:        {}", format_currency(s.final_renting_net_worth));
    println!(
        "  Difference:           {} ({} builds more wealth)",
        format_currency(s.net_worth_difference.abs()),
        s.wealthier_option()
    );

    println!(
        "\n{:>4} {:>16} {:>16} {:>16} {:>16} {:>16} {:>16}",
        "Year", "Buying Cost", "Renting Cost", "Equity", "Property", "Mortgage", "Investment"
    );
    println!("{}", "-".repeat(108));

    let table = report.yearly_table();
    let rows_shown = years_shown.saturating_add(1);
    for row in table.iter().take(rows_shown) {
        println!(
            "{:>4} {:>16} {:>16} {:>16} {:>16} {:>16} {:>16}",
            row.year,
            format_currency(row.buying_cost),
            format_currency(row.renting_cost),
            format_currency(row.equity_built),
            format_currency(row.property_value),
            format_currency(row.mortgage_balance),
            format_currency(row.investment_value),
        );
    }
    if table.len() > rows_shown {
        println!("... ({} more years)", table.len() - rows_shown);
    }
}

fn run_sweep(base: &ScenarioParameters, field: SweepField, values: &[f64]) -> Result<()> {
    let runner = ScenarioRunner::new();
    let results = runner.run_sensitivity(base, field.into(), values);

    println!(
        "{:>8} {:>18} {:>18} {:>18} {:>18}",
        "Value", "Buying Cost", "Renting Cost", "Buying Worth", "Renting Worth"
    );
    println!("{}", "-".repeat(84));

    for (value, result) in values.iter().zip(results) {
        match result {
            Ok(report) => {
                let s = report.summary;
                println!(
                    "{:>8} {:>18} {:>18} {:>18} {:>18}",
                    format_percent(*value),
                    format_currency(s.total_buying_cost),
                    format_currency(s.total_renting_cost),
                    format_currency(s.final_buying_net_worth),
                    format_currency(s.final_renting_net_worth),
                );
            }
            Err(e) => println!("{:>8} {}", format_percent(*value), e),
        }
    }

    Ok(())
}
