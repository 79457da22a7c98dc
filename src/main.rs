//! Rental ROI CLI
//!
//! Command-line interface for running ROI calculations, monthly breakdowns,
//! amortization schedules and scenario batches

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use rental_roi::formulas::{amortization_schedule, format_currency, format_percent, AmortizationYear};
use rental_roi::inputs::{load_scenarios, load_state, CalculatorState};
use rental_roi::scenario::{run_batch, ScenarioRunner};
use rental_roi::{calculate_roi, generate_monthly_breakdown, CalculatedMetrics};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "rental-roi",
    about = "Rental property ROI, cash flow and IRR projections",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full ROI calculation and multi-year projection
    Calculate(CalculateArgs),
    /// Show the first-year month-by-month breakdown
    Breakdown(BreakdownArgs),
    /// Print a yearly amortization schedule for a loan
    Amortization(AmortizationArgs),
    /// Run every scenario in a CSV sheet
    Batch(BatchArgs),
    /// Re-run a calculation at alternative interest rates
    Sensitivity(SensitivityArgs),
}

#[derive(Args, Debug)]
struct InputArgs {
    /// JSON calculator snapshot (calculator defaults when omitted)
    #[arg(long, env = "RENTAL_ROI_INPUT")]
    input: Option<PathBuf>,
    /// Override the projection horizon in years
    #[arg(long, env = "RENTAL_ROI_ANALYSIS_YEARS")]
    years: Option<u32>,
    /// Override annual property appreciation (%)
    #[arg(long, env = "RENTAL_ROI_APPRECIATION", allow_negative_numbers = true)]
    appreciation: Option<f64>,
}

#[derive(Args, Debug)]
struct CalculateArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Print the metrics as JSON
    #[arg(long)]
    json: bool,
    /// Write the yearly projection to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct BreakdownArgs {
    #[command(flatten)]
    input: InputArgs,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct AmortizationArgs {
    /// Loan amount
    #[arg(long)]
    principal: f64,
    /// Annual interest rate (%)
    #[arg(long)]
    rate: f64,
    /// Loan term in years
    #[arg(long, default_value_t = 30.0)]
    years: f64,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct BatchArgs {
    /// CSV sheet with one scenario per row
    #[arg(long)]
    input: PathBuf,
    /// Summary CSV destination
    #[arg(long, default_value = "roi_batch_output.csv")]
    output: PathBuf,
}

#[derive(Args, Debug)]
struct SensitivityArgs {
    #[command(flatten)]
    input: InputArgs,
    /// Interest rates to test (%)
    #[arg(long, value_delimiter = ',', required = true)]
    rates: Vec<f64>,
    #[arg(long)]
    json: bool,
}

/// One line of the batch summary CSV
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct BatchSummaryRow<'a> {
    name: &'a str,
    monthly_mortgage: f64,
    net_monthly_cash_flow: f64,
    annual_cash_flow: f64,
    #[serde(rename = "AnnualNOI")]
    annual_noi: f64,
    cash_on_cash_return: f64,
    cap_rate: f64,
    #[serde(rename = "DSCR")]
    dscr: f64,
    #[serde(rename = "IRR")]
    irr: f64,
    irr_converged: bool,
    total_cash_invested: f64,
    final_equity: f64,
    final_total_return: f64,
}

fn main() {
    env_logger::init();

    if let Err(err) = run() {
        eprintln!("error: {:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Calculate(args) => calculate(args),
        Command::Breakdown(args) => breakdown(args),
        Command::Amortization(args) => amortization(args),
        Command::Batch(args) => batch(args),
        Command::Sensitivity(args) => sensitivity(args),
    }
}

/// Load the snapshot and apply command-line overrides, then validate
fn resolve_state(args: &InputArgs) -> Result<CalculatorState> {
    let mut state = match &args.input {
        Some(path) => load_state(path)
            .with_context(|| format!("loading calculator input from {}", path.display()))?,
        None => {
            info!("No input file given, using calculator defaults");
            CalculatorState::default()
        }
    };

    if let Some(years) = args.years {
        state.settings.analysis_years = years;
    }
    if let Some(appreciation) = args.appreciation {
        state.settings.property_appreciation = appreciation;
    }

    state.validate().context("invalid calculator input")?;
    Ok(state)
}

fn calculate(args: CalculateArgs) -> Result<()> {
    let state = resolve_state(&args.input)?;
    let metrics = calculate_roi(&state);

    if !metrics.irr_converged && !metrics.yearly_projections.is_empty() {
        warn!("IRR solver did not converge; reported IRR is an approximation");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metrics)?);
    } else {
        print_metrics(&state, &metrics);
    }

    if let Some(path) = &args.csv {
        write_projection_csv(path, &metrics)?;
        println!("\nYearly projection written to: {}", path.display());
    }

    Ok(())
}

fn breakdown(args: BreakdownArgs) -> Result<()> {
    let state = resolve_state(&args.input)?;
    let months = generate_monthly_breakdown(&state);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&months)?);
        return Ok(());
    }

    println!("{:<10} {:>12} {:>12} {:>12} {:>12}", "Month", "Income", "Expenses", "Mortgage", "Net CF");
    println!("{}", "-".repeat(62));
    for month in &months {
        println!(
            "{:<10} {:>12.2} {:>12.2} {:>12.2} {:>12.2}",
            month.month, month.income, month.expenses, month.mortgage, month.net_cash_flow
        );
    }

    Ok(())
}

fn amortization(args: AmortizationArgs) -> Result<()> {
    let schedule = amortization_schedule(args.principal, args.rate, args.years);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&schedule)?);
        return Ok(());
    }

    if schedule.is_empty() {
        println!("Nothing to amortize");
        return Ok(());
    }

    println!("{:>4} {:>14} {:>14} {:>14} {:>14}", "Year", "Payment", "Interest", "Principal", "Balance");
    println!("{}", "-".repeat(64));
    for AmortizationYear { year, payment, interest, principal, ending_balance } in &schedule {
        println!(
            "{:>4} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            year, payment, interest, principal, ending_balance
        );
    }

    let total_interest: f64 = schedule.iter().map(|r| r.interest).sum();
    println!("\nTotal interest: {}", format_currency(total_interest));

    Ok(())
}

fn batch(args: BatchArgs) -> Result<()> {
    let scenarios = load_scenarios(&args.input)
        .with_context(|| format!("loading scenarios from {}", args.input.display()))?;
    info!("Loaded {} scenarios from {}", scenarios.len(), args.input.display());

    let results = run_batch(&scenarios);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    for result in &results {
        let m = &result.metrics;
        let final_year = m.final_year();
        writer.serialize(BatchSummaryRow {
            name: &result.name,
            monthly_mortgage: m.monthly_mortgage,
            net_monthly_cash_flow: m.net_monthly_cash_flow,
            annual_cash_flow: m.annual_cash_flow,
            annual_noi: m.annual_noi,
            cash_on_cash_return: m.cash_on_cash_return,
            cap_rate: m.cap_rate,
            dscr: m.dscr,
            irr: m.irr,
            irr_converged: m.irr_converged,
            total_cash_invested: m.total_cash_invested,
            final_equity: final_year.map(|y| y.equity).unwrap_or(0.0),
            final_total_return: final_year.map(|y| y.total_return).unwrap_or(0.0),
        })?;
    }
    writer.flush()?;

    println!("{} scenarios written to: {}", results.len(), args.output.display());
    Ok(())
}

fn sensitivity(args: SensitivityArgs) -> Result<()> {
    let state = resolve_state(&args.input)?;
    let runner = ScenarioRunner::new(state);
    let results = runner.interest_rate_sensitivity(&args.rates);

    if args.json {
        let rows: Vec<_> = results
            .iter()
            .map(|(rate, metrics)| serde_json::json!({ "interestRate": rate, "metrics": metrics }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{:>8} {:>12} {:>12} {:>10} {:>8} {:>10}", "Rate", "Mortgage", "Annual CF", "CoC", "DSCR", "IRR");
    println!("{}", "-".repeat(65));
    for (rate, m) in &results {
        println!(
            "{:>8} {:>12.2} {:>12.2} {:>10} {:>8.2} {:>10}",
            format_percent(*rate, 2),
            m.monthly_mortgage,
            m.annual_cash_flow,
            format_percent(m.cash_on_cash_return, 2),
            m.dscr,
            format_percent(m.irr, 2),
        );
    }

    Ok(())
}

fn print_metrics(state: &CalculatorState, m: &CalculatedMetrics) {
    let loan = &state.loan_details;
    println!("Rental ROI v{}", env!("CARGO_PKG_VERSION"));
    println!("================\n");

    println!("Purchase: {} ({} down, {} financed at {} for {} years)",
        format_currency(loan.purchase_price),
        format_percent(loan.down_payment_percent(), 1),
        format_currency(loan.loan_amount),
        format_percent(loan.interest_rate, 2),
        loan.loan_term,
    );
    println!();

    println!("Monthly:");
    println!("  Mortgage (P&I):      {:>12.2}", m.monthly_mortgage);
    println!("  Gross Income:        {:>12.2}", m.gross_monthly_income);
    println!("  Operating Expenses:  {:>12.2}", m.total_monthly_expenses);
    println!("  Net Cash Flow:       {:>12.2}", m.net_monthly_cash_flow);
    println!();

    println!("Annual:");
    println!("  Cash Flow:           {:>12.2}", m.annual_cash_flow);
    println!("  NOI:                 {:>12.2}", m.annual_noi);
    println!("  Debt Service:        {:>12.2}", m.annual_debt_service);
    println!();

    println!("Returns:");
    println!("  Cash Invested:       {:>12}", format_currency(m.total_cash_invested));
    println!("  Cash-on-Cash:        {:>12}", format_percent(m.cash_on_cash_return, 2));
    println!("  Cap Rate:            {:>12}", format_percent(m.cap_rate, 2));
    println!("  DSCR:                {:>12.2}", m.dscr);
    println!("  IRR:                 {:>12}", format_percent(m.irr, 2));
    println!();

    println!("{:>4} {:>12} {:>12} {:>12} {:>12} {:>14} {:>14} {:>10}",
        "Year", "Gross Inc", "OpEx", "NOI", "Cash Flow", "Loan Bal", "Equity", "ROI");
    println!("{}", "-".repeat(98));
    for y in &m.yearly_projections {
        println!("{:>4} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2} {:>14.2} {:>10}",
            y.year,
            y.gross_income,
            y.operating_expenses,
            y.noi,
            y.cash_flow,
            y.loan_balance,
            y.equity,
            format_percent(y.roi, 1),
        );
    }
}

fn write_projection_csv(path: &Path, metrics: &CalculatedMetrics) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    for row in &metrics.yearly_projections {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
