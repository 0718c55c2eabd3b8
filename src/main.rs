use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use mortgage_planner::application::comparison::Comparison;
use mortgage_planner::application::report::yearly_summaries;
use mortgage_planner::domain::loan::LoanTerms;
use mortgage_planner::domain::month::parse_month;
use mortgage_planner::domain::rule::ExtraPaymentRule;
use mortgage_planner::interfaces::csv::rule_reader::{RuleReader, RuleRecord};
use mortgage_planner::interfaces::csv::schedule_writer::ScheduleWriter;
use mortgage_planner::interfaces::json;
use rust_decimal::Decimal;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    /// Payoff dates, interest savings and final equity
    Summary,
    /// One row per month of the schedule with extra payments
    Monthly,
    /// One row per calendar year
    Yearly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Csv,
    Json,
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Loan principal
    #[arg(long)]
    principal: Decimal,

    /// Annual interest rate in percent
    #[arg(long)]
    rate: Decimal,

    /// Loan term in years
    #[arg(long)]
    term: Decimal,

    /// Origination month (YYYY-MM or YYYY-MM-DD)
    #[arg(long, value_parser = parse_start)]
    start: NaiveDate,

    /// Initial home value. Enables equity tracking.
    #[arg(long)]
    home_value: Option<Decimal>,

    /// Annual home appreciation in percent. Requires --home-value.
    #[arg(long, requires = "home_value", allow_negative_numbers = true)]
    appreciation: Option<Decimal>,

    /// Extra payment as AMOUNT[:FREQUENCY[:START]], may be repeated
    #[arg(long = "extra")]
    extras: Vec<RuleRecord>,

    /// CSV file of extra payment rules (amount,frequency,start)
    #[arg(long)]
    rules: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = View::Summary)]
    view: View,

    #[arg(long, value_enum, default_value_t = Format::Csv)]
    format: Format,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn parse_start(input: &str) -> std::result::Result<NaiveDate, String> {
    parse_month(input).map_err(|e| e.to_string())
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Collects rules from `--extra` flags and the optional rules file.
///
/// Rows that cannot be interpreted are logged and skipped.
fn collect_rules(cli: &Cli, origination: NaiveDate) -> Result<Vec<ExtraPaymentRule>> {
    let mut rules = Vec::new();
    for record in &cli.extras {
        match record.clone().into_rule(origination) {
            Ok(rule) => rules.push(rule),
            Err(e) => tracing::warn!("Error reading extra payment: {}", e),
        }
    }

    if let Some(path) = &cli.rules {
        let file = File::open(path).into_diagnostic()?;
        for rule in RuleReader::new(file).rules(origination) {
            match rule {
                Ok(rule) => rules.push(rule),
                Err(e) => tracing::warn!("Error reading extra payment: {}", e),
            }
        }
    }
    Ok(rules)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let mut loan = LoanTerms::new(cli.principal, cli.rate, cli.term, cli.start);
    if let Some(home_value) = cli.home_value {
        loan = loan.with_home(home_value, cli.appreciation.unwrap_or_default());
    }

    let rules = collect_rules(&cli, loan.origination)?;
    tracing::info!(rules = rules.len(), "computing schedules");

    let comparison = Comparison::compute(&loan, &rules).into_diagnostic()?;

    let stdout = io::stdout();
    let out = stdout.lock();
    let written = match (cli.view, cli.format) {
        (View::Summary, Format::Csv) => ScheduleWriter::new(out).write_summary(&comparison),
        (View::Monthly, Format::Csv) => ScheduleWriter::new(out).write_months(&comparison.actual),
        (View::Yearly, Format::Csv) => {
            ScheduleWriter::new(out).write_years(&yearly_summaries(&comparison.actual))
        }
        (View::Summary, Format::Json) => json::write_summary(out, &comparison),
        (View::Monthly, Format::Json) => json::write_months(out, &comparison.actual),
        (View::Yearly, Format::Json) => {
            json::write_years(out, &yearly_summaries(&comparison.actual))
        }
    };
    written.into_diagnostic()?;

    Ok(())
}
