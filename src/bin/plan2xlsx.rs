use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use travel_plan_to_xlsx::{
    DayKeyMode, ParseOptions, ParseReport, RowPolicy, TripContext, parse_plan_file, render_plan,
    write_workbook_to_file,
};

#[derive(Debug, Parser)]
#[command(
    name = "plan2xlsx",
    version,
    about = "Extract travel-plan tables from an AI response into an Excel workbook"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a saved plan document and write the workbook.
    Extract(ExtractArgs),
}

#[derive(Debug, Args)]
struct ExtractArgs {
    /// Input plan text path.
    #[arg(short, long)]
    input: PathBuf,

    /// Output XLSX path.
    #[arg(short, long)]
    output: PathBuf,

    /// Also write the rendered sections as a standalone HTML page.
    #[arg(long)]
    html: Option<PathBuf>,

    /// Also write the named tables as JSON.
    #[arg(long = "tables-json")]
    tables_json: Option<PathBuf>,

    /// Fail on data rows whose cell count does not match the header
    /// instead of dropping them.
    #[arg(long = "strict-rows")]
    strict_rows: bool,

    /// Group itinerary days by leading integer instead of literal string.
    #[arg(long = "numeric-day-keys")]
    numeric_day_keys: bool,

    /// Label for uncategorized bare URLs.
    #[arg(long = "link-label", default_value = "🔗 Link")]
    link_label: String,

    /// Currency code used for display labels.
    #[arg(long, default_value = "PHP")]
    currency: String,

    /// Trip length in days, for display labels.
    #[arg(long, default_value_t = 1)]
    days: u32,

    /// Trip start date (YYYY-MM-DD), for display labels.
    #[arg(long = "start-date")]
    start_date: Option<String>,

    /// Enable verbose warning output.
    #[arg(short, long)]
    verbose: bool,
}

fn parse_options(args: &ExtractArgs) -> ParseOptions {
    ParseOptions {
        row_policy: if args.strict_rows {
            RowPolicy::Strict
        } else {
            RowPolicy::Lenient
        },
        day_key_mode: if args.numeric_day_keys {
            DayKeyMode::Numeric
        } else {
            DayKeyMode::Literal
        },
        generic_link_label: args.link_label.clone(),
    }
}

fn trip_context(args: &ExtractArgs) -> Result<TripContext> {
    let start_date = args
        .start_date
        .as_deref()
        .map(NaiveDate::from_str)
        .transpose()
        .context("invalid --start-date, expected YYYY-MM-DD")?
        .unwrap_or_default();

    Ok(TripContext {
        currency: args.currency.clone(),
        days: args.days,
        start_date,
    })
}

fn log_report(report: &ParseReport, verbose: bool) {
    if report.warnings.is_empty() {
        return;
    }

    eprintln!("warning: {} issue(s) detected", report.warnings.len());
    if verbose {
        for warning in &report.warnings {
            eprintln!(
                "  - {:?} section={:?} dropped_rows={:?}: {}",
                warning.code, warning.section, warning.dropped_rows, warning.message
            );
        }
    }
}

fn run_extract(args: &ExtractArgs) -> Result<ParseReport> {
    let options = parse_options(args);
    let context = trip_context(args)?;

    let (plan, report) = parse_plan_file(&args.input, &options)
        .with_context(|| format!("failed to parse '{}'", args.input.display()))?;

    write_workbook_to_file(&args.output, &plan.tables)
        .with_context(|| format!("failed to write '{}'", args.output.display()))?;

    if let Some(html_path) = &args.html {
        let mut page = String::from("<!DOCTYPE html>\n<html><body>\n");
        for fragment in render_plan(&plan, &context) {
            page.push_str("<h2>");
            page.push_str(&html_escape::encode_text(&fragment.heading));
            page.push_str("</h2>\n");
            page.push_str(&fragment.html);
            page.push('\n');
        }
        page.push_str("</body></html>\n");
        std::fs::write(html_path, page)
            .with_context(|| format!("failed to write '{}'", html_path.display()))?;
    }

    if let Some(json_path) = &args.tables_json {
        let json = serde_json::to_string_pretty(&plan.tables)?;
        std::fs::write(json_path, json)
            .with_context(|| format!("failed to write '{}'", json_path.display()))?;
    }

    Ok(report)
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("travel_plan_to_xlsx=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Extract(args) => match run_extract(&args) {
            Ok(report) => {
                log_report(&report, args.verbose);
                if report.table_count > 0 {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::from(2)
                }
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                ExitCode::from(1)
            }
        },
    }
}
