//! Command line interface of *leadtime*.
//!
//! ```text
//! leadtime plan request.toml --format json
//! leadtime form saved-form.txt --today 2025-06-01
//! leadtime back 2025-06-13 3
//! leadtime calendar 2025 --month 5
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use itertools::Itertools;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use leadtime::input::form::parse_form_lines;
use leadtime::input::PlanRequest;
use leadtime::{Calendar, Config, DateRoll, LeadTime, Plan, Scheduler, JSON};

#[derive(Parser)]
#[command(name = "leadtime")]
#[command(about = "Back-schedule processes from delivery dates over business days")]
struct Args {
    /// Configuration file (default: leadtime.toml in the working directory, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Named calendar(s), comma separated, overriding the configuration
    #[arg(long, global = true)]
    calendar: Option<String>,

    /// Log more detail (repeat for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Schedule a TOML or JSON request file
    Plan {
        request: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
        /// Anchor date used when the request has no valid deliveries
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Schedule a saved form submission of `key=value` lines
    Form {
        pairs: PathBuf,
        #[arg(long, value_enum, default_value_t = Format::Table)]
        format: Format,
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Start date of a lead time ending on a date
    Back { date: NaiveDate, days: u32 },
    /// Print the business days of a year or a month
    Calendar {
        year: i32,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Table,
    Json,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>, calendar: Option<&str>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => Config::from_default_location().context("Failed to load leadtime.toml")?,
    };
    if let Some(name) = calendar {
        config.calendar = name.to_string();
    }
    Ok(config)
}

fn run_plan(
    calendar: Arc<Calendar>,
    config: &Config,
    mut request: PlanRequest,
    format: Format,
    today: Option<NaiveDate>,
) -> Result<()> {
    if request.processes.is_empty() {
        if let Some(names) = config.process_names() {
            request.processes = names.to_vec();
        }
    }
    let deliveries = request.deliveries();
    let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
    info!(deliveries = deliveries.len(), "scheduling request");

    let plan = Scheduler::new(calendar.as_ref())
        .with_anchor(config.anchor)
        .schedule(&deliveries, today);
    match format {
        Format::Json => println!("{}", plan.to_json_pretty()?),
        Format::Table => print!("{}", render_table(&plan)),
    }
    Ok(())
}

fn render_table(plan: &Plan) -> String {
    let width = plan
        .entries()
        .map(|(_, e)| e.name.chars().count())
        .max()
        .unwrap_or(0);
    let mut output = String::new();
    for delivery in plan.deliveries.iter() {
        output += &format!(
            "{}: delivery {}, start {}\n",
            delivery.name, delivery.delivery_date, delivery.start_date
        );
        for entry in delivery.schedule.iter() {
            let row = [
                format!("{:<width$}", entry.name, width = width),
                entry.start.to_string(),
                entry.end.to_string(),
            ];
            output += &format!("  {}\n", row.iter().join("  "));
        }
    }
    let global_start = plan
        .global_start_date
        .map_or_else(|| "-".to_string(), |d| d.to_string());
    output += &format!("Global start: {}\n", global_start);
    output += &format!("Anchor: {}\n", plan.anchor_date);
    output
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref(), args.calendar.as_deref())?;
    let calendar = Arc::new(
        config
            .build_calendar()
            .with_context(|| format!("Failed to build calendar '{}'", config.calendar))?,
    );

    match args.command {
        Command::Plan {
            request,
            format,
            today,
        } => {
            let parsed = PlanRequest::from_file(&request)
                .with_context(|| format!("Failed to read request {}", request.display()))?;
            run_plan(calendar, &config, parsed, format, today)?;
        }
        Command::Form {
            pairs,
            format,
            today,
        } => {
            let text = std::fs::read_to_string(&pairs)
                .with_context(|| format!("Failed to read form {}", pairs.display()))?;
            run_plan(calendar, &config, parse_form_lines(&text), format, today)?;
        }
        Command::Back { date, days } => {
            let lead_time = LeadTime::new(days);
            let start = calendar.bus_days_before(&date, lead_time.days());
            debug!(%date, days = lead_time.days(), %start, "back-dated");
            println!("{}", start);
        }
        Command::Calendar { year, month } => match month {
            Some(month) => print!("{}", calendar.print_month(year, month)),
            None => print!("{}", calendar.print_year(year)),
        },
    }
    Ok(())
}
