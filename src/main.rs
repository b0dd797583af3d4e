use std::path::Path;
use std::time::Duration;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use diet_board_rs::api::{ApiClient, ApiConfig, FoodSource};
use diet_board_rs::cli::{Cli, Command};
use diet_board_rs::dates::{
    calculate_duration, format_date, format_date_full, generate_date_range, parse_date,
};
use diet_board_rs::error::Result;
use diet_board_rs::interface::{
    display_day_summary, display_food_list, export_day_csv, prompt_food, prompt_meal_type,
    prompt_quantity, prompt_yes_no,
};
use diet_board_rs::state::{load_catalog, load_day, save_day, DayLog};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!(
            "diet_board_rs={default_level},diet_board={default_level}"
        )));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn api_client(cli: &Cli) -> Result<ApiClient> {
    ApiClient::new(ApiConfig {
        base_url: cli.base_url.clone(),
        timeout: Duration::from_secs(cli.timeout_secs),
        token: cli.token.clone(),
    })
}

fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Command::Summary { day_file } => cmd_summary(day_file),
        Command::Export { day_file, out } => cmd_export(day_file, out),
        Command::Log { day_file, catalog } => cmd_log(&cli, day_file, catalog.as_deref()),
        Command::FetchDay { plan, date, save } => cmd_fetch_day(&cli, *plan, date, save.as_deref()),
        Command::SearchFood { name } => cmd_search_food(&cli, name),
        Command::Dates { start, end } => cmd_dates(start, end),
    }
}

/// Print totals for a local day file.
fn cmd_summary(day_file: &Path) -> Result<()> {
    if !day_file.exists() {
        eprintln!("Day file not found: {}", day_file.display());
        return Ok(());
    }

    let day = load_day(day_file)?;
    display_day_summary(&day);
    Ok(())
}

/// Export a local day file as CSV.
fn cmd_export(day_file: &Path, out: &Path) -> Result<()> {
    if !day_file.exists() {
        eprintln!("Day file not found: {}", day_file.display());
        return Ok(());
    }

    let day = load_day(day_file)?;
    export_day_csv(&day, out)?;
    println!("Exported to {}", out.display());
    Ok(())
}

/// Add foods to meals until the user stops, then optionally save.
fn cmd_log(cli: &Cli, day_file: &Path, catalog: Option<&Path>) -> Result<()> {
    let source: Box<dyn FoodSource> = match catalog {
        Some(path) => {
            let catalog = load_catalog(path)?;
            println!("Loaded {} foods", catalog.len());
            Box::new(catalog)
        }
        None => Box::new(api_client(cli)?),
    };

    let mut log = DayLog::new(load_day(day_file)?);
    let mut added = 0;

    while let Some(food) = prompt_food(source.as_ref())? {
        let meal = prompt_meal_type()?;
        let quantity = prompt_quantity(&food)?;
        log.add_food(meal, &food, quantity)?;
        added += 1;
        info!(food = %food.name, %meal, quantity, "logged food");
        println!("Added {} {}{} to {}", food.name, quantity, food.unit, meal);
    }

    if added == 0 {
        println!("Nothing logged.");
        return Ok(());
    }

    display_day_summary(log.day());

    if prompt_yes_no("Save day file?", true)? {
        save_day(day_file, log.day())?;
        println!("Day saved.");
    }

    Ok(())
}

/// Fetch one day of a plan from the backend.
fn cmd_fetch_day(cli: &Cli, plan: i64, date: &str, save: Option<&Path>) -> Result<()> {
    let date = parse_date(date)?;
    let client = api_client(cli)?;

    let mut day = client.daily_diet_by_date(plan, date)?;
    if day.date.is_none() {
        day.date = Some(date);
    }

    display_day_summary(&day);

    if let Some(path) = save {
        save_day(path, &day)?;
        println!("Saved to {}", path.display());
    }

    Ok(())
}

fn cmd_search_food(cli: &Cli, name: &str) -> Result<()> {
    let client = api_client(cli)?;
    let foods = client.search_foods(name)?;
    display_food_list(&foods, &format!("Results for '{}'", name));
    Ok(())
}

fn cmd_dates(start: &str, end: &str) -> Result<()> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;

    for date in generate_date_range(start, end) {
        println!("{}  {}", format_date(date), format_date_full(date));
    }
    println!("{} days", calculate_duration(start, end));
    Ok(())
}
