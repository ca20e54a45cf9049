mod display;
mod form;
mod store;
mod ticker;
mod timetable;
mod web;

use std::error::Error;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

use chrono::{Datelike, Local, Timelike};

use display::{format_status, print_week};
use store::{JsonFileStore, ScheduleStore};
use ticker::Ticker;
use timetable::period_times::PeriodInterval;
use timetable::{period_intervals, resolve, scheduled_periods, WeekSchedule, Weekday};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // The period table is fixed configuration; a table that fails to parse
    // or overlaps is a startup error, not something to limp along with
    let intervals = period_intervals()?;

    let args: Vec<String> = std::env::args().collect();
    let store = JsonFileStore::default_path();

    match args.get(1).map(String::as_str) {
        Some("web") => {
            let port = args
                .get(2)
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);

            println!("Starting WhatsNext on http://localhost:{}", port);
            web::start_server(port, Box::new(store), intervals).await?;
        }
        Some("watch") => {
            watch(store, intervals).await?;
        }
        Some("export") => {
            let path = args.get(2).map(String::as_str).unwrap_or("timetable.csv");
            let week = store.load();
            form::export_week_to_file(&week, Path::new(path))?;
            println!("Timetable written to {}", path);
        }
        Some("import") => {
            let path = args
                .get(2)
                .ok_or("Usage: whatsnext import <file.csv>")?;
            let week = form::import_week_from_file(Path::new(path))?;
            store.save(&week)?;
            println!("Timetable imported from {}", path);
        }
        Some(other) => {
            eprintln!("Unknown mode '{}'", other);
            eprintln!("Usage: whatsnext [web [port] | watch | export [file] | import <file>]");
            std::process::exit(2);
        }
        None => {
            show_once(&store, &intervals);
        }
    }

    Ok(())
}

/// Default mode: print the week and where today stands, once
fn show_once(store: &JsonFileStore, intervals: &[PeriodInterval]) {
    let week = store.load();
    if week.is_empty() {
        println!("No timetable saved yet. Run `whatsnext web` to create one.");
        return;
    }

    print_week(&week);
    println!();

    let now = Local::now();
    let weekday = Weekday::from_chrono(now.weekday());
    let day = week.day(weekday);
    let periods = scheduled_periods(day, intervals);
    let result = resolve(&periods, now.time().num_seconds_from_midnight());

    println!("{} {}", weekday.name(), now.format("%H:%M:%S"));
    println!("{}", format_status(day, &periods, &result));
}

/// Live mode: re-resolve once per second until Ctrl-C
async fn watch(store: JsonFileStore, intervals: Vec<PeriodInterval>) -> Result<(), Box<dyn Error>> {
    let week: WeekSchedule = store.load();
    if week.is_empty() {
        println!("No timetable saved yet. Run `whatsnext web` to create one.");
        return Ok(());
    }

    print_week(&week);
    println!();

    let ticker = Ticker::every(Duration::from_secs(1), move || {
        let now = Local::now();
        let weekday = Weekday::from_chrono(now.weekday());
        let day = week.day(weekday);
        let periods = scheduled_periods(day, &intervals);
        let result = resolve(&periods, now.time().num_seconds_from_midnight());

        let line = format!(
            "{} {} | {}",
            weekday.name(),
            now.format("%H:%M:%S"),
            format_status(day, &periods, &result)
        );
        print!("\r{:<78}", line);
        let _ = std::io::stdout().flush();
    });

    tokio::signal::ctrl_c().await?;
    ticker.stop();
    println!();
    Ok(())
}
