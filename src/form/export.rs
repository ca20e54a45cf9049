use std::error::Error;
use std::fs::File;
use std::path::Path;

use csv::WriterBuilder;

use crate::form::submission::validate_week;
use crate::timetable::period_times::PERIOD_TIME_LABELS;
use crate::timetable::types::{PeriodSlot, WeekSchedule, Weekday, PERIODS_PER_DAY};

/// Renders the week schedule as CSV: one row per day, with a subject and a
/// room column for every period. Days with fewer periods leave the trailing
/// columns blank.
pub fn week_to_csv(week: &WeekSchedule) -> Result<String, Box<dyn Error>> {
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());

    // Header row: Day, then "P1 Subject (09:00 AM - 09:50 AM)", "P1 Room", ...
    let mut header = vec!["Day".to_string()];
    for (index, label) in PERIOD_TIME_LABELS.iter().enumerate() {
        header.push(format!("P{} Subject ({})", index + 1, label));
        header.push(format!("P{} Room", index + 1));
    }
    wtr.write_record(&header)?;

    for (weekday, day) in Weekday::ALL.into_iter().zip(week.days()) {
        let mut record = vec![weekday.name().to_string()];
        for ordinal in 0..PERIODS_PER_DAY {
            match day.get(ordinal) {
                Some(slot) => {
                    record.push(slot.subject.clone());
                    record.push(slot.room.clone());
                }
                None => {
                    record.push(String::new());
                    record.push(String::new());
                }
            }
        }
        wtr.write_record(&record)?;
    }

    let bytes = wtr.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes the CSV rendering of the week to a file
pub fn export_week_to_file(week: &WeekSchedule, path: &Path) -> Result<(), Box<dyn Error>> {
    let csv = week_to_csv(week)?;
    std::fs::write(path, csv)?;
    Ok(())
}

/// Reads a week schedule back from the CSV format produced by
/// [`week_to_csv`]. Rows must appear in day order; period columns beyond a
/// day's own period count are ignored.
pub fn import_week_from_file(path: &Path) -> Result<WeekSchedule, Box<dyn Error>> {
    let file = File::open(path)?;
    let mut reader = csv::Reader::from_reader(file);

    let mut days = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result?;
        let weekday =
            Weekday::from_index(index).ok_or("Too many rows: expected one per weekday")?;

        let name = record.get(0).unwrap_or("").trim();
        if name != weekday.name() {
            return Err(format!(
                "Row {} should be {}, found '{}'",
                index + 1,
                weekday.name(),
                name
            )
            .into());
        }

        let mut day = Vec::with_capacity(weekday.period_count());
        for ordinal in 0..weekday.period_count() {
            let subject = record.get(1 + ordinal * 2).unwrap_or("").to_string();
            let room = record.get(2 + ordinal * 2).unwrap_or("").to_string();
            day.push(PeriodSlot { subject, room });
        }
        days.push(day);
    }

    validate_week(&days)?;
    Ok(WeekSchedule::from_days(days))
}
