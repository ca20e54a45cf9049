use crate::timetable::period_times::{label_start, BREAK_AFTER_PERIOD, BREAK_LABEL, PERIOD_TIME_LABELS};
use crate::timetable::resolver::{ResolutionResult, ScheduledPeriod};
use crate::timetable::types::{DaySchedule, PeriodSlot, WeekSchedule, Weekday};

/// Formats a timetable cell for terminal output, e.g. "Math [B12]"
pub fn format_slot(slot: &PeriodSlot) -> String {
    if !slot.subject.is_empty() && !slot.room.is_empty() {
        format!("{} [{}]", slot.subject, slot.room)
    } else if !slot.subject.is_empty() {
        slot.subject.clone()
    } else if !slot.room.is_empty() {
        format!("[{}]", slot.room)
    } else {
        "-".to_string()
    }
}

/// Formats a second count as a clock-style countdown
pub fn format_countdown(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Prints the full week as a table, one row per day
pub fn print_week(week: &WeekSchedule) {
    // Header row with period numbers and start times
    let mut header = format!("{:<10}", "Day");
    for (index, label) in PERIOD_TIME_LABELS.iter().enumerate() {
        header.push_str(&format!("{:<19}", format!("P{} {}", index + 1, label_start(label))));
        if index + 1 == BREAK_AFTER_PERIOD {
            header.push_str(&format!("{:<8}", "Break"));
        }
    }
    println!("{}", header);

    for weekday in Weekday::ALL {
        let day = week.day(weekday);
        let mut row = format!("{:<10}", &weekday.name()[..3]);
        for ordinal in 0..PERIOD_TIME_LABELS.len() {
            let cell = day.get(ordinal).map(format_slot).unwrap_or_default();
            row.push_str(&format!("{:<19}", cell));
            if ordinal + 1 == BREAK_AFTER_PERIOD {
                row.push_str(&format!("{:<8}", ""));
            }
        }
        println!("{}", row.trim_end());
    }
    println!("\nBreak: {}", BREAK_LABEL);
}

/// One-line summary of where today stands, fed by the resolver. The empty-day
/// and day-complete cases read differently even though the resolver reports
/// both as "nothing active, nothing upcoming".
pub fn format_status(
    day: &DaySchedule,
    periods: &[ScheduledPeriod],
    result: &ResolutionResult,
) -> String {
    if periods.is_empty() {
        return "No classes scheduled today.".to_string();
    }

    if let Some(active) = result.active {
        let mut line = format!("Now: {}", format_slot(&day[active]));
        if let Some(remaining) = result.remaining_seconds {
            line.push_str(&format!(" · ends in {}", format_countdown(remaining)));
        }
        if let Some(upcoming) = result.upcoming {
            line.push_str(&format!(" · next: {}", format_slot(&day[upcoming])));
        }
        return line;
    }

    if let Some(upcoming) = result.upcoming {
        let starts = label_start(PERIOD_TIME_LABELS[upcoming]);
        let mut line = format!("Next: {} at {}", format_slot(&day[upcoming]), starts);
        if let Some(remaining) = result.remaining_seconds {
            line.push_str(&format!(" · starts in {}", format_countdown(remaining)));
        }
        return line;
    }

    "All classes are done for today.".to_string()
}
