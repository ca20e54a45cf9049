use super::types::PERIODS_PER_DAY;

/// The fixed daily period times, shared by every day of the week. Labels use
/// the 12-hour clock with an AM/PM suffix and are parsed once at startup.
pub const PERIOD_TIME_LABELS: [&str; PERIODS_PER_DAY] = [
    "09:00 AM - 09:50 AM",
    "09:50 AM - 10:40 AM",
    "10:40 AM - 11:30 AM",
    "11:30 AM - 12:20 PM",
    "12:40 PM - 01:30 PM",
    "01:30 PM - 02:20 PM",
    "02:20 PM - 03:10 PM",
];

/// Lunch break, shown between period 4 and period 5. Display only, never
/// part of scheduling.
pub const BREAK_LABEL: &str = "12:20 PM - 12:40 PM";

/// The break column is inserted after this many periods
pub const BREAK_AFTER_PERIOD: usize = 4;

/// A period's time window in minutes since midnight. Start is inclusive,
/// end is exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodInterval {
    pub start: u32,
    pub end: u32,
}

impl PeriodInterval {
    pub fn new(start: u32, end: u32) -> Self {
        PeriodInterval { start, end }
    }

    pub fn start_seconds(self) -> u32 {
        self.start * 60
    }

    pub fn end_seconds(self) -> u32 {
        self.end * 60
    }
}

/// Parses a 12-hour clock time like "09:50 AM" into minutes since midnight.
/// "12:xx AM" is midnight (hour 0) and "12:xx PM" is noon (hour stays 12).
pub fn parse_clock_time(value: &str) -> Result<u32, String> {
    let trimmed = value.trim();
    let (time_part, suffix) = trimmed
        .split_once(' ')
        .ok_or_else(|| format!("Missing AM/PM suffix in time '{}'", trimmed))?;

    let (hour_str, minute_str) = time_part
        .split_once(':')
        .ok_or_else(|| format!("Expected HH:MM in time '{}'", trimmed))?;

    let hours: u32 = hour_str
        .parse()
        .map_err(|_| format!("Invalid hour in time '{}'", trimmed))?;
    let minutes: u32 = minute_str
        .parse()
        .map_err(|_| format!("Invalid minute in time '{}'", trimmed))?;

    if hours < 1 || hours > 12 || minutes >= 60 {
        return Err(format!("Time '{}' is out of range", trimmed));
    }

    // Normalize the 12-hour clock: 12 AM is hour 0, 12 PM stays hour 12
    let hours24 = match suffix.trim() {
        "AM" => {
            if hours == 12 {
                0
            } else {
                hours
            }
        }
        "PM" => {
            if hours == 12 {
                12
            } else {
                hours + 12
            }
        }
        other => return Err(format!("Unknown AM/PM suffix '{}'", other)),
    };

    Ok(hours24 * 60 + minutes)
}

/// Parses an interval label like "09:00 AM - 09:50 AM"
pub fn parse_interval_label(label: &str) -> Result<PeriodInterval, String> {
    let (start_str, end_str) = label
        .split_once(" - ")
        .ok_or_else(|| format!("Expected 'start - end' in label '{}'", label))?;

    let start = parse_clock_time(start_str)?;
    let end = parse_clock_time(end_str)?;

    if start >= end {
        return Err(format!("Label '{}' does not start before it ends", label));
    }

    Ok(PeriodInterval::new(start, end))
}

/// Parses the configured period labels and checks that the sequence is
/// strictly ascending with no overlap. A table that fails here is a
/// configuration error reported at startup.
pub fn period_intervals() -> Result<Vec<PeriodInterval>, String> {
    parse_interval_labels(&PERIOD_TIME_LABELS)
}

pub fn parse_interval_labels(labels: &[&str]) -> Result<Vec<PeriodInterval>, String> {
    let mut intervals: Vec<PeriodInterval> = Vec::with_capacity(labels.len());

    for label in labels {
        let interval = parse_interval_label(label)?;
        if let Some(previous) = intervals.last() {
            if interval.start < previous.end {
                return Err(format!(
                    "Period '{}' overlaps or precedes the period before it",
                    label
                ));
            }
        }
        intervals.push(interval);
    }

    Ok(intervals)
}

/// The "09:00 AM" half of a period label, used for table headers
pub fn label_start(label: &str) -> &str {
    label.split(" - ").next().unwrap_or(label).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_clock_time() {
        assert_eq!(parse_clock_time("09:00 AM"), Ok(9 * 60));
        assert_eq!(parse_clock_time("09:50 AM"), Ok(9 * 60 + 50));
        assert_eq!(parse_clock_time("01:30 PM"), Ok(13 * 60 + 30));
        assert_eq!(parse_clock_time("11:59 PM"), Ok(23 * 60 + 59));
    }

    #[test]
    fn test_noon_and_midnight() {
        // 12 PM is noon, 12 AM is midnight
        assert_eq!(parse_clock_time("12:00 PM"), Ok(12 * 60));
        assert_eq!(parse_clock_time("12:20 PM"), Ok(12 * 60 + 20));
        assert_eq!(parse_clock_time("12:00 AM"), Ok(0));
        assert_eq!(parse_clock_time("12:30 AM"), Ok(30));
    }

    #[test]
    fn test_parse_clock_time_rejects_garbage() {
        assert!(parse_clock_time("09:00").is_err());
        assert!(parse_clock_time("9 AM").is_err());
        assert!(parse_clock_time("13:00 PM").is_err());
        assert!(parse_clock_time("09:75 AM").is_err());
        assert!(parse_clock_time("09:00 XM").is_err());
    }

    #[test]
    fn test_parse_interval_label() {
        let interval = parse_interval_label("11:30 AM - 12:20 PM").unwrap();
        assert_eq!(interval.start, 11 * 60 + 30);
        assert_eq!(interval.end, 12 * 60 + 20);
    }

    #[test]
    fn test_interval_label_must_be_ordered() {
        assert!(parse_interval_label("10:00 AM - 09:00 AM").is_err());
        assert!(parse_interval_label("10:00 AM - 10:00 AM").is_err());
    }

    #[test]
    fn test_configured_table_is_valid() {
        let intervals = period_intervals().unwrap();
        assert_eq!(intervals.len(), PERIODS_PER_DAY);
        // Periods 3 and 4 straddle the lunch break
        assert_eq!(intervals[3].end, 12 * 60 + 20);
        assert_eq!(intervals[4].start, 12 * 60 + 40);
    }

    #[test]
    fn test_overlapping_table_is_rejected() {
        let labels = ["09:00 AM - 10:00 AM", "09:30 AM - 10:30 AM"];
        assert!(parse_interval_labels(&labels).is_err());
    }

    #[test]
    fn test_descending_table_is_rejected() {
        let labels = ["01:00 PM - 02:00 PM", "09:00 AM - 10:00 AM"];
        assert!(parse_interval_labels(&labels).is_err());
    }

    #[test]
    fn test_label_start() {
        assert_eq!(label_start("09:00 AM - 09:50 AM"), "09:00 AM");
    }
}
