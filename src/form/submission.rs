use crate::timetable::types::{DaySchedule, Weekday, DAYS_IN_WEEK};

/// Subject labels are kept short so the grid stays readable
pub const MAX_SUBJECT_LEN: usize = 10;

/// Room labels are short codes like "B12"
pub const MAX_ROOM_LEN: usize = 5;

/// Validates a timetable submitted from the edit form. The payload must be a
/// full week in day order, each day carrying exactly its expected number of
/// periods, with subject and room labels within their length caps.
pub fn validate_week(days: &[DaySchedule]) -> Result<(), String> {
    // Validate the week shape
    if days.len() != DAYS_IN_WEEK {
        return Err(format!(
            "Expected {} days, got {}",
            DAYS_IN_WEEK,
            days.len()
        ));
    }

    for (weekday, day) in Weekday::ALL.into_iter().zip(days) {
        let expected = weekday.period_count();
        if day.len() != expected {
            return Err(format!(
                "{} must have {} periods, got {}",
                weekday.name(),
                expected,
                day.len()
            ));
        }

        // Validate each cell's field lengths
        for (ordinal, slot) in day.iter().enumerate() {
            if slot.subject.chars().count() > MAX_SUBJECT_LEN {
                return Err(format!(
                    "Subject in {} period {} is longer than {} characters",
                    weekday.name(),
                    ordinal + 1,
                    MAX_SUBJECT_LEN
                ));
            }
            if slot.room.chars().count() > MAX_ROOM_LEN {
                return Err(format!(
                    "Room in {} period {} is longer than {} characters",
                    weekday.name(),
                    ordinal + 1,
                    MAX_ROOM_LEN
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timetable::types::{PeriodSlot, WeekSchedule};

    fn valid_days() -> Vec<DaySchedule> {
        WeekSchedule::empty().days().to_vec()
    }

    #[test]
    fn test_empty_week_is_valid() {
        assert!(validate_week(&valid_days()).is_ok());
    }

    #[test]
    fn test_filled_week_is_valid() {
        let mut days = valid_days();
        days[1][0] = PeriodSlot::new("Math", "B12");
        days[6][3] = PeriodSlot::new("Sport", "Gym");
        assert!(validate_week(&days).is_ok());
    }

    #[test]
    fn test_rejects_wrong_day_count() {
        let mut days = valid_days();
        days.pop();
        assert!(validate_week(&days).is_err());
    }

    #[test]
    fn test_rejects_wrong_period_count() {
        let mut days = valid_days();
        days[2].push(PeriodSlot::default());
        let err = validate_week(&days).unwrap_err();
        assert!(err.contains("Tuesday"), "unexpected message: {}", err);
    }

    #[test]
    fn test_rejects_short_saturday_with_seven_periods() {
        let mut days = valid_days();
        days[6] = vec![PeriodSlot::default(); 7];
        assert!(validate_week(&days).is_err());
    }

    #[test]
    fn test_rejects_long_subject() {
        let mut days = valid_days();
        days[0][0] = PeriodSlot::new("Mathematics!", "B1");
        assert!(validate_week(&days).is_err());
    }

    #[test]
    fn test_rejects_long_room() {
        let mut days = valid_days();
        days[0][0] = PeriodSlot::new("Math", "Block-12");
        assert!(validate_week(&days).is_err());
    }

    #[test]
    fn test_length_caps_count_characters_not_bytes() {
        let mut days = valid_days();
        days[0][0] = PeriodSlot::new("Früh", "Ü5");
        assert!(validate_week(&days).is_ok());
    }
}
