use super::period_times::PeriodInterval;
use super::types::DaySchedule;

/// One scheduled period of the current day: its position in the fixed daily
/// sequence plus the time window it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledPeriod {
    pub ordinal: usize,
    pub interval: PeriodInterval,
}

/// What is happening right now, relative to today's scheduled periods.
/// `active` is the period whose window contains the current instant,
/// `upcoming` is the next period to start, and `remaining_seconds` counts
/// down to the end of the active period or the start of the upcoming one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionResult {
    pub active: Option<usize>,
    pub upcoming: Option<usize>,
    pub remaining_seconds: Option<u64>,
}

/// Pairs each scheduled slot of a day with its period time window, keeping
/// ordinal order. Unscheduled slots are dropped here so the resolver only
/// ever sees real classes.
pub fn scheduled_periods(day: &DaySchedule, intervals: &[PeriodInterval]) -> Vec<ScheduledPeriod> {
    day.iter()
        .enumerate()
        .filter(|(_, slot)| slot.is_scheduled())
        .filter_map(|(ordinal, _)| {
            intervals
                .get(ordinal)
                .map(|&interval| ScheduledPeriod { ordinal, interval })
        })
        .collect()
}

/// Resolves the active and upcoming period for the given instant, expressed
/// as seconds since midnight.
///
/// The scan walks the periods in order. A period whose window `[start, end)`
/// contains `now` is active and the entry after it (if any) is upcoming. The
/// first period starting after `now` is upcoming with nothing active. Periods
/// that already ended are skipped. When everything has elapsed, or the input
/// is empty, every field is absent; callers that need to tell those two
/// states apart check whether the input itself was empty.
pub fn resolve(periods: &[ScheduledPeriod], now_seconds: u32) -> ResolutionResult {
    for (position, period) in periods.iter().enumerate() {
        let start = period.interval.start_seconds();
        let end = period.interval.end_seconds();

        if now_seconds >= start && now_seconds < end {
            return ResolutionResult {
                active: Some(period.ordinal),
                upcoming: periods.get(position + 1).map(|next| next.ordinal),
                remaining_seconds: Some(u64::from(end - now_seconds)),
            };
        }

        if now_seconds < start {
            return ResolutionResult {
                active: None,
                upcoming: Some(period.ordinal),
                remaining_seconds: Some(u64::from(start - now_seconds)),
            };
        }
    }

    ResolutionResult::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(ordinal: usize, start: u32, end: u32) -> ScheduledPeriod {
        ScheduledPeriod {
            ordinal,
            interval: PeriodInterval::new(start, end),
        }
    }

    fn at(hours: u32, minutes: u32) -> u32 {
        (hours * 60 + minutes) * 60
    }

    #[test]
    fn test_before_first_period() {
        let periods = [period(0, 9 * 60, 9 * 60 + 40), period(1, 10 * 60, 10 * 60 + 40)];
        let result = resolve(&periods, at(8, 30));
        assert_eq!(result.active, None);
        assert_eq!(result.upcoming, Some(0));
        assert_eq!(result.remaining_seconds, Some(30 * 60));
    }

    #[test]
    fn test_inside_period_with_follower() {
        let periods = [period(0, 9 * 60, 9 * 60 + 40), period(1, 10 * 60, 10 * 60 + 40)];
        let result = resolve(&periods, at(9, 10));
        assert_eq!(result.active, Some(0));
        assert_eq!(result.upcoming, Some(1));
        assert_eq!(result.remaining_seconds, Some(30 * 60));
    }

    #[test]
    fn test_single_period_active_has_no_upcoming() {
        // A lone "Math" class at 09:00-09:40, checked at 09:15
        let periods = [period(0, 9 * 60, 9 * 60 + 40)];
        let result = resolve(&periods, at(9, 15));
        assert_eq!(result.active, Some(0));
        assert_eq!(result.upcoming, None);
        assert_eq!(result.remaining_seconds, Some(1500));
    }

    #[test]
    fn test_gap_between_periods() {
        // Math 09:00-09:40 then Sci 09:45-10:25, checked at 09:42
        let periods = [period(0, 9 * 60, 9 * 60 + 40), period(1, 9 * 60 + 45, 10 * 60 + 25)];
        let result = resolve(&periods, at(9, 42));
        assert_eq!(result.active, None);
        assert_eq!(result.upcoming, Some(1));
        assert_eq!(result.remaining_seconds, Some(180));
    }

    #[test]
    fn test_all_periods_elapsed() {
        let periods = [period(0, 9 * 60, 9 * 60 + 40), period(1, 9 * 60 + 45, 10 * 60 + 25)];
        let result = resolve(&periods, at(10, 30));
        assert_eq!(result, ResolutionResult::default());
    }

    #[test]
    fn test_empty_day() {
        let result = resolve(&[], at(11, 0));
        assert_eq!(result, ResolutionResult::default());
    }

    #[test]
    fn test_start_boundary_is_active() {
        let periods = [period(2, 10 * 60, 10 * 60 + 40)];
        let result = resolve(&periods, at(10, 0));
        assert_eq!(result.active, Some(2));
        assert_eq!(result.upcoming, None);
        assert_eq!(result.remaining_seconds, Some(40 * 60));
    }

    #[test]
    fn test_end_boundary_is_elapsed() {
        let periods = [period(2, 10 * 60, 10 * 60 + 40)];
        let result = resolve(&periods, at(10, 40));
        assert_eq!(result.active, None);
        assert_eq!(result.upcoming, None);
        assert_eq!(result.remaining_seconds, None);
    }

    #[test]
    fn test_end_boundary_rolls_to_next_period() {
        let periods = [period(0, 9 * 60, 9 * 60 + 40), period(1, 9 * 60 + 40, 10 * 60 + 20)];
        let result = resolve(&periods, at(9, 40));
        assert_eq!(result.active, Some(1));
        assert_eq!(result.upcoming, None);
    }

    #[test]
    fn test_ordinals_survive_sparse_days() {
        // Only periods 1 and 4 are scheduled; ordinals must not be renumbered
        let periods = [period(1, 9 * 60 + 50, 10 * 60 + 40), period(4, 12 * 60 + 40, 13 * 60 + 30)];
        let result = resolve(&periods, at(10, 0));
        assert_eq!(result.active, Some(1));
        assert_eq!(result.upcoming, Some(4));

        let later = resolve(&periods, at(11, 0));
        assert_eq!(later.active, None);
        assert_eq!(later.upcoming, Some(4));
    }

    #[test]
    fn test_resolve_is_pure() {
        let periods = [period(0, 9 * 60, 9 * 60 + 40)];
        let first = resolve(&periods, at(9, 20));
        let second = resolve(&periods, at(9, 20));
        assert_eq!(first, second);
    }

    #[test]
    fn test_walks_whole_day() {
        // Drive one day through every state transition
        let periods = [period(0, 9 * 60, 9 * 60 + 50), period(1, 10 * 60, 10 * 60 + 50)];

        let before = resolve(&periods, at(8, 0));
        assert_eq!((before.active, before.upcoming), (None, Some(0)));

        let in_first = resolve(&periods, at(9, 30));
        assert_eq!((in_first.active, in_first.upcoming), (Some(0), Some(1)));

        let between = resolve(&periods, at(9, 55));
        assert_eq!((between.active, between.upcoming), (None, Some(1)));

        let in_last = resolve(&periods, at(10, 30));
        assert_eq!((in_last.active, in_last.upcoming), (Some(1), None));

        let done = resolve(&periods, at(11, 0));
        assert_eq!(done, ResolutionResult::default());
    }

    mod scheduled_periods_tests {
        use super::*;
        use crate::timetable::period_times::period_intervals;
        use crate::timetable::types::PeriodSlot;

        #[test]
        fn test_filters_unscheduled_slots() {
            let intervals = period_intervals().unwrap();
            let day = vec![
                PeriodSlot::new("Math", "B1"),
                PeriodSlot::default(),
                PeriodSlot::new("", "Lab"),
                PeriodSlot::default(),
            ];
            let periods = scheduled_periods(&day, &intervals);
            let ordinals: Vec<usize> = periods.iter().map(|p| p.ordinal).collect();
            assert_eq!(ordinals, vec![0, 2]);
            assert_eq!(periods[0].interval, intervals[0]);
            assert_eq!(periods[1].interval, intervals[2]);
        }

        #[test]
        fn test_empty_day_produces_no_periods() {
            let intervals = period_intervals().unwrap();
            let day = vec![PeriodSlot::default(); 7];
            assert!(scheduled_periods(&day, &intervals).is_empty());
        }
    }
}
