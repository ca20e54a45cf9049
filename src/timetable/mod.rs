pub mod period_times;
pub mod resolver;
pub mod types;

pub use period_times::{
    period_intervals, PeriodInterval, BREAK_AFTER_PERIOD, BREAK_LABEL, PERIOD_TIME_LABELS,
};
pub use resolver::{resolve, scheduled_periods, ResolutionResult, ScheduledPeriod};
pub use types::{DaySchedule, PeriodSlot, WeekSchedule, Weekday, DAYS_IN_WEEK, PERIODS_PER_DAY};
