use serde::{Deserialize, Serialize};

/// Number of days in a week schedule (Sunday through Saturday)
pub const DAYS_IN_WEEK: usize = 7;

/// Number of periods on a regular school day
pub const PERIODS_PER_DAY: usize = 7;

/// Saturday runs a shortened day
pub const SATURDAY_PERIODS: usize = 4;

/// Days of the week with an explicit numbering: Sunday = 0 through Saturday = 6.
/// All weekday indexing in the app goes through this enum instead of relying on
/// whatever convention a date library happens to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    pub const ALL: [Weekday; DAYS_IN_WEEK] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Index into a week schedule (Sunday = 0)
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Weekday> {
        Weekday::ALL.get(index).copied()
    }

    /// Maps a chrono weekday onto our Sunday = 0 numbering
    pub fn from_chrono(day: chrono::Weekday) -> Weekday {
        // num_days_from_sunday is already 0 for Sunday .. 6 for Saturday
        Weekday::ALL[day.num_days_from_sunday() as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// How many periods this day has (Saturday is shortened)
    pub fn period_count(self) -> usize {
        if self == Weekday::Saturday {
            SATURDAY_PERIODS
        } else {
            PERIODS_PER_DAY
        }
    }
}

/// One cell of the timetable: a subject taught in a room. Both fields may be
/// empty, which means nothing is scheduled in that period.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSlot {
    pub subject: String,
    pub room: String,
}

impl PeriodSlot {
    pub fn new(subject: &str, room: &str) -> Self {
        PeriodSlot {
            subject: subject.to_string(),
            room: room.to_string(),
        }
    }

    /// A slot counts as scheduled when either field is filled in
    pub fn is_scheduled(&self) -> bool {
        !self.subject.is_empty() || !self.room.is_empty()
    }
}

/// The ordered periods of a single weekday
pub type DaySchedule = Vec<PeriodSlot>;

/// A full week of day schedules, indexed by [`Weekday`]. Serializes as a plain
/// array-of-arrays of slots, which is also the persisted record format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeekSchedule {
    days: Vec<DaySchedule>,
}

impl WeekSchedule {
    /// A week with every period unscheduled
    pub fn empty() -> Self {
        let days = Weekday::ALL
            .iter()
            .map(|day| vec![PeriodSlot::default(); day.period_count()])
            .collect();
        WeekSchedule { days }
    }

    /// Builds a week from raw day rows, padding or truncating each day to its
    /// expected period count so the grid always has a predictable shape.
    pub fn from_days(days: Vec<DaySchedule>) -> Self {
        let mut week = WeekSchedule { days };
        week.normalize();
        week
    }

    fn normalize(&mut self) {
        self.days.resize(DAYS_IN_WEEK, Vec::new());
        for (index, day) in self.days.iter_mut().enumerate() {
            let expected = Weekday::ALL[index].period_count();
            day.resize(expected, PeriodSlot::default());
        }
    }

    pub fn day(&self, day: Weekday) -> &DaySchedule {
        &self.days[day.index()]
    }

    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    /// True when no slot anywhere in the week is scheduled
    pub fn is_empty(&self) -> bool {
        self.days
            .iter()
            .all(|day| day.iter().all(|slot| !slot.is_scheduled()))
    }
}

impl Default for WeekSchedule {
    fn default() -> Self {
        WeekSchedule::empty()
    }
}
