use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use crate::timetable::types::{DaySchedule, WeekSchedule, DAYS_IN_WEEK};

/// Default file name of the persisted week record
pub const SCHEDULE_FILE: &str = "timetable.json";

/// Where the week schedule lives. `load` never fails: missing or unreadable
/// data comes back as the empty default week. `save` replaces the whole
/// record in one write.
pub trait ScheduleStore: Send + Sync {
    fn load(&self) -> WeekSchedule;
    fn save(&self, week: &WeekSchedule) -> Result<(), Box<dyn Error>>;
}

/// Stores the week schedule as a single JSON file
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFileStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn default_path() -> Self {
        JsonFileStore::new(SCHEDULE_FILE)
    }
}

impl ScheduleStore for JsonFileStore {
    fn load(&self) -> WeekSchedule {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(_) => return WeekSchedule::empty(),
        };

        // A record that no longer parses, or has the wrong number of days,
        // is discarded rather than surfaced as an error
        match serde_json::from_str::<Vec<DaySchedule>>(&contents) {
            Ok(days) if days.len() == DAYS_IN_WEEK => WeekSchedule::from_days(days),
            Ok(days) => {
                log::warn!(
                    "Discarding stored timetable with {} days (expected {})",
                    days.len(),
                    DAYS_IN_WEEK
                );
                WeekSchedule::empty()
            }
            Err(err) => {
                log::warn!("Discarding unparseable stored timetable: {}", err);
                WeekSchedule::empty()
            }
        }
    }

    fn save(&self, week: &WeekSchedule) -> Result<(), Box<dyn Error>> {
        let json = serde_json::to_string_pretty(week)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
