pub mod export;
pub mod submission;

pub use export::{export_week_to_file, import_week_from_file, week_to_csv};
pub use submission::{validate_week, MAX_ROOM_LEN, MAX_SUBJECT_LEN};
