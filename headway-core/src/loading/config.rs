use std::path::PathBuf;

use chrono::NaiveDate;

/// Where to read a schedule feed from, and which service day to realize.
///
/// Schedule times are clock times; anchoring them to a calendar day turns
/// them into the absolute instants the routing model works with. Times past
/// 24:00:00 roll into the following day rather than wrapping.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Directory holding `stops.txt`, `trips.txt` and `stop_times.txt`
    pub dir: PathBuf,
    /// Calendar day the schedule is anchored to
    pub service_date: NaiveDate,
}

impl FeedConfig {
    pub fn new(dir: impl Into<PathBuf>, service_date: NaiveDate) -> Self {
        Self {
            dir: dir.into(),
            service_date,
        }
    }
}
