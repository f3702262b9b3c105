use chrono::NaiveDate;

/// Orbit direction of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassMode {
    Descending,
    Ascending,
}

impl PassMode {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "D" => Some(PassMode::Descending),
            "A" => Some(PassMode::Ascending),
            _ => None,
        }
    }
}

/// Next imaging date of a path for each satellite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevisitPrediction {
    pub date_landsat_8: NaiveDate,
    pub date_landsat_9: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevisitOutcome {
    Scheduled {
        path: u32,
        row: u32,
        prediction: RevisitPrediction,
    },
    /// No descending grid cell contains the point.
    OutsideGrid,
    /// The point's path is missing from a satellite's slot table.
    PathNotScheduled(u32),
    /// The next revisit falls past the last representable calendar date.
    DateOutOfRange(NaiveDate),
}
