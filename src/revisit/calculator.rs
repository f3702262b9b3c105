use chrono::{Duration, NaiveDate};

use crate::revisit::error::RevisitError;
use crate::revisit::tables::{Satellite, SlotTables, CYCLE_SLOTS};
use crate::revisit::types::RevisitPrediction;

const CYCLE_DAYS: i64 = CYCLE_SLOTS as i64;

/// Start of the reference cycle: day 1 of both slot tables.
pub fn default_cycle_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 4).unwrap_or_default()
}

pub struct RevisitCalculator {
    tables: SlotTables,
    anchor: NaiveDate,
}

impl RevisitCalculator {
    pub fn new(anchor: NaiveDate) -> Self {
        Self {
            tables: SlotTables::new(),
            anchor,
        }
    }

    /// First cycle start on or after `as_of`; always less than 16 days away.
    /// `None` when that date is past the last representable calendar date.
    pub fn cycle_start(&self, as_of: NaiveDate) -> Option<NaiveDate> {
        let elapsed = (as_of - self.anchor).num_days();
        let mut cycles = elapsed.div_euclid(CYCLE_DAYS);
        if elapsed.rem_euclid(CYCLE_DAYS) != 0 {
            cycles += 1;
        }
        self.anchor
            .checked_add_signed(Duration::days(cycles * CYCLE_DAYS))
    }

    /// Next imaging dates of `path`, or `Ok(None)` if either satellite's
    /// table does not list it.
    pub fn predict(
        &self,
        path: u32,
        as_of: NaiveDate,
    ) -> Result<Option<RevisitPrediction>, RevisitError> {
        let (Some(day_l8), Some(day_l9)) = (
            self.tables.slot(Satellite::Landsat8, path),
            self.tables.slot(Satellite::Landsat9, path),
        ) else {
            return Ok(None);
        };

        let out_of_range = || RevisitError::DateOutOfRange(as_of);
        let start = self.cycle_start(as_of).ok_or_else(out_of_range)?;
        let date_for = |day: u32| {
            start
                .checked_add_signed(Duration::days(i64::from(day) - 1))
                .ok_or_else(out_of_range)
        };

        Ok(Some(RevisitPrediction {
            date_landsat_8: date_for(day_l8)?,
            date_landsat_9: date_for(day_l9)?,
        }))
    }
}

impl Default for RevisitCalculator {
    fn default() -> Self {
        Self::new(default_cycle_anchor())
    }
}
