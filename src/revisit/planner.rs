use chrono::NaiveDate;

use crate::geometry::GeoPoint;
use crate::revisit::calculator::RevisitCalculator;
use crate::revisit::error::RevisitError;
use crate::revisit::grid::OrbitGrid;
use crate::revisit::types::{PassMode, RevisitOutcome};

// daytime imaging happens on descending passes only
const PLANNING_MODE: PassMode = PassMode::Descending;

/// Resolves a location to its descending grid cell and predicts the next
/// revisits of the cell's path. Holds only read-only reference data.
pub struct RevisitPlanner {
    grid: OrbitGrid,
    calculator: RevisitCalculator,
}

impl RevisitPlanner {
    pub fn new(grid: OrbitGrid, calculator: RevisitCalculator) -> Self {
        Self { grid, calculator }
    }

    pub fn plan(&self, point: GeoPoint, as_of: NaiveDate) -> RevisitOutcome {
        let Some(cell) = self.grid.locate(point, PLANNING_MODE) else {
            log::debug!("Point {:?} outside the {:?} grid", point, PLANNING_MODE);
            return RevisitOutcome::OutsideGrid;
        };

        match self.calculator.predict(cell.path, as_of) {
            Ok(Some(prediction)) => RevisitOutcome::Scheduled {
                path: cell.path,
                row: cell.row,
                prediction,
            },
            Ok(None) => {
                log::warn!("Path {} is missing from the revisit tables", cell.path);
                RevisitOutcome::PathNotScheduled(cell.path)
            }
            Err(RevisitError::DateOutOfRange(date)) => RevisitOutcome::DateOutOfRange(date),
            Err(e) => {
                log::warn!("Revisit prediction for path {} failed: {}", cell.path, e);
                RevisitOutcome::DateOutOfRange(as_of)
            }
        }
    }
}
