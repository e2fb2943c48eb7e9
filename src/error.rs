//! Umbrella error for callers driving both renderers.

use plansmith_export::ExportError;
use plansmith_floorplan::FloorPlanError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Floor plan error: {0}")]
    FloorPlan(#[from] FloorPlanError),
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
