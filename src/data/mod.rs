//! Data module - CSV loading and cleaning

mod cleaner;
mod loader;
pub mod model;

pub use cleaner::{clean, CleanError, DATE_FORMAT};
pub use loader::{LoaderError, WorkoutLoader};
pub use model::{CleanTable, RawRecord, RawTable, WorkoutRecord, COLUMN_NAMES, DURATION_SENTINEL};
