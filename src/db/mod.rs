pub mod days;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod stats;
pub mod trips;

/// Storage format of every date column.
pub const DATE_FMT: &str = "%Y-%m-%d";
