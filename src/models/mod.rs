pub mod budget;
pub mod day;
pub mod trip;

pub use budget::Budget;
pub use day::Day;
pub use trip::Trip;
