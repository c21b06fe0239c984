use super::budget::Budget;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trip {
    pub id: i64,               // ⇔ trips.id
    pub location: String,      // ⇔ trips.trip_name
    pub start_date: NaiveDate, // ⇔ trips.start_date (TEXT "YYYY-MM-DD")
    pub end_date: NaiveDate,   // ⇔ trips.end_date (TEXT "YYYY-MM-DD")
    pub budget: Budget,        // ⇔ trips.budget (REAL)
}

impl Trip {
    /// Number of calendar days covered by the trip, both ends included.
    pub fn length_in_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }
}
