use crate::db::DATE_FMT;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Day {
    pub id: i64,             // ⇔ details.id (0 until persisted)
    pub date: NaiveDate,     // ⇔ details.date (TEXT "YYYY-MM-DD")
    pub location: String,    // ⇔ details.day_location
    pub activities: String,  // ⇔ details.activities
    pub restaurants: String, // ⇔ details.restaurants
    pub hotel: String,       // ⇔ details.hotel
    pub trip_id: i64,        // ⇔ details.trip_id → trips.id
}

impl Day {
    /// A not yet persisted day with empty details.
    pub fn new(trip_id: i64, date: NaiveDate) -> Self {
        Self {
            id: 0,
            date,
            location: String::new(),
            activities: String::new(),
            restaurants: String::new(),
            hotel: String::new(),
            trip_id,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format(DATE_FMT).to_string()
    }

    /// True while none of the four detail fields has been filled in.
    pub fn is_blank(&self) -> bool {
        [
            &self.location,
            &self.activities,
            &self.restaurants,
            &self.hotel,
        ]
        .iter()
        .all(|f| f.trim().is_empty())
    }
}
