//! Itinerary service: the only entry point the frontend talks to.

use crate::core::expand::expand_days;
use crate::db::days::{create_days, get_day, list_days, update_day};
use crate::db::log::write_log;
use crate::db::pool::DbPool;
use crate::db::trips::{create_trip, get_trip, list_trips};
use crate::errors::{AppError, AppResult};
use crate::models::{Budget, Day, Trip};
use crate::ui::messages::warning;
use chrono::{Datelike, NaiveDate};

pub struct ItineraryService {
    pool: DbPool,
}

impl ItineraryService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open (and migrate) the database at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::new(path)?))
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Create a trip together with one day row per calendar day of its range.
    ///
    /// Everything happens inside one transaction: on any error the
    /// transaction guard is dropped uncommitted and rolls back, so readers
    /// see either the trip with its full day set or nothing at all.
    pub fn add_trip(
        &mut self,
        location: &str,
        budget: Budget,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> AppResult<i64> {
        // dates are stored as YYYY-MM-DD text: only 4-digit years sort correctly
        let storable = |d: NaiveDate| (0..=9999).contains(&d.year());
        if start_date > end_date || !storable(start_date) || !storable(end_date) {
            return Err(AppError::InvalidDateRange {
                start: start_date.to_string(),
                end: end_date.to_string(),
            });
        }

        self.pool.with_conn(|conn| {
            let tx = conn
                .transaction()
                .map_err(|e| AppError::storage("add_trip", location, e))?;

            let trip_id = create_trip(&tx, location, budget, start_date, end_date)?;
            let days = expand_days(trip_id, start_date, end_date)?;
            create_days(&tx, &days)?;

            write_log(
                &tx,
                "add",
                &format!("trip {}", trip_id),
                &format!(
                    "{} ({} → {}, {} days, budget {})",
                    location,
                    start_date,
                    end_date,
                    days.len(),
                    budget
                ),
            )?;

            tx.commit()
                .map_err(|e| AppError::storage("add_trip", location, e))?;

            Ok(trip_id)
        })
    }

    pub fn list_trips(&self) -> AppResult<Vec<Trip>> {
        list_trips(&self.pool.conn)
    }

    pub fn list_days(&self, trip_id: i64) -> AppResult<Vec<Day>> {
        list_days(&self.pool.conn, trip_id)
    }

    /// Persist the four detail fields of `day`.
    pub fn update_details(&self, day: &Day) -> AppResult<()> {
        update_day(&self.pool.conn, day)?;

        // audit trail is best effort once the update itself went through
        if let Err(e) = write_log(
            &self.pool.conn,
            "edit",
            &format!("day {}", day.id),
            &format!("details updated for {} (trip {})", day.date, day.trip_id),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(())
    }

    pub fn get_trip(&self, trip_id: i64) -> AppResult<Trip> {
        get_trip(&self.pool.conn, trip_id)
    }

    pub fn get_day(&self, day_id: i64) -> AppResult<Day> {
        get_day(&self.pool.conn, day_id)
    }

    /// A trip and its days, ready for rendering.
    pub fn trip_itinerary(&self, trip_id: i64) -> AppResult<(Trip, Vec<Day>)> {
        let trip = self.get_trip(trip_id)?;
        let days = self.list_days(trip_id)?;
        Ok((trip, days))
    }
}
