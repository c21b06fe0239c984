//! Trip store: owns the `trips` table.

use crate::db::DATE_FMT;
use crate::errors::{AppError, AppResult};
use crate::models::{Budget, Trip};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Row, params};

const INSERT_TRIP: &str = "INSERT INTO trips (trip_name, budget, start_date, end_date)
                           VALUES (?1, ?2, ?3, ?4)";

const SELECT_TRIPS: &str = "SELECT id, trip_name, budget, start_date, end_date
                            FROM trips
                            ORDER BY id ASC";

const SELECT_TRIP: &str = "SELECT id, trip_name, budget, start_date, end_date
                           FROM trips
                           WHERE id = ?1";

/// Parse a stored `YYYY-MM-DD` column, reporting bad data as a conversion failure.
pub(crate) fn date_column(row: &Row, idx: usize) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(idx)?;
    NaiveDate::parse_from_str(&raw, DATE_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.clone())),
        )
    })
}

pub fn map_trip(row: &Row) -> rusqlite::Result<Trip> {
    Ok(Trip {
        id: row.get(0)?,
        location: row.get(1)?,
        budget: Budget::from_db_value(row.get(2)?),
        start_date: date_column(row, 3)?,
        end_date: date_column(row, 4)?,
    })
}

/// Insert a trip row and return the id SQLite assigned to it.
pub fn create_trip(
    conn: &Connection,
    location: &str,
    budget: Budget,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> AppResult<i64> {
    conn.execute(
        INSERT_TRIP,
        params![
            location,
            budget.to_db_value(),
            start_date.format(DATE_FMT).to_string(),
            end_date.format(DATE_FMT).to_string(),
        ],
    )
    .map_err(|e| AppError::storage("create_trip", location, e))?;

    Ok(conn.last_insert_rowid())
}

/// All trips, in insertion order.
pub fn list_trips(conn: &Connection) -> AppResult<Vec<Trip>> {
    let read = || -> rusqlite::Result<Vec<Trip>> {
        let mut stmt = conn.prepare_cached(SELECT_TRIPS)?;
        let rows = stmt.query_map([], map_trip)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    };

    read().map_err(|e| AppError::storage("list_trips", "all", e))
}

pub fn get_trip(conn: &Connection, trip_id: i64) -> AppResult<Trip> {
    conn.query_row(SELECT_TRIP, [trip_id], map_trip)
        .optional()
        .map_err(|e| AppError::storage("get_trip", trip_id, e))?
        .ok_or(AppError::NotFound {
            entity: "trip",
            id: trip_id,
        })
}
