//! Day store: owns the `details` table (one row per trip day).

use crate::db::trips::date_column;
use crate::errors::{AppError, AppResult};
use crate::models::Day;
use rusqlite::{Connection, Row, params};

const INSERT_DAY: &str = "INSERT INTO details (date, trip_id) VALUES (?1, ?2)";

const SELECT_DAYS: &str = "SELECT id, date, day_location, activities, restaurants, hotel, trip_id
                           FROM details
                           WHERE trip_id = ?1
                           ORDER BY date ASC";

const SELECT_DAY: &str = "SELECT id, date, day_location, activities, restaurants, hotel, trip_id
                          FROM details
                          WHERE id = ?1";

const UPDATE_DAY: &str = "UPDATE details
                          SET day_location = ?1, activities = ?2, restaurants = ?3, hotel = ?4
                          WHERE id = ?5";

pub fn map_day(row: &Row) -> rusqlite::Result<Day> {
    Ok(Day {
        id: row.get(0)?,
        date: date_column(row, 1)?,
        location: row.get(2)?,
        activities: row.get(3)?,
        restaurants: row.get(4)?,
        hotel: row.get(5)?,
        trip_id: row.get(6)?,
    })
}

/// Insert a batch of generated days. Only date and trip id are written;
/// the detail columns start from their empty defaults.
///
/// Not atomic on its own: call it through a transaction (see
/// `ItineraryService::add_trip`) to get all-or-nothing behaviour.
pub fn create_days(conn: &Connection, days: &[Day]) -> AppResult<()> {
    let mut stmt = conn
        .prepare_cached(INSERT_DAY)
        .map_err(|e| AppError::storage("create_days", "batch", e))?;

    for day in days {
        stmt.execute(params![day.date_str(), day.trip_id])
            .map_err(|e| {
                AppError::storage(
                    "create_days",
                    format!("trip {} / {}", day.trip_id, day.date_str()),
                    e,
                )
            })?;
    }

    Ok(())
}

/// Days of a trip, always in ascending date order.
pub fn list_days(conn: &Connection, trip_id: i64) -> AppResult<Vec<Day>> {
    let read = || -> rusqlite::Result<Vec<Day>> {
        let mut stmt = conn.prepare_cached(SELECT_DAYS)?;
        let rows = stmt.query_map([trip_id], map_day)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    };

    read().map_err(|e| AppError::storage("list_days", format!("trip {}", trip_id), e))
}

pub fn get_day(conn: &Connection, day_id: i64) -> AppResult<Day> {
    match conn.query_row(SELECT_DAY, [day_id], map_day) {
        Ok(day) => Ok(day),
        Err(rusqlite::Error::QueryReturnedNoRows) => Err(AppError::NotFound {
            entity: "day",
            id: day_id,
        }),
        Err(e) => Err(AppError::storage("get_day", day_id, e)),
    }
}

/// Overwrite the four detail fields of the row identified by `day.id`.
/// Date and trip id are never touched.
pub fn update_day(conn: &Connection, day: &Day) -> AppResult<()> {
    let changed = conn
        .execute(
            UPDATE_DAY,
            params![
                day.location,
                day.activities,
                day.restaurants,
                day.hotel,
                day.id
            ],
        )
        .map_err(|e| AppError::storage("update_day", day.id, e))?;

    if changed == 0 {
        return Err(AppError::NotFound {
            entity: "day",
            id: day.id,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::pool::DbPool;
    use crate::db::trips::create_trip;
    use crate::models::Budget;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn seeded() -> (DbPool, i64) {
        let pool = DbPool::in_memory().unwrap();
        let trip_id = create_trip(
            &pool.conn,
            "Lisbon",
            Budget::from_cents(50_000),
            d(2024, 3, 1),
            d(2024, 3, 3),
        )
        .unwrap();
        (pool, trip_id)
    }

    #[test]
    fn list_days_sorts_by_date_regardless_of_insert_order() {
        let (pool, trip_id) = seeded();
        let days = vec![
            Day::new(trip_id, d(2024, 3, 3)),
            Day::new(trip_id, d(2024, 3, 1)),
            Day::new(trip_id, d(2024, 3, 2)),
        ];
        create_days(&pool.conn, &days).unwrap();

        let dates: Vec<_> = list_days(&pool.conn, trip_id)
            .unwrap()
            .into_iter()
            .map(|d| d.date)
            .collect();
        assert_eq!(dates, [d(2024, 3, 1), d(2024, 3, 2), d(2024, 3, 3)]);
    }

    #[test]
    fn new_days_have_empty_details() {
        let (pool, trip_id) = seeded();
        create_days(&pool.conn, &[Day::new(trip_id, d(2024, 3, 1))]).unwrap();

        let day = &list_days(&pool.conn, trip_id).unwrap()[0];
        assert!(day.id > 0);
        assert!(day.is_blank());
    }

    #[test]
    fn duplicate_date_is_rejected() {
        let (pool, trip_id) = seeded();
        let dup = [Day::new(trip_id, d(2024, 3, 1)), Day::new(trip_id, d(2024, 3, 1))];
        let err = create_days(&pool.conn, &dup).unwrap_err();
        assert!(matches!(err, AppError::Storage { operation: "create_days", .. }));
    }

    #[test]
    fn unknown_trip_violates_foreign_key() {
        let (pool, _) = seeded();
        let err = create_days(&pool.conn, &[Day::new(999, d(2024, 3, 1))]).unwrap_err();
        assert!(matches!(err, AppError::Storage { .. }));
    }

    #[test]
    fn update_day_only_changes_details() {
        let (pool, trip_id) = seeded();
        create_days(&pool.conn, &[Day::new(trip_id, d(2024, 3, 2))]).unwrap();
        let mut day = list_days(&pool.conn, trip_id).unwrap().remove(0);

        day.location = "Belem".into();
        day.activities = "Tower".into();
        day.restaurants = "Pasteis".into();
        day.hotel = "Hotel Z".into();
        // a tampered date or trip id must not leak into the row
        let mut sent = day.clone();
        sent.date = d(2030, 1, 1);
        sent.trip_id = 777;
        update_day(&pool.conn, &sent).unwrap();

        let stored = get_day(&pool.conn, day.id).unwrap();
        assert_eq!(stored, day);
    }

    #[test]
    fn update_missing_day_is_not_found() {
        let (pool, trip_id) = seeded();
        let mut ghost = Day::new(trip_id, d(2024, 3, 1));
        ghost.id = 12345;
        let err = update_day(&pool.conn, &ghost).unwrap_err();
        assert!(matches!(err, AppError::NotFound { entity: "day", id: 12345 }));
    }
}
