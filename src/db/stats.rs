use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) ROW COUNTS
    //
    let trips: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM trips", [], |row| row.get(0))?;
    let days: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM details", [], |row| row.get(0))?;
    let planned: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM details
         WHERE day_location <> '' OR activities <> '' OR restaurants <> '' OR hotel <> ''",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Trips:{} {}{}{}", CYAN, RESET, GREEN, trips, RESET);
    println!(
        "{}• Days:{} {}{}{} ({} with details)",
        CYAN, RESET, GREEN, days, RESET, planned
    );

    //
    // 3) DATE RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row("SELECT MIN(start_date) FROM trips", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();
    let last: Option<String> = pool
        .conn
        .query_row("SELECT MAX(end_date) FROM trips", [], |row| {
            row.get::<_, Option<String>>(0)
        })
        .optional()?
        .flatten();

    match (first, last) {
        (Some(f), Some(l)) => println!("{}• Range:{} {} → {}", CYAN, RESET, f, l),
        _ => println!("{}• Range:{} {}(no trips yet){}", CYAN, RESET, GREY, RESET),
    }

    println!();
    Ok(())
}
