use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Transaction};

/// A named, apply-once schema change.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20240601_0001_create_trips",
        description: "Created trips table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS trips (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            trip_name   TEXT NOT NULL,
            budget      REAL NOT NULL DEFAULT 0,
            start_date  TEXT NOT NULL,
            end_date    TEXT NOT NULL,
            CHECK (start_date <= end_date)
        );
        "#,
    },
    Migration {
        version: "20240601_0002_create_details",
        description: "Created details table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS details (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            date          TEXT NOT NULL,
            day_location  TEXT NOT NULL DEFAULT '',
            activities    TEXT NOT NULL DEFAULT '',
            restaurants   TEXT NOT NULL DEFAULT '',
            hotel         TEXT NOT NULL DEFAULT '',
            trip_id       INTEGER NOT NULL REFERENCES trips(id)
        );

        CREATE INDEX IF NOT EXISTS idx_details_trip ON details(trip_id);
        "#,
    },
    Migration {
        version: "20240601_0003_details_trip_date_unique",
        description: "Added unique (trip_id, date) index on details",
        sql: r#"
        CREATE UNIQUE INDEX IF NOT EXISTS idx_details_trip_date ON details(trip_id, date);
        "#,
    },
];

/// Ensure that the `log` table exists: it doubles as the migration ledger.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(tx: &Transaction, m: &Migration) -> AppResult<()> {
    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;
    Ok(())
}

/// Names of the migrations not yet recorded in `log`.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations, each in its own transaction.
///
/// Invoked by `DbPool::new()` and `db::initialize::init_db()`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        // unchecked: we only hold a shared reference, nothing else is in flight
        let tx = conn.unchecked_transaction()?;
        apply(&tx, m)?;
        tx.commit()?;

        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(())
}
