use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};
use rusqlite::Connection;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        //
        // 1) MIGRATE (raw connection: DbPool would already migrate on open)
        //
        if *migrate {
            let conn = Connection::open(&cfg.database)?;
            let pending = pending_migrations(&conn)?;
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            if pending.is_empty() {
                println!("Schema already up to date.");
            } else {
                run_pending_migrations(&conn)?;
            }
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        // the remaining actions share one connection
        if !(*info || *check || *vacuum) {
            return Ok(());
        }
        let pool = DbPool::new(&cfg.database)?;

        //
        // 2) INFO
        //
        if *info {
            stats::print_db_info(&pool, &cfg.database)?;
        }

        //
        // 3) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            let mut fk_stmt = pool.conn.prepare("PRAGMA foreign_key_check;")?;
            let orphans = fk_stmt.query_map([], |_| Ok(()))?.count();

            if integrity == "ok" && orphans == 0 {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!(
                    "{}✘ Integrity check failed:{} {} ({} foreign key violations)\n",
                    RED, RESET, integrity, orphans
                );
            }
        }

        //
        // 4) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
