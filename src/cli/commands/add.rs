use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ItineraryService;
use crate::errors::AppResult;
use crate::models::Budget;
use crate::ui::messages::success;
use crate::utils::date::parse_date;

/// Add a trip together with its generated days.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        location,
        budget,
        start,
        end,
    } = cmd
    {
        //
        // 1. Parse and validate everything before opening the DB
        //
        let start = parse_date(start, &cfg.date_format)?;
        let end = parse_date(end, &cfg.date_format)?;
        let budget: Budget = budget.parse()?;

        //
        // 2. Create trip + days atomically
        //
        let mut service = ItineraryService::open(&cfg.database)?;
        let trip_id = service.add_trip(location, budget, start, end)?;

        success(format!(
            "Added {} trip! (id {}, {} days)",
            location,
            trip_id,
            (end - start).num_days() + 1
        ));
    }

    Ok(())
}
