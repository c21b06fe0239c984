use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ItineraryService;
use crate::errors::AppResult;
use crate::ui::render::render_day_table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Days { trip } = cmd {
        let service = ItineraryService::open(&cfg.database)?;
        // fail with "no trip" rather than printing an empty table
        let (trip, days) = service.trip_itinerary(*trip)?;

        println!("{} ({} days)", trip.location, days.len());
        print!("{}", render_day_table(&days, cfg));
    }
    Ok(())
}
