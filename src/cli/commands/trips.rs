use crate::config::Config;
use crate::core::ItineraryService;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::ui::render::render_trip_table;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let service = ItineraryService::open(&cfg.database)?;
    let trips = service.list_trips()?;

    if trips.is_empty() {
        info("No trips yet. Create one with `tripplan add`.");
        return Ok(());
    }

    print!("{}", render_trip_table(&trips, cfg));
    Ok(())
}
