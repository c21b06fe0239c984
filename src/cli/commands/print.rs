use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ItineraryService;
use crate::errors::AppResult;
use crate::ui::render::render_itinerary;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Print { trip } = cmd {
        let service = ItineraryService::open(&cfg.database)?;
        let (trip, days) = service.trip_itinerary(*trip)?;
        print!("{}", render_itinerary(&trip, &days, cfg));
    }
    Ok(())
}
