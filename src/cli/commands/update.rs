use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ItineraryService;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::validate_detail;

/// Overwrite the details of one day; fields not given on the command line keep their value.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update {
        day,
        location,
        activities,
        restaurants,
        hotel,
    } = cmd
    {
        let fields = [
            ("Location", location),
            ("Activities", activities),
            ("Restaurants", restaurants),
            ("Hotel", hotel),
        ];
        for (label, value) in &fields {
            if let Some(v) = value {
                validate_detail(label, v, cfg.max_detail_len)?;
            }
        }

        let service = ItineraryService::open(&cfg.database)?;
        let mut current = service.get_day(*day)?;

        if fields.iter().all(|(_, v)| v.is_none()) {
            info(format!("Nothing to update for day {}", day));
            return Ok(());
        }

        if let Some(v) = location {
            current.location = v.clone();
        }
        if let Some(v) = activities {
            current.activities = v.clone();
        }
        if let Some(v) = restaurants {
            current.restaurants = v.clone();
        }
        if let Some(v) = hotel {
            current.hotel = v.clone();
        }

        service.update_details(&current)?;
        success(format!("Updated details for {}", current.date));
    }

    Ok(())
}
