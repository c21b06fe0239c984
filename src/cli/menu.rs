//! Interactive menu loop.

use crate::cli::prompt::{
    Line, LineSource, ask_budget, ask_date, ask_detail, ask_text, select,
};
use crate::config::Config;
use crate::core::ItineraryService;
use crate::errors::{AppError, AppResult};
use crate::models::Trip;
use crate::ui::messages::{error, header, info, success, warning};
use crate::ui::render::{day_label, render_itinerary};
use crate::utils::colors::{CYAN, RESET};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    AddTrip,
    AddDetails,
    PrintItinerary,
    Quit,
}

const ACTIONS: &[(Action, &str)] = &[
    (Action::AddTrip, "Add Trip"),
    (Action::AddDetails, "Add fun details to your trip"),
    (Action::PrintItinerary, "Print out your trip itinerary"),
    (Action::Quit, "Quit"),
];

pub struct Menu<'a> {
    service: &'a mut ItineraryService,
    cfg: &'a Config,
    input: &'a mut dyn LineSource,
}

impl<'a> Menu<'a> {
    pub fn new(
        service: &'a mut ItineraryService,
        cfg: &'a Config,
        input: &'a mut dyn LineSource,
    ) -> Self {
        Self {
            service,
            cfg,
            input,
        }
    }

    /// Run until the user quits or input ends.
    ///
    /// A failing action is reported and the menu comes back; only a broken
    /// prompt ends the session with an error.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            println!();
            header("Select Action");
            for (i, (_, label)) in ACTIONS.iter().enumerate() {
                println!("  {}{}){} {}", CYAN, i + 1, RESET, label);
            }

            let choice = match self.input.read_line("> ")? {
                Line::Text(t) => t,
                Line::Interrupted => continue,
                Line::Eof => break,
            };

            let action = match choice.trim().parse::<usize>() {
                Ok(n) if (1..=ACTIONS.len()).contains(&n) => ACTIONS[n - 1].0,
                _ => {
                    warning(format!("Unknown action '{}'", choice.trim()));
                    continue;
                }
            };

            let outcome = match action {
                Action::AddTrip => self.add_trip(),
                Action::AddDetails => self.add_details(),
                Action::PrintItinerary => self.print_itinerary(),
                Action::Quit => break,
            };

            match outcome {
                Ok(()) => {}
                Err(e @ AppError::Prompt(_)) => return Err(e),
                Err(e) => error(e),
            }
        }

        info("Goodbye!");
        Ok(())
    }

    fn add_trip(&mut self) -> AppResult<()> {
        let fmt = self.cfg.date_format.clone();

        let Some(location) = ask_text(self.input, "Location")? else {
            return Ok(());
        };
        let Some(start) = ask_date(self.input, "Trip Start Date", &fmt)? else {
            return Ok(());
        };
        let Some(end) = ask_date(self.input, "Trip End Date", &fmt)? else {
            return Ok(());
        };
        let Some(budget) = ask_budget(self.input, "Overall Budget")? else {
            return Ok(());
        };

        self.service.add_trip(&location, budget, start, end)?;
        success(format!("Added {} trip!", location));
        Ok(())
    }

    /// Pick a trip by number; `None` when there are none or the user cancelled.
    fn choose_trip(&mut self) -> AppResult<Option<Trip>> {
        let mut trips = self.service.list_trips()?;
        if trips.is_empty() {
            warning("Create a trip first");
            return Ok(None);
        }

        let options: Vec<String> = trips.iter().map(|t| t.location.clone()).collect();
        Ok(select(self.input, "Select Trip", &options)?.map(|i| trips.swap_remove(i)))
    }

    fn add_details(&mut self) -> AppResult<()> {
        let Some(trip) = self.choose_trip()? else {
            return Ok(());
        };

        let mut days = self.service.list_days(trip.id)?;
        if days.is_empty() {
            warning("This trip has no days");
            return Ok(());
        }

        let options: Vec<String> = days.iter().map(|d| day_label(d, self.cfg)).collect();
        let Some(idx) = select(self.input, "Select Day", &options)? else {
            return Ok(());
        };
        let mut day = days.swap_remove(idx);

        let max = self.cfg.max_detail_len;
        let Some(location) = ask_detail(self.input, "Location on that day", max)? else {
            return Ok(());
        };
        let Some(activities) = ask_detail(self.input, "Add activities for the day", max)? else {
            return Ok(());
        };
        let Some(restaurants) = ask_detail(self.input, "Where you will eat that day", max)? else {
            return Ok(());
        };
        let Some(hotel) = ask_detail(self.input, "Hotel name for that night", max)? else {
            return Ok(());
        };

        day.location = location;
        day.activities = activities;
        day.restaurants = restaurants;
        day.hotel = hotel;

        self.service.update_details(&day)?;
        success(format!("Added details to {}", day.date));
        Ok(())
    }

    fn print_itinerary(&mut self) -> AppResult<()> {
        let Some(trip) = self.choose_trip()? else {
            return Ok(());
        };

        let days = self.service.list_days(trip.id)?;
        println!();
        print!("{}", render_itinerary(&trip, &days, self.cfg));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::prompt::ScriptedSource;
    use crate::db::pool::DbPool;
    use chrono::NaiveDate;

    fn run_script(svc: &mut ItineraryService, lines: &[&str]) -> AppResult<()> {
        let cfg = Config::default();
        let mut src = ScriptedSource::new(lines.iter().copied());
        Menu::new(svc, &cfg, &mut src).run()
    }

    fn service() -> ItineraryService {
        ItineraryService::new(DbPool::in_memory().unwrap())
    }

    #[test]
    fn add_trip_then_details_through_menu() {
        let mut svc = service();
        run_script(
            &mut svc,
            &[
                "1", "Paris", "06-01-2024", "06-03-2024", "2000.00",
                "2", "1", "2", "Louvre area", "Museum", "Cafe X", "Hotel Y",
                "3", "1",
                "4",
            ],
        )
        .unwrap();

        let trips = svc.list_trips().unwrap();
        assert_eq!(trips.len(), 1);
        let days = svc.list_days(trips[0].id).unwrap();
        assert_eq!(days.len(), 3);
        assert_eq!(days[1].date, NaiveDate::from_ymd_opt(2024, 6, 2).unwrap());
        assert_eq!(days[1].activities, "Museum");
        assert!(days[0].is_blank() && days[2].is_blank());
    }

    #[test]
    fn failed_action_returns_to_menu() {
        let mut svc = service();
        // inverted range fails inside the service, the next action still runs
        run_script(
            &mut svc,
            &[
                "1", "Backwards", "06-03-2024", "06-01-2024", "10",
                "1", "Rome", "2024-07-01", "2024-07-02", "10",
            ],
        )
        .unwrap();

        let names: Vec<_> = svc.list_trips().unwrap().into_iter().map(|t| t.location).collect();
        assert_eq!(names, ["Rome"]);
    }

    #[test]
    fn unknown_choices_and_empty_store_are_harmless() {
        let mut svc = service();
        run_script(&mut svc, &["9", "x", "2", "3"]).unwrap();
        assert!(svc.list_trips().unwrap().is_empty());
    }
}
