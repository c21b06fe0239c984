//! Text rendering of trips and itineraries.

use crate::config::Config;
use crate::models::{Day, Trip};
use crate::utils::colors::colorize_optional;
use crate::utils::date::format_date;
use crate::utils::formatting::or_dash;
use crate::utils::table::{Column, Table};

/// Full itinerary: trip header followed by one block per day.
pub fn render_itinerary(trip: &Trip, days: &[Day], cfg: &Config) -> String {
    let mut out = String::new();

    out.push_str(&format!("*{} Trip*\n", trip.location));
    out.push_str(&format!(
        "Overall Budget: {}{}\n",
        cfg.currency_symbol, trip.budget
    ));
    out.push_str(&format!(
        "From {} to {} ({} days)\n",
        format_date(&trip.start_date, &cfg.date_format),
        format_date(&trip.end_date, &cfg.date_format),
        trip.length_in_days()
    ));

    for day in days {
        out.push_str(&format!(
            "\n{}: {}\n\tYou have planned to {}, eat at {}, and sleep at {}.\n",
            format_date(&day.date, &cfg.date_format),
            or_dash(&day.location),
            or_dash(&day.activities),
            or_dash(&day.restaurants),
            or_dash(&day.hotel),
        ));
    }

    out
}

pub fn render_trip_table(trips: &[Trip], cfg: &Config) -> String {
    let mut table = Table::new(vec![
        Column::new("ID", 4),
        Column::new("Location", 20),
        Column::new("Start", 10),
        Column::new("End", 10),
        Column::new("Days", 4),
        Column::new("Budget", 14),
    ]);

    for t in trips {
        table.add_row(vec![
            t.id.to_string(),
            t.location.clone(),
            format_date(&t.start_date, &cfg.date_format),
            format_date(&t.end_date, &cfg.date_format),
            t.length_in_days().to_string(),
            format!("{}{}", cfg.currency_symbol, t.budget),
        ]);
    }

    table.render()
}

pub fn render_day_table(days: &[Day], cfg: &Config) -> String {
    let w = cfg.max_detail_len.max(8);
    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("Date", 10),
        Column::new("Location", w),
        Column::new("Activities", w),
        Column::new("Restaurants", w),
        Column::new("Hotel", w),
    ]);

    for d in days {
        table.add_row(vec![
            d.id.to_string(),
            format_date(&d.date, &cfg.date_format),
            or_dash(&d.location).to_string(),
            or_dash(&d.activities).to_string(),
            or_dash(&d.restaurants).to_string(),
            or_dash(&d.hotel).to_string(),
        ]);
    }

    table.render()
}

/// One-line label for pick lists: date plus whatever is already planned.
pub fn day_label(day: &Day, cfg: &Config) -> String {
    let date = format_date(&day.date, &cfg.date_format);
    if day.is_blank() {
        format!("{} {}", date, colorize_optional("-"))
    } else {
        format!("{} {}", date, or_dash(&day.location))
    }
}
