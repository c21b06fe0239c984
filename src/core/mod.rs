pub mod config;
pub mod expand;
pub mod itinerary;
pub mod log;

pub use itinerary::ItineraryService;
