use crate::cli::menu::Menu;
use crate::cli::prompt::ReadlineSource;
use crate::config::Config;
use crate::core::ItineraryService;
use crate::errors::AppResult;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut service = ItineraryService::open(&cfg.database)?;
    let mut input = ReadlineSource::new()?;
    Menu::new(&mut service, cfg, &mut input).run()
}
