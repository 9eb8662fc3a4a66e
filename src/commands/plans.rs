//! Plans command implementation

use std::path::PathBuf;

use crate::error::Result;
use crate::settings::CurrencySettings;
use crate::ui::display;

/// Run plans command
pub fn run(settings: Option<PathBuf>) -> Result<()> {
    let currency = CurrencySettings::load(settings.as_deref())?;
    display::print_plans(&currency);
    Ok(())
}
