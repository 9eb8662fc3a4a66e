//! Quote command implementation
//!
//! Prices a configuration from flags alone. Never touches the cart, so it is
//! safe for scripting and CI.

use std::path::PathBuf;

use crate::cli::QuoteArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::pricing;
use crate::settings::CurrencySettings;
use crate::ui::display;

/// Run quote command
pub fn run(settings: Option<PathBuf>, args: QuoteArgs) -> Result<()> {
    let currency = CurrencySettings::load(settings.as_deref())?;
    let config = helpers::build_configuration(&args.selection);

    display::print_configuration(&config);
    println!();
    display::print_breakdown(&config, &pricing::breakdown(&config), &currency);
    Ok(())
}
