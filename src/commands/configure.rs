//! Configure command implementation
//!
//! Seeds a configuration from the optional plan preset and flags, runs the
//! interactive wizard unless --no-input is given, shows the price breakdown,
//! and on confirmation hands the line item to the cart and renders the cart
//! view.

use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cart::{CartStore, JsonCartStore, checkout};
use crate::cli::ConfigureArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::pricing;
use crate::settings::CurrencySettings;
use crate::ui::{display, wizard};

/// Run configure command
pub fn run(
    cart_file: Option<PathBuf>,
    settings: Option<PathBuf>,
    args: ConfigureArgs,
) -> Result<()> {
    let currency = CurrencySettings::load(settings.as_deref())?;

    let mut config = helpers::build_configuration(&args.selection);

    if !args.no_input {
        wizard::run(&mut config, &currency)?;
        println!();
    }

    display::print_configuration(&config);
    println!();
    let breakdown = pricing::breakdown(&config);
    display::print_breakdown(&config, &breakdown, &currency);
    println!();

    let add_to_cart = if args.yes {
        true
    } else if args.no_input {
        // Scripted preview; nothing is written without an explicit --yes
        false
    } else {
        wizard::confirm_add_to_cart(breakdown.total, &currency)?
    };

    if !add_to_cart {
        display::note("Nothing added to the cart.");
        return Ok(());
    }

    let spinner = cart_spinner();
    let mut store = JsonCartStore::new(helpers::resolve_cart_path(cart_file));
    let outcome = checkout::confirm(&mut store, &config, breakdown.total);
    spinner.finish_and_clear();

    let item = outcome?;
    display::notify_success(&format!(
        "Added to cart: {} ({})",
        item.name,
        currency.format(item.price)
    ));
    println!();
    display::print_cart(&store.items()?, &currency);
    Ok(())
}

fn cart_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Adding to cart...");
    spinner
}
