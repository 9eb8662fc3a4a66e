//! Cart command implementation
//!
//! Shows the cart, removes a single line item, or clears everything.

use std::path::PathBuf;

use crate::cart::{CartStore, JsonCartStore};
use crate::cli::CartArgs;
use crate::commands::helpers;
use crate::error::Result;
use crate::settings::CurrencySettings;
use crate::ui::display;

/// Run cart command
pub fn run(cart_file: Option<PathBuf>, settings: Option<PathBuf>, args: CartArgs) -> Result<()> {
    let currency = CurrencySettings::load(settings.as_deref())?;
    let mut store = JsonCartStore::new(helpers::resolve_cart_path(cart_file));

    if args.clear {
        store.clear()?;
        display::notify_success("Cart cleared.");
        return Ok(());
    }

    if let Some(id) = args.remove {
        let removed = store.remove(&id)?;
        display::notify_success(&format!(
            "Removed from cart: {} ({})",
            removed.name,
            currency.format(removed.price)
        ));
        println!();
    }

    display::print_cart(&store.items()?, &currency);
    Ok(())
}
