//! Checkout handoff
//!
//! Packages the confirmed configuration and price into a line item and hands
//! it to the cart store. A store failure propagates untouched and the live
//! configuration is left as-is, so the user can retry without re-entering
//! anything. Id uniqueness across the cart is the store's concern, not ours.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::cart::line_item::CartLineItem;
use crate::cart::store::CartStore;
use crate::domain::ConfigurationState;
use crate::error::Result;

/// Human-readable name for a configured instance, derived from its hardware
pub fn display_name(config: &ConfigurationState) -> String {
    format!(
        "Custom RDP ({} vCPU / {} GB RAM)",
        config.cpu_cores, config.ram_gb
    )
}

/// Synthetic line item id from the current wall clock
fn next_line_item_id() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    format!("rdp-{nanos}")
}

/// Confirm the configuration: snapshot it into a line item and append it to
/// the cart
pub fn confirm(
    store: &mut dyn CartStore,
    config: &ConfigurationState,
    price: u64,
) -> Result<CartLineItem> {
    let item = CartLineItem {
        id: next_line_item_id(),
        name: display_name(config),
        configuration: config.clone(),
        price,
    };
    store.add(item.clone())?;
    Ok(item)
}
