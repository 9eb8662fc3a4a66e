//! Cart line item
//!
//! The snapshot of a configuration and its price at the moment the user
//! confirmed. The configuration is a deep copy: later edits to the live
//! configurator state never alter a placed line item.

use serde::{Deserialize, Serialize};

use crate::domain::ConfigurationState;

/// One configured instance placed in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: String,
    pub name: String,
    pub configuration: ConfigurationState,
    pub price: u64,
}
