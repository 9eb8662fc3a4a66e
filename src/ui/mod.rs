//! Terminal presentation for the storefront

pub mod display;
pub mod wizard;
