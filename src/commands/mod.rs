//! Command implementations for Rentdesk CLI

pub mod cart;
pub mod catalog;
pub mod completions;
pub mod configure;
pub mod helpers;
pub mod plans;
pub mod quote;
pub mod version;
