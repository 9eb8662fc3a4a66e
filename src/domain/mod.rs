//! Domain models for Rentdesk
//!
//! This module contains pure domain objects representing core business entities.
//! These types are free of external dependencies and contain business rules invariants.

pub mod catalog;
pub mod config;
pub mod plan;

pub use config::ConfigurationState;
pub use plan::PlanPreset;
