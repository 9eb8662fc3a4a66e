//! Instance configuration state
//!
//! One `ConfigurationState` exists per configurator session. It always holds
//! a value from each field's domain; the numeric setters clamp out-of-range
//! input at the transition boundary instead of trusting the input layer.
//! The price is derived from this state and never stored in it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::plan::PlanPreset;

/// Inclusive CPU core range
pub const CPU_CORES_MIN: u32 = 1;
pub const CPU_CORES_MAX: u32 = 32;

/// Inclusive RAM range in GB
pub const RAM_GB_MIN: u32 = 1;
pub const RAM_GB_MAX: u32 = 64;

/// Inclusive storage range in GB, in steps of `STORAGE_GB_STEP`
pub const STORAGE_GB_MIN: u32 = 32;
pub const STORAGE_GB_MAX: u32 = 1024;
pub const STORAGE_GB_STEP: u32 = 32;

/// Hardware, software and duration selections for one instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigurationState {
    pub cpu_cores: u32,
    pub ram_gb: u32,
    pub storage_gb: u32,
    pub operating_system: String,
    pub region: String,
    pub selected_applications: BTreeSet<String>,
    pub duration_months: u32,
}

impl Default for ConfigurationState {
    fn default() -> Self {
        ConfigurationState {
            cpu_cores: 4,
            ram_gb: 8,
            storage_gb: 128,
            operating_system: "windows-10-pro".to_string(),
            region: "us-east".to_string(),
            selected_applications: BTreeSet::new(),
            duration_months: 1,
        }
    }
}

impl ConfigurationState {
    /// Create a configuration, merging a preset's hardware override into the
    /// defaults. The merge happens exactly once, here; there is no reactive
    /// re-application path that could overwrite later edits.
    pub fn with_preset(preset: Option<PlanPreset>) -> Self {
        let mut config = ConfigurationState::default();
        if let Some(preset) = preset {
            let (cpu, ram, storage) = preset.hardware();
            config.cpu_cores = cpu;
            config.ram_gb = ram;
            config.storage_gb = storage;
        }
        config
    }

    /// Set CPU cores, clamped to the offered range
    pub fn set_cpu(&mut self, cores: u32) {
        self.cpu_cores = cores.clamp(CPU_CORES_MIN, CPU_CORES_MAX);
    }

    /// Set RAM in GB, clamped to the offered range
    pub fn set_ram(&mut self, gb: u32) {
        self.ram_gb = gb.clamp(RAM_GB_MIN, RAM_GB_MAX);
    }

    /// Set storage in GB, clamped to the offered range and snapped to the
    /// nearest 32 GB step
    pub fn set_storage(&mut self, gb: u32) {
        let clamped = gb.clamp(STORAGE_GB_MIN, STORAGE_GB_MAX);
        let snapped = ((clamped + STORAGE_GB_STEP / 2) / STORAGE_GB_STEP) * STORAGE_GB_STEP;
        self.storage_gb = snapped.clamp(STORAGE_GB_MIN, STORAGE_GB_MAX);
    }

    /// Set the operating system id. Ids outside the catalog are accepted:
    /// they simply match no pricing surcharge.
    pub fn set_os(&mut self, id: impl Into<String>) {
        self.operating_system = id.into();
    }

    /// Set the region id. Ids outside the catalog are accepted.
    pub fn set_region(&mut self, id: impl Into<String>) {
        self.region = id.into();
    }

    /// Toggle an application: add it if absent, remove it if present
    pub fn toggle_application(&mut self, id: &str) {
        if !self.selected_applications.remove(id) {
            self.selected_applications.insert(id.to_string());
        }
    }

    /// Set the rental duration in months. The value is stored as given;
    /// durations outside the offered tiers price at the base multiplier.
    pub fn set_duration(&mut self, months: u32) {
        self.duration_months = months;
    }
}
