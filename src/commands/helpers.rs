//! Shared helpers for configure and quote

use std::path::PathBuf;

use crate::cli::SelectionArgs;
use crate::domain::{ConfigurationState, PlanPreset};
use crate::ui::display;

/// Build a configuration from the plan preset and flag overrides.
///
/// The preset seeds the hardware fields exactly once; flags then override
/// individual fields through the state setters, so clamping applies.
/// Unknown plan keys are a no-op on the state (a dim notice is printed).
pub fn build_configuration(selection: &SelectionArgs) -> ConfigurationState {
    let preset = selection.plan.as_deref().and_then(PlanPreset::parse);
    if let Some(ref key) = selection.plan {
        if preset.is_none() {
            display::note(&format!("Unknown plan '{key}', using defaults."));
        }
    }

    let mut config = ConfigurationState::with_preset(preset);
    apply_overrides(&mut config, selection);
    config
}

fn apply_overrides(config: &mut ConfigurationState, selection: &SelectionArgs) {
    if let Some(cpu) = selection.cpu {
        config.set_cpu(cpu);
    }
    if let Some(ram) = selection.ram {
        config.set_ram(ram);
    }
    if let Some(storage) = selection.storage {
        config.set_storage(storage);
    }
    if let Some(ref os) = selection.os {
        config.set_os(os.clone());
    }
    if let Some(ref region) = selection.region {
        config.set_region(region.clone());
    }
    for app in &selection.apps {
        if !config.selected_applications.contains(app) {
            config.toggle_application(app);
        }
    }
    if let Some(months) = selection.months {
        config.set_duration(months);
    }
}

/// Cart file path from the global flag or the default location
pub fn resolve_cart_path(cart_file: Option<PathBuf>) -> PathBuf {
    cart_file.unwrap_or_else(crate::cart::JsonCartStore::default_path)
}
