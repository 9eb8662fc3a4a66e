//! Interactive configuration wizard
//!
//! Three steps: hardware specs, then OS/region, then software/duration. The
//! running price is recomputed and shown after every step. Every answer goes
//! through the `ConfigurationState` setters, so the clamping rules apply to
//! wizard input exactly as they do to flags.

use std::fmt;

use console::Style;
use inquire::{Confirm, CustomType, MultiSelect, Select};

use crate::domain::{ConfigurationState, catalog};
use crate::error::Result;
use crate::pricing;
use crate::settings::CurrencySettings;
use crate::ui::display::duration_label;

/// Catalog entry presented as a selectable row
#[derive(Debug, Clone, Copy)]
struct Choice {
    id: &'static str,
    label: &'static str,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.id)
    }
}

fn choices(catalog: &'static [catalog::CatalogEntry]) -> Vec<Choice> {
    catalog
        .iter()
        .map(|entry| Choice {
            id: entry.id,
            label: entry.label,
        })
        .collect()
}

fn cursor_for(catalog: &'static [catalog::CatalogEntry], id: &str) -> usize {
    catalog
        .iter()
        .position(|entry| entry.id == id)
        .unwrap_or(0)
}

/// Run the full wizard over an already-seeded configuration
pub fn run(config: &mut ConfigurationState, currency: &CurrencySettings) -> Result<()> {
    step_hardware(config)?;
    show_running_price(config, currency);

    step_os_region(config)?;
    show_running_price(config, currency);

    step_software_duration(config)?;
    Ok(())
}

/// Step 1: hardware specs
fn step_hardware(config: &mut ConfigurationState) -> Result<()> {
    let cpu = CustomType::<u32>::new("CPU cores:")
        .with_default(config.cpu_cores)
        .with_help_message("1-32 cores")
        .prompt()?;
    config.set_cpu(cpu);

    let ram = CustomType::<u32>::new("RAM (GB):")
        .with_default(config.ram_gb)
        .with_help_message("1-64 GB")
        .prompt()?;
    config.set_ram(ram);

    let storage = CustomType::<u32>::new("Storage (GB):")
        .with_default(config.storage_gb)
        .with_help_message("32-1024 GB in steps of 32")
        .prompt()?;
    config.set_storage(storage);

    Ok(())
}

/// Step 2: operating system and region
fn step_os_region(config: &mut ConfigurationState) -> Result<()> {
    let os = Select::new("Operating system:", choices(catalog::OPERATING_SYSTEMS))
        .with_starting_cursor(cursor_for(
            catalog::OPERATING_SYSTEMS,
            &config.operating_system,
        ))
        .with_page_size(10)
        .with_help_message("↑↓ to move, ENTER to select")
        .prompt()?;
    config.set_os(os.id);

    let region = Select::new("Region:", choices(catalog::REGIONS))
        .with_starting_cursor(cursor_for(catalog::REGIONS, &config.region))
        .with_help_message("↑↓ to move, ENTER to select")
        .prompt()?;
    config.set_region(region.id);

    Ok(())
}

/// Step 3: applications and duration
fn step_software_duration(config: &mut ConfigurationState) -> Result<()> {
    let preselected: Vec<usize> = catalog::APPLICATIONS
        .iter()
        .enumerate()
        .filter(|(_, entry)| config.selected_applications.contains(entry.id))
        .map(|(index, _)| index)
        .collect();

    let selected = MultiSelect::new("Applications:", choices(catalog::APPLICATIONS))
        .with_default(&preselected)
        .with_help_message("↑↓ to move, SPACE to select/deselect, ENTER to confirm")
        .prompt()?;

    config.selected_applications.clear();
    for choice in selected {
        config.toggle_application(choice.id);
    }

    let durations: Vec<String> = catalog::DURATION_TIERS
        .iter()
        .map(|months| duration_label(*months))
        .collect();
    let cursor = catalog::DURATION_TIERS
        .iter()
        .position(|months| *months == config.duration_months)
        .unwrap_or(0);
    let duration = Select::new("Duration:", durations)
        .with_starting_cursor(cursor)
        .prompt()?;

    let months = catalog::DURATION_TIERS
        .iter()
        .find(|m| duration_label(**m) == duration)
        .copied()
        .unwrap_or(1);
    config.set_duration(months);

    Ok(())
}

/// Ask the user to place the configured instance in the cart
pub fn confirm_add_to_cart(price: u64, currency: &CurrencySettings) -> Result<bool> {
    let answer = Confirm::new(&format!("Add to cart for {}?", currency.format(price)))
        .with_default(true)
        .with_help_message("Press Enter to confirm, or 'n' to cancel")
        .prompt()?;
    Ok(answer)
}

fn show_running_price(config: &ConfigurationState, currency: &CurrencySettings) {
    let price = pricing::price(config);
    println!(
        "{}",
        Style::new()
            .dim()
            .apply_to(format!("Current price: {}", currency.format(price)))
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choice_display() {
        let choice = Choice {
            id: "windows-10-pro",
            label: "Windows 10 Pro",
        };
        assert_eq!(choice.to_string(), "Windows 10 Pro (windows-10-pro)");
    }

    #[test]
    fn test_cursor_for_known_and_unknown_ids() {
        assert_eq!(cursor_for(catalog::OPERATING_SYSTEMS, "windows-10-home"), 0);
        assert_eq!(cursor_for(catalog::OPERATING_SYSTEMS, "windows-10-pro"), 1);
        assert_eq!(cursor_for(catalog::OPERATING_SYSTEMS, "no-such-os"), 0);
    }
}
