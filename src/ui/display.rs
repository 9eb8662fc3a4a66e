//! Display functions for configurations, prices, plans and the cart
//!
//! All amounts are rendered through the injected currency settings; nothing
//! here feeds back into the calculator.

use console::Style;

use crate::cart::CartLineItem;
use crate::domain::{ConfigurationState, PlanPreset, catalog};
use crate::pricing::PriceBreakdown;
use crate::settings::CurrencySettings;

/// Green success line
pub fn notify_success(message: &str) {
    println!("{} {}", Style::new().green().bold().apply_to("✓"), message);
}

/// Red failure line
pub fn notify_error(message: &str) {
    eprintln!("{} {}", Style::new().red().bold().apply_to("✗"), message);
}

/// Dim informational note
pub fn note(message: &str) {
    println!("{}", Style::new().dim().apply_to(message));
}

/// Render a configuration summary
pub fn print_configuration(config: &ConfigurationState) {
    let bold = Style::new().bold();
    println!("{}", bold.apply_to("Configuration:"));
    println!("  {} {} cores", bold.apply_to("CPU:"), config.cpu_cores);
    println!("  {} {} GB", bold.apply_to("RAM:"), config.ram_gb);
    println!("  {} {} GB", bold.apply_to("Storage:"), config.storage_gb);
    println!(
        "  {} {}",
        bold.apply_to("OS:"),
        catalog::label_or_id(catalog::OPERATING_SYSTEMS, &config.operating_system)
    );
    println!(
        "  {} {}",
        bold.apply_to("Region:"),
        catalog::label_or_id(catalog::REGIONS, &config.region)
    );
    if config.selected_applications.is_empty() {
        println!(
            "  {} {}",
            bold.apply_to("Applications:"),
            Style::new().dim().apply_to("None")
        );
    } else {
        println!("  {}", bold.apply_to("Applications:"));
        for app in &config.selected_applications {
            println!(
                "    - {}",
                catalog::label_or_id(catalog::APPLICATIONS, app)
            );
        }
    }
    println!(
        "  {} {}",
        bold.apply_to("Duration:"),
        duration_label(config.duration_months)
    );
}

/// Render the price breakdown with a prominent total
pub fn print_breakdown(
    config: &ConfigurationState,
    breakdown: &PriceBreakdown,
    currency: &CurrencySettings,
) {
    let bold = Style::new().bold();
    let dim = Style::new().dim();

    println!("{}", bold.apply_to("Price breakdown:"));
    print_amount_line("Platform fee", breakdown.platform_fee, currency);
    print_amount_line(
        &format!("CPU ({} cores)", config.cpu_cores),
        breakdown.cpu,
        currency,
    );
    print_amount_line(&format!("RAM ({} GB)", config.ram_gb), breakdown.ram, currency);
    print_amount_line(
        &format!("Storage ({} GB)", config.storage_gb),
        breakdown.storage,
        currency,
    );
    if breakdown.os_surcharge > 0.0 {
        print_amount_line("OS surcharge", breakdown.os_surcharge, currency);
    }
    if breakdown.applications > 0.0 {
        print_amount_line(
            &format!("Applications ({})", config.selected_applications.len()),
            breakdown.applications,
            currency,
        );
    }
    println!(
        "  {:<24} {}",
        dim.apply_to("Subtotal"),
        currency.format_exact(breakdown.subtotal)
    );
    println!(
        "  {:<24} {} (x{})",
        dim.apply_to("Duration"),
        duration_label(config.duration_months),
        breakdown.multiplier
    );
    println!(
        "  {:<24} {}",
        bold.apply_to("Total"),
        Style::new()
            .green()
            .bold()
            .apply_to(currency.format(breakdown.total))
    );
}

fn print_amount_line(label: &str, amount: f64, currency: &CurrencySettings) {
    println!("  {:<24} {}", label, currency.format_exact(amount));
}

/// Render the cart view with a running total
pub fn print_cart(items: &[CartLineItem], currency: &CurrencySettings) {
    if items.is_empty() {
        println!("Cart is empty.");
        return;
    }

    let label = if items.len() == 1 { "item" } else { "items" };
    println!("Cart ({} {}):", items.len(), label);
    println!();

    let bold = Style::new().bold();
    let dim = Style::new().dim();
    for item in items {
        println!("  {}", Style::new().bold().yellow().apply_to(&item.name));
        println!("    {} {}", dim.apply_to("Id:"), item.id);
        println!(
            "    {} {}",
            dim.apply_to("OS:"),
            catalog::label_or_id(catalog::OPERATING_SYSTEMS, &item.configuration.operating_system)
        );
        println!(
            "    {} {}",
            dim.apply_to("Region:"),
            catalog::label_or_id(catalog::REGIONS, &item.configuration.region)
        );
        println!(
            "    {} {}",
            dim.apply_to("Duration:"),
            duration_label(item.configuration.duration_months)
        );
        println!(
            "    {} {}",
            bold.apply_to("Price:"),
            currency.format(item.price)
        );
        println!();
    }

    let total: u64 = items.iter().map(|item| item.price).sum();
    println!("  {} {}", bold.apply_to("Cart total:"), currency.format(total));
}

/// Render the plan preset table
pub fn print_plans(currency: &CurrencySettings) {
    println!("Available plans:");
    println!();
    for preset in PlanPreset::ALL {
        let config = ConfigurationState::with_preset(Some(*preset));
        let price = crate::pricing::price(&config);
        let (cpu, ram, storage) = preset.hardware();
        println!(
            "  {:<12} {} vCPU / {} GB RAM / {} GB storage  {} {}",
            Style::new().bold().yellow().apply_to(preset.label()),
            cpu,
            ram,
            storage,
            Style::new().dim().apply_to("from"),
            Style::new().green().bold().apply_to(currency.format(price))
        );
    }
    println!();
    note("Prices assume the default OS and a 1 month duration.");
}

/// Render the OS / region / application catalogs
pub fn print_catalog() {
    let bold = Style::new().bold();
    let dim = Style::new().dim();

    println!("{}", bold.apply_to("Operating systems:"));
    for entry in catalog::OPERATING_SYSTEMS {
        println!("  {:<22} {}", entry.id, dim.apply_to(entry.label));
    }
    println!();
    println!("{}", bold.apply_to("Regions:"));
    for entry in catalog::REGIONS {
        println!("  {:<22} {}", entry.id, dim.apply_to(entry.label));
    }
    println!();
    println!("{}", bold.apply_to("Applications:"));
    for entry in catalog::APPLICATIONS {
        println!("  {:<22} {}", entry.id, dim.apply_to(entry.label));
    }
    println!();
    println!("{}", bold.apply_to("Durations:"));
    for months in catalog::DURATION_TIERS {
        println!("  {}", duration_label(*months));
    }
}

/// "1 month" / "12 months"
pub fn duration_label(months: u32) -> String {
    if months == 1 {
        "1 month".to_string()
    } else {
        format!("{months} months")
    }
}
