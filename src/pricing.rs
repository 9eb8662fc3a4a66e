//! Price calculation for instance configurations
//!
//! Pure arithmetic over a `ConfigurationState`: no I/O, no side effects,
//! cheap enough to recompute after every wizard answer. All rates are in
//! abstract currency units; the display layer attaches a symbol.
//!
//! The OS surcharge intentionally matches on substrings rather than exact
//! catalog ids, so any future OS id containing "pro" attracts the Pro
//! surcharge without a rules change.

use crate::domain::ConfigurationState;

/// Flat platform fee charged on every configuration
const PLATFORM_FEE: f64 = 10.0;
/// Per CPU core
const CPU_RATE: f64 = 5.0;
/// Per GB of RAM
const RAM_RATE: f64 = 2.0;
/// Per GB of storage
const STORAGE_RATE: f64 = 0.2;
/// Per pre-installed application
const APPLICATION_RATE: f64 = 5.0;
/// OS ids containing "pro"
const PRO_SURCHARGE: f64 = 10.0;
/// OS ids containing "enterprise" (and not "pro")
const ENTERPRISE_SURCHARGE: f64 = 20.0;

/// Hand-tuned discount points per duration tier. Durations outside the
/// offered tiers fall back to the 1-month multiplier.
pub fn duration_multiplier(months: u32) -> f64 {
    match months {
        3 => 2.5,
        6 => 5.0,
        12 => 9.0,
        _ => 1.0,
    }
}

/// OS surcharge by substring match; "pro" wins over "enterprise" when an id
/// contains both
fn os_surcharge(os_id: &str) -> f64 {
    if os_id.contains("pro") {
        PRO_SURCHARGE
    } else if os_id.contains("enterprise") {
        ENTERPRISE_SURCHARGE
    } else {
        0.0
    }
}

/// Pre-multiplier subtotal in fractional units
fn subtotal(config: &ConfigurationState) -> f64 {
    PLATFORM_FEE
        + f64::from(config.cpu_cores) * CPU_RATE
        + f64::from(config.ram_gb) * RAM_RATE
        + f64::from(config.storage_gb) * STORAGE_RATE
        + os_surcharge(&config.operating_system)
        + config.selected_applications.len() as f64 * APPLICATION_RATE
}

/// Round a total to whole units, ties away from zero
fn round_total(total: f64) -> u64 {
    total.round() as u64
}

/// Price for a configuration, rounded to whole currency units
pub fn price(config: &ConfigurationState) -> u64 {
    round_total(subtotal(config) * duration_multiplier(config.duration_months))
}

/// Per-component amounts backing the price, for display
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    pub platform_fee: f64,
    pub cpu: f64,
    pub ram: f64,
    pub storage: f64,
    pub os_surcharge: f64,
    pub applications: f64,
    pub subtotal: f64,
    pub multiplier: f64,
    pub total: u64,
}

/// Compute the full breakdown for a configuration. `breakdown(c).total`
/// always equals `price(c)`.
pub fn breakdown(config: &ConfigurationState) -> PriceBreakdown {
    let subtotal = subtotal(config);
    let multiplier = duration_multiplier(config.duration_months);
    PriceBreakdown {
        platform_fee: PLATFORM_FEE,
        cpu: f64::from(config.cpu_cores) * CPU_RATE,
        ram: f64::from(config.ram_gb) * RAM_RATE,
        storage: f64::from(config.storage_gb) * STORAGE_RATE,
        os_surcharge: os_surcharge(&config.operating_system),
        applications: config.selected_applications.len() as f64 * APPLICATION_RATE,
        subtotal,
        multiplier,
        total: round_total(subtotal * multiplier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlanPreset;

    fn base_config() -> ConfigurationState {
        // {cpu:4, ram:8, storage:128, os:"windows-10-pro", region:"us-east",
        //  applications:[], duration:1}
        ConfigurationState::default()
    }

    #[test]
    fn test_reference_scenario_one_month() {
        // 10 + 20 + 16 + 25.6 + 10 = 81.6 -> 82
        assert_eq!(price(&base_config()), 82);
    }

    #[test]
    fn test_reference_scenario_twelve_months() {
        let mut config = base_config();
        config.set_duration(12);
        // 81.6 * 9 = 734.4 -> 734
        assert_eq!(price(&config), 734);
    }

    #[test]
    fn test_applications_add_to_base_before_multiplier() {
        let mut config = base_config();
        config.toggle_application("office");
        config.toggle_application("adobe");
        // 81.6 + 10 = 91.6 -> 92
        assert_eq!(price(&config), 92);

        config.set_duration(3);
        // 91.6 * 2.5 = 229
        assert_eq!(price(&config), 229);
    }

    #[test]
    fn test_premium_preset_price() {
        let config = ConfigurationState::with_preset(Some(PlanPreset::Premium));
        // 10 + 40 + 32 + 51.2 + 10 = 143.2 -> 143
        assert_eq!(price(&config), 143);
    }

    #[test]
    fn test_os_surcharge_substring_matching() {
        let mut config = base_config();

        config.set_os("windows-server-2019");
        let no_surcharge = price(&config);

        config.set_os("windows-11-pro");
        assert_eq!(price(&config), no_surcharge + 10);

        // Unknown ids still match by substring
        config.set_os("windows-12-pro");
        assert_eq!(price(&config), no_surcharge + 10);

        config.set_os("windows-11-enterprise");
        assert_eq!(price(&config), no_surcharge + 20);

        // "pro" wins when an id contains both markers
        config.set_os("windows-pro-enterprise");
        assert_eq!(price(&config), no_surcharge + 10);

        config.set_os("ubuntu-22-04");
        assert_eq!(price(&config), no_surcharge);
    }

    #[test]
    fn test_unknown_duration_prices_at_base_multiplier() {
        let mut config = base_config();
        let one_month = price(&config);
        for months in [0, 2, 5, 7, 24] {
            config.set_duration(months);
            assert_eq!(price(&config), one_month);
        }
    }

    #[test]
    fn test_duration_multiplier_is_pure_scalar_on_subtotal() {
        for preset in [None, Some(PlanPreset::Basic), Some(PlanPreset::Enterprise)] {
            let mut config = ConfigurationState::with_preset(preset);
            config.toggle_application("office");
            let sub = subtotal(&config);
            for (months, mult) in [(1, 1.0), (3, 2.5), (6, 5.0), (12, 9.0)] {
                config.set_duration(months);
                assert_eq!(price(&config), round_total(sub * mult));
            }
        }
    }

    #[test]
    fn test_price_never_below_platform_fee() {
        let mut config = base_config();
        config.set_cpu(1);
        config.set_ram(1);
        config.set_storage(32);
        config.set_os("ubuntu-20-04");
        assert!(price(&config) >= 10);
    }

    #[test]
    fn test_price_monotone_in_each_hardware_field() {
        let mut config = base_config();
        let mut last = price(&config);
        for cores in [8, 16, 32] {
            config.set_cpu(cores);
            let p = price(&config);
            assert!(p >= last);
            last = p;
        }

        let mut config = base_config();
        let mut last = price(&config);
        for gb in [16, 32, 64] {
            config.set_ram(gb);
            let p = price(&config);
            assert!(p >= last);
            last = p;
        }

        let mut config = base_config();
        let mut last = price(&config);
        for gb in [256, 512, 1024] {
            config.set_storage(gb);
            let p = price(&config);
            assert!(p >= last);
            last = p;
        }

        let mut config = base_config();
        let mut last = price(&config);
        for app in ["office", "adobe", "chrome"] {
            config.toggle_application(app);
            let p = price(&config);
            assert!(p >= last);
            last = p;
        }
    }

    #[test]
    fn test_rounding_ties_away_from_zero() {
        assert_eq!(round_total(81.5), 82);
        assert_eq!(round_total(82.5), 83);
        assert_eq!(round_total(81.6), 82);
        assert_eq!(round_total(734.4), 734);
    }

    #[test]
    fn test_breakdown_total_matches_price() {
        let mut config = base_config();
        config.toggle_application("office");
        config.set_duration(6);
        let b = breakdown(&config);
        assert_eq!(b.total, price(&config));
        assert_eq!(b.multiplier, 5.0);
        assert_eq!(b.os_surcharge, 10.0);
        assert_eq!(b.applications, 5.0);
    }
}
