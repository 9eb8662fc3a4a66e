//! Named plan presets
//!
//! A preset is a shortcut that pre-fills the hardware fields of a new
//! configuration. It is merged into the defaults exactly once, when the
//! configuration is created; changing the plan key later never re-seeds a
//! live configuration, so user edits cannot be stomped.

/// Named hardware presets offered on the pricing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanPreset {
    Basic,
    Standard,
    Premium,
    Enterprise,
}

impl PlanPreset {
    /// All presets in display order
    pub const ALL: &'static [PlanPreset] = &[
        PlanPreset::Basic,
        PlanPreset::Standard,
        PlanPreset::Premium,
        PlanPreset::Enterprise,
    ];

    /// Parse a plan key. Unrecognized keys yield no preset (a no-op on the
    /// configuration), never an error.
    pub fn parse(key: &str) -> Option<Self> {
        match key.to_lowercase().as_str() {
            "basic" => Some(PlanPreset::Basic),
            "standard" => Some(PlanPreset::Standard),
            "premium" => Some(PlanPreset::Premium),
            "enterprise" => Some(PlanPreset::Enterprise),
            _ => None,
        }
    }

    /// Stable key as it appears in URLs and CLI flags
    pub fn id(self) -> &'static str {
        match self {
            PlanPreset::Basic => "basic",
            PlanPreset::Standard => "standard",
            PlanPreset::Premium => "premium",
            PlanPreset::Enterprise => "enterprise",
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            PlanPreset::Basic => "Basic",
            PlanPreset::Standard => "Standard",
            PlanPreset::Premium => "Premium",
            PlanPreset::Enterprise => "Enterprise",
        }
    }

    /// Hardware override applied over the defaults: (cpu cores, RAM GB, storage GB)
    pub fn hardware(self) -> (u32, u32, u32) {
        match self {
            PlanPreset::Basic => (2, 4, 64),
            PlanPreset::Standard => (4, 8, 128),
            PlanPreset::Premium => (8, 16, 256),
            PlanPreset::Enterprise => (16, 32, 512),
        }
    }
}
