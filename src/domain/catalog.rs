//! Fixed catalogs offered by the storefront
//!
//! Operating systems, regions and add-on applications form closed identifier
//! sets. Identifiers are what the pricing rules and the cart see; labels are
//! only for display.

/// A catalog entry: a stable identifier plus a human-readable label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub label: &'static str,
}

/// Operating system images available for an instance
pub const OPERATING_SYSTEMS: &[CatalogEntry] = &[
    CatalogEntry {
        id: "windows-10-home",
        label: "Windows 10 Home",
    },
    CatalogEntry {
        id: "windows-10-pro",
        label: "Windows 10 Pro",
    },
    CatalogEntry {
        id: "windows-11-home",
        label: "Windows 11 Home",
    },
    CatalogEntry {
        id: "windows-11-pro",
        label: "Windows 11 Pro",
    },
    CatalogEntry {
        id: "windows-server-2019",
        label: "Windows Server 2019",
    },
    CatalogEntry {
        id: "windows-server-2022",
        label: "Windows Server 2022",
    },
    CatalogEntry {
        id: "ubuntu-20-04",
        label: "Ubuntu 20.04 LTS",
    },
    CatalogEntry {
        id: "ubuntu-22-04",
        label: "Ubuntu 22.04 LTS",
    },
];

/// Datacenter regions instances can be provisioned in
pub const REGIONS: &[CatalogEntry] = &[
    CatalogEntry {
        id: "us-east",
        label: "US East",
    },
    CatalogEntry {
        id: "us-west",
        label: "US West",
    },
    CatalogEntry {
        id: "eu-central",
        label: "EU Central",
    },
    CatalogEntry {
        id: "eu-west",
        label: "EU West",
    },
    CatalogEntry {
        id: "asia-southeast",
        label: "Asia Southeast",
    },
    CatalogEntry {
        id: "asia-east",
        label: "Asia East",
    },
];

/// Pre-installable applications (each adds a flat amount to the price)
pub const APPLICATIONS: &[CatalogEntry] = &[
    CatalogEntry {
        id: "office",
        label: "Microsoft Office Suite",
    },
    CatalogEntry {
        id: "adobe",
        label: "Adobe Creative Cloud",
    },
    CatalogEntry {
        id: "chrome",
        label: "Google Chrome",
    },
    CatalogEntry {
        id: "antivirus",
        label: "Antivirus Suite",
    },
    CatalogEntry {
        id: "filezilla",
        label: "FileZilla FTP Client",
    },
    CatalogEntry {
        id: "teamviewer",
        label: "TeamViewer",
    },
];

/// Rental durations offered by the storefront, in months
pub const DURATION_TIERS: &[u32] = &[1, 3, 6, 12];

/// Look up an entry by id in a catalog slice
pub fn find(catalog: &'static [CatalogEntry], id: &str) -> Option<&'static CatalogEntry> {
    catalog.iter().find(|entry| entry.id == id)
}

/// Display label for an id, falling back to the raw id for unknown values
pub fn label_or_id<'a>(catalog: &'static [CatalogEntry], id: &'a str) -> &'a str {
    match find(catalog, id) {
        Some(entry) => entry.label,
        None => id,
    }
}
