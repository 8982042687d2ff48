//! The embedded catalog: literal per-category product tables.
//!
//! This is configuration payload, not logic. Each table is expanded into
//! concrete SKU rows by [`crate::catalog::expand`]; the counts here are
//! load-bearing for the downstream verification step (cpu 38, gpu 34 chip
//! entries, case 29).

/// Substrings that disqualify a listing for any category.
pub const MUST_NOT_COMMON: &[&str] = &["for parts", "repair", "broken", "box only"];

pub const MUST_NOT_CPU: &[&str] = &["combo", "bundle", "motherboard", "delid"];
pub const MUST_NOT_GPU: &[&str] = &["mining", "bundle", "block only", "shroud only"];
pub const MUST_NOT_SSD: &[&str] = &["enclosure", "adapter", "heatsink only"];
pub const MUST_NOT_RAM: &[&str] = &["laptop", "sodimm", "ecc", "server"];
pub const MUST_NOT_MOTHERBOARD: &[&str] = &["combo", "bundle", "bent pins", "io shield only"];
pub const MUST_NOT_PSU: &[&str] = &["cables only", "cable kit"];
pub const MUST_NOT_COOLER: &[&str] = &["bracket only", "fan only"];
pub const MUST_NOT_CASE: &[&str] = &["panel only", "glass only", "feet only"];

/// (brand, model)
pub const CPUS: &[(&str, &str)] = &[
    ("AMD", "Ryzen 5 3600"),
    ("AMD", "Ryzen 5 5500"),
    ("AMD", "Ryzen 5 5600"),
    ("AMD", "Ryzen 5 5600X"),
    ("AMD", "Ryzen 5 7600"),
    ("AMD", "Ryzen 5 7600X"),
    ("AMD", "Ryzen 5 9600X"),
    ("AMD", "Ryzen 7 5700X"),
    ("AMD", "Ryzen 7 5700X3D"),
    ("AMD", "Ryzen 7 5800X"),
    ("AMD", "Ryzen 7 5800X3D"),
    ("AMD", "Ryzen 7 7700"),
    ("AMD", "Ryzen 7 7700X"),
    ("AMD", "Ryzen 7 7800X3D"),
    ("AMD", "Ryzen 7 9700X"),
    ("AMD", "Ryzen 7 9800X3D"),
    ("AMD", "Ryzen 9 5900X"),
    ("AMD", "Ryzen 9 5950X"),
    ("AMD", "Ryzen 9 7900X"),
    ("AMD", "Ryzen 9 7950X"),
    ("AMD", "Ryzen 9 7950X3D"),
    ("AMD", "Ryzen 9 9900X"),
    ("AMD", "Ryzen 9 9950X"),
    ("AMD", "Ryzen 9 9950X3D"),
    ("Intel", "Core i5-12400F"),
    ("Intel", "Core i5-12600K"),
    ("Intel", "Core i5-13400F"),
    ("Intel", "Core i5-13600K"),
    ("Intel", "Core i5-14600K"),
    ("Intel", "Core i7-12700K"),
    ("Intel", "Core i7-13700K"),
    ("Intel", "Core i7-14700K"),
    ("Intel", "Core i9-12900K"),
    ("Intel", "Core i9-13900K"),
    ("Intel", "Core i9-14900K"),
    ("Intel", "Core Ultra 5 245K"),
    ("Intel", "Core Ultra 7 265K"),
    ("Intel", "Core Ultra 9 285K"),
];

/// (brand, chip, vram_gb). Chip x VRAM combos that sell as distinct SKUs
/// (e.g. the 8GB and 16GB 4060 Ti) get their own entries.
pub const GPU_CHIPS: &[(&str, &str, u32)] = &[
    ("NVIDIA", "RTX 3060", 12),
    ("NVIDIA", "RTX 3060 Ti", 8),
    ("NVIDIA", "RTX 3070", 8),
    ("NVIDIA", "RTX 3080", 10),
    ("NVIDIA", "RTX 3090", 24),
    ("NVIDIA", "RTX 4060", 8),
    ("NVIDIA", "RTX 4060 Ti", 8),
    ("NVIDIA", "RTX 4060 Ti", 16),
    ("NVIDIA", "RTX 4070", 12),
    ("NVIDIA", "RTX 4070 Super", 12),
    ("NVIDIA", "RTX 4070 Ti Super", 16),
    ("NVIDIA", "RTX 4080 Super", 16),
    ("NVIDIA", "RTX 4090", 24),
    ("NVIDIA", "RTX 5060 Ti", 8),
    ("NVIDIA", "RTX 5060 Ti", 16),
    ("NVIDIA", "RTX 5070", 12),
    ("NVIDIA", "RTX 5070 Ti", 16),
    ("NVIDIA", "RTX 5080", 16),
    ("NVIDIA", "RTX 5090", 32),
    ("AMD", "RX 6600", 8),
    ("AMD", "RX 6650 XT", 8),
    ("AMD", "RX 6700 XT", 12),
    ("AMD", "RX 6800 XT", 16),
    ("AMD", "RX 6950 XT", 16),
    ("AMD", "RX 7600", 8),
    ("AMD", "RX 7700 XT", 12),
    ("AMD", "RX 7800 XT", 16),
    ("AMD", "RX 7900 GRE", 16),
    ("AMD", "RX 7900 XT", 20),
    ("AMD", "RX 7900 XTX", 24),
    ("AMD", "RX 9070", 16),
    ("AMD", "RX 9070 XT", 16),
    ("Intel", "Arc A750", 8),
    ("Intel", "Arc B580", 12),
];

/// (variant label, trust_floor, seller_trust_required).
///
/// The same chip is tracked as three separate listing categories with
/// different trust thresholds. These are distinct SKUs on purpose; they
/// must never be deduplicated against each other.
pub const GPU_VARIANTS: &[(&str, f64, bool)] = &[
    ("any AIB", 0.70, false),
    ("reputable seller", 0.85, false),
    ("Founders/Reference", 0.95, true),
];

/// (brand, model, interface, capacities in TB)
pub const SSDS: &[(&str, &str, &str, &[f64])] = &[
    ("Samsung", "990 Pro", "NVMe", &[1.0, 2.0, 4.0]),
    ("Samsung", "980 Pro", "NVMe", &[1.0, 2.0]),
    ("Samsung", "870 EVO", "SATA", &[1.0, 2.0, 4.0]),
    ("WD", "Black SN850X", "NVMe", &[1.0, 2.0, 4.0]),
    ("WD", "Blue SN580", "NVMe", &[0.5, 1.0, 2.0]),
    ("Crucial", "T500", "NVMe", &[1.0, 2.0]),
    ("Crucial", "P3 Plus", "NVMe", &[1.0, 2.0, 4.0]),
    ("Crucial", "MX500", "SATA", &[0.5, 1.0, 2.0]),
    ("Kingston", "KC3000", "NVMe", &[1.0, 2.0]),
    ("SK hynix", "Platinum P41", "NVMe", &[1.0, 2.0]),
    ("Seagate", "FireCuda 530", "NVMe", &[1.0, 2.0, 4.0]),
    ("Solidigm", "P44 Pro", "NVMe", &[1.0, 2.0]),
];

pub const RAM_BRANDS: &[&str] = &["Corsair", "G.Skill", "Kingston", "Crucial"];

/// (kit_gb, stick_gb) — two-stick kits only.
pub const RAM_KITS: &[(u32, u32)] = &[(16, 8), (32, 16), (64, 32)];

/// (ddr generation, speed MT/s, CAS latency)
pub const RAM_SPEEDS: &[(u8, u32, u32)] = &[
    (4, 3200, 16),
    (4, 3600, 18),
    (5, 6000, 30),
    (5, 6400, 32),
];

/// (brand, model, socket, chipset)
pub const MOTHERBOARDS: &[(&str, &str, &str, &str)] = &[
    ("ASUS", "ROG Strix B550-F Gaming", "AM4", "B550"),
    ("ASUS", "TUF Gaming B650-Plus WiFi", "AM5", "B650"),
    ("ASUS", "ROG Strix X670E-E Gaming WiFi", "AM5", "X670E"),
    ("ASUS", "ROG Strix B850-E Gaming WiFi", "AM5", "B850"),
    ("ASUS", "Prime Z790-P", "LGA1700", "Z790"),
    ("MSI", "MAG B550 Tomahawk", "AM4", "B550"),
    ("MSI", "MAG B650 Tomahawk WiFi", "AM5", "B650"),
    ("MSI", "MPG X670E Carbon WiFi", "AM5", "X670E"),
    ("MSI", "MAG B850 Tomahawk Max WiFi", "AM5", "B850"),
    ("MSI", "PRO Z790-A WiFi", "LGA1700", "Z790"),
    ("Gigabyte", "B550 Aorus Elite V2", "AM4", "B550"),
    ("Gigabyte", "B650 Aorus Elite AX", "AM5", "B650"),
    ("Gigabyte", "X670 Aorus Elite AX", "AM5", "X670"),
    ("Gigabyte", "B850 Aorus Elite WiFi7", "AM5", "B850"),
    ("Gigabyte", "Z790 Aorus Elite AX", "LGA1700", "Z790"),
    ("ASRock", "B550 Phantom Gaming 4", "AM4", "B550"),
    ("ASRock", "B650M Pro RS WiFi", "AM5", "B650"),
    ("ASRock", "X670E Steel Legend", "AM5", "X670E"),
    ("ASRock", "Z790 Pro RS", "LGA1700", "Z790"),
    ("ASRock", "Z890 Steel Legend WiFi", "LGA1851", "Z890"),
];

/// (brand, model, watts, efficiency rating)
pub const PSUS: &[(&str, &str, u32, &str)] = &[
    ("Corsair", "RM750e", 750, "80+ Gold"),
    ("Corsair", "RM850x", 850, "80+ Gold"),
    ("Corsair", "RM1000x", 1000, "80+ Gold"),
    ("Corsair", "HX1200", 1200, "80+ Platinum"),
    ("Seasonic", "Focus GX-750", 750, "80+ Gold"),
    ("Seasonic", "Focus GX-850", 850, "80+ Gold"),
    ("Seasonic", "Prime TX-1000", 1000, "80+ Titanium"),
    ("EVGA", "SuperNOVA 750 GT", 750, "80+ Gold"),
    ("EVGA", "SuperNOVA 850 G6", 850, "80+ Gold"),
    ("be quiet!", "Pure Power 12 M", 750, "80+ Gold"),
    ("be quiet!", "Straight Power 12", 1000, "80+ Platinum"),
    ("Thermaltake", "Toughpower GF3", 850, "80+ Gold"),
    ("MSI", "MAG A850GL", 850, "80+ Gold"),
    ("SilverStone", "HELA 1200R", 1200, "80+ Platinum"),
    ("Cooler Master", "MWE Gold 750 V2", 750, "80+ Gold"),
    ("NZXT", "C850", 850, "80+ Gold"),
];

/// (brand, model, cooler type)
pub const COOLERS: &[(&str, &str, &str)] = &[
    ("Noctua", "NH-D15", "air"),
    ("Noctua", "NH-U12S", "air"),
    ("Thermalright", "Peerless Assassin 120 SE", "air"),
    ("Thermalright", "Phantom Spirit 120 SE", "air"),
    ("be quiet!", "Dark Rock Pro 5", "air"),
    ("Cooler Master", "Hyper 212 Black", "air"),
    ("DeepCool", "AK620", "air"),
    ("Scythe", "Fuma 3", "air"),
    ("Arctic", "Liquid Freezer III 240", "aio"),
    ("Arctic", "Liquid Freezer III 360", "aio"),
    ("Corsair", "iCUE H100i Elite", "aio"),
    ("Corsair", "iCUE H150i Elite", "aio"),
    ("NZXT", "Kraken 240", "aio"),
    ("NZXT", "Kraken 360", "aio"),
    ("Lian Li", "Galahad II Trinity 240", "aio"),
    ("MSI", "MAG CoreLiquid E360", "aio"),
];

/// (brand, model)
pub const CASES: &[(&str, &str)] = &[
    ("Fractal Design", "North"),
    ("Fractal Design", "Meshify 2 Compact"),
    ("Fractal Design", "Define 7"),
    ("Fractal Design", "Terra"),
    ("Lian Li", "O11 Dynamic Evo"),
    ("Lian Li", "Lancool 216"),
    ("Lian Li", "Lancool 207"),
    ("Lian Li", "A3-mATX"),
    ("NZXT", "H5 Flow"),
    ("NZXT", "H7 Flow"),
    ("NZXT", "H9 Flow"),
    ("Corsair", "4000D Airflow"),
    ("Corsair", "5000D Airflow"),
    ("Corsair", "3500X"),
    ("Phanteks", "Eclipse G360A"),
    ("Phanteks", "NV5"),
    ("Phanteks", "Evolv X2"),
    ("be quiet!", "Pure Base 500DX"),
    ("be quiet!", "Dark Base 701"),
    ("Cooler Master", "NR200P"),
    ("Cooler Master", "MasterBox TD500 Mesh"),
    ("Montech", "AIR 903 Max"),
    ("Montech", "XR"),
    ("HYTE", "Y60"),
    ("HYTE", "Y70"),
    ("Thermaltake", "Tower 200"),
    ("SSUPD", "Meshlicious"),
    ("InWin", "A1 Prime"),
    ("Antec", "C8"),
];

#[cfg(test)]
mod tests {
    use super::*;

    // The verification step reports per-category counts; these tables are
    // what those counts are checked against.
    #[test]
    fn test_table_sizes() {
        assert_eq!(CPUS.len(), 38);
        assert_eq!(GPU_CHIPS.len(), 34);
        assert_eq!(GPU_VARIANTS.len(), 3);
        assert_eq!(CASES.len(), 29);
    }

    #[test]
    fn test_gpu_variants_are_ordered_by_trust() {
        let floors: Vec<f64> = GPU_VARIANTS.iter().map(|v| v.1).collect();
        let mut sorted = floors.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(floors, sorted);
    }
}
