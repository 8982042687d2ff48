//! Expansion of the embedded definition tables into concrete SKU rows.
//!
//! Every category has a fixed name-composition rule; the composed name is
//! the deduplication key, so the rules here must stay byte-stable across
//! releases or re-seeding would duplicate the catalog.

use std::collections::HashSet;

use thiserror::Error;

use super::definitions::*;
use super::{Category, CatalogEntry, ProductAttrs};

/// A malformed embedded or operator-supplied catalog. This is a
/// configuration error: the seed run aborts instead of writing a partial
/// or ambiguous catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog entry for {category} brand '{brand}' has an empty name")]
    EmptyName { category: Category, brand: String },

    #[error("catalog entry '{name}' has an empty search query")]
    EmptyQuery { name: String },

    #[error("catalog entry '{name}' has trust floor {trust_floor} outside (0, 1]")]
    TrustFloorOutOfRange { name: String, trust_floor: f64 },

    #[error("duplicate catalog entry: {category} / '{name}'")]
    Duplicate { category: Category, name: String },
}

fn merged_must_not<'a>(extra: &'a [&'a str]) -> Vec<&'a str> {
    MUST_NOT_COMMON.iter().chain(extra.iter()).copied().collect()
}

fn expand_cpus() -> Vec<CatalogEntry> {
    let must_not = merged_must_not(MUST_NOT_CPU);
    CPUS.iter()
        .map(|(brand, model)| {
            let name = format!("{brand} {model}");
            let attrs = ProductAttrs::new(name.clone(), &must_not);
            CatalogEntry {
                category: Category::Cpu,
                brand: (*brand).to_string(),
                model: (*model).to_string(),
                name,
                attrs,
            }
        })
        .collect()
}

fn expand_gpus() -> Vec<CatalogEntry> {
    let must_not = merged_must_not(MUST_NOT_GPU);
    let mut out = Vec::with_capacity(GPU_CHIPS.len() * GPU_VARIANTS.len());

    for (brand, chip, vram) in GPU_CHIPS {
        for (variant, trust_floor, trust_required) in GPU_VARIANTS {
            // The variant suffix distinguishes listing categories with
            // different trust thresholds; the search query deliberately
            // omits it so all variants hit the same listings.
            let name = format!("{brand} {chip} {vram}GB ({variant})");
            let mut attrs =
                ProductAttrs::new(format!("{brand} {chip} {vram}GB"), &must_not);
            attrs.vram_gb = Some(*vram);
            attrs.trust_floor = *trust_floor;
            attrs.seller_trust_required = *trust_required;

            out.push(CatalogEntry {
                category: Category::Gpu,
                brand: (*brand).to_string(),
                model: (*chip).to_string(),
                name,
                attrs,
            });
        }
    }

    out
}

/// Render a capacity for display: fractional terabytes read as gigabytes
/// ("500GB"), whole terabytes as "1TB", "2TB", ...
fn capacity_label(tb: f64) -> String {
    if tb < 1.0 {
        format!("{}GB", (tb * 1000.0).round() as u32)
    } else {
        format!("{}TB", tb as u32)
    }
}

fn expand_ssds() -> Vec<CatalogEntry> {
    let must_not = merged_must_not(MUST_NOT_SSD);
    let mut out = Vec::new();

    for (brand, model, interface, capacities) in SSDS {
        for tb in capacities.iter() {
            let name = format!("{brand} {model} {}", capacity_label(*tb));
            let mut attrs = ProductAttrs::new(name.clone(), &must_not);
            attrs.capacity_tb = Some(*tb);
            attrs.interface = Some((*interface).to_string());

            out.push(CatalogEntry {
                category: Category::Ssd,
                brand: (*brand).to_string(),
                model: (*model).to_string(),
                name,
                attrs,
            });
        }
    }

    out
}

fn expand_ram() -> Vec<CatalogEntry> {
    let must_not = merged_must_not(MUST_NOT_RAM);
    let mut out =
        Vec::with_capacity(RAM_BRANDS.len() * RAM_KITS.len() * RAM_SPEEDS.len());

    for brand in RAM_BRANDS {
        for (kit_gb, stick_gb) in RAM_KITS {
            for (ddr, speed, cl) in RAM_SPEEDS {
                let name = format!(
                    "{brand} {kit_gb}GB (2x{stick_gb}GB) DDR{ddr}-{speed} CL{cl}"
                );
                let mut attrs = ProductAttrs::new(name.clone(), &must_not);
                attrs.ddr = Some(*ddr);
                attrs.speed_mhz = Some(*speed);
                attrs.cl = Some(*cl);
                attrs.kit_gb = Some(*kit_gb);
                attrs.sticks = Some(2);

                out.push(CatalogEntry {
                    category: Category::Ram,
                    brand: (*brand).to_string(),
                    // RAM rows are differentiated by attributes, not by a
                    // real model number; the generation is the model label.
                    model: format!("DDR{ddr}"),
                    name,
                    attrs,
                });
            }
        }
    }

    out
}

fn expand_motherboards() -> Vec<CatalogEntry> {
    let must_not = merged_must_not(MUST_NOT_MOTHERBOARD);
    MOTHERBOARDS
        .iter()
        .map(|(brand, model, socket, chipset)| {
            let name = format!("{brand} {model}");
            let mut attrs = ProductAttrs::new(name.clone(), &must_not);
            attrs.socket = Some((*socket).to_string());
            attrs.chipset = Some((*chipset).to_string());
            CatalogEntry {
                category: Category::Motherboard,
                brand: (*brand).to_string(),
                model: (*model).to_string(),
                name,
                attrs,
            }
        })
        .collect()
}

fn expand_psus() -> Vec<CatalogEntry> {
    let must_not = merged_must_not(MUST_NOT_PSU);
    PSUS.iter()
        .map(|(brand, model, watts, efficiency)| {
            let name = format!("{brand} {model} {watts}W");
            let mut attrs = ProductAttrs::new(name.clone(), &must_not);
            attrs.watts = Some(*watts);
            attrs.efficiency = Some((*efficiency).to_string());
            CatalogEntry {
                category: Category::Psu,
                brand: (*brand).to_string(),
                model: (*model).to_string(),
                name,
                attrs,
            }
        })
        .collect()
}

fn expand_coolers() -> Vec<CatalogEntry> {
    let must_not = merged_must_not(MUST_NOT_COOLER);
    COOLERS
        .iter()
        .map(|(brand, model, kind)| {
            let name = format!("{brand} {model}");
            let mut attrs = ProductAttrs::new(name.clone(), &must_not);
            attrs.cooler_type = Some((*kind).to_string());
            CatalogEntry {
                category: Category::Cooler,
                brand: (*brand).to_string(),
                model: (*model).to_string(),
                name,
                attrs,
            }
        })
        .collect()
}

fn expand_cases() -> Vec<CatalogEntry> {
    let must_not = merged_must_not(MUST_NOT_CASE);
    CASES
        .iter()
        .map(|(brand, model)| {
            let name = format!("{brand} {model}");
            let attrs = ProductAttrs::new(name.clone(), &must_not);
            CatalogEntry {
                category: Category::Case,
                brand: (*brand).to_string(),
                model: (*model).to_string(),
                name,
                attrs,
            }
        })
        .collect()
}

/// Expand the embedded definition tables into the full SKU list, in a
/// fixed category order.
pub fn embedded_catalog() -> Vec<CatalogEntry> {
    let mut entries = Vec::new();
    entries.extend(expand_cpus());
    entries.extend(expand_gpus());
    entries.extend(expand_ssds());
    entries.extend(expand_ram());
    entries.extend(expand_motherboards());
    entries.extend(expand_psus());
    entries.extend(expand_coolers());
    entries.extend(expand_cases());
    entries
}

/// Build and validate the complete catalog: the embedded expansion plus any
/// operator-supplied extra entries appended after it.
pub fn build_catalog(extra: Vec<CatalogEntry>) -> Result<Vec<CatalogEntry>, CatalogError> {
    let mut entries = embedded_catalog();
    entries.extend(extra);
    validate(&entries)?;
    Ok(entries)
}

/// Expected per-category row counts of the embedded expansion, used by the
/// post-seed verification report.
pub fn expected_counts() -> Vec<(Category, usize)> {
    let mut counts: Vec<(Category, usize)> =
        Category::ALL.iter().map(|c| (*c, 0)).collect();
    for entry in embedded_catalog() {
        if let Some(slot) = counts.iter_mut().find(|(c, _)| *c == entry.category) {
            slot.1 += 1;
        }
    }
    counts
}

fn validate(entries: &[CatalogEntry]) -> Result<(), CatalogError> {
    let mut seen: HashSet<(Category, &str)> = HashSet::with_capacity(entries.len());

    for entry in entries {
        if entry.name.trim().is_empty() {
            return Err(CatalogError::EmptyName {
                category: entry.category,
                brand: entry.brand.clone(),
            });
        }
        if entry.attrs.query.trim().is_empty() {
            return Err(CatalogError::EmptyQuery {
                name: entry.name.clone(),
            });
        }
        let floor = entry.attrs.trust_floor;
        if !(floor > 0.0 && floor <= 1.0) {
            return Err(CatalogError::TrustFloorOutOfRange {
                name: entry.name.clone(),
                trust_floor: floor,
            });
        }
        if !seen.insert((entry.category, entry.name.as_str())) {
            return Err(CatalogError::Duplicate {
                category: entry.category,
                name: entry.name.clone(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_is_valid() {
        let entries = build_catalog(Vec::new()).unwrap();
        assert!(!entries.is_empty());
    }

    #[test]
    fn test_gpu_expansion_is_chips_times_variants() {
        let gpus: Vec<_> = embedded_catalog()
            .into_iter()
            .filter(|e| e.category == Category::Gpu)
            .collect();
        assert_eq!(gpus.len(), GPU_CHIPS.len() * GPU_VARIANTS.len());
        assert_eq!(gpus.len(), 102);
    }

    #[test]
    fn test_per_category_counts() {
        let counts = expected_counts();
        let get = |cat: Category| counts.iter().find(|(c, _)| *c == cat).unwrap().1;

        assert_eq!(get(Category::Cpu), 38);
        assert_eq!(get(Category::Gpu), 102);
        assert_eq!(get(Category::Case), 29);
        assert_eq!(
            get(Category::Ram),
            RAM_BRANDS.len() * RAM_KITS.len() * RAM_SPEEDS.len()
        );
    }

    #[test]
    fn test_must_not_merges_common_and_category_terms() {
        let merged = merged_must_not(MUST_NOT_CPU);
        assert_eq!(merged.len(), MUST_NOT_COMMON.len() + MUST_NOT_CPU.len());
        assert!(merged.contains(&"for parts"));
        assert!(merged.contains(&"combo"));

        let cpu = embedded_catalog()
            .into_iter()
            .find(|e| e.category == Category::Cpu)
            .unwrap();
        assert!(cpu.attrs.must_not.iter().any(|t| t == "for parts"));
        assert!(cpu.attrs.must_not.iter().any(|t| t == "combo"));
    }

    #[test]
    fn test_cpu_name_composition() {
        let entries = embedded_catalog();
        assert!(
            entries
                .iter()
                .any(|e| e.category == Category::Cpu && e.name == "AMD Ryzen 5 5600X")
        );
    }

    #[test]
    fn test_gpu_variant_names_are_distinct_skus() {
        let entries = embedded_catalog();
        let rtx4090: Vec<_> = entries
            .iter()
            .filter(|e| e.category == Category::Gpu && e.name.starts_with("NVIDIA RTX 4090 "))
            .collect();

        assert_eq!(rtx4090.len(), 3);
        // Same query for every variant, different names and trust floors.
        for entry in &rtx4090 {
            assert_eq!(entry.attrs.query, "NVIDIA RTX 4090 24GB");
        }
        let floors: HashSet<String> = rtx4090
            .iter()
            .map(|e| format!("{:.2}", e.attrs.trust_floor))
            .collect();
        assert_eq!(floors.len(), 3);
    }

    #[test]
    fn test_capacity_labels() {
        assert_eq!(capacity_label(0.5), "500GB");
        assert_eq!(capacity_label(1.0), "1TB");
        assert_eq!(capacity_label(4.0), "4TB");
    }

    #[test]
    fn test_ram_name_composition() {
        let entries = embedded_catalog();
        assert!(
            entries
                .iter()
                .any(|e| e.name == "Corsair 32GB (2x16GB) DDR5-6000 CL30")
        );
    }

    #[test]
    fn test_name_determinism_across_runs() {
        let a: Vec<String> = embedded_catalog().into_iter().map(|e| e.name).collect();
        let b: Vec<String> = embedded_catalog().into_iter().map(|e| e.name).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_every_entry_has_a_query() {
        for entry in embedded_catalog() {
            assert!(
                !entry.attrs.query.trim().is_empty(),
                "empty query for {}",
                entry.name
            );
        }
    }

    #[test]
    fn test_duplicate_extra_entry_is_fatal() {
        let mut dup = embedded_catalog().into_iter().next().unwrap();
        dup.attrs.query = dup.name.clone();
        let err = build_catalog(vec![dup]).unwrap_err();
        assert!(matches!(err, CatalogError::Duplicate { .. }));
    }

    #[test]
    fn test_empty_query_is_fatal() {
        let mut bad = embedded_catalog().into_iter().next().unwrap();
        bad.name = "Test Entry Without Query".to_string();
        bad.attrs.query = String::new();
        let err = build_catalog(vec![bad]).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyQuery { .. }));
    }

    #[test]
    fn test_trust_floor_out_of_range_is_fatal() {
        let mut bad = embedded_catalog().into_iter().next().unwrap();
        bad.name = "Test Entry Bad Floor".to_string();
        bad.attrs.trust_floor = 1.5;
        let err = build_catalog(vec![bad]).unwrap_err();
        assert!(matches!(err, CatalogError::TrustFloorOutOfRange { .. }));
    }
}
