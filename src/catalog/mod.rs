//! The product catalog: embedded definitions, combinatorial expansion into
//! SKU rows, and the attribute contract consumed by the price matcher.

pub mod attrs;
pub mod definitions;
pub mod expand;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub use attrs::ProductAttrs;
pub use expand::{CatalogError, build_catalog, embedded_catalog, expected_counts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cpu,
    Gpu,
    Ssd,
    Ram,
    Motherboard,
    Psu,
    Cooler,
    Case,
}

impl Category {
    pub const ALL: [Self; 8] = [
        Self::Cpu,
        Self::Gpu,
        Self::Ssd,
        Self::Ram,
        Self::Motherboard,
        Self::Psu,
        Self::Cooler,
        Self::Case,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpu => "cpu",
            Self::Gpu => "gpu",
            Self::Ssd => "ssd",
            Self::Ram => "ram",
            Self::Motherboard => "motherboard",
            Self::Psu => "psu",
            Self::Cooler => "cooler",
            Self::Case => "case",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "cpu" => Ok(Self::Cpu),
            "gpu" | "video card" => Ok(Self::Gpu),
            "ssd" => Ok(Self::Ssd),
            "ram" => Ok(Self::Ram),
            "motherboard" | "mobo" => Ok(Self::Motherboard),
            "psu" => Ok(Self::Psu),
            "cooler" => Ok(Self::Cooler),
            "case" => Ok(Self::Case),
            other => anyhow::bail!("unknown category '{other}'"),
        }
    }
}

/// One sellable product definition, ready to insert.
///
/// `name` is the identity half of the (category, name) uniqueness pair and
/// is composed by a fixed per-category rule so that re-runs produce
/// byte-identical strings.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub category: Category,
    pub brand: String,
    pub model: String,
    pub name: String,
    pub attrs: ProductAttrs,
}

impl CatalogEntry {
    pub fn attrs_json(&self) -> Result<String> {
        serde_json::to_string(&self.attrs).context("failed to serialize attrs_json")
    }
}

/// A product record from an operator-supplied catalog file. Missing `name`
/// falls back to `"{brand} {model}"`, missing `query` falls back to the
/// name, matching the embedded composition rules.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtraEntry {
    pub category: Category,
    pub brand: String,
    pub model: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub must_not: Vec<String>,
    #[serde(default)]
    pub trust_floor: Option<f64>,
    #[serde(default)]
    pub seller_trust_required: bool,
}

#[derive(Debug, Deserialize)]
struct ExtraCatalogFile {
    #[serde(default)]
    products: Vec<ExtraEntry>,
}

impl From<ExtraEntry> for CatalogEntry {
    fn from(e: ExtraEntry) -> Self {
        let name = e
            .name
            .unwrap_or_else(|| format!("{} {}", e.brand, e.model));
        let mut attrs = ProductAttrs::new(e.query.unwrap_or_else(|| name.clone()), &[]);
        attrs.must_not = e.must_not;
        if let Some(floor) = e.trust_floor {
            attrs.trust_floor = floor;
        }
        attrs.seller_trust_required = e.seller_trust_required;

        Self {
            category: e.category,
            brand: e.brand,
            model: e.model,
            name,
            attrs,
        }
    }
}

/// Load additional catalog entries from a TOML file (`[[products]]`
/// records). The entries still go through [`build_catalog`] validation, so
/// a malformed file fails the seed run the same way malformed embedded
/// data would.
pub fn load_extra_catalog(path: &Path) -> Result<Vec<CatalogEntry>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let file: ExtraCatalogFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

    Ok(file.products.into_iter().map(CatalogEntry::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trip() {
        for cat in Category::ALL {
            assert_eq!(cat.as_str().parse::<Category>().unwrap(), cat);
        }
    }

    #[test]
    fn test_extra_entry_defaults() {
        let toml_str = r#"
            [[products]]
            category = "gpu"
            brand = "NVIDIA"
            model = "RTX 4070 Ti"
            must_not = ["mining"]
            trust_floor = 0.85
        "#;

        let file: ExtraCatalogFile = toml::from_str(toml_str).unwrap();
        let entry: CatalogEntry = file.products.into_iter().next().unwrap().into();

        assert_eq!(entry.name, "NVIDIA RTX 4070 Ti");
        assert_eq!(entry.attrs.query, "NVIDIA RTX 4070 Ti");
        assert_eq!(entry.attrs.must_not, vec!["mining".to_string()]);
        assert!((entry.attrs.trust_floor - 0.85).abs() < f64::EPSILON);
        assert!(!entry.attrs.seller_trust_required);
    }
}
