use serde::{Deserialize, Serialize};

/// Structured matching metadata stored as `attrs_json` on every product row.
///
/// The downstream matcher submits `query` verbatim to the marketplace
/// search, drops any listing whose title contains a `must_not` substring,
/// and uses `trust_floor` / `seller_trust_required` to decide how strict
/// the seller filter should be. None of this is enforced by the seeder
/// itself; it only guarantees the fields are present and well-formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAttrs {
    pub query: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub must_not: Vec<String>,

    /// Minimum seller trust weight (0, 1] the matcher should accept.
    pub trust_floor: f64,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub seller_trust_required: bool,

    // Category-specific dimensions. Only the fields relevant to the row's
    // category are set; the rest are omitted from the JSON entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vram_gb: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity_tb: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interface: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ddr: Option<u8>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_mhz: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cl: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kit_gb: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticks: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub socket: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chipset: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watts: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooler_type: Option<String>,
}

/// Trust weight of a completely unknown marketplace seller. Rows without a
/// stricter variant accept anything at or above this.
pub const TRUST_FLOOR_ANY: f64 = 0.70;

impl ProductAttrs {
    pub fn new(query: impl Into<String>, must_not: &[&str]) -> Self {
        Self {
            query: query.into(),
            must_not: must_not.iter().map(|s| (*s).to_string()).collect(),
            trust_floor: TRUST_FLOOR_ANY,
            seller_trust_required: false,
            vram_gb: None,
            capacity_tb: None,
            interface: None,
            ddr: None,
            speed_mhz: None,
            cl: None,
            kit_gb: None,
            sticks: None,
            socket: None,
            chipset: None,
            watts: None,
            efficiency: None,
            cooler_type: None,
        }
    }
}
