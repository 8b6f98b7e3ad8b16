use serde::{Deserialize, Serialize};
use std::fmt;

/// Carrier frequency label in MHz.
pub type Megahertz = u32;

/// Which axis a survey measures: per-user throughput on a link direction,
/// or signal quality across deployment positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Downlink,
    Uplink,
    Position,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Downlink => "downlink",
            Category::Uplink => "uplink",
            Category::Position => "position",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "downlink" => Some(Category::Downlink),
            "uplink" => Some(Category::Uplink),
            "position" => Some(Category::Position),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One survey: a category tag plus its ordered samples.
///
/// Each sample string holds the values recorded by one simulation run, joined
/// by the catalog delimiter. Position surveys additionally carry one carrier
/// frequency per sample, in sample order; the two lists must stay the same
/// length (enforced at render time).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub category: Category,
    /// Carrier labels for position surveys. Empty for throughput surveys.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frequencies_mhz: Vec<Megahertz>,
    pub samples: Vec<String>,
}
