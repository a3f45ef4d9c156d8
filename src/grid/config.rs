// Grid sizing and sampling configuration

use serde::{Deserialize, Serialize};

/// Configuration for grid mapping
///
/// The three ratios are probabilities in [0, 1]; they need not sum to 1
/// and whatever remains is the empty probability. Callers validate that
/// the numeric fields are finite and non-negative before handing a config
/// in; the mapper only guards the degenerate zero-sized case.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridConfig {
    pub width: usize,
    pub height: usize,
    pub active_ratio: f64,
    pub dropped_ratio: f64,
    pub pointer_ratio: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 12,
            height: 8,
            active_ratio: 0.4,
            dropped_ratio: 0.2,
            pointer_ratio: 0.2,
        }
    }
}

impl GridConfig {
    /// Total number of cells a full grid holds.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }
}
