//! One-call analysis pipeline
//!
//! Runs scan, classify, map, and step generation over a source text and
//! bundles the results into a single serializable report. This is the
//! surface external collaborators (and the CLI) consume.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::{classify_with_seed, ClassifiedStructure};
use crate::grid::{map_to_grid_with_seed, Cell, GridConfig};
use crate::playback::{build_steps, ExecutionStep};
use crate::scanner::scan;
use crate::DEFAULT_SEED;

/// Full output of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub structures: Vec<ClassifiedStructure>,
    pub grid: Vec<Cell>,
    pub steps: Vec<ExecutionStep>,
}

/// Analyze source text with the crate default seed.
pub fn analyze(source: &str, config: &GridConfig) -> AnalysisReport {
    analyze_with_seed(source, config, DEFAULT_SEED)
}

/// Analyze source text: scan, classify, map, and build steps.
///
/// Total like its parts: malformed input produces an emptier report, not
/// an error. The whole report is recomputed on every call.
pub fn analyze_with_seed(source: &str, config: &GridConfig, seed: u64) -> AnalysisReport {
    let records = scan(source);
    let structures = classify_with_seed(&records, seed);
    let grid = map_to_grid_with_seed(&structures, config, seed);
    let steps = build_steps(&records);

    debug!(
        structures = structures.len(),
        cells = grid.len(),
        steps = steps.len(),
        "analysis complete"
    );

    AnalysisReport {
        structures,
        grid,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_source_empty_report() {
        let report = analyze("", &GridConfig::default());
        assert!(report.structures.is_empty());
        assert!(report.steps.is_empty());
        // the fallback grid still fills the full area
        assert_eq!(report.grid.len(), 96);
    }

    #[test]
    fn test_report_round_trips_through_json() {
        let report = analyze(
            "struct Node { int data; Node* next; };",
            &GridConfig::default(),
        );
        let json = serde_json::to_string(&report).unwrap();
        let back: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, back);
    }
}
