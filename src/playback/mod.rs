//! Execution steps and grid playback
//!
//! [`build_steps`] flattens scanned records into a line-ordered list of
//! execution steps; [`Playback`] walks a grid snapshot forward and
//! backward along that list.
//!
//! Forward steps apply stochastic structural drift: each cell has a small
//! independent chance of being resampled. This models playback churn, not
//! a faithful replay of real memory operations. Backward steps move only
//! the cursor; there is no undo buffer, so cells mutated on the way
//! forward keep their drifted state. Both directions clamp at the ends of
//! the step list.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::grid::mapper::sample_state;
use crate::grid::{Cell, CellState};
use crate::scanner::StructureRecord;
use crate::DEFAULT_SEED;

/// Per-cell probability of being resampled on a forward step.
const DRIFT_PROBABILITY: f64 = 0.05;

/// Thresholds used when a drifting cell is resampled:
/// 40% active, 20% pointer, 20% dropped, 20% empty.
const DRIFT_ACTIVE: f64 = 0.4;
const DRIFT_POINTER: f64 = 0.2;
const DRIFT_DROPPED: f64 = 0.2;

/// What a single execution step represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StepKind {
    Definition,
    MemberDecl,
    MethodDecl,
    End,
}

/// One replayable step, tied to a source line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStep {
    pub source_line: usize,
    pub description: String,
    pub kind: StepKind,
}

/// Flatten records into execution steps, sorted ascending by source line.
///
/// Each record contributes a definition step, one step per member and
/// method at its own line, and an end step. The sort is stable, so steps
/// sharing a line keep scan order.
pub fn build_steps(records: &[StructureRecord]) -> Vec<ExecutionStep> {
    let mut steps = Vec::new();

    for record in records {
        steps.push(ExecutionStep {
            source_line: record.start_line,
            description: format!("{} {} defined", record.kind, record.name),
            kind: StepKind::Definition,
        });

        for member in &record.members {
            steps.push(ExecutionStep {
                source_line: member.line,
                description: format!("member {} declared in {}", member.name, record.name),
                kind: StepKind::MemberDecl,
            });
        }

        for method in &record.methods {
            steps.push(ExecutionStep {
                source_line: method.line,
                description: format!("method {} declared in {}", method.name, record.name),
                kind: StepKind::MethodDecl,
            });
        }

        steps.push(ExecutionStep {
            source_line: record.end_line,
            description: format!("end of {}", record.name),
            kind: StepKind::End,
        });
    }

    steps.sort_by_key(|s| s.source_line);
    steps
}

/// One drift pass over a grid: every cell independently has a
/// `DRIFT_PROBABILITY` chance of being resampled. A cell drifting to
/// empty loses its label; otherwise the label is left as-is.
fn drift(grid: &[Cell], rng: &mut StdRng) -> Vec<Cell> {
    grid.iter()
        .map(|cell| {
            if rng.gen::<f64>() < DRIFT_PROBABILITY {
                let state = sample_state(rng, DRIFT_ACTIVE, DRIFT_POINTER, DRIFT_DROPPED);
                let mut drifted = cell.clone();
                drifted.state = state;
                if state == CellState::Empty {
                    drifted.label = None;
                }
                drifted
            } else {
                cell.clone()
            }
        })
        .collect()
}

/// Apply one forward drift pass to a grid at the given step index.
///
/// The RNG is derived from the crate default seed and the step index, so
/// the same (grid, step) pair always drifts the same way.
pub fn advance_step(grid: &[Cell], step: usize) -> Vec<Cell> {
    let mut rng = StdRng::seed_from_u64(DEFAULT_SEED ^ step as u64);
    drift(grid, &mut rng)
}

/// Step a cursor backward. Grid contents are not restored; see
/// [`Playback::retreat`].
pub fn retreat_step(step: usize) -> usize {
    step.saturating_sub(1)
}

/// Playback session over one grid snapshot and its step list
///
/// Owns the current grid, the step cursor, and the RNG driving drift. The
/// cursor is always within `[0, total_steps - 1]` (or 0 when there are no
/// steps); advancing at the last step and retreating at the first are
/// no-ops.
#[derive(Debug)]
pub struct Playback {
    grid: Vec<Cell>,
    steps: Vec<ExecutionStep>,
    cursor: usize,
    rng: StdRng,
}

impl Playback {
    pub fn new(grid: Vec<Cell>, steps: Vec<ExecutionStep>) -> Self {
        Self::with_seed(grid, steps, DEFAULT_SEED)
    }

    pub fn with_seed(grid: Vec<Cell>, steps: Vec<ExecutionStep>, seed: u64) -> Self {
        Playback {
            grid,
            steps,
            cursor: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Advance one step, drifting the grid. No-op at the last step.
    pub fn advance(&mut self) -> &[Cell] {
        if self.cursor + 1 < self.steps.len() {
            self.cursor += 1;
            self.grid = drift(&self.grid, &mut self.rng);
        }
        &self.grid
    }

    /// Retreat one step. Only the cursor moves: cells mutated by earlier
    /// forward steps keep their drifted state (there is no undo buffer).
    /// No-op at step 0.
    pub fn retreat(&mut self) -> usize {
        self.cursor = self.cursor.saturating_sub(1);
        self.cursor
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn grid(&self) -> &[Cell] {
        &self.grid
    }

    pub fn steps(&self) -> &[ExecutionStep] {
        &self.steps
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// The step the cursor currently points at, if any.
    pub fn current_step(&self) -> Option<&ExecutionStep> {
        self.steps.get(self.cursor)
    }
}
