//! # Introduction
//!
//! structscope recovers struct/class/union declarations from C/C++-like
//! source text with a line-oriented heuristic scanner, classifies each
//! structure by its pointer and self-reference pattern, projects the
//! results onto a fixed-size grid of typed cells, and replays synthetic
//! execution steps over that grid.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Scanner → Records → Classifier → Grid → Playback
//! ```
//!
//! 1. [`scanner`]: line-oriented scan recovering
//!    [`StructureRecord`](scanner::StructureRecord)s
//! 2. [`classify`]: labels each record linked / nested / simple and
//!    attaches synthetic sizing numbers
//! 3. [`grid`]: projects classified structures onto a row-major grid of
//!    [`Cell`](grid::Cell)s
//! 4. [`playback`]: execution steps and forward/backward navigation with
//!    stochastic drift
//! 5. [`live`]: the live structure board collaborator programs can feed
//!    directly
//!
//! ## Determinism
//!
//! Every stochastic path draws from a seedable RNG. The default entry
//! points use [`DEFAULT_SEED`]; the `*_with_seed` variants take a caller
//! seed, so the same input and seed always reproduce the same output.
//!
//! All operations are synchronous pure functions over immutable inputs;
//! the only state is the playback cursor and grid snapshot, both owned by
//! the calling session.

pub mod classify;
pub mod grid;
pub mod live;
pub mod playback;
pub mod report;
pub mod scanner;

pub use classify::{classify, classify_with_seed, Category, ClassifiedStructure};
pub use grid::{map_to_grid, map_to_grid_with_seed, Cell, CellState, GridConfig};
pub use live::{LiveBoard, LiveError, LiveKind, LiveNode, LiveStructure};
pub use playback::{advance_step, build_steps, retreat_step, ExecutionStep, Playback, StepKind};
pub use report::{analyze, analyze_with_seed, AnalysisReport};
pub use scanner::{scan, Member, Method, StructureKind, StructureRecord};

/// Seed used by every entry point that does not take one explicitly.
pub const DEFAULT_SEED: u64 = 42;
