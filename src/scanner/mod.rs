//! Structural scanner
//!
//! This module recovers structure declarations from raw source text:
//! - [`records`]: record definitions (structures, members, methods)
//! - [`scan`](scan::scan): the line-oriented scan pass
//!
//! # Supported input
//!
//! C/C++-like source containing `struct`, `class`, and `union` declarations
//! with member variables (pointer markers included) and method declarations
//! or inline definitions. The scanner is a heuristic state machine over
//! lines, not a parser:
//! - No preprocessor, templates, or multi-file resolution
//! - Braces inside strings or comments are counted like any other brace
//! - Unterminated declarations are dropped rather than reported
//!
//! Malformed input yields fewer records, never an error.

mod lines;
pub mod records;
pub mod scan;

pub use records::{Member, Method, StructureKind, StructureRecord};
pub use scan::scan;
