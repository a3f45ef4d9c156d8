// Typed grid cells

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single grid cell
///
/// `Dropped` marks a logically deleted element retained in place rather
/// than physically removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    Active,
    Dropped,
    Pointer,
    Empty,
}

impl CellState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CellState::Active => "active",
            CellState::Dropped => "dropped",
            CellState::Pointer => "pointer",
            CellState::Empty => "empty",
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One cell of the visualization grid
///
/// A grid is a row-major `Vec<Cell>` of exactly width x height cells with
/// unique coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub x: usize,
    pub y: usize,
    pub state: CellState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Human-readable tooltip text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Cell {
    pub fn empty(x: usize, y: usize) -> Self {
        Cell {
            x,
            y,
            state: CellState::Empty,
            label: None,
            note: None,
        }
    }
}
