//! Live structure board
//!
//! An in-process collaborator that lets a running program mirror its data
//! structures into the visualizer: named structures of a declared kind
//! hold nodes carrying JSON values and metadata. Removing a node marks it
//! dropped rather than deleting it, so the grid keeps showing the hole it
//! left behind; deleting a structure removes it outright.
//!
//! Unlike the scan pipeline, board operations have caller-visible failure
//! modes (unknown structure, unknown node) surfaced as [`LiveError`].

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::grid::{Cell, CellState, GridConfig};

/// Errors for live board operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LiveError {
    #[error("structure '{0}' already exists")]
    StructureExists(String),

    #[error("structure '{0}' not found")]
    StructureNotFound(String),

    #[error("node {id} not found in structure '{structure}'")]
    NodeNotFound { structure: String, id: u32 },
}

/// Result type for live board operations
pub type LiveResult<T> = Result<T, LiveError>;

/// Kind of a live structure, matching the wire strings of the client API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiveKind {
    LinkedList,
    Array,
    Tree,
    Graph,
}

impl LiveKind {
    /// Kinds whose nodes carry link slots rendered as pointer cells.
    pub fn has_links(&self) -> bool {
        !matches!(self, LiveKind::Array)
    }
}

/// One node of a live structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveNode {
    pub id: u32,
    pub value: Value,

    /// Drop mask: a removed node stays in place with this flag set
    pub dropped: bool,

    pub metadata: FxHashMap<String, Value>,
}

/// A named live structure and its nodes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveStructure {
    pub name: String,
    pub kind: LiveKind,
    pub depth: u32,
    pub nodes: Vec<LiveNode>,
}

impl LiveStructure {
    fn next_node_id(&self) -> u32 {
        self.nodes.iter().map(|n| n.id + 1).max().unwrap_or(0)
    }

    fn node_mut(&mut self, id: u32) -> Option<&mut LiveNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Nodes not masked out by a remove.
    pub fn live_nodes(&self) -> impl Iterator<Item = &LiveNode> {
        self.nodes.iter().filter(|n| !n.dropped)
    }
}

/// Registry of live structures, in creation order
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LiveBoard {
    structures: Vec<LiveStructure>,
}

impl LiveBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a structure, pre-populated with `initial_size` null nodes.
    pub fn create_structure(
        &mut self,
        name: &str,
        kind: LiveKind,
        depth: u32,
        initial_size: usize,
    ) -> LiveResult<()> {
        if self.structures.iter().any(|s| s.name == name) {
            return Err(LiveError::StructureExists(name.to_string()));
        }

        let nodes = (0..initial_size)
            .map(|i| LiveNode {
                id: i as u32,
                value: Value::Null,
                dropped: false,
                metadata: FxHashMap::default(),
            })
            .collect();

        self.structures.push(LiveStructure {
            name: name.to_string(),
            kind,
            depth,
            nodes,
        });
        debug!(name, ?kind, "structure created");
        Ok(())
    }

    /// Add a node, optionally at a position; returns the new node's id.
    pub fn add_node(
        &mut self,
        name: &str,
        value: Value,
        index: Option<usize>,
        metadata: FxHashMap<String, Value>,
    ) -> LiveResult<u32> {
        let structure = self.structure_mut(name)?;
        let id = structure.next_node_id();
        let node = LiveNode {
            id,
            value,
            dropped: false,
            metadata,
        };

        match index {
            Some(at) if at < structure.nodes.len() => structure.nodes.insert(at, node),
            _ => structure.nodes.push(node),
        }
        Ok(id)
    }

    /// Mark a node dropped. The node stays in place as a hole.
    pub fn remove_node(&mut self, name: &str, id: u32) -> LiveResult<()> {
        let structure = self.structure_mut(name)?;
        match structure.node_mut(id) {
            Some(node) => {
                node.dropped = true;
                Ok(())
            }
            None => Err(LiveError::NodeNotFound {
                structure: name.to_string(),
                id,
            }),
        }
    }

    /// Replace a node's value and merge new metadata over the old.
    pub fn update_node(
        &mut self,
        name: &str,
        id: u32,
        value: Value,
        metadata: FxHashMap<String, Value>,
    ) -> LiveResult<()> {
        let structure = self.structure_mut(name)?;
        match structure.node_mut(id) {
            Some(node) => {
                node.value = value;
                node.metadata.extend(metadata);
                Ok(())
            }
            None => Err(LiveError::NodeNotFound {
                structure: name.to_string(),
                id,
            }),
        }
    }

    pub fn structure(&self, name: &str) -> Option<&LiveStructure> {
        self.structures.iter().find(|s| s.name == name)
    }

    pub fn structures(&self) -> &[LiveStructure] {
        &self.structures
    }

    /// Delete a structure outright (not a drop mask).
    pub fn delete_structure(&mut self, name: &str) -> LiveResult<()> {
        let before = self.structures.len();
        self.structures.retain(|s| s.name != name);
        if self.structures.len() == before {
            return Err(LiveError::StructureNotFound(name.to_string()));
        }
        Ok(())
    }

    /// Project the board onto a grid.
    ///
    /// Deterministic, no sampling: structures claim whole rows in creation
    /// order, one cell per node. Dropped nodes render as dropped cells;
    /// live nodes render active, and for link-bearing kinds each live node
    /// is followed by one pointer cell for its link slot. Unclaimed
    /// positions stay empty.
    pub fn matrix(&self, config: &GridConfig) -> Vec<Cell> {
        let width = config.width;
        let height = config.height;
        if width == 0 || height == 0 {
            return Vec::new();
        }

        let mut cells: Vec<Cell> = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::empty(x, y)))
            .collect();

        let mut row = 0usize;
        for structure in &self.structures {
            if row >= height {
                break;
            }

            let links = structure.kind.has_links();
            let slots: usize = structure
                .nodes
                .iter()
                .map(|n| if links && !n.dropped { 2 } else { 1 })
                .sum();
            if slots == 0 {
                continue;
            }

            let rows_needed = slots.div_ceil(width);
            let end = (row + rows_needed).min(height);

            let mut slot = 0usize;
            for node in &structure.nodes {
                let states: &[CellState] = if node.dropped {
                    &[CellState::Dropped]
                } else if links {
                    &[CellState::Active, CellState::Pointer]
                } else {
                    &[CellState::Active]
                };

                for &state in states {
                    let x = slot % width;
                    let y = row + slot / width;
                    if y >= end {
                        break;
                    }
                    let cell = &mut cells[y * width + x];
                    cell.state = state;
                    cell.label = Some(format!("{}_{}_{}", structure.name, x, y));
                    cell.note = Some(format!("{} {} at ({}, {})", structure.name, state, x, y));
                    slot += 1;
                }
            }

            row = end;
        }

        cells
    }

    fn structure_mut(&mut self, name: &str) -> LiveResult<&mut LiveStructure> {
        self.structures
            .iter_mut()
            .find(|s| s.name == name)
            .ok_or_else(|| LiveError::StructureNotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_and_duplicate() {
        let mut board = LiveBoard::new();
        board
            .create_structure("list", LiveKind::LinkedList, 1, 0)
            .unwrap();
        assert_eq!(
            board.create_structure("list", LiveKind::Array, 1, 0),
            Err(LiveError::StructureExists("list".to_string()))
        );
    }

    #[test]
    fn test_remove_marks_dropped() {
        let mut board = LiveBoard::new();
        board
            .create_structure("list", LiveKind::LinkedList, 1, 0)
            .unwrap();
        let id = board
            .add_node("list", json!(42), None, FxHashMap::default())
            .unwrap();
        board.remove_node("list", id).unwrap();

        let structure = board.structure("list").unwrap();
        assert_eq!(structure.nodes.len(), 1);
        assert!(structure.nodes[0].dropped);
        assert_eq!(structure.live_nodes().count(), 0);
    }

    #[test]
    fn test_update_merges_metadata() {
        let mut board = LiveBoard::new();
        board
            .create_structure("arr", LiveKind::Array, 1, 0)
            .unwrap();

        let mut meta = FxHashMap::default();
        meta.insert("color".to_string(), json!("red"));
        let id = board.add_node("arr", json!(1), None, meta).unwrap();

        let mut more = FxHashMap::default();
        more.insert("weight".to_string(), json!(3));
        board.update_node("arr", id, json!(2), more).unwrap();

        let node = &board.structure("arr").unwrap().nodes[0];
        assert_eq!(node.value, json!(2));
        assert_eq!(node.metadata["color"], json!("red"));
        assert_eq!(node.metadata["weight"], json!(3));
    }

    #[test]
    fn test_unknown_targets_error() {
        let mut board = LiveBoard::new();
        assert_eq!(
            board.remove_node("ghost", 0),
            Err(LiveError::StructureNotFound("ghost".to_string()))
        );

        board
            .create_structure("arr", LiveKind::Array, 1, 1)
            .unwrap();
        assert_eq!(
            board.remove_node("arr", 9),
            Err(LiveError::NodeNotFound {
                structure: "arr".to_string(),
                id: 9,
            })
        );
    }

    #[test]
    fn test_initial_size_assigns_ids() {
        let mut board = LiveBoard::new();
        board
            .create_structure("arr", LiveKind::Array, 1, 3)
            .unwrap();
        let id = board
            .add_node("arr", json!(7), None, FxHashMap::default())
            .unwrap();
        assert_eq!(id, 3);
    }

    #[test]
    fn test_matrix_shows_drop_mask() {
        let mut board = LiveBoard::new();
        board
            .create_structure("arr", LiveKind::Array, 1, 0)
            .unwrap();
        for v in 0..3 {
            board
                .add_node("arr", json!(v), None, FxHashMap::default())
                .unwrap();
        }
        board.remove_node("arr", 1).unwrap();

        let config = GridConfig::default();
        let cells = board.matrix(&config);
        assert_eq!(cells.len(), config.cell_count());
        assert_eq!(cells[0].state, CellState::Active);
        assert_eq!(cells[1].state, CellState::Dropped);
        assert_eq!(cells[2].state, CellState::Active);
        assert_eq!(cells[3].state, CellState::Empty);
    }

    #[test]
    fn test_matrix_link_slots() {
        let mut board = LiveBoard::new();
        board
            .create_structure("list", LiveKind::LinkedList, 1, 0)
            .unwrap();
        board
            .add_node("list", json!(1), None, FxHashMap::default())
            .unwrap();

        let cells = board.matrix(&GridConfig::default());
        assert_eq!(cells[0].state, CellState::Active);
        assert_eq!(cells[1].state, CellState::Pointer);
    }

    #[test]
    fn test_structures_row_aligned() {
        let mut board = LiveBoard::new();
        board
            .create_structure("a", LiveKind::Array, 1, 2)
            .unwrap();
        board
            .create_structure("b", LiveKind::Array, 1, 1)
            .unwrap();

        let config = GridConfig::default();
        let cells = board.matrix(&config);
        // "b" starts on its own row
        assert_eq!(cells[config.width].state, CellState::Active);
        assert_eq!(
            cells[config.width].label.as_deref(),
            Some("b_0_1")
        );
    }

    #[test]
    fn test_delete_structure() {
        let mut board = LiveBoard::new();
        board
            .create_structure("arr", LiveKind::Array, 1, 1)
            .unwrap();
        board.delete_structure("arr").unwrap();
        assert!(board.structure("arr").is_none());
        assert_eq!(
            board.delete_structure("arr"),
            Err(LiveError::StructureNotFound("arr".to_string()))
        );
    }
}
