//! Projection of classified structures onto a fixed-size grid
//!
//! Each structure claims whole rows in input order, sized by its share of
//! the synthetic instance total. Cell states are drawn from one uniform
//! draw per cell against cumulative thresholds, with per-category
//! multipliers skewing the mix: linked structures lean toward pointer
//! cells, nested toward pointer and dropped, simple toward active.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::cell::{Cell, CellState};
use super::config::GridConfig;
use crate::classify::{Category, ClassifiedStructure};
use crate::DEFAULT_SEED;

/// Per-category multipliers for (active, pointer, dropped) ratios.
fn multipliers(category: Category) -> (f64, f64, f64) {
    match category {
        Category::Linked => (1.2, 1.5, 1.0),
        Category::Nested => (1.0, 1.8, 1.3),
        Category::Simple => (1.5, 0.5, 0.8),
    }
}

/// One uniform draw against cumulative active / pointer / dropped
/// thresholds; anything past the dropped threshold is empty.
pub(crate) fn sample_state(rng: &mut StdRng, active: f64, pointer: f64, dropped: f64) -> CellState {
    let draw: f64 = rng.gen();
    if draw < active {
        CellState::Active
    } else if draw < active + pointer {
        CellState::Pointer
    } else if draw < active + pointer + dropped {
        CellState::Dropped
    } else {
        CellState::Empty
    }
}

/// Map classified structures onto a grid with the crate default seed.
pub fn map_to_grid(classified: &[ClassifiedStructure], config: &GridConfig) -> Vec<Cell> {
    map_to_grid_with_seed(classified, config, DEFAULT_SEED)
}

/// Map classified structures onto a grid of `config.width` x
/// `config.height` cells in row-major order.
///
/// An empty input produces the fallback demo grid where every cell is
/// sampled from the unadjusted ratios. A zero-sized config yields an
/// empty vec. Positions no structure claims stay empty.
pub fn map_to_grid_with_seed(
    classified: &[ClassifiedStructure],
    config: &GridConfig,
    seed: u64,
) -> Vec<Cell> {
    let width = config.width;
    let height = config.height;
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut cells: Vec<Cell> = (0..height)
        .flat_map(|y| (0..width).map(move |x| Cell::empty(x, y)))
        .collect();

    if classified.is_empty() {
        for cell in &mut cells {
            let state = sample_state(
                &mut rng,
                config.active_ratio,
                config.pointer_ratio,
                config.dropped_ratio,
            );
            if state != CellState::Empty {
                cell.state = state;
                cell.label = Some(format!("Node_{}_{}", cell.y, cell.x));
                cell.note = Some(format!("{} cell at ({}, {})", state, cell.x, cell.y));
            }
        }
        return cells;
    }

    let total: u64 = classified.iter().map(|c| u64::from(c.instance_count)).sum();
    let total = total.max(1);
    let cells_per_instance = (width * height) as f64 / total as f64;

    let mut row = 0usize;
    for structure in classified {
        if row >= height {
            debug!(name = %structure.record.name, "grid full, structure skipped");
            continue;
        }

        let rows_needed = (f64::from(structure.instance_count) * cells_per_instance
            / width as f64)
            .ceil() as usize;
        let end = (row + rows_needed).min(height);
        let (am, pm, dm) = multipliers(structure.category);
        let name = &structure.record.name;

        for y in row..end {
            for x in 0..width {
                let state = sample_state(
                    &mut rng,
                    config.active_ratio * am,
                    config.pointer_ratio * pm,
                    config.dropped_ratio * dm,
                );
                let cell = &mut cells[y * width + x];
                cell.state = state;
                if state != CellState::Empty {
                    cell.label = Some(format!("{}_{}_{}", name, x, y));
                    cell.note = Some(format!("{} {} at ({}, {})", name, state, x, y));
                }
            }
        }

        debug!(name = %name, rows = end - row, "rows allocated");
        row = end;
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_with_seed;
    use crate::scanner::scan;

    fn sample_structures() -> Vec<ClassifiedStructure> {
        let source = "\
struct Point {
    int x;
};

struct Node {
    Point pos;
    Node* next;
};";
        classify_with_seed(&scan(source), 3)
    }

    #[test]
    fn test_grid_dimensions_and_coverage() {
        let config = GridConfig::default();
        let cells = map_to_grid(&sample_structures(), &config);
        assert_eq!(cells.len(), config.cell_count());

        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.x, i % config.width);
            assert_eq!(cell.y, i / config.width);
        }
    }

    #[test]
    fn test_fallback_grid() {
        let config = GridConfig::default();
        let cells = map_to_grid(&[], &config);
        assert_eq!(cells.len(), 96);

        for cell in &cells {
            match cell.state {
                CellState::Empty => assert!(cell.label.is_none()),
                state => {
                    let label = cell.label.as_deref().unwrap();
                    assert_eq!(label, format!("Node_{}_{}", cell.y, cell.x));
                    let note = cell.note.as_deref().unwrap();
                    assert!(note.starts_with(state.as_str()));
                }
            }
        }
    }

    #[test]
    fn test_zero_sized_config() {
        let config = GridConfig {
            width: 0,
            ..GridConfig::default()
        };
        assert!(map_to_grid(&sample_structures(), &config).is_empty());
    }

    #[test]
    fn test_same_seed_same_grid() {
        let structures = sample_structures();
        let config = GridConfig::default();
        let a = map_to_grid_with_seed(&structures, &config, 11);
        let b = map_to_grid_with_seed(&structures, &config, 11);
        assert_eq!(a, b);
    }

    #[test]
    fn test_structure_cells_carry_its_name() {
        let config = GridConfig::default();
        let cells = map_to_grid_with_seed(&sample_structures(), &config, 5);

        let labelled = cells.iter().filter_map(|c| c.label.as_deref());
        for label in labelled {
            assert!(
                label.starts_with("Point_") || label.starts_with("Node_"),
                "unexpected label {label}"
            );
        }
    }

    #[test]
    fn test_saturated_active_ratio() {
        let config = GridConfig {
            active_ratio: 1.0,
            dropped_ratio: 0.0,
            pointer_ratio: 0.0,
            ..GridConfig::default()
        };
        let cells = map_to_grid(&[], &config);
        assert!(cells.iter().all(|c| c.state == CellState::Active));
    }
}
