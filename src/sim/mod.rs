//! Deterministic simulation module
//!
//! All grid logic lives here. This module must be pure and deterministic:
//! - Input text in, grid state and results out
//! - Stable iteration order (row-major by packed cell key)
//! - No I/O, rendering or platform dependencies

pub mod blast;
pub mod block;
pub mod grid;
pub mod material;
pub mod stats;

pub use blast::{BlastHit, BlastParams, BlastResult, blast_damage, falloff};
pub use block::Block;
pub use grid::{CellKey, Grid, cell_key, cell_position};
pub use material::{MaterialDefaults, MaterialKind};
pub use stats::GridStats;

use crate::error::IngestError;

/// Parse text and build a grid
pub fn build_grid_from_text(text: &str) -> Result<Grid, IngestError> {
    Grid::from_text(text)
}

/// Apply a blast centered on `(center_x, center_y)`
pub fn apply_blast(grid: &mut Grid, center_x: i32, center_y: i32, radius: i32, power: f32) -> BlastResult {
    grid.apply_blast(BlastParams::new(center_x, center_y, radius, power))
}

pub fn compute_stats(grid: &Grid) -> GridStats {
    grid.stats()
}

/// Fresh grid rebuilt from the original snapshot
pub fn reset_grid(grid: &Grid) -> Grid {
    grid.reset()
}

pub fn get_block_at(grid: &Grid, x: i32, y: i32) -> Option<&Block> {
    grid.block_at(x, y)
}
