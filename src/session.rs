//! Blast session
//!
//! The single owner of the active grid. Views (statistics, score, block
//! lookups) are computed from it on demand. Every applied blast is recorded
//! so the run can be replayed from the pristine snapshot.

use crate::error::IngestError;
use crate::scoring::ScoreCard;
use crate::sim::{BlastParams, BlastResult, Block, Grid, GridStats};

#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    /// Blasts applied since the last load/reset, in order
    history: Vec<BlastParams>,
}

impl Session {
    /// Start a session from dataset text
    pub fn new(text: &str) -> Result<Self, IngestError> {
        Ok(Self::from_grid(Grid::from_text(text)?))
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            history: Vec::new(),
        }
    }

    /// Replace the dataset wholesale. On error the current grid is kept.
    pub fn load(&mut self, text: &str) -> Result<(), IngestError> {
        let grid = Grid::from_text(text)?;
        log::info!("Loaded {}x{} grid ({} blocks)", grid.width(), grid.height(), grid.len());
        self.grid = grid;
        self.history.clear();
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn history(&self) -> &[BlastParams] {
        &self.history
    }

    pub fn blast(&mut self, params: BlastParams) -> BlastResult {
        self.history.push(params);
        self.grid.apply_blast(params)
    }

    /// Restore the original snapshot and forget the blast history
    pub fn reset(&mut self) {
        self.grid = self.grid.reset();
        self.history.clear();
    }

    /// Restore the snapshot and re-apply every recorded blast in order
    pub fn replay(&mut self) -> Vec<BlastResult> {
        log::info!("Replaying {} blast(s)", self.history.len());
        self.grid = self.grid.reset();
        self.history
            .iter()
            .map(|params| self.grid.apply_blast(*params))
            .collect()
    }

    pub fn block_at(&self, x: i32, y: i32) -> Option<&Block> {
        self.grid.block_at(x, y)
    }

    pub fn stats(&self) -> GridStats {
        self.grid.stats()
    }

    pub fn score(&self) -> ScoreCard {
        ScoreCard::from_stats(&self.grid.stats())
    }
}
