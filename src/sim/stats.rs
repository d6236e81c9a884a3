//! Grid statistics
//!
//! Always derived from the grid on demand; nothing here is cached.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use crate::round_percent;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridStats {
    /// Populated cells, destroyed or not
    pub total_blocks: usize,
    pub destroyed_blocks: usize,
    /// Surviving share as a rounded percentage (0 for an empty grid)
    pub survival_rate: u32,
    /// Surviving blocks per material identifier
    pub material_distribution: BTreeMap<String, usize>,
    /// Economic value of every block
    pub total_value: u64,
    /// Economic value still standing
    pub surviving_value: u64,
}

impl GridStats {
    pub fn surviving_blocks(&self) -> usize {
        self.total_blocks - self.destroyed_blocks
    }
}

impl Grid {
    pub fn stats(&self) -> GridStats {
        let mut stats = GridStats::default();

        for block in self.blocks() {
            stats.total_blocks += 1;
            stats.total_value += u64::from(block.value());
            if block.is_destroyed() {
                stats.destroyed_blocks += 1;
            } else {
                stats.surviving_value += u64::from(block.value());
                *stats
                    .material_distribution
                    .entry(block.material().to_string())
                    .or_insert(0) += 1;
            }
        }

        stats.survival_rate = if stats.total_blocks > 0 {
            round_percent(stats.surviving_blocks() as f64 / stats.total_blocks as f64)
        } else {
            0
        };
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::BlastParams;

    #[test]
    fn test_fresh_grid_stats() {
        let grid = Grid::from_text("x,y,ore,value\n0,0,stone,1\n1,0,gold,50\n2,0,stone,1\n").unwrap();
        let stats = grid.stats();
        assert_eq!(stats.total_blocks, 3);
        assert_eq!(stats.destroyed_blocks, 0);
        assert_eq!(stats.survival_rate, 100);
        assert_eq!(stats.material_distribution.get("stone"), Some(&2));
        assert_eq!(stats.material_distribution.get("gold"), Some(&1));
        assert_eq!(stats.total_value, 52);
        assert_eq!(stats.surviving_value, 52);
    }

    #[test]
    fn test_destroyed_blocks_leave_distribution() {
        let text = "x,y,ore,hardness,value\n0,0,coal,10,5\n1,0,coal,10,5\n2,0,gold,10000,50\n";
        let mut grid = Grid::from_text(text).unwrap();
        grid.apply_blast(BlastParams::new(0, 0, 2, 100.0));

        let stats = grid.stats();
        // (0,0) takes 95, (1,0) takes 47.5: both exceed hardness 10
        assert_eq!(stats.destroyed_blocks, 2);
        assert_eq!(stats.survival_rate, 33);
        assert_eq!(stats.material_distribution.get("coal"), None);
        assert_eq!(stats.material_distribution.get("gold"), Some(&1));
        assert_eq!(stats.surviving_value, 50);
        assert_eq!(
            stats.material_distribution.values().sum::<usize>(),
            stats.total_blocks - stats.destroyed_blocks
        );
    }

    #[test]
    fn test_survival_rate_rounds_half_up() {
        // 1 of 8 destroyed -> 87.5% -> 88
        let mut text = String::from("x,y,ore,hardness\n");
        for x in 0..8 {
            let hardness = if x == 0 { 1 } else { 100_000 };
            text.push_str(&format!("{x},0,stone,{hardness}\n"));
        }
        let mut grid = Grid::from_text(&text).unwrap();
        grid.apply_blast(BlastParams::new(0, 0, 1, 10.0));
        assert_eq!(grid.stats().survival_rate, 88);
    }
}
