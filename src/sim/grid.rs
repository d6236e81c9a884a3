//! Sparse ore grid
//!
//! Blocks live in an ordered map keyed by a packed coordinate (row-major:
//! `y` in the high half, `x` in the low half), so memory tracks populated
//! cells only and iteration order is stable. An empty cell ("no block") is
//! distinct from a destroyed block.
//!
//! The grid keeps an immutable snapshot of the text and rows it was built
//! from. Reset builds brand new blocks from that snapshot rather than
//! repairing the damaged ones.

use std::collections::BTreeMap;
use std::sync::Arc;

use glam::IVec2;

use super::block::Block;
use crate::error::IngestError;
use crate::ingest::{IngestReport, OreRow, parse_rows};

/// Packed coordinate key
pub type CellKey = u64;

/// Pack a (non-negative) position into a row-major key
#[inline]
pub fn cell_key(pos: IVec2) -> CellKey {
    ((pos.y as u32 as u64) << 32) | pos.x as u32 as u64
}

/// Inverse of [`cell_key`]
#[inline]
pub fn cell_position(key: CellKey) -> IVec2 {
    IVec2::new((key & 0xFFFF_FFFF) as u32 as i32, (key >> 32) as u32 as i32)
}

/// Originally ingested data, shared read-only between a grid and its resets
#[derive(Debug, PartialEq, Eq)]
struct Snapshot {
    text: String,
    rows: Vec<OreRow>,
}

/// Bounded 2D field of blocks
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u32,
    height: u32,
    blocks: BTreeMap<CellKey, Block>,
    snapshot: Arc<Snapshot>,
    report: IngestReport,
}

impl Grid {
    /// Parse text and build a grid from the rows that survive validation
    pub fn from_text(text: &str) -> Result<Self, IngestError> {
        let parsed = parse_rows(text)?;
        if parsed.rows.is_empty() {
            return Err(IngestError::EmptyDataset {
                rows_read: parsed.report.rows_read,
            });
        }
        if parsed.report.rows_skipped > 0 {
            log::warn!(
                "Skipped {} of {} data rows (malformed coordinates, material or field count)",
                parsed.report.rows_skipped,
                parsed.report.rows_read
            );
        }

        let snapshot = Arc::new(Snapshot {
            text: text.to_string(),
            rows: parsed.rows,
        });
        let grid = Self::from_snapshot(snapshot, parsed.report);
        log::debug!(
            "Built {}x{} grid with {} blocks",
            grid.width,
            grid.height,
            grid.blocks.len()
        );
        Ok(grid)
    }

    /// Build fresh blocks from a snapshot (last row wins on duplicates)
    fn from_snapshot(snapshot: Arc<Snapshot>, report: IngestReport) -> Self {
        let mut blocks = BTreeMap::new();
        let mut max = IVec2::ZERO;

        for row in &snapshot.rows {
            let block = Block::from_row(row);
            max = max.max(block.position());
            blocks.insert(cell_key(block.position()), block);
        }

        Self {
            width: max.x as u32 + 1,
            height: max.y as u32 + 1,
            blocks,
            snapshot,
            report,
        }
    }

    /// A pristine copy of this grid as originally ingested
    pub fn reset(&self) -> Grid {
        log::info!("Resetting grid to original snapshot");
        Self::from_snapshot(Arc::clone(&self.snapshot), self.report)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of populated cells (destroyed blocks included)
    #[inline]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Always false for a successfully built grid
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Row accounting from ingestion
    #[inline]
    pub fn report(&self) -> IngestReport {
        self.report
    }

    /// Raw text the grid was built from
    pub fn source_text(&self) -> &str {
        &self.snapshot.text
    }

    /// Whether `(x, y)` lies inside `[0, width) x [0, height)`
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    pub fn block_at(&self, x: i32, y: i32) -> Option<&Block> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.blocks.get(&cell_key(IVec2::new(x, y)))
    }

    /// Populated cells on row `y` with `x_min <= x <= x_max`
    ///
    /// Walks the ordered key range, so cost tracks populated cells rather
    /// than the span of the row.
    pub(crate) fn row_blocks_mut(
        &mut self,
        y: i32,
        x_min: i32,
        x_max: i32,
    ) -> impl Iterator<Item = &mut Block> {
        let start = cell_key(IVec2::new(x_min, y));
        let end = cell_key(IVec2::new(x_max, y));
        self.blocks.range_mut(start..=end).map(|(_, block)| block)
    }

    /// All blocks in row-major order
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }
}
