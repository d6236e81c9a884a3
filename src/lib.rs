//! Ore Blast - blast-damage simulation over an ore field
//!
//! Core modules:
//! - `ingest`: CSV row parsing and fuzzy header resolution
//! - `sim`: Deterministic grid, block, blast and statistics logic
//! - `session`: Single owner of the active grid plus blast history/replay
//! - `scoring`: Mineral recovery / dilution feedback
//! - `sample`: Seeded sample field generation
//! - `settings`: Blast parameter defaults and limits

pub mod error;
pub mod ingest;
pub mod sample;
pub mod scoring;
pub mod session;
pub mod settings;
pub mod sim;

pub use error::{IngestError, SchemaError};
pub use ingest::{IngestReport, OreRow};
pub use scoring::{Grade, ScoreCard, Verdict};
pub use session::Session;
pub use settings::Settings;
pub use sim::{
    BlastHit, BlastParams, BlastResult, Block, Grid, GridStats, MaterialKind,
    apply_blast, build_grid_from_text, compute_stats, get_block_at, reset_grid,
};

/// Simulation constants
pub mod consts {
    /// Field delimiter for ingested text
    pub const DELIMITER: char = ',';

    /// Fallback hardness for materials missing from the table
    pub const DEFAULT_HARDNESS: u32 = 100;
    /// Fallback value for materials missing from the table
    pub const DEFAULT_VALUE: u32 = 10;
    /// Max health per point of hardness
    pub const HEALTH_PER_HARDNESS: f32 = 1.0;

    /// Blast defaults (matches the blast tool panel's initial sliders)
    pub const DEFAULT_BLAST_RADIUS: i32 = 2;
    pub const DEFAULT_BLAST_POWER: f32 = 50.0;
    pub const MIN_BLAST_POWER: f32 = 10.0;
    pub const MAX_BLAST_POWER: f32 = 1000.0;
    pub const MAX_BLAST_RADIUS: i32 = 16;
}

/// Round a percentage in [0, 100] to the nearest whole number (half rounds up)
#[inline]
pub fn round_percent(fraction: f64) -> u32 {
    (fraction * 100.0 + 0.5).floor().clamp(0.0, 100.0) as u32
}
