//! Block model
//!
//! A block's damage state only moves one way: damage accumulates, health
//! follows as `max(0, max_health - damage)`, and once health reaches zero
//! the block is destroyed and ignores further damage. Only a grid reset
//! (which builds new blocks) brings health back.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::material::MaterialKind;
use crate::consts::HEALTH_PER_HARDNESS;
use crate::ingest::OreRow;

/// A single material-bearing cell
///
/// Fields are read-only from outside: `max_health` is derived from
/// `hardness` and the grid keys blocks by `position`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Grid coordinates (unique within a grid)
    position: IVec2,
    /// Material identifier as ingested
    material: String,
    /// Resolved material type (drives defaults and resistance)
    kind: MaterialKind,
    hardness: u32,
    value: u32,
    /// Fraction of blast damage absorbed, in [0, 1]
    blast_resistance: f32,
    max_health: f32,
    health: f32,
    damage: f32,
    destroyed: bool,
}

impl Block {
    /// Create an undamaged block; missing hardness/value come from the material table
    pub fn new(position: IVec2, material: &str, hardness: Option<u32>, value: Option<u32>) -> Self {
        let kind = MaterialKind::from_name(material);
        let defaults = kind.defaults();
        let hardness = hardness.filter(|h| *h > 0).unwrap_or(defaults.hardness);
        let max_health = hardness as f32 * HEALTH_PER_HARDNESS;

        Self {
            position,
            material: material.to_string(),
            kind,
            hardness,
            value: value.unwrap_or(defaults.value),
            blast_resistance: defaults.blast_resistance.clamp(0.0, 1.0),
            max_health,
            health: max_health,
            damage: 0.0,
            destroyed: false,
        }
    }

    pub fn from_row(row: &OreRow) -> Self {
        Self::new(IVec2::new(row.x, row.y), &row.material, row.hardness, row.value)
    }

    #[inline]
    pub fn position(&self) -> IVec2 {
        self.position
    }

    /// Material identifier as ingested
    pub fn material(&self) -> &str {
        &self.material
    }

    #[inline]
    pub fn kind(&self) -> MaterialKind {
        self.kind
    }

    #[inline]
    pub fn hardness(&self) -> u32 {
        self.hardness
    }

    #[inline]
    pub fn value(&self) -> u32 {
        self.value
    }

    #[inline]
    pub fn blast_resistance(&self) -> f32 {
        self.blast_resistance
    }

    #[inline]
    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    #[inline]
    pub fn health(&self) -> f32 {
        self.health
    }

    /// Cumulative damage taken since construction
    #[inline]
    pub fn damage(&self) -> f32 {
        self.damage
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Damage as a fraction of max health, clamped to [0, 1] (for shading)
    pub fn damage_ratio(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 1.0;
        }
        (self.damage / self.max_health).clamp(0.0, 1.0)
    }

    /// Apply damage. Returns true only on the call that destroys the block.
    ///
    /// Negative or non-finite amounts count as zero. Destroyed blocks are left
    /// untouched, so their damage total stops changing.
    pub fn apply_damage(&mut self, amount: f32) -> bool {
        if self.destroyed {
            return false;
        }
        let amount = if amount.is_finite() { amount.max(0.0) } else { 0.0 };

        self.damage += amount;
        self.health = (self.max_health - self.damage).max(0.0);
        self.destroyed = self.health <= 0.0;
        self.destroyed
    }
}
