//! Blast engine
//!
//! A blast is a circle on the grid. Damage falls off linearly from full power
//! at the center to zero at the radius:
//!
//! ```text
//! falloff = max(0, 1 - d / radius)
//! damage  = power * falloff * (1 - blast_resistance)
//! ```
//!
//! The footprint is inclusive: a block exactly `radius` away is reported as
//! affected with zero damage. Centers outside the grid and non-positive radii
//! affect nothing.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::grid::Grid;

/// Parameters for a single blast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlastParams {
    pub center: IVec2,
    pub radius: i32,
    pub power: f32,
}

impl BlastParams {
    pub fn new(center_x: i32, center_y: i32, radius: i32, power: f32) -> Self {
        Self {
            center: IVec2::new(center_x, center_y),
            radius,
            power,
        }
    }
}

/// One block touched by a blast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlastHit {
    pub position: IVec2,
    pub material: String,
    /// Euclidean distance from the blast center
    pub distance: f32,
    /// Damage dealt by this blast (after falloff and resistance)
    pub damage: f32,
    /// Cumulative damage on the block after this blast
    pub cumulative_damage: f32,
    /// This blast took the block from alive to destroyed
    pub destroyed: bool,
}

/// Outcome of one blast
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BlastResult {
    /// Every block inside the footprint that was alive before the blast
    pub affected: Vec<BlastHit>,
    /// Positions destroyed by this blast
    pub destroyed: Vec<IVec2>,
    /// Sum of cumulative damage over affected blocks
    pub total_damage: f32,
}

impl BlastResult {
    pub fn is_empty(&self) -> bool {
        self.affected.is_empty()
    }
}

/// Linear distance attenuation in [0, 1]
///
/// A zero radius has no width to attenuate over: the center gets full power
/// and everything else nothing.
#[inline]
pub fn falloff(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 {
        return if distance <= 0.0 { 1.0 } else { 0.0 };
    }
    (1.0 - distance / radius).max(0.0)
}

/// Damage a block with `blast_resistance` takes at `distance`
#[inline]
pub fn blast_damage(power: f32, distance: f32, radius: f32, blast_resistance: f32) -> f32 {
    power * falloff(distance, radius) * (1.0 - blast_resistance.clamp(0.0, 1.0))
}

impl Grid {
    /// Apply a blast to live blocks within `radius` of the center
    pub fn apply_blast(&mut self, params: BlastParams) -> BlastResult {
        let BlastParams {
            center,
            radius,
            power,
        } = params;

        if radius <= 0 || !self.in_bounds(center.x, center.y) {
            log::debug!("Blast at {center} r={radius} affects nothing");
            return BlastResult::default();
        }
        let power = if power.is_finite() { power.max(0.0) } else { 0.0 };
        let radius_f = radius as f32;

        // Footprint box clamped to the grid, computed wide so that edge
        // coordinates near i32::MAX cannot overflow
        let reach = i64::from(radius);
        let x_min = (i64::from(center.x) - reach).max(0) as i32;
        let y_min = (i64::from(center.y) - reach).max(0) as i32;
        let x_max = (i64::from(center.x) + reach).min(i64::from(self.width()) - 1) as i32;
        let y_max = (i64::from(center.y) + reach).min(i64::from(self.height()) - 1) as i32;

        let mut result = BlastResult::default();

        for y in y_min..=y_max {
            for block in self.row_blocks_mut(y, x_min, x_max) {
                if block.is_destroyed() {
                    continue;
                }

                let distance = (block.position() - center).as_vec2().length();
                if distance > radius_f {
                    continue;
                }

                let damage = blast_damage(power, distance, radius_f, block.blast_resistance());
                let destroyed = block.apply_damage(damage);

                result.total_damage += block.damage();
                if destroyed {
                    result.destroyed.push(block.position());
                }
                result.affected.push(BlastHit {
                    position: block.position(),
                    material: block.material().to_string(),
                    distance,
                    damage,
                    cumulative_damage: block.damage(),
                    destroyed,
                });
            }
        }

        log::debug!(
            "Blast at {center} r={radius} p={power}: {} affected, {} destroyed",
            result.affected.len(),
            result.destroyed.len()
        );
        result
    }
}
