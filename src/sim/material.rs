//! Material table
//!
//! Each known material has a default hardness, value and blast resistance.
//! Unknown identifiers map to [`MaterialKind::Other`], which uses the global
//! fallbacks instead of failing.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HARDNESS, DEFAULT_VALUE};

/// Known material types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MaterialKind {
    Stone,
    Coal,
    Iron,
    Copper,
    Silver,
    Gold,
    Diamond,
    Emerald,
    Ruby,
    #[default]
    Other,
}

/// Default attributes for a material
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialDefaults {
    pub hardness: u32,
    pub value: u32,
    /// Fraction of incoming blast damage absorbed, in [0, 1]
    pub blast_resistance: f32,
}

impl MaterialKind {
    pub const ALL: [MaterialKind; 10] = [
        MaterialKind::Stone,
        MaterialKind::Coal,
        MaterialKind::Iron,
        MaterialKind::Copper,
        MaterialKind::Silver,
        MaterialKind::Gold,
        MaterialKind::Diamond,
        MaterialKind::Emerald,
        MaterialKind::Ruby,
        MaterialKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialKind::Stone => "stone",
            MaterialKind::Coal => "coal",
            MaterialKind::Iron => "iron",
            MaterialKind::Copper => "copper",
            MaterialKind::Silver => "silver",
            MaterialKind::Gold => "gold",
            MaterialKind::Diamond => "diamond",
            MaterialKind::Emerald => "emerald",
            MaterialKind::Ruby => "ruby",
            MaterialKind::Other => "other",
        }
    }

    /// Case-insensitive lookup; anything unrecognised is `Other`
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "stone" | "rock" => MaterialKind::Stone,
            "coal" => MaterialKind::Coal,
            "iron" => MaterialKind::Iron,
            "copper" => MaterialKind::Copper,
            "silver" => MaterialKind::Silver,
            "gold" => MaterialKind::Gold,
            "diamond" => MaterialKind::Diamond,
            "emerald" => MaterialKind::Emerald,
            "ruby" => MaterialKind::Ruby,
            _ => MaterialKind::Other,
        }
    }

    pub fn defaults(&self) -> MaterialDefaults {
        let (hardness, value, blast_resistance) = match self {
            MaterialKind::Stone => (100, 1, 0.10),
            MaterialKind::Coal => (80, 5, 0.05),
            MaterialKind::Iron => (150, 20, 0.20),
            MaterialKind::Copper => (130, 15, 0.15),
            MaterialKind::Silver => (160, 40, 0.20),
            MaterialKind::Gold => (200, 50, 0.25),
            MaterialKind::Diamond => (400, 200, 0.50),
            MaterialKind::Emerald => (350, 150, 0.40),
            MaterialKind::Ruby => (300, 120, 0.35),
            MaterialKind::Other => (DEFAULT_HARDNESS, DEFAULT_VALUE, 0.0),
        };
        MaterialDefaults {
            hardness,
            value,
            blast_resistance,
        }
    }

    #[inline]
    pub fn blast_resistance(&self) -> f32 {
        self.defaults().blast_resistance
    }
}
