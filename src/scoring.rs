//! Score & feedback
//!
//! Turns grid statistics into the two headline metrics shown after a blast:
//! - Mineral recovery: share of blocks still standing
//! - Dilution: share of blocks lost

use serde::{Deserialize, Serialize};

use crate::sim::GridStats;

/// Rating band for a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    Excellent,
    Good,
    Average,
    Poor,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Excellent => "excellent",
            Grade::Good => "good",
            Grade::Average => "average",
            Grade::Poor => "poor",
        }
    }

    /// Higher recovery is better
    pub fn for_recovery(recovery: u32) -> Self {
        match recovery {
            90.. => Grade::Excellent,
            70..=89 => Grade::Good,
            50..=69 => Grade::Average,
            _ => Grade::Poor,
        }
    }

    /// Lower dilution is better
    pub fn for_dilution(dilution: u32) -> Self {
        match dilution {
            0..=5 => Grade::Excellent,
            6..=15 => Grade::Good,
            16..=25 => Grade::Average,
            _ => Grade::Poor,
        }
    }
}

/// Overall verdict on a blast outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    PerfectBlast,
    GreatJob,
    RoomForImprovement,
}

impl Verdict {
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::PerfectBlast => "Perfect Blast! Excellent mineral recovery with minimal dilution.",
            Verdict::GreatJob => "Great Job! High recovery with low dilution.",
            Verdict::RoomForImprovement => {
                "Room for improvement. Consider adjusting blast parameters."
            }
        }
    }
}

/// Headline metrics derived from [`GridStats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCard {
    /// Percentage of blocks surviving (0-100)
    pub mineral_recovery: u32,
    /// Percentage of blocks lost (0-100)
    pub dilution: u32,
    pub recovery_grade: Grade,
    pub dilution_grade: Grade,
    /// `None` when the outcome is unremarkable
    pub verdict: Option<Verdict>,
}

impl ScoreCard {
    pub fn from_stats(stats: &GridStats) -> Self {
        Self::from_recovery(stats.survival_rate)
    }

    pub fn from_recovery(mineral_recovery: u32) -> Self {
        let mineral_recovery = mineral_recovery.min(100);
        let dilution = 100 - mineral_recovery;

        let verdict = if mineral_recovery >= 95 && dilution <= 5 {
            Some(Verdict::PerfectBlast)
        } else if mineral_recovery >= 85 && dilution <= 10 {
            Some(Verdict::GreatJob)
        } else if mineral_recovery < 50 || dilution > 30 {
            Some(Verdict::RoomForImprovement)
        } else {
            None
        };

        Self {
            mineral_recovery,
            dilution,
            recovery_grade: Grade::for_recovery(mineral_recovery),
            dilution_grade: Grade::for_dilution(dilution),
            verdict,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries() {
        assert_eq!(Grade::for_recovery(90), Grade::Excellent);
        assert_eq!(Grade::for_recovery(89), Grade::Good);
        assert_eq!(Grade::for_recovery(70), Grade::Good);
        assert_eq!(Grade::for_recovery(50), Grade::Average);
        assert_eq!(Grade::for_recovery(49), Grade::Poor);

        assert_eq!(Grade::for_dilution(5), Grade::Excellent);
        assert_eq!(Grade::for_dilution(15), Grade::Good);
        assert_eq!(Grade::for_dilution(25), Grade::Average);
        assert_eq!(Grade::for_dilution(26), Grade::Poor);
    }

    #[test]
    fn test_verdicts() {
        assert_eq!(ScoreCard::from_recovery(100).verdict, Some(Verdict::PerfectBlast));
        assert_eq!(ScoreCard::from_recovery(95).verdict, Some(Verdict::PerfectBlast));
        assert_eq!(ScoreCard::from_recovery(90).verdict, Some(Verdict::GreatJob));
        assert_eq!(ScoreCard::from_recovery(80).verdict, None);
        assert_eq!(ScoreCard::from_recovery(69).verdict, Some(Verdict::RoomForImprovement));
        assert_eq!(ScoreCard::from_recovery(10).verdict, Some(Verdict::RoomForImprovement));
    }

    #[test]
    fn test_dilution_complements_recovery() {
        let card = ScoreCard::from_stats(&GridStats {
            total_blocks: 4,
            destroyed_blocks: 1,
            survival_rate: 75,
            ..Default::default()
        });
        assert_eq!(card.mineral_recovery, 75);
        assert_eq!(card.dilution, 25);
        assert_eq!(card.recovery_grade, Grade::Good);
        assert_eq!(card.dilution_grade, Grade::Average);
    }
}
