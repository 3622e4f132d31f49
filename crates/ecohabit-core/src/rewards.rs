//! Reward tiers derived from a point total.
//!
//! Tiers are never stored. Each bracket is half-open `[min, next_min)`:
//!
//! | Tier     | Points      |
//! |----------|-------------|
//! | None     | 0 - 99      |
//! | Bronze   | 100 - 299   |
//! | Silver   | 300 - 499   |
//! | Gold     | 500 - 849   |
//! | Platinum | 850+        |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named reward bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardTier {
    None,
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl RewardTier {
    /// Tiers in ascending order.
    pub const ALL: [RewardTier; 5] = [
        RewardTier::None,
        RewardTier::Bronze,
        RewardTier::Silver,
        RewardTier::Gold,
        RewardTier::Platinum,
    ];

    /// Inclusive lower bound of the bracket.
    pub fn min_points(&self) -> u32 {
        match self {
            RewardTier::None => 0,
            RewardTier::Bronze => 100,
            RewardTier::Silver => 300,
            RewardTier::Gold => 500,
            RewardTier::Platinum => 850,
        }
    }

    pub fn next(&self) -> Option<RewardTier> {
        match self {
            RewardTier::None => Some(RewardTier::Bronze),
            RewardTier::Bronze => Some(RewardTier::Silver),
            RewardTier::Silver => Some(RewardTier::Gold),
            RewardTier::Gold => Some(RewardTier::Platinum),
            RewardTier::Platinum => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RewardTier::None => "None",
            RewardTier::Bronze => "Bronze",
            RewardTier::Silver => "Silver",
            RewardTier::Gold => "Gold",
            RewardTier::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for RewardTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tier reached for a point total and the distance to the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierStatus {
    pub points: u32,
    pub tier: RewardTier,
    /// `None` once the top tier is reached.
    pub points_to_next: Option<u32>,
}

impl TierStatus {
    pub fn is_max_tier(&self) -> bool {
        self.points_to_next.is_none()
    }
}

/// Map a point total to its tier.
pub fn tier_for(points: u32) -> TierStatus {
    let tier = RewardTier::ALL
        .into_iter()
        .rev()
        .find(|t| points >= t.min_points())
        .unwrap_or(RewardTier::None);

    TierStatus {
        points,
        tier,
        points_to_next: tier.next().map(|next| next.min_points() - points),
    }
}
