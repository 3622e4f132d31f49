use clap::Subcommand;
use ecohabit_core::{tier_for, RewardTier, TierStatus};

#[derive(Subcommand)]
pub enum RewardsAction {
    /// Tier reached with a given point total
    Tier {
        points: u32,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// List all tiers and their thresholds
    Tiers,
}

pub fn run(action: RewardsAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        RewardsAction::Tier { points, json } => {
            let status = tier_for(points);
            if json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!("{}", describe(&status));
            }
        }
        RewardsAction::Tiers => {
            for tier in RewardTier::ALL {
                println!("{:<9} {}+", tier.label(), tier.min_points());
            }
        }
    }
    Ok(())
}

/// `points: 150  tier: Bronze  (150 to Silver)`
pub fn describe(status: &TierStatus) -> String {
    let progress = match (status.tier.next(), status.points_to_next) {
        (Some(next), Some(remaining)) => format!("{remaining} to {next}"),
        _ => "max tier reached".to_string(),
    };
    format!(
        "points: {}  tier: {}  ({progress})",
        status.points, status.tier
    )
}
