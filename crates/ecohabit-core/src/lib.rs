//! # EcoHabit Core Library
//!
//! This library provides the business logic behind the EcoHabit tracker:
//! sustainability challenges users can start, the points they earn for it,
//! the reward tier those points unlock, and a chat assistant backed by a
//! remote text-generation endpoint. Front ends (the `ecohabit-cli` binary or
//! a mobile shell) stay thin and drive everything through this crate.
//!
//! ## Architecture
//!
//! - **Challenges**: the fixed catalog, the category filter and the
//!   [`ChallengeStore`] view-model that owns the catalog for one session
//! - **Rewards**: pure point-total to tier mapping
//! - **Chat**: an append-only message log plus the HTTP inference client
//! - **Storage**: TOML configuration and OS keyring secrets
//!
//! Nothing is persisted between runs except configuration and the API token.
//! The store is built once per session and passed explicitly to callers.

pub mod challenge;
pub mod chat;
pub mod error;
pub mod rewards;
pub mod storage;
pub mod store;
pub mod tips;

pub use challenge::{
    default_catalog, filter_by_category, Challenge, ChallengeCategory, ChallengeId, ImageKind,
};
pub use chat::{
    Author, ChatLog, ChatMessage, ChatSession, InferenceClient, FALLBACK_REPLY, GREETING,
};
pub use error::{ChatError, ConfigError, CoreError, InferenceError};
pub use rewards::{tier_for, RewardTier, TierStatus};
pub use storage::{secrets, ChatConfig, Config};
pub use store::{ChallengeStore, START_AWARD_POINTS};
pub use tips::ECO_TIPS;
