//! Session-scoped challenge view-model.
//!
//! [`ChallengeStore`] owns the catalog for one app session. It is created
//! once and handed to whatever needs it; there is no global instance.
//! Mutation goes through `&mut self`, so a multi-threaded host has to put
//! the store behind a lock, which keeps a single writer at a time.

use tracing::debug;

use std::collections::HashSet;

use crate::challenge::{
    default_catalog, filter_by_category, Challenge, ChallengeCategory, ChallengeId,
};
use crate::rewards::{tier_for, TierStatus};

/// Points awarded the first time a challenge is started.
pub const START_AWARD_POINTS: u32 = 50;

#[derive(Debug)]
pub struct ChallengeStore {
    challenges: Vec<Challenge>,
    /// Catalog indices in the order challenges were started.
    start_order: Vec<usize>,
    points: u32,
}

impl Default for ChallengeStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChallengeStore {
    /// Store over the built-in catalog, nothing started, zero points.
    pub fn new() -> Self {
        Self::with_catalog(default_catalog())
    }

    /// Store over a caller-provided catalog.
    ///
    /// Ids must be unique: a record repeating an earlier id is dropped.
    /// Challenges arriving already started count as started in catalog
    /// order, without awarding points.
    pub fn with_catalog(catalog: Vec<Challenge>) -> Self {
        let mut seen = HashSet::with_capacity(catalog.len());
        let challenges: Vec<Challenge> = catalog
            .into_iter()
            .filter(|c| {
                let fresh = seen.insert(c.id());
                if !fresh {
                    debug!(id = %c.id(), title = %c.title, "duplicate challenge id dropped");
                }
                fresh
            })
            .collect();

        let start_order = challenges
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_started())
            .map(|(i, _)| i)
            .collect();
        Self {
            challenges,
            start_order,
            points: 0,
        }
    }

    pub fn list_all(&self) -> &[Challenge] {
        &self.challenges
    }

    /// Started challenges, in the order they were started.
    pub fn list_active(&self) -> Vec<&Challenge> {
        self.start_order.iter().map(|&i| &self.challenges[i]).collect()
    }

    pub fn filter_by_category(&self, category: ChallengeCategory) -> Vec<&Challenge> {
        filter_by_category(&self.challenges, category)
    }

    pub fn get(&self, id: &ChallengeId) -> Option<&Challenge> {
        self.challenges.iter().find(|c| c.id() == *id)
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Challenge> {
        self.challenges
            .iter()
            .find(|c| c.title.eq_ignore_ascii_case(title.trim()))
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn reward_status(&self) -> TierStatus {
        tier_for(self.points)
    }

    /// Mark a challenge started and award [`START_AWARD_POINTS`].
    ///
    /// Unknown ids and challenges that are already started are silently
    /// ignored. Returns whether anything changed.
    pub fn start_challenge(&mut self, id: &ChallengeId) -> bool {
        let Some(index) = self.challenges.iter().position(|c| c.id() == *id) else {
            debug!(%id, "start ignored: unknown challenge");
            return false;
        };

        let challenge = &mut self.challenges[index];
        if challenge.is_started() {
            debug!(%id, "start ignored: already started");
            return false;
        }

        challenge.mark_started();
        self.start_order.push(index);
        self.points = self.points.saturating_add(START_AWARD_POINTS);

        debug!(%id, title = %challenge.title, points = self.points, "challenge started");
        true
    }
}
