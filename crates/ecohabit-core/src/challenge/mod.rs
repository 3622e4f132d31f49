//! Sustainability challenges and the category filter.
//!
//! A [`Challenge`] is a discrete eco action a user can start. Everything but
//! the started flag is fixed once the catalog is built.

mod catalog;

pub use catalog::default_catalog;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque challenge identity, unique within a catalog for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChallengeId(Uuid);

impl ChallengeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ChallengeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ChallengeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ChallengeId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Where a challenge's image comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageKind {
    /// Image bundled with the app
    Asset,
    /// Platform-provided symbol
    SystemIcon,
}

/// Challenge classification.
///
/// `All` only exists as a filter value; catalog records never carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChallengeCategory {
    All,
    Water,
    Energy,
    Recycling,
    Transportation,
    Nature,
}

impl ChallengeCategory {
    /// Every category in display order, `All` first.
    pub const ALL: [ChallengeCategory; 6] = [
        ChallengeCategory::All,
        ChallengeCategory::Water,
        ChallengeCategory::Energy,
        ChallengeCategory::Recycling,
        ChallengeCategory::Transportation,
        ChallengeCategory::Nature,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChallengeCategory::All => "All",
            ChallengeCategory::Water => "Water",
            ChallengeCategory::Energy => "Energy",
            ChallengeCategory::Recycling => "Recycling",
            ChallengeCategory::Transportation => "Transportation",
            ChallengeCategory::Nature => "Nature",
        }
    }

    /// Platform symbol shown next to a challenge of this category.
    pub fn icon(&self) -> &'static str {
        match self {
            ChallengeCategory::All => "globe.americas.fill",
            ChallengeCategory::Water => "drop.fill",
            ChallengeCategory::Energy => "bolt.fill",
            ChallengeCategory::Recycling => "arrow.3.trianglepath",
            ChallengeCategory::Transportation => "car.fill",
            ChallengeCategory::Nature => "leaf.fill",
        }
    }
}

impl fmt::Display for ChallengeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChallengeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown category: {s}"))
    }
}

/// A sustainability challenge.
#[derive(Debug, Clone, Serialize)]
pub struct Challenge {
    id: ChallengeId,
    pub title: String,
    pub image_name: String,
    pub image_kind: ImageKind,
    category: ChallengeCategory,
    pub description: String,
    pub benefits: String,
    pub kid_challenge: String,
    is_started: bool,
}

impl Challenge {
    /// Create a not-yet-started challenge with a fresh id.
    ///
    /// # Panics
    /// Panics if `category` is [`ChallengeCategory::All`].
    pub fn new(
        title: impl Into<String>,
        image_name: impl Into<String>,
        image_kind: ImageKind,
        category: ChallengeCategory,
        description: impl Into<String>,
        benefits: impl Into<String>,
        kid_challenge: impl Into<String>,
    ) -> Self {
        assert!(
            category != ChallengeCategory::All,
            "`All` is a filter value, not a challenge category"
        );
        Self {
            id: ChallengeId::new(),
            title: title.into(),
            image_name: image_name.into(),
            image_kind,
            category,
            description: description.into(),
            benefits: benefits.into(),
            kid_challenge: kid_challenge.into(),
            is_started: false,
        }
    }

    pub fn id(&self) -> ChallengeId {
        self.id
    }

    pub fn category(&self) -> ChallengeCategory {
        self.category
    }

    pub fn is_started(&self) -> bool {
        self.is_started
    }

    /// Only the store flips this, so the flag and the point award stay in step.
    pub(crate) fn mark_started(&mut self) {
        self.is_started = true;
    }
}

/// Ordered subsequence of `catalog` matching `category`.
///
/// `All` returns the catalog unchanged.
pub fn filter_by_category(catalog: &[Challenge], category: ChallengeCategory) -> Vec<&Challenge> {
    catalog
        .iter()
        .filter(|c| category == ChallengeCategory::All || c.category == category)
        .collect()
}
