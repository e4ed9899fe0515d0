//! Literary writings: categories, tag vocabulary and records.

use serde::{Deserialize, Serialize};

/// Closed set of writing categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Poems,
    Shayari,
    Songs,
    Stories,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::Poems, Self::Shayari, Self::Songs, Self::Stories];

    /// Look up a category by its URL id. Unknown ids give `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Poems => "poems",
            Self::Shayari => "shayari",
            Self::Songs => "songs",
            Self::Stories => "stories",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Poems => "Poems",
            Self::Shayari => "Shayari",
            Self::Songs => "Songs",
            Self::Stories => "Stories",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Poems => "Verses on life, dreams, and the human spirit",
            Self::Shayari => "Urdu/Hindi couplets on love, life, and motivation",
            Self::Songs => "Lyrics that inspire and move the soul",
            Self::Stories => "Tales of entrepreneurship, hope, and transformation",
        }
    }
}

/// Closed tag vocabulary.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Tag {
    Motivation,
    Society,
    Love,
    SelfGrowth,
    Nature,
    Philosophy,
    Youth,
    Hope,
    Reflection,
}

impl Tag {
    pub const ALL: [Self; 9] = [
        Self::Motivation,
        Self::Society,
        Self::Love,
        Self::SelfGrowth,
        Self::Nature,
        Self::Philosophy,
        Self::Youth,
        Self::Hope,
        Self::Reflection,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.id() == id)
    }

    pub const fn id(self) -> &'static str {
        match self {
            Self::Motivation => "motivation",
            Self::Society => "society",
            Self::Love => "love",
            Self::SelfGrowth => "self-growth",
            Self::Nature => "nature",
            Self::Philosophy => "philosophy",
            Self::Youth => "youth",
            Self::Hope => "hope",
            Self::Reflection => "reflection",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Motivation => "Motivation",
            Self::Society => "Society",
            Self::Love => "Love",
            Self::SelfGrowth => "Self-Growth",
            Self::Nature => "Nature",
            Self::Philosophy => "Philosophy",
            Self::Youth => "Youth",
            Self::Hope => "Hope",
            Self::Reflection => "Reflection",
        }
    }
}

/// One immutable writing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WritingRecord {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: Category,
    pub tags: Vec<Tag>,
    /// `YYYY-MM-DD`, validated when the catalog loads.
    pub date: String,
    /// Minutes.
    pub read_time: u32,
    #[serde(default)]
    pub featured: bool,
}

impl WritingRecord {
    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn permalink(&self) -> String {
        format!("/writing/{}/", self.id)
    }
}
