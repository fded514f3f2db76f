//! Partner types: the fixed two-partner registry, preferences, derived stats.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

use crate::domain::card::Category;

/// The two fixed partners. A closed two-element set, not a collection, so
/// balance math stays exact.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum PartnerId {
    #[serde(rename = "partner-a")]
    A,
    #[serde(rename = "partner-b")]
    B,
}

impl PartnerId {
    pub const BOTH: [PartnerId; 2] = [PartnerId::A, PartnerId::B];

    /// The opposite partner.
    pub const fn other(self) -> PartnerId {
        match self {
            PartnerId::A => PartnerId::B,
            PartnerId::B => PartnerId::A,
        }
    }

    /// Positional index into `[T; 2]` containers.
    pub const fn index(self) -> usize {
        match self {
            PartnerId::A => 0,
            PartnerId::B => 1,
        }
    }
}

/// Hour range within a day, 0..=23.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start: u8,
    pub end: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayAvailability {
    pub available: bool,
    pub hours: Vec<HourRange>,
}

/// Weekly availability keyed by lowercase day name.
pub type Schedule = BTreeMap<String, DayAvailability>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Streak {
    pub id: String,
    pub card_id: String,
    pub count: u32,
    pub start_date: OffsetDateTime,
    pub last_completed: OffsetDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub unlocked_at: OffsetDateTime,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PartnerPreferences {
    pub favorite_cards: Vec<String>,
    pub avoid_cards: Vec<String>,
    /// Categories the partner prefers, strongest first.
    pub strong_suits: Vec<Category>,
    pub availability: Schedule,
}

/// Derived from the card collection; recomputed on every assignment change,
/// never mutated independently.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PartnerStats {
    pub current_cards: u32,
    /// Sum of held cards' time estimates, in minutes.
    pub total_time_commitment: u32,
    pub streaks: Vec<Streak>,
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternKind {
    Solid,
    Dots,
    Stripes,
    Geometric,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub kind: PatternKind,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartnerTheme {
    pub color: String,
    pub pattern: Pattern,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AvatarKind {
    AvatarBuilder,
    Photo,
    Illustrated,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Avatar {
    pub kind: AvatarKind,
    /// URL or data URI.
    pub data: String,
    #[serde(default)]
    pub animated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: PartnerId,
    pub name: String,
    pub avatar: Avatar,
    pub preferences: PartnerPreferences,
    pub stats: PartnerStats,
    pub theme: PartnerTheme,
}

impl Partner {
    /// A partner with empty preferences and a neutral theme.
    pub fn new(id: PartnerId, name: impl Into<String>) -> Self {
        let (color, icon) = match id {
            PartnerId::A => ("#7c9a92", "leaf"),
            PartnerId::B => ("#b08968", "acorn"),
        };
        Self {
            id,
            name: name.into(),
            avatar: Avatar {
                kind: AvatarKind::Illustrated,
                data: String::new(),
                animated: false,
            },
            preferences: PartnerPreferences::default(),
            stats: PartnerStats::default(),
            theme: PartnerTheme {
                color: color.to_string(),
                pattern: Pattern {
                    kind: PatternKind::Solid,
                    color: color.to_string(),
                },
                icon: icon.to_string(),
            },
        }
    }

    /// The partner's top strong-suit category, if any are set.
    pub fn top_strong_suit(&self) -> Option<Category> {
        self.preferences.strong_suits.first().copied()
    }

    /// Whether this category is one of the partner's strong suits.
    pub fn has_strong_suit(&self, category: Category) -> bool {
        self.preferences.strong_suits.contains(&category)
    }
}
