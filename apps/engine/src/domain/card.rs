//! Core card types: categories, status, metadata, and the append-only history log.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use ulid::Ulid;

use crate::domain::partner::PartnerId;
use crate::domain::rules::{TIME_ESTIMATE_MAX_MIN, TIME_ESTIMATE_MIN_MIN};
use crate::errors::domain::{DomainError, ValidationKind};

/// Chore category. Closed set of six; `Custom` covers user-authored cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    DailyGrind,
    Kids,
    Home,
    Magic,
    Wild,
    Custom,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 6] = [
        Category::DailyGrind,
        Category::Kids,
        Category::Home,
        Category::Magic,
        Category::Wild,
        Category::Custom,
    ];
}

/// Where a card sits in the assignment lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardStatus {
    Unassigned,
    Held,
    InNegotiation,
    Shared,
    Paused,
}

/// Effort level, 1..=3.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Occasional,
}

/// Display strings in both supported languages.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub he: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, he: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            he: he.into(),
        }
    }

    /// Case-insensitive containment check across both languages.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.en.to_lowercase().contains(&query) || self.he.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CustomFieldKind {
    Text,
    Number,
    Date,
    Boolean,
}

/// User-defined extra field on a custom card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomField {
    pub id: String,
    pub name: String,
    pub value: String,
    pub kind: CustomFieldKind,
}

/// What happened to a card, recorded in its history log.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryAction {
    Created,
    Assigned,
    Completed,
    Negotiated,
    Modified,
}

/// Single append-only history entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardHistory {
    pub id: String,
    pub action: HistoryAction,
    pub timestamp: OffsetDateTime,
    pub performed_by: PartnerId,
    pub details: String,
}

impl CardHistory {
    pub fn record(action: HistoryAction, performed_by: PartnerId, details: impl Into<String>) -> Self {
        Self {
            id: Ulid::new().to_string(),
            action,
            timestamp: OffsetDateTime::now_utc(),
            performed_by,
            details: details.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardMetadata {
    pub created_at: OffsetDateTime,
    pub modified_at: OffsetDateTime,
    pub is_custom: bool,
    pub is_active: bool,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    pub frequency: Frequency,
    /// Estimated effort in minutes. Valid range is 5..=480.
    pub time_estimate: u16,
}

/// A chore card. `holder == None` iff `status == Unassigned`; the
/// constructor and `validate` enforce the relation explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub category: Category,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub details: LocalizedText,
    pub holder: Option<PartnerId>,
    pub status: CardStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_fields: Vec<CustomField>,
    pub metadata: CardMetadata,
    pub history: Vec<CardHistory>,
}

/// Validated inputs for creating a card.
#[derive(Debug, Clone)]
pub struct NewCard {
    pub category: Category,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub details: LocalizedText,
    pub is_custom: bool,
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    pub frequency: Frequency,
    pub time_estimate: u16,
}

impl Card {
    /// Create an unassigned card, appending the `created` history entry.
    pub fn create(new: NewCard, created_by: PartnerId) -> Result<Self, DomainError> {
        validate_time_estimate(new.time_estimate)?;

        let now = OffsetDateTime::now_utc();
        Ok(Self {
            id: Ulid::new().to_string(),
            category: new.category,
            title: new.title,
            description: new.description,
            details: new.details,
            holder: None,
            status: CardStatus::Unassigned,
            custom_fields: Vec::new(),
            metadata: CardMetadata {
                created_at: now,
                modified_at: now,
                is_custom: new.is_custom,
                is_active: true,
                tags: new.tags,
                difficulty: new.difficulty,
                frequency: new.frequency,
                time_estimate: new.time_estimate,
            },
            history: vec![CardHistory::record(
                HistoryAction::Created,
                created_by,
                "card created",
            )],
        })
    }

    /// Check the holder/status relation and metadata bounds.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_time_estimate(self.metadata.time_estimate)?;
        match (self.holder, self.status) {
            (None, CardStatus::Unassigned) => Ok(()),
            (Some(_), CardStatus::Unassigned) => Err(DomainError::validation(
                ValidationKind::HolderStatus,
                format!("card {} has a holder but is marked unassigned", self.id),
            )),
            (None, _) => Err(DomainError::validation(
                ValidationKind::HolderStatus,
                format!("card {} has status {:?} but no holder", self.id, self.status),
            )),
            (Some(_), _) => Ok(()),
        }
    }

    /// Assign the card to a partner, recording history.
    pub fn assign_to(&mut self, partner: PartnerId, action: HistoryAction, details: &str) {
        self.holder = Some(partner);
        self.status = CardStatus::Held;
        self.touch();
        self.history
            .push(CardHistory::record(action, partner, details));
    }

    pub fn touch(&mut self) {
        self.metadata.modified_at = OffsetDateTime::now_utc();
    }
}

fn validate_time_estimate(minutes: u16) -> Result<(), DomainError> {
    if !(TIME_ESTIMATE_MIN_MIN..=TIME_ESTIMATE_MAX_MIN).contains(&minutes) {
        return Err(DomainError::validation(
            ValidationKind::TimeEstimate,
            format!(
                "Time estimate must be between {TIME_ESTIMATE_MIN_MIN}-{TIME_ESTIMATE_MAX_MIN} minutes, got {minutes}"
            ),
        ));
    }
    Ok(())
}
