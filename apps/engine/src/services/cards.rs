//! Card repository operations over the live session.

use crate::domain::card::{
    Card, CardHistory, CardStatus, Category, Difficulty, Frequency, HistoryAction, LocalizedText,
    NewCard,
};
use crate::domain::fixtures::starter_deck;
use crate::domain::partner::PartnerId;
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::services::game_flow::{GameFlowMutationResult, GameSession};

/// Partial update applied to an existing card. `None` fields are untouched.
#[derive(Debug, Clone, Default)]
pub struct CardUpdate {
    pub title: Option<LocalizedText>,
    pub description: Option<LocalizedText>,
    pub details: Option<LocalizedText>,
    pub category: Option<Category>,
    pub difficulty: Option<Difficulty>,
    pub frequency: Option<Frequency>,
    pub time_estimate: Option<u16>,
    pub tags: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

/// Card CRUD and queries, scoped to one session.
pub struct CardService<'a> {
    session: &'a GameSession,
}

impl GameSession {
    pub fn cards(&self) -> CardService<'_> {
        CardService { session: self }
    }
}

impl CardService<'_> {
    /// Create a validated card, returning its id with the commit result.
    pub fn create(
        &self,
        new: NewCard,
        created_by: PartnerId,
    ) -> Result<(String, GameFlowMutationResult), AppError> {
        let mut card_id = String::new();
        let result = self.session.mutate(|state| {
            let card = Card::create(new, created_by)?;
            card_id = card.id.clone();
            state.cards.push(card);
            Ok(Vec::new())
        })?;
        Ok((card_id, result))
    }

    /// Apply a partial update, appending a `modified` history entry.
    pub fn update(
        &self,
        card_id: &str,
        update: CardUpdate,
        actor: PartnerId,
    ) -> Result<GameFlowMutationResult, AppError> {
        self.session.mutate(|state| {
            let card = state.require_card_mut(card_id)?;
            if let Some(title) = update.title {
                card.title = title;
            }
            if let Some(description) = update.description {
                card.description = description;
            }
            if let Some(details) = update.details {
                card.details = details;
            }
            if let Some(category) = update.category {
                card.category = category;
            }
            if let Some(difficulty) = update.difficulty {
                card.metadata.difficulty = difficulty;
            }
            if let Some(minutes) = update.time_estimate {
                card.metadata.time_estimate = minutes;
            }
            if let Some(frequency) = update.frequency {
                card.metadata.frequency = frequency;
            }
            if let Some(tags) = update.tags {
                card.metadata.tags = tags;
            }
            if let Some(is_active) = update.is_active {
                card.metadata.is_active = is_active;
            }
            card.touch();
            card.history.push(CardHistory::record(
                HistoryAction::Modified,
                actor,
                "card updated",
            ));
            card.validate()?;
            Ok(Vec::new())
        })
    }

    /// Remove a card. Refused while an open negotiation references it.
    pub fn remove(&self, card_id: &str) -> Result<GameFlowMutationResult, AppError> {
        self.session.mutate(|state| {
            state.require_card(card_id)?;
            if let Some(open) = state.open_negotiation_for_card(card_id) {
                return Err(DomainError::conflict(
                    ConflictKind::CardUnderNegotiation,
                    format!(
                        "card {card_id} cannot be removed while negotiation {} is open",
                        open.id
                    ),
                ));
            }
            state.cards.retain(|c| c.id != card_id);
            Ok(Vec::new())
        })
    }

    /// Add pre-built cards in one commit, validating each.
    pub fn bulk_add(&self, cards: Vec<Card>) -> Result<GameFlowMutationResult, AppError> {
        self.session.mutate(|state| {
            for card in &cards {
                card.validate()?;
                if state.card(&card.id).is_some() {
                    return Err(DomainError::conflict(
                        ConflictKind::Other("duplicate card id".to_string()),
                        format!("card {} already exists", card.id),
                    ));
                }
            }
            state.cards.extend(cards);
            Ok(Vec::new())
        })
    }

    /// Remove several cards in one commit. Refused wholesale if any card is
    /// missing or under an open negotiation.
    pub fn bulk_remove(&self, card_ids: &[String]) -> Result<GameFlowMutationResult, AppError> {
        self.session.mutate(|state| {
            for card_id in card_ids {
                state.require_card(card_id)?;
                if let Some(open) = state.open_negotiation_for_card(card_id) {
                    return Err(DomainError::conflict(
                        ConflictKind::CardUnderNegotiation,
                        format!(
                            "card {card_id} cannot be removed while negotiation {} is open",
                            open.id
                        ),
                    ));
                }
            }
            state.cards.retain(|c| !card_ids.contains(&c.id));
            Ok(Vec::new())
        })
    }

    /// Seed the starter deck into an empty-ish session.
    pub fn seed_starter_deck(&self) -> Result<GameFlowMutationResult, AppError> {
        let deck = starter_deck()?;
        self.bulk_add(deck)
    }

    pub fn get(&self, card_id: &str) -> Option<Card> {
        self.session.with_state(|state| state.card(card_id).cloned())
    }

    pub fn by_category(&self, category: Category) -> Vec<Card> {
        self.session.with_state(|state| {
            state
                .cards
                .iter()
                .filter(|c| c.category == category)
                .cloned()
                .collect()
        })
    }

    pub fn by_status(&self, status: CardStatus) -> Vec<Card> {
        self.session.with_state(|state| {
            state
                .cards
                .iter()
                .filter(|c| c.status == status)
                .cloned()
                .collect()
        })
    }

    pub fn by_holder(&self, partner: PartnerId) -> Vec<Card> {
        self.session
            .with_state(|state| state.cards_held_by(partner).into_iter().cloned().collect())
    }

    /// Case-insensitive search over titles and descriptions in both
    /// languages.
    pub fn search(&self, query: &str) -> Vec<Card> {
        self.session.with_state(|state| {
            state
                .cards
                .iter()
                .filter(|c| c.title.matches(query) || c.description.matches(query))
                .cloned()
                .collect()
        })
    }
}
