//! The authoritative session state container and its lookup helpers.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use ulid::Ulid;

use crate::domain::card::{Card, CardStatus};
use crate::domain::negotiation::{Negotiation, NegotiationStatus};
use crate::domain::partner::{Partner, PartnerId};
use crate::domain::rules::GameRules;
use crate::errors::domain::{DomainError, NotFoundKind};

/// Algorithm variant used to distribute unassigned cards.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DealMode {
    Random,
    Weighted,
    Draft,
    Auction,
    Quick,
}

/// Entire session container, sufficient for pure domain operations.
///
/// The game-flow service is the sole mutator; everything else reads
/// snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub id: String,
    /// Exactly two partners, indexed by [`PartnerId::index`].
    pub partners: [Partner; 2],
    pub cards: Vec<Card>,
    pub negotiations: Vec<Negotiation>,
    pub deal_mode: DealMode,
    pub rules: GameRules,
    pub is_active: bool,
    pub created_at: OffsetDateTime,
    pub modified_at: OffsetDateTime,
}

impl GameState {
    pub fn new(partners: [Partner; 2], cards: Vec<Card>, rules: GameRules) -> Self {
        let now = OffsetDateTime::now_utc();
        Self {
            id: Ulid::new().to_string(),
            partners,
            cards,
            negotiations: Vec::new(),
            deal_mode: DealMode::Random,
            rules,
            is_active: true,
            created_at: now,
            modified_at: now,
        }
    }

    pub fn partner(&self, id: PartnerId) -> &Partner {
        &self.partners[id.index()]
    }

    pub fn partner_mut(&mut self, id: PartnerId) -> &mut Partner {
        &mut self.partners[id.index()]
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    pub fn card_mut(&mut self, card_id: &str) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id == card_id)
    }

    pub fn require_card(&self, card_id: &str) -> Result<&Card, DomainError> {
        self.card(card_id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Card, format!("no card with id {card_id}"))
        })
    }

    pub fn require_card_mut(&mut self, card_id: &str) -> Result<&mut Card, DomainError> {
        // Two lookups keep the borrow checker happy without unsafe tricks.
        self.require_card(card_id)?;
        self.card_mut(card_id).ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Card, format!("no card with id {card_id}"))
        })
    }

    /// Cards awaiting assignment, in repository order.
    pub fn unassigned_cards(&self) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|c| c.status == CardStatus::Unassigned)
            .collect()
    }

    /// Cards currently held by a partner.
    pub fn cards_held_by(&self, partner: PartnerId) -> Vec<&Card> {
        self.cards
            .iter()
            .filter(|c| c.holder == Some(partner))
            .collect()
    }

    pub fn negotiation(&self, negotiation_id: &str) -> Option<&Negotiation> {
        self.negotiations.iter().find(|n| n.id == negotiation_id)
    }

    pub fn negotiation_mut(&mut self, negotiation_id: &str) -> Option<&mut Negotiation> {
        self.negotiations
            .iter_mut()
            .find(|n| n.id == negotiation_id)
    }

    pub fn require_negotiation_mut(
        &mut self,
        negotiation_id: &str,
    ) -> Result<&mut Negotiation, DomainError> {
        self.negotiation_mut(negotiation_id).ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Negotiation,
                format!("no negotiation with id {negotiation_id}"),
            )
        })
    }

    /// The open (pending or counter) negotiation referencing a card, if any.
    pub fn open_negotiation_for_card(&self, card_id: &str) -> Option<&Negotiation> {
        self.negotiations
            .iter()
            .find(|n| n.is_open() && n.card_ids.iter().any(|id| id == card_id))
    }

    pub fn open_negotiations(&self) -> Vec<&Negotiation> {
        self.negotiations.iter().filter(|n| n.is_open()).collect()
    }

    pub fn negotiations_by_status(&self, status: NegotiationStatus) -> Vec<&Negotiation> {
        self.negotiations
            .iter()
            .filter(|n| n.status == status)
            .collect()
    }

    /// Reject any mutation after `end_game`.
    pub fn require_active(&self) -> Result<(), DomainError> {
        if !self.is_active {
            return Err(DomainError::game_ended(format!(
                "game {} is no longer active",
                self.id
            )));
        }
        Ok(())
    }

    pub fn touch(&mut self) {
        self.modified_at = OffsetDateTime::now_utc();
    }
}
