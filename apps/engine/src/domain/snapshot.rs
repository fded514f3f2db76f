//! Public snapshot API for observing session state without exposing internals.
//!
//! Consumers (UI, persistence collaborators) render from these; the
//! authoritative `GameState` never leaves the game-flow service. Never
//! panics; produces safe defaults for inconsistent states.

use serde::{Deserialize, Serialize};

use crate::domain::card::{Card, CardStatus, Category, Difficulty, LocalizedText};
use crate::domain::negotiation::{Negotiation, NegotiationStatus};
use crate::domain::partner::PartnerId;
use crate::domain::rules::GameRules;
use crate::domain::state::{DealMode, GameState};

/// Public info about a single partner.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PartnerPublic {
    pub id: PartnerId,
    pub name: String,
    pub current_cards: u32,
    pub total_time_commitment: u32,
    pub strong_suits: Vec<Category>,
}

/// Card facts a consumer needs to render a deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardPublic {
    pub id: String,
    pub category: Category,
    pub title: LocalizedText,
    pub holder: Option<PartnerId>,
    pub status: CardStatus,
    pub difficulty: Difficulty,
    pub time_estimate: u16,
}

/// Open or resolved negotiation as consumers see it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NegotiationPublic {
    pub id: String,
    pub initiator: PartnerId,
    pub awaiting: PartnerId,
    pub status: NegotiationStatus,
    pub card_ids: Vec<String>,
    pub notes: String,
}

/// Session-level header present in all snapshots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameHeader {
    pub id: String,
    pub deal_mode: DealMode,
    pub rules: GameRules,
    pub is_active: bool,
    pub unassigned_count: usize,
    pub partners: [PartnerPublic; 2],
}

/// Top-level read-only view handed to consumers after each mutation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub game: GameHeader,
    pub cards: Vec<CardPublic>,
    pub negotiations: Vec<NegotiationPublic>,
}

/// Entry point: produce a snapshot of the current session state.
pub fn snapshot(state: &GameState) -> GameSnapshot {
    let partners = [
        partner_public(state, PartnerId::A),
        partner_public(state, PartnerId::B),
    ];

    GameSnapshot {
        game: GameHeader {
            id: state.id.clone(),
            deal_mode: state.deal_mode,
            rules: state.rules,
            is_active: state.is_active,
            unassigned_count: state.unassigned_cards().len(),
            partners,
        },
        cards: state.cards.iter().map(card_public).collect(),
        negotiations: state.negotiations.iter().map(negotiation_public).collect(),
    }
}

fn partner_public(state: &GameState, id: PartnerId) -> PartnerPublic {
    let partner = state.partner(id);
    PartnerPublic {
        id,
        name: partner.name.clone(),
        current_cards: partner.stats.current_cards,
        total_time_commitment: partner.stats.total_time_commitment,
        strong_suits: partner.preferences.strong_suits.clone(),
    }
}

fn card_public(card: &Card) -> CardPublic {
    CardPublic {
        id: card.id.clone(),
        category: card.category,
        title: card.title.clone(),
        holder: card.holder,
        status: card.status,
        difficulty: card.metadata.difficulty,
        time_estimate: card.metadata.time_estimate,
    }
}

fn negotiation_public(negotiation: &Negotiation) -> NegotiationPublic {
    NegotiationPublic {
        id: negotiation.id.clone(),
        initiator: negotiation.initiator,
        awaiting: negotiation.proposal.to,
        status: negotiation.status,
        card_ids: negotiation.card_ids.clone(),
        notes: negotiation.proposal.notes.clone(),
    }
}
