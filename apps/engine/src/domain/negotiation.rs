//! Negotiation lifecycle: propose / counter / accept / reject.
//!
//! `pending -> {accepted, rejected, counter}`; `counter` is re-entrant;
//! `accepted` and `rejected` are terminal. Cards referenced by an open
//! negotiation carry `in-negotiation` status, and at most one open
//! negotiation may reference a given card.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;
use ulid::Ulid;

use crate::domain::card::{CardHistory, CardStatus, HistoryAction};
use crate::domain::partner::PartnerId;
use crate::domain::state::GameState;
use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NegotiationStatus {
    Pending,
    Accepted,
    Rejected,
    Counter,
}

impl NegotiationStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, NegotiationStatus::Accepted | NegotiationStatus::Rejected)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NegotiationEventType {
    Proposed,
    Countered,
    Accepted,
    Rejected,
}

/// Ordered log entry of a negotiation's lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationEvent {
    pub id: String,
    pub event: NegotiationEventType,
    pub timestamp: OffsetDateTime,
    pub actor: PartnerId,
    pub details: String,
}

impl NegotiationEvent {
    fn record(event: NegotiationEventType, actor: PartnerId, details: impl Into<String>) -> Self {
        Self {
            id: Ulid::new().to_string(),
            event,
            timestamp: OffsetDateTime::now_utc(),
            actor,
            details: details.into(),
        }
    }
}

/// The offer currently on the table. After a counter, `from`/`to` are the
/// counter-party's, so `to` is always the partner expected to answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NegotiationProposal {
    pub from: PartnerId,
    pub to: PartnerId,
    pub cards: Vec<String>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Negotiation {
    pub id: String,
    pub initiator: PartnerId,
    pub card_ids: Vec<String>,
    pub proposal: NegotiationProposal,
    pub status: NegotiationStatus,
    pub history: Vec<NegotiationEvent>,
    /// Each card's status before the negotiation opened, for reject restore.
    pub prior_status: BTreeMap<String, CardStatus>,
    pub created_at: OffsetDateTime,
    pub modified_at: OffsetDateTime,
}

impl Negotiation {
    pub fn is_open(&self) -> bool {
        !self.status.is_terminal()
    }
}

/// Caller decision on an open negotiation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Decision {
    Accept,
    Reject,
    Counter,
}

/// Open a negotiation over `card_ids`, initiated by `initiator` toward
/// `target`. Marks every referenced card `in-negotiation`, remembering its
/// prior status.
pub fn propose(
    state: &mut GameState,
    initiator: PartnerId,
    target: PartnerId,
    card_ids: &[String],
    notes: &str,
) -> Result<String, DomainError> {
    if target == initiator {
        return Err(DomainError::validation_other(
            "a negotiation must target the other partner",
        ));
    }
    if card_ids.is_empty() {
        return Err(DomainError::validation_other(
            "a negotiation must reference at least one card",
        ));
    }

    let mut prior_status = BTreeMap::new();
    for card_id in card_ids {
        let card = state.require_card(card_id)?;
        if let Some(open) = state.open_negotiation_for_card(card_id) {
            return Err(DomainError::conflict(
                ConflictKind::CardUnderNegotiation,
                format!(
                    "card {card_id} is already referenced by open negotiation {}",
                    open.id
                ),
            ));
        }
        prior_status.insert(card_id.clone(), card.status);
    }

    let now = OffsetDateTime::now_utc();
    let negotiation = Negotiation {
        id: Ulid::new().to_string(),
        initiator,
        card_ids: card_ids.to_vec(),
        proposal: NegotiationProposal {
            from: initiator,
            to: target,
            cards: card_ids.to_vec(),
            notes: notes.to_string(),
        },
        status: NegotiationStatus::Pending,
        history: vec![NegotiationEvent::record(
            NegotiationEventType::Proposed,
            initiator,
            notes,
        )],
        prior_status,
        created_at: now,
        modified_at: now,
    };
    let negotiation_id = negotiation.id.clone();

    for card_id in card_ids {
        let card = state.require_card_mut(card_id)?;
        card.status = CardStatus::InNegotiation;
        card.touch();
        card.history.push(CardHistory::record(
            HistoryAction::Negotiated,
            initiator,
            format!("negotiation {negotiation_id} opened"),
        ));
    }

    state.negotiations.push(negotiation);
    Ok(negotiation_id)
}

/// Answer an open negotiation. Only the current proposal's `to` partner may
/// answer; after a counter that is the original initiator.
pub fn respond(
    state: &mut GameState,
    negotiation_id: &str,
    actor: PartnerId,
    decision: Decision,
    counter_proposal: Option<NegotiationProposal>,
) -> Result<NegotiationStatus, DomainError> {
    let negotiation = state.require_negotiation_mut(negotiation_id)?;

    if negotiation.status.is_terminal() {
        return Err(DomainError::already_resolved(format!(
            "negotiation {negotiation_id} is already {:?}",
            negotiation.status
        )));
    }
    if actor != negotiation.proposal.to {
        return Err(DomainError::invalid_actor(format!(
            "negotiation {negotiation_id} awaits an answer from {}, not {}",
            negotiation.proposal.to, actor
        )));
    }

    match decision {
        Decision::Accept => accept(state, negotiation_id, actor),
        Decision::Reject => reject(state, negotiation_id, actor),
        Decision::Counter => counter(state, negotiation_id, actor, counter_proposal),
    }
}

fn accept(
    state: &mut GameState,
    negotiation_id: &str,
    actor: PartnerId,
) -> Result<NegotiationStatus, DomainError> {
    let negotiation = state.require_negotiation_mut(negotiation_id)?;
    let new_holder = negotiation.proposal.to;
    let card_ids = negotiation.card_ids.clone();

    negotiation.status = NegotiationStatus::Accepted;
    negotiation.modified_at = OffsetDateTime::now_utc();
    negotiation.history.push(NegotiationEvent::record(
        NegotiationEventType::Accepted,
        actor,
        "proposal accepted",
    ));

    for card_id in &card_ids {
        let card = state.require_card_mut(card_id)?;
        card.assign_to(
            new_holder,
            HistoryAction::Assigned,
            &format!("negotiation {negotiation_id} accepted"),
        );
    }
    Ok(NegotiationStatus::Accepted)
}

fn reject(
    state: &mut GameState,
    negotiation_id: &str,
    actor: PartnerId,
) -> Result<NegotiationStatus, DomainError> {
    let negotiation = state.require_negotiation_mut(negotiation_id)?;
    let prior = negotiation.prior_status.clone();
    let card_ids = negotiation.card_ids.clone();

    negotiation.status = NegotiationStatus::Rejected;
    negotiation.modified_at = OffsetDateTime::now_utc();
    negotiation.history.push(NegotiationEvent::record(
        NegotiationEventType::Rejected,
        actor,
        "proposal rejected",
    ));

    for card_id in &card_ids {
        let card = state.require_card_mut(card_id)?;
        card.status = prior.get(card_id).copied().unwrap_or(CardStatus::Unassigned);
        card.touch();
    }
    Ok(NegotiationStatus::Rejected)
}

fn counter(
    state: &mut GameState,
    negotiation_id: &str,
    actor: PartnerId,
    counter_proposal: Option<NegotiationProposal>,
) -> Result<NegotiationStatus, DomainError> {
    let Some(mut proposal) = counter_proposal else {
        return Err(DomainError::validation(
            ValidationKind::MissingCounterProposal,
            "a counter decision requires a counter-proposal",
        ));
    };

    let negotiation = state.require_negotiation_mut(negotiation_id)?;

    let mut offered: Vec<&str> = proposal.cards.iter().map(String::as_str).collect();
    let mut referenced: Vec<&str> = negotiation.card_ids.iter().map(String::as_str).collect();
    offered.sort_unstable();
    referenced.sort_unstable();
    if offered != referenced {
        return Err(DomainError::validation(
            ValidationKind::CounterCardMismatch,
            format!(
                "counter-proposal for negotiation {negotiation_id} must reference the same cards"
            ),
        ));
    }

    // Roles swap: the counter comes from the answering partner and now
    // awaits the previous proposer.
    proposal.from = actor;
    proposal.to = actor.other();
    let notes = proposal.notes.clone();

    negotiation.proposal = proposal;
    negotiation.status = NegotiationStatus::Counter;
    negotiation.modified_at = OffsetDateTime::now_utc();
    negotiation.history.push(NegotiationEvent::record(
        NegotiationEventType::Countered,
        actor,
        notes,
    ));
    Ok(NegotiationStatus::Counter)
}
