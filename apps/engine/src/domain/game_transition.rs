//! Edge-triggered transitions derived from before/after session state.
//!
//! The game-flow service derives these around every committed mutation and
//! merges in explicit transitions the mutation itself reports.

use crate::domain::state::{DealMode, GameState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Explicit: a deal pass assigned this many cards.
    DealCompleted { mode: DealMode, assigned: usize },

    /// Explicit: a negotiation was opened.
    NegotiationOpened { negotiation_id: String },

    /// Edge-triggered: an open negotiation reached a terminal state.
    NegotiationResolved {
        negotiation_id: String,
        accepted: bool,
    },

    /// Edge-triggered: session moved from active to ended.
    GameEnded,
}

/// Derive transitions from before/after state.
pub fn derive_game_transitions(before: &GameState, after: &GameState) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    // 1. Negotiations that became terminal in this mutation.
    for negotiation in &after.negotiations {
        if negotiation.is_open() {
            continue;
        }
        let was_open = before
            .negotiation(&negotiation.id)
            .map(|prev| prev.is_open())
            .unwrap_or(false);
        if was_open {
            transitions.push(GameTransition::NegotiationResolved {
                negotiation_id: negotiation.id.clone(),
                accepted: negotiation.status
                    == crate::domain::negotiation::NegotiationStatus::Accepted,
            });
        }
    }

    // 2. Session end (active -> inactive).
    if before.is_active && !after.is_active {
        transitions.push(GameTransition::GameEnded);
    }

    transitions
}
