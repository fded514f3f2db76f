//! Derived partner statistics.
//!
//! Stats are a cache over the card collection: recomputed whenever
//! assignment changes, never mutated independently. Streaks and
//! achievements are longer-lived records and pass through untouched.

use crate::domain::partner::PartnerId;
use crate::domain::state::GameState;

/// Recompute `current_cards` and `total_time_commitment` for both partners
/// from the card collection.
pub fn recompute_stats(state: &mut GameState) {
    for partner_id in PartnerId::BOTH {
        let mut cards = 0u32;
        let mut minutes = 0u32;
        for card in &state.cards {
            if card.holder == Some(partner_id) && card.metadata.is_active {
                cards += 1;
                minutes += u32::from(card.metadata.time_estimate);
            }
        }
        let stats = &mut state.partner_mut(partner_id).stats;
        stats.current_cards = cards;
        stats.total_time_commitment = minutes;
    }
}
