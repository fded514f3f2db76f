//! Session rules and the constants they constrain.

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

pub const PARTNERS: usize = 2;

/// Card time estimates accepted by validation, in minutes.
pub const TIME_ESTIMATE_MIN_MIN: u16 = 5;
pub const TIME_ESTIMATE_MAX_MIN: u16 = 480;

/// Constraints the deal engine and negotiation machine must respect.
/// Immutable for the life of a session unless explicitly reconfigured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRules {
    /// Minimum cards each partner must end up holding after a deal.
    pub min_cards_per_partner: u32,
    /// Cap per-partner category counts at `ceil(total/2) + 1`.
    pub category_balance_required: bool,
    /// Carried for collaborators that model card dependencies.
    pub check_dependencies: bool,
    /// Whether time commitments are surfaced to consumers.
    pub track_time: bool,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            min_cards_per_partner: 0,
            category_balance_required: false,
            check_dependencies: false,
            track_time: true,
        }
    }
}

/// Most cards of one category a single partner may hold when category
/// balance is required.
pub fn category_cap(category_total: usize) -> usize {
    category_total.div_ceil(2) + 1
}

/// Check that dealing `pool_size` cards on top of the current per-partner
/// counts can satisfy `min_cards_per_partner`. Reports without dealing.
pub fn check_deal_feasible(
    rules: &GameRules,
    current_counts: [u32; PARTNERS],
    pool_size: usize,
) -> Result<(), DomainError> {
    let needed: u64 = current_counts
        .iter()
        .map(|&held| u64::from(rules.min_cards_per_partner.saturating_sub(held)))
        .sum();
    if needed > pool_size as u64 {
        return Err(DomainError::insufficient_cards(format!(
            "{} unassigned cards cannot bring both partners to the minimum of {}",
            pool_size, rules.min_cards_per_partner
        )));
    }
    Ok(())
}
