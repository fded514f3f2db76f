//! Domain layer: pure session logic types and helpers.

pub mod card;
pub mod card_parsing;
pub mod dealing;
pub mod fixtures;
pub mod game_transition;
pub mod negotiation;
pub mod partner;
pub mod rules;
pub mod seed_derivation;
pub mod snapshot;
pub mod state;
pub mod stats;

#[cfg(test)]
mod tests_dealing;
#[cfg(test)]
mod tests_negotiation;
#[cfg(test)]
mod tests_props_dealing;
#[cfg(test)]
mod tests_stats;

// Re-exports for ergonomics
pub use card::{Card, CardStatus, Category, Difficulty, Frequency, HistoryAction, NewCard};
pub use dealing::{deal, Assignment};
pub use negotiation::{Decision, Negotiation, NegotiationProposal, NegotiationStatus};
pub use partner::{Partner, PartnerId};
pub use rules::GameRules;
pub use seed_derivation::derive_deal_seed;
pub use snapshot::{snapshot, GameSnapshot};
pub use state::{DealMode, GameState};
pub use stats::recompute_stats;
