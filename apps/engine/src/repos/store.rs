//! Persistence port for session state.
//!
//! The engine treats storage as best-effort, not transactional: the
//! game-flow service commits in memory first, then writes through this
//! trait and surfaces (never swallows) any failure. Adapters live in
//! `crate::adapters`.

use crate::domain::card::Card;
use crate::domain::negotiation::Negotiation;
use crate::domain::partner::Partner;
use crate::domain::state::GameState;
use crate::error::AppError;

pub trait GameStore: Send + Sync {
    /// Load the persisted session, if one exists.
    fn load_game(&self) -> Result<Option<GameState>, AppError>;

    /// Persist the full session state.
    fn save_game(&self, state: &GameState) -> Result<(), AppError>;

    // Per-entity CRUD keyed by id, mirroring the session collections.

    fn get_card(&self, card_id: &str) -> Result<Option<Card>, AppError>;
    fn upsert_card(&self, card: &Card) -> Result<(), AppError>;
    fn delete_card(&self, card_id: &str) -> Result<(), AppError>;
    fn all_cards(&self) -> Result<Vec<Card>, AppError>;

    fn upsert_partner(&self, partner: &Partner) -> Result<(), AppError>;
    fn all_partners(&self) -> Result<Vec<Partner>, AppError>;

    fn get_negotiation(&self, negotiation_id: &str) -> Result<Option<Negotiation>, AppError>;
    fn upsert_negotiation(&self, negotiation: &Negotiation) -> Result<(), AppError>;
    fn all_negotiations(&self) -> Result<Vec<Negotiation>, AppError>;

    /// Drop everything. Used by reset flows and tests.
    fn clear_all(&self) -> Result<(), AppError>;
}
