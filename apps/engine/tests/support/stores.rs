//! Store doubles for persistence-failure tests.

use engine::domain::card::Card;
use engine::domain::negotiation::Negotiation;
use engine::domain::partner::Partner;
use engine::domain::state::GameState;
use engine::error::AppError;
use engine::repos::GameStore;

/// Fails every operation, so tests can assert the session keeps its
/// in-memory invariants and surfaces the failure instead of swallowing it.
pub struct FailingStore;

impl FailingStore {
    fn fail<T>(&self) -> Result<T, AppError> {
        Err(AppError::store("injected store failure"))
    }
}

impl GameStore for FailingStore {
    fn load_game(&self) -> Result<Option<GameState>, AppError> {
        self.fail()
    }

    fn save_game(&self, _state: &GameState) -> Result<(), AppError> {
        self.fail()
    }

    fn get_card(&self, _card_id: &str) -> Result<Option<Card>, AppError> {
        self.fail()
    }

    fn upsert_card(&self, _card: &Card) -> Result<(), AppError> {
        self.fail()
    }

    fn delete_card(&self, _card_id: &str) -> Result<(), AppError> {
        self.fail()
    }

    fn all_cards(&self) -> Result<Vec<Card>, AppError> {
        self.fail()
    }

    fn upsert_partner(&self, _partner: &Partner) -> Result<(), AppError> {
        self.fail()
    }

    fn all_partners(&self) -> Result<Vec<Partner>, AppError> {
        self.fail()
    }

    fn get_negotiation(&self, _negotiation_id: &str) -> Result<Option<Negotiation>, AppError> {
        self.fail()
    }

    fn upsert_negotiation(&self, _negotiation: &Negotiation) -> Result<(), AppError> {
        self.fail()
    }

    fn all_negotiations(&self) -> Result<Vec<Negotiation>, AppError> {
        self.fail()
    }

    fn clear_all(&self) -> Result<(), AppError> {
        self.fail()
    }
}
