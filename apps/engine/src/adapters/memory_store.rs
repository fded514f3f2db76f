//! In-memory store adapter. Always available; the default for tests and
//! for callers that persist elsewhere.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::domain::card::Card;
use crate::domain::negotiation::Negotiation;
use crate::domain::partner::Partner;
use crate::domain::state::GameState;
use crate::error::AppError;
use crate::repos::store::GameStore;

#[derive(Default)]
struct MemoryInner {
    game: Option<GameState>,
    cards: HashMap<String, Card>,
    partners: HashMap<String, Partner>,
    negotiations: HashMap<String, Negotiation>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<MemoryInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl GameStore for MemoryStore {
    fn load_game(&self) -> Result<Option<GameState>, AppError> {
        Ok(self.inner.read().game.clone())
    }

    fn save_game(&self, state: &GameState) -> Result<(), AppError> {
        let mut inner = self.inner.write();
        inner.game = Some(state.clone());
        // Keep the per-entity tables in step with the full-state write.
        inner.cards = state
            .cards
            .iter()
            .map(|c| (c.id.clone(), c.clone()))
            .collect();
        inner.partners = state
            .partners
            .iter()
            .map(|p| (p.id.to_string(), p.clone()))
            .collect();
        inner.negotiations = state
            .negotiations
            .iter()
            .map(|n| (n.id.clone(), n.clone()))
            .collect();
        Ok(())
    }

    fn get_card(&self, card_id: &str) -> Result<Option<Card>, AppError> {
        Ok(self.inner.read().cards.get(card_id).cloned())
    }

    fn upsert_card(&self, card: &Card) -> Result<(), AppError> {
        self.inner
            .write()
            .cards
            .insert(card.id.clone(), card.clone());
        Ok(())
    }

    fn delete_card(&self, card_id: &str) -> Result<(), AppError> {
        self.inner.write().cards.remove(card_id);
        Ok(())
    }

    fn all_cards(&self) -> Result<Vec<Card>, AppError> {
        Ok(self.inner.read().cards.values().cloned().collect())
    }

    fn upsert_partner(&self, partner: &Partner) -> Result<(), AppError> {
        self.inner
            .write()
            .partners
            .insert(partner.id.to_string(), partner.clone());
        Ok(())
    }

    fn all_partners(&self) -> Result<Vec<Partner>, AppError> {
        Ok(self.inner.read().partners.values().cloned().collect())
    }

    fn get_negotiation(&self, negotiation_id: &str) -> Result<Option<Negotiation>, AppError> {
        Ok(self.inner.read().negotiations.get(negotiation_id).cloned())
    }

    fn upsert_negotiation(&self, negotiation: &Negotiation) -> Result<(), AppError> {
        self.inner
            .write()
            .negotiations
            .insert(negotiation.id.clone(), negotiation.clone());
        Ok(())
    }

    fn all_negotiations(&self) -> Result<Vec<Negotiation>, AppError> {
        Ok(self.inner.read().negotiations.values().cloned().collect())
    }

    fn clear_all(&self) -> Result<(), AppError> {
        let mut inner = self.inner.write();
        *inner = MemoryInner::default();
        Ok(())
    }
}
