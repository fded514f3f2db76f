//! Session and deck builders for integration tests.

use std::sync::Arc;

use engine::adapters::MemoryStore;
use engine::domain::card::{
    Card, Category, Difficulty, Frequency, HistoryAction, LocalizedText, NewCard,
};
use engine::domain::partner::{Partner, PartnerId};
use engine::domain::rules::GameRules;
use engine::domain::state::GameState;
use engine::services::GameSession;

pub fn partner_pair() -> [Partner; 2] {
    [
        Partner::new(PartnerId::A, "Alex"),
        Partner::new(PartnerId::B, "Bailey"),
    ]
}

/// An unassigned card with a stable, ordering-friendly id.
pub fn pool_card(n: u32, category: Category, difficulty: Difficulty, minutes: u16) -> Card {
    let mut card = Card::create(
        NewCard {
            category,
            title: LocalizedText::new(format!("Card {n}"), format!("קלף {n}")),
            description: LocalizedText::default(),
            details: LocalizedText::default(),
            is_custom: false,
            tags: Vec::new(),
            difficulty,
            frequency: Frequency::Weekly,
            time_estimate: minutes,
        },
        PartnerId::A,
    )
    .expect("valid fixture card");
    card.id = format!("card-{n:03}");
    card
}

/// A state with `n` unassigned home cards and default rules.
pub fn pool_state(n: u32) -> GameState {
    let cards = (0..n)
        .map(|i| pool_card(i, Category::Home, Difficulty::Easy, 30))
        .collect();
    GameState::new(partner_pair(), cards, GameRules::default())
}

/// A state whose cards are already held, `a` by partner A and `b` by B.
pub fn held_state(a: u32, b: u32) -> GameState {
    let mut cards = Vec::new();
    for n in 0..(a + b) {
        let mut card = pool_card(n, Category::Home, Difficulty::Easy, 30);
        let holder = if n < a { PartnerId::A } else { PartnerId::B };
        card.assign_to(holder, HistoryAction::Assigned, "fixture");
        cards.push(card);
    }
    GameState::new(partner_pair(), cards, GameRules::default())
}

/// A seeded session over `state` backed by a fresh in-memory store.
pub fn session_over(state: GameState) -> GameSession {
    GameSession::new(state, Arc::new(MemoryStore::new()), Some(7))
}

pub fn session_with_pool(n: u32) -> GameSession {
    session_over(pool_state(n))
}
