//! Derived partner stats.

use crate::domain::card::HistoryAction;
use crate::domain::partner::PartnerId;
use crate::domain::stats::recompute_stats;
use crate::domain::test_state_helpers::game_with_held_cards;

#[test]
fn recompute_counts_held_cards_and_minutes() {
    let mut state = game_with_held_cards(3, 1);
    recompute_stats(&mut state);

    assert_eq!(state.partner(PartnerId::A).stats.current_cards, 3);
    assert_eq!(state.partner(PartnerId::A).stats.total_time_commitment, 90);
    assert_eq!(state.partner(PartnerId::B).stats.current_cards, 1);
    assert_eq!(state.partner(PartnerId::B).stats.total_time_commitment, 30);
}

#[test]
fn recompute_follows_reassignment() {
    let mut state = game_with_held_cards(2, 0);
    let card_id = state.cards_held_by(PartnerId::A)[0].id.clone();
    state
        .require_card_mut(&card_id)
        .unwrap()
        .assign_to(PartnerId::B, HistoryAction::Assigned, "moved");

    recompute_stats(&mut state);
    assert_eq!(state.partner(PartnerId::A).stats.current_cards, 1);
    assert_eq!(state.partner(PartnerId::B).stats.current_cards, 1);
}

#[test]
fn inactive_cards_do_not_count() {
    let mut state = game_with_held_cards(2, 0);
    let card_id = state.cards_held_by(PartnerId::A)[0].id.clone();
    state.require_card_mut(&card_id).unwrap().metadata.is_active = false;

    recompute_stats(&mut state);
    assert_eq!(state.partner(PartnerId::A).stats.current_cards, 1);
    assert_eq!(state.partner(PartnerId::A).stats.total_time_commitment, 30);
}

#[test]
fn streaks_and_achievements_survive_recompute() {
    let mut state = game_with_held_cards(1, 1);
    let now = time::OffsetDateTime::now_utc();
    let card_id = state.cards[0].id.clone();
    state
        .partner_mut(PartnerId::A)
        .stats
        .streaks
        .push(crate::domain::partner::Streak {
            id: "streak-1".to_string(),
            card_id,
            count: 4,
            start_date: now,
            last_completed: now,
        });

    recompute_stats(&mut state);
    assert_eq!(state.partner(PartnerId::A).stats.streaks.len(), 1);
}
