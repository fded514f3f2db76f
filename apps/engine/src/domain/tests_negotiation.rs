//! Scenario tests for the negotiation state machine.

use crate::domain::card::CardStatus;
use crate::domain::negotiation::{
    propose, respond, Decision, NegotiationEventType, NegotiationProposal, NegotiationStatus,
};
use crate::domain::partner::PartnerId;
use crate::domain::state::GameState;
use crate::domain::test_state_helpers::game_with_held_cards;
use crate::errors::domain::DomainError;

fn held_card_id(state: &GameState, holder: PartnerId) -> String {
    state.cards_held_by(holder)[0].id.clone()
}

#[test]
fn propose_marks_cards_and_records_the_event() {
    let mut state = game_with_held_cards(2, 2);
    let card_id = held_card_id(&state, PartnerId::A);

    let negotiation_id = propose(&mut state, PartnerId::A, PartnerId::B, &[card_id.clone()], "take this one?")
        .unwrap();

    let card = state.require_card(&card_id).unwrap();
    assert_eq!(card.status, CardStatus::InNegotiation);

    let negotiation = state.negotiation(&negotiation_id).unwrap();
    assert_eq!(negotiation.status, NegotiationStatus::Pending);
    assert_eq!(negotiation.proposal.from, PartnerId::A);
    assert_eq!(negotiation.proposal.to, PartnerId::B);
    assert_eq!(negotiation.history.len(), 1);
    assert_eq!(negotiation.history[0].event, NegotiationEventType::Proposed);
    assert_eq!(
        negotiation.prior_status.get(&card_id),
        Some(&CardStatus::Held)
    );
}

#[test]
fn accept_transfers_the_cards_to_the_receiving_partner() {
    let mut state = game_with_held_cards(2, 2);
    let card_id = held_card_id(&state, PartnerId::A);

    let negotiation_id = propose(&mut state, PartnerId::A, PartnerId::B, &[card_id.clone()], "swap").unwrap();
    let status = respond(&mut state, &negotiation_id, PartnerId::B, Decision::Accept, None)
        .unwrap();
    assert_eq!(status, NegotiationStatus::Accepted);

    let card = state.require_card(&card_id).unwrap();
    assert_eq!(card.holder, Some(PartnerId::B));
    assert_eq!(card.status, CardStatus::Held);

    let negotiation = state.negotiation(&negotiation_id).unwrap();
    assert_eq!(negotiation.status, NegotiationStatus::Accepted);
    assert_eq!(
        negotiation.history.last().unwrap().event,
        NegotiationEventType::Accepted
    );
}

#[test]
fn reject_restores_the_pre_negotiation_status() {
    let mut state = game_with_held_cards(2, 2);
    let card_id = held_card_id(&state, PartnerId::A);
    // Pause the card first so restore has something nontrivial to do.
    state.require_card_mut(&card_id).unwrap().status = CardStatus::Paused;

    let negotiation_id = propose(&mut state, PartnerId::A, PartnerId::B, &[card_id.clone()], "swap").unwrap();
    assert_eq!(
        state.require_card(&card_id).unwrap().status,
        CardStatus::InNegotiation
    );

    respond(&mut state, &negotiation_id, PartnerId::B, Decision::Reject, None).unwrap();

    let card = state.require_card(&card_id).unwrap();
    assert_eq!(card.status, CardStatus::Paused);
    assert_eq!(card.holder, Some(PartnerId::A));
}

#[test]
fn wrong_actor_is_rejected_without_side_effects() {
    let mut state = game_with_held_cards(2, 2);
    let card_id = held_card_id(&state, PartnerId::A);
    let negotiation_id = propose(&mut state, PartnerId::A, PartnerId::B, &[card_id], "swap").unwrap();

    let before = state.clone();
    let err = respond(&mut state, &negotiation_id, PartnerId::A, Decision::Accept, None)
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidActor(_)));
    assert_eq!(state, before);
}

#[test]
fn counter_swaps_roles_and_stays_open() {
    let mut state = game_with_held_cards(2, 2);
    let card_id = held_card_id(&state, PartnerId::A);
    let negotiation_id = propose(&mut state, PartnerId::A, PartnerId::B, &[card_id.clone()], "swap").unwrap();

    let counter = NegotiationProposal {
        from: PartnerId::B,
        to: PartnerId::A,
        cards: vec![card_id.clone()],
        notes: "only if you keep it this week".to_string(),
    };
    let status = respond(
        &mut state,
        &negotiation_id,
        PartnerId::B,
        Decision::Counter,
        Some(counter),
    )
    .unwrap();
    assert_eq!(status, NegotiationStatus::Counter);

    let negotiation = state.negotiation(&negotiation_id).unwrap();
    assert!(negotiation.is_open());
    assert_eq!(negotiation.proposal.from, PartnerId::B);
    assert_eq!(negotiation.proposal.to, PartnerId::A);
    assert_eq!(
        state.require_card(&card_id).unwrap().status,
        CardStatus::InNegotiation
    );

    // B already answered; now it is A's turn again.
    let err = respond(&mut state, &negotiation_id, PartnerId::B, Decision::Accept, None)
        .unwrap_err();
    assert!(matches!(err, DomainError::InvalidActor(_)));

    // Accepting the counter hands the cards to its `to` partner.
    respond(&mut state, &negotiation_id, PartnerId::A, Decision::Accept, None).unwrap();
    assert_eq!(
        state.require_card(&card_id).unwrap().holder,
        Some(PartnerId::A)
    );
}

#[test]
fn counter_is_reentrant() {
    let mut state = game_with_held_cards(2, 2);
    let card_id = held_card_id(&state, PartnerId::A);
    let negotiation_id = propose(&mut state, PartnerId::A, PartnerId::B, &[card_id.clone()], "swap").unwrap();

    let counter_once = NegotiationProposal {
        from: PartnerId::B,
        to: PartnerId::A,
        cards: vec![card_id.clone()],
        notes: "counter 1".to_string(),
    };
    respond(
        &mut state,
        &negotiation_id,
        PartnerId::B,
        Decision::Counter,
        Some(counter_once),
    )
    .unwrap();

    let counter_back = NegotiationProposal {
        from: PartnerId::A,
        to: PartnerId::B,
        cards: vec![card_id.clone()],
        notes: "counter 2".to_string(),
    };
    let status = respond(
        &mut state,
        &negotiation_id,
        PartnerId::A,
        Decision::Counter,
        Some(counter_back),
    )
    .unwrap();
    assert_eq!(status, NegotiationStatus::Counter);

    let negotiation = state.negotiation(&negotiation_id).unwrap();
    assert_eq!(negotiation.proposal.to, PartnerId::B);
    assert_eq!(negotiation.history.len(), 3);
}

#[test]
fn second_open_negotiation_for_a_card_conflicts() {
    let mut state = game_with_held_cards(2, 2);
    let card_id = held_card_id(&state, PartnerId::A);

    propose(&mut state, PartnerId::A, PartnerId::B, &[card_id.clone()], "first").unwrap();
    let err = propose(&mut state, PartnerId::B, PartnerId::A, &[card_id], "second").unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_, _)));
}

#[test]
fn resolved_negotiation_frees_its_cards_for_a_new_one() {
    let mut state = game_with_held_cards(2, 2);
    let card_id = held_card_id(&state, PartnerId::A);

    let first = propose(&mut state, PartnerId::A, PartnerId::B, &[card_id.clone()], "first").unwrap();
    respond(&mut state, &first, PartnerId::B, Decision::Reject, None).unwrap();

    // The card is free again once the negotiation is terminal.
    propose(&mut state, PartnerId::A, PartnerId::B, &[card_id], "second").unwrap();
}

#[test]
fn responding_to_a_terminal_negotiation_fails_cleanly() {
    let mut state = game_with_held_cards(2, 2);
    let card_id = held_card_id(&state, PartnerId::A);
    let negotiation_id = propose(&mut state, PartnerId::A, PartnerId::B, &[card_id], "swap").unwrap();
    respond(&mut state, &negotiation_id, PartnerId::B, Decision::Accept, None).unwrap();

    let before = state.clone();
    for (actor, decision) in [
        (PartnerId::B, Decision::Accept),
        (PartnerId::B, Decision::Reject),
        (PartnerId::A, Decision::Accept),
    ] {
        let err = respond(&mut state, &negotiation_id, actor, decision, None).unwrap_err();
        assert!(matches!(err, DomainError::AlreadyResolved(_)));
        assert_eq!(state, before);
    }
}

#[test]
fn unknown_ids_are_not_found() {
    let mut state = game_with_held_cards(1, 1);
    let err = respond(&mut state, "missing", PartnerId::A, Decision::Accept, None).unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_, _)));

    let err = propose(&mut state, PartnerId::A, PartnerId::B, &["missing".to_string()], "x").unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_, _)));
}

#[test]
fn counter_requires_a_matching_proposal() {
    let mut state = game_with_held_cards(2, 2);
    let card_id = held_card_id(&state, PartnerId::A);
    let other_card = held_card_id(&state, PartnerId::B);
    let negotiation_id = propose(&mut state, PartnerId::A, PartnerId::B, &[card_id.clone()], "swap").unwrap();

    let err = respond(&mut state, &negotiation_id, PartnerId::B, Decision::Counter, None)
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_, _)));

    let mismatched = NegotiationProposal {
        from: PartnerId::B,
        to: PartnerId::A,
        cards: vec![other_card],
        notes: String::new(),
    };
    let err = respond(
        &mut state,
        &negotiation_id,
        PartnerId::B,
        Decision::Counter,
        Some(mismatched),
    )
    .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_, _)));
}

#[test]
fn empty_card_set_is_rejected() {
    let mut state = game_with_held_cards(1, 1);
    let err = propose(&mut state, PartnerId::A, PartnerId::B, &[], "nothing").unwrap_err();
    assert!(matches!(err, DomainError::Validation(_, _)));
}

#[test]
fn self_targeted_proposal_is_rejected() {
    let mut state = game_with_held_cards(1, 1);
    let card_id = held_card_id(&state, PartnerId::A);
    let err = propose(&mut state, PartnerId::A, PartnerId::A, &[card_id], "keep it").unwrap_err();
    assert!(matches!(err, DomainError::Validation(_, _)));
    assert!(state.negotiations.is_empty());
}
