//! Property-based tests for the deal engine.

use std::collections::BTreeMap;

use proptest::prelude::*;

use crate::domain::card::{Card, Category};
use crate::domain::dealing::deal;
use crate::domain::partner::PartnerId;
use crate::domain::rules::{category_cap, GameRules};
use crate::domain::state::DealMode;
use crate::domain::test_gens;
use crate::domain::test_state_helpers::partner_pair;

const ALL_MODES: [DealMode; 5] = [
    DealMode::Random,
    DealMode::Weighted,
    DealMode::Draft,
    DealMode::Auction,
    DealMode::Quick,
];

fn refs(cards: &[Card]) -> Vec<&Card> {
    cards.iter().collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every mode assigns every pool card to one of the two partners.
    #[test]
    fn prop_every_mode_assigns_the_whole_pool(
        cards in test_gens::pool(24),
        seed in any::<u64>(),
    ) {
        let partners = partner_pair();
        let rules = GameRules::default();
        for mode in ALL_MODES {
            let assignment = deal(&refs(&cards), &partners, mode, &rules, seed).unwrap();
            prop_assert_eq!(assignment.len(), cards.len(), "mode {:?}", mode);
            for card in &cards {
                prop_assert!(assignment.contains_key(&card.id), "mode {:?}", mode);
            }
        }
    }

    /// Random mode keeps partner counts within one of each other.
    #[test]
    fn prop_random_counts_differ_by_at_most_one(
        cards in test_gens::pool(40),
        seed in any::<u64>(),
    ) {
        let partners = partner_pair();
        let rules = GameRules {
            min_cards_per_partner: 0,
            ..GameRules::default()
        };
        let assignment = deal(&refs(&cards), &partners, DealMode::Random, &rules, seed).unwrap();
        let count_a = assignment.values().filter(|p| **p == PartnerId::A).count();
        let count_b = assignment.len() - count_a;
        prop_assert!(count_a.abs_diff(count_b) <= 1, "{} vs {}", count_a, count_b);
    }

    /// Fixed seed, fixed pool: identical assignment, for every mode.
    #[test]
    fn prop_deal_is_deterministic(
        cards in test_gens::pool(16),
        seed in any::<u64>(),
    ) {
        let partners = partner_pair();
        let rules = GameRules::default();
        for mode in ALL_MODES {
            let first = deal(&refs(&cards), &partners, mode, &rules, seed).unwrap();
            let second = deal(&refs(&cards), &partners, mode, &rules, seed).unwrap();
            prop_assert_eq!(first, second, "mode {:?}", mode);
        }
    }

    /// Draft keeps committed minutes within one card's worth of each other
    /// for fresh partners: the lighter partner always picks next.
    #[test]
    fn prop_draft_balances_time_commitment(
        cards in test_gens::non_empty_pool(20),
    ) {
        let partners = partner_pair();
        let rules = GameRules::default();
        let assignment = deal(&refs(&cards), &partners, DealMode::Draft, &rules, 0).unwrap();

        let mut minutes = [0u32; 2];
        let mut max_card = 0u32;
        for card in &cards {
            let partner = assignment[&card.id];
            minutes[partner.index()] += u32::from(card.metadata.time_estimate);
            max_card = max_card.max(u32::from(card.metadata.time_estimate));
        }
        prop_assert!(
            minutes[0].abs_diff(minutes[1]) <= max_card,
            "minutes {:?} with max card {}",
            minutes,
            max_card
        );
    }

    /// With category balance required, no partner exceeds the per-category
    /// cap in any mode.
    #[test]
    fn prop_category_cap_is_respected(
        cards in test_gens::pool(24),
        seed in any::<u64>(),
    ) {
        let partners = partner_pair();
        let rules = GameRules {
            category_balance_required: true,
            ..GameRules::default()
        };
        let mut totals: BTreeMap<Category, usize> = BTreeMap::new();
        for card in &cards {
            *totals.entry(card.category).or_default() += 1;
        }

        for mode in ALL_MODES {
            let assignment = deal(&refs(&cards), &partners, mode, &rules, seed).unwrap();
            let mut held: BTreeMap<(PartnerId, Category), usize> = BTreeMap::new();
            for card in &cards {
                *held.entry((assignment[&card.id], card.category)).or_default() += 1;
            }
            for ((partner, category), count) in held {
                let cap = category_cap(totals[&category]);
                prop_assert!(
                    count <= cap,
                    "mode {:?}: {:?} holds {} of {:?} (cap {})",
                    mode,
                    partner,
                    count,
                    category,
                    cap
                );
            }
        }
    }

    /// An infeasible minimum reports `InsufficientCards` and deals nothing.
    #[test]
    fn prop_infeasible_minimum_never_partially_deals(
        cards in test_gens::pool(6),
        seed in any::<u64>(),
    ) {
        let partners = partner_pair();
        let rules = GameRules {
            min_cards_per_partner: cards.len() as u32 + 1,
            ..GameRules::default()
        };
        for mode in ALL_MODES {
            let result = deal(&refs(&cards), &partners, mode, &rules, seed);
            prop_assert!(result.is_err(), "mode {:?}", mode);
        }
    }
}
