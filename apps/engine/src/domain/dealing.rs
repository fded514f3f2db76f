//! Deterministic card dealing: the five deal modes and their fairness
//! constraints.
//!
//! `deal` is pure with respect to the injected seed; a fixed seed always
//! reproduces the same assignment, which is what the tests lean on.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::domain::card::{Card, Category};
use crate::domain::partner::{Partner, PartnerId};
use crate::domain::rules::{category_cap, check_deal_feasible, GameRules};
use crate::domain::state::DealMode;
use crate::errors::domain::DomainError;

/// Card id -> partner, for every card of the dealt pool.
pub type Assignment = BTreeMap<String, PartnerId>;

/// Multiplier applied to a partner's weight when a card falls in one of
/// their strong-suit categories.
const STRONG_SUIT_WEIGHT: f64 = 2.0;

/// Compute a holder assignment for `pool` (the unassigned cards, in
/// repository order). Fails with `InsufficientCards` when the pool cannot
/// bring both partners to `rules.min_cards_per_partner`; no partial deal is
/// produced.
pub fn deal(
    pool: &[&Card],
    partners: &[Partner; 2],
    mode: DealMode,
    rules: &GameRules,
    seed: u64,
) -> Result<Assignment, DomainError> {
    let current = [
        partners[0].stats.current_cards,
        partners[1].stats.current_cards,
    ];
    check_deal_feasible(rules, current, pool.len())?;

    let mut ctx = DealContext::new(pool, partners, rules);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    match mode {
        DealMode::Random => deal_random(&mut ctx, &mut rng),
        DealMode::Weighted => deal_weighted(&mut ctx, &mut rng),
        DealMode::Draft => deal_draft(&mut ctx),
        DealMode::Auction => deal_auction(&mut ctx),
        DealMode::Quick => deal_quick(&mut ctx),
    }

    Ok(ctx.assigned)
}

/// Running tallies for one deal pass. `assign` is the single entry point so
/// the category-balance override applies uniformly across modes.
struct DealContext<'a> {
    pool: Vec<&'a Card>,
    partners: &'a [Partner; 2],
    rules: &'a GameRules,
    assigned: Assignment,
    /// Cards assigned during this deal.
    dealt: [u32; 2],
    /// Held cards going in, from the partners' derived stats.
    start_counts: [u32; 2],
    /// Minutes committed: starting commitment plus cards assigned here.
    minutes: [u32; 2],
    category_counts: [BTreeMap<Category, usize>; 2],
    category_totals: BTreeMap<Category, usize>,
    /// Position of each card id in id-sorted pool order, for the last-resort
    /// tie-break.
    id_rank: BTreeMap<&'a str, usize>,
}

impl<'a> DealContext<'a> {
    fn new(pool: &[&'a Card], partners: &'a [Partner; 2], rules: &'a GameRules) -> Self {
        let mut category_totals: BTreeMap<Category, usize> = BTreeMap::new();
        for card in pool {
            *category_totals.entry(card.category).or_default() += 1;
        }
        let mut ids: Vec<&str> = pool.iter().map(|c| c.id.as_str()).collect();
        ids.sort_unstable();
        let id_rank = ids.into_iter().enumerate().map(|(i, id)| (id, i)).collect();

        Self {
            pool: pool.to_vec(),
            partners,
            rules,
            assigned: Assignment::new(),
            dealt: [0; 2],
            start_counts: [
                partners[0].stats.current_cards,
                partners[1].stats.current_cards,
            ],
            minutes: [
                partners[0].stats.total_time_commitment,
                partners[1].stats.total_time_commitment,
            ],
            category_counts: [BTreeMap::new(), BTreeMap::new()],
            category_totals,
            id_rank,
        }
    }

    fn total_count(&self, p: PartnerId) -> u32 {
        self.start_counts[p.index()] + self.dealt[p.index()]
    }

    /// Partner holding fewer cards overall; ties go to A.
    fn lighter_by_count(&self) -> PartnerId {
        if self.total_count(PartnerId::B) < self.total_count(PartnerId::A) {
            PartnerId::B
        } else {
            PartnerId::A
        }
    }

    /// Partner with fewer committed minutes; ties fall back to card count,
    /// then to A.
    fn lighter_by_minutes(&self) -> PartnerId {
        match self.minutes[0].cmp(&self.minutes[1]) {
            std::cmp::Ordering::Less => PartnerId::A,
            std::cmp::Ordering::Greater => PartnerId::B,
            std::cmp::Ordering::Equal => self.lighter_by_count(),
        }
    }

    /// Deterministic last-resort tie-break: even id rank goes to A.
    fn by_id_parity(&self, card: &Card) -> PartnerId {
        match self.id_rank.get(card.id.as_str()) {
            Some(rank) if rank % 2 == 1 => PartnerId::B,
            _ => PartnerId::A,
        }
    }

    fn category_count(&self, p: PartnerId, category: Category) -> usize {
        self.category_counts[p.index()]
            .get(&category)
            .copied()
            .unwrap_or(0)
    }

    /// Category balance: no partner may exceed `ceil(total/2) + 1` cards of
    /// one category. A violating candidate moves to the other partner; if
    /// both would violate, the partner with fewer of that category takes it.
    fn respect_category_balance(&self, card: &Card, preferred: PartnerId) -> PartnerId {
        if !self.rules.category_balance_required {
            return preferred;
        }
        let total = self
            .category_totals
            .get(&card.category)
            .copied()
            .unwrap_or(0);
        let cap = category_cap(total);
        if self.category_count(preferred, card.category) + 1 <= cap {
            return preferred;
        }
        let other = preferred.other();
        if self.category_count(other, card.category) + 1 <= cap {
            return other;
        }
        if self.category_count(PartnerId::B, card.category)
            < self.category_count(PartnerId::A, card.category)
        {
            PartnerId::B
        } else {
            PartnerId::A
        }
    }

    fn assign(&mut self, card: &Card, preferred: PartnerId) {
        let partner = self.respect_category_balance(card, preferred);
        self.assigned.insert(card.id.clone(), partner);
        self.dealt[partner.index()] += 1;
        self.minutes[partner.index()] += u32::from(card.metadata.time_estimate);
        *self.category_counts[partner.index()]
            .entry(card.category)
            .or_default() += 1;
    }
}

/// Shuffle, then alternate. Alternation (rather than independent coin flips)
/// is what bounds the count difference at one.
fn deal_random(ctx: &mut DealContext, rng: &mut ChaCha8Rng) {
    let mut order: Vec<usize> = (0..ctx.pool.len()).collect();
    order.shuffle(rng);

    let mut next = ctx.lighter_by_count();
    for i in order {
        let card = ctx.pool[i];
        ctx.assign(card, next);
        next = next.other();
    }
}

/// Per-card probability biased by strong-suit match and inverse current
/// load, normalized over the two partners. Equal weights skip the RNG
/// entirely: fewer held cards wins, then id ordering.
fn deal_weighted(ctx: &mut DealContext, rng: &mut ChaCha8Rng) {
    for i in 0..ctx.pool.len() {
        let card = ctx.pool[i];
        let weight = |p: PartnerId| -> f64 {
            let mut w = 1.0;
            if ctx.partners[p.index()].has_strong_suit(card.category) {
                w *= STRONG_SUIT_WEIGHT;
            }
            w / (1.0 + f64::from(ctx.minutes[p.index()]) / 60.0)
        };
        let (wa, wb) = (weight(PartnerId::A), weight(PartnerId::B));

        let preferred = if wa == wb {
            match ctx.total_count(PartnerId::A).cmp(&ctx.total_count(PartnerId::B)) {
                std::cmp::Ordering::Less => PartnerId::A,
                std::cmp::Ordering::Greater => PartnerId::B,
                std::cmp::Ordering::Equal => ctx.by_id_parity(card),
            }
        } else if rng.random_bool(wa / (wa + wb)) {
            PartnerId::A
        } else {
            PartnerId::B
        };
        ctx.assign(card, preferred);
    }
}

/// Alternating picks: the partner with fewer committed minutes picks next,
/// taking the hardest remaining card in their top strong suit when one
/// exists, else the quickest remaining card.
fn deal_draft(ctx: &mut DealContext) {
    let mut remaining: Vec<&Card> = ctx.pool.clone();
    while !remaining.is_empty() {
        let picker = ctx.lighter_by_minutes();
        let idx = draft_pick(ctx.partners[picker.index()].top_strong_suit(), &remaining);
        let card = remaining.remove(idx);
        ctx.assign(card, picker);
    }
}

fn draft_pick(top_suit: Option<Category>, remaining: &[&Card]) -> usize {
    if let Some(suit) = top_suit {
        let best_in_suit = remaining
            .iter()
            .enumerate()
            .filter(|(_, c)| c.category == suit)
            .max_by(|(_, a), (_, b)| {
                a.metadata
                    .difficulty
                    .cmp(&b.metadata.difficulty)
                    // prefer the lower id on equal difficulty, hence reversed
                    .then_with(|| b.id.cmp(&a.id))
            })
            .map(|(i, _)| i);
        if let Some(i) = best_in_suit {
            return i;
        }
    }
    remaining
        .iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            a.metadata
                .time_estimate
                .cmp(&b.metadata.time_estimate)
                .then_with(|| a.id.cmp(&b.id))
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// One pass over the pool sorted by difficulty descending. Both partners
/// start with half the pool's total minutes as budget; the partner with more
/// budget left wins a contested card and pays its time estimate. A partner
/// whose budget hits zero sits out until the pass ends.
fn deal_auction(ctx: &mut DealContext) {
    let mut order: Vec<&Card> = ctx.pool.clone();
    order.sort_by(|a, b| {
        b.metadata
            .difficulty
            .cmp(&a.metadata.difficulty)
            .then_with(|| b.metadata.time_estimate.cmp(&a.metadata.time_estimate))
            .then_with(|| a.id.cmp(&b.id))
    });

    let total: u32 = order
        .iter()
        .map(|c| u32::from(c.metadata.time_estimate))
        .sum();
    let mut budgets: [u32; 2] = [total.div_ceil(2); 2];

    for card in order {
        let winner = match (budgets[0] > 0, budgets[1] > 0) {
            (true, false) => PartnerId::A,
            (false, true) => PartnerId::B,
            (false, false) => ctx.lighter_by_count(),
            (true, true) => match budgets[0].cmp(&budgets[1]) {
                std::cmp::Ordering::Greater => PartnerId::A,
                std::cmp::Ordering::Less => PartnerId::B,
                std::cmp::Ordering::Equal => ctx.lighter_by_count(),
            },
        };
        budgets[winner.index()] =
            budgets[winner.index()].saturating_sub(u32::from(card.metadata.time_estimate));
        ctx.assign(card, winner);
    }
}

/// Index parity split: even pool index to A, odd to B. No weighting, for
/// instant low-ceremony dealing.
fn deal_quick(ctx: &mut DealContext) {
    for i in 0..ctx.pool.len() {
        let card = ctx.pool[i];
        let preferred = if i % 2 == 0 {
            PartnerId::A
        } else {
            PartnerId::B
        };
        ctx.assign(card, preferred);
    }
}
