//! RNG seed derivation for deterministic dealing.
//!
//! Derives a unique-but-deterministic seed for each deal from the session's
//! base seed, so replaying a session reproduces every assignment.

/// Derive the seed for the `deal_no`-th deal of a session.
///
/// Same session seed + deal number always yields the same seed; consecutive
/// deals never share one.
pub fn derive_deal_seed(game_seed: u64, deal_no: u32) -> u64 {
    // Distinct multiplier keeps deal seeds separated from any future
    // derivation contexts sharing the same base.
    game_seed
        .wrapping_add(u64::from(deal_no).wrapping_mul(1_000_003))
        .wrapping_add(1)
}
