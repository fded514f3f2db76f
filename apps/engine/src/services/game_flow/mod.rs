//! Game flow orchestration service - bridges pure domain logic with the
//! persistence port.
//!
//! `GameSession` owns the authoritative [`GameState`] behind a mutex: every
//! mutation is serialized, applied to a clone, and committed
//! all-or-nothing. Consumers only ever see snapshots.

mod dealing;
mod lifecycle;
mod mutation;
mod negotiation_actions;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::state::GameState;
use crate::repos::store::GameStore;

pub use mutation::GameFlowMutationResult;

pub struct GameSession {
    store: Arc<dyn GameStore>,
    /// Base seed; each deal derives its own via `derive_deal_seed`.
    seed: u64,
    inner: Mutex<SessionInner>,
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession").field("seed", &self.seed).finish()
    }
}

struct SessionInner {
    state: GameState,
    /// External progress flag consumers may poll while a deal commits.
    is_dealing: bool,
    /// Number of deals run so far; feeds seed derivation.
    deal_no: u32,
    deal_history: Vec<String>,
}

impl GameSession {
    /// Read-only view of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        snapshot(&self.inner.lock().state)
    }

    pub fn is_dealing(&self) -> bool {
        self.inner.lock().is_dealing
    }

    pub fn deal_history(&self) -> Vec<String> {
        self.inner.lock().deal_history.clone()
    }

    /// Run a closure against the live state. Crate-internal: consumers go
    /// through `snapshot`.
    pub(crate) fn with_state<R>(&self, f: impl FnOnce(&GameState) -> R) -> R {
        f(&self.inner.lock().state)
    }
}
