//! Session lifecycle: construction, ending, reset.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::warn;

use crate::domain::snapshot::snapshot;
use crate::domain::state::GameState;
use crate::domain::stats::recompute_stats;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::repos::store::GameStore;
use crate::services::game_flow::{GameFlowMutationResult, GameSession, SessionInner};

impl GameSession {
    /// Start a session over `state`, writing the initial state through the
    /// store. `seed` fixes dealing for replay/testing; `None` draws one.
    pub fn new(mut state: GameState, store: Arc<dyn GameStore>, seed: Option<u64>) -> Self {
        recompute_stats(&mut state);
        if let Err(err) = store.save_game(&state) {
            warn!(game_id = %state.id, error = %err, "initial session state not persisted");
        }
        Self {
            store,
            seed: seed.unwrap_or_else(rand::random),
            inner: Mutex::new(SessionInner {
                state,
                is_dealing: false,
                deal_no: 0,
                deal_history: Vec::new(),
            }),
        }
    }

    /// Resume the session persisted in `store`.
    pub fn from_store(store: Arc<dyn GameStore>, seed: Option<u64>) -> Result<Self, AppError> {
        let state = store
            .load_game()?
            .ok_or_else(|| AppError::not_found(ErrorCode::GameNotFound, "no persisted session"))?;
        Ok(Self::new(state, store, seed))
    }

    /// End the session. Later mutations fail with `GameEnded`; a second
    /// `end_game` does too.
    pub fn end_game(&self) -> Result<GameFlowMutationResult, AppError> {
        let mut inner = self.inner.lock();
        self.commit(&mut inner, |state| {
            state.is_active = false;
            Ok(Vec::new())
        })
    }

    /// Replace the session wholesale (new deck, fresh rules). Allowed even
    /// after `end_game`.
    pub fn reset(&self, mut state: GameState) -> Result<GameFlowMutationResult, AppError> {
        recompute_stats(&mut state);

        let mut inner = self.inner.lock();
        inner.state = state;
        inner.is_dealing = false;
        inner.deal_no = 0;
        inner.deal_history.clear();

        let store_error = self.store.save_game(&inner.state).err();
        if let Some(err) = &store_error {
            warn!(game_id = %inner.state.id, error = %err, "reset state not persisted");
        }
        Ok(GameFlowMutationResult {
            snapshot: snapshot(&inner.state),
            transitions: Vec::new(),
            store_error,
        })
    }
}
