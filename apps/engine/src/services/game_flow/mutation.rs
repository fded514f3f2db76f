//! The single mutation path every state change goes through.

use tracing::warn;

use crate::domain::game_transition::{derive_game_transitions, GameTransition};
use crate::domain::snapshot::{snapshot, GameSnapshot};
use crate::domain::state::GameState;
use crate::domain::stats::recompute_stats;
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::services::game_flow::{GameSession, SessionInner};

/// Outcome of a committed mutation: the fresh snapshot, the transitions the
/// mutation caused, and the persistence outcome. A store failure never rolls
/// back the in-memory commit; it is surfaced here instead.
#[derive(Debug)]
pub struct GameFlowMutationResult {
    pub snapshot: GameSnapshot,
    pub transitions: Vec<GameTransition>,
    pub store_error: Option<AppError>,
}

impl GameSession {
    /// Apply `mutation` to a clone of the state and commit on success.
    ///
    /// - rejects everything once the session has ended,
    /// - on mutation failure the live state is untouched and the error is
    ///   returned unchanged,
    /// - on success stats are recomputed, transitions derived from the
    ///   before/after edge are merged with the mutation's explicit ones,
    ///   and the result is written through the store (best-effort).
    pub(crate) fn commit<F>(
        &self,
        inner: &mut SessionInner,
        mutation: F,
    ) -> Result<GameFlowMutationResult, AppError>
    where
        F: FnOnce(&mut GameState) -> Result<Vec<GameTransition>, DomainError>,
    {
        inner.state.require_active()?;

        let mut candidate = inner.state.clone();
        let explicit = mutation(&mut candidate)?;

        recompute_stats(&mut candidate);
        candidate.touch();

        let mut transitions = derive_game_transitions(&inner.state, &candidate);
        transitions.extend(explicit);

        inner.state = candidate;

        let store_error = self.store.save_game(&inner.state).err();
        if let Some(err) = &store_error {
            warn!(game_id = %inner.state.id, error = %err, "session persisted in memory only");
        }

        Ok(GameFlowMutationResult {
            snapshot: snapshot(&inner.state),
            transitions,
            store_error,
        })
    }

    /// Lock-and-commit convenience for services outside this module.
    pub(crate) fn mutate<F>(&self, mutation: F) -> Result<GameFlowMutationResult, AppError>
    where
        F: FnOnce(&mut GameState) -> Result<Vec<GameTransition>, DomainError>,
    {
        let mut inner = self.inner.lock();
        self.commit(&mut inner, mutation)
    }
}
