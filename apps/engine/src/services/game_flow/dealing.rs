//! Deal orchestration: derive a seed, run the engine, apply the assignment
//! transactionally.

use tracing::info;
use ulid::Ulid;

use crate::domain::card::{Card, HistoryAction};
use crate::domain::dealing;
use crate::domain::game_transition::GameTransition;
use crate::domain::seed_derivation::derive_deal_seed;
use crate::domain::state::DealMode;
use crate::error::AppError;
use crate::services::game_flow::{GameFlowMutationResult, GameSession};

impl GameSession {
    /// Deal every currently unassigned card according to `mode`.
    ///
    /// Either every dealt card updates or none: the engine computes the full
    /// assignment before any card is touched, and a failure surfaces with
    /// the state unchanged.
    pub fn start_deal(&self, mode: DealMode) -> Result<GameFlowMutationResult, AppError> {
        let mut inner = self.inner.lock();
        inner.is_dealing = true;

        let seed = derive_deal_seed(self.seed, inner.deal_no);
        let result = self.commit(&mut inner, |state| {
            state.deal_mode = mode;

            let pool: Vec<&Card> = state.unassigned_cards();
            let assignment = dealing::deal(&pool, &state.partners, mode, &state.rules, seed)?;

            let assigned = assignment.len();
            for (card_id, partner) in &assignment {
                let card = state.require_card_mut(card_id)?;
                card.assign_to(*partner, HistoryAction::Assigned, "dealt");
            }
            Ok(vec![GameTransition::DealCompleted { mode, assigned }])
        });

        inner.is_dealing = false;
        if result.is_ok() {
            let deal_id = Ulid::new().to_string();
            info!(deal_id = %deal_id, mode = %mode, deal_no = inner.deal_no, "deal committed");
            inner.deal_no += 1;
            inner.deal_history.push(deal_id);
        }
        result
    }
}
