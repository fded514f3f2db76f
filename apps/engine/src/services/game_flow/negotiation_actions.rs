//! Negotiation entry points, delegating to the domain state machine.

use tracing::info;

use crate::domain::game_transition::GameTransition;
use crate::domain::negotiation::{self, Decision, NegotiationProposal};
use crate::domain::partner::PartnerId;
use crate::error::AppError;
use crate::services::game_flow::{GameFlowMutationResult, GameSession};

impl GameSession {
    /// Open a negotiation from `initiator` toward `target` over `card_ids`.
    /// Returns the new negotiation's id with the commit result.
    pub fn request_negotiation(
        &self,
        initiator: PartnerId,
        target: PartnerId,
        card_ids: &[String],
        notes: &str,
    ) -> Result<(String, GameFlowMutationResult), AppError> {
        let mut inner = self.inner.lock();
        let mut negotiation_id = String::new();
        let result = self.commit(&mut inner, |state| {
            let id = negotiation::propose(state, initiator, target, card_ids, notes)?;
            negotiation_id = id.clone();
            Ok(vec![GameTransition::NegotiationOpened {
                negotiation_id: id,
            }])
        })?;
        info!(negotiation_id = %negotiation_id, initiator = %initiator, "negotiation opened");
        Ok((negotiation_id, result))
    }

    /// Answer an open negotiation. Serialization through the session mutex
    /// means a second concurrent answer observes the terminal state and
    /// fails with `AlreadyResolved`.
    pub fn resolve_negotiation(
        &self,
        negotiation_id: &str,
        actor: PartnerId,
        decision: Decision,
        counter_proposal: Option<NegotiationProposal>,
    ) -> Result<GameFlowMutationResult, AppError> {
        let mut inner = self.inner.lock();
        let result = self.commit(&mut inner, |state| {
            let status =
                negotiation::respond(state, negotiation_id, actor, decision, counter_proposal)?;
            info!(negotiation_id = %negotiation_id, actor = %actor, status = ?status, "negotiation answered");
            Ok(Vec::new())
        })?;
        Ok(result)
    }
}
