//! Partner registry operations over the live session.

use crate::domain::partner::{PartnerId, PartnerPreferences, PartnerStats, PartnerTheme};
use crate::error::AppError;
use crate::services::game_flow::{GameFlowMutationResult, GameSession};

/// Preference/theme updates and derived-stat reads for the fixed pair.
pub struct PartnerService<'a> {
    session: &'a GameSession,
}

impl GameSession {
    pub fn partners(&self) -> PartnerService<'_> {
        PartnerService { session: self }
    }
}

impl PartnerService<'_> {
    pub fn update_preferences(
        &self,
        partner: PartnerId,
        preferences: PartnerPreferences,
    ) -> Result<GameFlowMutationResult, AppError> {
        self.session.mutate(|state| {
            state.partner_mut(partner).preferences = preferences;
            Ok(Vec::new())
        })
    }

    pub fn update_theme(
        &self,
        partner: PartnerId,
        theme: PartnerTheme,
    ) -> Result<GameFlowMutationResult, AppError> {
        self.session.mutate(|state| {
            state.partner_mut(partner).theme = theme;
            Ok(Vec::new())
        })
    }

    pub fn rename(
        &self,
        partner: PartnerId,
        name: impl Into<String>,
    ) -> Result<GameFlowMutationResult, AppError> {
        let name = name.into();
        self.session.mutate(|state| {
            state.partner_mut(partner).name = name;
            Ok(Vec::new())
        })
    }

    /// Derived stats as of the last committed mutation.
    pub fn stats(&self, partner: PartnerId) -> PartnerStats {
        self.session
            .with_state(|state| state.partner(partner).stats.clone())
    }
}
