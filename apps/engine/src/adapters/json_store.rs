//! JSON-file store adapter.
//!
//! Persists the session as a single export envelope on disk, the same shape
//! the export/import flows exchange:
//! `{ "version": 1, "exported_at": ..., "data": { game, cards, partners, negotiations } }`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::card::Card;
use crate::domain::negotiation::Negotiation;
use crate::domain::partner::Partner;
use crate::domain::state::GameState;
use crate::error::AppError;
use crate::repos::store::GameStore;

pub const EXPORT_VERSION: u32 = 1;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportData {
    pub game: Option<GameState>,
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub partners: Vec<Partner>,
    #[serde(default)]
    pub negotiations: Vec<Negotiation>,
}

/// On-disk envelope. `version` gates future migrations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportEnvelope {
    pub version: u32,
    pub exported_at: OffsetDateTime,
    pub data: ExportData,
}

impl ExportEnvelope {
    fn wrap(data: ExportData) -> Self {
        Self {
            version: EXPORT_VERSION,
            exported_at: OffsetDateTime::now_utc(),
            data,
        }
    }
}

pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_envelope(&self) -> Result<ExportData, AppError> {
        if !self.path.exists() {
            return Ok(ExportData::default());
        }
        let raw = fs::read_to_string(&self.path)
            .map_err(|e| AppError::store(format!("read {}: {e}", self.path.display())))?;
        let envelope: ExportEnvelope = serde_json::from_str(&raw)
            .map_err(|e| AppError::store(format!("parse {}: {e}", self.path.display())))?;
        if envelope.version != EXPORT_VERSION {
            return Err(AppError::store(format!(
                "unsupported export version {} in {}",
                envelope.version,
                self.path.display()
            )));
        }
        Ok(envelope.data)
    }

    fn write_envelope(&self, data: ExportData) -> Result<(), AppError> {
        let envelope = ExportEnvelope::wrap(data);
        let raw = serde_json::to_string_pretty(&envelope)
            .map_err(|e| AppError::store(format!("encode session: {e}")))?;
        fs::write(&self.path, raw)
            .map_err(|e| AppError::store(format!("write {}: {e}", self.path.display())))?;
        Ok(())
    }

    fn update<F>(&self, mutate: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut ExportData),
    {
        let mut data = self.read_envelope()?;
        mutate(&mut data);
        self.write_envelope(data)
    }

    /// Export the current envelope for backup flows.
    pub fn export(&self) -> Result<ExportEnvelope, AppError> {
        Ok(ExportEnvelope::wrap(self.read_envelope()?))
    }

    /// Replace the on-disk data with an imported envelope.
    pub fn import(&self, envelope: &ExportEnvelope) -> Result<(), AppError> {
        if envelope.version != EXPORT_VERSION {
            return Err(AppError::store(format!(
                "unsupported export version {}",
                envelope.version
            )));
        }
        self.write_envelope(envelope.data.clone())
    }
}

impl GameStore for JsonStore {
    fn load_game(&self) -> Result<Option<GameState>, AppError> {
        Ok(self.read_envelope()?.game)
    }

    fn save_game(&self, state: &GameState) -> Result<(), AppError> {
        self.update(|data| {
            data.game = Some(state.clone());
            data.cards = state.cards.clone();
            data.partners = state.partners.to_vec();
            data.negotiations = state.negotiations.clone();
        })
    }

    fn get_card(&self, card_id: &str) -> Result<Option<Card>, AppError> {
        Ok(self
            .read_envelope()?
            .cards
            .into_iter()
            .find(|c| c.id == card_id))
    }

    fn upsert_card(&self, card: &Card) -> Result<(), AppError> {
        self.update(|data| {
            data.cards.retain(|c| c.id != card.id);
            data.cards.push(card.clone());
        })
    }

    fn delete_card(&self, card_id: &str) -> Result<(), AppError> {
        self.update(|data| data.cards.retain(|c| c.id != card_id))
    }

    fn all_cards(&self) -> Result<Vec<Card>, AppError> {
        Ok(self.read_envelope()?.cards)
    }

    fn upsert_partner(&self, partner: &Partner) -> Result<(), AppError> {
        self.update(|data| {
            data.partners.retain(|p| p.id != partner.id);
            data.partners.push(partner.clone());
        })
    }

    fn all_partners(&self) -> Result<Vec<Partner>, AppError> {
        Ok(self.read_envelope()?.partners)
    }

    fn get_negotiation(&self, negotiation_id: &str) -> Result<Option<Negotiation>, AppError> {
        Ok(self
            .read_envelope()?
            .negotiations
            .into_iter()
            .find(|n| n.id == negotiation_id))
    }

    fn upsert_negotiation(&self, negotiation: &Negotiation) -> Result<(), AppError> {
        self.update(|data| {
            data.negotiations.retain(|n| n.id != negotiation.id);
            data.negotiations.push(negotiation.clone());
        })
    }

    fn all_negotiations(&self) -> Result<Vec<Negotiation>, AppError> {
        Ok(self.read_envelope()?.negotiations)
    }

    fn clear_all(&self) -> Result<(), AppError> {
        self.write_envelope(ExportData::default())
    }
}
