//! Domain-level error type used across services and adapters.
//!
//! This error type is persistence- and transport-agnostic. Callers that need
//! wire-level codes should convert to `crate::error::AppError` using the
//! provided `From<DomainError>` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation failure kinds (extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Card time estimate outside the accepted range.
    TimeEstimate,
    /// Card holder and status disagree (holder set while unassigned, etc.).
    HolderStatus,
    /// A counter decision arrived without a counter-proposal.
    MissingCounterProposal,
    /// A counter-proposal referenced a different card set.
    CounterCardMismatch,
    /// Failed to parse a stored token (category, status, mode, ...).
    ParseToken,
    Other,
}

/// Domain-level not found entities (minimal set; extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Card,
    Negotiation,
    Game,
    Other(String),
}

/// Domain-level conflict kinds (extend as needed)
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Card is already referenced by an open negotiation.
    CardUnderNegotiation,
    Other(String),
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or business rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
    /// Missing resource in domain terms
    NotFound(NotFoundKind, String),
    /// Unrecognized deal mode token
    InvalidMode(String),
    /// The unassigned pool cannot satisfy `min_cards_per_partner`
    InsufficientCards(String),
    /// Actor is not the partner expected to answer a negotiation
    InvalidActor(String),
    /// Negotiation already reached a terminal state
    AlreadyResolved(String),
    /// Session has ended; no further mutation accepted
    GameEnded(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
            DomainError::NotFound(kind, d) => write!(f, "not found {kind:?}: {d}"),
            DomainError::InvalidMode(d) => write!(f, "invalid deal mode: {d}"),
            DomainError::InsufficientCards(d) => write!(f, "insufficient cards: {d}"),
            DomainError::InvalidActor(d) => write!(f, "invalid actor: {d}"),
            DomainError::AlreadyResolved(d) => write!(f, "already resolved: {d}"),
            DomainError::GameEnded(d) => write!(f, "game ended: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn validation_other(detail: impl Into<String>) -> Self {
        Self::Validation(ValidationKind::Other, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn invalid_mode(detail: impl Into<String>) -> Self {
        Self::InvalidMode(detail.into())
    }
    pub fn insufficient_cards(detail: impl Into<String>) -> Self {
        Self::InsufficientCards(detail.into())
    }
    pub fn invalid_actor(detail: impl Into<String>) -> Self {
        Self::InvalidActor(detail.into())
    }
    pub fn already_resolved(detail: impl Into<String>) -> Self {
        Self::AlreadyResolved(detail.into())
    }
    pub fn game_ended(detail: impl Into<String>) -> Self {
        Self::GameEnded(detail.into())
    }
}
