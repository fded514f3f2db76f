//! Error codes for the Fair Play engine.
//!
//! This module defines all error codes used throughout the crate.
//! Add new codes here; never pass ad-hoc strings as error codes.
//!
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! surfaced to callers alongside a human-readable detail.

use core::fmt;

/// Centralized error codes for the Fair Play engine.
///
/// This enum ensures type safety and prevents the use of ad-hoc error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// General validation error
    ValidationError,
    /// Unrecognized deal mode token
    InvalidDealMode,
    /// Card time estimate outside the accepted range
    InvalidTimeEstimate,
    /// Failed to parse a stored token
    ParseToken,

    // Resource not found
    /// Card not found
    CardNotFound,
    /// Negotiation not found
    NegotiationNotFound,
    /// Game not found
    GameNotFound,
    /// General not found error
    NotFound,

    // Business logic conflicts
    /// Card is already referenced by an open negotiation
    CardUnderNegotiation,
    /// Unassigned pool cannot satisfy the minimum-cards rule
    InsufficientCards,
    /// Actor is not the partner expected to answer
    InvalidActor,
    /// Negotiation already reached a terminal state
    AlreadyResolved,
    /// Session has ended
    GameEnded,
    /// General conflict
    Conflict,

    // Infrastructure
    /// Persistence store failure
    StoreError,
    /// Configuration error
    ConfigError,
    /// Internal error
    Internal,
}

impl ErrorCode {
    /// Canonical SCREAMING_SNAKE_CASE representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidDealMode => "INVALID_DEAL_MODE",
            ErrorCode::InvalidTimeEstimate => "INVALID_TIME_ESTIMATE",
            ErrorCode::ParseToken => "PARSE_TOKEN",
            ErrorCode::CardNotFound => "CARD_NOT_FOUND",
            ErrorCode::NegotiationNotFound => "NEGOTIATION_NOT_FOUND",
            ErrorCode::GameNotFound => "GAME_NOT_FOUND",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::CardUnderNegotiation => "CARD_UNDER_NEGOTIATION",
            ErrorCode::InsufficientCards => "INSUFFICIENT_CARDS",
            ErrorCode::InvalidActor => "INVALID_ACTOR",
            ErrorCode::AlreadyResolved => "ALREADY_RESOLVED",
            ErrorCode::GameEnded => "GAME_ENDED",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::StoreError => "STORE_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
