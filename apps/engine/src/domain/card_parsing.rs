//! Token parsing for stored/configured enum values (e.g., "daily-grind",
//! "in-negotiation", "weighted").

use std::fmt;
use std::str::FromStr;

use super::card::{Category, CardStatus, Frequency, HistoryAction};
use super::partner::PartnerId;
use super::state::DealMode;
use crate::errors::domain::{DomainError, ValidationKind};

fn parse_error(what: &str, token: &str) -> DomainError {
    DomainError::validation(
        ValidationKind::ParseToken,
        format!("Invalid {what}: {token}"),
    )
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily-grind" => Ok(Category::DailyGrind),
            "kids" => Ok(Category::Kids),
            "home" => Ok(Category::Home),
            "magic" => Ok(Category::Magic),
            "wild" => Ok(Category::Wild),
            "custom" => Ok(Category::Custom),
            _ => Err(parse_error("category", s)),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Category::DailyGrind => "daily-grind",
            Category::Kids => "kids",
            Category::Home => "home",
            Category::Magic => "magic",
            Category::Wild => "wild",
            Category::Custom => "custom",
        };
        f.write_str(token)
    }
}

impl FromStr for CardStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unassigned" => Ok(CardStatus::Unassigned),
            "held" => Ok(CardStatus::Held),
            "in-negotiation" => Ok(CardStatus::InNegotiation),
            "shared" => Ok(CardStatus::Shared),
            "paused" => Ok(CardStatus::Paused),
            _ => Err(parse_error("card status", s)),
        }
    }
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            CardStatus::Unassigned => "unassigned",
            CardStatus::Held => "held",
            CardStatus::InNegotiation => "in-negotiation",
            CardStatus::Shared => "shared",
            CardStatus::Paused => "paused",
        };
        f.write_str(token)
    }
}

impl FromStr for Frequency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Frequency::Daily),
            "weekly" => Ok(Frequency::Weekly),
            "monthly" => Ok(Frequency::Monthly),
            "occasional" => Ok(Frequency::Occasional),
            _ => Err(parse_error("frequency", s)),
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Frequency::Daily => "daily",
            Frequency::Weekly => "weekly",
            Frequency::Monthly => "monthly",
            Frequency::Occasional => "occasional",
        };
        f.write_str(token)
    }
}

impl FromStr for HistoryAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(HistoryAction::Created),
            "assigned" => Ok(HistoryAction::Assigned),
            "completed" => Ok(HistoryAction::Completed),
            "negotiated" => Ok(HistoryAction::Negotiated),
            "modified" => Ok(HistoryAction::Modified),
            _ => Err(parse_error("history action", s)),
        }
    }
}

impl FromStr for PartnerId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "partner-a" => Ok(PartnerId::A),
            "partner-b" => Ok(PartnerId::B),
            _ => Err(parse_error("partner id", s)),
        }
    }
}

impl fmt::Display for PartnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            PartnerId::A => "partner-a",
            PartnerId::B => "partner-b",
        };
        f.write_str(token)
    }
}

impl FromStr for DealMode {
    type Err = DomainError;

    // An unrecognized mode token is the one place InvalidMode originates:
    // the enum itself is closed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(DealMode::Random),
            "weighted" => Ok(DealMode::Weighted),
            "draft" => Ok(DealMode::Draft),
            "auction" => Ok(DealMode::Auction),
            "quick" => Ok(DealMode::Quick),
            _ => Err(DomainError::invalid_mode(format!(
                "Unrecognized deal mode: {s}"
            ))),
        }
    }
}

impl fmt::Display for DealMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            DealMode::Random => "random",
            DealMode::Weighted => "weighted",
            DealMode::Draft => "draft",
            DealMode::Auction => "auction",
            DealMode::Quick => "quick",
        };
        f.write_str(token)
    }
}
