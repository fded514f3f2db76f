#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod repos;
pub mod services;
pub mod state;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use adapters::{JsonStore, MemoryStore};
pub use config::AppSettings;
pub use domain::{
    Card, CardStatus, Category, DealMode, Decision, GameRules, GameSnapshot, GameState, NewCard,
    Partner, PartnerId,
};
pub use error::AppError;
pub use repos::GameStore;
pub use services::{CardUpdate, GameFlowMutationResult, GameSession};
pub use state::app_state::AppState;

// Prelude for test convenience
pub mod prelude {
    pub use super::adapters::*;
    pub use super::config::*;
    pub use super::error::*;
    pub use super::repos::*;
    pub use super::services::*;
    pub use super::state::*;
}

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
