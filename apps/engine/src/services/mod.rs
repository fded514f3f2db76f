//! Service layer: session orchestration plus card and partner operations.

pub mod cards;
pub mod game_flow;
pub mod partners;

pub use cards::{CardService, CardUpdate};
pub use game_flow::{GameFlowMutationResult, GameSession};
pub use partners::PartnerService;
