#![allow(dead_code)]

pub mod session;
pub mod stores;

pub use session::{held_state, pool_card, pool_state, session_over, session_with_pool};
pub use stores::FailingStore;
