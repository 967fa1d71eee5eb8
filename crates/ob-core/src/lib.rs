//! overboard/crates/ob-core/src/lib.rs
//!
//! The reputation rule engine for Overboard: users, questions, answers,
//! voting and acceptance on a single board.

pub mod board;
pub mod error;
pub mod models;
pub mod rules;
pub mod traits;

// Re-exporting for easier access in other crates
pub use board::*;
pub use error::*;
pub use models::*;
pub use rules::*;
pub use traits::*;
