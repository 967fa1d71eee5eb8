//! # AppError
//!
//! Centralized error handling for the Overboard rule engine.
//! Every variant is raised before any state is touched.

use thiserror::Error;

use crate::models::PostKind;

/// The primary error type for all ob-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    /// A user tried to up-vote, down-vote or retract a vote on their own post
    #[error("{voter} cannot vote on their own {kind}")]
    Voting { voter: String, kind: PostKind },

    /// Someone other than the questioner tried to accept an answer
    #[error("Only {questioner} can accept this answer as it is their question")]
    AnswerAcceptance { questioner: String },

    /// A post handle that does not resolve on this board
    #[error("{0} not found with ID {1}")]
    NotFound(String, String),
}

impl AppError {
    pub fn is_voting(&self) -> bool {
        matches!(self, AppError::Voting { .. })
    }

    pub fn is_answer_acceptance(&self) -> bool {
        matches!(self, AppError::AnswerAcceptance { .. })
    }
}

/// A specialized Result type for Overboard logic.
pub type Result<T> = std::result::Result<T, AppError>;
