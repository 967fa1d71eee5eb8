//! # Core Traits
//!
//! The capability shared by questions and answers.

use crate::models::{Answer, PostKind, Question, UserId, VotableState};

/// Anything users can vote on.
pub trait Votable {
    fn kind(&self) -> PostKind;

    fn author(&self) -> UserId;

    fn votes(&self) -> &VotableState;

    fn votes_mut(&mut self) -> &mut VotableState;

    /// Whether the post currently holds its question's accepted slot.
    /// Only answers can.
    fn is_accepted(&self) -> bool {
        false
    }
}

impl Votable for Question {
    fn kind(&self) -> PostKind {
        PostKind::Question
    }

    fn author(&self) -> UserId {
        self.author
    }

    fn votes(&self) -> &VotableState {
        &self.votes
    }

    fn votes_mut(&mut self) -> &mut VotableState {
        &mut self.votes
    }
}

impl Votable for Answer {
    fn kind(&self) -> PostKind {
        PostKind::Answer
    }

    fn author(&self) -> UserId {
        self.author
    }

    fn votes(&self) -> &VotableState {
        &self.votes
    }

    fn votes_mut(&mut self) -> &mut VotableState {
        &mut self.votes
    }

    fn is_accepted(&self) -> bool {
        self.accepted
    }
}
