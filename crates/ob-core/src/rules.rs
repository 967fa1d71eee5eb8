//! # Reputation Rule Table
//!
//! Maps (action, post kind) to the point delta credited to the post's author.
//! The table is pure; `Board` folds it over the vote sets to derive every
//! user's reputation.

use serde::{Deserialize, Serialize};

use crate::models::PostKind;
use crate::traits::Votable;

/// Something that happened to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    UpVote,
    DownVote,
    Accept,
}

/// Point deltas per action. `Default` is the standard table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReputationRules {
    pub question_up_vote: i64,
    pub answer_up_vote: i64,
    pub question_down_vote: i64,
    pub answer_down_vote: i64,
    pub answer_accepted: i64,
}

impl Default for ReputationRules {
    fn default() -> Self {
        Self {
            question_up_vote: 5,
            answer_up_vote: 10,
            question_down_vote: -1,
            answer_down_vote: -1,
            answer_accepted: 15,
        }
    }
}

impl ReputationRules {
    /// Delta for `action` on a post of `kind`. `None` for combinations the
    /// table has no row for (accepting a question).
    pub fn delta(&self, action: Action, kind: PostKind) -> Option<i64> {
        match (action, kind) {
            (Action::UpVote, PostKind::Question) => Some(self.question_up_vote),
            (Action::UpVote, PostKind::Answer) => Some(self.answer_up_vote),
            (Action::DownVote, PostKind::Question) => Some(self.question_down_vote),
            (Action::DownVote, PostKind::Answer) => Some(self.answer_down_vote),
            (Action::Accept, PostKind::Answer) => Some(self.answer_accepted),
            (Action::Accept, PostKind::Question) => None,
        }
    }

    /// Everything a single post contributes to its author's reputation.
    pub fn score<P: Votable + ?Sized>(&self, post: &P) -> i64 {
        let kind = post.kind();
        let votes = post.votes();
        let mut total = self.delta(Action::UpVote, kind).unwrap_or(0) * votes.up_votes() as i64
            + self.delta(Action::DownVote, kind).unwrap_or(0) * votes.down_votes() as i64;
        if post.is_accepted() {
            total += self.delta(Action::Accept, kind).unwrap_or(0);
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_matches_the_published_rules() {
        let rules = ReputationRules::default();
        assert_eq!(rules.delta(Action::UpVote, PostKind::Question), Some(5));
        assert_eq!(rules.delta(Action::UpVote, PostKind::Answer), Some(10));
        assert_eq!(rules.delta(Action::DownVote, PostKind::Question), Some(-1));
        assert_eq!(rules.delta(Action::DownVote, PostKind::Answer), Some(-1));
        assert_eq!(rules.delta(Action::Accept, PostKind::Answer), Some(15));
        assert_eq!(rules.delta(Action::Accept, PostKind::Question), None);
    }

    #[test]
    fn partial_overrides_keep_remaining_defaults() {
        let rules: ReputationRules =
            serde_json::from_value(serde_json::json!({ "answer_accepted": 20 })).unwrap();
        assert_eq!(rules.answer_accepted, 20);
        assert_eq!(rules.question_up_vote, 5);
    }
}
