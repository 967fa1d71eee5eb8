//! # Domain Models
//!
//! These structs represent the core entities of Overboard.
//! We use UUID v7 for time-ordered, globally unique identification, so a
//! user is referenced by its `UserId` everywhere it appears (author, vote
//! sets) and is never copied.

use std::collections::BTreeSet;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub(crate) fn mint() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

entity_id!(
    /// Handle of a user registered on a board.
    UserId
);
entity_id!(
    /// Handle of a question.
    QuestionId
);
entity_id!(
    /// Handle of an answer.
    AnswerId
);

/// The two kinds of post that can be voted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostKind {
    Question,
    Answer,
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostKind::Question => f.write_str("question"),
            PostKind::Answer => f.write_str("answer"),
        }
    }
}

/// A reference to either kind of post. Every voting action takes one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum PostId {
    Question(QuestionId),
    Answer(AnswerId),
}

impl PostId {
    pub fn kind(&self) -> PostKind {
        match self {
            PostId::Question(_) => PostKind::Question,
            PostId::Answer(_) => PostKind::Answer,
        }
    }
}

impl From<QuestionId> for PostId {
    fn from(id: QuestionId) -> Self {
        PostId::Question(id)
    }
}

impl From<AnswerId> for PostId {
    fn from(id: AnswerId) -> Self {
        PostId::Answer(id)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostId::Question(id) => fmt::Display::fmt(id, f),
            PostId::Answer(id) => fmt::Display::fmt(id, f),
        }
    }
}

/// A user's current stance on a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vote {
    Up,
    Down,
}

/// Vote sets shared by every post.
///
/// A user is in at most one of the two sets, so membership is the whole
/// truth about "has this user voted, and how".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VotableState {
    up_voters: BTreeSet<UserId>,
    down_voters: BTreeSet<UserId>,
}

impl VotableState {
    pub fn stance(&self, user: UserId) -> Option<Vote> {
        if self.up_voters.contains(&user) {
            Some(Vote::Up)
        } else if self.down_voters.contains(&user) {
            Some(Vote::Down)
        } else {
            None
        }
    }

    pub fn up_votes(&self) -> usize {
        self.up_voters.len()
    }

    pub fn down_votes(&self) -> usize {
        self.down_voters.len()
    }

    /// Records `vote` as the user's stance. Returns `false` when the user
    /// already held that stance.
    pub(crate) fn cast(&mut self, user: UserId, vote: Vote) -> bool {
        let (into, out_of) = match vote {
            Vote::Up => (&mut self.up_voters, &mut self.down_voters),
            Vote::Down => (&mut self.down_voters, &mut self.up_voters),
        };
        out_of.remove(&user);
        into.insert(user)
    }

    /// Clears the user's stance. Returns `false` when there was none.
    pub(crate) fn retract(&mut self, user: UserId) -> bool {
        self.up_voters.remove(&user) | self.down_voters.remove(&user)
    }
}

/// A member of a single board.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub(crate) id: UserId,
    pub(crate) name: String,
    pub(crate) joined_at: DateTime<Utc>,
}

impl User {
    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn joined_at(&self) -> DateTime<Utc> {
        self.joined_at
    }
}

/// A question asked on a board. Owns its answers in insertion order.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub(crate) id: QuestionId,
    pub(crate) author: UserId,
    pub(crate) text: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) votes: VotableState,
    pub(crate) answers: Vec<Answer>,
    pub(crate) accepted_answer: Option<AnswerId>,
}

impl Question {
    pub fn new(author: UserId, text: impl Into<String>) -> Self {
        Self {
            id: QuestionId::mint(),
            author,
            text: text.into(),
            created_at: Utc::now(),
            votes: VotableState::default(),
            answers: Vec::new(),
            accepted_answer: None,
        }
    }

    pub fn id(&self) -> QuestionId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn accepted_answer(&self) -> Option<AnswerId> {
        self.accepted_answer
    }

    pub(crate) fn answer_mut(&mut self, id: AnswerId) -> Option<&mut Answer> {
        self.answers.iter_mut().find(|a| a.id == id)
    }
}

/// An answer to exactly one question.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub(crate) id: AnswerId,
    pub(crate) question: QuestionId,
    pub(crate) author: UserId,
    pub(crate) text: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) votes: VotableState,
    pub(crate) accepted: bool,
}

impl Answer {
    pub fn new(question: QuestionId, author: UserId, text: impl Into<String>) -> Self {
        Self {
            id: AnswerId::mint(),
            question,
            author,
            text: text.into(),
            created_at: Utc::now(),
            votes: VotableState::default(),
            accepted: false,
        }
    }

    pub fn id(&self) -> AnswerId {
        self.id
    }

    pub fn question(&self) -> QuestionId {
        self.question
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }
}
