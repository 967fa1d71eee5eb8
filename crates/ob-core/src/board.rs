//! # Board
//!
//! Registry and scoping boundary for one Q&A session. Users act through the
//! board: every vote and acceptance is validated against the object graph
//! first and only then applied, so a rejected action leaves no trace.
//!
//! Reputation is never stored. It is folded from the vote sets and accepted
//! flags through the board's [`ReputationRules`], which makes repeated votes
//! and superseded acceptances impossible to double count.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{AppError, Result};
use crate::models::{Answer, AnswerId, PostId, PostKind, Question, QuestionId, User, UserId, Vote};
use crate::rules::ReputationRules;
use crate::traits::Votable;

#[derive(Debug, Clone, Serialize)]
pub struct Board {
    title: String,
    rules: ReputationRules,
    users: Vec<User>,
    questions: Vec<Question>,
}

/// One row of [`Board::standings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub user: UserId,
    pub name: String,
    pub reputation: i64,
}

impl Board {
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_rules(title, ReputationRules::default())
    }

    pub fn with_rules(title: impl Into<String>, rules: ReputationRules) -> Self {
        Self {
            title: title.into(),
            rules,
            users: Vec::new(),
            questions: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn rules(&self) -> &ReputationRules {
        &self.rules
    }

    // User Operations

    /// Creates a member of this board. Names need not be unique; the
    /// returned id is the identity.
    pub fn register_user(&mut self, name: impl Into<String>) -> UserId {
        let user = User {
            id: UserId::mint(),
            name: name.into(),
            joined_at: chrono::Utc::now(),
        };
        let id = user.id;
        debug!(board = %self.title, user = %id, name = %user.name, "user registered");
        self.users.push(user);
        id
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    // Post Operations

    /// Registers a question. Registering the same question twice is a no-op.
    pub fn add_question(&mut self, question: Question) -> QuestionId {
        let id = question.id;
        if self.question(id).is_none() {
            debug!(board = %self.title, question = %id, author = %question.author, "question added");
            self.questions.push(question);
        }
        id
    }

    /// Appends an answer to its parent question, unless it is already there.
    ///
    /// # Errors
    /// `NotFound` if the parent question is not registered on this board.
    pub fn add_answer(&mut self, answer: Answer) -> Result<AnswerId> {
        let id = answer.id;
        let question = self
            .question_mut(answer.question)
            .ok_or_else(|| not_found(PostId::Question(answer.question)))?;
        if question.answers.iter().all(|a| a.id != id) {
            debug!(question = %question.id, answer = %id, author = %answer.author, "answer added");
            question.answers.push(answer);
        }
        Ok(id)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Every answer on the board, grouped by question in question order.
    pub fn answers(&self) -> impl Iterator<Item = &Answer> {
        self.questions.iter().flat_map(|q| q.answers.iter())
    }

    pub fn answer(&self, id: AnswerId) -> Option<&Answer> {
        self.answers().find(|a| a.id == id)
    }

    // Voting

    /// Sets `voter`'s stance on `post` to up. Already up-voted is a no-op.
    ///
    /// # Errors
    /// `Voting` when `voter` wrote the post, `NotFound` when `voter` or `post`
    /// is not registered here.
    pub fn up_vote(&mut self, voter: UserId, post: impl Into<PostId>) -> Result<()> {
        self.set_stance(voter, post.into(), Some(Vote::Up))
    }

    /// Sets `voter`'s stance on `post` to down. Already down-voted is a no-op.
    ///
    /// # Errors
    /// `Voting` when `voter` wrote the post, `NotFound` when `voter` or `post`
    /// is not registered here.
    pub fn down_vote(&mut self, voter: UserId, post: impl Into<PostId>) -> Result<()> {
        self.set_stance(voter, post.into(), Some(Vote::Down))
    }

    /// Clears `voter`'s stance on `post`, taking back whatever it earned.
    ///
    /// # Errors
    /// Same as [`Board::up_vote`].
    pub fn retract_vote(&mut self, voter: UserId, post: impl Into<PostId>) -> Result<()> {
        self.set_stance(voter, post.into(), None)
    }

    fn set_stance(&mut self, voter: UserId, post: PostId, vote: Option<Vote>) -> Result<()> {
        self.member(voter)?;
        let target = self.post(post)?;
        if target.author() == voter {
            warn!(voter = %voter, post = %post, "self-vote rejected");
            return Err(AppError::Voting {
                voter: self.display_name(voter),
                kind: target.kind(),
            });
        }

        let votes = self.post_mut(post)?.votes_mut();
        let changed = match vote {
            Some(vote) => votes.cast(voter, vote),
            None => votes.retract(voter),
        };
        debug!(voter = %voter, post = %post, stance = ?vote, changed, "stance recorded");
        Ok(())
    }

    // Acceptance

    /// Marks `answer` as the accepted one for its question. Accepting a
    /// different answer later moves the slot, and the bonus with it.
    ///
    /// # Errors
    /// `AnswerAcceptance` unless `acceptor` asked the question,
    /// `NotFound` when `acceptor` or `answer` is not registered here.
    pub fn accept_answer(&mut self, acceptor: UserId, answer: AnswerId) -> Result<()> {
        self.member(acceptor)?;
        let question = self
            .questions
            .iter()
            .find(|q| q.answers.iter().any(|a| a.id == answer))
            .ok_or_else(|| not_found(PostId::Answer(answer)))?;
        if question.author != acceptor {
            warn!(acceptor = %acceptor, answer = %answer, "acceptance by non-questioner rejected");
            return Err(AppError::AnswerAcceptance {
                questioner: self.display_name(question.author),
            });
        }

        let question_id = question.id;
        let question = self
            .question_mut(question_id)
            .ok_or_else(|| not_found(PostId::Question(question_id)))?;
        if question.accepted_answer == Some(answer) {
            debug!(answer = %answer, "answer already accepted");
            return Ok(());
        }

        let superseded = question.accepted_answer.replace(answer);
        for candidate in question.answers.iter_mut() {
            candidate.accepted = candidate.id == answer;
        }
        debug!(question = %question_id, answer = %answer, superseded = ?superseded, "answer accepted");
        Ok(())
    }

    // Reputation

    /// Total points earned by `user` across every post they wrote here.
    /// Zero for users this board has never seen.
    pub fn reputation(&self, user: UserId) -> i64 {
        self.questions
            .iter()
            .map(|q| {
                let asked = if q.author == user { self.rules.score(q) } else { 0 };
                let answered: i64 = q
                    .answers
                    .iter()
                    .filter(|a| a.author == user)
                    .map(|a| self.rules.score(a))
                    .sum();
                asked + answered
            })
            .sum()
    }

    /// All users by reputation, highest first. Ties keep registration order.
    pub fn standings(&self) -> Vec<Standing> {
        let mut rows: Vec<Standing> = self
            .users
            .iter()
            .map(|u| Standing {
                user: u.id,
                name: u.name.clone(),
                reputation: self.reputation(u.id),
            })
            .collect();
        rows.sort_by(|a, b| b.reputation.cmp(&a.reputation));
        rows
    }

    fn question_mut(&mut self, id: QuestionId) -> Option<&mut Question> {
        self.questions.iter_mut().find(|q| q.id == id)
    }

    fn post(&self, id: PostId) -> Result<&dyn Votable> {
        let found = match id {
            PostId::Question(qid) => self.question(qid).map(|q| q as &dyn Votable),
            PostId::Answer(aid) => self.answer(aid).map(|a| a as &dyn Votable),
        };
        found.ok_or_else(|| not_found(id))
    }

    fn post_mut(&mut self, id: PostId) -> Result<&mut dyn Votable> {
        let found = match id {
            PostId::Question(qid) => self.question_mut(qid).map(|q| q as &mut dyn Votable),
            PostId::Answer(aid) => self
                .questions
                .iter_mut()
                .find_map(|q| q.answer_mut(aid))
                .map(|a| a as &mut dyn Votable),
        };
        found.ok_or_else(|| not_found(id))
    }

    fn member(&self, id: UserId) -> Result<&User> {
        self.user(id).ok_or_else(|| {
            warn!(board = %self.title, user = %id, "action by non-member rejected");
            AppError::NotFound("User".to_string(), id.to_string())
        })
    }

    fn display_name(&self, id: UserId) -> String {
        self.user(id)
            .map(|u| u.name.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

fn not_found(id: PostId) -> AppError {
    let kind = match id.kind() {
        PostKind::Question => "Question",
        PostKind::Answer => "Answer",
    };
    AppError::NotFound(kind.to_string(), id.to_string())
}
