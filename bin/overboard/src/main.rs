//! # Overboard Binary
//!
//! Thin adapter over `ob-core`: loads `.env` and settings, installs logging, replays a
//! short Q&A session and prints the resulting standings as JSON.

use anyhow::Context;
use configs::{LogSettings, Settings};
use ob_core::{Answer, Board, Question};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::load().context("loading settings")?;
    init_tracing(&settings.log);
    tracing::debug!(file = configs::DEFAULT_CONFIG_FILE, "settings loaded");

    let mut board = settings.board();
    tracing::info!(board = %board.title(), rules = ?board.rules(), "board opened");

    replay(&mut board)?;

    let standings = board.standings();
    println!("{}", serde_json::to_string_pretty(&standings)?);
    Ok(())
}

fn init_tracing(log: &LogSettings) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log.filter.as_str().into());
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Ric asks, Craig answers, a stranger weighs in.
fn replay(board: &mut Board) -> anyhow::Result<()> {
    let ric = board.register_user("Ric");
    let craig = board.register_user("Craig");
    let stranger = board.register_user("Mr. Unknown");

    let question = board.add_question(Question::new(
        ric,
        "Where can I learn more about mocking frameworks?",
    ));
    let answer = board.add_answer(Answer::new(question, craig, "Reviewing the course notes!"))?;

    board.accept_answer(ric, answer)?;
    board.up_vote(craig, question)?;
    board.up_vote(ric, answer)?;
    board.down_vote(stranger, question)?;

    // Both rejections are expected; they must leave the standings untouched.
    if let Err(err) = board.up_vote(craig, answer) {
        tracing::info!(%err, "self-vote refused");
    }
    if let Err(err) = board.accept_answer(stranger, answer) {
        tracing::info!(%err, "acceptance refused");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replay_ends_with_the_reference_standings() {
        let mut board = Settings::default().board();
        replay(&mut board).unwrap();

        let standings: Vec<_> = board
            .standings()
            .into_iter()
            .map(|s| (s.name, s.reputation))
            .collect();
        assert_eq!(
            standings,
            [
                ("Craig".to_string(), 25),
                ("Ric".to_string(), 4),
                ("Mr. Unknown".to_string(), 0),
            ]
        );
    }
}
