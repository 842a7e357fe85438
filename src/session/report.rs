use anyhow::*;
use std::time::Duration;

use crate::session::QuizSession;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SessionSummary {
    pub correct_count: usize,
    pub total_questions: usize,
    pub duration: Duration,
}

impl SessionSummary {
    pub fn duration_seconds(&self) -> u64 {
        self.duration.as_secs()
    }
}

/// Snapshots the final score. The completion time is captured when the
/// session reaches its terminal state, so repeated calls return identical
/// summaries.
pub fn finalize(session: &QuizSession) -> Result<SessionSummary> {
    if !session.is_over() {
        return Err(anyhow!("The session is not complete yet"));
    }
    let finished_at = session
        .finished_at
        .context("Completed session has no finish time")?;
    Ok(SessionSummary {
        correct_count: session.correct_count,
        total_questions: session.bank.len(),
        duration: finished_at.duration_since(session.started_at),
    })
}
