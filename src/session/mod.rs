use anyhow::*;
use log::debug;
use std::collections::HashSet;
use std::time::Instant;

pub mod bank;
pub mod report;
mod retry;


use self::bank::{Question, QuestionBank};
use self::report::SessionSummary;
use self::retry::RetryQueue;

#[derive(Clone, Copy, Debug)]
enum Phase {
    Primary,
    Retry,
    Done,
}

#[derive(Clone, Debug)]
pub struct AnswerFeedback {
    pub correct: bool,
    pub explanation: String,
    pub session_done: bool,
}

/// One learner's run through a question bank.
///
/// Questions are asked in bank order first. Misses are deferred to a retry
/// pass that drains the retry queue in FIFO order, re-appending questions
/// missed again, until every question has been answered correctly once.
pub struct QuizSession {
    bank: QuestionBank,
    phase: Phase,
    cursor: usize,
    retries: RetryQueue,
    correct_count: usize,
    answered_correctly: HashSet<String>,
    started_at: Instant,
    finished_at: Option<Instant>,
}

impl QuizSession {
    pub fn new(bank: QuestionBank) -> QuizSession {
        let mut session = QuizSession {
            bank,
            phase: Phase::Primary,
            cursor: 0,
            retries: RetryQueue::new(),
            correct_count: 0,
            answered_correctly: HashSet::new(),
            started_at: Instant::now(),
            finished_at: None,
        };
        if session.bank.is_empty() {
            session.set_phase(Phase::Done);
        }
        session
    }

    pub fn is_over(&self) -> bool {
        match self.phase {
            Phase::Done => true,
            _ => false,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.phase {
            Phase::Primary => self.bank.get(self.cursor),
            Phase::Retry => self.retries.front(),
            Phase::Done => None,
        }
    }

    pub fn submit_answer(&mut self, selected_option: &str) -> Result<AnswerFeedback> {
        let question = match self.phase {
            Phase::Primary => self.bank.get(self.cursor).cloned(),
            Phase::Retry => self.retries.dequeue_front(),
            Phase::Done => return Err(anyhow!("The session is already complete")),
        }
        .context("No question is pending")?;

        let correct = question.is_answer_correct(selected_option);
        if correct {
            self.record_correct(&question.id);
        } else {
            self.retries.enqueue(question.clone());
        }

        if let Phase::Primary = self.phase {
            self.cursor += 1;
        }
        if self.cursor >= self.bank.len() {
            if self.retries.is_empty() {
                self.set_phase(Phase::Done);
            } else if let Phase::Primary = self.phase {
                self.set_phase(Phase::Retry);
            }
        }

        Ok(AnswerFeedback {
            correct,
            explanation: question.explanation,
            session_done: self.is_over(),
        })
    }

    pub fn summary(&self) -> Result<SessionSummary> {
        report::finalize(self)
    }

    // A question answered correctly after several retries still counts once
    fn record_correct(&mut self, question_id: &str) {
        if self.answered_correctly.insert(question_id.to_owned()) {
            self.correct_count += 1;
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        debug!("Entering session phase: {:?}", phase);
        if let Phase::Done = phase {
            if self.finished_at.is_none() {
                self.finished_at = Some(Instant::now());
            }
        }
        self.phase = phase;
    }
}
