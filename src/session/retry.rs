use std::collections::VecDeque;

use crate::session::bank::Question;

/// Questions answered incorrectly, waiting to be asked again.
///
/// Strictly FIFO: a question that is missed again goes to the back of the
/// queue so it cannot block progress on the rest of the retry pool.
#[derive(Debug, Default)]
pub struct RetryQueue {
    pending: VecDeque<Question>,
}

impl RetryQueue {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn enqueue(&mut self, question: Question) {
        self.pending.push_back(question);
    }

    pub fn dequeue_front(&mut self) -> Option<Question> {
        self.pending.pop_front()
    }

    pub fn front(&self) -> Option<&Question> {
        self.pending.front()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
