use anyhow::*;
use std::collections::HashSet;
use std::convert::TryFrom;
use std::fs::File;
use std::path::Path;

pub mod question;

#[cfg(test)]
mod tests;

pub use question::{Question, RawQuestion};

/// An immutable, ordered set of questions for one sitting.
#[derive(Debug, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    pub fn open(source: &Path) -> Result<QuestionBank> {
        let file = File::open(source)
            .with_context(|| format!("Could not open question bank {}", source.display()))?;
        let mut csv_reader = csv::Reader::from_reader(file);

        let mut questions = Vec::new();
        let mut seen_ids = HashSet::new();
        for record in csv_reader.deserialize() {
            let raw_question: RawQuestion = record?;
            let question = Question::try_from(raw_question)?;
            if !seen_ids.insert(question.id.clone()) {
                bail!("Duplicate question id: {}", question.id);
            }
            questions.push(question);
        }

        Ok(QuestionBank { questions })
    }

    pub fn from_questions(questions: Vec<Question>) -> QuestionBank {
        QuestionBank { questions }
    }

    pub fn empty() -> QuestionBank {
        Default::default()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
