use anyhow::*;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::convert::TryFrom;

lazy_static! {
    static ref ANSWER_CODE_REGEX: Regex = Regex::new("^[a-zA-Z0-9]+$").unwrap();
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawQuestion {
    pub id: String,
    pub prompt: String,
    pub options: String,
    pub correct_code: String,
    pub explanation: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_code: String,
    pub explanation: String,
}

impl Question {
    /// Each option embeds its answer code ahead of the human-readable label,
    /// so grading is a prefix match against the code, not string equality.
    pub fn is_answer_correct(&self, submitted_option: &str) -> bool {
        submitted_option.starts_with(&self.correct_code)
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = Error;

    fn try_from(raw_question: RawQuestion) -> Result<Self> {
        let correct_code = raw_question.correct_code.trim().to_owned();
        if !ANSWER_CODE_REGEX.is_match(&correct_code) {
            bail!(
                "Question {} has an invalid answer code: {:?}",
                raw_question.id,
                raw_question.correct_code
            );
        }

        let options: Vec<String> = raw_question
            .options
            .split('|')
            .map(|option| option.trim().to_owned())
            .filter(|option| !option.is_empty())
            .collect();
        if options.is_empty() {
            bail!("Question {} has no options", raw_question.id);
        }
        if !options.iter().any(|option| option.starts_with(&correct_code)) {
            bail!(
                "Question {} has no option carrying its answer code {}",
                raw_question.id,
                correct_code
            );
        }

        Ok(Question {
            id: raw_question.id,
            prompt: raw_question.prompt,
            options,
            correct_code,
            explanation: raw_question.explanation,
        })
    }
}
