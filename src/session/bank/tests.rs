use std::convert::TryFrom;

use super::*;

fn raw_question() -> RawQuestion {
    RawQuestion {
        id: "q1".to_owned(),
        prompt: "Which layer retransmits lost segments?".to_owned(),
        options: "A) Transport|B) Network|C) Data link".to_owned(),
        correct_code: "A".to_owned(),
        explanation: "TCP retransmission happens at the transport layer.".to_owned(),
    }
}

#[test]
fn splits_options_on_pipes() {
    let question = Question::try_from(raw_question()).unwrap();
    assert_eq!(
        question.options,
        ["A) Transport", "B) Network", "C) Data link"]
    );
}

#[test]
fn grading_is_a_prefix_match() {
    let question = Question::try_from(raw_question()).unwrap();
    assert!(question.is_answer_correct("A) Transport"));
    assert!(question.is_answer_correct("A"));
    assert!(question.is_answer_correct("Anything starting with the code"));
    assert!(!question.is_answer_correct("B) Network"));
    assert!(!question.is_answer_correct("Transport"));
    assert!(!question.is_answer_correct(""));
}

#[test]
fn trims_answer_code() {
    let mut raw = raw_question();
    raw.correct_code = " A ".to_owned();
    let question = Question::try_from(raw).unwrap();
    assert!(question.is_answer_correct("A) Transport"));
}

#[test]
fn rejects_blank_answer_code() {
    let mut raw = raw_question();
    raw.correct_code = "  ".to_owned();
    assert!(Question::try_from(raw).is_err());
}

#[test]
fn rejects_non_alphanumeric_answer_code() {
    let mut raw = raw_question();
    raw.correct_code = "A)".to_owned();
    assert!(Question::try_from(raw).is_err());
}

#[test]
fn rejects_empty_option_list() {
    let mut raw = raw_question();
    raw.options = " | | ".to_owned();
    assert!(Question::try_from(raw).is_err());
}

#[test]
fn rejects_code_with_no_matching_option() {
    let mut raw = raw_question();
    raw.correct_code = "D".to_owned();
    assert!(Question::try_from(raw).is_err());
}
