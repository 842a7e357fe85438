use anyhow::{bail, Context, Result};
use itertools::Itertools;
use log::{info, warn};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::Path;

mod session;

use crate::session::bank::QuestionBank;
use crate::session::QuizSession;

fn main() {
    pretty_env_logger::init();
    if let Err(error) = run() {
        eprintln!("Error: {:#}", error);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let path = env::args()
        .nth(1)
        .context("Usage: drillmaster <questions.csv>")?;
    let bank = load_bank(Path::new(&path));
    let mut session = QuizSession::new(bank);

    if session.is_over() {
        println!("No quiz available.");
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    while let Some(question) = session.current_question().cloned() {
        println!();
        println!("{}", question.prompt);
        println!(
            "{}",
            question
                .options
                .iter()
                .enumerate()
                .map(|(index, option)| format!("  {}. {}", index + 1, option))
                .join("\n")
        );

        let selected_option = match read_selection(&mut input, question.options.len())? {
            Some(index) => question.options[index].clone(),
            None => continue,
        };

        let feedback = session.submit_answer(&selected_option)?;
        if feedback.correct {
            println!("Correct!");
        } else {
            println!("Incorrect, this question will come back later.");
        }
        if !feedback.explanation.is_empty() {
            println!("{}", feedback.explanation);
        }
    }

    let summary = session.summary()?;
    println!();
    println!(
        "Score: {}/{} in {} seconds",
        summary.correct_count,
        summary.total_questions,
        summary.duration_seconds()
    );
    Ok(())
}

fn load_bank(path: &Path) -> QuestionBank {
    match QuestionBank::open(path) {
        Ok(bank) => {
            info!("Loaded {} questions from {}", bank.len(), path.display());
            bank
        }
        Err(error) => {
            warn!(
                "Could not load question bank from {}: {:#}",
                path.display(),
                error
            );
            QuestionBank::empty()
        }
    }
}

fn read_selection(input: &mut impl BufRead, num_options: usize) -> Result<Option<usize>> {
    print!("> ");
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Input ended before the quiz was complete");
    }
    match line.trim().parse::<usize>() {
        Ok(choice) if choice >= 1 && choice <= num_options => Ok(Some(choice - 1)),
        _ => {
            println!("Please enter a number between 1 and {}.", num_options);
            Ok(None)
        }
    }
}
