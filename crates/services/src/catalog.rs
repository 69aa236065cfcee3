//! Question tables: the bundled self-education test and JSON question packs.

use std::path::Path;

use serde::{Deserialize, Serialize};

use quiz_core::model::{OPTION_COUNT, QUESTION_COUNT, QuestionSet};

use crate::error::CatalogError;

const QUESTIONS: [&str; QUESTION_COUNT] = [
    "How often do you read books that are not required for work or study?",
    "When you meet an unfamiliar word or term, what do you do?",
    "How do you usually spend a free evening?",
    "Have you taken an online course in the last year?",
    "How do you react when you make a mistake at work?",
    "How many foreign languages can you hold a conversation in?",
    "How do you choose what to learn next?",
    "How often do you visit museums, exhibitions or public lectures?",
    "A friend explains something you disagree with. What do you do?",
    "How do you keep up with news in your field?",
    "How much time a week do you spend deliberately learning?",
    "How do you feel about problems without an obvious solution?",
    "Do you take notes on what you read or watch?",
    "How do you learn to use a new device or program?",
    "What do you do when a subject turns out to be harder than expected?",
    "How often do you share what you have learned with others?",
    "Which describes your bookshelf best?",
    "Where do you see yourself in five years?",
];

const OPTIONS: [[&str; OPTION_COUNT]; QUESTION_COUNT] = [
    ["A few times a year", "Almost never", "Every week"],
    ["Look it up right away", "Guess from context", "Ignore it"],
    [
        "Watching whatever is on",
        "Meeting friends",
        "Working on a hobby or a course",
    ],
    ["Yes, and I finished it", "I started but did not finish", "No"],
    [
        "Fix it and move on",
        "Work out why it happened",
        "Try to forget it quickly",
    ],
    ["Two or more", "One", "I am learning my first one"],
    [
        "Whatever my job needs",
        "I keep a list of topics I want to explore",
        "I rarely choose anything",
    ],
    ["Several times a year", "About once a year", "Hardly ever"],
    [
        "Argue my point",
        "Ask for sources and think it over",
        "Change the subject",
    ],
    [
        "Through colleagues",
        "Newsletters, journals and conferences",
        "I do not follow it",
    ],
    ["Less than an hour", "One to three hours", "More than three hours"],
    [
        "They frustrate me",
        "They are the most interesting kind",
        "I ask someone who knows",
    ],
    ["Yes, and I review them", "Sometimes", "Never"],
    [
        "Ask someone to show me",
        "Explore it and read the manual",
        "Watch a video tutorial",
    ],
    [
        "Drop it",
        "Break it into smaller steps",
        "Take a break and come back later",
    ],
    ["Regularly", "Occasionally", "Never"],
    [
        "Mostly fiction",
        "I do not have one",
        "A mix of fiction, science and history",
    ],
    [
        "In a similar role",
        "Having mastered a new skill or field",
        "I do not plan that far ahead",
    ],
];

const WEIGHTS: [[u8; OPTION_COUNT]; QUESTION_COUNT] = [
    [2, 1, 3],
    [3, 2, 1],
    [1, 2, 3],
    [3, 2, 1],
    [2, 3, 1],
    [3, 2, 2],
    [2, 3, 1],
    [3, 2, 1],
    [2, 3, 1],
    [2, 3, 1],
    [1, 2, 3],
    [1, 3, 2],
    [3, 2, 1],
    [1, 3, 2],
    [1, 3, 2],
    [3, 2, 1],
    [2, 1, 3],
    [2, 3, 1],
];

/// Raw question, option and weight tables, as bundled or read from a JSON pack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionTables {
    pub questions: Vec<String>,
    pub options: Vec<Vec<String>>,
    pub weights: Vec<Vec<u8>>,
}

impl QuestionTables {
    #[must_use]
    pub fn bundled() -> Self {
        Self {
            questions: QUESTIONS.iter().map(ToString::to_string).collect(),
            options: OPTIONS
                .iter()
                .map(|row| row.iter().map(ToString::to_string).collect())
                .collect(),
            weights: WEIGHTS.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// # Errors
    ///
    /// Returns `CatalogError::Json` if the pack does not parse.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// # Errors
    ///
    /// Returns `CatalogError::QuestionSet` when the tables are inconsistent.
    pub fn into_question_set(self) -> Result<QuestionSet, CatalogError> {
        Ok(QuestionSet::from_tables(
            self.questions,
            self.options,
            self.weights,
        )?)
    }
}

/// # Errors
///
/// Returns `CatalogError` only if the bundled tables are inconsistent.
pub fn bundled_question_set() -> Result<QuestionSet, CatalogError> {
    QuestionTables::bundled().into_question_set()
}

/// Loads the question set from `path`, or the bundled one when `path` is `None`.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read, is not valid JSON, or
/// describes a malformed question set.
pub fn load_question_set(path: Option<&Path>) -> Result<QuestionSet, CatalogError> {
    let Some(path) = path else {
        tracing::debug!("using bundled question set");
        return bundled_question_set();
    };

    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let set = QuestionTables::from_json(&raw)?.into_question_set()?;
    tracing::info!(path = %path.display(), questions = set.len(), "loaded question pack");
    Ok(set)
}
