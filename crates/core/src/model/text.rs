use std::fmt;
use std::marker::PhantomData;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TextError {
    #[error("text must not be empty")]
    Empty,
}

/// Non-empty display text, tagged by what it labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text<T>(String, PhantomData<T>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt;
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice;

pub type QuestionText = Text<Prompt>;
pub type OptionLabel = Text<Choice>;

impl<T> Text<T> {
    /// # Errors
    ///
    /// Returns `TextError::Empty` when the text is blank.
    pub fn parse(s: impl Into<String>) -> Result<Self, TextError> {
        let s = s.into();
        if s.trim().is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(s, PhantomData))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T> fmt::Display for Text<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
