use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of options offered by every question.
pub const OPTION_COUNT: usize = 3;

/// Zero-based position of a question in the question set.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionIndex(usize);

impl QuestionIndex {
    pub const FIRST: Self = Self(0);

    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub fn value(&self) -> usize {
        self.0
    }

    /// One-based number shown to the user.
    #[must_use]
    pub fn number(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Debug for QuestionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionIndex({})", self.0)
    }
}

impl fmt::Display for QuestionIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the three radio options of a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OptionIndex {
    First,
    Second,
    Third,
}

impl OptionIndex {
    pub const ALL: [Self; OPTION_COUNT] = [Self::First, Self::Second, Self::Third];

    /// Converts a zero-based slot position into an option.
    #[must_use]
    pub fn from_position(position: usize) -> Option<Self> {
        Self::ALL.get(position).copied()
    }

    #[must_use]
    pub fn position(self) -> usize {
        match self {
            OptionIndex::First => 0,
            OptionIndex::Second => 1,
            OptionIndex::Third => 2,
        }
    }
}
