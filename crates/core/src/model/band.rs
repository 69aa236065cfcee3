use std::fmt;

/// Named score range of a finished quiz, ordered from lowest to highest.
///
/// Bands are contiguous; a score equal to a band's lower bound belongs to
/// that band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScoreBand {
    VeryLow,
    Low,
    BelowAverage,
    SlightlyBelowAverage,
    Average,
    SlightlyAboveAverage,
    AboveAverage,
    High,
    VeryHigh,
}

impl ScoreBand {
    pub const ALL: [Self; 9] = [
        Self::VeryLow,
        Self::Low,
        Self::BelowAverage,
        Self::SlightlyBelowAverage,
        Self::Average,
        Self::SlightlyAboveAverage,
        Self::AboveAverage,
        Self::High,
        Self::VeryHigh,
    ];

    /// Maps a score to its band. Thresholds step by three points from 26.
    #[must_use]
    pub fn classify(score: u32) -> Self {
        Self::ALL
            .into_iter()
            .rev()
            .find(|band| score >= band.lower_bound())
            .unwrap_or(Self::VeryLow)
    }

    /// Smallest score that falls into this band.
    #[must_use]
    pub fn lower_bound(self) -> u32 {
        match self {
            ScoreBand::VeryLow => 0,
            ScoreBand::Low => 26,
            ScoreBand::BelowAverage => 29,
            ScoreBand::SlightlyBelowAverage => 32,
            ScoreBand::Average => 35,
            ScoreBand::SlightlyAboveAverage => 38,
            ScoreBand::AboveAverage => 41,
            ScoreBand::High => 44,
            ScoreBand::VeryHigh => 47,
        }
    }

    /// Stable identifier, e.g. `below_average`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ScoreBand::VeryLow => "very_low",
            ScoreBand::Low => "low",
            ScoreBand::BelowAverage => "below_average",
            ScoreBand::SlightlyBelowAverage => "slightly_below_average",
            ScoreBand::Average => "average",
            ScoreBand::SlightlyAboveAverage => "slightly_above_average",
            ScoreBand::AboveAverage => "above_average",
            ScoreBand::High => "high",
            ScoreBand::VeryHigh => "very_high",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ScoreBand::VeryLow => "very low",
            ScoreBand::Low => "low",
            ScoreBand::BelowAverage => "below average",
            ScoreBand::SlightlyBelowAverage => "slightly below average",
            ScoreBand::Average => "average",
            ScoreBand::SlightlyAboveAverage => "slightly above average",
            ScoreBand::AboveAverage => "above average",
            ScoreBand::High => "high",
            ScoreBand::VeryHigh => "very high",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
