//! Analytics Models

use jiff::civil::Date;
use serde::Serialize;

/// Daily series with one count per label.
///
/// `labels` are UTC calendar days in ascending order without gaps; `counts`
/// has the same length.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Timeline {
    pub labels: Vec<Date>,
    pub counts: Vec<u64>,
}

impl Timeline {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Date, u64)> + '_ {
        self.labels.iter().copied().zip(self.counts.iter().copied())
    }
}

/// View count for a single subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectViews {
    pub subject: String,
    pub views: u64,
}
