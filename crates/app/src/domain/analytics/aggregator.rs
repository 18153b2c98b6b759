//! View-event aggregation.
//!
//! Events missing the grouping field or a timestamp are ignored by every
//! function here. Timelines are bucketed by UTC day and zero-filled from the
//! first to the last day that has any usable event.

use std::collections::BTreeMap;

use jiff::{ToSpan, Timestamp, civil::Date, tz::TimeZone};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::domain::{
    analytics::models::{SubjectViews, Timeline},
    views::records::ViewEvent,
};

/// Field of a [`ViewEvent`] to group by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKey {
    /// The viewed product or page.
    Subject,

    /// The visitor's address.
    Address,
}

impl ViewKey {
    fn of(self, event: &ViewEvent) -> Option<&str> {
        match self {
            Self::Subject => event.subject.as_deref(),
            Self::Address => event.ip_address.as_deref(),
        }
    }
}

fn utc_day(timestamp: Timestamp) -> Date {
    timestamp.to_zoned(TimeZone::UTC).date()
}

/// `(value, day)` for every event that carries both.
fn usable(events: &[ViewEvent], key: ViewKey) -> impl Iterator<Item = (&str, Date)> + '_ {
    events.iter().filter_map(move |event| {
        let value = key.of(event).filter(|value| !value.is_empty())?;
        let viewed_at = event.viewed_at?;

        Some((value, utc_day(viewed_at)))
    })
}

/// Every day between the earliest and latest usable event, inclusive.
fn feed_days(events: &[ViewEvent], key: ViewKey) -> Vec<Date> {
    let mut first: Option<Date> = None;
    let mut last: Option<Date> = None;

    for (_, day) in usable(events, key) {
        first = Some(first.map_or(day, |current| current.min(day)));
        last = Some(last.map_or(day, |current| current.max(day)));
    }

    let (Some(first), Some(last)) = (first, last) else {
        return Vec::new();
    };

    first
        .series(1.day())
        .take_while(|day| *day <= last)
        .collect()
}

fn zero_filled(days: Vec<Date>, counts: &BTreeMap<Date, u64>) -> Timeline {
    let counts = days
        .iter()
        .map(|day| counts.get(day).copied().unwrap_or_default())
        .collect();

    Timeline {
        labels: days,
        counts,
    }
}

/// Number of events whose `key` equals `identifier`.
#[must_use]
pub fn count_by(events: &[ViewEvent], key: ViewKey, identifier: &str) -> u64 {
    usable(events, key)
        .filter(|(value, _)| *value == identifier)
        .count() as u64
}

/// Daily counts of events whose `key` equals `identifier`.
#[must_use]
pub fn timeline_by(events: &[ViewEvent], key: ViewKey, identifier: &str) -> Timeline {
    let mut counts: BTreeMap<Date, u64> = BTreeMap::new();

    for (_, day) in usable(events, key).filter(|(value, _)| *value == identifier) {
        *counts.entry(day).or_default() += 1;
    }

    zero_filled(feed_days(events, key), &counts)
}

/// Number of distinct `key` values across the whole feed.
#[must_use]
pub fn distinct_total(events: &[ViewEvent], key: ViewKey) -> u64 {
    usable(events, key)
        .map(|(value, _)| value)
        .collect::<FxHashSet<_>>()
        .len() as u64
}

/// Number of distinct `key` values seen on each day. Not cumulative.
#[must_use]
pub fn distinct_timeline(events: &[ViewEvent], key: ViewKey) -> Timeline {
    let mut seen: BTreeMap<Date, FxHashSet<&str>> = BTreeMap::new();

    for (value, day) in usable(events, key) {
        seen.entry(day).or_default().insert(value);
    }

    let counts: BTreeMap<Date, u64> = seen
        .into_iter()
        .map(|(day, values)| (day, values.len() as u64))
        .collect();

    zero_filled(feed_days(events, key), &counts)
}

/// Views of a single product or page.
#[must_use]
pub fn count_by_identifier(events: &[ViewEvent], identifier: &str) -> u64 {
    count_by(events, ViewKey::Subject, identifier)
}

/// Daily views of a single product or page.
#[must_use]
pub fn timeline_by_identifier(events: &[ViewEvent], identifier: &str) -> Timeline {
    timeline_by(events, ViewKey::Subject, identifier)
}

#[must_use]
pub fn total_distinct_subjects(events: &[ViewEvent]) -> u64 {
    distinct_total(events, ViewKey::Subject)
}

#[must_use]
pub fn distinct_subjects_timeline(events: &[ViewEvent]) -> Timeline {
    distinct_timeline(events, ViewKey::Subject)
}

/// The `limit` most viewed subjects, busiest first. Ties are ordered by
/// subject so the ranking is stable.
#[must_use]
pub fn most_viewed(events: &[ViewEvent], limit: usize) -> Vec<SubjectViews> {
    let mut counts: FxHashMap<&str, u64> = FxHashMap::default();

    for (subject, _) in usable(events, ViewKey::Subject) {
        *counts.entry(subject).or_default() += 1;
    }

    let mut ranked: Vec<SubjectViews> = counts
        .into_iter()
        .map(|(subject, views)| SubjectViews {
            subject: subject.to_string(),
            views,
        })
        .collect();

    ranked.sort_by(|a, b| b.views.cmp(&a.views).then_with(|| a.subject.cmp(&b.subject)));
    ranked.truncate(limit);

    ranked
}
