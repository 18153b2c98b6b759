//! View Event Data

use jiff::{
    Timestamp,
    civil::{Date, DateTime},
    tz::TimeZone,
};

use crate::domain::views::records::ViewEventUuid;

/// New View Event Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewViewEvent {
    pub uuid: ViewEventUuid,
    pub subject: String,
    pub ip_address: Option<String>,

    /// Defaults to the time of insertion.
    pub viewed_at: Option<Timestamp>,
}

/// Parse a feed timestamp.
///
/// Accepts RFC 3339 instants, civil datetimes and plain dates; the last two
/// are read as UTC. Anything else yields `None`.
#[must_use]
pub fn parse_view_timestamp(value: &str) -> Option<Timestamp> {
    let value = value.trim();

    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Some(timestamp);
    }

    if let Ok(datetime) = value.parse::<DateTime>() {
        return datetime.to_zoned(TimeZone::UTC).ok().map(|zoned| zoned.timestamp());
    }

    value
        .parse::<Date>()
        .ok()
        .and_then(|date| date.to_zoned(TimeZone::UTC).ok())
        .map(|zoned| zoned.timestamp())
}
