//! View Event Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// View event UUID
pub type ViewEventUuid = TypedUuid<ViewEvent>;

/// A single recorded visit.
///
/// Every field is optional because feeds written by external trackers are not
/// validated; aggregation skips events without a subject or a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewEvent {
    /// Identifier of the product or page that was viewed.
    pub subject: Option<String>,

    /// Originating address of the visitor.
    pub ip_address: Option<String>,

    pub viewed_at: Option<Timestamp>,
}

impl ViewEvent {
    #[must_use]
    pub fn new(subject: impl Into<String>, ip_address: impl Into<String>, viewed_at: Timestamp) -> Self {
        Self {
            subject: Some(subject.into()),
            ip_address: Some(ip_address.into()),
            viewed_at: Some(viewed_at),
        }
    }
}
