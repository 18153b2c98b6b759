//! Profile Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Profile UUID. Also identifies the authenticated actor of a request.
pub type ProfileUuid = TypedUuid<ProfileRecord>;

/// Profile Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    pub uuid: ProfileUuid,
    pub full_name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
