//! Profile Data

use crate::domain::profiles::records::ProfileUuid;

/// New Profile Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProfile {
    /// UUID to assign to the profile row.
    pub uuid: ProfileUuid,

    /// Display name shown as a product's owner.
    pub full_name: String,
}
