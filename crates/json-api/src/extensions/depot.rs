//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use vitrine_app::domain::profiles::records::ProfileUuid;

const ACTOR_DEPOT_KEY: &str = "actor_profile_uuid";

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Record the authenticated profile for the rest of the request.
    fn insert_actor(&mut self, actor: ProfileUuid);

    /// The authenticated profile, if the request carried a valid token.
    fn actor(&self) -> Option<ProfileUuid>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_actor(&mut self, actor: ProfileUuid) {
        self.insert(ACTOR_DEPOT_KEY, actor);
    }

    fn actor(&self) -> Option<ProfileUuid> {
        self.get::<ProfileUuid>(ACTOR_DEPOT_KEY).ok().copied()
    }
}
