//! Product Ids Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{errors::into_status_error, responses::ProductIdsResponse},
    state::State,
};

/// Product Ids Handler
///
/// Returns the identifier of every product, oldest first.
#[endpoint(tags("products"), summary = "List Product Ids")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProductIdsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let uuids = state
        .app
        .products
        .list_product_ids()
        .await
        .map_err(into_status_error)?;

    Ok(Json(ProductIdsResponse {
        uuids: uuids.into_iter().map(Into::into).collect(),
    }))
}
