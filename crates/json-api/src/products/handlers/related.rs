//! Related Products Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};
use uuid::Uuid;

use vitrine_app::domain::products::DEFAULT_RELATED_LIMIT;

use crate::{
    extensions::*,
    products::{errors::into_status_error, responses::ProductsResponse},
    state::State,
};

/// Related Products Handler
///
/// Returns other products in the same category as `product`.
#[endpoint(
    tags("products"),
    summary = "List Related Products",
    responses(
        (status_code = StatusCode::OK, description = "Related products"),
        (status_code = StatusCode::NOT_FOUND, description = "Source product not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let limit = limit.into_inner().unwrap_or(DEFAULT_RELATED_LIMIT);

    let products = state
        .app
        .products
        .list_related_products(product.into_inner().into(), limit)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}
