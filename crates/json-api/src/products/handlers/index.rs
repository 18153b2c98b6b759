//! Product Index Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    products::{errors::into_status_error, responses::ProductsResponse},
    state::State,
};

/// Product Index Handler
///
/// Returns every product, optionally restricted to one category.
#[endpoint(tags("products"), summary = "List Products")]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let category = category
        .into_inner()
        .filter(|category| !category.trim().is_empty());

    let products = state
        .app
        .products
        .list_products(category)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}
