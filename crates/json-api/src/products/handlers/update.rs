//! Update Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{
        errors::into_status_error, requests::ProductRequest, responses::ProductResponse,
    },
    state::State,
};

/// Product Update Handler
///
/// Replaces the product's fields and all of its images, links and
/// specifications.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Authentication required"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
#[tracing::instrument(
    name = "products.update",
    skip(product, json, depot, res),
    fields(
        product_uuid = tracing::field::Empty,
        images_count = tracing::field::Empty,
        links_count = tracing::field::Empty,
        specifications_count = tracing::field::Empty
    ),
    err
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();
    let product = product.into_inner();

    let span = tracing::Span::current();

    span.record("product_uuid", tracing::field::display(product));
    span.record("images_count", request.images.len());
    span.record("links_count", request.links.len());
    span.record("specifications_count", request.specifications.len());

    let updated = state
        .app
        .products
        .update_product(depot.actor(), product.into(), request.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{product}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::OK);

    tracing::info!(product_uuid = %product, "updated product");

    Ok(Json(updated.into()))
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use vitrine_app::domain::products::{
        MockProductsService, ProductsServiceError, records::ProductUuid,
    };

    use crate::test_helpers::{
        TEST_ACTOR, anonymous_products_service, make_product, products_service,
    };

    use super::*;

    fn route() -> Router {
        Router::with_path("products/{product}").put(handler)
    }

    fn body() -> serde_json::Value {
        json!({
            "name": "Desk Lamp",
            "price": "24.00",
            "category": "lighting",
            "specifications": [{ "category": "Power", "label": "Watts", "value": "60" }],
        })
    }

    #[tokio::test]
    async fn test_update_product_success() -> TestResult {
        let uuid = ProductUuid::new();

        let mut product = make_product(uuid);

        product.price = Decimal::new(2400, 2);

        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .withf(move |actor, u, update| {
                *actor == Some(TEST_ACTOR)
                    && *u == uuid
                    && update.price == Decimal::new(2400, 2)
                    && update.images.is_empty()
                    && update.specifications.len() == 1
            })
            .return_once(move |_, _, _| Ok(product));

        repo.expect_get_product().never();
        repo.expect_create_product().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&body())
            .send(&products_service(repo, route()))
            .await;

        let response: ProductResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(location, Some(format!("/products/{uuid}").as_str()));
        assert_eq!(response.price, Decimal::new(2400, 2));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_invalid_uuid_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_update_product().never();

        let res = TestClient::put("http://example.com/products/123")
            .json(&body())
            .send(&products_service(repo, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_not_found_returns_404() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .return_once(|_, _, _| Err(ProductsServiceError::NotFound));

        let res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&body())
            .send(&products_service(repo, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_product_without_actor_returns_401() -> TestResult {
        let uuid = ProductUuid::new();

        let mut repo = MockProductsService::new();

        repo.expect_update_product()
            .once()
            .withf(|actor, _, _| actor.is_none())
            .return_once(|_, _, _| Err(ProductsServiceError::AuthRequired));

        let res = TestClient::put(format!("http://example.com/products/{uuid}"))
            .json(&body())
            .send(&anonymous_products_service(repo, route()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::UNAUTHORIZED));

        Ok(())
    }
}
