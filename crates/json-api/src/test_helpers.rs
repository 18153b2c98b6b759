//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};
use smallvec::smallvec;
use uuid::Uuid;

use vitrine_app::{
    auth::MockAuthService,
    context::AppContext,
    domain::{
        dashboard::MockDashboardService,
        products::{
            MockProductsService,
            records::{ProductRecord, ProductStatus, ProductUuid},
        },
        profiles::{MockProfilesService, records::ProfileUuid},
        views::{MockViewEventsSource, MockViewsService},
    },
};

use crate::{extensions::*, state::State};

pub(crate) const TEST_ACTOR: ProfileUuid = ProfileUuid::from_uuid(Uuid::nil());

#[salvo::handler]
pub(crate) async fn inject_actor(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    depot.insert_actor(TEST_ACTOR);
    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn make_product(uuid: ProductUuid) -> ProductRecord {
    ProductRecord {
        uuid,
        name: "Desk Lamp".to_string(),
        description: "Warm white".to_string(),
        price: Decimal::new(1999, 2),
        category: "lighting".to_string(),
        status: ProductStatus::InStock,
        meta_tags: smallvec!["lamp".to_string()],
        created_by: TEST_ACTOR,
        owner_name: Some("Test Operator".to_string()),
        images: Vec::new(),
        links: Vec::new(),
        specifications: Vec::new(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_get_product().never();
    products.expect_list_product_ids().never();
    products.expect_list_products().never();
    products.expect_list_related_products().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_profiles_mock() -> MockProfilesService {
    let mut profiles = MockProfilesService::new();

    profiles.expect_create_profile().never();
    profiles.expect_get_profile().never();

    profiles
}

fn strict_views_mock() -> MockViewsService {
    let mut views = MockViewsService::new();

    views.expect_list_views().never();
    views.expect_record_view().never();

    views
}

fn strict_view_source_mock() -> MockViewEventsSource {
    let mut source = MockViewEventsSource::new();

    source.expect_fetch_all().never();

    source
}

fn strict_dashboard_mock() -> MockDashboardService {
    let mut dashboard = MockDashboardService::new();

    dashboard.expect_summary().never();

    dashboard
}

/// Every service strict; tests swap in the one they exercise.
fn strict_context() -> AppContext {
    AppContext {
        products: Arc::new(strict_products_mock()),
        profiles: Arc::new(strict_profiles_mock()),
        views: Arc::new(strict_views_mock()),
        view_source: Arc::new(strict_view_source_mock()),
        dashboard: Arc::new(strict_dashboard_mock()),
        auth: Arc::new(strict_auth_mock()),
    }
}

pub(crate) fn state_with_products(products: MockProductsService) -> Arc<State> {
    let mut app = strict_context();

    app.products = Arc::new(products);

    State::from_app_context(app)
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    let mut app = strict_context();

    app.auth = Arc::new(auth);

    State::from_app_context(app)
}

pub(crate) fn state_with_views(views: MockViewsService, source: MockViewEventsSource) -> Arc<State> {
    let mut app = strict_context();

    app.views = Arc::new(views);
    app.view_source = Arc::new(source);

    State::from_app_context(app)
}

pub(crate) fn state_with_dashboard(dashboard: MockDashboardService) -> Arc<State> {
    let mut app = strict_context();

    app.dashboard = Arc::new(dashboard);

    State::from_app_context(app)
}

/// Products routes with [`TEST_ACTOR`] authenticated.
pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .hoop(inject_actor)
            .push(route),
    )
}

/// Products routes without an authenticated actor.
pub(crate) fn anonymous_products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_products(products)))
            .push(route),
    )
}
