//! App Router

use salvo::Router;

use crate::{auth, dashboard, healthcheck, products, views};

/// Every API route. State injection and request logging are added by the
/// caller.
pub(crate) fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(
            Router::new()
                .hoop(auth::middleware::handler)
                .push(
                    Router::with_path("products")
                        .get(products::index::handler)
                        .post(products::create::handler)
                        .push(Router::with_path("ids").get(products::ids::handler))
                        .push(
                            Router::with_path("{product}")
                                .get(products::get::handler)
                                .put(products::update::handler)
                                .delete(products::delete::handler)
                                .push(
                                    Router::with_path("related").get(products::related::handler),
                                ),
                        ),
                )
                .push(
                    Router::with_path("views")
                        .get(views::index::handler)
                        .post(views::create::handler),
                )
                .push(Router::with_path("dashboard").get(dashboard::handler::handler)),
        )
}
