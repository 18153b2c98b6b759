//! Test context for service-level integration tests.

use crate::{
    auth::PgAuthService,
    database::Db,
    domain::{
        products::{PgProductsService, ProductsService, ProductsServiceError, data::NewProduct, records::ProductUuid},
        profiles::{PgProfilesService, ProfilesService, data::NewProfile, records::ProfileUuid},
        views::PgViewsService,
    },
};

use super::{db::TestDb, helpers::product_details};

pub(crate) struct TestContext {
    pub db: TestDb,

    /// Profile created for every context; the default actor for writes.
    pub actor: ProfileUuid,
    pub profiles: PgProfilesService,
    pub products: PgProductsService,
    pub views: PgViewsService,
    pub auth: PgAuthService,
}

impl TestContext {
    pub async fn new() -> Self {
        let db = TestDb::new().await;
        let pool = db.pool().clone();

        let profiles = PgProfilesService::new(pool.clone());
        let actor = ProfileUuid::new();

        profiles
            .create_profile(NewProfile {
                uuid: actor,
                full_name: "Test Operator".to_string(),
            })
            .await
            .expect("Failed to create default test profile");

        Self {
            products: PgProductsService::new(Db::new(pool.clone())),
            views: PgViewsService::new(pool.clone()),
            auth: PgAuthService::new(pool),
            profiles,
            actor,
            db,
        }
    }

    /// Create a product with no children, owned by the default actor.
    pub async fn create_product(
        &self,
        name: &str,
        category: &str,
    ) -> Result<ProductUuid, ProductsServiceError> {
        let uuid = ProductUuid::new();

        self.products
            .create_product(
                Some(self.actor),
                NewProduct {
                    uuid,
                    details: product_details(name, category),
                },
            )
            .await?;

        Ok(uuid)
    }
}
