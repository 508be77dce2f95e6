//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, PgAuthService, TokenSigner},
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        categories::{CategoriesService, PgCategoriesService},
        orders::{OrdersService, PgOrdersService},
        products::{PgProductsService, ProductsService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub categories: Arc<dyn CategoriesService>,
    pub products: Arc<dyn ProductsService>,
    pub carts: Arc<dyn CartsService>,
    pub orders: Arc<dyn OrdersService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(
        url: &str,
        signer: TokenSigner,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        Ok(Self {
            categories: Arc::new(PgCategoriesService::new(db.clone())),
            products: Arc::new(PgProductsService::new(db.clone())),
            carts: Arc::new(PgCartsService::new(db.clone())),
            orders: Arc::new(PgOrdersService::new(db.clone())),
            auth: Arc::new(PgAuthService::new(db, signer)),
        })
    }
}
