//! Products service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        categories::models::CategoryUuid,
        products::{
            errors::ProductsServiceError,
            models::{NewProduct, Product, ProductUpdate, ProductUuid},
            repository::PgProductsRepository,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PgProductsService {
    db: Db,
    repository: PgProductsRepository,
}

impl PgProductsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgProductsRepository::new(),
        }
    }
}

#[async_trait]
impl ProductsService for PgProductsService {
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self.repository.list_products(&mut tx).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let product = self.repository.get_product(&mut tx, product).await?;

        tx.commit().await?;

        Ok(product)
    }

    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError> {
        if product.name.trim().is_empty() {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_product(&mut tx, &product).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError> {
        if update.name.trim().is_empty() {
            return Err(ProductsServiceError::MissingRequiredData);
        }

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_product(&mut tx, product, &update)
            .await?;

        tx.commit().await?;

        Ok(updated)
    }

    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_product(&mut tx, product).await?;

        if rows_affected == 0 {
            return Err(ProductsServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }

    async fn search_products(&self, keyword: &str) -> Result<Vec<Product>, ProductsServiceError> {
        // The keyword is a literal substring; ILIKE gives `\`, `%` and `_`
        // pattern meaning, so escape them before binding.
        let keyword = keyword
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");

        let mut tx = self.db.begin().await?;

        let products = self.repository.search_products(&mut tx, &keyword).await?;

        tx.commit().await?;

        Ok(products)
    }

    async fn list_products_by_category(
        &self,
        category: CategoryUuid,
    ) -> Result<Vec<Product>, ProductsServiceError> {
        let mut tx = self.db.begin().await?;

        let products = self
            .repository
            .list_products_by_category(&mut tx, category)
            .await?;

        tx.commit().await?;

        Ok(products)
    }
}

#[automock]
#[async_trait]
pub trait ProductsService: Send + Sync {
    /// List all products.
    async fn list_products(&self) -> Result<Vec<Product>, ProductsServiceError>;

    /// Retrieve a single product.
    async fn get_product(&self, product: ProductUuid) -> Result<Product, ProductsServiceError>;

    /// Creates a new product.
    async fn create_product(&self, product: NewProduct) -> Result<Product, ProductsServiceError>;

    /// Replaces the mutable fields of a product, preserving its UUID.
    async fn update_product(
        &self,
        product: ProductUuid,
        update: ProductUpdate,
    ) -> Result<Product, ProductsServiceError>;

    /// Deletes a product with the given UUID.
    async fn delete_product(&self, product: ProductUuid) -> Result<(), ProductsServiceError>;

    /// Case-insensitive substring search over name and description.
    ///
    /// The result is the deduplicated union of both match sets.
    async fn search_products(&self, keyword: &str) -> Result<Vec<Product>, ProductsServiceError>;

    /// Products whose category matches exactly.
    async fn list_products_by_category(
        &self,
        category: CategoryUuid,
    ) -> Result<Vec<Product>, ProductsServiceError>;
}
