//! Categories service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::categories::{
        errors::CategoriesServiceError,
        models::{Category, CategoryUuid, NewCategory},
        repository::PgCategoriesRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCategoriesService {
    db: Db,
    repository: PgCategoriesRepository,
}

impl PgCategoriesService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCategoriesRepository::new(),
        }
    }
}

#[async_trait]
impl CategoriesService for PgCategoriesService {
    async fn list_categories(&self) -> Result<Vec<Category>, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let categories = self.repository.list_categories(&mut tx).await?;

        tx.commit().await?;

        Ok(categories)
    }

    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<Category, CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let category = self.repository.get_category(&mut tx, category).await?;

        tx.commit().await?;

        Ok(category)
    }

    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<Category, CategoriesServiceError> {
        if category.name.trim().is_empty() {
            return Err(CategoriesServiceError::InvalidName);
        }

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_category(&mut tx, &category.name)
            .await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn rename_category(
        &self,
        category: CategoryUuid,
        name: String,
    ) -> Result<Category, CategoriesServiceError> {
        if name.trim().is_empty() {
            return Err(CategoriesServiceError::InvalidName);
        }

        let mut tx = self.db.begin().await?;

        let renamed = self
            .repository
            .rename_category(&mut tx, category, &name)
            .await?;

        tx.commit().await?;

        Ok(renamed)
    }

    async fn delete_category(&self, category: CategoryUuid) -> Result<(), CategoriesServiceError> {
        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.delete_category(&mut tx, category).await?;

        if rows_affected == 0 {
            return Err(CategoriesServiceError::NotFound);
        }

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// List all categories, ordered by name.
    async fn list_categories(&self) -> Result<Vec<Category>, CategoriesServiceError>;

    /// Retrieve a single category.
    async fn get_category(&self, category: CategoryUuid)
    -> Result<Category, CategoriesServiceError>;

    /// Creates a new category with the given name.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<Category, CategoriesServiceError>;

    /// Renames an existing category.
    async fn rename_category(
        &self,
        category: CategoryUuid,
        name: String,
    ) -> Result<Category, CategoriesServiceError>;

    /// Deletes a category with the given UUID.
    async fn delete_category(&self, category: CategoryUuid) -> Result<(), CategoriesServiceError>;
}
