//! Category Models

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Category UUID
pub type CategoryUuid = TypedUuid<Category>;

/// Category Model
#[derive(Debug, Clone)]
pub struct Category {
    pub uuid: CategoryUuid,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New Category Model
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
}
