//! Auth Models

use jiff::Timestamp;

use crate::{auth::password::Password, uuids::TypedUuid};

/// User UUID
pub type UserUuid = TypedUuid<User>;

/// User Model
///
/// The password hash never leaves the repository layer.
#[derive(Debug, Clone)]
pub struct User {
    pub uuid: UserUuid,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// New User Model
#[derive(Debug)]
pub struct NewUser {
    pub email: String,
    pub password: Password,
}

/// A user together with a freshly issued bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub token: String,
    pub user: User,
}
