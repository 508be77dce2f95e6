//! Users Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::auth::models::{User, UserUuid};

const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const GET_USER_BY_EMAIL_SQL: &str = include_str!("sql/get_user_by_email.sql");

/// A user row including its password hash. Confined to the auth module.
#[derive(Debug, Clone)]
pub(crate) struct StoredUser {
    pub(crate) user: User,
    pub(crate) password_hash: String,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgUsersRepository;

impl PgUsersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_user(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
        password_hash: &str,
    ) -> Result<User, sqlx::Error> {
        let stored = query_as::<Postgres, StoredUser>(CREATE_USER_SQL)
            .bind(email)
            .bind(password_hash)
            .fetch_one(&mut **tx)
            .await?;

        Ok(stored.user)
    }

    pub(crate) async fn get_user_by_email(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        email: &str,
    ) -> Result<Option<StoredUser>, sqlx::Error> {
        query_as::<Postgres, StoredUser>(GET_USER_BY_EMAIL_SQL)
            .bind(email)
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for StoredUser {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            user: User {
                uuid: UserUuid::from_uuid(row.try_get("uuid")?),
                email: row.try_get("email")?,
                created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
                updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
            },
            password_hash: row.try_get("password_hash")?,
        })
    }
}
