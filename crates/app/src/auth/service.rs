//! Auth service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::{
        errors::AuthServiceError,
        models::{AuthenticatedUser, NewUser},
        password::{Password, hash_password, verify_password},
        repository::PgUsersRepository,
        token::{Claims, TokenSigner},
    },
    database::Db,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    db: Db,
    repository: PgUsersRepository,
    signer: TokenSigner,
}

impl PgAuthService {
    #[must_use]
    pub fn new(db: Db, signer: TokenSigner) -> Self {
        Self {
            db,
            repository: PgUsersRepository::new(),
            signer,
        }
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn register(&self, user: NewUser) -> Result<AuthenticatedUser, AuthServiceError> {
        if user.email.trim().is_empty() {
            return Err(AuthServiceError::MissingRequiredData);
        }

        if user.password.is_too_short() {
            return Err(AuthServiceError::WeakPassword);
        }

        let password_hash = hash_password(&user.password)?;

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_user(&mut tx, user.email.trim(), &password_hash)
            .await?;

        tx.commit().await?;

        let token = self.signer.issue(&created)?;

        Ok(AuthenticatedUser {
            token,
            user: created,
        })
    }

    async fn login(
        &self,
        email: &str,
        password: Password,
    ) -> Result<AuthenticatedUser, AuthServiceError> {
        let mut tx = self.db.begin().await?;

        let stored = self.repository.get_user_by_email(&mut tx, email).await?;

        tx.commit().await?;

        // Unknown email and wrong password produce the same error.
        let stored = stored.ok_or(AuthServiceError::InvalidCredentials)?;

        if !verify_password(&password, &stored.password_hash)? {
            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = self.signer.issue(&stored.user)?;

        Ok(AuthenticatedUser {
            token,
            user: stored.user,
        })
    }

    fn authenticate(&self, token: &str) -> Result<Claims, AuthServiceError> {
        Ok(self.signer.verify(token)?)
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Registers a new account and returns it with a signed token.
    async fn register(&self, user: NewUser) -> Result<AuthenticatedUser, AuthServiceError>;

    /// Verifies credentials and returns the account with a fresh token.
    async fn login(
        &self,
        email: &str,
        password: Password,
    ) -> Result<AuthenticatedUser, AuthServiceError>;

    /// Verifies a bearer token's signature and expiry.
    fn authenticate(&self, token: &str) -> Result<Claims, AuthServiceError>;
}
