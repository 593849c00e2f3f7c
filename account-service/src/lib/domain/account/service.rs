use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::OnceCell;

use crate::domain::account::errors::AuthError;
use crate::domain::account::errors::PasswordError;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::models::SessionToken;
use crate::domain::account::models::User;
use crate::domain::account::models::UserId;
use crate::domain::account::ports::AuthServicePort;
use crate::domain::account::ports::PasswordDigest;
use crate::domain::account::ports::PasswordHasher;
use crate::domain::account::ports::TokenIssuer;
use crate::domain::account::ports::UserRepository;

/// Plaintext behind the decoy digest checked when a login names no account.
const DECOY_PASSWORD: &str = "decoy-password-for-unknown-accounts";

/// Domain service implementation for registration and login.
///
/// Coordinates the user store, the password hasher and the token issuer.
/// Password hashing runs on the blocking thread pool.
pub struct AuthService<UR, PH, TI>
where
    UR: UserRepository,
    PH: PasswordHasher,
    TI: TokenIssuer,
{
    repository: Arc<UR>,
    password_hasher: Arc<PH>,
    token_issuer: Arc<TI>,
    decoy_digest: OnceCell<PasswordDigest>,
}

impl<UR, PH, TI> AuthService<UR, PH, TI>
where
    UR: UserRepository,
    PH: PasswordHasher,
    TI: TokenIssuer,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `password_hasher` - Salted password hashing implementation
    /// * `token_issuer` - Bearer token issuing implementation
    pub fn new(repository: Arc<UR>, password_hasher: Arc<PH>, token_issuer: Arc<TI>) -> Self {
        Self {
            repository,
            password_hasher,
            token_issuer,
            decoy_digest: OnceCell::new(),
        }
    }

    async fn hash_password(&self, password: String) -> Result<PasswordDigest, PasswordError> {
        let password_hasher = Arc::clone(&self.password_hasher);

        tokio::task::spawn_blocking(move || password_hasher.hash(&password))
            .await
            .map_err(|e| PasswordError::HashingFailed(format!("Task join error: {}", e)))?
    }

    async fn verify_password(
        &self,
        password: String,
        hash: String,
        salt: String,
    ) -> Result<bool, PasswordError> {
        let password_hasher = Arc::clone(&self.password_hasher);

        tokio::task::spawn_blocking(move || password_hasher.verify(&password, &hash, &salt))
            .await
            .map_err(|e| PasswordError::VerificationFailed(format!("Task join error: {}", e)))?
    }

    /// Spend the same hashing work on an unknown email as on a known one.
    ///
    /// The outcome is discarded; the caller always rejects the login.
    async fn verify_against_decoy(&self, password: String) {
        let decoy = self
            .decoy_digest
            .get_or_try_init(|| self.hash_password(DECOY_PASSWORD.to_string()))
            .await;

        let result = match decoy {
            Ok(digest) => {
                self.verify_password(password, digest.hash.clone(), digest.salt.clone())
                    .await
            }
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            tracing::warn!(error = %e, "Decoy password check failed");
        }
    }
}

#[async_trait]
impl<UR, PH, TI> AuthServicePort for AuthService<UR, PH, TI>
where
    UR: UserRepository,
    PH: PasswordHasher,
    TI: TokenIssuer,
{
    async fn register(&self, command: RegisterCommand) -> Result<User, AuthError> {
        if self.repository.exists_by_email(&command.email).await? {
            tracing::info!(email = %command.email, "Registration rejected, email taken");
            return Err(AuthError::EmailAlreadyRegistered(command.email.to_string()));
        }

        let digest = self.hash_password(command.password).await?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            password_hash: digest.hash,
            password_salt: digest.salt,
            created_at: Utc::now(),
        };

        self.repository.add(&user).await?;

        tracing::info!(user_id = %user.id, email = %user.email, "User registered");

        Ok(user)
    }

    async fn login(&self, command: LoginCommand) -> Result<SessionToken, AuthError> {
        let Some(user) = self.repository.get_by_email(&command.email).await? else {
            self.verify_against_decoy(command.password).await;
            tracing::info!(email = %command.email, reason = "unknown_email", "Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let is_valid = self
            .verify_password(
                command.password,
                user.password_hash.clone(),
                user.password_salt.clone(),
            )
            .await?;

        if !is_valid {
            tracing::info!(user_id = %user.id, reason = "wrong_password", "Login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.token_issuer.issue(&user)?;

        tracing::info!(user_id = %user.id, "Session token issued");

        Ok(token)
    }
}
