use async_trait::async_trait;

use crate::domain::account::errors::AuthError;
use crate::domain::account::errors::PasswordError;
use crate::domain::account::errors::TokenError;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::models::SessionToken;
use crate::domain::account::models::User;

/// Port for registration and login.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// # Arguments
    /// * `command` - Normalized email and plaintext password
    ///
    /// # Returns
    /// Created user entity, including its hash and salt
    ///
    /// # Errors
    /// * `EmailAlreadyRegistered` - An account with this email exists
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<User, AuthError>;

    /// Verify credentials and issue a session token.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password
    ///
    /// # Returns
    /// Bearer token bound to the account
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `Password` - Stored hash could not be checked
    /// * `Token` - Token issuance failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<SessionToken, AuthError>;
}

/// Persistence operations for accounts.
///
/// Implementations must enforce email uniqueness atomically in `add`; the
/// service's existence check alone does not close the race between two
/// concurrent registrations.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Check whether an account with this email exists.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn exists_by_email(&self, email: &EmailAddress) -> Result<bool, AuthError>;

    /// Retrieve an account by email.
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn get_by_email(&self, email: &EmailAddress) -> Result<Option<User>, AuthError>;

    /// Persist a new account.
    ///
    /// # Errors
    /// * `EmailAlreadyRegistered` - Email is already taken
    /// * `DatabaseError` - Database operation failed
    async fn add(&self, user: &User) -> Result<(), AuthError>;
}

/// Salt and hash produced for a plaintext password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordDigest {
    pub hash: String,
    pub salt: String,
}

/// One-way salted password hashing.
pub trait PasswordHasher: Send + Sync + 'static {
    /// Derive a salted hash from a plaintext password.
    ///
    /// # Errors
    /// * `HashingFailed` - Hashing operation failed
    fn hash(&self, password: &str) -> Result<PasswordDigest, PasswordError>;

    /// Check a plaintext password against a stored hash and salt in constant time.
    ///
    /// # Returns
    /// True if the password matches
    ///
    /// # Errors
    /// * `VerificationFailed` - Stored hash is malformed
    fn verify(&self, password: &str, hash: &str, salt: &str) -> Result<bool, PasswordError>;
}

/// Mints bearer tokens bound to an account.
pub trait TokenIssuer: Send + Sync + 'static {
    /// # Errors
    /// * `IssueFailed` - Token could not be signed
    fn issue(&self, user: &User) -> Result<SessionToken, TokenError>;
}
