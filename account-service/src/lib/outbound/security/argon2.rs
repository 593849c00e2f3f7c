use crate::domain::account::errors::PasswordError;
use crate::domain::account::ports::PasswordDigest;
use crate::domain::account::ports::PasswordHasher;

/// Argon2id password hashing backed by the `auth` library.
#[derive(Default)]
pub struct Argon2PasswordHasher {
    inner: auth::PasswordHasher,
}

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl From<auth::PasswordError> for PasswordError {
    fn from(err: auth::PasswordError) -> Self {
        match err {
            auth::PasswordError::HashingFailed(msg) => PasswordError::HashingFailed(msg),
            auth::PasswordError::VerificationFailed(msg) => {
                PasswordError::VerificationFailed(msg)
            }
        }
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<PasswordDigest, PasswordError> {
        let hashed = self.inner.hash(password)?;

        Ok(PasswordDigest {
            hash: hashed.hash,
            salt: hashed.salt,
        })
    }

    fn verify(&self, password: &str, hash: &str, salt: &str) -> Result<bool, PasswordError> {
        Ok(self.inner.verify(password, hash, salt)?)
    }
}
