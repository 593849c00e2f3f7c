use std::collections::HashMap;

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::JwtError;

/// Bearer token claims.
///
/// Standard RFC 7519 claims plus custom fields via the `extra` map.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Claims {
    /// Subject (account identifier)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Expiration time (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued at (Unix timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Issuer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    /// Additional custom fields (flattened into token)
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Claims {
    const EMAIL_CLAIM: &'static str = "email";

    /// Create new empty claims.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create claims identifying an account, expiring after `expiration_hours`.
    ///
    /// # Arguments
    /// * `account_id` - Unique account identifier (becomes `sub`)
    /// * `email` - Account email (stored in `extra.email`)
    /// * `expiration_hours` - Hours until token expires
    ///
    /// # Returns
    /// Claims with sub, exp, iat, and email set
    ///
    /// # Errors
    /// * `InvalidExpiration` - Expiration falls outside the representable time range
    pub fn for_account(
        account_id: impl ToString,
        email: &str,
        expiration_hours: i64,
    ) -> Result<Self, JwtError> {
        let now = Utc::now();
        let expiration = Duration::try_hours(expiration_hours)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .ok_or(JwtError::InvalidExpiration(expiration_hours))?;

        let claims = Self {
            exp: Some(expiration.timestamp()),
            iat: Some(now.timestamp()),
            ..Self::default()
        };

        Ok(claims
            .with_subject(account_id)
            .with_extra(Self::EMAIL_CLAIM, email))
    }

    /// Set subject.
    pub fn with_subject(mut self, sub: impl ToString) -> Self {
        self.sub = Some(sub.to_string());
        self
    }

    /// Set issuer.
    pub fn with_issuer(mut self, iss: impl ToString) -> Self {
        self.iss = Some(iss.to_string());
        self
    }

    /// Add a custom field.
    pub fn with_extra(mut self, key: impl ToString, value: impl Serialize) -> Self {
        if let Ok(json_value) = serde_json::to_value(value) {
            self.extra.insert(key.to_string(), json_value);
        }
        self
    }

    /// Email carried in the extra fields, if any.
    pub fn email(&self) -> Option<&str> {
        self.extra
            .get(Self::EMAIL_CLAIM)
            .and_then(|v| v.as_str())
    }
}
