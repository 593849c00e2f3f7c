use auth::Claims;
use auth::JwtHandler;

use crate::config::JwtConfig;
use crate::domain::account::errors::TokenError;
use crate::domain::account::models::SessionToken;
use crate::domain::account::models::User;
use crate::domain::account::ports::TokenIssuer;

/// Issues HS256 JWTs whose subject is the account id.
pub struct JwtTokenIssuer {
    handler: JwtHandler,
    expiration_hours: i64,
    issuer: Option<String>,
}

impl JwtTokenIssuer {
    pub fn new(secret: &[u8], expiration_hours: i64) -> Self {
        Self {
            handler: JwtHandler::new(secret),
            expiration_hours,
            issuer: None,
        }
    }

    pub fn with_issuer(mut self, issuer: impl ToString) -> Self {
        self.issuer = Some(issuer.to_string());
        self
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        let token_issuer = Self::new(config.secret.as_bytes(), config.expiration_hours);
        match &config.issuer {
            Some(issuer) => token_issuer.with_issuer(issuer),
            None => token_issuer,
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user: &User) -> Result<SessionToken, TokenError> {
        let mut claims = Claims::for_account(user.id, user.email.as_str(), self.expiration_hours)
            .map_err(|e| TokenError::IssueFailed(e.to_string()))?;
        if let Some(issuer) = &self.issuer {
            claims = claims.with_issuer(issuer);
        }

        self.handler
            .encode(&claims)
            .map(SessionToken::new)
            .map_err(|e| TokenError::IssueFailed(e.to_string()))
    }
}
