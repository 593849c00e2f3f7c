//! Authentication utilities library
//!
//! Reusable credential infrastructure for the account service:
//! - Password hashing (Argon2id, salt returned alongside the hash)
//! - JWT bearer token generation and decoding
//!
//! Services define their own ports and adapt these implementations behind them.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hashed = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hashed.hash, &hashed.salt).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## JWT Tokens
//! ```
//! use auth::{JwtHandler, Claims};
//!
//! let handler = JwtHandler::new(b"secret_key_at_least_32_bytes_long!");
//! let claims = Claims::for_account("user123", "alice@example.com", 24).unwrap();
//! let token = handler.encode(&claims).unwrap();
//! let decoded: Claims = handler.decode(&token).unwrap();
//! assert_eq!(decoded.email(), Some("alice@example.com"));
//! ```

pub mod jwt;
pub mod password;

pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::HashedPassword;
pub use password::PasswordError;
pub use password::PasswordHasher;
