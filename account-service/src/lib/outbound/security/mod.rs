pub mod argon2;
pub mod jwt;

pub use self::argon2::Argon2PasswordHasher;
pub use self::jwt::JwtTokenIssuer;
