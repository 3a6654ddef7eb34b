/// Authentication service - JWT and password handling
use crate::error::{AppError, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone)]
pub struct AuthService {
    secret: String,
    token_expiration: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (username)
    pub exp: i64,    // Expiration time
    pub iat: i64,    // Issued at
}

impl AuthService {
    pub fn new(secret: String, expiration_hours: u64) -> Self {
        Self {
            secret,
            token_expiration: Duration::hours(i64::try_from(expiration_hours).unwrap_or(24)),
        }
    }

    /// Hash a password using bcrypt
    pub fn hash_password(&self, password: &str) -> Result<String> {
        bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(AppError::from)
    }

    /// Verify a password against a hash
    pub fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        bcrypt::verify(password, hash).map_err(AppError::from)
    }

    /// Create an access token for a username
    pub fn create_access_token(&self, username: &str) -> Result<String> {
        let now = Utc::now();
        let exp = now + self.token_expiration;

        let claims = Claims {
            sub: username.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        let encoding_key = EncodingKey::from_secret(self.secret.as_bytes());
        encode(&Header::default(), &claims, &encoding_key).map_err(AppError::from)
    }

    /// Verify a token and return the username it was issued for
    pub fn verify_access_token(&self, token: &str) -> Result<String> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_bytes());
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &decoding_key, &validation)?;
        Ok(token_data.claims.sub)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing() {
        let auth = AuthService::new("secret".to_string(), 24);
        let password = "my_secure_password";

        let hash = auth.hash_password(password).unwrap();
        assert!(auth.verify_password(password, &hash).unwrap());
        assert!(!auth.verify_password("wrong_password", &hash).unwrap());
    }

    #[test]
    fn test_token_creation_and_verification() {
        let auth = AuthService::new("secret".to_string(), 24);

        let token = auth.create_access_token("alice").unwrap();
        let username = auth.verify_access_token(&token).unwrap();
        assert_eq!(username, "alice");
    }

    #[test]
    fn test_token_rejected_with_wrong_secret() {
        let auth = AuthService::new("secret".to_string(), 24);
        let other = AuthService::new("other-secret".to_string(), 24);

        let token = auth.create_access_token("alice").unwrap();
        assert!(other.verify_access_token(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let auth = AuthService::new("secret".to_string(), 24);
        assert!(auth.verify_access_token("not.a.token").is_err());
    }
}
