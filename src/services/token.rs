use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Identity claims carried by an issued token. No expiry claim is set and
/// none is enforced on verification.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token missing or invalid")]
    Missing,
    #[error("{0}")]
    Invalid(#[from] jsonwebtoken::errors::Error),
}

/// Issues and verifies HS256-signed identity tokens. The signing secret is
/// injected at construction and never read from ambient state.
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn issue(&self, id: Uuid, username: &str) -> Result<String, TokenError> {
        let claims = Claims {
            id,
            username: username.to_string(),
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let data = decode::<Claims>(token, &self.decoding, &self.validation)?;
        Ok(data.claims)
    }
}
