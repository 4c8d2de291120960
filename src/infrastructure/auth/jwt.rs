use actix_web::{http::header, HttpRequest};
use jsonwebtoken::{encode, Header, decode, Validation, TokenData, Algorithm};
use chrono::{Utc, Duration};

use crate::entities::{owner::OwnerId, token::Claims};
use crate::repositories::session::SessionResolver;
use crate::settings::{AppConfig, JwtKeys};
use crate::errors::AuthError;

const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

/// Verifies session tokens signed with the secret shared with the identity
/// provider, and resolves them to an [`OwnerId`].
#[derive(Clone)]
pub struct JwtService {
    keys: JwtKeys,
    expiration: Duration,
    cookie_name: String,
}

impl JwtService {
    pub fn new(config: &AppConfig) -> Self {
        JwtService {
            keys: JwtKeys::from(config),
            expiration: Duration::minutes(config.jwt_expiration_minutes),
            cookie_name: config.session_cookie_name.clone(),
        }
    }

    pub fn create_jwt(&self, owner_id: &OwnerId) -> Result<String, AuthError> {
        self.create_jwt_with_ttl(owner_id, self.expiration)
    }

    pub fn create_jwt_with_ttl(&self, owner_id: &OwnerId, ttl: Duration) -> Result<String, AuthError> {
        let now = Utc::now();
        let exp = (now + ttl).timestamp();
        if exp < 0 {
            return Err(AuthError::TokenCreation);
        }

        let claims = Claims {
            sub: owner_id.to_string(),
            exp: exp as usize,
            iat: now.timestamp() as usize,
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.keys.encoding).map_err(|e| {
            tracing::warn!("Failed to create JWT: {}", e);
            AuthError::TokenCreation
        })
    }

    pub fn decode_jwt(&self, token: &str) -> Result<TokenData<Claims>, AuthError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &self.keys.decoding,
            &validation
        )
        .map_err(AuthError::from)
    }

    /// Owner named by a valid token.
    pub fn owner_from_token(&self, token: &str) -> Result<OwnerId, AuthError> {
        let claims = self.decode_jwt(token)?.claims;
        OwnerId::new(claims.sub).ok_or(AuthError::InvalidSubject)
    }

    /// Bearer token from the `Authorization` header, falling back to the
    /// session cookie.
    pub fn extract_token(&self, req: &HttpRequest) -> Option<String> {
        let bearer = req
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .and_then(|header| {
                let parts: Vec<&str> = header.split_whitespace().collect();
                if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                    Some(parts[1].to_string())
                } else {
                    None
                }
            });

        bearer.or_else(|| {
            req.cookie(&self.cookie_name)
                .map(|cookie| cookie.value().to_string())
                .filter(|value| !value.is_empty())
        })
    }
}

impl SessionResolver for JwtService {
    fn resolve_identity(&self, req: &HttpRequest) -> Option<OwnerId> {
        let Some(token) = self.extract_token(req) else {
            tracing::debug!("No session token on request");
            return None;
        };

        match self.owner_from_token(&token) {
            Ok(owner_id) => Some(owner_id),
            Err(e) => {
                tracing::warn!("Rejected session token: {}", e);
                None
            }
        }
    }
}
