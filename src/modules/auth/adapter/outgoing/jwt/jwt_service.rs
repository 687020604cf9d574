use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use std::fmt;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider, ACCESS_TOKEN_TYPE,
};

use super::jwt_config::JwtConfig;

#[derive(Clone)]
pub struct JwtTokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl fmt::Debug for JwtTokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtTokenService")
            .field("issuer", &self.config.issuer)
            .finish()
    }
}

impl JwtTokenService {
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret_key.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret_key.as_bytes());

        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    fn generate_token(
        &self,
        user_id: Uuid,
        token_type: &str,
        expiry_seconds: i64,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(expiry_seconds);

        let claims = TokenClaims {
            sub: user_id,
            exp: expiration.timestamp(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            iss: self.config.issuer.clone(),
            token_type: token_type.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingError(e.to_string()))
    }
}

impl TokenProvider for JwtTokenService {
    fn generate_access_token(&self, user_id: Uuid) -> Result<String, TokenError> {
        self.generate_token(user_id, ACCESS_TOKEN_TYPE, self.config.access_token_expiry)
    }

    /// Verify signature, expiry and issuer, then decode the claims
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 30;
        validation.validate_nbf = true;
        validation.set_issuer(&[self.config.issuer.as_str()]);

        let decoded =
            decode::<TokenClaims>(token, &self.decoding_key, &validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;

                match e.kind() {
                    ErrorKind::ExpiredSignature => {
                        tracing::debug!("Token verification failed: Token expired");
                        TokenError::TokenExpired
                    }
                    ErrorKind::ImmatureSignature => {
                        tracing::warn!("Token verification failed: Token not yet valid");
                        TokenError::TokenNotYetValid
                    }
                    ErrorKind::InvalidSignature => {
                        tracing::error!("Security alert: Invalid token signature detected");
                        TokenError::InvalidSignature
                    }
                    ErrorKind::InvalidIssuer => {
                        tracing::warn!("Token verification failed: Unexpected issuer");
                        TokenError::MalformedToken
                    }
                    ErrorKind::InvalidToken | ErrorKind::InvalidAlgorithm => {
                        tracing::error!("Security alert: Malformed or invalid algorithm token");
                        TokenError::MalformedToken
                    }
                    _ => {
                        tracing::warn!("Token verification failed: Malformed token");
                        TokenError::MalformedToken
                    }
                }
            })?;

        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "FAKE_JWT_SECRET_DO_NOT_USE_0123456789";

    fn config(issuer: &str, expiry: i64) -> JwtConfig {
        JwtConfig {
            secret_key: SECRET.to_string(),
            issuer: issuer.to_string(),
            access_token_expiry: expiry,
        }
    }

    fn create_test_jwt_service() -> JwtTokenService {
        JwtTokenService::new(config("test_issuer", 3600))
    }

    #[test]
    fn test_generate_and_verify_access_token() {
        let service = create_test_jwt_service();
        let user_id = Uuid::new_v4();

        let token = service.generate_access_token(user_id).unwrap();
        let claims = service.verify_token(&token).unwrap();

        assert_eq!(claims.sub, user_id);
        assert_eq!(claims.token_type, ACCESS_TOKEN_TYPE);
        assert_eq!(claims.iss, "test_issuer");
    }

    #[test]
    fn test_token_expiry_is_in_future() {
        let service = create_test_jwt_service();
        let token = service.generate_access_token(Uuid::new_v4()).unwrap();
        let claims = service.verify_token(&token).unwrap();

        let now = Utc::now().timestamp();
        assert!(claims.exp > now);
        assert!(claims.iat <= now);
        assert!(claims.nbf <= now);
    }

    #[test]
    fn test_invalid_token_verification() {
        let service = create_test_jwt_service();

        assert_eq!(
            service.verify_token("invalid.jwt.token").unwrap_err(),
            TokenError::MalformedToken
        );
    }

    #[test]
    fn test_expired_token() {
        // Beyond the 30 second leeway
        let service = JwtTokenService::new(config("test_issuer", -35));
        let token = service.generate_access_token(Uuid::new_v4()).unwrap();

        assert_eq!(
            service.verify_token(&token).unwrap_err(),
            TokenError::TokenExpired
        );
    }

    #[test]
    fn test_invalid_signature() {
        let service = create_test_jwt_service();
        let token = service.generate_access_token(Uuid::new_v4()).unwrap();

        let other = JwtTokenService::new(JwtConfig {
            secret_key: format!("{}_DIFFERENT", SECRET),
            ..config("test_issuer", 3600)
        });

        assert_eq!(
            other.verify_token(&token).unwrap_err(),
            TokenError::InvalidSignature
        );
    }

    #[test]
    fn test_foreign_issuer_rejected() {
        let foreign = JwtTokenService::new(config("someone_else", 3600));
        let token = foreign.generate_access_token(Uuid::new_v4()).unwrap();

        let service = create_test_jwt_service();
        assert_eq!(
            service.verify_token(&token).unwrap_err(),
            TokenError::MalformedToken
        );
    }

    #[test]
    fn test_jwt_service_debug_hides_secret() {
        let debug_str = format!("{:?}", create_test_jwt_service());
        assert!(debug_str.contains("JwtTokenService"));
        assert!(!debug_str.contains(SECRET));
    }
}
