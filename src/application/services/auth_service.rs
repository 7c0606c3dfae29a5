//! Authentication Service
//!
//! Handles user registration, credential checks, and JWT access tokens.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtSettings;
use crate::domain::{User, UserRepository};
use crate::shared::error::AppError;
use crate::shared::password::{hash_password, verify_password};

/// Authentication service trait for dependency injection
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user and issue an access token for it
    async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<(User, String), AuthError>;

    /// Authenticate user with credentials
    async fn authenticate(&self, email: &str, password: &str) -> Result<(User, String), AuthError>;

    /// Validate an access token and return the id of the account it names.
    ///
    /// A well-signed token whose account has since been deleted is invalid.
    async fn validate_token(&self, access_token: &str) -> Result<String, AuthError>;
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Unique token ID
    pub jti: String,
}

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("user already exists")]
    EmailExists,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Storage(#[from] AppError),
}

/// Signs and verifies HS256 access tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    settings: JwtSettings,
}

impl TokenIssuer {
    pub fn new(settings: JwtSettings) -> Self {
        Self { settings }
    }

    /// Issue an access token whose subject is `user_id`.
    pub fn issue(&self, user_id: &str) -> Result<String, AuthError> {
        let now = Utc::now();
        let expiry = now + Duration::minutes(self.settings.access_token_expiry_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expiry.timestamp(),
            iat: now.timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.settings.secret.as_bytes()),
        )
        .map_err(|e| AuthError::Internal(format!("Token generation failed: {}", e)))
    }

    /// Decode and validate an access token.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.settings.secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::InvalidToken,
        })?;

        Ok(token_data.claims)
    }
}

/// AuthService implementation
pub struct AuthServiceImpl<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: TokenIssuer,
}

impl<U> AuthServiceImpl<U>
where
    U: UserRepository,
{
    /// Create a new AuthServiceImpl
    pub fn new(user_repo: Arc<U>, jwt_settings: JwtSettings) -> Self {
        Self {
            user_repo,
            tokens: TokenIssuer::new(jwt_settings),
        }
    }
}

#[async_trait]
impl<U> AuthService for AuthServiceImpl<U>
where
    U: UserRepository + 'static,
{
    async fn register(
        &self,
        email: &str,
        password: &str,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Result<(User, String), AuthError> {
        if self.user_repo.email_exists(email).await? {
            return Err(AuthError::EmailExists);
        }

        let password_hash = hash_password(password)?;
        let user = User::new(email.to_string(), password_hash, first_name, last_name);

        // A concurrent registration can still win the race; the unique index
        // reports it as a conflict.
        let created = self.user_repo.create(&user).await.map_err(|e| match e {
            AppError::Conflict(..) => AuthError::EmailExists,
            other => AuthError::Storage(other),
        })?;

        let token = self.tokens.issue(&created.id)?;
        tracing::info!(user_id = %created.id, "User registered");

        Ok((created, token))
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<(User, String), AuthError> {
        let user = self
            .user_repo
            .find_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            tracing::debug!(user_id = %user.id, "Password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user.id)?;
        Ok((user, token))
    }

    async fn validate_token(&self, access_token: &str) -> Result<String, AuthError> {
        let claims = self.tokens.verify(access_token)?;

        match self.user_repo.find_by_id(&claims.sub).await? {
            Some(user) => Ok(user.id),
            None => {
                tracing::debug!(user_id = %claims.sub, "Token subject no longer exists");
                Err(AuthError::InvalidToken)
            }
        }
    }
}
