use async_trait::async_trait;
use email_address::EmailAddress;
use regex::Regex;
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError,
};

const MIN_PASSWORD_LEN: usize = 8;
const MAX_PASSWORD_LEN: usize = 128;
const MAX_NAME_LEN: usize = 50;

fn username_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[A-Za-z0-9_]{3,30}$").expect("valid username regex"))
}

// ============================================================================
// Input / Output
// ============================================================================

#[derive(Debug, Clone)]
pub struct CreateUserInput {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone)]
pub struct CreateUserOutput {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateUserError {
    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("Invalid email: {0}")]
    InvalidEmail(String),

    #[error("Invalid password: {0}")]
    InvalidPassword(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),

    #[error("User already exists")]
    UserAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

// ============================================================================
// Use case
// ============================================================================

#[async_trait]
pub trait ICreateUserUseCase: Send + Sync {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError>;
}

#[derive(Clone)]
pub struct CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> CreateUserUseCase<Q, R>
where
    Q: UserQuery,
    R: UserRepository,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher + Send + Sync>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
        }
    }

    fn validate_username(username: &str) -> Result<String, CreateUserError> {
        let username = username.trim();
        if !username_pattern().is_match(username) {
            return Err(CreateUserError::InvalidUsername(
                "Username must be 3-30 characters of letters, digits or underscore".to_string(),
            ));
        }
        Ok(username.to_string())
    }

    fn validate_email(email: &str) -> Result<String, CreateUserError> {
        let email = email.trim();
        if !EmailAddress::is_valid(email) {
            return Err(CreateUserError::InvalidEmail(
                "Invalid email format".to_string(),
            ));
        }
        Ok(email.to_lowercase())
    }

    fn validate_password(password: &str) -> Result<(), CreateUserError> {
        let len = password.chars().count();
        if len < MIN_PASSWORD_LEN {
            return Err(CreateUserError::InvalidPassword(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            )));
        }
        if len > MAX_PASSWORD_LEN {
            return Err(CreateUserError::InvalidPassword(format!(
                "Password must be at most {} characters",
                MAX_PASSWORD_LEN
            )));
        }
        Ok(())
    }

    fn validate_name(field: &str, value: &str) -> Result<String, CreateUserError> {
        let value = value.trim();
        if value.is_empty() || value.chars().count() > MAX_NAME_LEN {
            return Err(CreateUserError::InvalidName(format!(
                "{} must be 1-{} characters",
                field, MAX_NAME_LEN
            )));
        }
        Ok(value.to_string())
    }
}

#[async_trait]
impl<Q, R> ICreateUserUseCase for CreateUserUseCase<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        let username = Self::validate_username(&input.username)?;
        let email = Self::validate_email(&input.email)?;
        Self::validate_password(&input.password)?;
        let first_name = Self::validate_name("First name", &input.first_name)?;
        let last_name = Self::validate_name("Last name", &input.last_name)?;

        // Pre-checks give a clean error; the unique indexes remain the real guard.
        let by_username = self
            .query
            .find_by_username(&username)
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;
        let by_email = self
            .query
            .find_by_email(&email)
            .await
            .map_err(|e| CreateUserError::RepositoryError(e.to_string()))?;

        if by_username.is_some() || by_email.is_some() {
            return Err(CreateUserError::UserAlreadyExists);
        }

        let password_hash = self
            .password_hasher
            .hash_password(&input.password)
            .await
            .map_err(|e| CreateUserError::HashingFailed(e.to_string()))?;

        let created = self
            .repository
            .create_user(CreateUserData {
                username,
                email,
                password_hash,
                first_name,
                last_name,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => CreateUserError::UserAlreadyExists,
                other => CreateUserError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(user_id = %created.id, "User account created");

        Ok(CreateUserOutput {
            user_id: created.id,
            username: created.username,
            email: created.email,
            first_name: created.first_name,
            last_name: created.last_name,
        })
    }
}
