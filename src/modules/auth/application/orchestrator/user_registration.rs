use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, CreateUserOutput, ICreateUserUseCase,
};
use crate::auth::application::use_cases::delete_user::IDeleteUserUseCase;
use crate::profile::application::ports::incoming::use_cases::{
    CreateProfileError, CreateProfileUseCase,
};

// ============================================================================
// Registration Output
// ============================================================================

#[derive(Debug, Clone)]
pub struct UserRegistrationOutput {
    pub user_id: Uuid,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub profile_id: Uuid,
    pub message: String,
}

impl UserRegistrationOutput {
    fn new(user: CreateUserOutput, profile_id: Uuid) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            profile_id,
            message: "User created successfully. Your profile is ready to be completed."
                .to_string(),
        }
    }
}

// ============================================================================
// Registration Errors
// ============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRegistrationError {
    #[error("User creation failed: {0}")]
    CreateUserFailed(#[from] CreateUserError),

    #[error("Profile provisioning failed: {0}")]
    ProfileProvisioningFailed(String),

    /// The account outlived a failed provisioning and has no profile.
    #[error("Profile provisioning failed ({provisioning}) and account {user_id} was not rolled back: {rollback}")]
    AccountRollbackFailed {
        user_id: Uuid,
        provisioning: String,
        rollback: String,
    },
}

// ============================================================================
// User Registration (Orchestration Layer)
// ============================================================================

/// Every account owns exactly one profile from the moment it exists.
#[derive(Clone)]
pub struct UserRegistrationOrchestrator {
    create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
    create_profile_use_case: Arc<dyn CreateProfileUseCase + Send + Sync>,
    delete_user_use_case: Arc<dyn IDeleteUserUseCase + Send + Sync>,
}

impl UserRegistrationOrchestrator {
    pub fn new(
        create_user_use_case: Arc<dyn ICreateUserUseCase + Send + Sync>,
        create_profile_use_case: Arc<dyn CreateProfileUseCase + Send + Sync>,
        delete_user_use_case: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    ) -> Self {
        Self {
            create_user_use_case,
            create_profile_use_case,
            delete_user_use_case,
        }
    }

    /// 1. Creates the account
    /// 2. Provisions its default profile
    /// 3. On provisioning failure, deletes the account again
    pub async fn register_user(
        &self,
        input: CreateUserInput,
    ) -> Result<UserRegistrationOutput, UserRegistrationError> {
        let created_user = self.create_user_use_case.execute(input).await?;
        let user_id = UserId::from(created_user.user_id);

        match self.create_profile_use_case.execute(user_id).await {
            Ok(profile) => {
                tracing::info!(
                    user_id = %user_id,
                    profile_id = %profile.id,
                    "Profile provisioned for new account"
                );
                Ok(UserRegistrationOutput::new(created_user, profile.id))
            }
            Err(err) => {
                tracing::error!(
                    user_id = %user_id,
                    error = %err,
                    "Profile provisioning failed, rolling back account"
                );

                let provisioning = match err {
                    CreateProfileError::ProfileAlreadyExists => {
                        "profile already exists".to_string()
                    }
                    CreateProfileError::RepositoryError(msg) => msg,
                };

                match self.delete_user_use_case.execute(user_id).await {
                    Ok(()) => Err(UserRegistrationError::ProfileProvisioningFailed(provisioning)),
                    Err(rollback_err) => {
                        tracing::error!(
                            user_id = %user_id,
                            error = %rollback_err,
                            "Account rollback failed"
                        );
                        Err(UserRegistrationError::AccountRollbackFailed {
                            user_id: user_id.into(),
                            provisioning,
                            rollback: rollback_err.to_string(),
                        })
                    }
                }
            }
        }
    }
}
