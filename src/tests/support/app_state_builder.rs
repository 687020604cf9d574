use actix_web::web;
use std::sync::Arc;

use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::use_cases::delete_user::IDeleteUserUseCase;
use crate::auth::application::use_cases::login_user::{ILoginUserUseCase, LoginError};
use crate::profile::application::ports::incoming::use_cases::{
    CreateProfileError, GetMyProfileError, GetMyProfileUseCase, GetPublicProfileError,
    GetPublicProfileUseCase, ListAgentsError, ListAgentsUseCase, ListTopAgentsError,
    ListTopAgentsUseCase, PatchProfileError, PatchProfileUseCase, RateAgentError,
    RateAgentUseCase,
};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Unwired profile and login slots answer with errors, so a test only wires
/// what it exercises.
pub struct TestAppStateBuilder {
    register_user: Arc<UserRegistrationOrchestrator>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    delete_user: Arc<dyn IDeleteUserUseCase + Send + Sync>,
    profile: ProfileUseCases,
}

pub fn default_test_user_registration_orchestrator() -> Arc<UserRegistrationOrchestrator> {
    Arc::new(UserRegistrationOrchestrator::new(
        Arc::new(StubCreateUserUseCase::ok()),
        Arc::new(StubCreateProfileUseCase::ok()),
        Arc::new(StubDeleteUserUseCase::ok()),
    ))
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let unconfigured = || "not configured in this test".to_string();

        Self {
            register_user: default_test_user_registration_orchestrator(),
            login_user: Arc::new(StubLoginUserUseCase::err(LoginError::QueryError(
                unconfigured(),
            ))),
            delete_user: Arc::new(StubDeleteUserUseCase::ok()),
            profile: ProfileUseCases {
                create: Arc::new(StubCreateProfileUseCase::err(
                    CreateProfileError::RepositoryError(unconfigured()),
                )),
                get_mine: Arc::new(StubGetMyProfileUseCase::err(GetMyProfileError::NotFound)),
                get_public: Arc::new(StubGetPublicProfileUseCase::err(
                    GetPublicProfileError::NotFound,
                )),
                patch: Arc::new(StubPatchProfileUseCase::err(
                    PatchProfileError::RepositoryError(unconfigured()),
                )),
                list_agents: Arc::new(StubListAgentsUseCase::err(ListAgentsError::QueryFailed(
                    unconfigured(),
                ))),
                list_top_agents: Arc::new(StubListTopAgentsUseCase::err(
                    ListTopAgentsError::QueryFailed(unconfigured()),
                )),
                rate_agent: Arc::new(StubRateAgentUseCase::err(RateAgentError::RepositoryError(
                    unconfigured(),
                ))),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_register_user_orchestrator(
        mut self,
        orchestrator: Arc<UserRegistrationOrchestrator>,
    ) -> Self {
        self.register_user = orchestrator;
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_delete_user(
        mut self,
        uc: impl IDeleteUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.delete_user = Arc::new(uc);
        self
    }

    pub fn with_get_my_profile(
        mut self,
        uc: impl GetMyProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.get_mine = Arc::new(uc);
        self
    }

    pub fn with_get_public_profile(
        mut self,
        uc: impl GetPublicProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.get_public = Arc::new(uc);
        self
    }

    pub fn with_patch_profile(
        mut self,
        uc: impl PatchProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.patch = Arc::new(uc);
        self
    }

    pub fn with_list_agents(mut self, uc: impl ListAgentsUseCase + Send + Sync + 'static) -> Self {
        self.profile.list_agents = Arc::new(uc);
        self
    }

    pub fn with_list_top_agents(
        mut self,
        uc: impl ListTopAgentsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.list_top_agents = Arc::new(uc);
        self
    }

    pub fn with_rate_agent(mut self, uc: impl RateAgentUseCase + Send + Sync + 'static) -> Self {
        self.profile.rate_agent = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_orchestrator: self.register_user,
            login_user_use_case: self.login_user,
            delete_user_use_case: self.delete_user,
            profile: self.profile,
        })
    }
}
