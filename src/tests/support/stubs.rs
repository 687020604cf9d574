use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::use_cases::create_user::{
    CreateUserError, CreateUserInput, CreateUserOutput, ICreateUserUseCase,
};
use crate::auth::application::use_cases::delete_user::{DeleteUserError, IDeleteUserUseCase};
use crate::auth::application::use_cases::login_user::{
    ILoginUserUseCase, LoginError, LoginRequest, LoginResponse, LoginUserInfo,
};
use crate::profile::application::domain::entities::Profile;
use crate::profile::application::ports::incoming::use_cases::{
    AgentListQuery, CreateProfileError, CreateProfileUseCase, GetMyProfileError,
    GetMyProfileUseCase, GetPublicProfileError, GetPublicProfileUseCase, ListAgentsError,
    ListAgentsUseCase, ListTopAgentsError, ListTopAgentsUseCase, PatchProfileError,
    PatchProfileInput, PatchProfileUseCase, RateAgentError, RateAgentUseCase,
};
use crate::profile::application::ports::outgoing::profile_query::{PageRequest, PageResult};

// ============================================================================
// Fixtures
// ============================================================================

pub fn sample_profile(user_id: Uuid) -> Profile {
    Profile::with_defaults(UserId::from(user_id))
}

pub fn sample_agent(user_id: Uuid) -> Profile {
    Profile {
        is_agent: true,
        license: Some("RE-20391".to_string()),
        ..sample_profile(user_id)
    }
}

// ============================================================================
// Auth
// ============================================================================

#[derive(Clone)]
pub struct StubCreateUserUseCase {
    result: Result<(), CreateUserError>,
}

impl StubCreateUserUseCase {
    pub fn ok() -> Self {
        Self { result: Ok(()) }
    }

    pub fn err(err: CreateUserError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl ICreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, input: CreateUserInput) -> Result<CreateUserOutput, CreateUserError> {
        self.result.clone().map(|_| CreateUserOutput {
            user_id: Uuid::new_v4(),
            username: input.username,
            email: input.email,
            first_name: input.first_name,
            last_name: input.last_name,
        })
    }
}

#[derive(Clone)]
pub struct StubDeleteUserUseCase {
    result: Result<(), DeleteUserError>,
    seen: Arc<Mutex<Vec<UserId>>>,
}

impl StubDeleteUserUseCase {
    pub fn ok() -> Self {
        Self {
            result: Ok(()),
            seen: Arc::default(),
        }
    }

    pub fn err(err: DeleteUserError) -> Self {
        Self {
            result: Err(err),
            seen: Arc::default(),
        }
    }

    /// Accounts passed to `execute`, in call order.
    pub fn seen(&self) -> Arc<Mutex<Vec<UserId>>> {
        self.seen.clone()
    }
}

#[async_trait]
impl IDeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteUserError> {
        self.seen.lock().unwrap().push(user_id);
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubLoginUserUseCase {
    result: Result<String, LoginError>,
}

impl StubLoginUserUseCase {
    pub fn ok(access_token: &str) -> Self {
        Self {
            result: Ok(access_token.to_string()),
        }
    }

    pub fn err(err: LoginError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl ILoginUserUseCase for StubLoginUserUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError> {
        self.result.clone().map(|access_token| LoginResponse {
            access_token,
            user: LoginUserInfo {
                id: Uuid::new_v4(),
                username: "dana_levi".to_string(),
                email: request.email().to_string(),
            },
        })
    }
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Clone)]
pub struct StubCreateProfileUseCase {
    result: Result<(), CreateProfileError>,
}

impl StubCreateProfileUseCase {
    pub fn ok() -> Self {
        Self { result: Ok(()) }
    }

    pub fn err(err: CreateProfileError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl CreateProfileUseCase for StubCreateProfileUseCase {
    async fn execute(&self, user_id: UserId) -> Result<Profile, CreateProfileError> {
        self.result
            .clone()
            .map(|_| Profile::with_defaults(user_id))
    }
}

#[derive(Clone)]
pub struct StubGetMyProfileUseCase {
    result: Result<Profile, GetMyProfileError>,
}

impl StubGetMyProfileUseCase {
    pub fn ok(profile: Profile) -> Self {
        Self {
            result: Ok(profile),
        }
    }

    pub fn err(err: GetMyProfileError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetMyProfileUseCase for StubGetMyProfileUseCase {
    async fn execute(&self, _user_id: UserId) -> Result<Profile, GetMyProfileError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubGetPublicProfileUseCase {
    result: Result<Profile, GetPublicProfileError>,
}

impl StubGetPublicProfileUseCase {
    pub fn ok(profile: Profile) -> Self {
        Self {
            result: Ok(profile),
        }
    }

    pub fn err(err: GetPublicProfileError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl GetPublicProfileUseCase for StubGetPublicProfileUseCase {
    async fn execute(&self, _profile_id: Uuid) -> Result<Profile, GetPublicProfileError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubPatchProfileUseCase {
    result: Result<Profile, PatchProfileError>,
    seen: Arc<Mutex<Option<(UserId, PatchProfileInput)>>>,
}

impl StubPatchProfileUseCase {
    pub fn ok(profile: Profile) -> Self {
        Self {
            result: Ok(profile),
            seen: Arc::default(),
        }
    }

    pub fn err(err: PatchProfileError) -> Self {
        Self {
            result: Err(err),
            seen: Arc::default(),
        }
    }

    pub fn seen(&self) -> Arc<Mutex<Option<(UserId, PatchProfileInput)>>> {
        self.seen.clone()
    }
}

#[async_trait]
impl PatchProfileUseCase for StubPatchProfileUseCase {
    async fn execute(
        &self,
        user_id: UserId,
        input: PatchProfileInput,
    ) -> Result<Profile, PatchProfileError> {
        *self.seen.lock().unwrap() = Some((user_id, input));
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubListAgentsUseCase {
    result: Result<(Vec<Profile>, u64), ListAgentsError>,
    seen: Arc<Mutex<Option<(AgentListQuery, PageRequest)>>>,
}

impl StubListAgentsUseCase {
    pub fn ok(items: Vec<Profile>, total: u64) -> Self {
        Self {
            result: Ok((items, total)),
            seen: Arc::default(),
        }
    }

    pub fn err(err: ListAgentsError) -> Self {
        Self {
            result: Err(err),
            seen: Arc::default(),
        }
    }

    pub fn seen(&self) -> Arc<Mutex<Option<(AgentListQuery, PageRequest)>>> {
        self.seen.clone()
    }
}

#[async_trait]
impl ListAgentsUseCase for StubListAgentsUseCase {
    async fn execute(
        &self,
        query: AgentListQuery,
        page: PageRequest,
    ) -> Result<PageResult<Profile>, ListAgentsError> {
        *self.seen.lock().unwrap() = Some((query, page.clone()));
        self.result.clone().map(|(items, total)| PageResult {
            items,
            page: page.page,
            per_page: page.per_page,
            total,
        })
    }
}

#[derive(Clone)]
pub struct StubListTopAgentsUseCase {
    result: Result<Vec<Profile>, ListTopAgentsError>,
}

impl StubListTopAgentsUseCase {
    pub fn ok(agents: Vec<Profile>) -> Self {
        Self { result: Ok(agents) }
    }

    pub fn err(err: ListTopAgentsError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl ListTopAgentsUseCase for StubListTopAgentsUseCase {
    async fn execute(&self, _limit: u64) -> Result<Vec<Profile>, ListTopAgentsError> {
        self.result.clone()
    }
}

#[derive(Clone)]
pub struct StubRateAgentUseCase {
    result: Result<Profile, RateAgentError>,
}

impl StubRateAgentUseCase {
    pub fn ok(profile: Profile) -> Self {
        Self {
            result: Ok(profile),
        }
    }

    pub fn err(err: RateAgentError) -> Self {
        Self { result: Err(err) }
    }
}

#[async_trait]
impl RateAgentUseCase for StubRateAgentUseCase {
    async fn execute(
        &self,
        _rater: UserId,
        _profile_id: Uuid,
        _score: i64,
    ) -> Result<Profile, RateAgentError> {
        self.result.clone()
    }
}
