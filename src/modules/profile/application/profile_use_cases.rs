use std::sync::Arc;

use crate::profile::application::ports::incoming::use_cases::{
    CreateProfileUseCase, GetMyProfileUseCase, GetPublicProfileUseCase, ListAgentsUseCase,
    ListTopAgentsUseCase, PatchProfileUseCase, RateAgentUseCase,
};

#[derive(Clone)]
pub struct ProfileUseCases {
    pub create: Arc<dyn CreateProfileUseCase + Send + Sync>,
    pub get_mine: Arc<dyn GetMyProfileUseCase + Send + Sync>,
    pub get_public: Arc<dyn GetPublicProfileUseCase + Send + Sync>,
    pub patch: Arc<dyn PatchProfileUseCase + Send + Sync>,
    pub list_agents: Arc<dyn ListAgentsUseCase + Send + Sync>,
    pub list_top_agents: Arc<dyn ListTopAgentsUseCase + Send + Sync>,
    pub rate_agent: Arc<dyn RateAgentUseCase + Send + Sync>,
}
