mod create_profile_service;
mod get_my_profile_service;
mod get_public_profile_service;
mod list_agents_service;
mod list_top_agents_service;
mod patch_profile_service;
mod rate_agent_service;

pub use create_profile_service::CreateProfileService;
pub use get_my_profile_service::GetMyProfileService;
pub use get_public_profile_service::GetPublicProfileService;
pub use list_agents_service::ListAgentsService;
pub use list_top_agents_service::ListTopAgentsService;
pub use patch_profile_service::PatchProfileService;
pub use rate_agent_service::RateAgentService;
