mod create_profile;
mod get_my_profile;
mod get_public_profile;
mod list_agents;
mod list_top_agents;
mod patch_profile;
mod rate_agent;

pub use create_profile::{CreateProfileError, CreateProfileUseCase};
pub use get_my_profile::{GetMyProfileError, GetMyProfileUseCase};
pub use get_public_profile::{GetPublicProfileError, GetPublicProfileUseCase};
pub use list_agents::{AgentListQuery, ListAgentsError, ListAgentsUseCase};
pub use list_top_agents::{ListTopAgentsError, ListTopAgentsUseCase};
pub use patch_profile::{PatchProfileError, PatchProfileInput, PatchProfileUseCase};
pub use rate_agent::{RateAgentError, RateAgentUseCase};
