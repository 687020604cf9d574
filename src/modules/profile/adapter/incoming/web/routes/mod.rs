mod dto;
pub mod get_my_profile;
pub mod get_public_profile;
pub mod list_agents;
pub mod list_top_agents;
pub mod patch_my_profile;
pub mod rate_agent;

pub use dto::{AgentPageResponse, ProfileResponse};
pub use get_my_profile::get_my_profile_handler;
pub use get_public_profile::get_public_profile_handler;
pub use list_agents::{list_agents_handler, AgentListParams};
pub use list_top_agents::{list_top_agents_handler, TopAgentsParams};
pub use patch_my_profile::{patch_my_profile_handler, PatchProfileRequest};
pub use rate_agent::{rate_agent_handler, RateAgentRequest};
