pub mod profile_query;
pub mod profile_repository;

pub use profile_query::{AgentListFilter, PageRequest, PageResult, ProfileQuery, ProfileQueryError};
pub use profile_repository::{
    PatchField, PatchProfileData, ProfileRepository, ProfileRepositoryError,
};
