use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::{Gender, Profile, ReviewScore};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field not provided => keep DB value
// - Null: explicitly null => set DB column NULL (nullable columns only)
// - Value(v): replace with v
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[default]
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    /// Transforms a present value, keeping Unset and Null as they are.
    pub fn try_map<U, E, F>(self, f: F) -> Result<PatchField<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            PatchField::Unset => Ok(PatchField::Unset),
            PatchField::Null => Ok(PatchField::Null),
            PatchField::Value(v) => f(v).map(PatchField::Value),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Command data
// ──────────────────────────────────────────────────────────
//

/// Already validated owner changes. Only `license` may be `Null`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchProfileData {
    pub phone_number: PatchField<String>,
    pub about_me: PatchField<String>,
    pub license: PatchField<String>,
    pub profile_photo: PatchField<String>,
    pub gender: PatchField<Gender>,
    pub country: PatchField<String>,
    pub city: PatchField<String>,
    pub is_buyer: PatchField<bool>,
    pub is_seller: PatchField<bool>,
    pub is_agent: PatchField<bool>,
}

impl PatchProfileData {
    pub fn is_empty(&self) -> bool {
        self.phone_number.is_unset()
            && self.about_me.is_unset()
            && self.license.is_unset()
            && self.profile_photo.is_unset()
            && self.gender.is_unset()
            && self.country.is_unset()
            && self.city.is_unset()
            && self.is_buyer.is_unset()
            && self.is_seller.is_unset()
            && self.is_agent.is_unset()
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileRepositoryError {
    #[error("Profile not found")]
    NotFound,

    /// Unique violation on `user_id`.
    #[error("Profile already exists for this account")]
    ProfileAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (command side, profiles table only)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Inserts a row carrying every column default and a fresh public id.
    async fn create_default_profile(
        &self,
        user_id: UserId,
    ) -> Result<Profile, ProfileRepositoryError>;

    /// Applies owner changes and refreshes `updated_at`. Never writes
    /// `id`, `created_at`, `top_agent`, `rating` or `num_reviews`.
    async fn patch_profile(
        &self,
        user_id: UserId,
        data: PatchProfileData,
    ) -> Result<Profile, ProfileRepositoryError>;

    /// Folds one score into the running average in a single statement.
    /// Only agent profiles match; anything else is `NotFound`.
    async fn record_review(
        &self,
        profile_id: Uuid,
        score: ReviewScore,
    ) -> Result<Profile, ProfileRepositoryError>;
}
