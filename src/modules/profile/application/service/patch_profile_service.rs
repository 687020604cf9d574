use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::profile::application::domain::entities::{
    validate_about_me, validate_city, validate_license, validate_profile_photo, CountryCode,
    Gender, PhoneNumber, Profile, ProfileValidationError,
};
use crate::profile::application::ports::incoming::use_cases::{
    PatchProfileError, PatchProfileInput, PatchProfileUseCase,
};
use crate::profile::application::ports::outgoing::profile_repository::{
    PatchField, PatchProfileData, ProfileRepository, ProfileRepositoryError,
};

pub struct PatchProfileService<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
}

impl<R> PatchProfileService<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repository: R) -> Self {
        Self { profile_repository }
    }
}

/// Rejects `null` on a NOT NULL column.
fn required<T>(
    field: &'static str,
    value: PatchField<T>,
) -> Result<PatchField<T>, ProfileValidationError> {
    if value.is_null() {
        return Err(ProfileValidationError::InvalidField {
            field,
            reason: "cannot be null".to_string(),
        });
    }
    Ok(value)
}

fn validate(input: PatchProfileInput) -> Result<PatchProfileData, ProfileValidationError> {
    Ok(PatchProfileData {
        phone_number: required("phone_number", input.phone_number)?
            .try_map(|v| PhoneNumber::parse(&v).map(PhoneNumber::into_inner))?,
        about_me: required("about_me", input.about_me)?.try_map(|v| validate_about_me(&v))?,
        license: input.license.try_map(|v| validate_license(&v))?,
        profile_photo: required("profile_photo", input.profile_photo)?
            .try_map(|v| validate_profile_photo(&v))?,
        gender: required("gender", input.gender)?.try_map(|v| v.parse::<Gender>())?,
        country: required("country", input.country)?
            .try_map(|v| CountryCode::parse(&v).map(CountryCode::into_inner))?,
        city: required("city", input.city)?.try_map(|v| validate_city(&v))?,
        is_buyer: required("is_buyer", input.is_buyer)?,
        is_seller: required("is_seller", input.is_seller)?,
        is_agent: required("is_agent", input.is_agent)?,
    })
}

#[async_trait]
impl<R> PatchProfileUseCase for PatchProfileService<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        input: PatchProfileInput,
    ) -> Result<Profile, PatchProfileError> {
        let data = validate(input).map_err(|e| {
            tracing::warn!(user_id = %user_id, error = %e, "Rejected profile patch");
            e
        })?;

        if data.is_empty() {
            return Err(PatchProfileError::EmptyPatch);
        }

        self.profile_repository
            .patch_profile(user_id, data)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => PatchProfileError::NotFound,
                ProfileRepositoryError::DatabaseError(msg) => {
                    PatchProfileError::RepositoryError(msg)
                }
                ProfileRepositoryError::ProfileAlreadyExists => PatchProfileError::RepositoryError(
                    "unexpected uniqueness conflict while patching profile".to_string(),
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::application::domain::entities::ReviewScore;
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Default)]
    struct RecordingRepo {
        seen: Mutex<Option<PatchProfileData>>,
        fail_with: Option<ProfileRepositoryError>,
    }

    #[async_trait]
    impl ProfileRepository for RecordingRepo {
        async fn create_default_profile(
            &self,
            _user_id: UserId,
        ) -> Result<Profile, ProfileRepositoryError> {
            unimplemented!("not used")
        }

        async fn patch_profile(
            &self,
            user_id: UserId,
            data: PatchProfileData,
        ) -> Result<Profile, ProfileRepositoryError> {
            *self.seen.lock().unwrap() = Some(data);
            match &self.fail_with {
                Some(e) => Err(e.clone()),
                None => Ok(Profile::with_defaults(user_id)),
            }
        }

        async fn record_review(
            &self,
            _profile_id: Uuid,
            _score: ReviewScore,
        ) -> Result<Profile, ProfileRepositoryError> {
            unimplemented!("not used")
        }
    }

    fn user() -> UserId {
        UserId::from(Uuid::new_v4())
    }

    #[tokio::test]
    async fn test_patch_normalizes_values() {
        let service = PatchProfileService::new(RecordingRepo::default());

        service
            .execute(
                user(),
                PatchProfileInput {
                    phone_number: PatchField::Value("+972 54-111-2222".to_string()),
                    gender: PatchField::Value("female".to_string()),
                    country: PatchField::Value("us".to_string()),
                    city: PatchField::Value(" Boston ".to_string()),
                    license: PatchField::Null,
                    is_agent: PatchField::Value(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let data = service.profile_repository.seen.lock().unwrap().clone().unwrap();
        assert_eq!(data.phone_number, PatchField::Value("+972541112222".to_string()));
        assert_eq!(data.gender, PatchField::Value(Gender::Female));
        assert_eq!(data.country, PatchField::Value("US".to_string()));
        assert_eq!(data.city, PatchField::Value("Boston".to_string()));
        assert!(data.license.is_null());
        assert_eq!(data.is_agent, PatchField::Value(true));
        assert!(data.about_me.is_unset());
    }

    #[tokio::test]
    async fn test_patch_rejects_invalid_phone_before_repository() {
        let service = PatchProfileService::new(RecordingRepo::default());

        let err = service
            .execute(
                user(),
                PatchProfileInput {
                    phone_number: PatchField::Value("12345".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PatchProfileError::Validation(ProfileValidationError::InvalidPhoneNumber(_))
        ));
        assert!(service.profile_repository.seen.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_patch_rejects_unknown_gender_and_country() {
        let service = PatchProfileService::new(RecordingRepo::default());

        let gender_err = service
            .execute(
                user(),
                PatchProfileInput {
                    gender: PatchField::Value("robot".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            gender_err,
            PatchProfileError::Validation(ProfileValidationError::InvalidGender(_))
        ));

        let country_err = service
            .execute(
                user(),
                PatchProfileInput {
                    country: PatchField::Value("ZZ".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            country_err,
            PatchProfileError::Validation(ProfileValidationError::InvalidCountry(_))
        ));
    }

    #[tokio::test]
    async fn test_patch_rejects_null_on_required_field() {
        let service = PatchProfileService::new(RecordingRepo::default());

        let err = service
            .execute(
                user(),
                PatchProfileInput {
                    city: PatchField::Null,
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PatchProfileError::Validation(ProfileValidationError::InvalidField { field: "city", .. })
        ));
    }

    #[tokio::test]
    async fn test_patch_empty_is_rejected() {
        let service = PatchProfileService::new(RecordingRepo::default());

        assert_eq!(
            service
                .execute(user(), PatchProfileInput::default())
                .await
                .unwrap_err(),
            PatchProfileError::EmptyPatch
        );
    }

    #[tokio::test]
    async fn test_patch_profile_not_found() {
        let service = PatchProfileService::new(RecordingRepo {
            fail_with: Some(ProfileRepositoryError::NotFound),
            ..Default::default()
        });

        let err = service
            .execute(
                user(),
                PatchProfileInput {
                    is_buyer: PatchField::Value(true),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err, PatchProfileError::NotFound);
    }
}
