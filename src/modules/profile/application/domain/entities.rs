use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

// ============================================================================
// Column defaults
// ============================================================================

pub const DEFAULT_PHONE_NUMBER: &str = "+972549843454";
pub const DEFAULT_ABOUT_ME: &str = "Say something about yourself";
pub const DEFAULT_PROFILE_PHOTO: &str = "/profile_default.png";
pub const DEFAULT_COUNTRY: &str = "IL";
pub const DEFAULT_CITY: &str = "Tel-Aviv";

pub const PHONE_NUMBER_MAX_LEN: usize = 30;
pub const LICENSE_MAX_LEN: usize = 20;
pub const PROFILE_PHOTO_MAX_LEN: usize = 100;
pub const CITY_MAX_LEN: usize = 50;

// ============================================================================
// Validation errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("Invalid phone number: {0}")]
    InvalidPhoneNumber(String),

    #[error("Invalid country code: {0}")]
    InvalidCountry(String),

    #[error("Invalid gender: {0}")]
    InvalidGender(String),

    #[error("Review score must be between 1 and 5, got {0}")]
    InvalidScore(i64),

    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

impl ProfileValidationError {
    fn field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}

// ============================================================================
// Gender
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    #[default]
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ProfileValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(ProfileValidationError::InvalidGender(s.to_string())),
        }
    }
}

// ============================================================================
// PhoneNumber (E.164)
// ============================================================================

/// Region assumed for numbers written without a `+` calling code.
pub const DEFAULT_PHONE_REGION: phonenumber::country::Id = phonenumber::country::Id::IL;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parses national or international notation and keeps the E.164 form.
    pub fn parse(raw: &str) -> Result<Self, ProfileValidationError> {
        let invalid = || ProfileValidationError::InvalidPhoneNumber(raw.to_string());

        let parsed = phonenumber::parse(Some(DEFAULT_PHONE_REGION), raw.trim())
            .map_err(|_| invalid())?;

        if !phonenumber::is_valid(&parsed) {
            return Err(invalid());
        }

        let e164 = parsed.format().mode(phonenumber::Mode::E164).to_string();
        if e164.len() > PHONE_NUMBER_MAX_LEN {
            return Err(invalid());
        }

        Ok(Self(e164))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

// ============================================================================
// CountryCode (ISO 3166-1 alpha-2)
// ============================================================================

// Sorted for binary search.
const ISO_3166_ALPHA2: &[&str] = &[
    "AD", "AE", "AF", "AG", "AI", "AL", "AM", "AO", "AQ", "AR", "AS", "AT", "AU", "AW", "AX",
    "AZ", "BA", "BB", "BD", "BE", "BF", "BG", "BH", "BI", "BJ", "BL", "BM", "BN", "BO", "BQ",
    "BR", "BS", "BT", "BV", "BW", "BY", "BZ", "CA", "CC", "CD", "CF", "CG", "CH", "CI", "CK",
    "CL", "CM", "CN", "CO", "CR", "CU", "CV", "CW", "CX", "CY", "CZ", "DE", "DJ", "DK", "DM",
    "DO", "DZ", "EC", "EE", "EG", "EH", "ER", "ES", "ET", "FI", "FJ", "FK", "FM", "FO", "FR",
    "GA", "GB", "GD", "GE", "GF", "GG", "GH", "GI", "GL", "GM", "GN", "GP", "GQ", "GR", "GS",
    "GT", "GU", "GW", "GY", "HK", "HM", "HN", "HR", "HT", "HU", "ID", "IE", "IL", "IM", "IN",
    "IO", "IQ", "IR", "IS", "IT", "JE", "JM", "JO", "JP", "KE", "KG", "KH", "KI", "KM", "KN",
    "KP", "KR", "KW", "KY", "KZ", "LA", "LB", "LC", "LI", "LK", "LR", "LS", "LT", "LU", "LV",
    "LY", "MA", "MC", "MD", "ME", "MF", "MG", "MH", "MK", "ML", "MM", "MN", "MO", "MP", "MQ",
    "MR", "MS", "MT", "MU", "MV", "MW", "MX", "MY", "MZ", "NA", "NC", "NE", "NF", "NG", "NI",
    "NL", "NO", "NP", "NR", "NU", "NZ", "OM", "PA", "PE", "PF", "PG", "PH", "PK", "PL", "PM",
    "PN", "PR", "PS", "PT", "PW", "PY", "QA", "RE", "RO", "RS", "RU", "RW", "SA", "SB", "SC",
    "SD", "SE", "SG", "SH", "SI", "SJ", "SK", "SL", "SM", "SN", "SO", "SR", "SS", "ST", "SV",
    "SX", "SY", "SZ", "TC", "TD", "TF", "TG", "TH", "TJ", "TK", "TL", "TM", "TN", "TO", "TR",
    "TT", "TV", "TW", "TZ", "UA", "UG", "UM", "US", "UY", "UZ", "VA", "VC", "VE", "VG", "VI",
    "VN", "VU", "WF", "WS", "YE", "YT", "ZA", "ZM", "ZW",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryCode(String);

impl CountryCode {
    pub fn parse(raw: &str) -> Result<Self, ProfileValidationError> {
        let code = raw.trim().to_ascii_uppercase();

        if ISO_3166_ALPHA2.binary_search(&code.as_str()).is_err() {
            return Err(ProfileValidationError::InvalidCountry(raw.to_string()));
        }

        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

// ============================================================================
// ReviewScore
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReviewScore(u8);

impl ReviewScore {
    pub fn new(score: i64) -> Result<Self, ProfileValidationError> {
        match u8::try_from(score) {
            Ok(s) if (1..=5).contains(&s) => Ok(Self(s)),
            _ => Err(ProfileValidationError::InvalidScore(score)),
        }
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

// ============================================================================
// Free text fields
// ============================================================================

pub fn validate_about_me(raw: &str) -> Result<String, ProfileValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ProfileValidationError::field("about_me", "cannot be empty"));
    }
    Ok(value.to_string())
}

pub fn validate_license(raw: &str) -> Result<String, ProfileValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ProfileValidationError::field(
            "license",
            "cannot be empty, send null to clear it",
        ));
    }
    if value.chars().count() > LICENSE_MAX_LEN {
        return Err(ProfileValidationError::field(
            "license",
            format!("must be at most {} characters", LICENSE_MAX_LEN),
        ));
    }
    Ok(value.to_string())
}

pub fn validate_city(raw: &str) -> Result<String, ProfileValidationError> {
    let value = raw.trim();
    let len = value.chars().count();
    if len == 0 || len > CITY_MAX_LEN {
        return Err(ProfileValidationError::field(
            "city",
            format!("must be between 1 and {} characters", CITY_MAX_LEN),
        ));
    }
    Ok(value.to_string())
}

pub fn validate_profile_photo(raw: &str) -> Result<String, ProfileValidationError> {
    let value = raw.trim();
    let len = value.chars().count();
    if len == 0 || len > PROFILE_PHOTO_MAX_LEN {
        return Err(ProfileValidationError::field(
            "profile_photo",
            format!("must be between 1 and {} characters", PROFILE_PHOTO_MAX_LEN),
        ));
    }
    Ok(value.to_string())
}

// ============================================================================
// Profile
// ============================================================================

/// Public view of a `profiles` row. The surrogate `pkid` never leaves the
/// persistence adapter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: UserId,
    pub phone_number: String,
    pub about_me: String,
    pub license: Option<String>,
    pub profile_photo: String,
    pub gender: Gender,
    pub country: String,
    pub city: String,
    pub is_buyer: bool,
    pub is_seller: bool,
    pub is_agent: bool,
    pub top_agent: bool,
    pub rating: Option<Decimal>,
    pub num_reviews: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// A fresh profile carrying every column default.
    pub fn with_defaults(user_id: UserId) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            phone_number: DEFAULT_PHONE_NUMBER.to_string(),
            about_me: DEFAULT_ABOUT_ME.to_string(),
            license: None,
            profile_photo: DEFAULT_PROFILE_PHOTO.to_string(),
            gender: Gender::default(),
            country: DEFAULT_COUNTRY.to_string(),
            city: DEFAULT_CITY.to_string(),
            is_buyer: false,
            is_seller: false,
            is_agent: false,
            top_agent: false,
            rating: None,
            num_reviews: Some(0),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_defaults() {
        let user_id = UserId::from(Uuid::new_v4());
        let profile = Profile::with_defaults(user_id);

        assert_eq!(profile.user_id, user_id);
        assert_eq!(profile.phone_number, "+972549843454");
        assert_eq!(profile.about_me, "Say something about yourself");
        assert_eq!(profile.profile_photo, "/profile_default.png");
        assert_eq!(profile.gender, Gender::Other);
        assert_eq!(profile.country, "IL");
        assert_eq!(profile.city, "Tel-Aviv");
        assert!(!profile.is_buyer && !profile.is_seller && !profile.is_agent);
        assert!(!profile.top_agent);
        assert_eq!(profile.license, None);
        assert_eq!(profile.rating, None);
        assert_eq!(profile.num_reviews, Some(0));
        assert_eq!(profile.created_at, profile.updated_at);
    }

    #[test]
    fn test_profile_ids_are_unique() {
        let user_id = UserId::from(Uuid::new_v4());
        assert_ne!(
            Profile::with_defaults(user_id).id,
            Profile::with_defaults(user_id).id
        );
    }

    #[test]
    fn test_gender_parse() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(" Female ".parse::<Gender>().unwrap(), Gender::Female);
        assert_eq!("OTHER".parse::<Gender>().unwrap(), Gender::Other);
        assert!(matches!(
            "unknown".parse::<Gender>(),
            Err(ProfileValidationError::InvalidGender(_))
        ));
        assert_eq!(Gender::Female.to_string(), "Female");
    }

    #[test]
    fn test_phone_number_normalizes_separators() {
        let phone = PhoneNumber::parse("+972 (54) 984-3454").unwrap();
        assert_eq!(phone.as_str(), "+972549843454");
    }

    #[test]
    fn test_phone_number_national_form_uses_default_region() {
        let phone = PhoneNumber::parse("054-984-3454").unwrap();
        assert_eq!(phone.as_str(), "+972549843454");
    }

    #[test]
    fn test_phone_number_keeps_foreign_numbers_international() {
        let phone = PhoneNumber::parse("+1 650-253-0000").unwrap();
        assert_eq!(phone.as_str(), "+16502530000");
    }

    #[test]
    fn test_phone_number_rejects_unassigned_calling_code() {
        assert!(matches!(
            PhoneNumber::parse("+99912345678"),
            Err(ProfileValidationError::InvalidPhoneNumber(_))
        ));
    }

    #[test]
    fn test_phone_number_rejects_invalid() {
        for raw in ["12345", "+9725498434541234", "+972 12", "not a phone", ""] {
            assert!(
                matches!(
                    PhoneNumber::parse(raw),
                    Err(ProfileValidationError::InvalidPhoneNumber(_))
                ),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn test_country_code() {
        assert_eq!(CountryCode::parse("il").unwrap().as_str(), "IL");
        assert_eq!(CountryCode::parse(" us ").unwrap().as_str(), "US");
        assert!(CountryCode::parse("XX").is_err());
        assert!(CountryCode::parse("ISR").is_err());
    }

    #[test]
    fn test_country_list_is_sorted() {
        assert!(ISO_3166_ALPHA2.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_review_score_range() {
        assert_eq!(ReviewScore::new(1).unwrap().value(), 1);
        assert_eq!(ReviewScore::new(5).unwrap().as_decimal(), Decimal::from(5));
        assert_eq!(
            ReviewScore::new(0).unwrap_err(),
            ProfileValidationError::InvalidScore(0)
        );
        assert!(ReviewScore::new(6).is_err());
        assert!(ReviewScore::new(-3).is_err());
    }

    #[test]
    fn test_text_field_limits() {
        assert_eq!(validate_city("  Haifa ").unwrap(), "Haifa");
        assert!(validate_city("").is_err());
        assert!(validate_city(&"a".repeat(51)).is_err());

        assert!(validate_license(&"L".repeat(20)).is_ok());
        assert!(validate_license(&"L".repeat(21)).is_err());

        assert!(validate_profile_photo(&"p".repeat(101)).is_err());
        assert!(validate_about_me("   ").is_err());
    }
}
