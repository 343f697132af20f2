//! User profile domain type
//!
//! `UserProfile` is the validated, typed form of one record from the
//! profile endpoint. The raw wire shape lives in [`models`]; conversion
//! happens once at the boundary in [`UserProfile::from_json`], so nothing
//! past this module ever touches untyped payload data.

pub mod models;

use crate::fetch::FetchError;
use chrono::{DateTime, Utc};
use models::{ApiResponse, RawUser};
use std::fmt::{self, Write};

/// Placeholder shown in the image slot when the record has no picture URL
pub const PLACEHOLDER_PICTURE: &str = "/placeholder.svg";

/// Gender as reported by the provider
///
/// The provider documents "male" and "female"; anything else is kept
/// verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other(String),
}

impl Gender {
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "male" => Self::Male,
            "female" => Self::Female,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// Raw provider value
    pub fn as_str(&self) -> &str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other(s) => s,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single user profile, read-only once parsed
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub phone: String,
    pub email: String,
    pub city: String,
    pub country: String,
    pub date_of_birth: DateTime<Utc>,
    /// Large picture URL, `None` when absent or empty
    pub picture_url: Option<String>,
}

impl UserProfile {
    /// Parse a full response body and keep the first record.
    ///
    /// The body is accepted only as a whole: a malformed envelope, a record
    /// missing a required field, or an empty `results` array all fail.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        let response: ApiResponse = serde_json::from_str(body).map_err(FetchError::Parse)?;
        response
            .results
            .into_iter()
            .next()
            .map(Self::from)
            .ok_or(FetchError::EmptyResults)
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "City, Country"
    pub fn location(&self) -> String {
        format!("{}, {}", self.city, self.country)
    }

    /// Birth date rendered with a chrono format string
    ///
    /// A format chrono cannot render falls back to `YYYY-MM-DD`.
    pub fn formatted_birth_date(&self, format: &str) -> String {
        let date = self.date_of_birth.date_naive();
        let mut out = String::new();
        if write!(out, "{}", date.format(format)).is_err() {
            tracing::warn!(format, "Unusable date format, using ISO date");
            return date.format("%Y-%m-%d").to_string();
        }
        out
    }

    /// Picture URL, falling back to the static placeholder
    pub fn picture_or_placeholder(&self) -> &str {
        self.picture_url.as_deref().unwrap_or(PLACEHOLDER_PICTURE)
    }
}

impl From<RawUser> for UserProfile {
    fn from(raw: RawUser) -> Self {
        let picture_url = raw
            .picture
            .and_then(|p| p.large)
            .filter(|url| !url.trim().is_empty());

        Self {
            first_name: raw.name.first,
            last_name: raw.name.last,
            gender: Gender::parse(&raw.gender),
            phone: raw.phone,
            email: raw.email,
            city: raw.location.city,
            country: raw.location.country,
            date_of_birth: raw.dob.date,
            picture_url,
        }
    }
}

/// Response body used across the crate's tests
#[cfg(test)]
pub(crate) const SAMPLE_RESPONSE: &str = r#"{
  "results": [
    {
      "gender": "female",
      "name": { "title": "Ms", "first": "Amelia", "last": "Moreau" },
      "location": {
        "street": { "number": 4032, "name": "Rue de l'Abbé-Groult" },
        "city": "Montpellier",
        "state": "Hérault",
        "country": "France",
        "postcode": 34000
      },
      "email": "amelia.moreau@example.com",
      "dob": { "date": "1988-03-07T14:02:11.511Z", "age": 38 },
      "phone": "04-61-20-77-35",
      "picture": {
        "large": "https://randomuser.me/api/portraits/women/47.jpg",
        "medium": "https://randomuser.me/api/portraits/med/women/47.jpg",
        "thumbnail": "https://randomuser.me/api/portraits/thumb/women/47.jpg"
      },
      "nat": "FR"
    }
  ],
  "info": { "seed": "abc", "results": 1, "page": 1, "version": "1.4" }
}"#;

#[cfg(test)]
pub(crate) fn sample_profile() -> UserProfile {
    UserProfile::from_json(SAMPLE_RESPONSE).expect("sample response parses")
}
