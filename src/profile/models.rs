// Wire models for the randomuser.me response
//
// These structs map to the JSON the profile endpoint returns.
// Only the fields the card displays are declared; serde ignores the rest
// (login, registered, id, nat, info...), which keeps us robust to
// payload additions.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Top-level response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub results: Vec<RawUser>,
}

/// One user record as delivered by the API
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub gender: String,
    pub name: RawName,
    pub location: RawLocation,
    pub email: String,
    pub dob: RawDob,
    pub phone: String,

    // Picture is the one block the card tolerates missing
    #[serde(default)]
    pub picture: Option<RawPicture>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawName {
    pub first: String,
    pub last: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLocation {
    pub city: String,
    pub country: String,
}

/// Date of birth block - `date` is RFC 3339 (e.g. "1993-07-20T09:44:18.674Z")
#[derive(Debug, Clone, Deserialize)]
pub struct RawDob {
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPicture {
    #[serde(default)]
    pub large: Option<String>,
}
