// Profile fetching - the single HTTP call this app makes
//
// GET {api_url}?page=1&results=1&seed={seed}
//
// The seed makes the provider's "random" user deterministic, so the same
// card comes back on every run. The response is validated in full by
// UserProfile::from_json before anything reaches the view state.

mod error;

pub use error::{FetchError, FETCH_FAILED_MESSAGE};

use crate::config::Config;
use crate::profile::UserProfile;
use std::time::Duration;

/// Page requested from the provider (always the first)
const PAGE: &str = "1";

/// Number of records requested - the card shows exactly one
const RESULTS: &str = "1";

/// HTTP client for the profile endpoint
#[derive(Debug, Clone)]
pub struct ProfileClient {
    client: reqwest::Client,
    api_url: String,
    seed: String,
}

impl ProfileClient {
    /// Create a client for an endpoint and seed
    ///
    /// `timeout` of `None` leaves reqwest's transport defaults in place.
    pub fn new(
        api_url: impl Into<String>,
        seed: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, FetchError> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("usercard/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
            seed: seed.into(),
        })
    }

    /// Build from the effective configuration
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(
            config.api_url.clone(),
            config.seed.clone(),
            config.request_timeout_secs.map(Duration::from_secs),
        )
    }

    /// Query parameters sent with every request
    fn query(&self) -> [(&'static str, &str); 3] {
        [("page", PAGE), ("results", RESULTS), ("seed", self.seed.as_str())]
    }

    /// Fetch one profile
    ///
    /// Network errors, non-2xx statuses and shape mismatches all come back
    /// as `FetchError`; callers show `user_message()` and log the rest.
    pub async fn fetch_profile(&self) -> Result<UserProfile, FetchError> {
        tracing::debug!(url = %self.api_url, seed = %self.seed, "Requesting profile");

        let response = self
            .client
            .get(&self.api_url)
            .query(&self.query())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let profile = UserProfile::from_json(&body)?;

        tracing::debug!(name = %profile.full_name(), "Profile received");
        Ok(profile)
    }
}
