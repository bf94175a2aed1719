use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Issuer written into every access token.
pub const ISSUER: &str = "todo-app";

/// Audience written into every access token.
pub const AUDIENCE: &str = "user";

/// Lifetime of an access token in seconds.
pub const TOKEN_TTL_SECONDS: i64 = 60 * 60;

/// Access token claims.
///
/// Every field is required on decode, so a token missing any of them is
/// rejected as malformed rather than half-trusted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build access token claims for a subject.
    ///
    /// # Arguments
    /// * `subject` - User identifier
    /// * `issued_at` - Issue time; expiry is one hour later
    pub fn for_subject(subject: impl ToString, issued_at: DateTime<Utc>) -> Self {
        let expiration = issued_at + Duration::seconds(TOKEN_TTL_SECONDS);

        Self {
            sub: subject.to_string(),
            iss: ISSUER.to_string(),
            aud: AUDIENCE.to_string(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        }
    }

    /// Set issuer.
    pub fn with_issuer(mut self, iss: impl ToString) -> Self {
        self.iss = iss.to_string();
        self
    }

    /// Set audience.
    pub fn with_audience(mut self, aud: impl ToString) -> Self {
        self.aud = aud.to_string();
        self
    }
}
