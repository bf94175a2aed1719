use crate::jwt::bearer_token;
use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Hashed in place of a real password when the account does not exist.
const UNKNOWN_ACCOUNT_PLACEHOLDER: &str = "unknown-account";

/// Authentication coordinator combining password verification and JWT handling.
///
/// Built once at startup from the signing secret and shared read-only
/// between request handlers.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator with the default password cost.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    ///
    /// # Errors
    /// * `MissingSecret` - The secret is empty
    pub fn new(jwt_secret: &[u8]) -> Result<Self, JwtError> {
        Ok(Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret)?,
        })
    }

    /// Replace the password hasher (e.g. with a configured work factor).
    pub fn with_password_hasher(mut self, password_hasher: PasswordHasher) -> Self {
        self.password_hasher = password_hasher;
        self
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `EmptyInput` - Password is empty
    /// * `HashingFailed` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue an access token for `subject`.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identifier to embed as the token subject
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is malformed or verification failed
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        if !self.password_hasher.verify(password, stored_hash)? {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.jwt_handler.issue(subject)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Reject a login for which no account exists.
    ///
    /// Spends one hash at the configured work factor, the same cost as
    /// `authenticate`, so response time does not reveal whether the account exists.
    pub fn reject_unknown_account(&self) -> AuthenticationError {
        let _ = self.password_hasher.hash(UNKNOWN_ACCOUNT_PLACEHOLDER);
        AuthenticationError::InvalidCredentials
    }

    /// Validate and decode a raw JWT.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.jwt_handler.verify(token)
    }

    /// Validate the value of an `Authorization: Bearer <token>` header.
    ///
    /// # Errors
    /// * `MissingCredentials` - Header absent or not using the Bearer scheme
    /// * any other `JwtError` from token verification
    pub fn validate_bearer(&self, header_value: Option<&str>) -> Result<Claims, JwtError> {
        let token = bearer_token(header_value)?;
        self.jwt_handler.verify(token)
    }
}
