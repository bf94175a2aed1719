use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::LoginOutcome;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for user operations.
///
/// Concrete implementation of UserServicePort with dependency injection.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User persistence implementation
    /// * `authenticator` - Password hasher and token issuer built at startup
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn create_user(&self, command: CreateUserCommand) -> Result<User, UserError> {
        if command.password.is_empty() {
            return Err(UserError::EmptyPassword);
        }

        let password_hash = self.authenticator.hash_password(&command.password)?;

        let user = User {
            id: UserId::new(),
            first_name: command.first_name,
            last_name: command.last_name,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        let created_user = self.repository.create(user).await?;
        tracing::info!(user_id = %created_user.id, "User registered");

        Ok(created_user)
    }

    async fn find_user_by_email(&self, email: &EmailAddress) -> Result<User, UserError> {
        self.repository
            .find_by_email(email.as_str())
            .await?
            .ok_or(UserError::NotFoundByEmail(email.to_string()))
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<LoginOutcome, UserError> {
        let user = match EmailAddress::new(email.to_string()) {
            Ok(email) => self.repository.find_by_email(email.as_str()).await?,
            Err(_) => None,
        };

        let Some(user) = user else {
            tracing::warn!("Login attempt for unknown email");
            return Err(self.authenticator.reject_unknown_account().into());
        };

        let result = self
            .authenticator
            .authenticate(password, &user.password_hash, &user.id.to_string())
            .map_err(|e| {
                if let AuthenticationError::InvalidCredentials = e {
                    tracing::warn!(user_id = %user.id, "Login attempt with wrong password");
                }
                UserError::from(e)
            })?;

        Ok(LoginOutcome {
            user,
            token: result.access_token,
        })
    }
}
