//! Service layer for user registration and lookup.

use crate::matching::Coordinates;
use crate::user::{
    domain::{EmailAddress, User, UserDomainError, UserId, UserName, UserProfile},
    ports::{UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a user account.
///
/// The profile variant fixes the account's role for its whole lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisterUserRequest {
    name: String,
    email: String,
    profile: UserProfile,
    coordinates: Option<Coordinates>,
}

impl RegisterUserRequest {
    /// Creates a request with required account fields.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, profile: UserProfile) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            profile,
            coordinates: None,
        }
    }

    /// Sets the user's resolved location.
    #[must_use]
    pub const fn with_coordinates(mut self, coordinates: Coordinates) -> Self {
        self.coordinates = Some(coordinates);
        self
    }
}

/// Service-level errors for user registration operations.
#[derive(Debug, Error)]
pub enum UserRegistrationError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] UserDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] UserRepositoryError),
}

/// Result type for user registration service operations.
pub type UserRegistrationResult<T> = Result<T, UserRegistrationError>;

/// User registration and lookup orchestration service.
#[derive(Clone)]
pub struct UserRegistrationService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> UserRegistrationService<R, C>
where
    R: UserRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new user registration service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Registers a new user account with zeroed counters.
    ///
    /// # Errors
    ///
    /// Returns [`UserRegistrationError`] when input validation fails or
    /// the repository rejects persistence.
    pub async fn register(&self, request: RegisterUserRequest) -> UserRegistrationResult<User> {
        let RegisterUserRequest {
            name,
            email,
            profile,
            coordinates,
        } = request;

        let user_name = UserName::new(name)?;
        let email_address = EmailAddress::new(email)?;
        let user = User::register(user_name, email_address, profile, coordinates, &*self.clock);
        self.repository.store(&user).await?;
        Ok(user)
    }

    /// Finds a user account by identifier.
    ///
    /// Returns `Ok(None)` when no user has the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`UserRegistrationError::Repository`] when persistence
    /// lookup fails.
    pub async fn find_by_id(&self, id: UserId) -> UserRegistrationResult<Option<User>> {
        Ok(self.repository.find_by_id(id).await?)
    }
}
