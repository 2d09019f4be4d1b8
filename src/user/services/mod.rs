//! Application services for user accounts.

mod registration;

pub use registration::{
    RegisterUserRequest, UserRegistrationError, UserRegistrationResult, UserRegistrationService,
};
