//! Service orchestration tests for user registration.

use std::sync::Arc;

use crate::user::{
    adapters::memory::InMemoryUserRepository,
    domain::{ClientProfile, FreelancerProfile, Role, UserDomainError, UserProfile},
    services::{RegisterUserRequest, UserRegistrationError, UserRegistrationService},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = UserRegistrationService<InMemoryUserRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    UserRegistrationService::new(Arc::new(InMemoryUserRepository::new()), Arc::new(DefaultClock))
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_persists_and_is_retrievable(service: TestService) {
    let request = RegisterUserRequest::new(
        "Asha Rao",
        "asha@example.test",
        UserProfile::Freelancer(
            FreelancerProfile::new()
                .with_skills(vec!["plumbing".to_owned(), "wiring".to_owned()])
                .with_hourly_rate(450),
        ),
    );

    let registered = service
        .register(request)
        .await
        .expect("registration should succeed");
    let fetched = service
        .find_by_id(registered.id())
        .await
        .expect("lookup should succeed");

    assert_eq!(fetched, Some(registered.clone()));
    assert_eq!(registered.role(), Role::Freelancer);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn register_rejects_malformed_email(service: TestService) {
    let request = RegisterUserRequest::new(
        "Ravi Kumar",
        "not-an-address",
        UserProfile::Client(ClientProfile::new()),
    );

    let result = service.register(request).await;

    assert!(matches!(
        result,
        Err(UserRegistrationError::Domain(
            UserDomainError::InvalidEmail(_)
        ))
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_by_id_returns_none_when_missing(service: TestService) {
    let fetched = service
        .find_by_id(crate::user::domain::UserId::new())
        .await
        .expect("lookup should succeed");
    assert!(fetched.is_none());
}
