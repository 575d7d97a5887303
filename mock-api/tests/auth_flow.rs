mod common;

use common::{backend, TEST_EPOCH_MS};
use mock_api::ErrorCode;
use mock_api::db::USERS;
use shared::models::{RegisterRequest, User, UserRole};

fn register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        name: "Playa Azul".to_string(),
        email: email.to_string(),
        password: "secret123".to_string(),
        avatar: None,
    }
}

#[tokio::test]
async fn register_then_login_succeeds() {
    let (backend, _clock) = backend();

    let registered = backend
        .auth()
        .register(register_request("playa@vaova.com"))
        .await
        .unwrap();
    assert_eq!(registered.user.email, "playa@vaova.com");
    assert_eq!(registered.user.role, UserRole::Hotel);
    assert_eq!(registered.token.split('.').count(), 3);

    backend.auth().logout().await;
    let logged_in = backend
        .auth()
        .login("playa@vaova.com", "secret123")
        .await
        .unwrap();
    assert_eq!(logged_in.user.id, registered.user.id);
}

#[tokio::test]
async fn register_creates_companion_hotel() {
    let (backend, _clock) = backend();

    let response = backend
        .auth()
        .register(register_request("playa@vaova.com"))
        .await
        .unwrap();

    let hotel_id = response.user.hotel_id.expect("hotel account links a hotel");
    let hotel = backend.hotels().get(&hotel_id).await.unwrap();
    assert_eq!(hotel.name, "Playa Azul");
    assert_eq!(hotel.stars, 3);
    assert_eq!(hotel.score, 0);
    assert!(hotel.gallery.is_empty());
}

#[tokio::test]
async fn duplicate_email_is_rejected_with_400() {
    let (backend, _clock) = backend();

    backend
        .auth()
        .register(register_request("playa@vaova.com"))
        .await
        .unwrap();
    let err = backend
        .auth()
        .register(register_request("playa@vaova.com"))
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::EmailAlreadyRegistered);
    assert_eq!(err.status_code(), 400);
}

#[tokio::test]
async fn blank_registration_fields_are_rejected() {
    let (backend, _clock) = backend();

    let mut request = register_request("playa@vaova.com");
    request.password = "   ".to_string();
    let err = backend.auth().register(request).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::RequiredField);
}

#[tokio::test]
async fn wrong_password_yields_invalid_credentials() {
    let (backend, _clock) = backend();

    backend
        .auth()
        .register(register_request("playa@vaova.com"))
        .await
        .unwrap();
    let err = backend
        .auth()
        .login("playa@vaova.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidCredentials);
    assert_eq!(err.status_code(), 401);
}

#[tokio::test]
async fn logout_is_idempotent_and_clears_the_session() {
    let (backend, _clock) = backend();

    backend
        .auth()
        .register(register_request("playa@vaova.com"))
        .await
        .unwrap();
    backend.auth().logout().await;
    backend.auth().logout().await;

    let err = backend.auth().current_user().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::NoActiveSession);
}

#[tokio::test]
async fn expired_session_reports_once_then_no_session() {
    let (backend, clock) = backend();

    let response = backend
        .auth()
        .register(register_request("playa@vaova.com"))
        .await
        .unwrap();
    clock.set(TEST_EPOCH_MS + response.expires_in + 1);

    let err = backend.auth().current_user().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::SessionExpired);

    // Expiry detection cleared the slot
    let err = backend.auth().current_user().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::NoActiveSession);
}

#[tokio::test]
async fn current_user_of_a_vanished_account_is_404() {
    let (backend, _clock) = backend();

    backend
        .auth()
        .register(register_request("playa@vaova.com"))
        .await
        .unwrap();
    // The account disappears underneath the still-active session
    backend
        .state()
        .store
        .write(USERS, &Vec::<User>::new())
        .unwrap();

    let err = backend.auth().current_user().await.unwrap_err();
    assert_eq!(err.code, ErrorCode::UserNotFound);
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn second_register_takes_over_the_single_slot() {
    let (backend, _clock) = backend();

    backend
        .auth()
        .register(register_request("one@vaova.com"))
        .await
        .unwrap();
    backend
        .auth()
        .register(register_request("two@vaova.com"))
        .await
        .unwrap();

    let current = backend.auth().current_user().await.unwrap();
    assert_eq!(current.email, "two@vaova.com");
}
