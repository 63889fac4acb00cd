use super::*;
use axum::body::to_bytes;
use contact::Field;

use crate::config::RateLimitConfig;
use crate::state::test_helpers::{MockDelivery, test_app_state, test_app_state_with};

fn peer(last: u8) -> ConnectInfo<SocketAddr> {
    ConnectInfo(SocketAddr::from(([192, 168, 1, last], 50_000)))
}

fn valid_form() -> ContactForm {
    ContactForm {
        name: " Ada Lovelace ".to_owned(),
        email: "ada@example.com".to_owned(),
        company: Some(String::new()),
        message: "I would like to talk about a project.".to_owned(),
    }
}

async fn body_of(err: ContactError) -> (StatusCode, ContactErrorBody) {
    let response = err.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn valid_submission_is_delivered() {
    let (state, delivery) = test_app_state();
    let Json(receipt) = submit_contact(State(state), peer(1), Json(valid_form())).await.unwrap();

    assert_eq!(receipt.delivered_via, "mock");
    let delivered = delivery.delivered.lock().unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].0.to_string(), receipt.id);
    assert_eq!(delivered[0].1.name, "Ada Lovelace");
    assert_eq!(delivered[0].1.company, None);
}

#[tokio::test]
async fn invalid_submission_is_unprocessable_with_field_messages() {
    let (state, delivery) = test_app_state();
    let form = ContactForm { message: "too short".to_owned(), ..valid_form() };
    let err = submit_contact(State(state), peer(1), Json(form)).await.unwrap_err();

    let (status, body) = body_of(err).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body.fields.get(&Field::Message).map(String::as_str), Some("Message must be at least 10 characters"));
    assert_eq!(body.fields.len(), 1);
    assert!(delivery.delivered.lock().unwrap().is_empty());
}

#[tokio::test]
async fn invalid_submissions_do_not_consume_rate_limit() {
    let limits = RateLimitConfig { per_client_limit: 1, ..RateLimitConfig::default() };
    let (state, _) = test_app_state_with(MockDelivery::default(), limits);

    for _ in 0..3 {
        let form = ContactForm { name: String::new(), ..valid_form() };
        assert!(matches!(
            submit_contact(State(state.clone()), peer(1), Json(form)).await,
            Err(ContactError::Invalid(_))
        ));
    }
    assert!(submit_contact(State(state), peer(1), Json(valid_form())).await.is_ok());
}

#[tokio::test]
async fn repeated_submissions_are_rate_limited() {
    let limits = RateLimitConfig { per_client_limit: 2, ..RateLimitConfig::default() };
    let (state, delivery) = test_app_state_with(MockDelivery::default(), limits);

    for _ in 0..2 {
        submit_contact(State(state.clone()), peer(7), Json(valid_form())).await.unwrap();
    }
    let err = submit_contact(State(state.clone()), peer(7), Json(valid_form())).await.unwrap_err();
    let (status, body) = body_of(err).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert!(body.fields.is_empty());
    assert_eq!(delivery.delivered.lock().unwrap().len(), 2);

    // A different visitor is unaffected.
    assert!(submit_contact(State(state), peer(8), Json(valid_form())).await.is_ok());
}

#[tokio::test]
async fn delivery_failure_is_bad_gateway() {
    let (state, _) = test_app_state_with(MockDelivery { fail: true, ..MockDelivery::default() }, RateLimitConfig::default());
    let err = submit_contact(State(state), peer(1), Json(valid_form())).await.unwrap_err();

    let (status, body) = body_of(err).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(!body.error.contains("mock outage"));
}

#[test]
fn contact_error_to_status_maps_each_variant() {
    let invalid = ContactForm::default().validate().unwrap_err();
    assert_eq!(contact_error_to_status(&ContactError::Invalid(invalid)), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        contact_error_to_status(&ContactError::RateLimited(RateLimitError::GlobalExceeded { limit: 1, window_secs: 1 })),
        StatusCode::TOO_MANY_REQUESTS
    );
    assert_eq!(
        contact_error_to_status(&ContactError::Delivery(DeliveryError::Email("x".into()))),
        StatusCode::BAD_GATEWAY
    );
}
