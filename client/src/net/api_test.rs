use super::*;

#[test]
fn contact_failed_message_formats_status() {
    assert_eq!(contact_failed_message(502), "contact request failed: 502");
}

#[test]
fn field_errors_become_invalid() {
    let body = ContactErrorBody {
        error: "invalid contact form".into(),
        fields: BTreeMap::from([(Field::Email, "Invalid email address".to_owned())]),
    };
    let err = submit_error_from(422, Some(body));
    let SubmitError::Invalid { message, fields } = err else {
        panic!("expected field errors");
    };
    assert_eq!(message, "invalid contact form");
    assert_eq!(fields.get(&Field::Email).map(String::as_str), Some("Invalid email address"));
}

#[test]
fn server_message_is_kept_for_other_failures() {
    let body = ContactErrorBody { error: "too many contact requests".into(), fields: BTreeMap::new() };
    assert_eq!(submit_error_from(429, Some(body)), SubmitError::Failed("too many contact requests".into()));
}

#[test]
fn missing_body_falls_back_to_status() {
    assert_eq!(submit_error_from(500, None).message(), "contact request failed: 500");
}

