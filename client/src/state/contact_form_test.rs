use super::*;

fn filled() -> ContactFormState {
    let mut state = ContactFormState::default();
    state.set(Input::Name, "Ada".into());
    state.set(Input::Email, "ada@example.com".into());
    state.set(Input::Message, "Hello there, let's talk".into());
    state
}

fn receipt() -> ContactReceipt {
    ContactReceipt { id: "abc".into(), delivered_via: "simulated".into() }
}

#[test]
fn errors_stay_hidden_before_first_submit() {
    let mut state = ContactFormState::default();
    state.set(Input::Email, "nope".into());
    assert!(state.errors.is_empty());
}

#[test]
fn empty_submit_reports_every_required_field() {
    let mut state = ContactFormState::default();
    assert_eq!(state.begin_submit(), None);
    assert_eq!(state.error(Field::Name).as_deref(), Some("Name is required"));
    assert_eq!(state.error(Field::Email).as_deref(), Some("Email is required"));
    assert_eq!(state.error(Field::Message).as_deref(), Some("Message is required"));
    assert_eq!(state.status, SubmitStatus::Idle);
}

#[test]
fn editing_after_failed_submit_revalidates_the_field() {
    let mut state = ContactFormState::default();
    let _ = state.begin_submit();
    state.set(Input::Message, "too short".into());
    assert_eq!(state.error(Field::Message).as_deref(), Some("Message must be at least 10 characters"));
    state.set(Input::Message, "long enough".into());
    assert_eq!(state.error(Field::Message), None);
    assert!(state.error(Field::Name).is_some());
}

#[test]
fn company_is_optional_and_blank_clears_it() {
    let mut state = filled();
    state.set(Input::Company, "Acme".into());
    assert_eq!(state.value(Input::Company), "Acme");
    state.set(Input::Company, String::new());
    assert_eq!(state.form.company, None);
}

#[test]
fn valid_submit_moves_to_sending_and_blocks_resubmit() {
    let mut state = filled();
    let form = state.begin_submit().expect("valid form");
    assert_eq!(form.name, "Ada");
    assert!(state.is_sending());
    assert_eq!(state.begin_submit(), None);
}

#[test]
fn success_resets_the_form() {
    let mut state = filled();
    let _ = state.begin_submit();
    state.finish(Ok(receipt()));
    assert_eq!(state.form, ContactForm::default());
    assert!(!state.submitted_once);
    assert_eq!(state.status, SubmitStatus::Sent(receipt()));
}

#[test]
fn failure_keeps_fields() {
    let mut state = filled();
    let _ = state.begin_submit();
    state.finish(Err(SubmitError::Failed("network down".into())));
    assert_eq!(state.form.name, "Ada");
    assert_eq!(state.status, SubmitStatus::Failed("network down".into()));
    assert!(!state.is_sending());
}

#[test]
fn server_field_errors_are_shown_inline() {
    let mut state = filled();
    let _ = state.begin_submit();
    let fields = BTreeMap::from([(Field::Email, "Invalid email address".to_owned())]);
    state.finish(Err(SubmitError::Invalid { message: "invalid contact form".into(), fields }));
    assert_eq!(state.error(Field::Email).as_deref(), Some("Invalid email address"));
    assert_eq!(state.form.email, "ada@example.com");
}

#[test]
fn company_input_has_no_validated_field() {
    assert_eq!(Input::Company.field(), None);
    assert_eq!(Input::Email.field(), Some(Field::Email));
}
