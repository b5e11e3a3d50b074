use super::*;

fn fields(name: &str, email: &str, message: &str) -> ContactFields {
    ContactFields { name: name.to_owned(), email: email.to_owned(), message: message.to_owned() }
}

// =============================================================
// Validation
// =============================================================

#[test]
fn validate_trims_all_fields() {
    let message = fields("  Ada ", " ada@example.com ", "\thello\n").validate().unwrap();
    assert_eq!(message.name, "Ada");
    assert_eq!(message.email, "ada@example.com");
    assert_eq!(message.message, "hello");
}

#[test]
fn blank_field_reports_missing_field() {
    assert_eq!(fields("", "a@b.co", "hi").validate(), Err(ContactError::MissingField));
    assert_eq!(fields("A", "   ", "hi").validate(), Err(ContactError::MissingField));
    assert_eq!(fields("A", "a@b.co", " \n ").validate(), Err(ContactError::MissingField));
}

#[test]
fn missing_field_is_checked_before_email_shape() {
    assert_eq!(fields("", "bad", "hi").validate(), Err(ContactError::MissingField));
}

#[test]
fn malformed_email_reports_invalid_email() {
    assert_eq!(fields("A", "bad", "hi").validate(), Err(ContactError::InvalidEmail));
}

#[test]
fn email_pattern_compiles() {
    assert!(Regex::new(EMAIL_PATTERN_SRC).is_ok());
    assert!(EMAIL_PATTERN.is_some());
}

#[test]
fn email_pattern_cases() {
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("first.last@sub.example.org"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.c"));
    assert!(!is_valid_email("a@.c"));
    assert!(!is_valid_email("a b@c.d"));
    assert!(!is_valid_email("plain"));
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(ContactError::MissingField.to_string(), "Please fill in all fields.");
    assert_eq!(ContactError::InvalidEmail.to_string(), "Please enter a valid email address.");
}

// =============================================================
// Mailto construction
// =============================================================

#[test]
fn mailto_encodes_subject_and_body() {
    let message = fields("A", "a@b.co", "hi").validate().unwrap();
    assert_eq!(message.subject(), "Portfolio Inquiry from A");
    assert_eq!(message.body(), "Name: A\nEmail: a@b.co\n\nMessage:\nhi");
    assert_eq!(
        message.mailto("adarsh.official2011@gmail.com"),
        "mailto:adarsh.official2011@gmail.com?subject=Portfolio%20Inquiry%20from%20A\
         &body=Name%3A%20A%0AEmail%3A%20a%40b.co%0A%0AMessage%3A%0Ahi"
    );
}

// =============================================================
// Submit phases
// =============================================================

#[test]
fn invalid_submit_leaves_state_unchanged() {
    let mut state = ContactState { fields: fields("A", "bad", "hi"), phase: SubmitPhase::Idle };
    let before = state.clone();
    assert_eq!(state.submit(), Err(ContactError::InvalidEmail));
    assert_eq!(state, before);
}

#[test]
fn valid_submit_walks_through_phases_then_clears() {
    let mut state = ContactState { fields: fields("A", "a@b.co", "hi"), phase: SubmitPhase::Idle };

    let message = state.submit().unwrap().expect("accepted");
    assert_eq!(message.name, "A");
    assert_eq!(state.phase, SubmitPhase::Preparing);
    assert!(state.phase.is_busy());
    assert_eq!(state.phase.label(), "Preparing Email...");
    assert_eq!(state.phase.background(), "var(--accent-teal)");
    assert_eq!(state.phase.color(), "#000");

    state.mark_ready();
    assert_eq!(state.phase, SubmitPhase::Ready);
    assert_eq!(state.phase.label(), "Message Ready!");
    assert_eq!(state.phase.background(), "#00ff88");

    state.reset();
    assert_eq!(state, ContactState::default());
    assert_eq!(state.phase.label(), IDLE_LABEL);
    assert_eq!(state.phase.background(), "");
    assert_eq!(state.phase.color(), "");
}

#[test]
fn submit_while_busy_is_ignored() {
    let mut state = ContactState { fields: fields("A", "a@b.co", "hi"), phase: SubmitPhase::Preparing };
    assert_eq!(state.submit(), Ok(None));
    assert_eq!(state.phase, SubmitPhase::Preparing);
}

#[test]
fn mark_ready_only_advances_from_preparing() {
    let mut state = ContactState::default();
    state.mark_ready();
    assert_eq!(state.phase, SubmitPhase::Idle);
}

#[test]
fn delays_match_feedback_timing() {
    assert_eq!(PREPARE_DELAY.as_millis(), 1000);
    assert_eq!(RESET_DELAY.as_millis(), 3000);
}
