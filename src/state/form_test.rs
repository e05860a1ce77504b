use super::*;

// =============================================================
// Field metadata
// =============================================================

#[test]
fn field_names_match_dom_contract() {
    assert_eq!(Field::Name.name(), "name");
    assert_eq!(Field::Email.name(), "email");
    assert_eq!(Field::Subject.name(), "subject");
    assert_eq!(Field::Message.name(), "message");
}

#[test]
fn field_labels_are_capitalized() {
    for field in Field::ALL {
        let label = field.label();
        assert!(label.chars().next().is_some_and(char::is_uppercase));
        assert_eq!(label.to_lowercase(), field.name());
    }
}

// =============================================================
// Per-field validation rules
// =============================================================

#[test]
fn empty_values_report_required() {
    assert_eq!(
        validate(Field::Name, ""),
        Err("Name is required".to_owned())
    );
    assert_eq!(
        validate(Field::Email, "   "),
        Err("Email is required".to_owned())
    );
    assert_eq!(
        validate(Field::Subject, ""),
        Err("Subject is required".to_owned())
    );
    assert_eq!(
        validate(Field::Message, "\t"),
        Err("Message is required".to_owned())
    );
}

#[test]
fn emptiness_is_checked_before_field_rules() {
    // An empty email reports "required", not the format error.
    assert_eq!(
        validate(Field::Email, ""),
        Err("Email is required".to_owned())
    );
}

#[test]
fn email_requires_a_dotted_domain() {
    assert!(validate(Field::Email, "a@b").is_err());
    assert!(validate(Field::Email, "a@b.com").is_ok());
}

#[test]
fn email_rejects_malformed_shapes() {
    let invalid = [
        "plain",
        "@b.com",
        "a@",
        "a@.com",
        "a@b.",
        "a b@c.com",
        "a@b@c.com",
    ];
    for value in invalid {
        assert!(
            validate(Field::Email, value).is_err(),
            "expected invalid: {value}"
        );
    }
    assert_eq!(
        validate(Field::Email, "a@b"),
        Err("Please enter a valid email address".to_owned())
    );
}

#[test]
fn email_accepts_ordinary_addresses() {
    for value in ["alex@example.com", "a.b@c.d.e", "x@y.zz"] {
        assert!(validate(Field::Email, value).is_ok(), "expected valid: {value}");
    }
}

#[test]
fn name_needs_two_characters() {
    assert_eq!(
        validate(Field::Name, "a"),
        Err("Name must be at least 2 characters long".to_owned())
    );
    assert!(validate(Field::Name, "al").is_ok());
}

#[test]
fn subject_needs_three_characters() {
    assert_eq!(
        validate(Field::Subject, "hi"),
        Err("Subject must be at least 3 characters long".to_owned())
    );
    assert!(validate(Field::Subject, "hey").is_ok());
}

#[test]
fn message_needs_ten_characters() {
    assert_eq!(
        validate(Field::Message, "123456789"),
        Err("Message must be at least 10 characters long".to_owned())
    );
    assert!(validate(Field::Message, "1234567890").is_ok());
}

#[test]
fn rules_see_the_trimmed_value() {
    // 9 characters plus surrounding whitespace is still too short.
    assert!(validate(Field::Message, "  123456789  ").is_err());
    assert!(validate(Field::Name, " al ").is_ok());
}

// =============================================================
// FormState: edit/blur/submit lifecycle
// =============================================================

fn filled_form() -> FormState {
    let mut form = FormState::default();
    form.set_value(Field::Name, "Alex Chen".to_owned());
    form.set_value(Field::Email, "alex@example.com".to_owned());
    form.set_value(Field::Subject, "Hello".to_owned());
    form.set_value(Field::Message, "A message that is long enough.".to_owned());
    form
}

#[test]
fn blur_records_an_error_and_edit_clears_it() {
    let mut form = FormState::default();
    form.set_value(Field::Email, "a@b".to_owned());

    assert!(!form.validate_field(Field::Email));
    assert!(form.email.error.is_some());

    // Editing clears the visible error without re-validating.
    form.set_value(Field::Email, "a@".to_owned());
    assert!(form.email.error.is_none());
}

#[test]
fn validate_all_checks_every_field() {
    let mut form = FormState::default();
    form.set_value(Field::Name, "Alex".to_owned());

    assert!(!form.validate_all());
    assert!(form.name.error.is_none());
    assert!(form.email.error.is_some());
    assert!(form.subject.error.is_some());
    assert!(form.message.error.is_some());
}

#[test]
fn validate_all_passes_on_a_filled_form() {
    let mut form = filled_form();
    assert!(form.validate_all());
    for field in Field::ALL {
        assert!(form.field(field).error.is_none());
    }
}

#[test]
fn clear_errors_keeps_values() {
    let mut form = FormState::default();
    form.set_value(Field::Subject, "hi".to_owned());
    form.validate_all();
    form.clear_errors();

    assert_eq!(form.subject.value, "hi");
    for field in Field::ALL {
        assert!(form.field(field).error.is_none());
    }
}

#[test]
fn reset_clears_everything() {
    let mut form = filled_form();
    form.reset();
    for field in Field::ALL {
        assert!(form.field(field).value.is_empty());
        assert!(form.field(field).error.is_none());
    }
}

// =============================================================
// SubmitPhase state machine, driven by a virtual clock
// =============================================================

#[test]
fn submit_moves_idle_to_pending() {
    let phase = SubmitPhase::Idle.submit(1000.0);
    assert!(phase.is_pending());
}

#[test]
fn submit_while_pending_is_a_no_op() {
    let phase = SubmitPhase::Idle.submit(1000.0);
    assert_eq!(phase.submit(1200.0), phase);
}

#[test]
fn pending_holds_until_the_send_delay_elapses() {
    let phase = SubmitPhase::Idle.submit(1000.0);
    assert!(phase.advance(2000.0).is_pending());
    assert!(phase.advance(2500.0).is_succeeded());
}

#[test]
fn notice_hides_after_the_notice_delay() {
    let succeeded = SubmitPhase::Idle.submit(0.0).advance(1500.0);
    assert!(succeeded.is_succeeded());
    assert!(succeeded.advance(5000.0).is_succeeded());
    assert_eq!(succeeded.advance(6500.0), SubmitPhase::Idle);
}

#[test]
fn fail_restores_idle_from_any_phase() {
    assert_eq!(SubmitPhase::Idle.submit(0.0).fail(), SubmitPhase::Idle);
    assert_eq!(
        SubmitPhase::Succeeded { since: 10.0 }.fail(),
        SubmitPhase::Idle
    );
}

#[test]
fn full_cycle_returns_to_idle() {
    let mut phase = SubmitPhase::Idle;
    phase = phase.submit(0.0);
    phase = phase.advance(1500.0);
    phase = phase.advance(6500.0);
    assert_eq!(phase, SubmitPhase::Idle);

    // The machine can run again after a full cycle.
    assert!(phase.submit(7000.0).is_pending());
}
