#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Simulated send latency before the success notice appears.
pub const SEND_DELAY_MS: u64 = 1500;
/// How long the success notice stays visible before hiding again.
pub const NOTICE_DELAY_MS: u64 = 5000;

/// The contact form's required fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// DOM `name` attribute; the inline error element is `<name>Error`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Capitalized label used in the "is required" message.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Subject => "Subject",
            Self::Message => "Message",
        }
    }
}

/// Validate a single field value. Emptiness is checked before any
/// field-specific rule; all rules see the trimmed value.
pub fn validate(field: Field, value: &str) -> Result<(), String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(format!("{} is required", field.label()));
    }

    match field {
        Field::Email if !is_valid_email(value) => {
            Err("Please enter a valid email address".to_owned())
        }
        Field::Name if value.chars().count() < 2 => {
            Err("Name must be at least 2 characters long".to_owned())
        }
        Field::Subject if value.chars().count() < 3 => {
            Err("Subject must be at least 3 characters long".to_owned())
        }
        Field::Message if value.chars().count() < 10 => {
            Err("Message must be at least 10 characters long".to_owned())
        }
        _ => Ok(()),
    }
}

/// Loose email shape: something before an `@`, and a domain with an interior
/// dot. No whitespace anywhere, exactly one `@`.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Current value and visible error for one field.
#[derive(Clone, Debug, Default)]
pub struct FieldState {
    pub value: String,
    pub error: Option<String>,
}

/// Values and inline errors for the whole contact form.
///
/// Errors appear on blur or submit and are cleared as soon as the user edits
/// the field again; editing does not re-validate until the next blur/submit.
#[derive(Clone, Debug, Default)]
pub struct FormState {
    pub name: FieldState,
    pub email: FieldState,
    pub subject: FieldState,
    pub message: FieldState,
}

impl FormState {
    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    /// Record an edit. The field returns to a neutral state: no visible
    /// error, not re-validated yet.
    pub fn set_value(&mut self, field: Field, value: String) {
        let slot = self.field_mut(field);
        slot.value = value;
        slot.error = None;
    }

    /// Validate one field, recording its error. Returns whether it passed.
    pub fn validate_field(&mut self, field: Field) -> bool {
        let slot = self.field_mut(field);
        match validate(field, &slot.value) {
            Ok(()) => {
                slot.error = None;
                true
            }
            Err(message) => {
                slot.error = Some(message);
                false
            }
        }
    }

    /// Validate every required field. All fields are checked even after the
    /// first failure so each shows its own error.
    pub fn validate_all(&mut self) -> bool {
        let mut all_valid = true;
        for field in Field::ALL {
            if !self.validate_field(field) {
                all_valid = false;
            }
        }
        all_valid
    }

    /// Hide all inline errors without touching values.
    pub fn clear_errors(&mut self) {
        for field in Field::ALL {
            self.field_mut(field).error = None;
        }
    }

    /// Clear values and errors after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Submission lifecycle as an explicit state machine over timestamps.
///
/// The component's timers call `advance` with the current time; tests drive
/// it with a virtual clock. While `Pending` the submit control is disabled,
/// so a second submit cannot start before the first resolves.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Pending {
        since: f64,
    },
    Succeeded {
        since: f64,
    },
}

impl SubmitPhase {
    /// Begin a submission. Only valid from `Idle`; any in-flight phase is
    /// kept as-is.
    pub fn submit(self, now: f64) -> Self {
        match self {
            Self::Idle => Self::Pending { since: now },
            other => other,
        }
    }

    /// Advance time-based transitions: the simulated send completes after
    /// `SEND_DELAY_MS`, the success notice hides after `NOTICE_DELAY_MS`.
    #[allow(clippy::cast_precision_loss)]
    pub fn advance(self, now: f64) -> Self {
        match self {
            Self::Pending { since } if now - since >= SEND_DELAY_MS as f64 => {
                Self::Succeeded { since: now }
            }
            Self::Succeeded { since } if now - since >= NOTICE_DELAY_MS as f64 => Self::Idle,
            other => other,
        }
    }

    /// Abort a submission that failed: the control is restored immediately
    /// and no success notice is shown.
    pub fn fail(self) -> Self {
        Self::Idle
    }

    pub fn is_pending(self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn is_succeeded(self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}
