//! FormState of the contact form and its submission state machine
//!
//! ```text
//! Idle --begin_submit (required fields filled)--> Submitting
//! Submitting --complete_submit (after delay)--> Idle
//! ```
//!
//! Field edits are accepted in both states. A successful completion
//! resets every field, including edits made while the submission was
//! in flight.

use super::field::ContactField;
use super::notification::{ConfirmationCopy, Notification};
use super::request::ContactMessageRequest;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const SUBMIT_LABEL: &str = "Enviar Mensagem";
pub const SUBMITTING_LABEL: &str = "Enviando...";

/// Пять текстовых полей формы
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Replace one field, leaving the others untouched. No validation.
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Required fields that would fail the browser's `required` check.
    /// Like HTML, only the empty string fails; whitespace passes.
    pub fn missing_required(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.get(*f).is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
}

/// Причина, по которой отправка не была начата
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitBlocked {
    #[error("Required fields are empty: {}", join_fields(.0))]
    MissingRequired(Vec<ContactField>),

    #[error("A submission is already in progress")]
    AlreadySubmitting,
}

fn join_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(ContactField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// What the submit control shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitButtonState {
    pub disabled: bool,
    pub busy: bool,
    pub label: &'static str,
}

/// FormState: the five fields plus the in-flight flag
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub is_submitting: bool,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        if self.is_submitting {
            SubmissionStatus::Submitting
        } else {
            SubmissionStatus::Idle
        }
    }

    pub fn on_field_change(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Entry point for DOM input events, keyed by the input's `name`.
    pub fn on_field_change_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<(), super::field::UnknownField> {
        let field = name.parse::<ContactField>()?;
        self.on_field_change(field, value);
        Ok(())
    }

    /// Idle → Submitting. Returns the payload to hand to the submitter.
    /// A blocked submit leaves the state unchanged.
    pub fn begin_submit(&mut self) -> Result<ContactMessageRequest, SubmitBlocked> {
        if self.is_submitting {
            return Err(SubmitBlocked::AlreadySubmitting);
        }
        let missing = self.form.missing_required();
        if !missing.is_empty() {
            return Err(SubmitBlocked::MissingRequired(missing));
        }

        self.is_submitting = true;
        Ok(ContactMessageRequest::from(&self.form))
    }

    /// Submitting → Idle. On success the form is cleared; on failure the
    /// user's input is kept so they can retry.
    pub fn complete_submit(
        &mut self,
        outcome: Result<(), String>,
        copy: ConfirmationCopy,
    ) -> Notification {
        let notification = match outcome {
            Ok(()) => {
                self.form = ContactForm::default();
                copy.confirmation()
            }
            Err(reason) => copy.failure(&reason),
        };
        self.is_submitting = false;
        notification
    }

    pub fn submit_button(&self) -> SubmitButtonState {
        if self.is_submitting {
            SubmitButtonState {
                disabled: true,
                busy: true,
                label: SUBMITTING_LABEL,
            }
        } else {
            SubmitButtonState {
                disabled: false,
                busy: false,
                label: SUBMIT_LABEL,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::notification::NotificationKind;

    fn filled() -> ContactFormState {
        let mut state = ContactFormState::new();
        state.on_field_change(ContactField::Name, "Maria Silva");
        state.on_field_change(ContactField::Email, "maria@example.com");
        state.on_field_change(ContactField::Subject, "Dúvida sobre produto");
        state.on_field_change(ContactField::Message, "Olá, gostaria de saber...");
        state
    }

    #[test]
    fn test_initial_state_is_empty_and_idle() {
        let state = ContactFormState::new();
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(state.status(), SubmissionStatus::Idle);
        for field in ContactField::ALL {
            assert_eq!(state.form.get(field), "");
        }
    }

    #[test]
    fn test_field_change_touches_only_that_field() {
        let mut state = ContactFormState::new();
        let edits = [
            (ContactField::Email, "a@b.c"),
            (ContactField::Name, "Ana"),
            (ContactField::Email, "ana@loja.com"),
            (ContactField::Phone, "(88) 3423-1234"),
            (ContactField::Name, ""),
            (ContactField::Message, "linha 1\nlinha 2"),
        ];

        let mut expected = ContactForm::default();
        for (field, value) in edits {
            state.on_field_change(field, value);
            expected.set(field, value);
            assert_eq!(state.form, expected);
            assert_eq!(state.form.get(field), value);
        }
    }

    #[test]
    fn test_field_change_by_name() {
        let mut state = ContactFormState::new();
        state.on_field_change_by_name("subject", "Entrega").unwrap();
        assert_eq!(state.form.subject, "Entrega");

        let err = state.on_field_change_by_name("company", "x").unwrap_err();
        assert_eq!(err.0, "company");
        assert_eq!(state.form.subject, "Entrega");
    }

    #[test]
    fn test_missing_required_blocks_submit() {
        let mut state = filled();
        state.on_field_change(ContactField::Subject, "");
        let before = state.clone();

        let err = state.begin_submit().unwrap_err();
        assert_eq!(err, SubmitBlocked::MissingRequired(vec![ContactField::Subject]));
        assert_eq!(state, before);
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_empty_form_reports_all_required_fields() {
        let form = ContactForm::default();
        assert_eq!(
            form.missing_required(),
            vec![
                ContactField::Name,
                ContactField::Email,
                ContactField::Subject,
                ContactField::Message
            ]
        );
        assert!(!form.is_complete());
    }

    #[test]
    fn test_whitespace_passes_required_check() {
        let mut state = filled();
        state.on_field_change(ContactField::Message, "   ");
        assert!(state.form.is_complete());
    }

    #[test]
    fn test_successful_submission_lifecycle() {
        let mut state = filled();
        assert_eq!(state.submit_button().label, SUBMIT_LABEL);

        let request = state.begin_submit().unwrap();
        assert_eq!(request.name, "Maria Silva");
        assert_eq!(request.phone, None);
        assert_eq!(state.status(), SubmissionStatus::Submitting);

        let button = state.submit_button();
        assert!(button.disabled);
        assert!(button.busy);
        assert_eq!(button.label, SUBMITTING_LABEL);

        let notification = state.complete_submit(Ok(()), ConfirmationCopy::Detailed);
        assert_eq!(notification.kind, NotificationKind::Success);
        assert_eq!(state, ContactFormState::default());
        assert_eq!(
            state.submit_button(),
            SubmitButtonState {
                disabled: false,
                busy: false,
                label: SUBMIT_LABEL
            }
        );
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let mut state = filled();
        state.begin_submit().unwrap();
        assert_eq!(state.begin_submit(), Err(SubmitBlocked::AlreadySubmitting));
        assert!(state.is_submitting);
    }

    #[test]
    fn test_edits_during_flight_are_wiped_by_reset() {
        let mut state = filled();
        state.begin_submit().unwrap();
        state.on_field_change(ContactField::Message, "editado durante o envio");
        assert_eq!(state.form.message, "editado durante o envio");

        state.complete_submit(Ok(()), ConfirmationCopy::Short);
        assert_eq!(state.form.message, "");
    }

    #[test]
    fn test_failed_submission_keeps_input() {
        let mut state = filled();
        state.begin_submit().unwrap();
        let before = state.form.clone();

        let notification =
            state.complete_submit(Err("HTTP 500".to_string()), ConfirmationCopy::Detailed);
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(state.form, before);
        assert_eq!(state.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_blocked_message_lists_fields() {
        let err = SubmitBlocked::MissingRequired(vec![ContactField::Name, ContactField::Email]);
        assert_eq!(err.to_string(), "Required fields are empty: name, email");
    }
}
