use tracing::{info, warn};

use super::transport::{ContactMessage, SendError};
use crate::i18n::ContactStrings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    None,
    Success,
    Error,
}

/// Inline feedback under the form. Text is always present for a non-`None` status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl FormStatus {
    pub fn kind(&self) -> StatusKind {
        match self {
            Self::None => StatusKind::None,
            Self::Success(_) => StatusKind::Success,
            Self::Error(_) => StatusKind::Error,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Success(text) | Self::Error(text) => Some(text),
        }
    }
}

/// Where the flow settled after its last transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStart {
    /// A required field was empty; the error status is set.
    Invalid,
    /// A submission is already in flight; nothing changed.
    AlreadySubmitting,
    /// The caller must hand this message to the transport and then call [`ContactForm::finish`].
    Started(ContactMessage),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    is_submitting: bool,
    status: FormStatus,
    phase: SubmissionPhase,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            is_submitting: false,
            status: FormStatus::None,
            phase: SubmissionPhase::Idle,
        }
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn update(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Presence check only: no format or length rules.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        [ContactField::Name, ContactField::Email, ContactField::Message]
            .into_iter()
            .filter(|field| self.value(*field).is_empty())
            .collect()
    }

    /// Validate and, when valid, enter the busy window.
    pub fn begin_submit(&mut self, copy: &ContactStrings) -> SubmitStart {
        if self.is_submitting {
            warn!("contact submit ignored: a submission is already in flight");
            return SubmitStart::AlreadySubmitting;
        }

        let missing = self.missing_fields();
        if !missing.is_empty() {
            info!(?missing, "contact form rejected");
            self.status = FormStatus::Error(copy.error.clone());
            self.phase = SubmissionPhase::Idle;
            return SubmitStart::Invalid;
        }

        self.is_submitting = true;
        self.status = FormStatus::None;
        self.phase = SubmissionPhase::Submitting;
        SubmitStart::Started(ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Leave the busy window with the transport's verdict.
    pub fn finish(&mut self, outcome: Result<(), SendError>, copy: &ContactStrings) {
        if !self.is_submitting {
            warn!("contact finish without a submission in flight");
            return;
        }
        self.is_submitting = false;

        match outcome {
            Ok(()) => {
                info!("contact message sent");
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.status = FormStatus::Success(copy.success.clone());
                self.phase = SubmissionPhase::Succeeded;
            }
            Err(err) => {
                warn!(%err, "contact message failed");
                self.status = FormStatus::Error(copy.send_failed.clone());
                self.phase = SubmissionPhase::Failed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::bundle;
    use crate::preferences::Language;

    fn copy() -> &'static ContactStrings {
        &bundle(Language::Pt).contact
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.update(ContactField::Name, "Ana");
        form.update(ContactField::Email, "ana@example.com");
        form.update(ContactField::Message, "Olá");
        form
    }

    #[test]
    fn any_empty_field_is_rejected_without_touching_values() {
        for empty in [ContactField::Name, ContactField::Email, ContactField::Message] {
            let mut form = filled();
            form.update(empty, "");
            let before = (form.name.clone(), form.email.clone(), form.message.clone());

            assert_eq!(form.begin_submit(copy()), SubmitStart::Invalid);
            assert_eq!(form.status().kind(), StatusKind::Error);
            assert_eq!(form.status().text(), Some(copy().error.as_str()));
            assert!(!form.is_submitting());
            assert_eq!(form.phase(), SubmissionPhase::Idle);
            assert_eq!(before, (form.name.clone(), form.email.clone(), form.message.clone()));
        }
    }

    #[test]
    fn valid_submission_goes_through_submitting_then_succeeded() {
        let mut form = filled();
        let started = form.begin_submit(copy());
        assert_eq!(
            started,
            SubmitStart::Started(ContactMessage {
                name: "Ana".into(),
                email: "ana@example.com".into(),
                message: "Olá".into(),
            })
        );
        assert!(form.is_submitting());
        assert_eq!(form.phase(), SubmissionPhase::Submitting);
        assert_eq!(form.status(), &FormStatus::None);

        form.finish(Ok(()), copy());
        assert!(!form.is_submitting());
        assert_eq!(form.phase(), SubmissionPhase::Succeeded);
        assert_eq!(form.status().kind(), StatusKind::Success);
        assert_eq!(form.status().text(), Some(copy().success.as_str()));
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    }

    #[test]
    fn failed_send_preserves_input() {
        let mut form = filled();
        assert!(matches!(form.begin_submit(copy()), SubmitStart::Started(_)));
        form.finish(Err(SendError::Unavailable), copy());

        assert!(!form.is_submitting());
        assert_eq!(form.phase(), SubmissionPhase::Failed);
        assert_eq!(form.status().text(), Some(copy().send_failed.as_str()));
        assert_eq!(form.name, "Ana");
        assert_eq!(form.message, "Olá");
    }

    #[test]
    fn second_submit_while_busy_is_refused() {
        let mut form = filled();
        assert!(matches!(form.begin_submit(copy()), SubmitStart::Started(_)));
        for _ in 0..5 {
            assert_eq!(form.begin_submit(copy()), SubmitStart::AlreadySubmitting);
        }
        assert!(form.is_submitting());

        form.finish(Ok(()), copy());
        assert!(!form.is_submitting());
    }

    #[test]
    fn resubmit_after_fixing_invalid_form() {
        let mut form = filled();
        form.update(ContactField::Email, "");
        assert_eq!(form.begin_submit(copy()), SubmitStart::Invalid);

        form.update(ContactField::Email, "ana@example.com");
        assert!(matches!(form.begin_submit(copy()), SubmitStart::Started(_)));
        assert_eq!(form.status().kind(), StatusKind::None);
    }

    #[test]
    fn stray_finish_is_ignored() {
        let mut form = filled();
        form.finish(Ok(()), copy());
        assert_eq!(form.name, "Ana");
        assert_eq!(form.status(), &FormStatus::None);
    }

    #[test]
    fn whitespace_counts_as_present() {
        let mut form = filled();
        form.update(ContactField::Message, " ");
        assert!(form.missing_fields().is_empty());
    }
}
