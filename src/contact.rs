use crate::relay::{ContactMessage, RelayError};

pub const SUCCESS_NOTICE: &str = "Message envoyé avec succès. Je vous répondrai rapidement.";
pub const ERROR_NOTICE: &str = "Erreur lors de l’envoi. Réessayez ou contactez-moi directement.";
pub const INCOMPLETE_NOTICE: &str = "Merci de remplir tous les champs avant l’envoi.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
    /// Submit refused, a field is blank.
    Incomplete,
}

impl SubmitStatus {
    pub fn notice(self) -> Option<&'static str> {
        match self {
            Self::Success => Some(SUCCESS_NOTICE),
            Self::Error => Some(ERROR_NOTICE),
            Self::Incomplete => Some(INCOMPLETE_NOTICE),
            Self::Idle | Self::Submitting => None,
        }
    }

    pub fn submit_label(self) -> &'static str {
        if self == Self::Submitting {
            "Envoi en cours…"
        } else {
            "Envoyer"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// Form control name, also the relay template parameter.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Nom",
            Self::Email => "Email",
            Self::Subject => "Objet",
            Self::Message => "Votre message…",
        }
    }
}

/// Contact form values plus the outcome of the last submit.
///
/// `begin_submit` moves to `Submitting` and hands out the message to relay;
/// `complete` records the relay outcome. Success clears the fields, failure
/// keeps them for a retry. Editing after an outcome or a refused submit
/// returns to `Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    fields: ContactMessage,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.fields.name,
            Field::Email => &self.fields.email,
            Field::Subject => &self.fields.subject,
            Field::Message => &self.fields.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.fields.name,
            Field::Email => &mut self.fields.email,
            Field::Subject => &mut self.fields.subject,
            Field::Message => &mut self.fields.message,
        }
    }

    pub fn edit(&mut self, field: Field, value: String) {
        *self.value_mut(field) = value;
        if !self.is_submitting() {
            self.status = SubmitStatus::Idle;
        }
    }

    pub fn missing_field(&self) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|f| self.value(*f).trim().is_empty())
    }

    /// Returns the message to relay, or `None` when a send is already in
    /// flight or a field is blank. A blank field moves to `Incomplete`.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.is_submitting() {
            return None;
        }
        if let Some(field) = self.missing_field() {
            log::debug!("contact form not sent, {} is empty", field.name());
            self.status = SubmitStatus::Incomplete;
            return None;
        }
        self.status = SubmitStatus::Submitting;
        Some(self.fields.clone())
    }

    pub fn complete(&mut self, outcome: Result<(), RelayError>) {
        if !self.is_submitting() {
            log::warn!("relay outcome arrived with no submission in flight");
            return;
        }
        match outcome {
            Ok(()) => {
                log::info!("contact message relayed");
                self.fields = ContactMessage::default();
                self.status = SubmitStatus::Success;
            }
            Err(err) => {
                log::error!("EmailJS error: {err}");
                self.status = SubmitStatus::Error;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use http::StatusCode;

    use super::*;
    use crate::relay::Relay;

    struct MockRelay {
        fail: bool,
        sent: RefCell<Vec<ContactMessage>>,
    }

    impl MockRelay {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Relay for MockRelay {
        async fn submit(&self, message: &ContactMessage) -> Result<(), RelayError> {
            self.sent.borrow_mut().push(message.clone());
            if self.fail {
                Err(RelayError::Rejected {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                    body: "try later".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "Ada".to_string());
        form.edit(Field::Email, "ada@example.com".to_string());
        form.edit(Field::Subject, "Bonjour".to_string());
        form.edit(Field::Message, "Un poste à pourvoir".to_string());
        form
    }

    async fn submit(form: &mut ContactForm, relay: &MockRelay) -> SubmitStatus {
        let message = form.begin_submit().expect("form should start submitting");
        assert_eq!(form.status(), SubmitStatus::Submitting);
        let outcome = relay.submit(&message).await;
        form.complete(outcome);
        form.status()
    }

    #[tokio::test]
    async fn test_successful_submit_clears_fields() {
        let relay = MockRelay::new(false);
        let mut form = filled_form();

        assert_eq!(submit(&mut form, &relay).await, SubmitStatus::Success);
        for field in Field::ALL {
            assert_eq!(form.value(field), "");
        }
        let sent = relay.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].name, "Ada");
        assert_eq!(sent[0].message, "Un poste à pourvoir");
        assert_eq!(form.status().notice(), Some(SUCCESS_NOTICE));
    }

    #[tokio::test]
    async fn test_failed_submit_keeps_fields() {
        let relay = MockRelay::new(true);
        let mut form = filled_form();

        assert_eq!(submit(&mut form, &relay).await, SubmitStatus::Error);
        assert_eq!(form.value(Field::Name), "Ada");
        assert_eq!(form.value(Field::Email), "ada@example.com");
        assert_eq!(form.value(Field::Subject), "Bonjour");
        assert_eq!(form.value(Field::Message), "Un poste à pourvoir");
        assert_eq!(form.status().notice(), Some(ERROR_NOTICE));
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let mut form = filled_form();
        assert_eq!(submit(&mut form, &MockRelay::new(true)).await, SubmitStatus::Error);

        let relay = MockRelay::new(false);
        assert_eq!(submit(&mut form, &relay).await, SubmitStatus::Success);
        assert_eq!(relay.sent.borrow()[0].subject, "Bonjour");
    }

    #[test]
    fn test_submit_while_submitting_is_noop() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_some());
        assert!(form.is_submitting());
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.status(), SubmitStatus::Submitting);
        assert_eq!(form.status().submit_label(), "Envoi en cours…");
    }

    #[test]
    fn test_blank_field_blocks_submit() {
        let mut form = filled_form();
        form.edit(Field::Subject, "   ".to_string());
        assert_eq!(form.missing_field(), Some(Field::Subject));
        assert_eq!(form.begin_submit(), None);
        assert_eq!(form.status(), SubmitStatus::Incomplete);
        assert_eq!(form.status().notice(), Some(INCOMPLETE_NOTICE));
        assert_eq!(form.status().submit_label(), "Envoyer");

        form.edit(Field::Subject, "Bonjour".to_string());
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert!(form.begin_submit().is_some());

        assert_eq!(ContactForm::default().missing_field(), Some(Field::Name));
    }

    #[test]
    fn test_edit_after_outcome_returns_to_idle() {
        let mut form = filled_form();
        form.begin_submit();
        form.complete(Err(RelayError::Transport("offline".to_string())));
        assert_eq!(form.status(), SubmitStatus::Error);

        form.edit(Field::Message, "Nouveau message".to_string());
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.status().notice(), None);
        assert_eq!(form.status().submit_label(), "Envoyer");
    }

    #[test]
    fn test_edit_while_submitting_keeps_status() {
        let mut form = filled_form();
        form.begin_submit();
        form.edit(Field::Name, "Grace".to_string());
        assert_eq!(form.status(), SubmitStatus::Submitting);
    }

    #[test]
    fn test_stray_outcome_is_ignored() {
        let mut form = filled_form();
        form.complete(Ok(()));
        assert_eq!(form.status(), SubmitStatus::Idle);
        assert_eq!(form.value(Field::Name), "Ada");
    }

    #[test]
    fn test_field_names_match_template_params() {
        let names = Field::ALL.map(Field::name);
        assert_eq!(names, ["name", "email", "subject", "message"]);
    }
}
