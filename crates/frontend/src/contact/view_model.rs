use super::model::ContactSubmitter;
use super::notifier::Notifier;
use contracts::contact::{
    ConfirmationCopy, ContactField, ContactFormState, Notification, SubmitBlocked,
    SubmitButtonState,
};
use leptos::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

/// Owner of the single FormState record.
pub trait FormStore {
    /// Mutate the state in place. `None` once the store has been dropped
    /// (e.g. the component unmounted while a submission was in flight).
    fn with_state<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> Option<R>;
}

impl FormStore for RwSignal<ContactFormState> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl FormStore for Rc<RefCell<ContactFormState>> {
    fn with_state<R>(&self, f: impl FnOnce(&mut ContactFormState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error(transparent)]
    Blocked(#[from] SubmitBlocked),

    #[error("Contact form was unmounted before the submission finished")]
    Unmounted,
}

/// Idle → Submitting → Idle.
///
/// No borrow of the store is held across the await, so input events keep
/// mutating the form while the submitter runs; those edits are cleared by
/// the reset on success.
pub async fn run_submission<S, N>(
    store: &S,
    submitter: &dyn ContactSubmitter,
    notifier: &N,
    copy: ConfirmationCopy,
) -> Result<Notification, SubmissionError>
where
    S: FormStore,
    N: Notifier + ?Sized,
{
    let request = match store.with_state(ContactFormState::begin_submit) {
        Some(Ok(request)) => request,
        Some(Err(blocked)) => {
            log::debug!("Contact submit ignored: {}", blocked);
            return Err(blocked.into());
        }
        None => return Err(SubmissionError::Unmounted),
    };

    log::info!("Submitting contact message: {}", request.subject);
    let outcome = submitter
        .submit_contact_message(request)
        .await
        .map_err(|e| e.to_string());
    if let Err(reason) = &outcome {
        log::warn!("Contact submission failed: {}", reason);
    }

    let notification = store
        .with_state(|state| state.complete_submit(outcome, copy))
        .ok_or(SubmissionError::Unmounted)?;
    log::info!("Contact submission finished: {}", notification.title);

    notifier.notify(notification.clone());
    Ok(notification)
}

/// ViewModel for the contact form
#[derive(Clone)]
pub struct ContactFormViewModel {
    pub state: RwSignal<ContactFormState>,
    submitter: Rc<dyn ContactSubmitter>,
    copy: ConfirmationCopy,
}

impl ContactFormViewModel {
    pub fn new(submitter: Rc<dyn ContactSubmitter>, copy: ConfirmationCopy) -> Self {
        Self {
            state: RwSignal::new(ContactFormState::new()),
            submitter,
            copy,
        }
    }

    pub fn field(&self, field: ContactField) -> impl Fn() -> String + Copy + 'static {
        let state = self.state;
        move || state.with(|s| s.form.get(field).to_string())
    }

    pub fn submit_button(&self) -> impl Fn() -> SubmitButtonState + Copy + 'static {
        let state = self.state;
        move || state.with(|s| s.submit_button())
    }

    pub fn on_field_change(&self, field: ContactField, value: String) {
        self.state.update(|s| s.on_field_change(field, value));
    }

    /// Called from the form's submit event, i.e. after the browser's
    /// required-field check has passed.
    pub fn submit_command(&self, notifier: Rc<dyn Notifier>) {
        let state = self.state;
        let submitter = self.submitter.clone();
        let copy = self.copy;
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = run_submission(&state, submitter.as_ref(), notifier.as_ref(), copy).await
            {
                log::debug!("Contact submission not completed: {}", e);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::model::SubmitError;
    use async_trait::async_trait;
    use contracts::contact::{ContactMessageRequest, ContactForm, NotificationKind};
    use tokio::sync::oneshot;

    #[derive(Default)]
    struct RecordingNotifier {
        received: RefCell<Vec<Notification>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notification: Notification) {
            self.received.borrow_mut().push(notification);
        }
    }

    /// Records the submit button while the request is in flight.
    struct ProbeSubmitter {
        store: Rc<RefCell<ContactFormState>>,
        seen: RefCell<Vec<(ContactMessageRequest, SubmitButtonState)>>,
        result: Result<(), SubmitError>,
    }

    impl ProbeSubmitter {
        fn new(store: &Rc<RefCell<ContactFormState>>, result: Result<(), SubmitError>) -> Self {
            Self {
                store: store.clone(),
                seen: RefCell::new(Vec::new()),
                result,
            }
        }
    }

    #[async_trait(?Send)]
    impl ContactSubmitter for ProbeSubmitter {
        async fn submit_contact_message(
            &self,
            request: ContactMessageRequest,
        ) -> Result<(), SubmitError> {
            let button = self.store.borrow().submit_button();
            self.seen.borrow_mut().push((request, button));
            self.result.clone()
        }
    }

    /// Holds the submission open until the test releases it.
    struct GatedSubmitter {
        gate: RefCell<Option<oneshot::Receiver<()>>>,
    }

    #[async_trait(?Send)]
    impl ContactSubmitter for GatedSubmitter {
        async fn submit_contact_message(
            &self,
            _request: ContactMessageRequest,
        ) -> Result<(), SubmitError> {
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            Ok(())
        }
    }

    fn maria() -> Rc<RefCell<ContactFormState>> {
        let store = Rc::new(RefCell::new(ContactFormState::new()));
        store.with_state(|s| {
            s.on_field_change(ContactField::Name, "Maria Silva");
            s.on_field_change(ContactField::Email, "maria@example.com");
            s.on_field_change(ContactField::Subject, "Dúvida sobre produto");
            s.on_field_change(ContactField::Message, "Olá, gostaria de saber...");
            s.on_field_change(ContactField::Phone, "");
        });
        store
    }

    #[tokio::test]
    async fn test_submission_scenario() {
        let store = maria();
        let submitter = ProbeSubmitter::new(&store, Ok(()));
        let notifier = RecordingNotifier::default();

        let notification = run_submission(&store, &submitter, &notifier, ConfirmationCopy::Detailed)
            .await
            .unwrap();

        let seen = submitter.seen.borrow();
        assert_eq!(seen.len(), 1);
        let (request, button) = &seen[0];
        assert_eq!(request.subject, "Dúvida sobre produto");
        assert_eq!(request.phone, None);
        assert!(button.disabled && button.busy);

        assert_eq!(notification, ConfirmationCopy::Detailed.confirmation());
        assert_eq!(*notifier.received.borrow(), vec![notification]);

        let state = store.borrow();
        assert_eq!(state.form, ContactForm::default());
        assert!(!state.is_submitting);
        assert!(!state.submit_button().disabled);
    }

    #[tokio::test]
    async fn test_blocked_submit_does_nothing() {
        let store = maria();
        store.with_state(|s| s.on_field_change(ContactField::Email, ""));
        let before = store.borrow().clone();
        let submitter = ProbeSubmitter::new(&store, Ok(()));
        let notifier = RecordingNotifier::default();

        let err = run_submission(&store, &submitter, &notifier, ConfirmationCopy::Short)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            SubmissionError::Blocked(SubmitBlocked::MissingRequired(vec![ContactField::Email]))
        );
        assert!(submitter.seen.borrow().is_empty());
        assert!(notifier.received.borrow().is_empty());
        assert_eq!(*store.borrow(), before);
    }

    #[tokio::test]
    async fn test_edits_during_flight_are_cleared() {
        let store = maria();
        let (release, gate) = oneshot::channel();
        let submitter = GatedSubmitter {
            gate: RefCell::new(Some(gate)),
        };
        let notifier = RecordingNotifier::default();

        let flow = run_submission(&store, &submitter, &notifier, ConfirmationCopy::Short);
        let user = async {
            while !store.borrow().is_submitting {
                tokio::task::yield_now().await;
            }
            assert!(store.borrow().submit_button().busy);
            store.with_state(|s| s.on_field_change(ContactField::Message, "mais uma coisa"));
            let _ = release.send(());
        };
        let (result, ()) = tokio::join!(flow, user);

        assert_eq!(result.unwrap().kind, NotificationKind::Success);
        assert_eq!(store.borrow().form.message, "");
        assert!(!store.borrow().is_submitting);
    }

    #[tokio::test]
    async fn test_backend_failure_keeps_input() {
        let store = maria();
        let submitter = ProbeSubmitter::new(&store, Err(SubmitError::Network("offline".into())));
        let notifier = RecordingNotifier::default();

        let notification = run_submission(&store, &submitter, &notifier, ConfirmationCopy::Detailed)
            .await
            .unwrap();

        assert_eq!(notification.kind, NotificationKind::Error);
        assert!(notification.description.contains("offline"));
        let state = store.borrow();
        assert_eq!(state.form.name, "Maria Silva");
        assert!(!state.is_submitting);
    }

    #[test]
    fn test_signal_store() {
        let owner = Owner::new();
        owner.set();

        let signal = RwSignal::new(ContactFormState::new());
        assert_eq!(
            signal.with_state(|s| {
                s.on_field_change(ContactField::Name, "Ana");
                s.form.name.clone()
            }),
            Some("Ana".to_string())
        );
        assert_eq!(signal.get_untracked().form.name, "Ana");

        signal.dispose();
        assert_eq!(signal.with_state(|s| s.is_submitting), None);
    }
}
