use async_trait::async_trait;
use contracts::contact::ContactMessageRequest;
use thiserror::Error;

/// Ошибки отправки сообщения
///
/// The simulated submitter never fails; these exist for a real backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Message rejected: {0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Outbound `submit_contact_message(FormState) -> success/failure`.
///
/// The view model only talks to this trait, so the simulated delay can be
/// swapped for an HTTP call without touching the state machine.
#[async_trait(?Send)]
pub trait ContactSubmitter {
    async fn submit_contact_message(&self, request: ContactMessageRequest)
        -> Result<(), SubmitError>;
}

/// Fixed-delay no-op: waits on a browser timer, performs no I/O.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmitter {
    pub delay_ms: u32,
}

impl SimulatedSubmitter {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

#[async_trait(?Send)]
impl ContactSubmitter for SimulatedSubmitter {
    async fn submit_contact_message(
        &self,
        request: ContactMessageRequest,
    ) -> Result<(), SubmitError> {
        log::debug!(
            "Simulating contact submission from {} ({} ms)",
            request.email,
            self.delay_ms
        );
        gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        Ok(())
    }
}
