use contracts::contact::{Notification, NotificationKind};
use leptos::prelude::*;
use thaw::*;

/// Outbound notification service: receives a title and a description,
/// everything about display and dismissal is up to the implementation.
pub trait Notifier {
    fn notify(&self, notification: Notification);
}

/// Shows notifications as thaw toasts.
///
/// Must be created inside a component rendered under `ToasterProvider`.
#[derive(Clone)]
pub struct ToastNotifier {
    toaster: ToasterInjection,
}

impl ToastNotifier {
    pub fn from_context() -> Self {
        Self {
            toaster: ToasterInjection::expect_context(),
        }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        let Notification {
            title,
            description,
            kind,
        } = notification;
        let intent = match kind {
            NotificationKind::Success => ToastIntent::Success,
            NotificationKind::Error => ToastIntent::Error,
        };

        self.toaster.dispatch_toast(
            move || {
                view! {
                    <Toast>
                        <ToastTitle>{title}</ToastTitle>
                        <ToastBody>{description}</ToastBody>
                    </Toast>
                }
            },
            ToastOptions::default().with_intent(intent),
        );
    }
}
