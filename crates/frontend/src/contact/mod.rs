//! Contact Section UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: submission seam (`ContactSubmitter`) and the simulated submitter
//! - notifier.rs: toast seam (`Notifier`)
//! - view_model.rs: FormState signal, commands and the submission flow
//! - info.rs: static content renderer (contact methods, hours, socials)
//! - view.rs: Leptos components (pure UI)

mod info;
mod model;
mod notifier;
mod view;
mod view_model;

pub use info::{block_ids, BusinessHours, ContactMethods, SocialLinks};
pub use model::{ContactSubmitter, SimulatedSubmitter, SubmitError};
pub use notifier::{Notifier, ToastNotifier};
pub use view::{ContactFormView, ContactSection};
pub use view_model::{run_submission, ContactFormViewModel, FormStore, SubmissionError};
