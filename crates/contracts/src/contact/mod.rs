//! Contact section contracts
//!
//! Framework-free part of the contact section:
//! - field.rs: form field identifiers
//! - form.rs: FormState and the Idle → Submitting → Idle state machine
//! - notification.rs: confirmation/failure copy for the toast service
//! - request.rs: payload of `submit_contact_message`
//! - content.rs: static display tables generated from content.json

pub mod content;
pub mod field;
pub mod form;
pub mod notification;
pub mod request;

pub use content::{
    field_metadata, BusinessHoursEntry, ContactItem, ContactMethod, FieldMetadata, SocialLink,
    BUSINESS_HOURS, CONTACT_METHODS, FIELDS, SOCIAL_LINKS,
};
pub use field::{ContactField, UnknownField};
pub use form::{ContactForm, ContactFormState, SubmissionStatus, SubmitBlocked, SubmitButtonState};
pub use notification::{ConfirmationCopy, Notification, NotificationKind, UnknownCopy};
pub use request::ContactMessageRequest;
