use super::form::ContactForm;
use serde::{Deserialize, Serialize};

/// Payload of `submit_contact_message`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessageRequest {
    pub name: String,
    pub email: String,
    /// Телефон необязателен: пустая строка передаётся как отсутствие значения
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

impl From<&ContactForm> for ContactMessageRequest {
    fn from(form: &ContactForm) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            phone: if form.phone.is_empty() {
                None
            } else {
                Some(form.phone.clone())
            },
            subject: form.subject.clone(),
            message: form.message.clone(),
        }
    }
}
