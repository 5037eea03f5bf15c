use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Поле формы обратной связи
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

/// Имя поля не соответствует ни одному полю формы
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown contact form field: {0}")]
pub struct UnknownField(pub String);

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Value of the HTML `name` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }

    /// Fields carrying the `required` attribute. Phone is optional.
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Phone)
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}
