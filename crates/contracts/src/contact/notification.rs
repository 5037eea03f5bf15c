use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// Уведомление для toast-сервиса: только заголовок и текст
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Success,
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            kind: NotificationKind::Error,
        }
    }
}

/// Confirmation wording. Two versions of the section shipped with
/// different copy; `Detailed` is the later one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfirmationCopy {
    #[default]
    Detailed,
    Short,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown confirmation copy: {0} (expected \"detailed\" or \"short\")")]
pub struct UnknownCopy(pub String);

impl ConfirmationCopy {
    pub fn confirmation(&self) -> Notification {
        match self {
            Self::Detailed => Notification::success(
                "Mensagem enviada com sucesso!",
                "Obrigado pelo contato. Nossa equipe retornará em até 24 horas.",
            ),
            Self::Short => Notification::success(
                "Mensagem enviada!",
                "Obrigado pelo contato. Retornaremos em breve!",
            ),
        }
    }

    /// Only reachable once a real backend can reject a message.
    pub fn failure(&self, reason: &str) -> Notification {
        Notification::error(
            "Não foi possível enviar a mensagem",
            format!(
                "{}. Tente novamente ou fale conosco pelo WhatsApp.",
                reason.trim_end_matches('.')
            ),
        )
    }
}

impl FromStr for ConfirmationCopy {
    type Err = UnknownCopy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "detailed" => Ok(Self::Detailed),
            "short" => Ok(Self::Short),
            _ => Err(UnknownCopy(s.to_string())),
        }
    }
}
