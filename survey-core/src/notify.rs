use crate::error::SubmitError;
use std::time::Duration;

pub const SUCCESS_TITLE: &str = "Resposta enviada com sucesso!";
pub const FAILURE_TITLE: &str = "Erro ao enviar resposta";
pub const TOAST_DURATION: Duration = Duration::from_millis(5000);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastStatus {
    Success,
    Error,
}

impl ToastStatus {
    pub fn class(self) -> &'static str {
        match self {
            ToastStatus::Success => "success",
            ToastStatus::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: Option<String>,
    pub status: ToastStatus,
    pub duration: Duration,
    pub closable: bool,
}

impl Toast {
    pub fn submitted() -> Self {
        Self {
            title: SUCCESS_TITLE.into(),
            description: None,
            status: ToastStatus::Success,
            duration: TOAST_DURATION,
            closable: true,
        }
    }

    pub fn failed(error: &SubmitError) -> Self {
        Self {
            title: FAILURE_TITLE.into(),
            description: Some(error.message()),
            status: ToastStatus::Error,
            duration: TOAST_DURATION,
            closable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_description_is_error_message_verbatim() {
        let toast = Toast::failed(&SubmitError::Transport("Network error".into()));
        assert_eq!(toast.title, "Erro ao enviar resposta");
        assert_eq!(toast.description.as_deref(), Some("Network error"));
        assert_eq!(toast.status, ToastStatus::Error);

        let toast = Toast::failed(&SubmitError::Rejected {
            status: 422,
            message: "texto inválido".into(),
        });
        assert_eq!(toast.description.as_deref(), Some("texto inválido"));
    }

    #[test]
    fn toasts_last_five_seconds_and_close() {
        for toast in [Toast::submitted(), Toast::failed(&SubmitError::Encode("x".into()))] {
            assert_eq!(toast.duration, Duration::from_secs(5));
            assert!(toast.closable);
        }
        assert_eq!(Toast::submitted().description, None);
    }
}
