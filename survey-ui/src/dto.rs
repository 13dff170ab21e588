use serde::Deserialize;

/// Error body returned by the comments API on a non-2xx status.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ApiErrorDto {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiErrorDto {
    pub fn into_message(self) -> Option<String> {
        self.message
            .or(self.error)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
    }
}
