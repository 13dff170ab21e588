use crate::dto::ApiErrorDto;
use gloo_net::http::Request;
use survey_core::{CommentPayload, CommentSubmitter, Config, SubmitError};

/// Sends comments to the survey API over `fetch`.
#[derive(Clone, Debug)]
pub struct HttpCommentClient {
    config: Config,
}

impl HttpCommentClient {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn url_for(&self, payload: &CommentPayload) -> String {
        self.config.comment_url(
            &encode_segment(&payload.divergence_point_id),
            &encode_segment(&payload.question_id),
        )
    }
}

impl CommentSubmitter for HttpCommentClient {
    async fn submit_comment(&self, payload: &CommentPayload) -> Result<(), SubmitError> {
        let url = self.url_for(payload);
        log::debug!("POST {url}");

        let request = Request::post(&url)
            .json(payload)
            .map_err(|e| SubmitError::Encode(e.to_string()))?;
        let response = request
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let status_text = response.status_text();
        let body = body_or_empty(status, response.text().await);
        Err(SubmitError::Rejected {
            status,
            message: rejection_message(status, &status_text, &body),
        })
    }
}

/// An unreadable error body is logged and treated as empty.
fn body_or_empty(status: u16, body: Result<String, gloo_net::Error>) -> String {
    match body {
        Ok(body) => body,
        Err(e) => {
            log::debug!("could not read {status} response body: {e}");
            String::new()
        }
    }
}

fn encode_segment(raw: &str) -> String {
    js_sys::encode_uri_component(raw).into()
}

/// Best human-readable text for a failed response: the JSON `message`, the
/// raw body, the status text, then the bare code.
pub fn rejection_message(status: u16, status_text: &str, body: &str) -> String {
    if let Some(message) = serde_json::from_str::<ApiErrorDto>(body)
        .ok()
        .and_then(ApiErrorDto::into_message)
    {
        return message;
    }
    let body = body.trim();
    if !body.is_empty() && !body.starts_with('{') && !body.starts_with('<') {
        return body.to_string();
    }
    if !status_text.trim().is_empty() {
        return status_text.trim().to_string();
    }
    format!("HTTP {status}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_json_message() {
        let body = r#"{"message":"Token expirado","error":"Unauthorized"}"#;
        assert_eq!(rejection_message(401, "Unauthorized", body), "Token expirado");
    }

    #[test]
    fn falls_back_to_error_field() {
        let body = r#"{"error":"Bad Request"}"#;
        assert_eq!(rejection_message(400, "", body), "Bad Request");
    }

    #[test]
    fn plain_text_body_is_used() {
        assert_eq!(rejection_message(502, "Bad Gateway", "upstream down\n"), "upstream down");
    }

    #[test]
    fn html_or_empty_body_uses_status() {
        assert_eq!(rejection_message(500, "Internal Server Error", "<html/>"), "Internal Server Error");
        assert_eq!(rejection_message(503, "", ""), "HTTP 503");
    }

    #[test]
    fn unreadable_body_falls_back_to_status_text() {
        let body = body_or_empty(502, Err(gloo_net::Error::GlooError("stream aborted".into())));
        assert_eq!(body, "");
        assert_eq!(rejection_message(502, "Bad Gateway", &body), "Bad Gateway");
        assert_eq!(body_or_empty(400, Ok("bad".into())), "bad");
    }
}
