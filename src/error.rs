use thiserror::Error;

/// The one error kind surfaced by the import client. Status failures,
/// transport failures and malformed responses all end up here; the message
/// names the url that was being called.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RequestFailure {
    message: String,
}

impl RequestFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn status(verb: &str, url: &str, status: reqwest::StatusCode) -> Self {
        Self::new(format!(
            "Failed to {} url: {}, status code: {}",
            verb,
            url,
            status.as_u16()
        ))
    }

    pub fn transport(verb: &str, url: &str, err: impl std::fmt::Display) -> Self {
        Self::new(format!("Failed to {} url: {}, error: {}", verb, url, err))
    }

    pub fn unparsable(url: &str, err: impl std::fmt::Display) -> Self {
        Self::new(format!(
            "Failed to parse response from url: {}, error: {}",
            url, err
        ))
    }

    pub fn missing_job_id(url: &str) -> Self {
        Self::new(format!(
            "Illegal result from url: {}, missing job id in response",
            url
        ))
    }

    pub fn invalid(url: &str, reason: &str) -> Self {
        Self::new(format!("Invalid request for url: {}, {}", url, reason))
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type Result<T> = std::result::Result<T, RequestFailure>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_embeds_url_and_code() {
        let err = RequestFailure::status(
            "get",
            "https://svc/list",
            reqwest::StatusCode::NOT_FOUND,
        );
        assert_eq!(
            err.to_string(),
            "Failed to get url: https://svc/list, status code: 404"
        );
    }

    #[test]
    fn missing_job_id_differs_from_status_failure() {
        let url = "https://svc/import";
        let missing = RequestFailure::missing_job_id(url);
        let status = RequestFailure::status("post", url, reqwest::StatusCode::OK);
        assert_ne!(missing.message(), status.message());
        assert!(missing.message().contains(url));
        assert!(missing.message().contains("missing job id"));
    }
}
