use super::{handle_control_plane_response, GET, POST};
use crate::client::logger::emit;
use crate::client::{build_client, ClientConfig, ImportLogger};
use crate::error::{RequestFailure, Result};
use crate::input::{ImportJobRequest, JobListQuery, JobProgressQuery, Params};
use log::Level;
use reqwest_middleware::ClientWithMiddleware;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Job id handed out by the control plane when an import is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImportJobHandle(String);

impl ImportJobHandle {
    pub fn new(job_id: impl Into<String>) -> Self {
        Self(job_id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn progress_query(&self, cluster_id: impl Into<String>) -> JobProgressQuery {
        JobProgressQuery::new(self.0.clone(), cluster_id)
    }
}

impl fmt::Display for ImportJobHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

const JOB_ID_FIELD: &str = "jobID";

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitImportResponse {
    handle: ImportJobHandle,
    body: Value,
}

impl SubmitImportResponse {
    // Only the presence of `jobID` is checked; the rest of the body is kept as is.
    pub fn from_body(url: &str, body: Value) -> Result<Self> {
        let job_id = match body.get(JOB_ID_FIELD) {
            Some(Value::String(id)) => id.clone(),
            Some(other) => other.to_string(),
            None => return Err(RequestFailure::missing_job_id(url)),
        };
        Ok(Self {
            handle: ImportJobHandle(job_id),
            body,
        })
    }

    pub fn job_id(&self) -> &str {
        self.handle.as_str()
    }

    pub fn handle(&self) -> &ImportJobHandle {
        &self.handle
    }

    pub fn body(&self) -> &Value {
        &self.body
    }

    pub fn into_inner(self) -> Value {
        self.body
    }
}

/// Client for the import job endpoints of the control plane. Holds no state
/// besides the transport and the logger, so clones can be used from any
/// number of tasks at once.
#[derive(Clone)]
pub struct ImportClient {
    http: ClientWithMiddleware,
    logger: ImportLogger,
}

impl ImportClient {
    pub fn new(config: &ClientConfig, logger: ImportLogger) -> Result<Self> {
        let http = build_client(config)?;
        Ok(Self { http, logger })
    }

    pub async fn submit_import(
        &self,
        url: &str,
        request: &ImportJobRequest,
    ) -> Result<SubmitImportResponse> {
        request
            .validate()
            .map_err(|reason| self.fail(RequestFailure::invalid(url, &reason)))?;
        let body = self.post_request(url, &request.params()).await?;
        let response = SubmitImportResponse::from_body(url, body).map_err(|e| self.fail(e))?;
        emit(
            self.logger.as_ref(),
            Level::Info,
            &format!(
                "Import job {} submitted for collection {} on cluster {}",
                response.job_id(),
                request.collection_name,
                request.cluster_id
            ),
        );
        Ok(response)
    }

    pub async fn get_job_progress(&self, url: &str, query: &JobProgressQuery) -> Result<Value> {
        query
            .validate()
            .map_err(|reason| self.fail(RequestFailure::invalid(url, &reason)))?;
        self.get_request(url, &query.params()).await
    }

    pub async fn list_jobs(&self, url: &str, query: &JobListQuery) -> Result<Value> {
        query
            .validate()
            .map_err(|reason| self.fail(RequestFailure::invalid(url, &reason)))?;
        self.get_request(url, &query.params()).await
    }

    async fn post_request(&self, url: &str, form: &Params) -> Result<Value> {
        emit(self.logger.as_ref(), Level::Debug, &format!("POST {}", url));
        let resp = self
            .http
            .post(url)
            .headers(crate::client::http_headers())
            .form(form)
            .send()
            .await;
        handle_control_plane_response(resp, POST, url)
            .await
            .map_err(|e| self.fail(e))
    }

    async fn get_request(&self, url: &str, query: &Params) -> Result<Value> {
        emit(self.logger.as_ref(), Level::Debug, &format!("GET {}", url));
        let resp = self
            .http
            .get(url)
            .headers(crate::client::http_headers())
            .query(query)
            .send()
            .await;
        handle_control_plane_response(resp, GET, url)
            .await
            .map_err(|e| self.fail(e))
    }

    fn fail(&self, err: RequestFailure) -> RequestFailure {
        emit(self.logger.as_ref(), Level::Error, err.message());
        err
    }
}

impl fmt::Debug for ImportClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::logger::testing::CapturingLogger;
    use serde_json::json;
    use std::sync::Arc;

    const URL: &str = "https://svc/import";

    #[test]
    fn envelope_extracts_job_id_and_keeps_body() {
        let body = json!({"jobID": "abc123", "extra": {"nested": true}});
        let response = SubmitImportResponse::from_body(URL, body.clone()).unwrap();
        assert_eq!(response.job_id(), "abc123");
        assert_eq!(response.body(), &body);
        assert_eq!(response.into_inner(), body);
    }

    #[test]
    fn numeric_job_id_is_accepted() {
        let response = SubmitImportResponse::from_body(URL, json!({"jobID": 42})).unwrap();
        assert_eq!(response.handle(), &ImportJobHandle::new("42"));
    }

    #[test]
    fn absent_job_id_is_rejected() {
        for body in [
            json!({"data": {"jobId": "abc"}}),
            json!({}),
            json!(["jobID"]),
            json!("jobID"),
        ] {
            let err = SubmitImportResponse::from_body(URL, body).unwrap_err();
            assert_eq!(err, RequestFailure::missing_job_id(URL));
        }
    }

    #[test]
    fn present_job_id_of_any_shape_is_passed_through() {
        for (body, expected) in [
            (json!({"jobID": ""}), ""),
            (json!({"jobID": null}), "null"),
            (json!({"jobID": 1.5}), "1.5"),
            (json!({"jobID": true}), "true"),
            (json!({"jobID": 18446744073709551615u64}), "18446744073709551615"),
        ] {
            let response = SubmitImportResponse::from_body(URL, body.clone()).unwrap();
            assert_eq!(response.job_id(), expected);
            assert_eq!(response.body(), &body);
        }
    }

    #[test]
    fn handle_builds_progress_query() {
        let query = ImportJobHandle::new("j1").progress_query("in01-x");
        assert_eq!(query, JobProgressQuery::new("j1", "in01-x"));
    }

    #[tokio::test]
    async fn invalid_input_fails_before_sending_and_is_logged() {
        let logger = Arc::new(CapturingLogger::default());
        let client = ImportClient::new(&ClientConfig::default(), logger.clone()).unwrap();
        // nothing listens here; validation must reject first
        let url = "http://127.0.0.1:9/list";
        let err = client
            .list_jobs(url, &JobListQuery::new("in01-x", 0, 1))
            .await
            .unwrap_err();
        assert_eq!(
            err.message(),
            "Invalid request for url: http://127.0.0.1:9/list, pageSize must be at least 1"
        );
        let records = logger.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0], (Level::Error, err.message().to_string()));
    }
}
