use crate::client::{ClientConfig, ImportLogger};
use crate::controlplane::import::{ImportClient, SubmitImportResponse};
use crate::error::{RequestFailure, Result};
use crate::input::{ImportJobRequest, JobListQuery, JobProgressQuery};
use serde_json::Value;
use std::future::Future;

/// Thread-blocking version of [`ImportClient`]. Every call waits for its one
/// round trip (bounded by the configured timeout) before returning.
#[derive(Clone, Debug)]
pub struct BlockingImportClient {
    inner: ImportClient,
}

impl BlockingImportClient {
    pub fn new(config: &ClientConfig, logger: ImportLogger) -> Result<Self> {
        Ok(Self {
            inner: ImportClient::new(config, logger)?,
        })
    }

    pub fn submit_import(
        &self,
        url: &str,
        request: &ImportJobRequest,
    ) -> Result<SubmitImportResponse> {
        let client = self.inner.clone();
        let url = url.to_owned();
        let request = request.clone();
        run_blocking(async move { client.submit_import(&url, &request).await })
    }

    pub fn get_job_progress(&self, url: &str, query: &JobProgressQuery) -> Result<Value> {
        let client = self.inner.clone();
        let url = url.to_owned();
        let query = query.clone();
        run_blocking(async move { client.get_job_progress(&url, &query).await })
    }

    pub fn list_jobs(&self, url: &str, query: &JobListQuery) -> Result<Value> {
        let client = self.inner.clone();
        let url = url.to_owned();
        let query = query.clone();
        run_blocking(async move { client.list_jobs(&url, &query).await })
    }
}

// Drives the future on its own thread and runtime, so this works whether or
// not the caller is already inside a tokio runtime.
fn run_blocking<F, T>(future: F) -> Result<T>
where
    F: Future<Output = Result<T>> + Send + 'static,
    T: Send + 'static,
{
    let handle = std::thread::spawn(move || {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|err| RequestFailure::new(format!("Could not start runtime: {}", err)))?
            .block_on(future)
    });
    handle
        .join()
        .map_err(|_| RequestFailure::new("Request failed: request thread panicked"))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::global_logger;

    #[test]
    fn run_blocking_returns_the_future_output() {
        let out = run_blocking(async { Ok::<_, RequestFailure>(7) }).unwrap();
        assert_eq!(out, 7);
    }

    #[tokio::test]
    async fn usable_from_inside_a_runtime() {
        let client = BlockingImportClient::new(&ClientConfig::default(), global_logger()).unwrap();
        let err = client
            .get_job_progress("http://127.0.0.1:9/get", &JobProgressQuery::new("", "c"))
            .unwrap_err();
        assert!(err.message().starts_with("Invalid request for url"));
    }
}
