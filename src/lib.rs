//! Client for the bulk-import REST endpoints of a managed vector database
//! control plane: start an import job for files already uploaded to object
//! storage, poll a job's progress and list the jobs of a cluster.
//!
//! Every call is addressed to a caller supplied url and cluster id, sends
//! exactly one request (unless retries are enabled in [`ClientConfig`]) and
//! fails with a [`RequestFailure`].

pub mod blocking;
pub mod client;
pub mod controlplane;
pub mod error;
pub mod input;

pub use blocking::BlockingImportClient;
pub use client::{global_logger, ClientConfig, ImportLogger};
pub use controlplane::import::{ImportClient, ImportJobHandle, SubmitImportResponse};
pub use error::{RequestFailure, Result};
pub use input::{ImportJobRequest, JobListQuery, JobProgressQuery};

use serde_json::Value;

fn default_client() -> Result<BlockingImportClient> {
    BlockingImportClient::new(&ClientConfig::default(), global_logger())
}

/// Starts an import job and returns the service response, which is
/// guaranteed to carry a `jobID`. `partition_name` of `None` targets the
/// default partition.
pub fn submit_import(
    url: &str,
    object_url: &str,
    access_key: &str,
    secret_key: &str,
    cluster_id: &str,
    collection_name: &str,
    partition_name: Option<&str>,
) -> Result<SubmitImportResponse> {
    let mut request =
        ImportJobRequest::new(object_url, access_key, secret_key, cluster_id, collection_name);
    if let Some(partition) = partition_name {
        request = request.partition(partition);
    }
    default_client()?.submit_import(url, &request)
}

/// Returns the progress response of a job untouched.
pub fn get_job_progress(url: &str, job_id: &str, cluster_id: &str) -> Result<Value> {
    default_client()?.get_job_progress(url, &JobProgressQuery::new(job_id, cluster_id))
}

/// Returns one page of the cluster's import jobs untouched.
pub fn list_jobs(url: &str, cluster_id: &str, page_size: u32, current_page: u32) -> Result<Value> {
    default_client()?.list_jobs(url, &JobListQuery::new(cluster_id, page_size, current_page))
}
