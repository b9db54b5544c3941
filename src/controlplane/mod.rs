pub mod import;

use crate::error::{RequestFailure, Result};
use serde_json::Value;

pub(crate) const POST: &str = "post";
pub(crate) const GET: &str = "get";

// Turns the outcome of a single control plane call into the decoded JSON
// body, covering connection errors, bad status codes and body parsing.
pub(crate) async fn handle_control_plane_response(
    resp: reqwest_middleware::Result<reqwest::Response>,
    verb: &str,
    url: &str,
) -> Result<Value> {
    let resp = resp.map_err(|err| RequestFailure::transport(verb, url, err))?;
    let status = resp.status();
    if !status.is_success() {
        return Err(RequestFailure::status(verb, url, status));
    }
    resp.json::<Value>().await.map_err(|err| {
        if err.is_decode() {
            RequestFailure::unparsable(url, err)
        } else {
            RequestFailure::transport(verb, url, err)
        }
    })
}
