use crate::client::config::ClientConfig;
use crate::error::{RequestFailure, Result};
use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::policies::ExponentialBackoff;
use reqwest_retry::RetryTransientMiddleware;
use std::fs::File;
use std::io::Read;

pub fn build_client(config: &ClientConfig) -> Result<ClientWithMiddleware> {
    // No idle connections are kept: each call opens and closes its own.
    let mut client_builder = reqwest::Client::builder()
        .timeout(config.timeout)
        .pool_max_idle_per_host(0)
        .use_rustls_tls();
    if config.use_tls {
        client_builder = client_builder
            .min_tls_version(reqwest::tls::Version::TLS_1_2)
            .https_only(true);
    }
    if let Some(cert_path) = &config.tls_cert {
        let cert = read_certificate(cert_path)?;
        client_builder = client_builder.add_root_certificate(cert);
    }
    let client = client_builder.build().map_err(|err| {
        RequestFailure::new(format!("Error message from request builder: {:?}", err))
    })?;
    Ok(client_with_retries(config.n_retries, client))
}

fn read_certificate(cert_path: &str) -> Result<reqwest::Certificate> {
    let mut cert_buf = vec![];
    File::open(cert_path)
        .and_then(|mut file| file.read_to_end(&mut cert_buf))
        .map_err(|err| {
            RequestFailure::new(format!(
                "Error message from reading TLS certificate: {:?}",
                err
            ))
        })?;
    reqwest::Certificate::from_pem(&cert_buf).map_err(|err| {
        RequestFailure::new(format!("Error message from request builder: {:?}", err))
    })
}

pub fn client_with_retries(n_retries: u32, client: Client) -> ClientWithMiddleware {
    if n_retries == 0 {
        return ClientBuilder::new(client).build();
    }
    let retry_policy = ExponentialBackoff::builder()
        .retry_bounds(
            std::time::Duration::from_millis(30),
            std::time::Duration::from_millis(3000),
        )
        .build_with_max_retries(n_retries);
    let retry_middleware = RetryTransientMiddleware::new_with_policy(retry_policy);
    ClientBuilder::new(client).with(retry_middleware).build()
}
