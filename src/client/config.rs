use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    // 0 means every call sends exactly one request
    pub n_retries: u32,
    pub tls_cert: Option<String>,
    pub use_tls: bool,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfigBuilder::new().build()
    }
}

pub struct ClientConfigBuilder {
    timeout: Option<Duration>,
    use_tls: bool,
    tls_cert: Option<String>,
    n_retries: Option<u32>,
}

impl ClientConfigBuilder {
    pub fn new() -> ClientConfigBuilder {
        ClientConfigBuilder {
            timeout: None,
            n_retries: None,
            tls_cert: None,
            use_tls: false,
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> ClientConfigBuilder {
        self.timeout = Some(timeout);
        self
    }

    pub fn timeout_secs(self, secs: u64) -> ClientConfigBuilder {
        self.timeout(Duration::from_secs(secs))
    }

    pub fn n_retries(mut self, n: u32) -> ClientConfigBuilder {
        self.n_retries = Some(n);
        self
    }

    pub fn tls_cert_opt(mut self, cert: Option<String>) -> ClientConfigBuilder {
        self.tls_cert = cert;
        self
    }

    pub fn use_tls(mut self, use_tls: bool) -> ClientConfigBuilder {
        self.use_tls = use_tls;
        self
    }

    pub fn build(self) -> ClientConfig {
        ClientConfig {
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            n_retries: self.n_retries.unwrap_or(0),
            tls_cert: self.tls_cert,
            use_tls: self.use_tls,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_twenty_seconds_and_no_retries() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(20));
        assert_eq!(config.n_retries, 0);
        assert!(!config.use_tls);
        assert!(config.tls_cert.is_none());
    }

    #[test]
    fn builder_overrides() {
        let config = ClientConfig::builder()
            .timeout_secs(3)
            .n_retries(2)
            .use_tls(true)
            .tls_cert_opt(Some("/etc/ca.pem".into()))
            .build();
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.n_retries, 2);
        assert!(config.use_tls);
        assert_eq!(config.tls_cert.as_deref(), Some("/etc/ca.pem"));
    }
}
