pub mod builder;
pub mod config;
pub mod headers;
pub mod logger;

pub use builder::build_client;
pub use config::{ClientConfig, ClientConfigBuilder, DEFAULT_TIMEOUT};
pub use headers::http_headers;
pub use logger::{global_logger, ImportLogger};
