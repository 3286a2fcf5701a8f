// HTTP client utilities
use crate::domain::error::CompareError;
use crate::infrastructure::config::Config;
use reqwest::Client;
use std::time::Duration;

/// Create the shared HTTP client from configuration
///
/// No request timeout unless `timeout_secs` is set.
pub fn create_client(config: &Config) -> Result<Client, CompareError> {
    let mut builder = Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(30))
        .user_agent(concat!("mtc/", env!("CARGO_PKG_VERSION")));

    if let Some(secs) = config.timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
        let proxy = reqwest::Proxy::all(proxy)
            .map_err(|e| CompareError::Config(format!("Invalid http_proxy: {}", e)))?;
        builder = builder.proxy(proxy);
    }

    Ok(builder.build()?)
}
