use crate::domain::error::CompareError;
use crate::infrastructure::config::Config;
use crate::infrastructure::network::client::HttpTranslator;
use crate::infrastructure::network::http::create_client;
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http_client: Client,
    pub translator: Arc<HttpTranslator>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, CompareError> {
        let http_client = create_client(&config)?;
        let translator = Arc::new(HttpTranslator::new(
            http_client.clone(),
            config.base_url.clone(),
        ));

        Ok(Self {
            config: Arc::new(config),
            http_client,
            translator,
        })
    }
}
