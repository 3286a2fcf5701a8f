use crate::domain::error::CompareError;
use crate::domain::model::{
    HealthResponse, ModelId, Settlement, TranslationRequest, TranslationResponse,
};
use crate::domain::traits::Translator;
use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, warn};

/// Translator backed by the HTTP translation API
///
/// Each model lives at `POST {base_url}/translate/{model}`.
#[derive(Clone)]
pub struct HttpTranslator {
    client: Client,
    base_url: String,
}

impl HttpTranslator {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoint(&self, model: ModelId) -> String {
        format!("{}/translate/{}", self.base_url, model.as_str())
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, model: ModelId, text: &str) -> Settlement {
        let url = self.endpoint(model);
        debug!(%model, %url, "sending translation request");

        let body = TranslationRequest {
            text: text.to_string(),
        };
        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!(%model, "backend is rate limiting requests");
            return Err(CompareError::RateLimited { model });
        }

        if !status.is_success() {
            let detail = error_detail(response).await;
            return Err(CompareError::Failed {
                model,
                status: status.as_u16(),
                detail,
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<TranslationResponse>(&body)?;
        debug!(%model, status = status.as_u16(), "translation received");
        Ok(parsed)
    }
}

/// Query `GET {base_url}/health`
pub async fn check_health(client: &Client, base_url: &str) -> Result<HealthResponse, CompareError> {
    let url = format!("{}/health", base_url.trim_end_matches('/'));
    let response = client.get(&url).send().await?;
    let status = response.status();

    if !status.is_success() {
        if let Some(detail) = error_detail(response).await {
            warn!(%detail, "health check failed");
        }
        return Err(CompareError::Unhealthy(status.as_u16()));
    }

    let body = response.text().await?;
    Ok(serde_json::from_str::<HealthResponse>(&body)?)
}

// FastAPI puts the message under "detail", the rate limiter under "error"
async fn error_detail(response: Response) -> Option<String> {
    let text = response.text().await.ok()?;
    let value = serde_json::from_str::<Value>(&text).ok()?;
    let field = value.get("detail").or_else(|| value.get("error"))?;
    match field {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}
