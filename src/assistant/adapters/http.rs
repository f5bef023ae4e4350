//! reqwest-backed adapter for the AI collaborator endpoints.

use crate::assistant::domain::{
    AnalyzeContentRequest, AutoPlanRequest, GenerateContentRequest, PlannedTask,
};
use crate::assistant::ports::{AssistantError, AssistantResult, ContentAssistant};
use crate::config::Config;
use crate::task::domain::{AiScore, ContentAnalysis};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use std::time::Duration;

const GENERATE_PATH: &str = "/api/ai/generate";
const ANALYZE_PATH: &str = "/api/ai/analyze";
const AUTO_PLAN_PATH: &str = "/api/ai/auto-plan";

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnalyzeResponse {
    score: u16,
    #[serde(default)]
    feedback: String,
}

#[derive(Debug, Deserialize)]
struct AutoPlanResponse {
    #[serde(default)]
    tasks: Vec<PlannedTask>,
}

/// Calls the collaborator over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpContentAssistant {
    client: reqwest::Client,
    base_url: String,
}

impl HttpContentAssistant {
    /// Creates an adapter for `base_url` with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantError::Transport`] when the HTTP client cannot be
    /// built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AssistantResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(AssistantError::transport)?;
        let url: String = base_url.into();
        Ok(Self {
            client,
            base_url: url.trim_end_matches('/').to_owned(),
        })
    }

    /// Creates an adapter from the configured URL and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`AssistantError::NotConfigured`] when no URL is set.
    pub fn from_config(config: &Config) -> AssistantResult<Self> {
        let url = config.assistant_url().ok_or(AssistantError::NotConfigured)?;
        Self::new(url, config.assistant_timeout())
    }

    /// Returns the base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, T>(&self, endpoint: &'static str, body: &B) -> AssistantResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{endpoint}", self.base_url);
        tracing::debug!(%url, "calling assistant");
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(AssistantError::transport)?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            tracing::warn!(endpoint, status = status.as_u16(), "assistant call rejected");
            return Err(AssistantError::Status {
                endpoint,
                status: status.as_u16(),
                body: error_body,
            });
        }

        let text = response.text().await.map_err(AssistantError::transport)?;
        serde_json::from_str(&text).map_err(|err| AssistantError::InvalidResponse {
            endpoint,
            reason: err.to_string(),
        })
    }
}

#[async_trait]
impl ContentAssistant for HttpContentAssistant {
    async fn generate(&self, request: &GenerateContentRequest) -> AssistantResult<String> {
        let response: GenerateResponse = self.post(GENERATE_PATH, request).await?;
        Ok(response.content)
    }

    async fn analyze(&self, request: &AnalyzeContentRequest) -> AssistantResult<ContentAnalysis> {
        let response: AnalyzeResponse = self.post(ANALYZE_PATH, request).await?;
        let score = AiScore::new(response.score).map_err(|err| AssistantError::InvalidResponse {
            endpoint: ANALYZE_PATH,
            reason: err.to_string(),
        })?;
        Ok(ContentAnalysis {
            score,
            feedback: response.feedback,
        })
    }

    async fn auto_plan(&self, request: &AutoPlanRequest) -> AssistantResult<Vec<PlannedTask>> {
        let response: AutoPlanResponse = self.post(AUTO_PLAN_PATH, request).await?;
        Ok(response.tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::HttpContentAssistant;
    use crate::assistant::domain::AutoPlanRequest;
    use crate::assistant::ports::{AssistantError, ContentAssistant};
    use crate::config::Config;
    use rstest::rstest;
    use std::time::Duration;

    #[rstest]
    fn from_config_requires_a_url() {
        let result = HttpContentAssistant::from_config(&Config::default());
        assert!(matches!(result, Err(AssistantError::NotConfigured)));
    }

    #[rstest]
    fn trailing_slash_is_trimmed() {
        let assistant = HttpContentAssistant::new("http://localhost:3000/", Duration::from_secs(1))
            .expect("client should build");
        assert_eq!(assistant.base_url(), "http://localhost:3000");
    }

    #[rstest]
    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_error() {
        let assistant = HttpContentAssistant::new("http://127.0.0.1:9", Duration::from_secs(2))
            .expect("client should build");
        let result = assistant.auto_plan(&AutoPlanRequest::new("launch")).await;
        assert!(matches!(result, Err(AssistantError::Transport(_))));
    }
}
