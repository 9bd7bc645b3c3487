/// Taboola API client
///
/// Fetches from recommendations.get and normalizes the vendor payload into
/// [`Recommendation`]s. Normalization is deliberately lenient: a response
/// with a missing or malformed item list yields an empty batch, and
/// individual entries that cannot be decoded are dropped without failing the
/// rest.
use reqwest::Client as HttpClient;
use serde_json::Value;

use crate::{
    api::RecommendationSource,
    config::WidgetConfig,
    error::WidgetError,
    models::{Recommendation, TaboolaItem},
};

pub struct TaboolaClient {
    http_client: HttpClient,
}

impl TaboolaClient {
    pub fn new() -> Self {
        Self {
            http_client: HttpClient::new(),
        }
    }
}

impl Default for TaboolaClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the recommendations.get URL with query parameters
pub(crate) fn build_url(config: &WidgetConfig) -> String {
    let source_type_param = config
        .source_type
        .as_ref()
        .map(|t| format!("&source.type={}", t))
        .unwrap_or_default();
    let source_url_param = config
        .source_url
        .as_ref()
        .map(|u| format!("&source.url={}", u))
        .unwrap_or_default();

    format!(
        "{}/{}/recommendations.get?app.type={}&app.apikey={}&count={}{}&source.id={}{}",
        config.api_base_url,
        config.publisher_id,
        config.app_type,
        config.api_key,
        config.count,
        source_type_param,
        config.source_id,
        source_url_param,
    )
}

/// Normalizes a raw Taboola API response into the widget's internal format
///
/// Pure function: never errors, never panics. Vendor field names stop here.
pub fn normalize_response(response: &Value) -> Vec<Recommendation> {
    let Some(list) = response.get("list").and_then(Value::as_array) else {
        return Vec::new();
    };

    list.iter()
        .filter_map(|raw| serde_json::from_value::<TaboolaItem>(raw.clone()).ok())
        .map(Recommendation::from)
        .collect()
}

#[async_trait::async_trait]
impl RecommendationSource for TaboolaClient {
    async fn fetch_recommendations(
        &self,
        config: &WidgetConfig,
    ) -> anyhow::Result<Vec<Recommendation>> {
        let url = build_url(config);
        tracing::debug!(url = %url, "requesting recommendations");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(WidgetError::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(WidgetError::ExternalApi(format!(
                "Taboola API returned status {}: {}",
                status, body
            ))
            .into());
        }

        let payload: Value = response.json().await.map_err(WidgetError::Http)?;
        let recommendations = normalize_response(&payload);

        tracing::info!(
            count = recommendations.len(),
            source = "taboola",
            "recommendations fetched"
        );

        Ok(recommendations)
    }

    fn name(&self) -> &'static str {
        "taboola"
    }
}
