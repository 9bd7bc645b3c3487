use serde::Deserialize;

/// Widget configuration loaded from environment variables
///
/// Every field has a default so the demo binary runs without a populated
/// environment; real embeddings override at least `api_key` and
/// `publisher_id`.
#[derive(Debug, Deserialize, Clone)]
pub struct WidgetConfig {
    /// Which recommendation source to fetch from ("taboola")
    #[serde(default = "default_source")]
    pub source: String,

    /// Publisher identifier assigned by the vendor
    #[serde(default = "default_publisher_id")]
    pub publisher_id: String,

    /// Application type reported to the vendor (desktop, mobile, ...)
    #[serde(default = "default_app_type")]
    pub app_type: String,

    /// Vendor API key
    #[serde(default = "default_api_key")]
    pub api_key: String,

    /// Placement/source identifier for this widget instance
    #[serde(default = "default_source_id")]
    pub source_id: String,

    /// Optional content type of the hosting page (e.g. "video")
    #[serde(default)]
    pub source_type: Option<String>,

    /// Optional URL of the hosting page
    #[serde(default)]
    pub source_url: Option<String>,

    /// Number of recommendations to request
    #[serde(default = "default_count")]
    pub count: u32,

    /// Vendor API base URL
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_source() -> String {
    "taboola".to_string()
}

fn default_publisher_id() -> String {
    "taboola-templates".to_string()
}

fn default_app_type() -> String {
    "desktop".to_string()
}

fn default_api_key() -> String {
    "REPLACE_WITH_YOUR_API_KEY".to_string()
}

fn default_source_id() -> String {
    "demo-source-id".to_string()
}

fn default_count() -> u32 {
    4
}

fn default_api_base_url() -> String {
    "http://api.taboola.com/1.0/json".to_string()
}

impl WidgetConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<WidgetConfig>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            publisher_id: default_publisher_id(),
            app_type: default_app_type(),
            api_key: default_api_key(),
            source_id: default_source_id(),
            source_type: None,
            source_url: None,
            count: default_count(),
            api_base_url: default_api_base_url(),
        }
    }
}
