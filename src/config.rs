use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// TMDB API key. A missing key is not fatal at startup; every chat
    /// turn reports a configuration error until it is provided.
    #[serde(default)]
    pub tmdb_api_key: Option<String>,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Poster image host base URL
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,

    /// Locale used for the first retrieval attempt
    #[serde(default = "default_primary_locale")]
    pub primary_locale: String,

    /// Locale retried when the primary locale yields nothing
    #[serde(default = "default_secondary_locale")]
    pub secondary_locale: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_primary_locale() -> String {
    "tr-TR".to_string()
}

fn default_secondary_locale() -> String {
    "en-US".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tmdb_api_key: None,
            tmdb_api_url: default_tmdb_api_url(),
            image_base_url: default_image_base_url(),
            primary_locale: default_primary_locale(),
            secondary_locale: default_secondary_locale(),
            host: default_host(),
            port: default_port(),
        }
    }
}
