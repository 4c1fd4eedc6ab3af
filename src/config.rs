use serde::{Deserialize, Serialize};

/// Index settings configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct IndexSettings {
    /// Index individual words of multi-word values in addition to the full value
    pub index_words: bool,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self { index_words: true }
    }
}

impl IndexSettings {
    /// Set whether multi-word values are also indexed word by word
    pub fn with_index_words(mut self, index_words: bool) -> Self {
        self.index_words = index_words;
        self
    }
}

/// Server configuration
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub http_port: u16,
    pub index_settings: IndexSettings,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            http_port: 8080,
            index_settings: IndexSettings::default(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(bind_addr: impl Into<String>, http_port: u16) -> Self {
        Self {
            bind_addr: bind_addr.into(),
            http_port,
            ..Default::default()
        }
    }

    /// Apply index settings to this configuration
    pub fn with_index_settings(mut self, settings: IndexSettings) -> Self {
        self.index_settings = settings;
        self
    }

    /// Get the full listen address for the HTTP server
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.http_port)
    }
}
