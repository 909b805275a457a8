use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// How the response extractor locates the JSON array inside the model's text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractStrategy {
    /// Span from the first `[` to the last `]` of the text.
    #[default]
    BracketSpan,
    /// First balanced, string-aware `[...]` span that parses as an array,
    /// tried from each `[` in turn.
    BalancedArray,
}

impl std::fmt::Display for ExtractStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractStrategy::BracketSpan => write!(f, "bracket-span"),
            ExtractStrategy::BalancedArray => write!(f, "balanced"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub gemini_timeout_secs: u64,
    /// Enables the Google Maps grounding tool on every search request.
    pub maps_grounding: bool,
    pub extract_strategy: ExtractStrategy,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("gemini_api_key", &"[redacted]")
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("gemini_timeout_secs", &self.gemini_timeout_secs)
            .field("maps_grounding", &self.maps_grounding)
            .field("extract_strategy", &self.extract_strategy)
            .finish()
    }
}
