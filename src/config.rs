//! Query configuration for netjack.
//!
//! Everything a query needs is resolved once from the command line and then
//! passed around immutably. There is no configuration file.

/// Endpoint used when `--api-url` is not given.
pub const DEFAULT_API_URL: &str = "http://localhost:11434/api/generate";

/// Resolved settings for a single query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryConfig {
    /// Model name forwarded to the endpoint as-is.
    pub model: String,
    /// Prompt text forwarded to the endpoint as-is.
    pub prompt: String,
    /// Full URL the payload is posted to.
    pub api_url: String,
}

impl QueryConfig {
    /// Create a config that targets the default local endpoint.
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Point the query at a different endpoint.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let config = QueryConfig::new("llama3", "hello");
        assert_eq!(config.api_url, "http://localhost:11434/api/generate");
    }

    #[test]
    fn test_with_api_url() {
        let config = QueryConfig::new("llama3", "hello").with_api_url("http://10.0.0.2:8080/gen");
        assert_eq!(config.api_url, "http://10.0.0.2:8080/gen");
        assert_eq!(config.model, "llama3");
        assert_eq!(config.prompt, "hello");
    }

    #[test]
    fn test_fields_kept_verbatim() {
        let config = QueryConfig::new("  spaced:7b ", "\n  what is  this?\t");
        assert_eq!(config.model, "  spaced:7b ");
        assert_eq!(config.prompt, "\n  what is  this?\t");
    }
}
