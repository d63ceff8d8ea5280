use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Base URL the content API has historically been served from.
pub const DEFAULT_BASE_URL: &str = "http://3.17.219.54";

/// Where and how to reach the content API. Built once, then handed to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    /// Per-request timeout; `None` leaves the client default in place.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    /// `{base_url}/{segment}` with exactly one slash between them.
    pub fn url(&self, segment: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            segment.trim_start_matches('/')
        )
    }

    pub fn trace_loaded(&self) {
        info!(
            base_url = %self.base_url,
            timeout_secs = ?self.timeout_secs,
            "Loaded ApiConfig"
        );
        debug!(?self, "ApiConfig loaded (full debug)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_with_single_slash() {
        let config = ApiConfig {
            base_url: "http://api.local/".into(),
            timeout_secs: None,
        };
        assert_eq!(config.url("cast"), "http://api.local/cast");
        assert_eq!(config.url("/cast/abc"), "http://api.local/cast/abc");
    }
}
