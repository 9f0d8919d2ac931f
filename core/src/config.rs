//! Client configuration: endpoint root and default headers.

use url::Url;

use crate::error::ConfigError;

/// Where the remote API lives and which headers every request carries.
///
/// Passed to `TodoClient::new` / `TodoService::new`; nothing is read from
/// the environment here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub default_headers: Vec<(String, String)>,
}

fn default_headers() -> Vec<(String, String)> {
    vec![("accept".to_string(), "application/json".to_string())]
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            default_headers: default_headers(),
        }
    }

    /// Set a default header, replacing any existing one with the same name.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self
            .default_headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&name))
        {
            Some(entry) => *entry = (name, value),
            None => self.default_headers.push((name, value)),
        }
        self
    }

    /// Check that the base URL is an absolute http(s) URL with no query or
    /// fragment, since item paths are appended to it.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let raw = self.base_url.trim();
        if raw.is_empty() {
            return Err(ConfigError::MissingBaseUrl);
        }
        let url = Url::parse(raw).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            url: raw.to_string(),
            reason,
        };
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(invalid(format!("unsupported scheme '{other}'"))),
        }
        if url.query().is_some() {
            return Err(invalid("query strings are not supported".to_string()));
        }
        if url.fragment().is_some() {
            return Err(invalid("fragments are not supported".to_string()));
        }
        Ok(())
    }
}
