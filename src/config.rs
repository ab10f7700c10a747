//! Application configuration provided to the view tree via context.

pub const DEFAULT_ENDPOINT: &str = "https://reqres.in/api/users";
pub const DEFAULT_PAGE_SIZE: usize = 1;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("endpoint must not be empty")]
    EmptyEndpoint,
    #[error("endpoint must use http or https: {0}")]
    UnsupportedScheme(String),
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpConfig {
    pub endpoint: String,
    pub page_size: usize,
}

impl Default for SignUpConfig {
    fn default() -> Self {
        Self { endpoint: DEFAULT_ENDPOINT.to_owned(), page_size: DEFAULT_PAGE_SIZE }
    }
}

impl SignUpConfig {
    /// Build a validated config. Trailing slashes on the endpoint are dropped.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for an empty or non-HTTP endpoint, or a zero page size.
    pub fn new(endpoint: &str, page_size: usize) -> Result<Self, ConfigError> {
        let endpoint = parse_endpoint(endpoint)?;
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(Self { endpoint, page_size })
    }
}

fn parse_endpoint(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyEndpoint);
    }
    if !trimmed.starts_with("https://") && !trimmed.starts_with("http://") {
        return Err(ConfigError::UnsupportedScheme(trimmed.to_owned()));
    }
    Ok(trimmed.trim_end_matches('/').to_owned())
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
