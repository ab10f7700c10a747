use super::*;

#[test]
fn default_config_targets_reqres_with_single_record_pages() {
    let config = SignUpConfig::default();
    assert_eq!(config.endpoint, "https://reqres.in/api/users");
    assert_eq!(config.page_size, 1);
}

#[test]
fn new_trims_whitespace_and_trailing_slash() {
    let config = SignUpConfig::new("  http://localhost:8080/api/users/ ", 3).unwrap();
    assert_eq!(config.endpoint, "http://localhost:8080/api/users");
    assert_eq!(config.page_size, 3);
}

#[test]
fn new_rejects_empty_endpoint() {
    assert_eq!(SignUpConfig::new("   ", 1), Err(ConfigError::EmptyEndpoint));
}

#[test]
fn new_rejects_non_http_scheme() {
    assert_eq!(
        SignUpConfig::new("ftp://example.com/users", 1),
        Err(ConfigError::UnsupportedScheme("ftp://example.com/users".to_owned()))
    );
}

#[test]
fn new_rejects_zero_page_size() {
    assert_eq!(SignUpConfig::new(DEFAULT_ENDPOINT, 0), Err(ConfigError::ZeroPageSize));
}

#[test]
fn config_error_messages_are_readable() {
    assert_eq!(ConfigError::ZeroPageSize.to_string(), "page size must be at least 1");
    assert_eq!(
        ConfigError::UnsupportedScheme("x".to_owned()).to_string(),
        "endpoint must use http or https: x"
    );
}
