use crate::config::types::{Config, CrawlConfig, HttpConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawl_config(&config.crawler)?;
    validate_http_config(&config.http)?;
    Ok(())
}

/// Validates crawl configuration
pub(crate) fn validate_crawl_config(config: &CrawlConfig) -> Result<(), ConfigError> {
    validate_seed(&config.seed)?;

    // max_depth >= 0 is always true for u32, so no check needed

    if config.most_frequent < 1 {
        return Err(ConfigError::Validation(format!(
            "most-frequent must be >= 1, got {}",
            config.most_frequent
        )));
    }

    if config.ngram_lengths.is_empty() {
        return Err(ConfigError::Validation(
            "ngram-lengths must contain at least one length".to_string(),
        ));
    }

    if config.ngram_lengths.contains(&0) {
        return Err(ConfigError::Validation(
            "ngram-lengths must all be >= 1, got 0".to_string(),
        ));
    }

    Ok(())
}

/// Validates HTTP client configuration
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.connect_timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "connect-timeout-secs must be >= 1, got {}",
            config.connect_timeout_secs
        )));
    }

    Ok(())
}

/// The seed must be an absolute http(s) URL
///
/// Only the syntax is checked. Links are later matched against the seed
/// exactly as written, so it is never normalized here.
fn validate_seed(seed: &str) -> Result<(), ConfigError> {
    if seed.is_empty() {
        return Err(ConfigError::Validation("seed cannot be empty".to_string()));
    }

    let url = Url::parse(seed)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid seed URL '{}': {}", seed, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Seed URL '{}' must use http or https",
            seed
        )));
    }

    Ok(())
}
