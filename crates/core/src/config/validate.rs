use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - Server port is not 0
/// - Feed URL is an http(s) URL
/// - Feed timeout and body limit are non-zero
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.port == 0 {
        return Err(ConfigError::ValidationError(
            "server.port cannot be 0".to_string(),
        ));
    }

    let url = config.feed.url.trim();
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::ValidationError(format!(
            "feed.url must be an http(s) URL, got {:?}",
            config.feed.url
        )));
    }

    if config.feed.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "feed.timeout_secs cannot be 0".to_string(),
        ));
    }

    if config.feed.max_body_bytes == 0 {
        return Err(ConfigError::ValidationError(
            "feed.max_body_bytes cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FeedConfig, ServerConfig};
    use std::net::IpAddr;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_port_zero_fails() {
        let config = Config {
            server: ServerConfig {
                host: "0.0.0.0".parse::<IpAddr>().unwrap(),
                port: 0,
            },
            ..Default::default()
        };
        let result = validate_config(&config);
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validate_non_http_feed_url_fails() {
        let config = Config {
            feed: FeedConfig {
                url: "ftp://nyaa.si/rss".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_empty_feed_url_fails() {
        let config = Config {
            feed: FeedConfig {
                url: "  ".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_timeout_fails() {
        let config = Config {
            feed: FeedConfig {
                timeout_secs: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_zero_body_limit_fails() {
        let config = Config {
            feed: FeedConfig {
                max_body_bytes: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_config(&config).is_err());
    }
}
