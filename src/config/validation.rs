//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the upstream target is a usable absolute http URL
//! - Check the bind address carries a port
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use url::Url;

use crate::config::schema::ProxyConfig;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("upstream target {target:?} is not a valid URL: {reason}")]
    InvalidTarget { target: String, reason: String },

    #[error("upstream target {0:?} must use the http scheme")]
    UnsupportedScheme(String),

    #[error("upstream target {0:?} has no host")]
    MissingTargetHost(String),

    #[error("bind address {0:?} must be host:port or :port")]
    InvalidBindAddress(String),

    #[error("dump.max_logged_body_bytes must be greater than zero")]
    ZeroBodyLimit,
}

/// Validate a merged configuration.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let target = &config.upstream.target;
    match Url::parse(target) {
        Ok(url) => {
            if url.scheme() != "http" {
                errors.push(ValidationError::UnsupportedScheme(target.clone()));
            }
            if url.host_str().map_or(true, str::is_empty) {
                errors.push(ValidationError::MissingTargetHost(target.clone()));
            }
        }
        Err(e) => errors.push(ValidationError::InvalidTarget {
            target: target.clone(),
            reason: e.to_string(),
        }),
    }

    let bind = config.listener.socket_address();
    let valid_bind = match bind.rsplit_once(':') {
        Some((host, port)) => !host.is_empty() && port.parse::<u16>().is_ok(),
        None => false,
    };
    if !valid_bind {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.dump.max_logged_body_bytes == Some(0) {
        errors.push(ValidationError::ZeroBodyLimit);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ProxyConfig::default()), Ok(()));
    }

    #[test]
    fn test_rejects_unparseable_target() {
        let mut config = ProxyConfig::default();
        config.upstream.target = "not a url".into();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(errors[0], ValidationError::InvalidTarget { .. }));
    }

    #[test]
    fn test_rejects_https_target() {
        let mut config = ProxyConfig::default();
        config.upstream.target = "https://example.com".into();

        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::UnsupportedScheme("https://example.com".into())])
        );
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = ProxyConfig::default();
        config.upstream.target = "ftp://files".into();
        config.listener.bind_address = "nowhere".into();
        config.dump.max_logged_body_bytes = Some(0);

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::ZeroBodyLimit));
        assert!(errors.contains(&ValidationError::InvalidBindAddress("nowhere".into())));
    }

    #[test]
    fn test_accepts_named_host_bind() {
        let mut config = ProxyConfig::default();
        config.listener.bind_address = "localhost:9191".into();
        assert!(validate_config(&config).is_ok());
    }
}
