//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{read_config, validate_config, ConfigError, LogFormat, ProxyConfig};

#[derive(Debug, Parser)]
#[command(name = "dump-proxy")]
#[command(about = "Reverse proxy that logs every request and response in full", long_about = None)]
pub struct Args {
    /// Listen address [default: :9191]
    #[arg(short = 'l', long = "listen")]
    pub listen: Option<String>,

    /// Target service [default: http://localhost:8181]
    #[arg(short = 't', long = "target")]
    pub target: Option<String>,

    /// TOML configuration file; flags override its values
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Log line format
    #[arg(long = "log-format", value_enum)]
    pub log_format: Option<LogFormat>,
}

impl Args {
    /// Merge defaults, the optional config file and flags, then validate.
    pub fn into_config(self) -> Result<ProxyConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => read_config(path)?,
            None => ProxyConfig::default(),
        };

        if let Some(listen) = self.listen {
            config.listener.bind_address = listen;
        }
        if let Some(target) = self.target {
            config.upstream.target = target;
        }
        if let Some(format) = self.log_format {
            config.observability.log_format = format;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_flags() {
        let config = Args::parse_from(["dump-proxy"]).into_config().unwrap();
        assert_eq!(config.listener.bind_address, ":9191");
        assert_eq!(config.upstream.target, "http://localhost:8181");
    }

    #[test]
    fn test_flags_override() {
        let config = Args::parse_from([
            "dump-proxy",
            "-l",
            "127.0.0.1:7000",
            "-t",
            "http://backend:9000",
            "--log-format",
            "json",
        ])
        .into_config()
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:7000");
        assert_eq!(config.upstream.target, "http://backend:9000");
        assert_eq!(config.observability.log_format, LogFormat::Json);
    }

    #[test]
    fn test_flags_beat_config_file() {
        let path = std::env::temp_dir().join(format!("dump-proxy-cli-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[listener]\nbind_address = \"127.0.0.1:7100\"\n[upstream]\ntarget = \"http://from-file:1\"\n",
        )
        .unwrap();

        let config = Args::parse_from([
            "dump-proxy",
            "-c",
            path.to_str().unwrap(),
            "-t",
            "http://from-flag:2",
        ])
        .into_config()
        .unwrap();

        assert_eq!(config.listener.bind_address, "127.0.0.1:7100");
        assert_eq!(config.upstream.target, "http://from-flag:2");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_bad_target_is_a_config_error() {
        let err = Args::parse_from(["dump-proxy", "-t", "nonsense"])
            .into_config()
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
