// Copyright (c) 2026 Parley Contributors
// SPDX-License-Identifier: AGPL-3.0
//! Service configuration
//!
//! Every setting is a clap argument with an environment-variable fallback,
//! so containers can configure the services purely through the environment.
//! A `.env` file in the working directory is loaded first when present.

use clap::Args;
use std::net::Ipv6Addr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::application::ForwarderConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("INTROVERT_HOST {0:?} is not a bare host name or address")]
    InvalidHost(String),
}

/// Load `.env` into the process environment; returns the file that was read.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// HTTP listener and process settings common to both services.
#[derive(Debug, Clone, Args)]
pub struct ServiceConfig {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// HTTP port (service default when unset)
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Expose Prometheus metrics on this port
    #[arg(long, env = "METRICS_PORT")]
    pub metrics_port: Option<u16>,
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Empty("HOST"));
        }
        Ok(())
    }

    /// `host:port`, falling back to `default_port` when no port was given.
    pub fn bind_address(&self, default_port: u16) -> String {
        format!("{}:{}", self.host, self.port.unwrap_or(default_port))
    }
}

/// Where the extrovert forwards messages to.
#[derive(Debug, Clone, Args)]
pub struct PeerConfig {
    /// Introvert host name or address
    #[arg(long, env = "INTROVERT_HOST")]
    pub introvert_host: String,

    /// Introvert HTTP port
    #[arg(long, env = "INTROVERT_PORT")]
    pub introvert_port: u16,

    /// Seconds to wait before retrying an unreachable introvert
    #[arg(long, env = "FORWARD_RETRY_DELAY_SECS", default_value_t = 2)]
    pub retry_delay_secs: u64,
}

impl PeerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.introvert_host.trim().is_empty() {
            return Err(ConfigError::Empty("INTROVERT_HOST"));
        }
        if self.introvert_port == 0 {
            return Err(ConfigError::Zero("INTROVERT_PORT"));
        }

        // The port comes from INTROVERT_PORT, so the host must not carry one.
        let (_, host) = self.scheme_and_host();
        let bare_ipv6 = host.parse::<Ipv6Addr>().is_ok() || is_bracketed_ipv6(host);
        let malformed = host.is_empty()
            || host.chars().any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '@'))
            || (host.contains(':') && !bare_ipv6);
        if malformed {
            return Err(ConfigError::InvalidHost(self.introvert_host.clone()));
        }
        Ok(())
    }

    /// Base URL of the introvert, e.g. `http://introvert:5000`.
    ///
    /// IPv6 literals are bracketed: `::1` becomes `http://[::1]:5000`.
    pub fn base_url(&self) -> String {
        let (scheme, host) = self.scheme_and_host();
        if host.parse::<Ipv6Addr>().is_ok() {
            format!("{}[{}]:{}", scheme, host, self.introvert_port)
        } else {
            format!("{}{}:{}", scheme, host, self.introvert_port)
        }
    }

    fn scheme_and_host(&self) -> (&'static str, &str) {
        let host = self.introvert_host.trim().trim_end_matches('/');
        if let Some(rest) = host.strip_prefix("https://") {
            ("https://", rest)
        } else if let Some(rest) = host.strip_prefix("http://") {
            ("http://", rest)
        } else {
            ("http://", host)
        }
    }

    pub fn forwarder_config(&self) -> ForwarderConfig {
        ForwarderConfig {
            retry_delay: Duration::from_secs(self.retry_delay_secs),
        }
    }
}

fn is_bracketed_ipv6(host: &str) -> bool {
    host.strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .is_some_and(|h| h.parse::<Ipv6Addr>().is_ok())
}

/// Introvert echo settings.
#[derive(Debug, Clone, Args)]
pub struct EchoConfig {
    /// How many times `GET /api/message` repeats the message
    #[arg(long, env = "ECHO_REPEAT", default_value_t = 2)]
    pub echo_repeat: usize,
}

impl Default for EchoConfig {
    fn default() -> Self {
        Self { echo_repeat: 2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        service: ServiceConfig,
        #[command(flatten)]
        peer: PeerConfig,
        #[command(flatten)]
        echo: EchoConfig,
    }

    fn parse(args: &[&str]) -> TestCli {
        let mut argv = vec!["test"];
        argv.extend_from_slice(args);
        TestCli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_flags_parse() {
        let cli = parse(&[
            "--host",
            "0.0.0.0",
            "--port",
            "4567",
            "--log-level",
            "info",
            "--introvert-host",
            "introvert",
            "--introvert-port",
            "5000",
            "--retry-delay-secs",
            "2",
            "--echo-repeat",
            "2",
        ]);

        assert_eq!(cli.service.bind_address(4567), "0.0.0.0:4567");
        assert_eq!(cli.peer.base_url(), "http://introvert:5000");
        assert_eq!(cli.peer.forwarder_config().retry_delay, Duration::from_secs(2));
        assert_eq!(cli.echo.echo_repeat, 2);
    }

    #[test]
    fn test_bind_address_falls_back_to_service_default() {
        let service = ServiceConfig {
            host: "0.0.0.0".to_string(),
            port: None,
            log_level: "info".to_string(),
            metrics_port: None,
        };
        assert_eq!(service.bind_address(5000), "0.0.0.0:5000");
    }

    #[test]
    fn test_explicit_port_wins() {
        let cli = parse(&[
            "--host",
            "127.0.0.1",
            "--port",
            "8080",
            "--introvert-host",
            "localhost",
            "--introvert-port",
            "5000",
        ]);
        assert_eq!(cli.service.bind_address(4567), "127.0.0.1:8080");
    }

    #[test]
    fn test_base_url_keeps_scheme() {
        let peer = PeerConfig {
            introvert_host: "https://introvert.internal/".to_string(),
            introvert_port: 443,
            retry_delay_secs: 2,
        };
        assert_eq!(peer.base_url(), "https://introvert.internal:443");
    }

    #[test]
    fn test_validation() {
        let peer = PeerConfig {
            introvert_host: " ".to_string(),
            introvert_port: 5000,
            retry_delay_secs: 2,
        };
        assert_eq!(peer.validate(), Err(ConfigError::Empty("INTROVERT_HOST")));

        let peer = PeerConfig {
            introvert_host: "introvert".to_string(),
            introvert_port: 0,
            retry_delay_secs: 2,
        };
        assert_eq!(peer.validate(), Err(ConfigError::Zero("INTROVERT_PORT")));

        let service = ServiceConfig {
            host: String::new(),
            port: None,
            log_level: "info".to_string(),
            metrics_port: None,
        };
        assert_eq!(service.validate(), Err(ConfigError::Empty("HOST")));
    }

    fn peer(host: &str) -> PeerConfig {
        PeerConfig {
            introvert_host: host.to_string(),
            introvert_port: 5000,
            retry_delay_secs: 2,
        }
    }

    #[test]
    fn test_host_with_port_is_rejected() {
        assert_eq!(
            peer("introvert:5000").validate(),
            Err(ConfigError::InvalidHost("introvert:5000".to_string()))
        );
        assert!(peer("http://introvert:5000").validate().is_err());
    }

    #[test]
    fn test_host_with_whitespace_or_path_is_rejected() {
        assert!(peer("intro vert").validate().is_err());
        assert!(peer("introvert/api").validate().is_err());
        assert!(peer("http://").validate().is_err());
    }

    #[test]
    fn test_ipv6_host_is_bracketed() {
        let bare = peer("::1");
        assert_eq!(bare.validate(), Ok(()));
        assert_eq!(bare.base_url(), "http://[::1]:5000");

        let bracketed = peer("[::1]");
        assert_eq!(bracketed.validate(), Ok(()));
        assert_eq!(bracketed.base_url(), "http://[::1]:5000");
    }

    #[test]
    fn test_plain_hosts_pass_validation() {
        assert_eq!(peer("introvert").validate(), Ok(()));
        assert_eq!(peer("10.0.0.7").validate(), Ok(()));
        assert_eq!(peer("https://introvert.internal/").validate(), Ok(()));
    }
}
