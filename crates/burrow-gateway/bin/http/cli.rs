use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "BURROW_GATEWAY_LISTEN_ADDR";
pub const BASE_URL_ENV: &str = "BURROW_GATEWAY_BASE_URL";
pub const LOG_LEVEL_ENV: &str = "BURROW_LOG_LEVEL";
pub const LOG_FORMAT_ENV: &str = "BURROW_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "pretty")]
    Pretty,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormatArg::Pretty => write!(f, "pretty"),
            LogFormatArg::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "burrow-gateway", version)]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Public base URL that short codes are appended to.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, env = LOG_LEVEL_ENV, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Pretty
    )]
    pub log_format: LogFormatArg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = CLI::try_parse_from(["burrow-gateway"]).unwrap();
        assert_eq!(cli.listen_addr, DEFAULT_LISTEN_ADDR.parse().unwrap());
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
        assert_eq!(cli.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(cli.log_format, LogFormatArg::Pretty);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = CLI::try_parse_from([
            "burrow-gateway",
            "--listen-addr",
            "0.0.0.0:9000",
            "--base-url",
            "https://brw.example",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.listen_addr.port(), 9000);
        assert_eq!(cli.base_url, "https://brw.example");
        assert_eq!(cli.log_format, LogFormatArg::Json);
    }

    #[test]
    fn rejects_bad_listen_addr() {
        assert!(CLI::try_parse_from(["burrow-gateway", "--listen-addr", "localhost:99999"]).is_err());
    }
}
