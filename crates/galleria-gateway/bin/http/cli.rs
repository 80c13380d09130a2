use clap::Parser;
use galleria_telemetry::LogFormat;
use galleria_upstream::{DEFAULT_BASE_URL, DEFAULT_CULTURE};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "GALLERIA_GATEWAY_LISTEN_ADDR";
pub const UPSTREAM_BASE_URL_ENV: &str = "GALLERIA_UPSTREAM_BASE_URL";
pub const UPSTREAM_CULTURE_ENV: &str = "GALLERIA_UPSTREAM_CULTURE";
pub const UPSTREAM_TIMEOUT_ENV: &str = "GALLERIA_UPSTREAM_TIMEOUT_SECS";
pub const PUBLIC_BASE_URL_ENV: &str = "GALLERIA_PUBLIC_BASE_URL";
pub const LOG_FORMAT_ENV: &str = "GALLERIA_LOG_FORMAT";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Parser)]
#[command(name = "galleria-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(long, env = UPSTREAM_BASE_URL_ENV, default_value = DEFAULT_BASE_URL)]
    pub upstream_base_url: String,

    #[arg(long, env = UPSTREAM_CULTURE_ENV, default_value = DEFAULT_CULTURE)]
    pub upstream_culture: String,

    /// Upstream request timeout in seconds. Unset keeps the client default.
    #[arg(long, env = UPSTREAM_TIMEOUT_ENV)]
    pub upstream_timeout_secs: Option<u64>,

    /// Base URL used for short links. Derived from each request when unset.
    #[arg(long, env = PUBLIC_BASE_URL_ENV)]
    pub public_base_url: Option<String>,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormat::Pretty
    )]
    pub log_format: LogFormat,
}
