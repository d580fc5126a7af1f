//! Command-line interface definitions using clap derive macros.
//!
//! Contains the top-level [`Cli`] parser, the [`Commands`] enum for
//! subcommands (run, health), and their associated argument structs.
//! Every flag has an environment variable equivalent for container
//! deployments.

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "passage",
    version,
    about = "Single-upstream HTTP pass-through proxy",
    propagate_version = true,
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        passage run -u https://api.example.com/svc --prefix svc\n  \
        passage run -u https://api.example.com/svc --prefix svc -p 8080\n  \
        passage health http://localhost:5000"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the proxy server
    Run(RunArgs),

    /// Check health of a running instance
    Health(HealthArgs),
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        passage run -u https://api.example.com/svc --prefix svc            Defaults (port 5000)\n  \
        passage run -u https://api.example.com/svc --prefix svc --pretty   Local dev mode\n  \
        UPSTREAM_BASE=https://api.example.com/svc ROUTE_PREFIX=svc passage run")]
pub struct RunArgs {
    /// Upstream base URL that requests are forwarded to
    #[arg(short, long, env = "UPSTREAM_BASE")]
    pub upstream: String,

    /// Path prefix under which inbound requests are accepted
    #[arg(long, env = "ROUTE_PREFIX")]
    pub prefix: String,

    /// Listen port
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Listen address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    // -- Logging --
    /// Log level
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,

    // -- Tuning --
    /// Upstream call timeout in milliseconds
    #[arg(
        long,
        env = "UPSTREAM_TIMEOUT_MS",
        default_value_t = 30_000,
        help_heading = "Tuning"
    )]
    pub timeout: u64,

    /// Max request body size in bytes
    #[arg(
        long,
        env = "MAX_BODY_SIZE",
        default_value_t = 10_485_760,
        help_heading = "Tuning"
    )]
    pub max_body: usize,
}

#[derive(Args)]
pub struct HealthArgs {
    /// URL of the running instance
    #[arg(default_value = "http://localhost:5000")]
    pub url: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}
