//! Server runtime configuration.
//!
//! Resolved once at process startup from environment variables and then passed into the
//! servers, so request handling never reads process-wide environment state.

use std::net::SocketAddr;

/// Environment variable holding the gRPC listen address.
pub const GRPC_ADDR_VAR: &str = "CARDIO_ADDR";
/// Environment variable holding the REST listen address.
pub const REST_ADDR_VAR: &str = "CARDIO_REST_ADDR";
/// Environment variable enabling gRPC server reflection.
pub const REFLECTION_VAR: &str = "CARDIO_ENABLE_REFLECTION";

pub const DEFAULT_GRPC_ADDR: &str = "0.0.0.0:50051";
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddress {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("{var} must be true or false, got: {value}")]
    InvalidFlag { var: &'static str, value: String },
}

/// Server configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    grpc_addr: SocketAddr,
    rest_addr: SocketAddr,
    enable_reflection: bool,
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if an address or flag cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(GRPC_ADDR_VAR).ok(),
            std::env::var(REST_ADDR_VAR).ok(),
            std::env::var(REFLECTION_VAR).ok(),
        )
    }

    /// Builds the configuration from optional raw values without touching the environment.
    ///
    /// Missing or blank values take the defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if an address or flag cannot be parsed.
    pub fn from_values(
        grpc_addr: Option<String>,
        rest_addr: Option<String>,
        enable_reflection: Option<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            grpc_addr: parse_addr(GRPC_ADDR_VAR, grpc_addr, DEFAULT_GRPC_ADDR)?,
            rest_addr: parse_addr(REST_ADDR_VAR, rest_addr, DEFAULT_REST_ADDR)?,
            enable_reflection: parse_flag(REFLECTION_VAR, enable_reflection)?,
        })
    }

    pub fn grpc_addr(&self) -> SocketAddr {
        self.grpc_addr
    }

    pub fn rest_addr(&self) -> SocketAddr {
        self.rest_addr
    }

    pub fn enable_reflection(&self) -> bool {
        self.enable_reflection
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_addr(
    var: &'static str,
    value: Option<String>,
    default: &str,
) -> Result<SocketAddr, ConfigError> {
    let value = non_blank(value).unwrap_or_else(|| default.to_string());
    value
        .parse()
        .map_err(|source| ConfigError::InvalidAddress { var, value, source })
}

fn parse_flag(var: &'static str, value: Option<String>) -> Result<bool, ConfigError> {
    match non_blank(value) {
        None => Ok(false),
        Some(v) => match v.to_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ConfigError::InvalidFlag { var, value: v }),
        },
    }
}
