//! # API Shared
//!
//! Shared utilities and definitions for Cardio APIs.
//!
//! Contains:
//! - Protobuf-generated types (`pb` module)
//! - Request handling shared by gRPC and REST (`AssessmentApi`)
//! - Shared services like `HealthService`
//! - Server configuration resolved from the environment at startup
//!
//! Used by `api-grpc` and `api-rest` for common functionality.

// Re-export the generated protobuf module. The generated code will be placed
// into OUT_DIR at build time by the build script.
pub mod pb {
    tonic::include_proto!("cardio.v1");
}

pub mod assessment;
pub mod config;
pub mod health;

pub const FILE_DESCRIPTOR_SET: &[u8] = tonic::include_file_descriptor_set!("proto_descriptor");

pub use assessment::AssessmentApi;
pub use config::{ConfigError, ServerConfig};
pub use health::HealthService;
pub use pb::*;
