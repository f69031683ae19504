//! # API gRPC
//!
//! gRPC server implementation for Cardio.
//!
//! Handles:
//! - The `cardio.v1.Cardio` service implementation over `AssessmentApi`
//! - Optional server reflection
//! - gRPC-specific concerns (status codes, tonic integration)
//!
//! Uses `api-shared` for common types and utilities.

#![warn(rust_2018_idioms)]

pub use service::{pb, CardioService};

pub mod service;
