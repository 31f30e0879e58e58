//! OpenStack external-gRPC autoscaler provider.
//!
//! This crate primarily ships the `osas-provider` binary, but we expose a
//! library surface to enable integration testing.

pub mod config;
pub mod error;
pub mod grpc;
pub mod openstack;
pub mod provider;
