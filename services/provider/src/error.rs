//! Domain error taxonomy for the provider core.

use thiserror::Error;

use crate::openstack::OpenStackError;

/// Errors surfaced by the provider directory and node-group operations.
///
/// The gRPC layer maps these onto protocol status codes; nothing below it
/// retries or suppresses a failure.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Malformed request input: wrong delta sign, bad provider id, ...
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Unknown node group, or an unresolvable machine type / image.
    #[error("not found: {0}")]
    NotFound(String),

    /// A scale operation would leave the group outside its bounds.
    #[error("cannot resize node group {group} to {requested}: allowed range is {min}..={max}")]
    CapacityExceeded {
        group: String,
        requested: i64,
        min: u32,
        max: u32,
    },

    /// An infrastructure API call failed.
    #[error("backend unavailable: {context}")]
    Backend {
        context: String,
        #[source]
        source: OpenStackError,
    },

    /// A group's declared machine type or image cannot be resolved.
    #[error("invalid configuration for node group {group}: {reason}")]
    ConfigurationInvalid { group: String, reason: String },
}

impl ProviderError {
    pub fn backend(context: impl Into<String>, source: OpenStackError) -> Self {
        Self::Backend {
            context: context.into(),
            source,
        }
    }
}
