//! OpenStack backend access.
//!
//! The provider core talks to Nova and Glance through the two narrow traits
//! below. [`client::OpenStackClient`] implements both against the real APIs;
//! [`mock::MockCloud`] implements them in memory for tests.

mod client;
pub mod mock;
mod types;

use async_trait::async_trait;
use thiserror::Error;

pub use client::OpenStackClient;
pub use types::{
    CreateServer, CreatedServer, Flavor, Image, NetworkRef, SecurityGroupRef, Server, ServerState,
};

/// Errors from the OpenStack APIs.
#[derive(Debug, Error)]
pub enum OpenStackError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("api error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("no {service} endpoint in service catalog")]
    MissingEndpoint { service: &'static str },
}

/// Nova compute API surface used by the provider.
///
/// Every call is a single synchronous round trip; retry policy belongs to
/// the protocol caller.
#[async_trait]
pub trait ComputeApi: Send + Sync {
    async fn list_servers(&self) -> Result<Vec<Server>, OpenStackError>;

    async fn get_server(&self, id: &str) -> Result<Server, OpenStackError>;

    async fn create_server(&self, request: &CreateServer) -> Result<CreatedServer, OpenStackError>;

    async fn delete_server(&self, id: &str) -> Result<(), OpenStackError>;

    /// Direct flavor lookup; Nova only resolves ids here, so a name miss
    /// surfaces as an API error and callers fall back to [`Self::list_flavors`].
    async fn get_flavor(&self, id_or_name: &str) -> Result<Flavor, OpenStackError>;

    async fn list_flavors(&self) -> Result<Vec<Flavor>, OpenStackError>;
}

/// Glance image API surface used by the provider.
#[async_trait]
pub trait ImageApi: Send + Sync {
    /// List images, optionally filtered by exact name.
    async fn list_images(&self, name: Option<&str>) -> Result<Vec<Image>, OpenStackError>;
}
