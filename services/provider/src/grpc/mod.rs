//! gRPC surface of the provider.

mod cloud_provider;

pub use cloud_provider::CloudProviderService;
