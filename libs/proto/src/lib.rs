pub mod cloudprovider {
    pub mod v1 {
        include!("gen/osas.cloudprovider.v1.rs");

        pub use cloud_provider_client::CloudProviderClient;
        pub use cloud_provider_server::{CloudProvider, CloudProviderServer};
    }
}
