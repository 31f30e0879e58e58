//! OpenStack external-gRPC autoscaler provider.
//!
//! Translates the cluster autoscaler's external cloud-provider protocol into
//! Nova/Glance lifecycle operations:
//!
//! - **Provider**: directory of node groups, shared backend handles
//! - **Node Group**: size accounting, scale operations, template synthesis
//! - **gRPC adapter**: stateless request/response mapping
//!
//! Configuration is validated against the backend before the listener comes
//! up; a broken cloud or group definition fails the process instead of
//! accepting scaling traffic it cannot honor.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use osas_proto::cloudprovider::v1::CloudProviderServer;
use osas_provider::config::Cli;
use osas_provider::grpc::CloudProviderService;
use osas_provider::openstack::OpenStackClient;
use osas_provider::provider::Provider;
use tonic::transport::{Certificate, Identity, Server, ServerTlsConfig};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Cli::parse().load()?;

    // Initialize tracing (prefer RUST_LOG, fallback to the configured level)
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting OpenStack autoscaler provider");

    let client = Arc::new(
        OpenStackClient::connect(&config.cloud)
            .await
            .context("failed to authenticate against OpenStack")?,
    );
    info!(
        compute = %client.compute_url(),
        image = %client.image_url(),
        "Authenticated against OpenStack"
    );

    let provider = Arc::new(Provider::new(client.clone(), client));
    for spec in config.node_groups {
        provider.get_or_create_group(spec).await?;
    }

    provider
        .validate_all()
        .await
        .context("configuration validation failed")?;

    let mut server = Server::builder();
    if let Some(tls) = &config.tls {
        let cert = std::fs::read(&tls.cert)
            .with_context(|| format!("failed to read certificate {}", tls.cert.display()))?;
        let key = std::fs::read(&tls.key)
            .with_context(|| format!("failed to read certificate key {}", tls.key.display()))?;
        let ca = std::fs::read(&tls.ca)
            .with_context(|| format!("failed to read CA certificate {}", tls.ca.display()))?;

        let tls_config = ServerTlsConfig::new()
            .identity(Identity::from_pem(cert, key))
            .client_ca_root(Certificate::from_pem(ca));
        server = server.tls_config(tls_config)?;
        info!("Mutual TLS enabled");
    } else {
        warn!("No TLS certificates provided, serving plaintext");
    }

    let service = CloudProviderService::new(provider);

    info!(addr = %config.address, "Listening for controller connections");
    server
        .add_service(CloudProviderServer::new(service))
        .serve_with_shutdown(config.address, async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Received shutdown signal");
        })
        .await?;

    info!("Provider shutdown complete");
    Ok(())
}
