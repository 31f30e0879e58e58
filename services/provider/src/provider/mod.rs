//! Node-group directory and shared backend handles.
//!
//! The [`Provider`] owns the authenticated compute/image handles and the map
//! of known node groups. Groups are materialized lazily and idempotently:
//! asking for the same id twice always yields the same group.

pub mod node_group;
mod resolve;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::ProviderError;
use crate::openstack::{ComputeApi, ImageApi};

pub use node_group::{InstanceRef, NodeGroup, NodeGroupSpec, NodeTemplate};

/// Scheme prefix of provider-qualified instance ids.
const PROVIDER_ID_PREFIX: &str = "openstack://";

/// Extracts the backend server id from a provider-qualified id of the form
/// `openstack://<server-id>`.
pub fn parse_provider_id(provider_id: &str) -> Result<&str, ProviderError> {
    match provider_id.strip_prefix(PROVIDER_ID_PREFIX) {
        Some(server_id) if !server_id.is_empty() => Ok(server_id),
        _ => Err(ProviderError::InvalidArgument(format!(
            "invalid provider id {provider_id:?}: expected {PROVIDER_ID_PREFIX}<server-id>"
        ))),
    }
}

pub struct Provider {
    compute: Arc<dyn ComputeApi>,
    image: Arc<dyn ImageApi>,
    groups: RwLock<HashMap<String, Arc<NodeGroup>>>,
}

impl Provider {
    pub fn new(compute: Arc<dyn ComputeApi>, image: Arc<dyn ImageApi>) -> Self {
        Self {
            compute,
            image,
            groups: RwLock::new(HashMap::new()),
        }
    }

    /// Snapshot of all known node groups. Order is insignificant.
    pub async fn node_groups(&self) -> Vec<Arc<NodeGroup>> {
        self.groups.read().await.values().cloned().collect()
    }

    pub async fn node_group(&self, id: &str) -> Option<Arc<NodeGroup>> {
        self.groups.read().await.get(id).cloned()
    }

    /// Materialize the group for `spec.id`, or return the existing one.
    ///
    /// Two callers can race past the read-path miss; existence is re-checked
    /// under the write lock so the id still maps to a single group.
    pub async fn get_or_create_group(
        &self,
        spec: NodeGroupSpec,
    ) -> Result<Arc<NodeGroup>, ProviderError> {
        {
            let groups = self.groups.read().await;
            if let Some(group) = groups.get(&spec.id) {
                return Ok(Arc::clone(group));
            }
        }

        let mut groups = self.groups.write().await;
        if let Some(group) = groups.get(&spec.id) {
            return Ok(Arc::clone(group));
        }

        let group = Arc::new(NodeGroup::new(
            spec,
            Arc::clone(&self.compute),
            Arc::clone(&self.image),
        )?);
        info!(
            group_id = %group.id(),
            min_size = group.min_size(),
            max_size = group.max_size(),
            "Registered node group"
        );
        groups.insert(group.id().to_string(), Arc::clone(&group));
        Ok(group)
    }

    /// Find the group owning the instance behind a provider-qualified id.
    ///
    /// Group ids that are substrings of each other can both claim an untagged
    /// instance through the name fallback; whichever group the scan visits
    /// first wins, and directory order is not defined.
    pub async fn group_for_instance(
        &self,
        provider_id: &str,
    ) -> Result<Option<Arc<NodeGroup>>, ProviderError> {
        let server_id = parse_provider_id(provider_id)?;
        let server = self
            .compute
            .get_server(server_id)
            .await
            .map_err(|e| ProviderError::backend(format!("get server {server_id}"), e))?;

        let groups = self.groups.read().await;
        for group in groups.values() {
            if group.contains_server(&server) {
                return Ok(Some(Arc::clone(group)));
            }
        }
        Ok(None)
    }

    /// Connectivity smoke test plus per-group validation.
    ///
    /// Run once at startup so a broken backend or group definition fails the
    /// process before any scaling traffic is accepted.
    pub async fn validate_all(&self) -> Result<(), ProviderError> {
        let flavors = self
            .compute
            .list_flavors()
            .await
            .map_err(|e| ProviderError::backend("list flavors", e))?;
        debug!(flavors = flavors.len(), "Compute API reachable");

        let images = self
            .image
            .list_images(None)
            .await
            .map_err(|e| ProviderError::backend("list images", e))?;
        debug!(images = images.len(), "Image API reachable");

        let groups = self.groups.read().await;
        for group in groups.values() {
            group.validate().await?;
        }

        info!(groups = groups.len(), "Backend configuration validated");
        Ok(())
    }

    /// Invalidate every group's cached state.
    pub async fn refresh_all(&self) {
        let groups = self.groups.read().await;
        for group in groups.values() {
            group.refresh().await;
        }
        debug!(groups = groups.len(), "Refreshed node groups");
    }

    /// Pre-shutdown hook; the provider holds no resources needing teardown.
    pub fn cleanup(&self) {
        info!("Cleaning up provider");
    }
}
