//! A named, bounded set of compute instances managed as a unit.
//!
//! Group state is derived, not stored: the target size is always recomputed
//! from live instance state. The only cached artifact is the synthetic
//! template node, which is expensive to build (it needs a flavor lookup) and
//! cheap to invalidate.

use std::collections::HashMap;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Deserialize;
use tokio::sync::RwLock;
use tokio::time::{Duration, Instant};
use tracing::{debug, info};
use uuid::Uuid;

use super::{parse_provider_id, resolve, PROVIDER_ID_PREFIX};
use crate::error::ProviderError;
use crate::openstack::{ComputeApi, CreateServer, ImageApi, NetworkRef, SecurityGroupRef, Server};

/// Metadata key tagging a server with its owning group.
const GROUP_METADATA_KEY: &str = "nodegroup";

/// How long a built template node stays fresh.
const TEMPLATE_TTL: Duration = Duration::from_secs(10 * 60);

/// Provisioning configuration for one node group.
///
/// Field names follow the YAML settings file format.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeGroupSpec {
    pub id: String,
    #[serde(default)]
    pub min_size: u32,
    #[serde(default)]
    pub max_size: u32,
    #[serde(default)]
    pub flavor_name: String,
    #[serde(default)]
    pub image_name: Option<String>,
    #[serde(default)]
    pub image_id: Option<String>,
    #[serde(default)]
    pub key_name: Option<String>,
    #[serde(default)]
    pub security_groups: Vec<String>,
    #[serde(default)]
    pub network_id: Option<String>,
    #[serde(default)]
    pub availability_zone: Option<String>,
    #[serde(default)]
    pub user_data: Option<String>,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    #[serde(default)]
    pub labels: HashMap<String, String>,
}

impl NodeGroupSpec {
    fn validate(&self) -> Result<(), ProviderError> {
        let fail = |reason: &str| {
            Err(ProviderError::ConfigurationInvalid {
                group: self.id.clone(),
                reason: reason.to_string(),
            })
        };

        if self.id.is_empty() {
            return fail("node group id is required");
        }
        if self.max_size < self.min_size {
            return Err(ProviderError::ConfigurationInvalid {
                group: self.id.clone(),
                reason: format!(
                    "maxSize ({}) must be >= minSize ({})",
                    self.max_size, self.min_size
                ),
            });
        }
        if self.flavor_name.is_empty() {
            return fail("flavorName is required");
        }
        if self.image_name.is_none() && self.image_id.is_none() {
            return fail("either imageName or imageId is required");
        }
        Ok(())
    }
}

/// A caller-supplied reference to one instance slated for deletion.
#[derive(Debug, Clone)]
pub struct InstanceRef {
    pub name: String,
    pub provider_id: String,
}

/// Synthetic description of a hypothetical group instance, used by the
/// controller to simulate scheduling before any real instance exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeTemplate {
    pub name: String,
    pub provider_id: String,
    pub cpu_cores: u64,
    pub memory_bytes: u64,
    pub labels: HashMap<String, String>,
}

struct CachedTemplate {
    node: NodeTemplate,
    built_at: Instant,
}

pub struct NodeGroup {
    spec: NodeGroupSpec,
    compute: Arc<dyn ComputeApi>,
    image: Arc<dyn ImageApi>,
    template: RwLock<Option<CachedTemplate>>,
}

impl std::fmt::Debug for NodeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // The `compute`/`image` trait objects are not `Debug`; show the spec
        // and elide the rest so `NodeGroup` can appear in assertion output.
        f.debug_struct("NodeGroup")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

impl NodeGroup {
    pub(super) fn new(
        spec: NodeGroupSpec,
        compute: Arc<dyn ComputeApi>,
        image: Arc<dyn ImageApi>,
    ) -> Result<Self, ProviderError> {
        spec.validate()?;
        Ok(Self {
            spec,
            compute,
            image,
            template: RwLock::new(None),
        })
    }

    pub fn id(&self) -> &str {
        &self.spec.id
    }

    pub fn min_size(&self) -> u32 {
        self.spec.min_size
    }

    pub fn max_size(&self) -> u32 {
        self.spec.max_size
    }

    pub fn spec(&self) -> &NodeGroupSpec {
        &self.spec
    }

    pub fn debug_info(&self) -> String {
        format!(
            "NodeGroup {}: min={}, max={}, flavor={}",
            self.spec.id, self.spec.min_size, self.spec.max_size, self.spec.flavor_name
        )
    }

    /// Whether a backend server belongs to this group.
    ///
    /// The explicit metadata tag wins; the name-substring fallback tolerates
    /// instances created before tagging was adopted and is not guaranteed to
    /// match a unique group.
    pub fn contains_server(&self, server: &Server) -> bool {
        if let Some(group_id) = server.metadata.get(GROUP_METADATA_KEY) {
            return group_id == &self.spec.id;
        }
        server.name.contains(&self.spec.id)
    }

    /// All backend instances attributed to this group, regardless of status.
    pub async fn instances(&self) -> Result<Vec<Server>, ProviderError> {
        let servers = self
            .compute
            .list_servers()
            .await
            .map_err(|e| ProviderError::backend("list servers", e))?;
        Ok(servers
            .into_iter()
            .filter(|server| self.contains_server(server))
            .collect())
    }

    /// Live target size: attributed instances that are active or provisioning.
    pub async fn target_size(&self) -> Result<u32, ProviderError> {
        let count = self
            .instances()
            .await?
            .iter()
            .filter(|server| server.state().counts_toward_target())
            .count();
        Ok(count as u32)
    }

    /// Grow the group by `delta` instances.
    ///
    /// Creation is strictly sequential; a mid-loop failure leaves the
    /// already-created instances in place and surfaces the error. The caller
    /// reconciles by re-querying the target size.
    pub async fn increase_size(&self, delta: i32) -> Result<(), ProviderError> {
        if delta <= 0 {
            return Err(ProviderError::InvalidArgument(format!(
                "delta must be positive, got {delta}"
            )));
        }

        let current = self.target_size().await?;
        let requested = i64::from(current) + i64::from(delta);
        if requested > i64::from(self.spec.max_size) {
            return Err(ProviderError::CapacityExceeded {
                group: self.spec.id.clone(),
                requested,
                min: self.spec.min_size,
                max: self.spec.max_size,
            });
        }

        info!(
            group_id = %self.spec.id,
            current,
            requested,
            "Scaling up node group"
        );

        for _ in 0..delta {
            self.create_server().await?;
        }
        Ok(())
    }

    /// Validate a request to lower the target size by a negative `delta`.
    ///
    /// No instance is deleted here: the protocol splits "shrink the ceiling"
    /// from "remove this specific instance", and removal arrives exclusively
    /// through [`Self::delete_nodes`].
    pub async fn decrease_target_size(&self, delta: i32) -> Result<(), ProviderError> {
        if delta >= 0 {
            return Err(ProviderError::InvalidArgument(format!(
                "delta must be negative, got {delta}"
            )));
        }

        let current = self.target_size().await?;
        let requested = i64::from(current) + i64::from(delta);
        if requested < i64::from(self.spec.min_size) {
            return Err(ProviderError::CapacityExceeded {
                group: self.spec.id.clone(),
                requested,
                min: self.spec.min_size,
                max: self.spec.max_size,
            });
        }

        info!(
            group_id = %self.spec.id,
            current,
            requested,
            "Lowered node group target size"
        );
        Ok(())
    }

    /// Delete the given instances from the backend.
    ///
    /// Stops at the first failure; instances deleted before it stay deleted.
    pub async fn delete_nodes(&self, nodes: &[InstanceRef]) -> Result<(), ProviderError> {
        for node in nodes {
            let server_id = parse_provider_id(&node.provider_id)?;
            info!(
                group_id = %self.spec.id,
                server_id,
                node = %node.name,
                "Deleting server"
            );
            self.compute
                .delete_server(server_id)
                .await
                .map_err(|e| ProviderError::backend(format!("delete server {server_id}"), e))?;
        }
        Ok(())
    }

    /// The cached template node, rebuilt when older than the freshness window.
    ///
    /// Returns a copy so callers cannot mutate the cached value.
    pub async fn template_node_info(&self) -> Result<NodeTemplate, ProviderError> {
        {
            let cached = self.template.read().await;
            if let Some(entry) = cached.as_ref() {
                if entry.built_at.elapsed() < TEMPLATE_TTL {
                    return Ok(entry.node.clone());
                }
            }
        }

        let mut cached = self.template.write().await;
        // Another writer may have repopulated while we waited for the lock.
        if let Some(entry) = cached.as_ref() {
            if entry.built_at.elapsed() < TEMPLATE_TTL {
                return Ok(entry.node.clone());
            }
        }

        let node = self.build_template().await?;
        *cached = Some(CachedTemplate {
            node: node.clone(),
            built_at: Instant::now(),
        });
        Ok(node)
    }

    async fn build_template(&self) -> Result<NodeTemplate, ProviderError> {
        let flavor = resolve::flavor(self.compute.as_ref(), &self.spec.flavor_name).await?;

        let mut labels = HashMap::from([
            ("kubernetes.io/arch".to_string(), "amd64".to_string()),
            ("kubernetes.io/os".to_string(), "linux".to_string()),
            (
                "node.kubernetes.io/instance-type".to_string(),
                flavor.name.clone(),
            ),
        ]);
        for (key, value) in &self.spec.labels {
            labels.insert(key.clone(), value.clone());
        }

        debug!(group_id = %self.spec.id, flavor = %flavor.name, "Built template node");

        Ok(NodeTemplate {
            name: format!("{}-template", self.spec.id),
            provider_id: format!("{PROVIDER_ID_PREFIX}template-{}", self.spec.id),
            cpu_cores: u64::from(flavor.vcpus),
            memory_bytes: flavor.ram * 1024 * 1024,
            labels,
        })
    }

    /// Resolve flavor and image eagerly to fail fast on broken definitions.
    pub async fn validate(&self) -> Result<(), ProviderError> {
        let into_config_error = |e: ProviderError| ProviderError::ConfigurationInvalid {
            group: self.spec.id.clone(),
            reason: e.to_string(),
        };

        resolve::flavor(self.compute.as_ref(), &self.spec.flavor_name)
            .await
            .map_err(into_config_error)?;
        resolve::image_id(self.image.as_ref(), &self.spec)
            .await
            .map_err(into_config_error)?;

        debug!(group_id = %self.spec.id, "Node group configuration is valid");
        Ok(())
    }

    /// Drop the cached template. Instance state is untouched.
    pub async fn refresh(&self) {
        *self.template.write().await = None;
        debug!(group_id = %self.spec.id, "Invalidated template cache");
    }

    async fn create_server(&self) -> Result<(), ProviderError> {
        let image_id = resolve::image_id(self.image.as_ref(), &self.spec).await?;
        let flavor = resolve::flavor(self.compute.as_ref(), &self.spec.flavor_name).await?;

        let mut metadata = self.spec.metadata.clone();
        metadata.insert(GROUP_METADATA_KEY.to_string(), self.spec.id.clone());
        metadata.insert("created_by".to_string(), "osas-provider".to_string());

        let suffix = Uuid::new_v4().simple().to_string();
        let name = format!("{}-{}", self.spec.id, &suffix[..8]);

        let request = CreateServer {
            name: name.clone(),
            image_ref: image_id,
            flavor_ref: flavor.id,
            user_data: self
                .spec
                .user_data
                .as_deref()
                .map(|data| BASE64.encode(data)),
            metadata,
            security_groups: self
                .spec
                .security_groups
                .iter()
                .map(|name| SecurityGroupRef { name: name.clone() })
                .collect(),
            networks: self
                .spec
                .network_id
                .iter()
                .map(|uuid| NetworkRef { uuid: uuid.clone() })
                .collect(),
            availability_zone: self.spec.availability_zone.clone(),
            key_name: self.spec.key_name.clone(),
        };

        let created = self
            .compute
            .create_server(&request)
            .await
            .map_err(|e| ProviderError::backend(format!("create server {name}"), e))?;

        info!(
            group_id = %self.spec.id,
            server_id = %created.id,
            server_name = %name,
            "Created server"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::openstack::mock::MockCloud;

    fn spec(id: &str) -> NodeGroupSpec {
        NodeGroupSpec {
            id: id.to_string(),
            min_size: 1,
            max_size: 5,
            flavor_name: "m1.large".to_string(),
            image_name: Some("ubuntu-22.04".to_string()),
            ..NodeGroupSpec::default()
        }
    }

    fn group(id: &str) -> NodeGroup {
        let cloud = Arc::new(MockCloud::new());
        NodeGroup::new(spec(id), cloud.clone(), cloud).unwrap()
    }

    fn server(name: &str, metadata: &[(&str, &str)]) -> Server {
        Server {
            id: "srv-1".to_string(),
            name: name.to_string(),
            status: "ACTIVE".to_string(),
            metadata: metadata
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    #[test]
    fn tagged_server_is_attributed_by_metadata() {
        let g1 = group("g1");
        assert!(g1.contains_server(&server("random-42", &[("nodegroup", "g1")])));
        assert!(!g1.contains_server(&server("g1-worker-07", &[("nodegroup", "g2")])));
    }

    #[test]
    fn untagged_server_falls_back_to_name_substring() {
        let g1 = group("g1");
        assert!(g1.contains_server(&server("g1-worker-07", &[])));
        assert!(!g1.contains_server(&server("other-3", &[])));
    }

    #[test]
    fn spec_validation_rejects_inverted_bounds() {
        let bad = NodeGroupSpec {
            min_size: 3,
            max_size: 1,
            ..spec("g1")
        };
        let err = NodeGroupSpec::validate(&bad).unwrap_err();
        assert!(matches!(err, ProviderError::ConfigurationInvalid { .. }));
    }

    #[test]
    fn spec_validation_requires_image_reference() {
        let bad = NodeGroupSpec {
            image_name: None,
            image_id: None,
            ..spec("g1")
        };
        assert!(bad.validate().is_err());
        let ok = NodeGroupSpec {
            image_name: None,
            image_id: Some("img-1".to_string()),
            ..spec("g1")
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn debug_info_names_the_flavor() {
        assert_eq!(
            group("workers").debug_info(),
            "NodeGroup workers: min=1, max=5, flavor=m1.large"
        );
    }
}
