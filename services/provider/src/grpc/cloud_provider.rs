//! Stateless translation between the scaling protocol and the provider core.
//!
//! Every handler resolves the addressed group, delegates, and maps domain
//! errors onto protocol status codes. No state lives here.

use std::collections::HashMap;
use std::sync::Arc;

use osas_proto::cloudprovider::v1::{
    self as pb, cloud_provider_server::CloudProvider,
};
use tonic::{Request, Response, Status};
use tracing::{debug, error};

use crate::error::ProviderError;
use crate::openstack::{Server, ServerState};
use crate::provider::{InstanceRef, NodeGroup, Provider};

pub struct CloudProviderService {
    provider: Arc<Provider>,
}

impl CloudProviderService {
    pub fn new(provider: Arc<Provider>) -> Self {
        Self { provider }
    }

    async fn group_or_not_found(&self, id: &str) -> Result<Arc<NodeGroup>, Status> {
        self.provider
            .node_group(id)
            .await
            .ok_or_else(|| Status::not_found(format!("node group {id} not found")))
    }
}

fn status_from(err: ProviderError) -> Status {
    match &err {
        ProviderError::InvalidArgument(_) => Status::invalid_argument(err.to_string()),
        ProviderError::NotFound(_) => Status::not_found(err.to_string()),
        ProviderError::CapacityExceeded { .. } => Status::out_of_range(err.to_string()),
        ProviderError::Backend { .. } | ProviderError::ConfigurationInvalid { .. } => {
            Status::internal(err.to_string())
        }
    }
}

fn group_message(group: &NodeGroup) -> pb::NodeGroup {
    pb::NodeGroup {
        id: group.id().to_string(),
        min_size: group.min_size() as i32,
        max_size: group.max_size() as i32,
        debug: group.debug_info(),
    }
}

fn instance_message(server: &Server) -> pb::Instance {
    let state = match server.state() {
        ServerState::Provisioning => pb::InstanceState::Provisioning,
        ServerState::Running => pb::InstanceState::Running,
        ServerState::Deleting => pb::InstanceState::Deleting,
        ServerState::Unspecified => pb::InstanceState::Unspecified,
    };
    pb::Instance {
        id: server.id.clone(),
        status: Some(pb::InstanceStatus {
            instance_state: state.into(),
            error_info: None,
        }),
    }
}

#[tonic::async_trait]
impl CloudProvider for CloudProviderService {
    async fn node_groups(
        &self,
        _request: Request<pb::NodeGroupsRequest>,
    ) -> Result<Response<pb::NodeGroupsResponse>, Status> {
        debug!("gRPC request: NodeGroups");

        let node_groups = self
            .provider
            .node_groups()
            .await
            .iter()
            .map(|group| group_message(group))
            .collect();

        Ok(Response::new(pb::NodeGroupsResponse { node_groups }))
    }

    async fn node_group_for_node(
        &self,
        request: Request<pb::NodeGroupForNodeRequest>,
    ) -> Result<Response<pb::NodeGroupForNodeResponse>, Status> {
        let req = request.into_inner();
        let node = req
            .node
            .ok_or_else(|| Status::invalid_argument("node is required"))?;
        debug!(provider_id = %node.provider_id, "gRPC request: NodeGroupForNode");

        let group = self
            .provider
            .group_for_instance(&node.provider_id)
            .await
            .map_err(|err| {
                error!(provider_id = %node.provider_id, error = %err, "Attribution failed");
                status_from(err)
            })?;

        // An empty node group tells the controller the node is not managed.
        let node_group = group
            .map(|group| group_message(&group))
            .unwrap_or_default();

        Ok(Response::new(pb::NodeGroupForNodeResponse {
            node_group: Some(node_group),
        }))
    }

    async fn pricing_node_price(
        &self,
        _request: Request<pb::PricingNodePriceRequest>,
    ) -> Result<Response<pb::PricingNodePriceResponse>, Status> {
        debug!("gRPC request: PricingNodePrice");
        Err(Status::unimplemented("PricingNodePrice not implemented"))
    }

    async fn pricing_pod_price(
        &self,
        _request: Request<pb::PricingPodPriceRequest>,
    ) -> Result<Response<pb::PricingPodPriceResponse>, Status> {
        debug!("gRPC request: PricingPodPrice");
        Err(Status::unimplemented("PricingPodPrice not implemented"))
    }

    async fn gpu_label(
        &self,
        _request: Request<pb::GpuLabelRequest>,
    ) -> Result<Response<pb::GpuLabelResponse>, Status> {
        debug!("gRPC request: GpuLabel");
        // The backend has no GPU concept; an empty label is the defined answer.
        Ok(Response::new(pb::GpuLabelResponse {
            label: String::new(),
        }))
    }

    async fn get_available_gpu_types(
        &self,
        _request: Request<pb::GetAvailableGpuTypesRequest>,
    ) -> Result<Response<pb::GetAvailableGpuTypesResponse>, Status> {
        debug!("gRPC request: GetAvailableGpuTypes");
        Ok(Response::new(pb::GetAvailableGpuTypesResponse {
            gpu_types: HashMap::new(),
        }))
    }

    async fn cleanup(
        &self,
        _request: Request<pb::CleanupRequest>,
    ) -> Result<Response<pb::CleanupResponse>, Status> {
        debug!("gRPC request: Cleanup");
        self.provider.cleanup();
        Ok(Response::new(pb::CleanupResponse {}))
    }

    async fn refresh(
        &self,
        _request: Request<pb::RefreshRequest>,
    ) -> Result<Response<pb::RefreshResponse>, Status> {
        debug!("gRPC request: Refresh");
        self.provider.refresh_all().await;
        Ok(Response::new(pb::RefreshResponse {}))
    }

    async fn node_group_target_size(
        &self,
        request: Request<pb::NodeGroupTargetSizeRequest>,
    ) -> Result<Response<pb::NodeGroupTargetSizeResponse>, Status> {
        let req = request.into_inner();
        debug!(group_id = %req.id, "gRPC request: NodeGroupTargetSize");

        let group = self.group_or_not_found(&req.id).await?;
        let target_size = group.target_size().await.map_err(|err| {
            error!(group_id = %req.id, error = %err, "Failed to get target size");
            status_from(err)
        })?;

        Ok(Response::new(pb::NodeGroupTargetSizeResponse {
            target_size: target_size as i32,
        }))
    }

    async fn node_group_increase_size(
        &self,
        request: Request<pb::NodeGroupIncreaseSizeRequest>,
    ) -> Result<Response<pb::NodeGroupIncreaseSizeResponse>, Status> {
        let req = request.into_inner();
        debug!(group_id = %req.id, delta = req.delta, "gRPC request: NodeGroupIncreaseSize");

        let group = self.group_or_not_found(&req.id).await?;
        group.increase_size(req.delta).await.map_err(|err| {
            error!(group_id = %req.id, error = %err, "Failed to increase size");
            status_from(err)
        })?;

        Ok(Response::new(pb::NodeGroupIncreaseSizeResponse {}))
    }

    async fn node_group_delete_nodes(
        &self,
        request: Request<pb::NodeGroupDeleteNodesRequest>,
    ) -> Result<Response<pb::NodeGroupDeleteNodesResponse>, Status> {
        let req = request.into_inner();
        debug!(
            group_id = %req.id,
            nodes = req.nodes.len(),
            "gRPC request: NodeGroupDeleteNodes"
        );

        let group = self.group_or_not_found(&req.id).await?;
        let refs: Vec<InstanceRef> = req
            .nodes
            .into_iter()
            .map(|node| InstanceRef {
                name: node.name,
                provider_id: node.provider_id,
            })
            .collect();

        group.delete_nodes(&refs).await.map_err(|err| {
            error!(group_id = %req.id, error = %err, "Failed to delete nodes");
            status_from(err)
        })?;

        Ok(Response::new(pb::NodeGroupDeleteNodesResponse {}))
    }

    async fn node_group_decrease_target_size(
        &self,
        request: Request<pb::NodeGroupDecreaseTargetSizeRequest>,
    ) -> Result<Response<pb::NodeGroupDecreaseTargetSizeResponse>, Status> {
        let req = request.into_inner();
        debug!(
            group_id = %req.id,
            delta = req.delta,
            "gRPC request: NodeGroupDecreaseTargetSize"
        );

        let group = self.group_or_not_found(&req.id).await?;
        group.decrease_target_size(req.delta).await.map_err(|err| {
            error!(group_id = %req.id, error = %err, "Failed to decrease target size");
            status_from(err)
        })?;

        Ok(Response::new(pb::NodeGroupDecreaseTargetSizeResponse {}))
    }

    async fn node_group_nodes(
        &self,
        request: Request<pb::NodeGroupNodesRequest>,
    ) -> Result<Response<pb::NodeGroupNodesResponse>, Status> {
        let req = request.into_inner();
        debug!(group_id = %req.id, "gRPC request: NodeGroupNodes");

        let group = self.group_or_not_found(&req.id).await?;
        let servers = group.instances().await.map_err(|err| {
            error!(group_id = %req.id, error = %err, "Failed to list nodes");
            status_from(err)
        })?;

        let instances = servers.iter().map(instance_message).collect();
        Ok(Response::new(pb::NodeGroupNodesResponse { instances }))
    }

    async fn node_group_template_node_info(
        &self,
        request: Request<pb::NodeGroupTemplateNodeInfoRequest>,
    ) -> Result<Response<pb::NodeGroupTemplateNodeInfoResponse>, Status> {
        let req = request.into_inner();
        debug!(group_id = %req.id, "gRPC request: NodeGroupTemplateNodeInfo");

        let group = self.group_or_not_found(&req.id).await?;
        let template = group.template_node_info().await.map_err(|err| {
            error!(group_id = %req.id, error = %err, "Failed to build template node");
            status_from(err)
        })?;

        Ok(Response::new(pb::NodeGroupTemplateNodeInfoResponse {
            node_template: Some(pb::NodeTemplate {
                name: template.name,
                provider_id: template.provider_id,
                cpu_cores: template.cpu_cores as i64,
                memory_bytes: template.memory_bytes as i64,
                labels: template.labels,
            }),
        }))
    }

    async fn node_group_get_options(
        &self,
        request: Request<pb::NodeGroupAutoscalingOptionsRequest>,
    ) -> Result<Response<pb::NodeGroupAutoscalingOptionsResponse>, Status> {
        let req = request.into_inner();
        debug!(group_id = %req.id, "gRPC request: NodeGroupGetOptions");

        let _group = self.group_or_not_found(&req.id).await?;
        // No per-group overrides exist; the caller's defaults are echoed back.
        let defaults = req
            .defaults
            .ok_or_else(|| Status::invalid_argument("defaults are required"))?;

        Ok(Response::new(pb::NodeGroupAutoscalingOptionsResponse {
            node_group_autoscaling_options: Some(defaults),
        }))
    }
}
