//! Protocol-level behavior of the gRPC adapter: response shapes, error
//! codes, and the permanently-empty capability surface.

use std::sync::Arc;

use osas_proto::cloudprovider::v1 as pb;
use osas_proto::cloudprovider::v1::CloudProvider;
use osas_provider::grpc::CloudProviderService;
use osas_provider::openstack::mock::MockCloud;
use osas_provider::provider::{NodeGroupSpec, Provider};
use tonic::{Code, Request};

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

fn base_cloud() -> MockCloud {
    MockCloud::new()
        .with_flavor("fl-1", "m1.large", 4, 8192)
        .with_image("img-1", "ubuntu-22.04")
}

async fn service_on(cloud: Arc<MockCloud>, specs: Vec<NodeGroupSpec>) -> CloudProviderService {
    let provider = Arc::new(Provider::new(cloud.clone(), cloud));
    for spec in specs {
        provider.get_or_create_group(spec).await.unwrap();
    }
    CloudProviderService::new(provider)
}

fn node(provider_id: &str) -> pb::ExternalGrpcNode {
    pb::ExternalGrpcNode {
        provider_id: provider_id.to_string(),
        name: String::new(),
        labels: Default::default(),
        annotations: Default::default(),
    }
}

#[tokio::test]
async fn node_groups_lists_registered_groups() {
    let service = service_on(Arc::new(base_cloud()), vec![spec("g1")]).await;

    let response = service
        .node_groups(Request::new(pb::NodeGroupsRequest {}))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.node_groups.len(), 1);
    let group = &response.node_groups[0];
    assert_eq!(group.id, "g1");
    assert_eq!(group.min_size, 1);
    assert_eq!(group.max_size, 5);
    assert_eq!(group.debug, "NodeGroup g1: min=1, max=5, flavor=m1.large");
}

#[tokio::test]
async fn unknown_group_maps_to_not_found() {
    let service = service_on(Arc::new(base_cloud()), vec![]).await;

    let status = service
        .node_group_target_size(Request::new(pb::NodeGroupTargetSizeRequest {
            id: "ghost".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn target_size_reflects_backend_state() {
    let cloud = Arc::new(
        base_cloud()
            .with_server("srv-a", "g1-a", "ACTIVE", &[("nodegroup", "g1")])
            .with_server("srv-b", "g1-b", "BUILD", &[("nodegroup", "g1")]),
    );
    let service = service_on(cloud, vec![spec("g1")]).await;

    let response = service
        .node_group_target_size(Request::new(pb::NodeGroupTargetSizeRequest {
            id: "g1".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.target_size, 2);
}

#[tokio::test]
async fn increase_size_error_codes() {
    let cloud = Arc::new(
        base_cloud()
            .with_server("srv-a", "g1-a", "ACTIVE", &[("nodegroup", "g1")])
            .with_server("srv-b", "g1-b", "ACTIVE", &[("nodegroup", "g1")]),
    );
    let service = service_on(cloud.clone(), vec![spec("g1")]).await;

    service
        .node_group_increase_size(Request::new(pb::NodeGroupIncreaseSizeRequest {
            id: "g1".to_string(),
            delta: 2,
        }))
        .await
        .unwrap();
    assert_eq!(cloud.create_calls(), 2);

    let status = service
        .node_group_increase_size(Request::new(pb::NodeGroupIncreaseSizeRequest {
            id: "g1".to_string(),
            delta: 2,
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::OutOfRange);
    assert_eq!(cloud.create_calls(), 2);

    let status = service
        .node_group_increase_size(Request::new(pb::NodeGroupIncreaseSizeRequest {
            id: "g1".to_string(),
            delta: 0,
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn decrease_below_floor_is_out_of_range() {
    let cloud = Arc::new(
        base_cloud().with_server("srv-a", "g1-a", "ACTIVE", &[("nodegroup", "g1")]),
    );
    let service = service_on(cloud, vec![spec("g1")]).await;

    let status = service
        .node_group_decrease_target_size(Request::new(pb::NodeGroupDecreaseTargetSizeRequest {
            id: "g1".to_string(),
            delta: -1,
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::OutOfRange);
}

#[tokio::test]
async fn backend_outage_maps_to_internal() {
    let service = service_on(Arc::new(base_cloud().failing_lists()), vec![spec("g1")]).await;

    let status = service
        .node_group_target_size(Request::new(pb::NodeGroupTargetSizeRequest {
            id: "g1".to_string(),
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Internal);
}

#[tokio::test]
async fn nodes_report_tri_state_statuses() {
    let cloud = Arc::new(
        base_cloud()
            .with_server("srv-a", "g1-a", "ACTIVE", &[("nodegroup", "g1")])
            .with_server("srv-b", "g1-b", "BUILD", &[("nodegroup", "g1")])
            .with_server("srv-c", "g1-c", "DELETING", &[("nodegroup", "g1")])
            .with_server("srv-d", "g1-d", "ERROR", &[("nodegroup", "g1")]),
    );
    let service = service_on(cloud, vec![spec("g1")]).await;

    let response = service
        .node_group_nodes(Request::new(pb::NodeGroupNodesRequest {
            id: "g1".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    let state_of = |id: &str| {
        response
            .instances
            .iter()
            .find(|instance| instance.id == id)
            .and_then(|instance| instance.status.as_ref())
            .map(|status| status.instance_state)
            .unwrap()
    };

    assert_eq!(state_of("srv-a"), i32::from(pb::InstanceState::Running));
    assert_eq!(state_of("srv-b"), i32::from(pb::InstanceState::Provisioning));
    assert_eq!(state_of("srv-c"), i32::from(pb::InstanceState::Deleting));
    assert_eq!(state_of("srv-d"), i32::from(pb::InstanceState::Unspecified));
}

#[tokio::test]
async fn delete_nodes_rejects_foreign_provider_ids() {
    let cloud = Arc::new(
        base_cloud().with_server("srv-a", "g1-a", "ACTIVE", &[("nodegroup", "g1")]),
    );
    let service = service_on(cloud.clone(), vec![spec("g1")]).await;

    let status = service
        .node_group_delete_nodes(Request::new(pb::NodeGroupDeleteNodesRequest {
            id: "g1".to_string(),
            nodes: vec![node("gce://project/zone/instance-1")],
        }))
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::InvalidArgument);
    assert!(cloud.deleted_servers().is_empty());
}

#[tokio::test]
async fn delete_nodes_removes_instances() {
    let cloud = Arc::new(
        base_cloud().with_server("srv-a", "g1-a", "ACTIVE", &[("nodegroup", "g1")]),
    );
    let service = service_on(cloud.clone(), vec![spec("g1")]).await;

    service
        .node_group_delete_nodes(Request::new(pb::NodeGroupDeleteNodesRequest {
            id: "g1".to_string(),
            nodes: vec![node("openstack://srv-a")],
        }))
        .await
        .unwrap();

    assert_eq!(cloud.deleted_servers(), vec!["srv-a"]);
}

#[tokio::test]
async fn template_node_info_returns_synthetic_node() {
    let service = service_on(Arc::new(base_cloud()), vec![spec("g1")]).await;

    let response = service
        .node_group_template_node_info(Request::new(pb::NodeGroupTemplateNodeInfoRequest {
            id: "g1".to_string(),
        }))
        .await
        .unwrap()
        .into_inner();

    let template = response.node_template.unwrap();
    assert_eq!(template.name, "g1-template");
    assert_eq!(template.provider_id, "openstack://template-g1");
    assert_eq!(template.cpu_cores, 4);
    assert_eq!(template.memory_bytes, 8192 * 1024 * 1024);
    assert_eq!(template.labels["node.kubernetes.io/instance-type"], "m1.large");
}

#[tokio::test]
async fn group_for_node_answers_owner_or_empty() {
    let cloud = Arc::new(
        base_cloud()
            .with_server("srv-a", "random-42", "ACTIVE", &[("nodegroup", "g1")])
            .with_server("srv-b", "unrelated", "ACTIVE", &[]),
    );
    let service = service_on(cloud, vec![spec("g1")]).await;

    let owned = service
        .node_group_for_node(Request::new(pb::NodeGroupForNodeRequest {
            node: Some(node("openstack://srv-a")),
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(owned.node_group.unwrap().id, "g1");

    let unmanaged = service
        .node_group_for_node(Request::new(pb::NodeGroupForNodeRequest {
            node: Some(node("openstack://srv-b")),
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(unmanaged.node_group.unwrap().id, "");

    let status = service
        .node_group_for_node(Request::new(pb::NodeGroupForNodeRequest { node: None }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);

    let status = service
        .node_group_for_node(Request::new(pb::NodeGroupForNodeRequest {
            node: Some(node("srv-a")),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn get_options_echoes_caller_defaults() {
    let service = service_on(Arc::new(base_cloud()), vec![spec("g1")]).await;

    let defaults = pb::AutoscalingOptions {
        scale_down_utilization_threshold: 0.5,
        scale_down_gpu_utilization_threshold: 0.0,
        scale_down_unneeded_duration: Some(prost_types::Duration {
            seconds: 600,
            nanos: 0,
        }),
        scale_down_unready_duration: Some(prost_types::Duration {
            seconds: 1200,
            nanos: 0,
        }),
        max_node_provision_duration: Some(prost_types::Duration {
            seconds: 900,
            nanos: 0,
        }),
        zero_or_max_node_scaling: false,
        ignore_daemon_sets_utilization: true,
    };

    let response = service
        .node_group_get_options(Request::new(pb::NodeGroupAutoscalingOptionsRequest {
            id: "g1".to_string(),
            defaults: Some(defaults.clone()),
        }))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(response.node_group_autoscaling_options, Some(defaults));

    let status = service
        .node_group_get_options(Request::new(pb::NodeGroupAutoscalingOptionsRequest {
            id: "g1".to_string(),
            defaults: None,
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn capability_surface_is_defined_but_empty() {
    let service = service_on(Arc::new(base_cloud()), vec![]).await;

    let label = service
        .gpu_label(Request::new(pb::GpuLabelRequest {}))
        .await
        .unwrap()
        .into_inner();
    assert_eq!(label.label, "");

    let gpu_types = service
        .get_available_gpu_types(Request::new(pb::GetAvailableGpuTypesRequest {}))
        .await
        .unwrap()
        .into_inner();
    assert!(gpu_types.gpu_types.is_empty());

    let status = service
        .pricing_node_price(Request::new(pb::PricingNodePriceRequest { node: None }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unimplemented);

    let status = service
        .pricing_pod_price(Request::new(pb::PricingPodPriceRequest {
            pod_name: String::new(),
            pod_namespace: String::new(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unimplemented);
}

#[tokio::test]
async fn refresh_and_cleanup_succeed() {
    let service = service_on(Arc::new(base_cloud()), vec![spec("g1")]).await;

    service
        .refresh(Request::new(pb::RefreshRequest {}))
        .await
        .unwrap();
    service
        .cleanup(Request::new(pb::CleanupRequest {}))
        .await
        .unwrap();
}
