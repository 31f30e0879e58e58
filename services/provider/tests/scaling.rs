//! Node-group scaling semantics against an in-memory backend.
//!
//! Covers size accounting, bound enforcement, sequential scale-up with
//! partial failure, and the delete path.

use std::sync::Arc;

use osas_provider::error::ProviderError;
use osas_provider::openstack::mock::MockCloud;
use osas_provider::provider::{InstanceRef, NodeGroup, NodeGroupSpec, Provider};

fn workers_spec(min_size: u32, max_size: u32) -> NodeGroupSpec {
    NodeGroupSpec {
        id: "g1".to_string(),
        min_size,
        max_size,
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

async fn group_on(cloud: Arc<MockCloud>, spec: NodeGroupSpec) -> Arc<NodeGroup> {
    let provider = Provider::new(cloud.clone(), cloud);
    provider.get_or_create_group(spec).await.unwrap()
}

#[tokio::test]
async fn target_size_counts_active_and_provisioning_only() {
    let cloud = Arc::new(
        base_cloud()
            .with_server("srv-a", "g1-a", "ACTIVE", &[("nodegroup", "g1")])
            .with_server("srv-b", "g1-b", "BUILD", &[("nodegroup", "g1")])
            .with_server("srv-c", "g1-c", "ERROR", &[("nodegroup", "g1")])
            .with_server("srv-d", "g1-d", "SHUTOFF", &[("nodegroup", "g1")])
            .with_server("srv-e", "other-1", "ACTIVE", &[("nodegroup", "g2")]),
    );
    let group = group_on(cloud, workers_spec(0, 10)).await;

    assert_eq!(group.target_size().await.unwrap(), 2);
}

#[tokio::test]
async fn instances_reports_every_attributed_server() {
    let cloud = Arc::new(
        base_cloud()
            .with_server("srv-a", "g1-a", "ACTIVE", &[("nodegroup", "g1")])
            .with_server("srv-c", "g1-c", "ERROR", &[("nodegroup", "g1")]),
    );
    let group = group_on(cloud, workers_spec(0, 10)).await;

    let instances = group.instances().await.unwrap();
    assert_eq!(instances.len(), 2);
}

#[tokio::test]
async fn scale_up_within_bounds_then_rejected_at_ceiling() {
    let cloud = Arc::new(
        base_cloud()
            .with_server("srv-a", "g1-a", "ACTIVE", &[("nodegroup", "g1")])
            .with_server("srv-b", "g1-b", "ACTIVE", &[("nodegroup", "g1")]),
    );
    let group = group_on(cloud.clone(), workers_spec(1, 5)).await;

    group.increase_size(2).await.unwrap();
    assert_eq!(cloud.create_calls(), 2);
    assert_eq!(group.target_size().await.unwrap(), 4);

    // 4 + 2 > 5: rejected up front, no create issued.
    let err = group.increase_size(2).await.unwrap_err();
    assert!(matches!(err, ProviderError::CapacityExceeded { .. }), "{err:?}");
    assert_eq!(cloud.create_calls(), 2);
    assert_eq!(group.target_size().await.unwrap(), 4);
}

#[tokio::test]
async fn created_servers_carry_group_metadata_and_name() {
    let cloud = Arc::new(base_cloud());
    let group = group_on(cloud.clone(), workers_spec(0, 5)).await;

    group.increase_size(1).await.unwrap();

    let created = &group.instances().await.unwrap()[0];
    assert_eq!(created.metadata["nodegroup"], "g1");
    assert_eq!(created.metadata["created_by"], "osas-provider");
    assert!(created.name.starts_with("g1-"));
}

#[tokio::test]
async fn non_positive_increase_delta_is_invalid_and_creates_nothing() {
    let cloud = Arc::new(base_cloud());
    let group = group_on(cloud.clone(), workers_spec(0, 5)).await;

    for delta in [0, -3] {
        let err = group.increase_size(delta).await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidArgument(_)), "{err:?}");
    }
    assert_eq!(cloud.create_calls(), 0);
}

#[tokio::test]
async fn partial_scale_up_halts_and_keeps_progress() {
    let cloud = Arc::new(base_cloud().failing_creates_from(1));
    let group = group_on(cloud.clone(), workers_spec(0, 10)).await;

    let err = group.increase_size(3).await.unwrap_err();
    assert!(matches!(err, ProviderError::Backend { .. }), "{err:?}");

    // First create landed, second failed, third never attempted.
    assert_eq!(cloud.create_calls(), 2);
    assert_eq!(cloud.server_count(), 1);
}

#[tokio::test]
async fn decrease_validates_floor_and_never_deletes() {
    let cloud = Arc::new(
        base_cloud()
            .with_server("srv-a", "g1-a", "ACTIVE", &[("nodegroup", "g1")])
            .with_server("srv-b", "g1-b", "ACTIVE", &[("nodegroup", "g1")]),
    );
    let group = group_on(cloud.clone(), workers_spec(1, 5)).await;

    group.decrease_target_size(-1).await.unwrap();

    // 2 - 2 < 1: rejected.
    let err = group.decrease_target_size(-2).await.unwrap_err();
    assert!(matches!(err, ProviderError::CapacityExceeded { .. }), "{err:?}");

    let err = group.decrease_target_size(1).await.unwrap_err();
    assert!(matches!(err, ProviderError::InvalidArgument(_)), "{err:?}");

    assert!(cloud.deleted_servers().is_empty());
    assert_eq!(cloud.server_count(), 2);
}

#[tokio::test]
async fn delete_nodes_removes_backend_servers() {
    let cloud = Arc::new(
        base_cloud()
            .with_server("srv-a", "g1-a", "ACTIVE", &[("nodegroup", "g1")])
            .with_server("srv-b", "g1-b", "ACTIVE", &[("nodegroup", "g1")]),
    );
    let group = group_on(cloud.clone(), workers_spec(0, 5)).await;

    group
        .delete_nodes(&[
            InstanceRef {
                name: "g1-a".to_string(),
                provider_id: "openstack://srv-a".to_string(),
            },
            InstanceRef {
                name: "g1-b".to_string(),
                provider_id: "openstack://srv-b".to_string(),
            },
        ])
        .await
        .unwrap();

    assert_eq!(cloud.deleted_servers(), vec!["srv-a", "srv-b"]);
    assert_eq!(group.target_size().await.unwrap(), 0);
}

#[tokio::test]
async fn delete_with_foreign_provider_id_issues_no_backend_call() {
    let cloud = Arc::new(
        base_cloud().with_server("srv-a", "g1-a", "ACTIVE", &[("nodegroup", "g1")]),
    );
    let group = group_on(cloud.clone(), workers_spec(0, 5)).await;

    let err = group
        .delete_nodes(&[InstanceRef {
            name: "g1-a".to_string(),
            provider_id: "aws:///us-east-1a/i-0abc".to_string(),
        }])
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::InvalidArgument(_)), "{err:?}");
    assert!(cloud.deleted_servers().is_empty());
}

#[tokio::test]
async fn delete_halts_on_first_failure_keeping_earlier_deletions() {
    let cloud = Arc::new(
        base_cloud().with_server("srv-a", "g1-a", "ACTIVE", &[("nodegroup", "g1")]),
    );
    let group = group_on(cloud.clone(), workers_spec(0, 5)).await;

    let err = group
        .delete_nodes(&[
            InstanceRef {
                name: "g1-a".to_string(),
                provider_id: "openstack://srv-a".to_string(),
            },
            InstanceRef {
                name: "g1-b".to_string(),
                provider_id: "not-a-provider-id".to_string(),
            },
        ])
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::InvalidArgument(_)), "{err:?}");
    assert_eq!(cloud.deleted_servers(), vec!["srv-a"]);
}

#[tokio::test]
async fn backend_outage_surfaces_as_backend_error() {
    let cloud = Arc::new(base_cloud().failing_lists());
    let group = group_on(cloud, workers_spec(0, 5)).await;

    let err = group.target_size().await.unwrap_err();
    assert!(matches!(err, ProviderError::Backend { .. }), "{err:?}");

    let err = group.increase_size(1).await.unwrap_err();
    assert!(matches!(err, ProviderError::Backend { .. }), "{err:?}");
}
