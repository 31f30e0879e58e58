//! Wire types for the Nova and Glance APIs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A compute instance as reported by Nova `GET /servers/detail`.
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    pub id: String,
    pub name: String,
    /// Raw backend status string, e.g. `ACTIVE` or `BUILD`.
    pub status: String,
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

impl Server {
    pub fn state(&self) -> ServerState {
        ServerState::from_backend(&self.status)
    }
}

/// Protocol-level view of a backend server status.
///
/// Nova's status vocabulary is an open string set; everything outside the
/// mapped values collapses into [`ServerState::Unspecified`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    Provisioning,
    Running,
    Deleting,
    Unspecified,
}

impl ServerState {
    pub fn from_backend(status: &str) -> Self {
        match status {
            "BUILD" => Self::Provisioning,
            "ACTIVE" => Self::Running,
            "DELETED" | "DELETING" => Self::Deleting,
            _ => Self::Unspecified,
        }
    }

    /// Whether an instance in this state counts toward the group's target size.
    pub fn counts_toward_target(self) -> bool {
        matches!(self, Self::Provisioning | Self::Running)
    }
}

/// A compute flavor (machine type).
#[derive(Debug, Clone, Deserialize)]
pub struct Flavor {
    pub id: String,
    pub name: String,
    pub vcpus: u32,
    /// Memory in MiB.
    pub ram: u64,
}

/// A bootable image from the Glance catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub id: String,
    /// Glance allows unnamed images.
    pub name: Option<String>,
    pub status: String,
}

/// Parameters for Nova `POST /servers`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateServer {
    pub name: String,
    #[serde(rename = "imageRef")]
    pub image_ref: String,
    #[serde(rename = "flavorRef")]
    pub flavor_ref: String,
    /// Base64-encoded boot payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    pub metadata: HashMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<SecurityGroupRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub networks: Vec<NetworkRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SecurityGroupRef {
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NetworkRef {
    pub uuid: String,
}

/// The subset of the Nova create response the provider cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedServer {
    pub id: String,
}
