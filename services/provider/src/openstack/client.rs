//! Authenticated HTTP client for the Nova and Glance APIs.
//!
//! Construction performs a single Keystone v3 token issue and resolves the
//! compute/image endpoints from the service catalog. The client is built
//! once at startup and shared read-only afterwards; it never re-authenticates
//! and never retries a call.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use super::types::{CreateServer, CreatedServer, Flavor, Image, Server};
use super::{ComputeApi, ImageApi, OpenStackError};
use crate::config::CloudConfig;

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);
const TOKEN_HEADER: &str = "X-Auth-Token";

#[derive(Debug)]
pub struct OpenStackClient {
    http: reqwest::Client,
    token: String,
    compute_url: String,
    image_url: String,
}

impl OpenStackClient {
    /// Authenticate against Keystone and resolve service endpoints.
    pub async fn connect(cloud: &CloudConfig) -> Result<Self, OpenStackError> {
        let http = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;

        let url = format!("{}/auth/tokens", cloud.auth_url.trim_end_matches('/'));
        debug!(url = %url, "Requesting Keystone token");

        let response = http.post(&url).json(&auth_request(cloud)).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(OpenStackError::Auth(format!("{status}: {message}")));
        }

        let token = response
            .headers()
            .get("x-subject-token")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| OpenStackError::Auth("missing X-Subject-Token header".to_string()))?;

        let body: TokenResponse = response.json().await?;
        let compute_url = endpoint_url(&body.token.catalog, "compute", cloud)?;
        let image_url = endpoint_url(&body.token.catalog, "image", cloud)?;

        Ok(Self {
            http,
            token,
            compute_url,
            image_url,
        })
    }

    pub fn compute_url(&self) -> &str {
        &self.compute_url
    }

    pub fn image_url(&self) -> &str {
        &self.image_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, OpenStackError> {
        let response = self
            .http
            .get(url)
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }
}

/// Fail non-2xx responses with the backend's own error text.
async fn check(response: reqwest::Response) -> Result<reqwest::Response, OpenStackError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(OpenStackError::Api {
        status: status.as_u16(),
        message,
    })
}

fn auth_request(cloud: &CloudConfig) -> serde_json::Value {
    if !cloud.application_credential_id.is_empty() {
        return json!({
            "auth": {
                "identity": {
                    "methods": ["application_credential"],
                    "application_credential": {
                        "id": cloud.application_credential_id,
                        "secret": cloud.application_credential_secret,
                    },
                },
            },
        });
    }

    if !cloud.application_credential_name.is_empty() {
        return json!({
            "auth": {
                "identity": {
                    "methods": ["application_credential"],
                    "application_credential": {
                        "name": cloud.application_credential_name,
                        "secret": cloud.application_credential_secret,
                        "user": {
                            "name": cloud.username,
                            "domain": {"name": cloud.user_domain_name},
                        },
                    },
                },
            },
        });
    }

    let mut auth = json!({
        "auth": {
            "identity": {
                "methods": ["password"],
                "password": {
                    "user": {
                        "name": cloud.username,
                        "password": cloud.password,
                        "domain": {"name": cloud.user_domain_name},
                    },
                },
            },
        },
    });

    let scope = if !cloud.project_id.is_empty() {
        Some(json!({"project": {"id": cloud.project_id}}))
    } else if !cloud.project_name.is_empty() {
        Some(json!({
            "project": {
                "name": cloud.project_name,
                "domain": {"name": cloud.project_domain_name},
            },
        }))
    } else {
        None
    };
    if let Some(scope) = scope {
        auth["auth"]["scope"] = scope;
    }

    auth
}

fn endpoint_url(
    catalog: &[CatalogEntry],
    service: &'static str,
    cloud: &CloudConfig,
) -> Result<String, OpenStackError> {
    catalog
        .iter()
        .filter(|entry| entry.kind == service)
        .flat_map(|entry| entry.endpoints.iter())
        .find(|endpoint| {
            endpoint.interface == cloud.interface
                && (cloud.region.is_empty() || endpoint.region == cloud.region)
        })
        .map(|endpoint| endpoint.url.trim_end_matches('/').to_string())
        .ok_or(OpenStackError::MissingEndpoint { service })
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: TokenBody,
}

#[derive(Debug, Deserialize)]
struct TokenBody {
    #[serde(default)]
    catalog: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    endpoints: Vec<Endpoint>,
}

#[derive(Debug, Deserialize)]
struct Endpoint {
    interface: String,
    #[serde(default)]
    region: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct ServersBody {
    servers: Vec<Server>,
}

#[derive(Debug, Deserialize)]
struct ServerBody {
    server: Server,
}

#[derive(Debug, Deserialize)]
struct CreatedServerBody {
    server: CreatedServer,
}

#[derive(Debug, Deserialize)]
struct FlavorsBody {
    flavors: Vec<Flavor>,
}

#[derive(Debug, Deserialize)]
struct FlavorBody {
    flavor: Flavor,
}

#[derive(Debug, Deserialize)]
struct ImagesBody {
    images: Vec<Image>,
}

#[async_trait]
impl ComputeApi for OpenStackClient {
    async fn list_servers(&self) -> Result<Vec<Server>, OpenStackError> {
        let url = format!("{}/servers/detail", self.compute_url);
        let body: ServersBody = self.get_json(&url).await?;
        Ok(body.servers)
    }

    async fn get_server(&self, id: &str) -> Result<Server, OpenStackError> {
        let url = format!("{}/servers/{id}", self.compute_url);
        let body: ServerBody = self.get_json(&url).await?;
        Ok(body.server)
    }

    async fn create_server(&self, request: &CreateServer) -> Result<CreatedServer, OpenStackError> {
        let url = format!("{}/servers", self.compute_url);
        debug!(server_name = %request.name, "POST /servers");
        let response = self
            .http
            .post(&url)
            .header(TOKEN_HEADER, &self.token)
            .json(&json!({"server": request}))
            .send()
            .await?;
        let body: CreatedServerBody = check(response).await?.json().await?;
        Ok(body.server)
    }

    async fn delete_server(&self, id: &str) -> Result<(), OpenStackError> {
        let url = format!("{}/servers/{id}", self.compute_url);
        let response = self
            .http
            .delete(&url)
            .header(TOKEN_HEADER, &self.token)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn get_flavor(&self, id_or_name: &str) -> Result<Flavor, OpenStackError> {
        let url = format!("{}/flavors/{id_or_name}", self.compute_url);
        let body: FlavorBody = self.get_json(&url).await?;
        Ok(body.flavor)
    }

    async fn list_flavors(&self) -> Result<Vec<Flavor>, OpenStackError> {
        let url = format!("{}/flavors/detail", self.compute_url);
        let body: FlavorsBody = self.get_json(&url).await?;
        Ok(body.flavors)
    }
}

#[async_trait]
impl ImageApi for OpenStackClient {
    async fn list_images(&self, name: Option<&str>) -> Result<Vec<Image>, OpenStackError> {
        let url = format!("{}/v2/images", self.image_url);
        let mut request = self.http.get(&url).header(TOKEN_HEADER, &self.token);
        if let Some(name) = name {
            request = request.query(&[("name", name)]);
        }
        let response = request.send().await?;
        let body: ImagesBody = check(response).await?.json().await?;
        Ok(body.images)
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{body_partial_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn test_cloud(auth_url: String) -> CloudConfig {
        CloudConfig {
            auth_url,
            username: "demo".to_string(),
            password: "secret".to_string(),
            project_name: "demo-project".to_string(),
            ..CloudConfig::default()
        }
    }

    async fn mount_keystone(server: &MockServer) {
        let catalog = json!({
            "token": {
                "catalog": [
                    {
                        "type": "compute",
                        "endpoints": [
                            {"interface": "public", "region": "", "url": format!("{}/compute/v2.1", server.uri())},
                        ],
                    },
                    {
                        "type": "image",
                        "endpoints": [
                            {"interface": "public", "region": "", "url": format!("{}/image", server.uri())},
                        ],
                    },
                ],
            },
        });

        Mock::given(method("POST"))
            .and(path("/v3/auth/tokens"))
            .respond_with(
                ResponseTemplate::new(201)
                    .insert_header("X-Subject-Token", "tok-1")
                    .set_body_json(catalog),
            )
            .mount(server)
            .await;
    }

    async fn connected_client(server: &MockServer) -> OpenStackClient {
        mount_keystone(server).await;
        OpenStackClient::connect(&test_cloud(format!("{}/v3", server.uri())))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn connect_resolves_catalog_endpoints() {
        let server = MockServer::start().await;
        let client = connected_client(&server).await;

        assert_eq!(
            client.compute_url(),
            format!("{}/compute/v2.1", server.uri())
        );
        assert_eq!(client.image_url(), format!("{}/image", server.uri()));
    }

    #[tokio::test]
    async fn list_servers_sends_token_header() {
        let server = MockServer::start().await;
        let client = connected_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/compute/v2.1/servers/detail"))
            .and(header("X-Auth-Token", "tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "servers": [
                    {"id": "srv-1", "name": "workers-1", "status": "ACTIVE", "metadata": {"nodegroup": "workers"}},
                ],
            })))
            .mount(&server)
            .await;

        let servers = client.list_servers().await.unwrap();
        assert_eq!(servers.len(), 1);
        assert_eq!(servers[0].id, "srv-1");
        assert_eq!(servers[0].metadata["nodegroup"], "workers");
    }

    #[tokio::test]
    async fn create_server_posts_nova_document() {
        let server = MockServer::start().await;
        let client = connected_client(&server).await;

        Mock::given(method("POST"))
            .and(path("/compute/v2.1/servers"))
            .and(body_partial_json(json!({
                "server": {"name": "workers-ab12", "imageRef": "img-1", "flavorRef": "fl-1"},
            })))
            .respond_with(
                ResponseTemplate::new(202).set_body_json(json!({"server": {"id": "srv-9"}})),
            )
            .mount(&server)
            .await;

        let created = client
            .create_server(&CreateServer {
                name: "workers-ab12".to_string(),
                image_ref: "img-1".to_string(),
                flavor_ref: "fl-1".to_string(),
                user_data: None,
                metadata: Default::default(),
                security_groups: Vec::new(),
                networks: Vec::new(),
                availability_zone: None,
                key_name: None,
            })
            .await
            .unwrap();
        assert_eq!(created.id, "srv-9");
    }

    #[tokio::test]
    async fn list_images_filters_by_name() {
        let server = MockServer::start().await;
        let client = connected_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/image/v2/images"))
            .and(query_param("name", "ubuntu-22.04"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "images": [{"id": "img-7", "name": "ubuntu-22.04", "status": "active"}],
            })))
            .mount(&server)
            .await;

        let images = client.list_images(Some("ubuntu-22.04")).await.unwrap();
        assert_eq!(images.len(), 1);
        assert_eq!(images[0].id, "img-7");
    }

    #[tokio::test]
    async fn non_success_surfaces_api_error() {
        let server = MockServer::start().await;
        let client = connected_client(&server).await;

        Mock::given(method("DELETE"))
            .and(path("/compute/v2.1/servers/srv-1"))
            .respond_with(ResponseTemplate::new(409).set_body_string("instance locked"))
            .mount(&server)
            .await;

        let err = client.delete_server("srv-1").await.unwrap_err();
        match err {
            OpenStackError::Api { status, message } => {
                assert_eq!(status, 409);
                assert_eq!(message, "instance locked");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn failed_auth_reports_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v3/auth/tokens"))
            .respond_with(ResponseTemplate::new(401).set_body_string("bad credentials"))
            .mount(&server)
            .await;

        let err = OpenStackClient::connect(&test_cloud(format!("{}/v3", server.uri())))
            .await
            .unwrap_err();
        assert!(matches!(err, OpenStackError::Auth(_)), "{err:?}");
    }

    #[test]
    fn password_auth_request_is_project_scoped() {
        let cloud = test_cloud("https://keystone.example/v3".to_string());
        let body = auth_request(&cloud);
        assert_eq!(body["auth"]["identity"]["methods"][0], "password");
        assert_eq!(body["auth"]["scope"]["project"]["name"], "demo-project");
    }

    #[test]
    fn application_credential_request_carries_no_scope() {
        let cloud = CloudConfig {
            auth_url: "https://keystone.example/v3".to_string(),
            application_credential_id: "ac-1".to_string(),
            application_credential_secret: "shhh".to_string(),
            ..CloudConfig::default()
        };
        let body = auth_request(&cloud);
        assert_eq!(body["auth"]["identity"]["methods"][0], "application_credential");
        assert!(body["auth"].get("scope").is_none());
    }
}
