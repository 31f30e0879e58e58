//! In-memory stand-in for the Nova and Glance APIs.
//!
//! Used by unit and integration tests to exercise the provider core without
//! a real cloud. Failure toggles and call counters let tests assert not just
//! outcomes but how many backend calls an operation issued.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use super::types::{CreateServer, CreatedServer, Flavor, Image, Server};
use super::{ComputeApi, ImageApi, OpenStackError};

#[derive(Default)]
pub struct MockCloud {
    servers: Mutex<Vec<Server>>,
    flavors: Vec<Flavor>,
    images: Vec<Image>,

    /// When false, `get_flavor` always misses and callers must fall back to
    /// the catalog scan.
    direct_flavor_lookup: bool,

    fail_lists: bool,
    fail_deletes: bool,
    fail_images: bool,
    /// Fail every `create_server` call with index >= n (0-based).
    fail_creates_from: Option<usize>,

    create_calls: AtomicUsize,
    flavor_lookups: AtomicUsize,
    deleted: Mutex<Vec<String>>,
    next_server_id: AtomicUsize,
}

impl MockCloud {
    pub fn new() -> Self {
        Self {
            direct_flavor_lookup: true,
            ..Self::default()
        }
    }

    pub fn with_server(self, id: &str, name: &str, status: &str, metadata: &[(&str, &str)]) -> Self {
        self.servers.lock().unwrap().push(Server {
            id: id.to_string(),
            name: name.to_string(),
            status: status.to_string(),
            metadata: metadata
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        self
    }

    pub fn with_flavor(mut self, id: &str, name: &str, vcpus: u32, ram_mib: u64) -> Self {
        self.flavors.push(Flavor {
            id: id.to_string(),
            name: name.to_string(),
            vcpus,
            ram: ram_mib,
        });
        self
    }

    pub fn with_image(mut self, id: &str, name: &str) -> Self {
        self.images.push(Image {
            id: id.to_string(),
            name: Some(name.to_string()),
            status: "active".to_string(),
        });
        self
    }

    /// Disable direct flavor lookup so resolution exercises the catalog scan.
    pub fn without_direct_flavor_lookup(mut self) -> Self {
        self.direct_flavor_lookup = false;
        self
    }

    pub fn failing_lists(mut self) -> Self {
        self.fail_lists = true;
        self
    }

    pub fn failing_deletes(mut self) -> Self {
        self.fail_deletes = true;
        self
    }

    pub fn failing_images(mut self) -> Self {
        self.fail_images = true;
        self
    }

    pub fn failing_creates(self) -> Self {
        self.failing_creates_from(0)
    }

    pub fn failing_creates_from(mut self, n: usize) -> Self {
        self.fail_creates_from = Some(n);
        self
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    /// Number of direct `get_flavor` round trips issued so far.
    pub fn flavor_lookups(&self) -> usize {
        self.flavor_lookups.load(Ordering::SeqCst)
    }

    pub fn deleted_servers(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }

    pub fn server_count(&self) -> usize {
        self.servers.lock().unwrap().len()
    }

    fn unavailable(what: &str) -> OpenStackError {
        OpenStackError::Api {
            status: 503,
            message: format!("mock: {what} unavailable"),
        }
    }
}

#[async_trait]
impl ComputeApi for MockCloud {
    async fn list_servers(&self) -> Result<Vec<Server>, OpenStackError> {
        if self.fail_lists {
            return Err(Self::unavailable("server list"));
        }
        Ok(self.servers.lock().unwrap().clone())
    }

    async fn get_server(&self, id: &str) -> Result<Server, OpenStackError> {
        if self.fail_lists {
            return Err(Self::unavailable("server get"));
        }
        self.servers
            .lock()
            .unwrap()
            .iter()
            .find(|server| server.id == id)
            .cloned()
            .ok_or(OpenStackError::Api {
                status: 404,
                message: format!("server {id} not found"),
            })
    }

    async fn create_server(&self, request: &CreateServer) -> Result<CreatedServer, OpenStackError> {
        let call = self.create_calls.fetch_add(1, Ordering::SeqCst);
        if matches!(self.fail_creates_from, Some(n) if call >= n) {
            return Err(Self::unavailable("server create"));
        }

        let id = format!("srv-{}", self.next_server_id.fetch_add(1, Ordering::SeqCst));
        self.servers.lock().unwrap().push(Server {
            id: id.clone(),
            name: request.name.clone(),
            status: "BUILD".to_string(),
            metadata: request.metadata.clone(),
        });
        Ok(CreatedServer { id })
    }

    async fn delete_server(&self, id: &str) -> Result<(), OpenStackError> {
        if self.fail_deletes {
            return Err(Self::unavailable("server delete"));
        }
        self.servers.lock().unwrap().retain(|server| server.id != id);
        self.deleted.lock().unwrap().push(id.to_string());
        Ok(())
    }

    async fn get_flavor(&self, id_or_name: &str) -> Result<Flavor, OpenStackError> {
        self.flavor_lookups.fetch_add(1, Ordering::SeqCst);
        if !self.direct_flavor_lookup {
            return Err(OpenStackError::Api {
                status: 404,
                message: format!("flavor {id_or_name} not found"),
            });
        }
        self.flavors
            .iter()
            .find(|flavor| flavor.id == id_or_name || flavor.name == id_or_name)
            .cloned()
            .ok_or(OpenStackError::Api {
                status: 404,
                message: format!("flavor {id_or_name} not found"),
            })
    }

    async fn list_flavors(&self) -> Result<Vec<Flavor>, OpenStackError> {
        if self.fail_lists {
            return Err(Self::unavailable("flavor list"));
        }
        Ok(self.flavors.clone())
    }
}

#[async_trait]
impl ImageApi for MockCloud {
    async fn list_images(&self, name: Option<&str>) -> Result<Vec<Image>, OpenStackError> {
        if self.fail_images {
            return Err(Self::unavailable("image list"));
        }
        Ok(self
            .images
            .iter()
            .filter(|image| name.is_none() || image.name.as_deref() == name)
            .cloned()
            .collect())
    }
}
