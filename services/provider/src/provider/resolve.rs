//! Machine-type and image resolution against the backend catalogs.

use tracing::debug;

use super::node_group::NodeGroupSpec;
use crate::error::ProviderError;
use crate::openstack::{ComputeApi, Flavor, ImageApi};

/// Resolve a flavor by name: direct lookup first, then a full catalog scan.
///
/// Nova's direct endpoint only accepts ids, so a configured name usually
/// misses there and is found by the scan.
pub(super) async fn flavor(
    compute: &dyn ComputeApi,
    name: &str,
) -> Result<Flavor, ProviderError> {
    match compute.get_flavor(name).await {
        Ok(flavor) => Ok(flavor),
        Err(direct_err) => {
            debug!(
                flavor = name,
                error = %direct_err,
                "Direct flavor lookup failed, scanning catalog"
            );
            let flavors = compute
                .list_flavors()
                .await
                .map_err(|e| ProviderError::backend("list flavors", e))?;
            flavors
                .into_iter()
                .find(|flavor| flavor.name == name)
                .ok_or_else(|| ProviderError::NotFound(format!("flavor {name} not found")))
        }
    }
}

/// Resolve the boot image id for a group.
///
/// An explicitly configured id is used verbatim. Otherwise the image catalog
/// is filtered by name; Glance gives no ordering guarantee when several
/// images share the name, so the first result is an arbitrary pick.
pub(super) async fn image_id(
    image: &dyn ImageApi,
    spec: &NodeGroupSpec,
) -> Result<String, ProviderError> {
    if let Some(id) = &spec.image_id {
        return Ok(id.clone());
    }

    let name = spec.image_name.as_deref().ok_or_else(|| {
        ProviderError::NotFound(format!("node group {} has no image reference", spec.id))
    })?;

    let images = image
        .list_images(Some(name))
        .await
        .map_err(|e| ProviderError::backend(format!("list images named {name}"), e))?;

    images
        .into_iter()
        .next()
        .map(|image| image.id)
        .ok_or_else(|| ProviderError::NotFound(format!("image {name} not found")))
}
