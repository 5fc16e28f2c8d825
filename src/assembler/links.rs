//! Canonical links built from resolved resource paths

use crate::core::{
    DeclarationError, EntityLinks, Link, PreconditionError, ResourceType, Result,
};
use crate::resolver::ResourceResolver;
use std::sync::Arc;

/// [`EntityLinks`] implementation producing `{base_uri}{path}/{id}`
///
/// Only top-level resources can be linked this way; a nested resource's
/// link depends on its parent and is built by a
/// [`NestedResourceAssembler`](super::NestedResourceAssembler).
pub struct PathEntityLinks {
    base_uri: String,
    resolver: Arc<ResourceResolver>,
}

impl PathEntityLinks {
    pub fn new(base_uri: impl Into<String>, resolver: Arc<ResourceResolver>) -> Self {
        let base_uri = base_uri.into().trim_end_matches('/').to_string();
        Self { base_uri, resolver }
    }

    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }
}

impl EntityLinks for PathEntityLinks {
    fn link_for_single_resource(&self, resource: ResourceType, id: &str) -> Result<Link> {
        let descriptor = self
            .resolver
            .resolve(resource)?
            .ok_or(DeclarationError::NotAResource {
                domain_type: resource,
            })?;

        if descriptor.is_nested() {
            return Err(PreconditionError::NestedLinkWithoutParent {
                domain_type: descriptor.domain_type(),
            }
            .into());
        }

        Ok(Link::self_link(format!(
            "{}{}/{}",
            self.base_uri,
            descriptor.path(),
            id
        )))
    }
}
