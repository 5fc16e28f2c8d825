//! Resolved resource metadata

use crate::core::ResourceType;
use serde::Serialize;

/// Resolved mapping of a domain type onto the REST resource hierarchy
///
/// Descriptors are computed by [`ResourceResolver`](super::ResourceResolver)
/// and shared behind an `Arc`; they never change once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceDescriptor {
    name: String,
    path: String,
    id_type: ResourceType,
    domain_type: ResourceType,
    representation_type: ResourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_type: Option<ResourceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_property: Option<String>,
}

impl ResourceDescriptor {
    pub(crate) fn top_level(
        name: String,
        domain_type: ResourceType,
        id_type: ResourceType,
        representation_type: Option<ResourceType>,
    ) -> Self {
        Self {
            path: format!("/{}", name),
            name,
            id_type,
            domain_type,
            representation_type: representation_type.unwrap_or(domain_type),
            parent_type: None,
            parent_property: None,
        }
    }

    pub(crate) fn nested(
        name: String,
        path: String,
        domain_type: ResourceType,
        id_type: ResourceType,
        representation_type: Option<ResourceType>,
        parent_type: ResourceType,
        parent_property: String,
    ) -> Self {
        Self {
            name,
            path,
            id_type,
            domain_type,
            representation_type: representation_type.unwrap_or(domain_type),
            parent_type: Some(parent_type),
            parent_property: Some(parent_property),
        }
    }

    /// Resource name (e.g., "comments")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute mount path (e.g., "/posts/{parentId}/comments")
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Last segment of the mount path
    ///
    /// Empty segments left by a trailing `/` are skipped.
    pub fn last_path_segment(&self) -> &str {
        self.path
            .rsplit('/')
            .find(|segment| !segment.is_empty())
            .unwrap_or_default()
    }

    pub fn id_type(&self) -> ResourceType {
        self.id_type
    }

    /// The type carrying the declaration this descriptor was built from
    pub fn domain_type(&self) -> ResourceType {
        self.domain_type
    }

    pub fn representation_type(&self) -> ResourceType {
        self.representation_type
    }

    pub fn parent_type(&self) -> Option<ResourceType> {
        self.parent_type
    }

    pub fn parent_property(&self) -> Option<&str> {
        self.parent_property.as_deref()
    }

    pub fn is_nested(&self) -> bool {
        self.parent_type.is_some()
    }
}
