//! Collaborator traits consumed by the resolver and the assemblers
//!
//! These describe the facts the surrounding application provides: what the
//! persistence layer knows about relationships, what the type system knows
//! about collection elements, and how canonical links are built.

use crate::core::error::Result;
use crate::core::field::{FieldDeclaration, FieldShape};
use crate::core::link::Link;
use crate::core::relationship::Relationship;
use crate::core::resource_type::ResourceType;

/// Reports the relationship mapping attached to a field
pub trait RelationshipMetadata: Send + Sync {
    /// Get the relationship of `field` declared on `owner`
    ///
    /// Returns `None` when the field carries no relationship mapping.
    fn relationship(&self, owner: ResourceType, field: &FieldDeclaration) -> Option<Relationship>;
}

/// Determines the element type of a collection field
pub trait CollectionElementResolver: Send + Sync {
    /// Get the element type of a collection field
    ///
    /// Returns `None` for non-collection fields and for collections whose
    /// element type is unknown.
    fn element_type(&self, field: &FieldDeclaration) -> Option<ResourceType>;
}

/// Builds canonical links for resource instances
///
/// Implementations must be safe for concurrent read-only use.
pub trait EntityLinks: Send + Sync {
    /// Get the canonical absolute link of the instance `id` of `resource`
    fn link_for_single_resource(&self, resource: ResourceType, id: &str) -> Result<Link>;
}

/// Relationship facts read from the field declaration itself
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredRelationships;

impl RelationshipMetadata for DeclaredRelationships {
    fn relationship(&self, _owner: ResourceType, field: &FieldDeclaration) -> Option<Relationship> {
        field.relationship.clone()
    }
}

/// Element types read from the field declaration itself
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredElementTypes;

impl CollectionElementResolver for DeclaredElementTypes {
    fn element_type(&self, field: &FieldDeclaration) -> Option<ResourceType> {
        match &field.shape {
            FieldShape::Collection { element, .. } => *element,
            FieldShape::Single(_) => None,
        }
    }
}
