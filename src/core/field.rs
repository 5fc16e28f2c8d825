//! Field declarations: the static facts the resolver needs about a field
//!
//! These stand in for what reflection would report about a struct member:
//! its name, its declared type (or collection element type) and the
//! relationship mapping attached by the persistence layer.

use crate::core::relationship::Relationship;
use crate::core::resource_type::ResourceType;

/// Declared shape of a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldShape {
    /// A field holding a single value of the given type
    Single(ResourceType),

    /// A collection field
    ///
    /// `element` is `None` when the element type is not known statically
    /// (e.g., a raw or type-erased collection).
    Collection {
        collection: ResourceType,
        element: Option<ResourceType>,
    },
}

/// A field on a domain type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDeclaration {
    pub name: String,
    pub shape: FieldShape,
    pub relationship: Option<Relationship>,
}

impl FieldDeclaration {
    /// A field holding a single `T`
    pub fn single<T: ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape: FieldShape::Single(ResourceType::of::<T>()),
            relationship: None,
        }
    }

    /// A `Vec<T>` field
    pub fn collection<T: 'static>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape: FieldShape::Collection {
                collection: ResourceType::of::<Vec<T>>(),
                element: Some(ResourceType::of::<T>()),
            },
            relationship: None,
        }
    }

    /// A collection field of type `C` whose element type is unknown
    pub fn untyped_collection<C: ?Sized + 'static>(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shape: FieldShape::Collection {
                collection: ResourceType::of::<C>(),
                element: None,
            },
            relationship: None,
        }
    }

    /// Attach the relationship mapping of this field
    pub fn with_relationship(mut self, relationship: Relationship) -> Self {
        self.relationship = Some(relationship);
        self
    }

    /// The declared type of the field (the collection type for collections)
    pub fn declared_type(&self) -> ResourceType {
        match &self.shape {
            FieldShape::Single(ty) => *ty,
            FieldShape::Collection { collection, .. } => *collection,
        }
    }

    pub fn is_collection(&self) -> bool {
        matches!(self.shape, FieldShape::Collection { .. })
    }
}
