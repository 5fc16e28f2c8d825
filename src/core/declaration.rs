//! Static resource declarations attached to domain types

use crate::core::resource_type::ResourceType;

/// Whether a type is mounted at the root or under a parent resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclarationKind {
    /// Mounted at `/{name}`
    TopLevel,
    /// Mounted at `/{parent}/{parentId}/{name}`
    Nested {
        /// Field on the domain type referencing the parent entity
        parent_property: String,
    },
}

/// Resource metadata declared for a domain type
///
/// # Example
///
/// ```rust
/// use tiered::core::ResourceDeclaration;
///
/// let posts = ResourceDeclaration::top_level::<u64>();
/// let comments = ResourceDeclaration::nested::<u64>("post").with_path("replies");
///
/// assert!(!posts.is_nested());
/// assert_eq!(comments.parent_property(), Some("post"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDeclaration {
    pub kind: DeclarationKind,
    pub id_type: ResourceType,
    /// Wire representation type, when it differs from the domain type
    pub representation_type: Option<ResourceType>,
    /// Explicit path segment; blank means "derive from the type name"
    pub path: Option<String>,
}

impl ResourceDeclaration {
    /// Declare a top-level resource identified by `Id`
    pub fn top_level<Id: ?Sized + 'static>() -> Self {
        Self {
            kind: DeclarationKind::TopLevel,
            id_type: ResourceType::of::<Id>(),
            representation_type: None,
            path: None,
        }
    }

    /// Declare a resource nested under the entity referenced by `parent_property`
    pub fn nested<Id: ?Sized + 'static>(parent_property: impl Into<String>) -> Self {
        Self {
            kind: DeclarationKind::Nested {
                parent_property: parent_property.into(),
            },
            id_type: ResourceType::of::<Id>(),
            representation_type: None,
            path: None,
        }
    }

    /// Override the derived path segment
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Override the wire representation type
    pub fn with_representation<R: ?Sized + 'static>(mut self) -> Self {
        self.representation_type = Some(ResourceType::of::<R>());
        self
    }

    pub fn is_nested(&self) -> bool {
        matches!(self.kind, DeclarationKind::Nested { .. })
    }

    pub fn parent_property(&self) -> Option<&str> {
        match &self.kind {
            DeclarationKind::Nested { parent_property } => Some(parent_property.as_str()),
            DeclarationKind::TopLevel => None,
        }
    }

    /// Explicit path, ignoring blank values
    pub fn explicit_path(&self) -> Option<&str> {
        self.path.as_deref().filter(|p| !p.trim().is_empty())
    }
}
