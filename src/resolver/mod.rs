//! Resource metadata resolution
//!
//! Turns the static declarations held by the [`ResourceRegistry`] into
//! [`ResourceDescriptor`]s: resource name, mount path, identifier type,
//! parent type and parent→child cardinality.

pub mod descriptor;

pub use descriptor::ResourceDescriptor;

use crate::config::ResolverConfig;
use crate::core::{
    Cardinality, CollectionElementResolver, DeclarationError, DeclarationKind,
    DeclaredElementTypes, DeclaredRelationships, FieldDeclaration, PreconditionError,
    RelationshipMetadata, ResourceError, ResourceType, Result,
};
use crate::registry::ResourceRegistry;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Resolves and memoizes resource descriptors
///
/// Resolution is pure: it only depends on the registry and the configuration,
/// so results (including negative ones) are cached per type. The resolver is
/// safe to share between threads.
///
/// # Example
///
/// ```rust,ignore
/// let resolver = ResourceResolver::new(Arc::new(registry));
///
/// let comments = resolver.resolve_type::<Comment>()?.expect("Comment is a resource");
/// assert_eq!(comments.path(), "/posts/{parentId}/comments");
/// assert!(resolver.is_nested_collection(&comments)?);
/// ```
pub struct ResourceResolver {
    registry: Arc<ResourceRegistry>,
    config: ResolverConfig,
    relationships: Arc<dyn RelationshipMetadata>,
    collections: Arc<dyn CollectionElementResolver>,
    cache: RwLock<HashMap<ResourceType, Option<Arc<ResourceDescriptor>>>>,
}

impl ResourceResolver {
    /// Create a resolver with the default configuration
    ///
    /// Relationship kinds and collection element types are read from the
    /// registered field declarations.
    pub fn new(registry: Arc<ResourceRegistry>) -> Self {
        Self {
            registry,
            config: ResolverConfig::default(),
            relationships: Arc::new(DeclaredRelationships),
            collections: Arc::new(DeclaredElementTypes),
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self.clear_cache();
        self
    }

    /// Use another source of relationship facts (e.g., the ORM's own metadata)
    pub fn with_relationship_metadata(
        mut self,
        relationships: Arc<dyn RelationshipMetadata>,
    ) -> Self {
        self.relationships = relationships;
        self
    }

    /// Use another source of collection element types
    pub fn with_collection_resolver(
        mut self,
        collections: Arc<dyn CollectionElementResolver>,
    ) -> Self {
        self.collections = collections;
        self.clear_cache();
        self
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve the descriptor of a type
    ///
    /// Returns `Ok(None)` when neither the type nor any of its ancestors
    /// declares a resource. Types with no declaration inherit the descriptor
    /// of their nearest declaring ancestor.
    pub fn resolve(&self, resource_type: ResourceType) -> Result<Option<Arc<ResourceDescriptor>>> {
        {
            let cache = self.cache.read().map_err(|e| {
                ResourceError::Internal(format!("Failed to acquire read lock: {}", e))
            })?;
            if let Some(cached) = cache.get(&resource_type) {
                tracing::trace!(resource_type = %resource_type, "Descriptor cache hit");
                return Ok(cached.clone());
            }
        }

        let descriptor = self.compute(resource_type)?;

        let mut cache = self
            .cache
            .write()
            .map_err(|e| ResourceError::Internal(format!("Failed to acquire write lock: {}", e)))?;
        // First stored descriptor wins
        let cached = cache.entry(resource_type).or_insert(descriptor);

        Ok(cached.clone())
    }

    /// Resolve the descriptor of `T`
    pub fn resolve_type<T: ?Sized + 'static>(&self) -> Result<Option<Arc<ResourceDescriptor>>> {
        self.resolve(ResourceType::of::<T>())
    }

    /// Resolve the descriptor of the type held by a field
    ///
    /// Collection fields resolve their element type.
    pub fn resolve_from_field(
        &self,
        field: &FieldDeclaration,
    ) -> Result<Option<Arc<ResourceDescriptor>>> {
        if field.is_collection() {
            let element = self.collections.element_type(field).ok_or_else(|| {
                DeclarationError::UnresolvedCollectionElement {
                    field: field.name.clone(),
                }
            })?;
            return self.resolve(element);
        }

        self.resolve(field.declared_type())
    }

    /// Resolve the descriptor of the type held by the field `name` of `owner`
    pub fn resolve_field(
        &self,
        owner: ResourceType,
        name: &str,
    ) -> Result<Option<Arc<ResourceDescriptor>>> {
        let field = self
            .registry
            .find_field(owner, name)
            .ok_or_else(|| DeclarationError::MissingField {
                domain_type: owner,
                field: name.to_string(),
            })?;

        self.resolve_from_field(field)
    }

    /// Identifier type of the parent of a nested resource
    pub fn parent_id_type(&self, descriptor: &ResourceDescriptor) -> Result<ResourceType> {
        let parent_type = descriptor
            .parent_type()
            .ok_or(PreconditionError::NotNested {
                domain_type: descriptor.domain_type(),
            })?;

        let parent = self
            .resolve(parent_type)?
            .ok_or(DeclarationError::NotAResource {
                domain_type: parent_type,
            })?;

        Ok(parent.id_type())
    }

    /// Resource name segment of a type
    ///
    /// Uses the declared path when it is not blank, otherwise derives the
    /// name from the type name. Only the type's own declaration is
    /// considered.
    pub fn path_name(&self, resource_type: ResourceType) -> Result<String> {
        let declaration = self
            .registry
            .declaration(resource_type)
            .ok_or(DeclarationError::Undeclared {
                domain_type: resource_type,
            })?;

        Ok(match declaration.explicit_path() {
            Some(path) => path.to_string(),
            None => self.config.naming.resource_name(resource_type.simple_name()),
        })
    }

    /// Cardinality of the parent→child relationship of a nested resource
    ///
    /// Returns `Ok(None)` for top-level resources.
    pub fn cardinality(&self, descriptor: &ResourceDescriptor) -> Result<Option<Cardinality>> {
        let Some(property) = descriptor.parent_property() else {
            return Ok(None);
        };

        let domain_type = descriptor.domain_type();
        let field = self.registry.find_field(domain_type, property).ok_or_else(|| {
            DeclarationError::MissingParentProperty {
                domain_type,
                property: property.to_string(),
            }
        })?;

        let relationship = self.relationships.relationship(domain_type, field);
        match relationship.as_ref().and_then(|r| r.cardinality()) {
            Some(cardinality) => Ok(Some(cardinality)),
            None => Err(DeclarationError::UnknownRelationship {
                domain_type,
                property: property.to_string(),
                relationship: relationship.map(|r| r.to_string()),
            }
            .into()),
        }
    }

    /// Whether a parent owns a collection of this nested resource
    ///
    /// Always `false` for top-level resources.
    pub fn is_nested_collection(&self, descriptor: &ResourceDescriptor) -> Result<bool> {
        Ok(self.cardinality(descriptor)? == Some(Cardinality::Many))
    }

    /// Resolve every registered type and check the nested ones
    ///
    /// Meant to run once at startup so malformed declarations fail before
    /// the first request does.
    pub fn validate(&self) -> Result<()> {
        for resource_type in self.registry.resource_types() {
            let Some(descriptor) = self.resolve(resource_type)? else {
                continue;
            };
            if descriptor.is_nested() {
                self.cardinality(&descriptor)?;
                self.parent_id_type(&descriptor)?;
            }
        }
        Ok(())
    }

    /// Drop all memoized descriptors
    pub fn clear_cache(&self) {
        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn compute(&self, resource_type: ResourceType) -> Result<Option<Arc<ResourceDescriptor>>> {
        let Some(declaration) = self.registry.declaration(resource_type) else {
            return match self.registry.superclass(resource_type) {
                Some(superclass) => self.resolve(superclass),
                None => {
                    tracing::trace!(resource_type = %resource_type, "Not a resource");
                    Ok(None)
                }
            };
        };

        let name = self.path_name(resource_type)?;

        let descriptor = match &declaration.kind {
            DeclarationKind::TopLevel => ResourceDescriptor::top_level(
                name,
                resource_type,
                declaration.id_type,
                declaration.representation_type,
            ),
            DeclarationKind::Nested { parent_property } => {
                let field = self
                    .registry
                    .find_field(resource_type, parent_property)
                    .ok_or_else(|| DeclarationError::MissingParentProperty {
                        domain_type: resource_type,
                        property: parent_property.clone(),
                    })?;
                let parent_type = field.declared_type();
                let path = format!(
                    "/{}/{}/{}",
                    self.path_name(parent_type)?,
                    self.config.parent_id_token,
                    name
                );

                ResourceDescriptor::nested(
                    name,
                    path,
                    resource_type,
                    declaration.id_type,
                    declaration.representation_type,
                    parent_type,
                    parent_property.clone(),
                )
            }
        };

        tracing::debug!(
            resource_type = %resource_type,
            path = %descriptor.path(),
            "Resolved resource descriptor"
        );

        Ok(Some(Arc::new(descriptor)))
    }
}
