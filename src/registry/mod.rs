//! Registry of resource declarations
//!
//! Every domain type taking part in the resource model is registered once at
//! startup with its declaration, its superclass (if it inherits from another
//! domain type) and the fields the resolver needs to look at. The registry is
//! immutable once built.

use crate::core::{
    DeclarationError, FieldDeclaration, ResourceDeclaration, ResourceType, Result,
};
use std::collections::{HashMap, HashSet};

/// Trait for domain types that describe their own registration
///
/// ```rust,ignore
/// impl Resource for Comment {
///     fn registration() -> TypeRegistration {
///         TypeRegistration::of::<Self>()
///             .declare(ResourceDeclaration::nested::<u64>("post"))
///             .field(FieldDeclaration::single::<Post>("post")
///                 .with_relationship(Relationship::ManyToOne))
///     }
/// }
/// ```
pub trait Resource: 'static {
    fn registration() -> TypeRegistration;
}

/// Everything the registry knows about one domain type
#[derive(Debug, Clone)]
pub struct TypeRegistration {
    pub resource_type: ResourceType,
    pub declaration: Option<ResourceDeclaration>,
    pub superclass: Option<ResourceType>,
    pub fields: Vec<FieldDeclaration>,
}

impl TypeRegistration {
    /// Start a registration for `T` with no declaration
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            resource_type: ResourceType::of::<T>(),
            declaration: None,
            superclass: None,
            fields: Vec::new(),
        }
    }

    /// Attach a resource declaration
    pub fn declare(mut self, declaration: ResourceDeclaration) -> Self {
        self.declaration = Some(declaration);
        self
    }

    /// Inherit declarations and fields from `S`
    pub fn extends<S: ?Sized + 'static>(mut self) -> Self {
        self.superclass = Some(ResourceType::of::<S>());
        self
    }

    /// Add a field declaration
    pub fn field(mut self, field: FieldDeclaration) -> Self {
        self.fields.push(field);
        self
    }

    /// Find a field declared directly on this type
    pub fn own_field(&self, name: &str) -> Option<&FieldDeclaration> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Builder collecting registrations before the ancestor lists are computed
#[derive(Debug, Default)]
pub struct ResourceRegistryBuilder {
    registrations: HashMap<ResourceType, TypeRegistration>,
}

impl ResourceRegistryBuilder {
    /// Register a type
    ///
    /// Registering the same type twice replaces the earlier registration.
    pub fn register(mut self, registration: TypeRegistration) -> Self {
        let resource_type = registration.resource_type;
        if self
            .registrations
            .insert(resource_type, registration)
            .is_some()
        {
            tracing::debug!(resource_type = %resource_type, "Replaced resource registration");
        }
        self
    }

    /// Register a type through its [`Resource`] implementation
    pub fn register_resource<T: Resource>(self) -> Self {
        self.register(T::registration())
    }

    /// Build the registry
    ///
    /// Fails with [`DeclarationError::InheritanceCycle`] when a superclass
    /// chain loops back on itself.
    pub fn build(self) -> Result<ResourceRegistry> {
        let mut ancestors = HashMap::with_capacity(self.registrations.len());

        for resource_type in self.registrations.keys() {
            let chain = ancestor_chain(&self.registrations, *resource_type)?;
            ancestors.insert(*resource_type, chain);
        }

        tracing::debug!(types = self.registrations.len(), "Built resource registry");

        Ok(ResourceRegistry {
            types: self.registrations,
            ancestors,
        })
    }
}

/// Walk the superclass chain of `start`, nearest ancestor first
fn ancestor_chain(
    registrations: &HashMap<ResourceType, TypeRegistration>,
    start: ResourceType,
) -> Result<Vec<ResourceType>> {
    let mut chain = Vec::new();
    let mut seen = HashSet::from([start]);
    let mut current = registrations.get(&start).and_then(|r| r.superclass);

    while let Some(ancestor) = current {
        if !seen.insert(ancestor) {
            return Err(DeclarationError::InheritanceCycle { domain_type: start }.into());
        }
        chain.push(ancestor);
        current = registrations.get(&ancestor).and_then(|r| r.superclass);
    }

    Ok(chain)
}

/// Immutable registry of all domain types and their declarations
#[derive(Debug)]
pub struct ResourceRegistry {
    types: HashMap<ResourceType, TypeRegistration>,
    ancestors: HashMap<ResourceType, Vec<ResourceType>>,
}

impl ResourceRegistry {
    pub fn builder() -> ResourceRegistryBuilder {
        ResourceRegistryBuilder::default()
    }

    /// Get the registration of a type
    pub fn get(&self, resource_type: ResourceType) -> Option<&TypeRegistration> {
        self.types.get(&resource_type)
    }

    /// Get the declaration attached directly to a type
    pub fn declaration(&self, resource_type: ResourceType) -> Option<&ResourceDeclaration> {
        self.get(resource_type).and_then(|r| r.declaration.as_ref())
    }

    /// Get the direct superclass of a type
    pub fn superclass(&self, resource_type: ResourceType) -> Option<ResourceType> {
        self.get(resource_type).and_then(|r| r.superclass)
    }

    /// Superclass chain of a type, nearest first
    pub fn ancestors(&self, resource_type: ResourceType) -> &[ResourceType] {
        self.ancestors
            .get(&resource_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Find a field on a type or, failing that, on its ancestors
    pub fn find_field(&self, resource_type: ResourceType, name: &str) -> Option<&FieldDeclaration> {
        std::iter::once(&resource_type)
            .chain(self.ancestors(resource_type))
            .filter_map(|ty| self.get(*ty))
            .find_map(|registration| registration.own_field(name))
    }

    /// All registered types, sorted by type name
    pub fn resource_types(&self) -> Vec<ResourceType> {
        let mut types: Vec<_> = self.types.keys().copied().collect();
        types.sort_by_key(|ty| ty.type_name());
        types
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
