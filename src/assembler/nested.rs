//! Assembler for resources nested under a parent resource

use super::RepresentationAssembler;
use crate::core::{
    DeclarationError, EntityLinks, Identifiable, Link, LinkedRepresentation, PreconditionError,
    ResourceType, Result,
};
use crate::resolver::{ResourceDescriptor, ResourceResolver};
use std::marker::PhantomData;
use std::sync::Arc;

/// Extension points of a [`NestedResourceAssembler`]
///
/// Both methods have defaults, so an implementation only overrides what it
/// needs.
pub trait NestedAssemblerHooks<T, P>: Send + Sync {
    /// Append links after the self link has been added
    fn add_links(&self, _links: &mut Vec<Link>, _entity: &T, _parent: &P) -> Result<()> {
        Ok(())
    }

    /// Pre-process an entity before it is converted (e.g., load lazy fields)
    fn prepare(&self, entity: T) -> T {
        entity
    }
}

/// Hooks adding nothing beyond the self link
#[derive(Debug, Clone, Copy, Default)]
pub struct NoExtraLinks;

impl<T, P> NestedAssemblerHooks<T, P> for NoExtraLinks {}

/// Builds linked representations of entities `T` living under a parent `P`
///
/// The self link of an entity is
/// `{link of parent}/{last segment of the entity's path}/{entity id}`.
///
/// # Example
///
/// ```rust,ignore
/// let assembler: NestedResourceAssembler<Comment, Post> =
///     NestedResourceAssembler::new(resolver.clone(), links.clone());
///
/// let reps = assembler.convert_all(comments, &post)?;
/// // reps[0].self_link() == "http://api/posts/1/comments/10"
/// ```
pub struct NestedResourceAssembler<T, P, H = NoExtraLinks> {
    resolver: Arc<ResourceResolver>,
    links: Arc<dyn EntityLinks>,
    hooks: H,
    _types: PhantomData<fn(T, &P)>,
}

impl<T, P> NestedResourceAssembler<T, P, NoExtraLinks>
where
    T: Identifiable,
    P: Identifiable,
{
    pub fn new(resolver: Arc<ResourceResolver>, links: Arc<dyn EntityLinks>) -> Self {
        Self::with_hooks(resolver, links, NoExtraLinks)
    }
}

impl<T, P, H> NestedResourceAssembler<T, P, H>
where
    T: Identifiable,
    P: Identifiable,
    H: NestedAssemblerHooks<T, P>,
{
    pub fn with_hooks(
        resolver: Arc<ResourceResolver>,
        links: Arc<dyn EntityLinks>,
        hooks: H,
    ) -> Self {
        Self {
            resolver,
            links,
            hooks,
            _types: PhantomData,
        }
    }

    /// The entity type this assembler converts
    pub fn entity_type(&self) -> ResourceType {
        ResourceType::of::<T>()
    }

    /// The parent type entities are nested under
    pub fn parent_type(&self) -> ResourceType {
        ResourceType::of::<P>()
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Descriptor of the entity type `T`
    pub fn descriptor(&self) -> Result<Arc<ResourceDescriptor>> {
        let entity_type = self.entity_type();
        self.resolver
            .resolve(entity_type)?
            .ok_or_else(|| DeclarationError::NotAResource { domain_type: entity_type }.into())
    }

    /// Pre-process an entity through the `prepare` hook
    pub fn prepare(&self, entity: T) -> T {
        self.hooks.prepare(entity)
    }

    /// Convert one entity in the context of its parent
    pub fn convert(&self, entity: T, parent: &P) -> Result<LinkedRepresentation<T>> {
        let mut links = Vec::new();
        self.add_self_link(&mut links, &entity, parent)?;
        self.hooks.add_links(&mut links, &entity, parent)?;
        Ok(LinkedRepresentation::new(entity, links))
    }

    /// Convert a sequence of entities sharing the same parent
    ///
    /// Fails with [`PreconditionError::MissingEntities`] when `entities` is
    /// `None`. Representations are returned in iteration order.
    pub fn convert_many<I>(
        &self,
        entities: Option<I>,
        parent: &P,
    ) -> Result<Vec<LinkedRepresentation<T>>>
    where
        I: IntoIterator<Item = T>,
    {
        let entities = entities.ok_or(PreconditionError::MissingEntities)?;
        let representations = entities
            .into_iter()
            .map(|entity| self.convert(entity, parent))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            entity_type = %self.entity_type(),
            count = representations.len(),
            "Assembled nested representations"
        );

        Ok(representations)
    }

    /// Convert a sequence of entities sharing the same parent
    pub fn convert_all<I>(&self, entities: I, parent: &P) -> Result<Vec<LinkedRepresentation<T>>>
    where
        I: IntoIterator<Item = T>,
    {
        self.convert_many(Some(entities), parent)
    }

    fn add_self_link(&self, links: &mut Vec<Link>, entity: &T, parent: &P) -> Result<()> {
        let resource_type = entity.resource_type();
        let descriptor = self
            .resolver
            .resolve(resource_type)?
            .ok_or(DeclarationError::NotAResource {
                domain_type: resource_type,
            })?;

        let parent_link = self
            .links
            .link_for_single_resource(parent.resource_type(), &parent.id().to_string())?;
        let href = format!(
            "{}/{}/{}",
            parent_link.href,
            descriptor.last_path_segment(),
            entity.id()
        );

        tracing::trace!(entity_type = %resource_type, href = %href, "Built nested self link");
        links.push(Link::self_link(href));
        Ok(())
    }
}

impl<T, P, H> RepresentationAssembler<T> for NestedResourceAssembler<T, P, H>
where
    T: Identifiable,
    P: Identifiable,
    H: NestedAssemblerHooks<T, P>,
{
    /// Always fails: a nested entity has no identity without its parent
    fn to_representation(&self, _entity: T) -> Result<LinkedRepresentation<T>> {
        Err(PreconditionError::UnsupportedOperation {
            operation: "to_representation".to_string(),
            reason: format!(
                "{} is nested under {}; convert it with its parent",
                self.entity_type(),
                self.parent_type()
            ),
        }
        .into())
    }
}
