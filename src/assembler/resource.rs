//! Assembler for top-level resources

use super::RepresentationAssembler;
use crate::core::{EntityLinks, Identifiable, Link, LinkedRepresentation, Result};
use std::marker::PhantomData;
use std::sync::Arc;

type ExtraLinks<T> = Box<dyn Fn(&mut Vec<Link>, &T) + Send + Sync>;

/// Builds linked representations of top-level entities
///
/// The self link comes straight from the [`EntityLinks`] collaborator.
pub struct ResourceAssembler<T> {
    links: Arc<dyn EntityLinks>,
    extra_links: Option<ExtraLinks<T>>,
    _type: PhantomData<fn(T)>,
}

impl<T: Identifiable> ResourceAssembler<T> {
    pub fn new(links: Arc<dyn EntityLinks>) -> Self {
        Self {
            links,
            extra_links: None,
            _type: PhantomData,
        }
    }

    /// Append additional links after the self link
    pub fn with_extra_links<F>(mut self, extra_links: F) -> Self
    where
        F: Fn(&mut Vec<Link>, &T) + Send + Sync + 'static,
    {
        self.extra_links = Some(Box::new(extra_links));
        self
    }
}

impl<T: Identifiable> RepresentationAssembler<T> for ResourceAssembler<T> {
    fn to_representation(&self, entity: T) -> Result<LinkedRepresentation<T>> {
        let self_link = self
            .links
            .link_for_single_resource(entity.resource_type(), &entity.id().to_string())?;

        let mut links = vec![self_link];
        if let Some(extra_links) = &self.extra_links {
            extra_links(&mut links, &entity);
        }

        Ok(LinkedRepresentation::new(entity, links))
    }
}
