//! Assembly of linked representations from domain entities
//!
//! - [`NestedResourceAssembler`]: entities living under a parent resource
//! - [`ResourceAssembler`]: top-level entities
//! - [`PathEntityLinks`]: canonical links derived from resolved paths

pub mod links;
pub mod nested;
pub mod resource;

pub use links::PathEntityLinks;
pub use nested::{NestedAssemblerHooks, NestedResourceAssembler, NoExtraLinks};
pub use resource::ResourceAssembler;

use crate::core::{LinkedRepresentation, Result};

/// Converts a single entity into its linked representation
pub trait RepresentationAssembler<T> {
    /// Convert one entity
    fn to_representation(&self, entity: T) -> Result<LinkedRepresentation<T>>;

    /// Convert a sequence of entities, preserving their order
    fn to_representations<I>(&self, entities: I) -> Result<Vec<LinkedRepresentation<T>>>
    where
        I: IntoIterator<Item = T>,
        Self: Sized,
    {
        entities
            .into_iter()
            .map(|entity| self.to_representation(entity))
            .collect()
    }
}
