//! Entity identity abstraction

use crate::core::resource_type::ResourceType;
use std::fmt::Display;

/// An entity with identity that can be exposed as a resource.
///
/// The identifier is rendered with [`Display`] when building links.
/// `resource_type` reports the concrete type whose declaration applies to
/// this instance; override it when one Rust type stands in for several
/// resource types (e.g., an enum over entity kinds).
pub trait Identifiable: Send + Sync + 'static {
    /// Identifier type (e.g., `Uuid`, `u64`)
    type Id: Display;

    /// Get the identifier of this entity instance
    fn id(&self) -> Self::Id;

    /// Concrete resource type of this instance
    fn resource_type(&self) -> ResourceType {
        ResourceType::of::<Self>()
    }
}
