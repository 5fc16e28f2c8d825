//! # Tiered
//!
//! Resource metadata for nested REST hierarchies.
//!
//! Domain types declare whether they are exposed as top-level resources or
//! as resources nested under a parent. From those declarations the crate
//! derives mount paths, identifier types, parent types and parent→child
//! cardinality, and builds linked (self-link bearing) representations of
//! entity instances.
//!
//! ## Features
//!
//! - **Static Declarations**: Types register their declaration once in a
//!   [`ResourceRegistry`](registry::ResourceRegistry), no reflection needed
//! - **Declaration Inheritance**: Undeclared types inherit the descriptor of
//!   their nearest declaring ancestor
//! - **Nested Paths**: `/posts/{parentId}/comments` derived from the parent field
//! - **Cardinality**: One-to-one vs. collection children from the relationship mapping
//! - **Linked Representations**: Self links relative to the parent resource
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use tiered::prelude::*;
//!
//! struct Post { id: u64 }
//! struct Comment { id: u64 }
//!
//! impl_identifiable!(Post, u64);
//! impl_identifiable!(Comment, u64);
//!
//! impl_resource!(Post, ResourceDeclaration::top_level::<u64>());
//! impl_resource!(
//!     Comment,
//!     ResourceDeclaration::nested::<u64>("post"),
//!     fields [FieldDeclaration::single::<Post>("post").with_relationship(Relationship::ManyToOne)]
//! );
//!
//! let registry = ResourceRegistry::builder()
//!     .register_resource::<Post>()
//!     .register_resource::<Comment>()
//!     .build()?;
//! let resolver = Arc::new(ResourceResolver::new(Arc::new(registry)));
//!
//! let comments = resolver.resolve_type::<Comment>()?.unwrap();
//! assert_eq!(comments.path(), "/posts/{parentId}/comments");
//!
//! let links = Arc::new(PathEntityLinks::new("http://localhost:3000", resolver.clone()));
//! let assembler = NestedResourceAssembler::<Comment, Post>::new(resolver, links);
//! let rep = assembler.convert(Comment { id: 2 }, &Post { id: 1 })?;
//! // rep.self_link() == "http://localhost:3000/posts/1/comments/2"
//! ```

pub mod assembler;
pub mod config;
pub mod core;
pub mod entities;
pub mod registry;
pub mod resolver;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        Cardinality, CollectionElementResolver, DeclarationError, DeclarationKind, EntityLinks,
        FieldDeclaration, FieldShape, Identifiable, Link, LinkedRepresentation, NamingStrategy,
        PreconditionError, Relationship, RelationshipMetadata, ResourceDeclaration,
        ResourceError, ResourceType,
    };

    // === Macros ===
    pub use crate::{impl_identifiable, impl_resource};

    // === Registry & Resolution ===
    pub use crate::registry::{Resource, ResourceRegistry, TypeRegistration};
    pub use crate::resolver::{ResourceDescriptor, ResourceResolver};

    // === Assembly ===
    pub use crate::assembler::{
        NestedAssemblerHooks, NestedResourceAssembler, NoExtraLinks, PathEntityLinks,
        RepresentationAssembler, ResourceAssembler,
    };

    // === Config ===
    pub use crate::config::ResolverConfig;

    // === External dependencies ===
    pub use std::sync::Arc;
}
