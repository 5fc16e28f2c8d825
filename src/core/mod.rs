//! Core module containing fundamental types and traits of the crate

pub mod declaration;
pub mod entity;
pub mod error;
pub mod field;
pub mod link;
pub mod naming;
pub mod provider;
pub mod relationship;
pub mod resource_type;

pub use declaration::{DeclarationKind, ResourceDeclaration};
pub use entity::Identifiable;
pub use error::{DeclarationError, ErrorResponse, PreconditionError, ResourceError, Result};
pub use field::{FieldDeclaration, FieldShape};
pub use link::{Link, LinkedRepresentation, REL_SELF};
pub use naming::NamingStrategy;
pub use provider::{
    CollectionElementResolver, DeclaredElementTypes, DeclaredRelationships, EntityLinks,
    RelationshipMetadata,
};
pub use relationship::{Cardinality, Relationship};
pub use resource_type::ResourceType;
