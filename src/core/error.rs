//! Typed error handling for resource metadata and assembly
//!
//! # Error Categories
//!
//! - [`PreconditionError`]: an operation was called in a state where it is
//!   not defined (parent id type of a top-level resource, single-argument
//!   conversion on a nested assembler, ...)
//! - [`DeclarationError`]: the registered declarations are malformed
//!   (missing parent field, unknown relationship mapping, ...)
//!
//! A type that simply is not a resource is not an error: resolution returns
//! `Ok(None)` for it.
//!
//! # Example
//!
//! ```rust,ignore
//! match resolver.parent_id_type(&descriptor) {
//!     Ok(id_type) => println!("parent id: {}", id_type),
//!     Err(ResourceError::Precondition(PreconditionError::NotNested { .. })) => {
//!         println!("top-level resource");
//!     }
//!     Err(e) => return Err(e),
//! }
//! ```

use crate::core::resource_type::ResourceType;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// Result type used throughout the crate
pub type Result<T, E = ResourceError> = std::result::Result<T, E>;

/// The main error type of the crate
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceError {
    /// An operation was called outside of its domain
    Precondition(PreconditionError),

    /// The declarations of the domain model are malformed
    Declaration(DeclarationError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::Precondition(e) => write!(f, "{}", e),
            ResourceError::Declaration(e) => write!(f, "{}", e),
            ResourceError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ResourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResourceError::Precondition(e) => Some(e),
            ResourceError::Declaration(e) => Some(e),
            ResourceError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ResourceError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ResourceError::Precondition(e) => e.status_code(),
            ResourceError::Declaration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ResourceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ResourceError::Precondition(e) => e.error_code(),
            ResourceError::Declaration(e) => e.error_code(),
            ResourceError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }

    /// Check whether this error comes from a malformed declaration
    pub fn is_declaration_error(&self) -> bool {
        matches!(self, ResourceError::Declaration(_))
    }

    /// Check whether this error comes from a violated precondition
    pub fn is_precondition_error(&self) -> bool {
        matches!(self, ResourceError::Precondition(_))
    }
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Precondition Errors
// =============================================================================

/// An operation was invoked where it is not defined
#[derive(Debug, Clone, PartialEq)]
pub enum PreconditionError {
    /// Parent information was requested on a top-level resource
    NotNested { domain_type: ResourceType },

    /// A batch conversion was called without an entity sequence
    MissingEntities,

    /// The operation is not supported by this component
    UnsupportedOperation { operation: String, reason: String },

    /// A link to a nested resource cannot be built without its parent
    NestedLinkWithoutParent { domain_type: ResourceType },
}

impl fmt::Display for PreconditionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PreconditionError::NotNested { domain_type } => {
                write!(f, "No parent class found: {} is not nested", domain_type)
            }
            PreconditionError::MissingEntities => {
                write!(f, "Entities must not be absent")
            }
            PreconditionError::UnsupportedOperation { operation, reason } => {
                write!(f, "Unsupported operation '{}': {}", operation, reason)
            }
            PreconditionError::NestedLinkWithoutParent { domain_type } => {
                write!(
                    f,
                    "Cannot link to nested resource {} without its parent",
                    domain_type
                )
            }
        }
    }
}

impl std::error::Error for PreconditionError {}

impl PreconditionError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PreconditionError::NotNested { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            PreconditionError::MissingEntities => StatusCode::BAD_REQUEST,
            PreconditionError::UnsupportedOperation { .. } => StatusCode::METHOD_NOT_ALLOWED,
            PreconditionError::NestedLinkWithoutParent { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            PreconditionError::NotNested { .. } => "NOT_NESTED",
            PreconditionError::MissingEntities => "MISSING_ENTITIES",
            PreconditionError::UnsupportedOperation { .. } => "UNSUPPORTED_OPERATION",
            PreconditionError::NestedLinkWithoutParent { .. } => "NESTED_LINK_WITHOUT_PARENT",
        }
    }
}

impl From<PreconditionError> for ResourceError {
    fn from(err: PreconditionError) -> Self {
        ResourceError::Precondition(err)
    }
}

// =============================================================================
// Declaration Errors
// =============================================================================

/// The registered declarations are inconsistent
#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationError {
    /// A nested declaration names a parent field that does not exist
    MissingParentProperty {
        domain_type: ResourceType,
        property: String,
    },

    /// A field looked up by name does not exist
    MissingField {
        domain_type: ResourceType,
        field: String,
    },

    /// A path was requested for a type without any declaration
    Undeclared { domain_type: ResourceType },

    /// A type expected to be a resource is not one
    NotAResource { domain_type: ResourceType },

    /// The parent field's relationship mapping is missing or not recognized
    UnknownRelationship {
        domain_type: ResourceType,
        property: String,
        relationship: Option<String>,
    },

    /// The element type of a collection field could not be determined
    UnresolvedCollectionElement { field: String },

    /// The declared superclass chain loops back on itself
    InheritanceCycle { domain_type: ResourceType },
}

impl fmt::Display for DeclarationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationError::MissingParentProperty {
                domain_type,
                property,
            } => {
                write!(
                    f,
                    "Parent property '{}' not found on {}",
                    property, domain_type
                )
            }
            DeclarationError::MissingField { domain_type, field } => {
                write!(f, "Field '{}' not found on {}", field, domain_type)
            }
            DeclarationError::Undeclared { domain_type } => {
                write!(f, "Not an entity: {} has no resource declaration", domain_type)
            }
            DeclarationError::NotAResource { domain_type } => {
                write!(f, "{} is not a resource", domain_type)
            }
            DeclarationError::UnknownRelationship {
                domain_type,
                property,
                relationship,
            } => match relationship {
                Some(kind) => write!(
                    f,
                    "No known mapping found for {}.{}: '{}'",
                    domain_type, property, kind
                ),
                None => write!(
                    f,
                    "No known mapping found for {}.{}: no relationship declared",
                    domain_type, property
                ),
            },
            DeclarationError::UnresolvedCollectionElement { field } => {
                write!(
                    f,
                    "Cannot determine the element type of collection field '{}'",
                    field
                )
            }
            DeclarationError::InheritanceCycle { domain_type } => {
                write!(f, "Inheritance cycle detected at {}", domain_type)
            }
        }
    }
}

impl std::error::Error for DeclarationError {}

impl DeclarationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            DeclarationError::MissingParentProperty { .. } => "MISSING_PARENT_PROPERTY",
            DeclarationError::MissingField { .. } => "MISSING_FIELD",
            DeclarationError::Undeclared { .. } => "UNDECLARED_RESOURCE",
            DeclarationError::NotAResource { .. } => "NOT_A_RESOURCE",
            DeclarationError::UnknownRelationship { .. } => "UNKNOWN_RELATIONSHIP",
            DeclarationError::UnresolvedCollectionElement { .. } => {
                "UNRESOLVED_COLLECTION_ELEMENT"
            }
            DeclarationError::InheritanceCycle { .. } => "INHERITANCE_CYCLE",
        }
    }
}

impl From<DeclarationError> for ResourceError {
    fn from(err: DeclarationError) -> Self {
        ResourceError::Declaration(err)
    }
}
