//! Relationship kinds reported by the persistence layer for a field

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many children a parent owns for a nested resource type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// The parent owns exactly one child
    Single,
    /// The parent owns a collection of children
    Many,
}

/// Mapping kind of a field pointing at another entity
///
/// Mirrors the relationship annotations an ORM attaches to a field.
/// `Other` carries mapping kinds this crate does not interpret.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    OneToOne,
    ManyToOne,
    ManyToMany,
    ManyToAny,
    Other(String),
}

impl Relationship {
    /// Cardinality of the parent→child relationship, if the kind is recognized
    pub fn cardinality(&self) -> Option<Cardinality> {
        match self {
            Relationship::OneToOne => Some(Cardinality::Single),
            Relationship::ManyToOne | Relationship::ManyToMany | Relationship::ManyToAny => {
                Some(Cardinality::Many)
            }
            Relationship::Other(_) => None,
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Relationship::OneToOne => f.write_str("one_to_one"),
            Relationship::ManyToOne => f.write_str("many_to_one"),
            Relationship::ManyToMany => f.write_str("many_to_many"),
            Relationship::ManyToAny => f.write_str("many_to_any"),
            Relationship::Other(kind) => f.write_str(kind),
        }
    }
}
