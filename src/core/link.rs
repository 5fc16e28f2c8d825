//! Hypermedia links and linked representations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Relation name of the canonical link of a representation
pub const REL_SELF: &str = "self";

/// A navigational link
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }

    /// Create a `self` link
    pub fn self_link(href: impl Into<String>) -> Self {
        Self::new(href, REL_SELF)
    }

    /// Create a link with the same relation, appending a path to the href
    pub fn slash(&self, segment: impl fmt::Display) -> Self {
        Self {
            rel: self.rel.clone(),
            href: format!("{}/{}", self.href, segment),
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href)
    }
}

/// An entity paired with its navigational links
///
/// Serializes as the entity's own fields plus a `links` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedRepresentation<T> {
    #[serde(flatten)]
    pub content: T,
    pub links: Vec<Link>,
}

impl<T> LinkedRepresentation<T> {
    pub fn new(content: T, links: Vec<Link>) -> Self {
        Self { content, links }
    }

    /// Find the first link with the given relation
    pub fn link(&self, rel: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.rel == rel)
    }

    /// The canonical link of this representation
    pub fn self_link(&self) -> Option<&Link> {
        self.link(REL_SELF)
    }

    pub fn into_content(self) -> T {
        self.content
    }
}
