//! Type identity used to key declarations and descriptors
//!
//! Resources are identified by their Rust type rather than by a string name,
//! so two modules declaring a `Comment` type never collide.

use serde::{Serialize, Serializer};
use std::any::TypeId;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a Rust type taking part in the resource model
///
/// Equality and hashing only consider the [`TypeId`]; the type name is kept
/// for path derivation and diagnostics.
#[derive(Clone, Copy)]
pub struct ResourceType {
    id: TypeId,
    name: &'static str,
}

impl ResourceType {
    /// Identity of `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The underlying [`TypeId`]
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// Fully qualified type name (e.g., "blog::model::Comment")
    pub fn type_name(&self) -> &'static str {
        self.name
    }

    /// Unqualified type name without generic arguments (e.g., "Comment")
    ///
    /// # Examples
    ///
    /// ```
    /// use tiered::core::ResourceType;
    ///
    /// struct Order;
    /// assert_eq!(ResourceType::of::<Order>().simple_name(), "Order");
    /// assert_eq!(ResourceType::of::<Vec<Order>>().simple_name(), "Vec");
    /// ```
    pub fn simple_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Check whether this is the identity of `T`
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for ResourceType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ResourceType {}

impl Hash for ResourceType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.simple_name())
    }
}

impl Serialize for ResourceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.simple_name())
    }
}
