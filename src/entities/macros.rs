//! Macros for reducing boilerplate when declaring resources
//!
//! These generate the [`Identifiable`](crate::core::Identifiable) and
//! [`Resource`](crate::registry::Resource) implementations most domain types
//! need.

/// Implement `Identifiable` by cloning an id field
///
/// # Example
/// ```rust
/// use tiered::impl_identifiable;
///
/// struct Post {
///     id: u64,
/// }
/// impl_identifiable!(Post, u64);
///
/// struct Tag {
///     slug: String,
/// }
/// impl_identifiable!(Tag, String, slug);
/// ```
#[macro_export]
macro_rules! impl_identifiable {
    ($type:ty, $id:ty) => {
        $crate::impl_identifiable!($type, $id, id);
    };
    ($type:ty, $id:ty, $field:ident) => {
        impl $crate::core::Identifiable for $type {
            type Id = $id;

            fn id(&self) -> $id {
                ::std::clone::Clone::clone(&self.$field)
            }
        }
    };
}

/// Implement `Resource` from a declaration, an optional superclass and the
/// fields the resolver needs
///
/// # Example
/// ```rust
/// use tiered::core::{FieldDeclaration, Relationship, ResourceDeclaration};
/// use tiered::impl_resource;
///
/// struct Post;
/// struct Comment;
///
/// impl_resource!(Post, ResourceDeclaration::top_level::<u64>());
/// impl_resource!(
///     Comment,
///     ResourceDeclaration::nested::<u64>("post"),
///     fields [
///         FieldDeclaration::single::<Post>("post").with_relationship(Relationship::ManyToOne),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! impl_resource {
    (
        $type:ty,
        $declaration:expr
        $(, extends $super:ty)?
        $(, fields [$($field:expr),* $(,)?])?
        $(,)?
    ) => {
        impl $crate::registry::Resource for $type {
            fn registration() -> $crate::registry::TypeRegistration {
                #[allow(unused_mut)]
                let mut registration =
                    $crate::registry::TypeRegistration::of::<Self>().declare($declaration);
                $(registration = registration.extends::<$super>();)?
                $($(registration = registration.field($field);)*)?
                registration
            }
        }
    };
}
