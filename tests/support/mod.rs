//! Shared blog domain model for integration tests
#![allow(dead_code)]

use serde::Serialize;
use std::sync::Arc;
use tiered::prelude::*;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub id: u64,
    pub body: String,
}

/// Comment subtype without its own declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub id: u64,
}

/// Post subtype without its own declaration
pub struct Draft;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Author {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub id: u32,
}

pub struct Tag;
pub struct PostView;
pub struct Attachment;
pub struct Reaction;
pub struct Category;
pub struct Order;
pub struct Broken;
pub struct Orphan;
pub struct Base;
pub struct Widget;

impl_identifiable!(Post, u64);
impl_identifiable!(Comment, u64);
impl_identifiable!(Author, String);
impl_identifiable!(Profile, u32);
impl_identifiable!(Reply, u64);

impl_resource!(
    Post,
    ResourceDeclaration::top_level::<u64>().with_representation::<PostView>(),
    fields [
        FieldDeclaration::collection::<Comment>("comments")
            .with_relationship(Relationship::ManyToOne),
        FieldDeclaration::untyped_collection::<Vec<String>>("keywords"),
        FieldDeclaration::single::<Author>("author").with_relationship(Relationship::ManyToOne),
    ]
);

impl_resource!(
    Comment,
    ResourceDeclaration::nested::<u64>("post"),
    fields [
        FieldDeclaration::single::<Post>("post").with_relationship(Relationship::ManyToOne),
    ]
);

impl_resource!(Author, ResourceDeclaration::top_level::<String>().with_path("people"));

impl_resource!(
    Profile,
    ResourceDeclaration::nested::<u32>("author"),
    fields [
        FieldDeclaration::single::<Author>("author").with_relationship(Relationship::OneToOne),
    ]
);

impl_resource!(
    Tag,
    ResourceDeclaration::nested::<String>("post"),
    fields [
        FieldDeclaration::single::<Post>("post").with_relationship(Relationship::ManyToMany),
    ]
);

impl_resource!(
    Reaction,
    ResourceDeclaration::nested::<u64>("comment"),
    fields [
        FieldDeclaration::single::<Comment>("comment").with_relationship(Relationship::ManyToAny),
    ]
);

impl_resource!(
    Attachment,
    ResourceDeclaration::nested::<u64>("post"),
    fields [
        FieldDeclaration::single::<Post>("post")
            .with_relationship(Relationship::Other("embedded".to_string())),
    ]
);

impl_resource!(Category, ResourceDeclaration::top_level::<u32>());
impl_resource!(Order, ResourceDeclaration::top_level::<u64>().with_path("  "));

impl_resource!(
    Broken,
    ResourceDeclaration::nested::<u64>("owner"),
    fields [FieldDeclaration::single::<Post>("post")]
);

impl_resource!(
    Orphan,
    ResourceDeclaration::nested::<u64>("widget"),
    fields [FieldDeclaration::single::<Widget>("widget")]
);

/// Registry with only well-formed declarations
pub fn blog_registry() -> ResourceRegistry {
    ResourceRegistry::builder()
        .register_resource::<Post>()
        .register_resource::<Comment>()
        .register_resource::<Author>()
        .register_resource::<Profile>()
        .register_resource::<Tag>()
        .register_resource::<Reaction>()
        .register_resource::<Category>()
        .register_resource::<Order>()
        .register(TypeRegistration::of::<Reply>().extends::<Comment>())
        .register(TypeRegistration::of::<Draft>().extends::<Post>())
        .register(TypeRegistration::of::<Base>())
        .register(TypeRegistration::of::<Widget>().extends::<Base>())
        .build()
        .expect("blog registry is acyclic")
}

/// Registry additionally holding malformed declarations
pub fn broken_registry() -> ResourceRegistry {
    ResourceRegistry::builder()
        .register_resource::<Post>()
        .register_resource::<Comment>()
        .register_resource::<Attachment>()
        .register_resource::<Broken>()
        .register_resource::<Orphan>()
        .register(TypeRegistration::of::<Widget>())
        .build()
        .expect("broken registry is acyclic")
}

pub fn blog_resolver() -> Arc<ResourceResolver> {
    Arc::new(ResourceResolver::new(Arc::new(blog_registry())))
}

pub fn broken_resolver() -> Arc<ResourceResolver> {
    Arc::new(ResourceResolver::new(Arc::new(broken_registry())))
}
