//! Tests for resource metadata resolution
//!
//! These tests verify that:
//! - Top-level and nested paths are derived from declarations
//! - Undeclared types inherit their ancestor's descriptor
//! - Cardinality follows the parent field's relationship mapping
//! - Malformed declarations fail fast with typed errors

mod support;

use std::sync::Arc;
use support::*;
use tiered::prelude::*;

// =============================================================================
// Top-level Resources
// =============================================================================

mod top_level_tests {
    use super::*;

    #[test]
    fn test_path_is_slash_name() {
        let resolver = blog_resolver();
        let desc = resolver.resolve_type::<Post>().unwrap().unwrap();

        assert_eq!(desc.name(), "posts");
        assert_eq!(desc.path(), format!("/{}", desc.name()));
        assert!(!desc.is_nested());
        assert!(desc.parent_type().is_none());
        assert!(desc.parent_property().is_none());
    }

    #[test]
    fn test_declaration_types_are_carried_over() {
        let resolver = blog_resolver();
        let desc = resolver.resolve_type::<Post>().unwrap().unwrap();

        assert_eq!(desc.id_type(), ResourceType::of::<u64>());
        assert_eq!(desc.domain_type(), ResourceType::of::<Post>());
        assert_eq!(desc.representation_type(), ResourceType::of::<PostView>());
    }

    #[test]
    fn test_representation_defaults_to_domain_type() {
        let resolver = blog_resolver();
        let desc = resolver.resolve_type::<Author>().unwrap().unwrap();

        assert_eq!(desc.representation_type(), ResourceType::of::<Author>());
        assert_eq!(desc.id_type(), ResourceType::of::<String>());
    }

    #[test]
    fn test_explicit_path_is_used_verbatim() {
        let resolver = blog_resolver();
        let desc = resolver.resolve_type::<Author>().unwrap().unwrap();

        assert_eq!(desc.path(), "/people");
    }

    #[test]
    fn test_blank_path_falls_back_to_type_name() {
        let resolver = blog_resolver();
        let desc = resolver.resolve_type::<Order>().unwrap().unwrap();

        assert_eq!(desc.path(), "/orders");
    }

    #[test]
    fn test_naive_pluralization_is_preserved() {
        let resolver = blog_resolver();
        let desc = resolver.resolve_type::<Category>().unwrap().unwrap();

        assert_eq!(desc.path(), "/categorys");
    }

    #[test]
    fn test_english_pluralization_is_opt_in() {
        let config = ResolverConfig::default().with_naming(NamingStrategy::English);
        let resolver = ResourceResolver::new(Arc::new(blog_registry())).with_config(config);
        let desc = resolver.resolve_type::<Category>().unwrap().unwrap();

        assert_eq!(desc.path(), "/categories");
    }
}

// =============================================================================
// Nested Resources
// =============================================================================

mod nested_tests {
    use super::*;

    #[test]
    fn test_comment_nested_under_post() {
        let resolver = blog_resolver();
        let desc = resolver.resolve_type::<Comment>().unwrap().unwrap();

        assert_eq!(desc.path(), "/posts/{parentId}/comments");
        assert!(desc.is_nested());
        assert_eq!(desc.parent_type(), Some(ResourceType::of::<Post>()));
        assert_eq!(desc.parent_property(), Some("post"));
        assert!(resolver.is_nested_collection(&desc).unwrap());
    }

    #[test]
    fn test_nested_path_uses_parent_name() {
        let resolver = blog_resolver();
        let comment = resolver.resolve_type::<Comment>().unwrap().unwrap();
        let post = resolver.resolve_type::<Post>().unwrap().unwrap();

        assert_eq!(
            comment.path(),
            format!("/{}/{{parentId}}/{}", post.name(), comment.name())
        );
    }

    #[test]
    fn test_nested_path_uses_parent_explicit_path() {
        let resolver = blog_resolver();
        let desc = resolver.resolve_type::<Profile>().unwrap().unwrap();

        assert_eq!(desc.path(), "/people/{parentId}/profiles");
    }

    #[test]
    fn test_nested_under_nested_parent() {
        let resolver = blog_resolver();
        let desc = resolver.resolve_type::<Reaction>().unwrap().unwrap();

        assert_eq!(desc.path(), "/comments/{parentId}/reactions");
        assert_eq!(desc.parent_type(), Some(ResourceType::of::<Comment>()));
    }

    #[test]
    fn test_parent_id_type() {
        let resolver = blog_resolver();

        let comment = resolver.resolve_type::<Comment>().unwrap().unwrap();
        assert_eq!(resolver.parent_id_type(&comment).unwrap(), ResourceType::of::<u64>());

        let profile = resolver.resolve_type::<Profile>().unwrap().unwrap();
        assert_eq!(
            resolver.parent_id_type(&profile).unwrap(),
            ResourceType::of::<String>()
        );
    }

    #[test]
    fn test_parent_id_type_of_top_level_fails() {
        let resolver = blog_resolver();
        let post = resolver.resolve_type::<Post>().unwrap().unwrap();

        let err = resolver.parent_id_type(&post).unwrap_err();

        assert!(matches!(
            err,
            ResourceError::Precondition(PreconditionError::NotNested { .. })
        ));
    }
}

// =============================================================================
// Cardinality
// =============================================================================

mod cardinality_tests {
    use super::*;

    #[test]
    fn test_one_to_one_is_single_child() {
        let resolver = blog_resolver();
        let desc = resolver.resolve_type::<Profile>().unwrap().unwrap();

        assert!(!resolver.is_nested_collection(&desc).unwrap());
        assert_eq!(resolver.cardinality(&desc).unwrap(), Some(Cardinality::Single));
    }

    #[test]
    fn test_many_to_one_is_collection() {
        let resolver = blog_resolver();
        let desc = resolver.resolve_type::<Comment>().unwrap().unwrap();

        assert!(resolver.is_nested_collection(&desc).unwrap());
    }

    #[test]
    fn test_many_to_many_is_collection() {
        let resolver = blog_resolver();
        let desc = resolver.resolve_type::<Tag>().unwrap().unwrap();

        assert!(resolver.is_nested_collection(&desc).unwrap());
    }

    #[test]
    fn test_many_to_any_is_collection() {
        let resolver = blog_resolver();
        let desc = resolver.resolve_type::<Reaction>().unwrap().unwrap();

        assert!(resolver.is_nested_collection(&desc).unwrap());
    }

    #[test]
    fn test_top_level_is_not_a_nested_collection() {
        let resolver = blog_resolver();
        let desc = resolver.resolve_type::<Post>().unwrap().unwrap();

        assert!(!resolver.is_nested_collection(&desc).unwrap());
    }

    #[test]
    fn test_unrecognized_relationship_fails() {
        let resolver = broken_resolver();
        let desc = resolver.resolve_type::<Attachment>().unwrap().unwrap();

        let err = resolver.is_nested_collection(&desc).unwrap_err();

        match err {
            ResourceError::Declaration(DeclarationError::UnknownRelationship {
                property,
                relationship,
                ..
            }) => {
                assert_eq!(property, "post");
                assert_eq!(relationship.as_deref(), Some("embedded"));
            }
            other => panic!("Expected UnknownRelationship, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_relationship_metadata() {
        struct EverythingOneToOne;

        impl RelationshipMetadata for EverythingOneToOne {
            fn relationship(
                &self,
                _owner: ResourceType,
                _field: &FieldDeclaration,
            ) -> Option<Relationship> {
                Some(Relationship::OneToOne)
            }
        }

        let resolver = ResourceResolver::new(Arc::new(blog_registry()))
            .with_relationship_metadata(Arc::new(EverythingOneToOne));
        let desc = resolver.resolve_type::<Comment>().unwrap().unwrap();

        assert!(!resolver.is_nested_collection(&desc).unwrap());
    }

    #[test]
    fn test_parent_field_without_relationship_fails() {
        struct Note;

        let registry = ResourceRegistry::builder()
            .register_resource::<Post>()
            .register(
                TypeRegistration::of::<Note>()
                    .declare(ResourceDeclaration::nested::<u64>("post"))
                    .field(FieldDeclaration::single::<Post>("post")),
            )
            .build()
            .unwrap();
        let resolver = ResourceResolver::new(Arc::new(registry));
        let desc = resolver.resolve_type::<Note>().unwrap().unwrap();

        match resolver.cardinality(&desc).unwrap_err() {
            ResourceError::Declaration(DeclarationError::UnknownRelationship {
                property,
                relationship,
                ..
            }) => {
                assert_eq!(property, "post");
                assert!(relationship.is_none());
            }
            other => panic!("Expected UnknownRelationship, got {:?}", other),
        }
        assert!(resolver.validate().is_err());
    }
}

// =============================================================================
// Inheritance & Negative Results
// =============================================================================

mod inheritance_tests {
    use super::*;

    #[test]
    fn test_undeclared_subtype_inherits_top_level() {
        let resolver = blog_resolver();

        let draft = resolver.resolve_type::<Draft>().unwrap().unwrap();
        let post = resolver.resolve_type::<Post>().unwrap().unwrap();

        assert_eq!(draft, post);
        assert!(Arc::ptr_eq(&draft, &post));
    }

    #[test]
    fn test_undeclared_subtype_inherits_nested() {
        let resolver = blog_resolver();

        let reply = resolver.resolve_type::<Reply>().unwrap().unwrap();

        assert_eq!(reply.path(), "/posts/{parentId}/comments");
        assert_eq!(reply.domain_type(), ResourceType::of::<Comment>());
    }

    #[test]
    fn test_no_declaration_in_ancestry_is_negative() {
        let resolver = blog_resolver();

        assert!(resolver.resolve_type::<Widget>().unwrap().is_none());
        assert!(resolver.resolve_type::<Base>().unwrap().is_none());
    }

    #[test]
    fn test_unregistered_type_is_negative() {
        let resolver = blog_resolver();

        assert!(resolver.resolve_type::<String>().unwrap().is_none());
    }

    #[test]
    fn test_path_name_does_not_walk_ancestors() {
        let resolver = blog_resolver();

        let err = resolver.path_name(ResourceType::of::<Draft>()).unwrap_err();

        assert!(matches!(
            err,
            ResourceError::Declaration(DeclarationError::Undeclared { .. })
        ));
    }
}

// =============================================================================
// Field Resolution
// =============================================================================

mod field_tests {
    use super::*;

    #[test]
    fn test_collection_field_resolves_element() {
        let resolver = blog_resolver();
        let field = FieldDeclaration::collection::<Comment>("comments");

        let desc = resolver.resolve_from_field(&field).unwrap().unwrap();

        assert_eq!(desc.domain_type(), ResourceType::of::<Comment>());
    }

    #[test]
    fn test_single_field_resolves_declared_type() {
        let resolver = blog_resolver();

        let desc = resolver
            .resolve_field(ResourceType::of::<Post>(), "author")
            .unwrap()
            .unwrap();

        assert_eq!(desc.path(), "/people");
    }

    #[test]
    fn test_inherited_field_is_found() {
        let resolver = blog_resolver();

        let desc = resolver
            .resolve_field(ResourceType::of::<Draft>(), "comments")
            .unwrap()
            .unwrap();

        assert_eq!(desc.name(), "comments");
    }

    #[test]
    fn test_untyped_collection_fails() {
        let resolver = blog_resolver();

        let err = resolver
            .resolve_field(ResourceType::of::<Post>(), "keywords")
            .unwrap_err();

        assert_eq!(err.error_code(), "UNRESOLVED_COLLECTION_ELEMENT");
    }

    #[test]
    fn test_custom_collection_element_resolver() {
        struct KeywordsAreTags;

        impl CollectionElementResolver for KeywordsAreTags {
            fn element_type(&self, field: &FieldDeclaration) -> Option<ResourceType> {
                (field.name == "keywords").then(ResourceType::of::<Tag>)
            }
        }

        let resolver = ResourceResolver::new(Arc::new(blog_registry()));
        assert!(resolver.resolve_type::<Post>().unwrap().is_some());

        let resolver = resolver.with_collection_resolver(Arc::new(KeywordsAreTags));

        let desc = resolver
            .resolve_field(ResourceType::of::<Post>(), "keywords")
            .unwrap()
            .unwrap();
        assert_eq!(desc.domain_type(), ResourceType::of::<Tag>());

        let err = resolver
            .resolve_field(ResourceType::of::<Post>(), "comments")
            .unwrap_err();
        assert_eq!(err.error_code(), "UNRESOLVED_COLLECTION_ELEMENT");
    }

    #[test]
    fn test_missing_field_fails() {
        let resolver = blog_resolver();

        let err = resolver
            .resolve_field(ResourceType::of::<Post>(), "editor")
            .unwrap_err();

        assert_eq!(err.error_code(), "MISSING_FIELD");
    }

    #[test]
    fn test_field_of_non_resource_is_negative() {
        let resolver = blog_resolver();
        let field = FieldDeclaration::single::<String>("title");

        assert!(resolver.resolve_from_field(&field).unwrap().is_none());
    }
}

// =============================================================================
// Malformed Declarations
// =============================================================================

mod declaration_error_tests {
    use super::*;

    #[test]
    fn test_missing_parent_property_fails() {
        let resolver = broken_resolver();

        let err = resolver.resolve_type::<Broken>().unwrap_err();

        assert_eq!(
            err,
            ResourceError::Declaration(DeclarationError::MissingParentProperty {
                domain_type: ResourceType::of::<Broken>(),
                property: "owner".to_string(),
            })
        );
    }

    #[test]
    fn test_undeclared_parent_fails() {
        let resolver = broken_resolver();

        let err = resolver.resolve_type::<Orphan>().unwrap_err();

        assert_eq!(
            err,
            ResourceError::Declaration(DeclarationError::Undeclared {
                domain_type: ResourceType::of::<Widget>(),
            })
        );
    }

    #[test]
    fn test_validate_reports_broken_registry() {
        assert!(broken_resolver().validate().is_err());
    }

    #[test]
    fn test_validate_accepts_blog_registry() {
        blog_resolver().validate().unwrap();
    }
}

// =============================================================================
// Concurrency
// =============================================================================

mod concurrency_tests {
    use super::*;

    #[test]
    fn test_concurrent_resolution_agrees() {
        let resolver = blog_resolver();
        let resolver = &resolver;

        let paths: Vec<String> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(move || {
                        resolver
                            .resolve_type::<Reaction>()
                            .unwrap()
                            .unwrap()
                            .path()
                            .to_string()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(paths.iter().all(|p| p == "/comments/{parentId}/reactions"));
    }
}
