//! Blog API Example
//!
//! Serves posts and the comments nested under them, each with a self link
//! derived from the resource declarations:
//!
//! - `GET /posts/{id}`          - a post
//! - `GET /posts/{id}/comments` - the comments of a post
//! - `GET /resources`           - the resolved descriptors

use anyhow::Result;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::Serialize;
use std::collections::HashMap;
use tiered::prelude::*;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

const BASE_URI: &str = "http://127.0.0.1:3000";

#[derive(Debug, Clone, Serialize)]
struct Post {
    id: Uuid,
    title: String,
}

#[derive(Debug, Clone, Serialize)]
struct Comment {
    id: Uuid,
    body: String,
}

impl_identifiable!(Post, Uuid);
impl_identifiable!(Comment, Uuid);

impl_resource!(
    Post,
    ResourceDeclaration::top_level::<Uuid>(),
    fields [
        FieldDeclaration::collection::<Comment>("comments")
            .with_relationship(Relationship::ManyToOne),
    ]
);

impl_resource!(
    Comment,
    ResourceDeclaration::nested::<Uuid>("post"),
    fields [FieldDeclaration::single::<Post>("post").with_relationship(Relationship::ManyToOne)]
);

/// Adds a link back to the owning post
struct CommentLinks;

impl NestedAssemblerHooks<Comment, Post> for CommentLinks {
    fn add_links(
        &self,
        links: &mut Vec<Link>,
        _entity: &Comment,
        parent: &Post,
    ) -> tiered::core::Result<()> {
        links.push(Link::new(format!("{}/posts/{}", BASE_URI, parent.id), "post"));
        Ok(())
    }
}

#[derive(Clone)]
struct AppState {
    resolver: Arc<ResourceResolver>,
    posts: Arc<HashMap<Uuid, (Post, Vec<Comment>)>>,
    post_assembler: Arc<ResourceAssembler<Post>>,
    comment_assembler: Arc<NestedResourceAssembler<Comment, Post, CommentLinks>>,
}

async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ResourceError> {
    let Some((post, _)) = state.posts.get(&id) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let rep = state.post_assembler.to_representation(post.clone())?;
    Ok(Json(rep).into_response())
}

async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, ResourceError> {
    let Some((post, comments)) = state.posts.get(&id) else {
        return Ok(StatusCode::NOT_FOUND.into_response());
    };

    let assembler = &state.comment_assembler;
    let prepared = comments.iter().cloned().map(|c| assembler.prepare(c));
    let reps = assembler.convert_all(prepared, post)?;
    Ok(Json(reps).into_response())
}

async fn list_resources(State(state): State<AppState>) -> Result<Response, ResourceError> {
    let mut descriptors = Vec::new();
    for resource_type in state.resolver.registry().resource_types() {
        if let Some(descriptor) = state.resolver.resolve(resource_type)? {
            descriptors.push(descriptor.as_ref().clone());
        }
    }
    Ok(Json(descriptors).into_response())
}

fn sample_data() -> HashMap<Uuid, (Post, Vec<Comment>)> {
    let post = Post {
        id: Uuid::new_v4(),
        title: "Nested resources in Rust".to_string(),
    };
    let comments = ["Great read", "What about one-to-one?"]
        .iter()
        .map(|body| Comment {
            id: Uuid::new_v4(),
            body: body.to_string(),
        })
        .collect();

    HashMap::from([(post.id, (post, comments))])
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let registry = ResourceRegistry::builder()
        .register_resource::<Post>()
        .register_resource::<Comment>()
        .build()?;
    let resolver = Arc::new(ResourceResolver::new(Arc::new(registry)));
    resolver.validate()?;

    let links: Arc<dyn EntityLinks> = Arc::new(PathEntityLinks::new(BASE_URI, resolver.clone()));
    let posts = sample_data();

    println!("🚀 Blog API Example\n");
    for (id, (post, _)) in posts.iter() {
        println!("  📝 {} → {}/posts/{}/comments", post.title, BASE_URI, id);
    }

    let state = AppState {
        resolver: resolver.clone(),
        posts: Arc::new(posts),
        post_assembler: Arc::new(ResourceAssembler::new(links.clone())),
        comment_assembler: Arc::new(NestedResourceAssembler::with_hooks(
            resolver,
            links,
            CommentLinks,
        )),
    };

    let app = Router::new()
        .route("/posts/{id}", get(get_post))
        .route("/posts/{id}/comments", get(list_comments))
        .route("/resources", get(list_resources))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
    println!("\n🌐 Server running on {}", BASE_URI);
    axum::serve(listener, app).await?;

    Ok(())
}
