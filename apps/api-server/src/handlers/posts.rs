//! Post CRUD handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::{Post, PostChanges, PostDraft};
use blog_shared::MessageResponse;
use blog_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        content: post.content,
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

/// A malformed id cannot match any record, so it is treated as not-found
/// rather than surfaced as a distinct error.
fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::PostNotFound)
}

/// GET /api/posts
///
/// An empty collection responds 200 with `{ "message": "No posts found" }`;
/// the message body is the contract, not an empty array.
pub async fn get_all_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_all().await?;

    if posts.is_empty() {
        return Ok(HttpResponse::Ok().json(MessageResponse::new("No posts found")));
    }

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/posts/{id}
pub async fn get_post_by_id(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(AppError::PostNotFound)?;

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let draft = PostDraft {
        title: req.title,
        content: req.content,
    };
    let post = draft.into_post()?;

    let saved = state.posts.insert(post).await?;

    Ok(HttpResponse::Created().json(to_response(saved)))
}

/// PUT /api/posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();

    let mut post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(AppError::PostNotFound)?;

    post.apply(PostChanges {
        title: req.title,
        content: req.content,
    })?;

    let saved = state.posts.update(post).await?;

    Ok(HttpResponse::Ok().json(to_response(saved)))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    state.posts.delete(id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully")))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use blog_infra::InMemoryPostRepository;

    use crate::handlers::configure_routes;
    use crate::middleware::error::json_error_handler;
    use crate::state::AppState;

    async fn spawn_app() -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        let state = AppState::new(Arc::new(InMemoryPostRepository::new()));
        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .configure(configure_routes),
        )
        .await
    }

    async fn create(
        app: &impl actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
        title: &str,
        content: &str,
    ) -> Value {
        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "title": title, "content": content }))
            .to_request();
        let res = test::call_service(app, req).await;
        assert_eq!(res.status(), 201);
        test::read_body_json(res).await
    }

    #[actix_web::test]
    async fn get_all_returns_message_when_empty() {
        let app = spawn_app().await;

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 200);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "No posts found");
    }

    #[actix_web::test]
    async fn get_all_returns_posts_in_creation_order() {
        let app = spawn_app().await;
        create(&app, "Post 1", "Content 1").await;
        create(&app, "Post 2", "Content 2").await;

        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 200);
        let body: Value = test::read_body_json(res).await;
        let posts = body.as_array().unwrap();
        assert_eq!(posts.len(), 2);
        for post in posts {
            assert!(post.get("id").is_some());
            assert!(post.get("title").is_some());
            assert!(post.get("content").is_some());
        }
        assert_eq!(posts[0]["title"], "Post 1");
        assert_eq!(posts[1]["title"], "Post 2");
    }

    #[actix_web::test]
    async fn create_then_get_by_id_round_trips() {
        let app = spawn_app().await;
        let created = create(&app, "Test", "Test content").await;
        let id = created["id"].as_str().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", id))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 200);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["id"], *id);
        assert_eq!(body["title"], "Test");
        assert_eq!(body["content"], "Test content");
    }

    #[actix_web::test]
    async fn create_with_empty_title_is_rejected_and_persists_nothing() {
        let app = spawn_app().await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "title": "", "content": "Content" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 400);
        let body: Value = test::read_body_json(res).await;
        assert!(body["message"].as_str().unwrap().contains("title"));

        // Nothing was stored
        let req = test::TestRequest::get().uri("/api/posts").to_request();
        let res = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "No posts found");
    }

    #[actix_web::test]
    async fn create_with_missing_field_gets_structured_message() {
        let app = spawn_app().await;

        let req = test::TestRequest::post()
            .uri("/api/posts")
            .set_json(json!({ "title": "Only title" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 400);
        let body: Value = test::read_body_json(res).await;
        assert!(body["message"].as_str().unwrap().contains("content"));
    }

    #[actix_web::test]
    async fn update_changes_fields_but_not_id() {
        let app = spawn_app().await;
        let created = create(&app, "Before", "Old content").await;
        let id = created["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{}", id))
            .set_json(json!({ "title": "After" }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", id))
            .to_request();
        let res = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["id"], id);
        assert_eq!(body["title"], "After");
        assert_eq!(body["content"], "Old content");
    }

    #[actix_web::test]
    async fn update_missing_post_is_not_found() {
        let app = spawn_app().await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/posts/{}", uuid::Uuid::new_v4()))
            .set_json(json!({ "title": "Ghost" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 404);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Post not found");
    }

    #[actix_web::test]
    async fn delete_then_get_is_not_found() {
        let app = spawn_app().await;
        let created = create(&app, "Doomed", "Content").await;
        let id = created["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/posts/{}", id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 200);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Post deleted successfully");

        let req = test::TestRequest::get()
            .uri(&format!("/api/posts/{}", id))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), 404);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Post not found");
    }

    #[actix_web::test]
    async fn malformed_id_is_treated_as_not_found() {
        let app = spawn_app().await;

        let req = test::TestRequest::get()
            .uri("/api/posts/not-a-uuid")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), 404);
        let body: Value = test::read_body_json(res).await;
        assert_eq!(body["message"], "Post not found");
    }
}
