//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Root list (seeds defaults on first visit)
//! POST /                       - Add item to root or named list
//! POST /delete                 - Remove checked item
//! GET  /{list_name}            - Named list (created with defaults if absent)
//! POST /{list_name}            - Open or create (empty) the submitted list
//!
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (store reachable)
//! GET  /favicon.ico            - 204, never a list
//! ```

pub mod health;
pub mod lists;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the application.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .route("/favicon.ico", get(health::favicon))
        .route("/", get(lists::root).post(lists::add))
        .route("/delete", post(lists::delete))
        .route("/{list_name}", get(lists::show).post(lists::open))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
        response::Response,
    };
    use tower::ServiceExt;

    use todolist_core::{ListName, ROOT_LIST_TITLE, SEED_ITEM_NAMES};

    use super::*;
    use crate::db::unavailable::UnavailableStore;
    use crate::db::{MemoryTodoStore, TodoStore};

    fn app_with(store: Arc<dyn TodoStore>) -> Router {
        routes().with_state(AppState::new(store))
    }

    fn app(store: &Arc<MemoryTodoStore>) -> Router {
        app_with(store.clone())
    }

    fn unavailable_app() -> Router {
        app_with(Arc::new(UnavailableStore))
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_form(app: Router, uri: &str, body: &str) -> Response {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let store = Arc::new(MemoryTodoStore::new());

        let response = get(app(&store), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");

        let response = get(app(&store), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_favicon_does_not_create_list() {
        let store = Arc::new(MemoryTodoStore::new());

        let response = get(app(&store), "/favicon.ico").await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(store.list_count().await, 0);
    }

    #[tokio::test]
    async fn test_first_root_visit_seeds_then_renders() {
        let store = Arc::new(MemoryTodoStore::new());

        let response = get(app(&store), "/").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        let response = get(app(&store), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Today&#39;s Tasks...") || html.contains("Today&#x27;s Tasks..."));
        for name in SEED_ITEM_NAMES {
            let escaped = name.replace('<', "&lt;");
            assert!(html.contains(&escaped), "missing seed item {name}");
        }
    }

    #[tokio::test]
    async fn test_named_list_is_created_then_rendered() {
        let store = Arc::new(MemoryTodoStore::new());

        let response = get(app(&store), "/work").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/Work");

        let response = get(app(&store), "/WORK").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Work"));
        assert!(html.contains("newListTitle"));
        assert_eq!(store.list_count().await, 1);
    }

    #[tokio::test]
    async fn test_add_item_to_root_redirects_home() {
        let store = Arc::new(MemoryTodoStore::new());
        get(app(&store), "/").await;

        let title = urlencoding::encode(ROOT_LIST_TITLE);
        let response = post_form(
            app(&store),
            "/",
            &format!("listItem=Buy+milk&list={title}"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");

        let items = store.root_items().await.unwrap();
        assert_eq!(items.len(), SEED_ITEM_NAMES.len() + 1);
        assert_eq!(items.last().unwrap().name, "Buy milk");
    }

    #[tokio::test]
    async fn test_add_item_to_named_list_redirects_to_list() {
        let store = Arc::new(MemoryTodoStore::new());
        get(app(&store), "/work").await;

        let response = post_form(app(&store), "/", "listItem=Ship+it&list=Work").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/Work");

        let work = ListName::normalize("work").unwrap();
        let list = store.find_list(&work).await.unwrap().unwrap();
        assert_eq!(list.items.last().unwrap().name, "Ship it");
    }

    #[tokio::test]
    async fn test_add_to_missing_list_is_not_found() {
        let store = Arc::new(MemoryTodoStore::new());

        let response = post_form(app(&store), "/", "listItem=Ship+it&list=Ghost").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_add_blank_item_is_bad_request() {
        let store = Arc::new(MemoryTodoStore::new());
        get(app(&store), "/work").await;

        let response = post_form(app(&store), "/", "listItem=++&list=Work").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_delete_item_from_named_list() {
        let store = Arc::new(MemoryTodoStore::new());
        get(app(&store), "/work").await;

        let work = ListName::normalize("work").unwrap();
        let list = store.find_list(&work).await.unwrap().unwrap();
        let victim = list.items[0].id;

        let response = post_form(
            app(&store),
            "/delete",
            &format!("checkbox={victim}&listName=Work"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/Work");

        let list = store.find_list(&work).await.unwrap().unwrap();
        assert_eq!(list.items.len(), SEED_ITEM_NAMES.len() - 1);
        assert!(list.items.iter().all(|item| item.id != victim));
    }

    #[tokio::test]
    async fn test_delete_with_malformed_id_is_bad_request() {
        let store = Arc::new(MemoryTodoStore::new());

        let title = urlencoding::encode(ROOT_LIST_TITLE);
        let response = post_form(
            app(&store),
            "/delete",
            &format!("checkbox=not-an-id&listName={title}"),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_open_list_form_creates_empty_list() {
        let store = Arc::new(MemoryTodoStore::new());

        let response = post_form(app(&store), "/Work", "newListTitle=home").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/Home");

        let home = ListName::normalize("home").unwrap();
        let list = store.find_list(&home).await.unwrap().unwrap();
        assert!(list.items.is_empty());
    }

    #[tokio::test]
    async fn test_get_delete_is_method_not_allowed() {
        let store = Arc::new(MemoryTodoStore::new());

        let response = get(app(&store), "/delete").await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(store.list_count().await, 0);
    }

    #[tokio::test]
    async fn test_multi_char_capital_resolves_to_one_list() {
        let store = Arc::new(MemoryTodoStore::new());

        let response = get(app(&store), "/%C3%9Fx").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/Ssx");

        let response = get(app(&store), "/Ssx").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(store.list_count().await, 1);
    }

    #[tokio::test]
    async fn test_failed_seed_still_redirects_home() {
        let response = get(unavailable_app(), "/").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/");
    }

    #[tokio::test]
    async fn test_store_failures_are_service_unavailable() {
        let response = get(unavailable_app(), "/work").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = post_form(unavailable_app(), "/", "listItem=Ship+it&list=Work").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = post_form(
            unavailable_app(),
            "/delete",
            &format!("checkbox={}&listName=Work", todolist_core::ItemId::generate()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = get(unavailable_app(), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
