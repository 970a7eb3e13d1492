// ABOUTME: Grocery list API handlers for reading and replacing the stored list.
// ABOUTME: Decodes POST bodies strictly and surfaces the decoder message on rejection.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use grocerd_core::Item;

use crate::app_state::SharedState;
use crate::error::ApiError;

/// GET / - return the current list as a JSON array. Side-effect free.
pub async fn list_items(State(state): State<SharedState>) -> Json<Vec<Item>> {
    Json(state.store.items().await)
}

/// POST / - decode the body as an ordered list of items, replace the stored
/// list wholesale, persist it, and echo the new list back as confirmation.
///
/// The body is decoded directly from bytes rather than through the Json
/// extractor so a decode failure maps to 400 with the decoder's message in
/// the body. Unknown fields on an item are decode failures.
pub async fn replace_items(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<Vec<Item>>, ApiError> {
    let items: Vec<Item> =
        serde_json::from_slice(&body).map_err(|err| ApiError::BadRequest(err.to_string()))?;

    let stored = state.store.replace(items).await.map_err(|err| {
        tracing::error!("failed to persist grocery list: {}", err);
        ApiError::Internal(err.to_string())
    })?;

    Ok(Json(stored))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_state::AppState;
    use crate::routes::create_router;
    use axum::Router;
    use axum::body::Body;
    use axum::http::StatusCode;
    use grocerd_store::ListStore;
    use http::Request;
    use std::path::Path;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app(path: &Path) -> Router {
        let store = ListStore::open(path).unwrap();
        create_router(Arc::new(AppState::new(store)), None)
    }

    async fn json_body(resp: axum::response::Response) -> serde_json::Value {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn get_returns_empty_list_on_first_run() {
        let dir = tempfile::TempDir::new().unwrap();
        let app = test_app(&dir.path().join("grocery.json"));

        let resp = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn post_replaces_and_echoes_list() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("grocery.json");

        let list = serde_json::json!([
            {"name": "milk", "amount": 2},
            {"name": "eggs", "amount": 12},
            {"name": "milk", "amount": 1}
        ]);

        let app = test_app(&path);
        let resp = app
            .oneshot(
                Request::post("/")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&list).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await, list, "response should echo the new list");

        let on_disk: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk, list, "file should hold the new list");
    }

    #[tokio::test]
    async fn post_then_get_round_trips_in_order() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("grocery.json");
        let store = ListStore::open(&path).unwrap();
        let state = Arc::new(AppState::new(store));

        let list = serde_json::json!([
            {"name": "bread", "amount": 1},
            {"name": "apples", "amount": 6}
        ]);

        let resp = create_router(Arc::clone(&state), None)
            .oneshot(
                Request::post("/")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&list).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = create_router(Arc::clone(&state), None)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(json_body(resp).await, list);
    }

    #[tokio::test]
    async fn post_rejects_unknown_fields_and_leaves_file_untouched() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("grocery.json");
        std::fs::write(&path, r#"[{"name":"bread","amount":1}]"#).unwrap();
        let before = std::fs::read(&path).unwrap();

        let app = test_app(&path);
        let resp = app
            .oneshot(
                Request::post("/")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"[{"name":"milk","amount":2,"unit":"L"}]"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = json_body(resp).await;
        assert!(
            json["error"].as_str().unwrap().contains("unit"),
            "error should name the unknown field: {}",
            json
        );

        assert_eq!(
            std::fs::read(&path).unwrap(),
            before,
            "rejected POST must not modify the persisted file"
        );
    }

    #[tokio::test]
    async fn post_returns_500_and_keeps_list_when_persist_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        let parent = dir.path().join("sub");
        let path = parent.join("grocery.json");
        let store = ListStore::open(&path).unwrap();
        let state = Arc::new(AppState::new(store));

        let seeded = serde_json::json!([{"name": "bread", "amount": 1}]);
        let resp = create_router(Arc::clone(&state), None)
            .oneshot(
                Request::post("/")
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&seeded).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        // Turn the parent directory into a regular file so the next persist fails.
        std::fs::remove_dir_all(&parent).unwrap();
        std::fs::write(&parent, "blocker").unwrap();

        let resp = create_router(Arc::clone(&state), None)
            .oneshot(
                Request::post("/")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"[{"name":"milk","amount":2}]"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = create_router(Arc::clone(&state), None)
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            json_body(resp).await,
            seeded,
            "failed persist must leave the previous list in place"
        );
    }

    #[tokio::test]
    async fn post_rejects_invalid_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let app = test_app(&dir.path().join("grocery.json"));

        let resp = app
            .oneshot(
                Request::post("/")
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn post_rejects_non_array_body() {
        let dir = tempfile::TempDir::new().unwrap();
        let app = test_app(&dir.path().join("grocery.json"));

        let resp = app
            .oneshot(
                Request::post("/")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"name":"milk","amount":2}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
