//! Request handling for the tile service.

use crate::store::{StoredObject, TileStore};
use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderValue, StatusCode, Uri};
use axum::response::Response;
use axum::Router;
use bytes::Bytes;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

/// Key of the empty tile served for missing `.pbf` requests.
pub const FALLBACK_KEY: &str = "default-empty.pbf";

const PBF_CONTENT_TYPE: &str = "application/x-protobuf";
const PBF_CACHE_CONTROL: &str = "public, max-age=3600";

#[derive(Clone)]
struct TilesState {
    store: Arc<dyn TileStore>,
}

/// Builds the tile router. CORS headers are emitted only for requests whose
/// `Origin` is in `allowed_origins`.
pub fn router(store: Arc<dyn TileStore>, allowed_origins: Vec<HeaderValue>) -> Router {
    let cors = CorsLayer::new().allow_origin(AllowOrigin::list(allowed_origins));

    Router::new()
        .fallback(serve_object)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(TilesState { store })
}

/// Serves one object lookup, with the empty-tile fallback for `.pbf` misses.
async fn serve_object(State(state): State<TilesState>, uri: Uri) -> Response {
    let key = uri.path().trim_start_matches('/');

    match state.store.get(key).await {
        Ok(Some(object)) => found(object),
        Ok(None) if key.ends_with(".pbf") => match state.store.get(FALLBACK_KEY).await {
            Ok(Some(fallback)) => empty_tile(fallback.body),
            // No designated fallback object either; a zero-length tile
            // decodes as "no features here".
            Ok(None) => empty_tile(Bytes::new()),
            Err(e) => internal_error(e),
        },
        Ok(None) => text_response(StatusCode::NOT_FOUND, "File not found"),
        Err(e) => internal_error(e),
    }
}

fn found(object: StoredObject) -> Response {
    let mut response = Response::new(Body::from(object.body));

    let headers = response.headers_mut();
    if let Some(value) = encode(object.content_type) {
        headers.insert(header::CONTENT_TYPE, value);
    }
    if let Some(value) = encode(object.cache_control) {
        headers.insert(header::CACHE_CONTROL, value);
    }
    if let Some(value) = encode(object.etag) {
        headers.insert(header::ETAG, value);
    }

    response
}

fn empty_tile(body: Bytes) -> Response {
    let mut response = Response::new(Body::from(body));

    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(PBF_CONTENT_TYPE));
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(PBF_CACHE_CONTROL),
    );

    response
}

fn internal_error(e: crate::store::StoreError) -> Response {
    error!("Tile lookup failed: {}", e);
    text_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

fn text_response(status: StatusCode, message: &'static str) -> Response {
    let mut response = Response::new(Body::from(message));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("text/plain"));
    response
}

fn encode(value: Option<String>) -> Option<HeaderValue> {
    value.and_then(|value| HeaderValue::from_str(&value).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, StoreError};
    use async_trait::async_trait;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    struct FailingStore;

    #[async_trait]
    impl TileStore for FailingStore {
        async fn get(&self, _key: &str) -> Result<Option<StoredObject>, StoreError> {
            Err(StoreError::InvalidKey("simulated fault".to_string()))
        }
    }

    fn seeded_router() -> Router {
        let store = MemoryStore::new()
            .with_object(
                "tiles/9/453/201.pbf",
                StoredObject::new(vec![0xAA, 0xBB], Some(PBF_CONTENT_TYPE)),
            )
            .with_object(
                FALLBACK_KEY,
                StoredObject::new(b"empty-tile".to_vec(), Some(PBF_CONTENT_TYPE)),
            )
            .with_object("style.json", StoredObject::new(b"{}".to_vec(), Some("application/json")));

        router(Arc::new(store), vec![])
    }

    async fn get(app: Router, path: &str, origin: Option<&str>) -> Response {
        let mut builder = axum::http::Request::builder().uri(path);
        if let Some(origin) = origin {
            builder = builder.header(header::ORIGIN, origin);
        }
        app.oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Bytes {
        response.into_body().collect().await.unwrap().to_bytes()
    }

    #[tokio::test]
    async fn test_existing_key_is_served_with_its_metadata() {
        let response = get(seeded_router(), "/tiles/9/453/201.pbf", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            PBF_CONTENT_TYPE
        );
        assert!(response.headers().get(header::ETAG).is_some());
        assert_eq!(body_bytes(response).await.as_ref(), &[0xAA, 0xBB]);
    }

    #[tokio::test]
    async fn test_missing_pbf_key_serves_the_fallback_tile() {
        let response = get(seeded_router(), "/tiles/9/0/0.pbf", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            PBF_CACHE_CONTROL
        );
        assert_eq!(body_bytes(response).await.as_ref(), b"empty-tile");
    }

    #[tokio::test]
    async fn test_missing_pbf_without_fallback_serves_zero_bytes() {
        let store = MemoryStore::new();
        let app = router(Arc::new(store), vec![]);

        let response = get(app, "/tiles/9/0/0.pbf", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            PBF_CONTENT_TYPE
        );
        assert!(body_bytes(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_non_pbf_key_is_a_real_404() {
        let response = get(seeded_router(), "/missing/style.json", None).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_bytes(response).await.as_ref(), b"File not found");
    }

    #[tokio::test]
    async fn test_store_fault_is_a_500() {
        let app = router(Arc::new(FailingStore), vec![]);

        let response = get(app, "/tiles/9/0/0.pbf", None).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_bytes(response).await.as_ref(), b"Internal server error");
    }

    #[tokio::test]
    async fn test_cors_header_only_for_allowed_origins() {
        let allowed = vec![HeaderValue::from_static("https://game.example.com")];
        let store = MemoryStore::new().with_object(
            "style.json",
            StoredObject::new(b"{}".to_vec(), Some("application/json")),
        );
        let app = router(Arc::new(store), allowed);

        let response = get(
            app.clone(),
            "/style.json",
            Some("https://game.example.com"),
        )
        .await;
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .unwrap(),
            "https://game.example.com"
        );

        let response = get(app, "/style.json", Some("https://evil.example.com")).await;
        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
