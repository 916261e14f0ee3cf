use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use fra_registry::{create_app, AppState, Config, MemoryRegistry, NewVillage, Registry, Village};
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub registry: Arc<MemoryRegistry>,
}

impl TestApp {
    pub fn new() -> Self {
        let registry = Arc::new(MemoryRegistry::new());
        let state = AppState::new(registry.clone(), Config::default());
        TestApp {
            router: create_app(state),
            registry,
        }
    }

    pub async fn add_village(&self, name: &str, state: &str) -> Village {
        self.registry
            .insert_village(&NewVillage {
                name: name.into(),
                state: state.into(),
            })
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.post_raw(uri, &serde_json::to_string(&body).unwrap()).await
    }

    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(req).await
    }

    pub async fn send(&self, req: Request<Body>) -> (StatusCode, serde_json::Value) {
        let resp = self.router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
        let json = if bytes.is_empty() {
            serde_json::json!(null)
        } else {
            serde_json::from_slice(&bytes).unwrap_or(serde_json::json!(null))
        };
        (status, json)
    }
}
