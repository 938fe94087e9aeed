use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use tower::ServiceExt;
use utils::telemetry::HttpMetrics;

use crate::{
    http::{server::make_router, state::HttpState},
    random::{RandomSource, ThreadRandom},
    words::{StaticWordSource, WordSource},
};

use super::app::TestApp;

#[derive(Clone)]
pub struct TestHttpApp {
    pub inner: TestApp,
    router: axum::Router,
}

impl Default for TestHttpApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestHttpApp {
    pub fn new() -> Self {
        Self::new_with_rng(Arc::new(ThreadRandom))
    }

    /// Embedded word lists with the given randomness
    pub fn new_with_rng(rng: Arc<dyn RandomSource>) -> Self {
        let words = Arc::new(StaticWordSource::embedded().unwrap());

        Self::new_with_sources(TestApp::new(), words, rng)
    }

    pub fn new_with_sources(
        inner: TestApp,
        words: Arc<dyn WordSource>,
        rng: Arc<dyn RandomSource>,
    ) -> Self {
        let metrics = HttpMetrics::init(&opentelemetry::global::meter("wordhue_test"));
        let state = HttpState::new_with_sources(inner.config.as_ref().clone(), words, rng, metrics);

        Self {
            inner,
            router: make_router(state),
        }
    }

    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.router
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }
}

pub async fn map_response<T: DeserializeOwned>(response: Response<Body>) -> T {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
