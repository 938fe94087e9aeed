use std::{collections::BTreeMap, sync::Arc};

use axum::http::StatusCode;
use wordhue::{
    config::Config,
    random::ThreadRandom,
    test_utils::{
        app::TestApp,
        http::{map_response, TestHttpApp},
        random::SequenceRandom,
    },
    words::StaticWordSource,
};
use wordhue_types::{
    ColorFormat, ColorPaletteResponse, ErrorResponse, HealthResponse, HelloResponse,
    RandomColorResponse, RandomEverythingResponse, WordCategory, WordEntry,
};

fn zeros() -> TestHttpApp {
    TestHttpApp::new_with_rng(Arc::new(SequenceRandom::new(vec![0.0])))
}

async fn palette(app: &TestHttpApp, uri: &str) -> Vec<String> {
    let response = app.get(uri).await;
    assert_eq!(response.status(), StatusCode::OK, "{uri}");

    map_response::<ColorPaletteResponse>(response)
        .await
        .palette
        .into_iter()
        .map(|c| c.into_inner())
        .collect()
}

async fn error(app: &TestHttpApp, uri: &str, status: StatusCode) -> String {
    let response = app.get(uri).await;
    assert_eq!(response.status(), status, "{uri}");

    map_response::<ErrorResponse>(response).await.error
}

#[tokio::test]
async fn http_not_found() {
    let app = TestHttpApp::new();

    assert_eq!(
        error(&app, "/does_not_exist", StatusCode::NOT_FOUND).await,
        "Not found"
    );
    assert_eq!(
        error(&app, "/api/animals/extra", StatusCode::NOT_FOUND).await,
        "Not found"
    );
}

#[tokio::test]
async fn http_config() {
    let app = TestHttpApp::new();

    let response = app.get("/config").await;
    assert!(response.status().is_success());

    let config: Config = map_response(response).await;
    assert_eq!(config.port, app.inner.config.port);
    assert_eq!(
        config.default_palette_points,
        app.inner.config.default_palette_points
    );
}

#[tokio::test]
async fn http_health() {
    let app = TestHttpApp::new();

    let response = app.get("/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let health: HealthResponse = map_response(response).await;
    assert_eq!(health.status, "ok");
    assert_eq!(health.word_lists, 8);
}

#[tokio::test]
async fn http_hello() {
    let app = TestHttpApp::new();

    let response = app.get("/hello/world").await;
    assert_eq!(response.status(), StatusCode::OK);

    let hello: HelloResponse = map_response(response).await;
    assert_eq!(hello.message, "Hello world!");

    let hello: HelloResponse = map_response(app.get("/hello/dear%20reader").await).await;
    assert_eq!(hello.message, "Hello dear reader!");
}

#[tokio::test]
async fn http_root_redirects_to_docs() {
    let app = TestHttpApp::new();

    let response = app.get("/").await;
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()["location"], "/swagger-ui");

    let response = app.get("/api-docs/openapi.json").await;
    assert_eq!(response.status(), StatusCode::OK);
    let doc: serde_json::Value = map_response(response).await;
    assert!(doc["paths"]["/api/color-palette"].is_object());
    assert!(doc["paths"]["/api/{category}"].is_object());
}

#[tokio::test]
async fn http_word_by_category() {
    let app = zeros();

    let response = app.get("/api/animals").await;
    assert_eq!(response.status(), StatusCode::OK);

    let word: WordEntry = map_response(response).await;
    assert_eq!(word.name, "Aardvark");
    assert_eq!(word.category.as_deref(), Some("animals"));

    // every category is served
    for category in WordCategory::ALL {
        let response = app.get(&format!("/api/{category}")).await;
        assert_eq!(response.status(), StatusCode::OK, "{category}");
    }
}

#[tokio::test]
async fn http_word_errors() {
    let lists = BTreeMap::from([("fish".to_string(), Vec::new())]);
    let app = TestHttpApp::new_with_sources(
        TestApp::new(),
        Arc::new(StaticWordSource::new(lists)),
        Arc::new(ThreadRandom),
    );

    assert_eq!(
        error(&app, "/api/dinosaurs", StatusCode::NOT_FOUND).await,
        "Category not found"
    );
    assert_eq!(
        error(&app, "/api/fish", StatusCode::NOT_FOUND).await,
        "No fish found"
    );
    assert_eq!(
        error(&app, "/api/birds", StatusCode::NOT_FOUND).await,
        "No birds found"
    );
    assert_eq!(
        error(&app, "/api/random-noun", StatusCode::NOT_FOUND).await,
        "No nouns found"
    );
    assert_eq!(
        error(&app, "/api/random-verb", StatusCode::NOT_FOUND).await,
        "No verbs found"
    );
    assert_eq!(
        error(&app, "/api/random", StatusCode::NOT_FOUND).await,
        "Not enough data for random response"
    );
}

#[tokio::test]
async fn http_random_noun_and_verb() {
    let app = zeros();

    let noun: WordEntry = map_response(app.get("/api/random-noun").await).await;
    assert_eq!(noun.name, "Table");
    assert_eq!(noun.part_of_speech.as_deref(), Some("noun"));

    let verb: WordEntry = map_response(app.get("/api/random-verb").await).await;
    assert_eq!(verb.name, "Jump");
    assert_eq!(verb.part_of_speech.as_deref(), Some("verb"));
}

#[tokio::test]
async fn http_random_color() {
    let app = TestHttpApp::new_with_rng(Arc::new(SequenceRandom::new(vec![0.5])));

    let color: RandomColorResponse = map_response(app.get("/api/color?format=rgba").await).await;
    assert_eq!(color.format, ColorFormat::Rgba);
    assert_eq!(&*color.color, "rgba(128,128,128,0.5)");

    let color: RandomColorResponse = map_response(app.get("/api/color?format=HEX").await).await;
    assert_eq!(color.format, ColorFormat::Hex);
    assert_eq!(&*color.color, "#800000");

    let color: RandomColorResponse = map_response(app.get("/api/color?format=oklch").await).await;
    assert_eq!(color.format, ColorFormat::Oklch);
    assert_eq!(&*color.color, "oklch(50% 0.2 180)");

    // no format picks one at random, index 1 of [hex, rgba, oklch]
    let color: RandomColorResponse = map_response(app.get("/api/color").await).await;
    assert_eq!(color.format, ColorFormat::Rgba);

    assert_eq!(
        error(&app, "/api/color?format=cmyk", StatusCode::BAD_REQUEST).await,
        "Unknown color format 'cmyk', expected one of: hex, rgba, oklch"
    );
}

#[tokio::test]
async fn http_color_palette() {
    let app = TestHttpApp::new();

    assert_eq!(
        palette(
            &app,
            "/api/color-palette?from=rgba(10,20,30,1)&to=rgba(50,60,70,1)&points=3"
        )
        .await,
        ["rgba(10,20,30,1)", "rgba(30,40,50,1)", "rgba(50,60,70,1)"]
    );

    assert_eq!(
        palette(
            &app,
            "/api/color-palette?from=%23000000&to=%23ffffff&points=3&format=hex"
        )
        .await,
        ["#000000", "#808080", "#ffffff"]
    );

    // mixed inputs, single point is just the start
    assert_eq!(
        palette(
            &app,
            "/api/color-palette?from=%23ff0000&to=rgba(0,0,255,0.5)&points=1"
        )
        .await,
        ["rgba(255,0,0,1)"]
    );

    // the configured default size
    assert_eq!(
        palette(&app, "/api/color-palette?from=%23000000&to=%23ffffff")
            .await
            .len(),
        app.inner.config.default_palette_points
    );
}

#[tokio::test]
async fn http_color_palette_random_endpoints() {
    let app = zeros();

    assert_eq!(
        palette(&app, "/api/color-palette?points=2").await,
        ["rgba(0,0,0,0)", "rgba(0,0,0,0)"]
    );
    assert_eq!(
        palette(&app, "/api/color-palette?points=2&format=hex&to=%23ffffff").await,
        ["#000000", "#ffffff"]
    );
}

#[tokio::test]
async fn http_color_palette_errors() {
    let app = TestHttpApp::new();

    for uri in [
        "/api/color-palette?from=%23zzzzzz&to=%23ffffff",
        "/api/color-palette?from=%23fff&to=%23ffffff",
        "/api/color-palette?from=rgba(300,0,0,1)&to=%23ffffff",
        "/api/color-palette?from=rgba(0,0,0,2)&to=%23ffffff",
        "/api/color-palette?from=rgba(0,%200,%200,%201)&to=%23ffffff",
        "/api/color-palette?from=oklch(50%25%200.2%20200)&to=%23ffffff",
        "/api/color-palette?points=0",
        "/api/color-palette?points=abc",
        "/api/color-palette?points=100000",
        "/api/color-palette?format=cmyk",
    ] {
        error(&app, uri, StatusCode::BAD_REQUEST).await;
    }
}

#[tokio::test]
async fn http_random_everything() {
    let app = zeros();

    let response = app.get("/api/random").await;
    assert_eq!(response.status(), StatusCode::OK);

    let everything: RandomEverythingResponse = map_response(response).await;
    assert_eq!(everything.animal.name, "Aardvark");
    assert_eq!(everything.fish.name, "Anchovy");
    assert_eq!(everything.fruit.name, "Apple");
    assert_eq!(everything.bird.name, "Albatross");
    assert_eq!(everything.verb.name, "Jump");
    assert_eq!(everything.noun.name, "Table");
    assert_eq!(everything.palette.palette.len(), 5);
    assert!(everything
        .description
        .starts_with("Aardvark with Anchovy, Apple, Albatross doing Jump and Table in color #000000"));
}

#[tokio::test]
async fn http_word_list_extra_fields_pass_through() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("animals.json"),
        r#"[{"name": "Okapi", "emoji": "x", "habitat": "forest"}]"#,
    )
    .unwrap();

    let app = TestHttpApp::new_with_sources(
        TestApp::new(),
        Arc::new(StaticWordSource::from_dir(dir.path()).unwrap()),
        Arc::new(ThreadRandom),
    );

    let response = app.get("/api/animals").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = map_response(response).await;
    assert_eq!(
        body,
        serde_json::json!({
            "name": "Okapi",
            "category": "animals",
            "emoji": "x",
            "habitat": "forest"
        })
    );
}

#[tokio::test]
async fn http_part_of_speech_as_category() {
    let app = zeros();

    let noun: WordEntry = map_response(app.get("/api/noun").await).await;
    assert_eq!(noun.name, "Table");
    assert_eq!(noun.part_of_speech.as_deref(), Some("noun"));

    let verb: WordEntry = map_response(app.get("/api/verb").await).await;
    assert_eq!(verb.name, "Jump");

    let lists = BTreeMap::from([("noun".to_string(), Vec::new())]);
    let app = TestHttpApp::new_with_sources(
        TestApp::new(),
        Arc::new(StaticWordSource::new(lists)),
        Arc::new(ThreadRandom),
    );
    assert_eq!(
        error(&app, "/api/noun", StatusCode::NOT_FOUND).await,
        "No noun found"
    );
}

#[tokio::test]
async fn http_malformed_query_is_json() {
    let app = TestHttpApp::new();

    for uri in [
        "/api/color-palette?from=%23000000&from=%23ffffff",
        "/api/color?format=hex&format=rgba",
    ] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(
            response.headers()["content-type"],
            "application/json",
            "{uri}"
        );

        let body: ErrorResponse = map_response(response).await;
        assert!(body.error.contains("duplicate field"), "{}", body.error);
    }
}
