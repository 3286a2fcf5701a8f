//! HTTP 翻译客户端测试

use mt_compare::domain::error::CompareError;
use mt_compare::domain::model::ModelId;
use mt_compare::domain::traits::Translator;
use mt_compare::infrastructure::config::Config;
use mt_compare::infrastructure::network::client::{check_health, HttpTranslator};
use mt_compare::infrastructure::network::http::create_client;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn translator(server: &MockServer) -> HttpTranslator {
    let client = create_client(&Config::default()).expect("client should build");
    HttpTranslator::new(client, server.uri())
}

#[tokio::test]
async fn test_posts_json_to_model_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate/google"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "text": "good morning" })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "translation": "bonjour", "model": "google" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = translator(&server)
        .translate(ModelId::Google, "good morning")
        .await
        .expect("translation should succeed");

    assert_eq!(response.translation, "bonjour");
    assert_eq!(response.model, "google");
}

#[tokio::test]
async fn test_429_is_rate_limit() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate/bart"))
        .respond_with(
            ResponseTemplate::new(429)
                .set_body_json(json!({ "error": "Rate limit exceeded: 10 per 1 minute" })),
        )
        .mount(&server)
        .await;

    let err = translator(&server)
        .translate(ModelId::Bart, "hello")
        .await
        .unwrap_err();

    assert!(err.is_rate_limit());
    assert_eq!(
        err.to_string(),
        "Rate limit exceeded for bart translation. Please wait a minute before trying again."
    );
}

#[tokio::test]
async fn test_other_status_is_generic_failure_with_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate/seq2seq"))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({ "detail": "Seq2seq model is not loaded" })),
        )
        .mount(&server)
        .await;

    let err = translator(&server)
        .translate(ModelId::Seq2seq, "hello")
        .await
        .unwrap_err();

    assert!(!err.is_rate_limit());
    assert_eq!(err.to_string(), "seq2seq translation failed: HTTP 503");
    match err {
        CompareError::Failed { model, status, detail } => {
            assert_eq!(model, ModelId::Seq2seq);
            assert_eq!(status, 503);
            assert_eq!(detail.as_deref(), Some("Seq2seq model is not loaded"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_error_body_has_no_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate/bart"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = translator(&server)
        .translate(ModelId::Bart, "hello")
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        CompareError::Failed {
            status: 500,
            detail: None,
            ..
        }
    ));
}

#[tokio::test]
async fn test_malformed_success_body_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/translate/google"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not valid json"))
        .mount(&server)
        .await;

    let err = translator(&server)
        .translate(ModelId::Google, "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, CompareError::Json(_)));
    assert!(!err.is_rate_limit());
}

#[test]
fn test_endpoint_trims_trailing_slash() {
    let translator = HttpTranslator::new(reqwest::Client::new(), "http://localhost:8000/");

    assert_eq!(translator.base_url(), "http://localhost:8000");
    assert_eq!(
        translator.endpoint(ModelId::Seq2seq),
        "http://localhost:8000/translate/seq2seq"
    );
}

#[tokio::test]
async fn test_health_check() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "healthy",
            "version": "1.0.1",
            "device": "cpu"
        })))
        .mount(&server)
        .await;

    let health = check_health(&reqwest::Client::new(), &server.uri())
        .await
        .expect("health should succeed");

    assert_eq!(health.status, "healthy");
    assert_eq!(health.version, "1.0.1");
    assert_eq!(health.device, "cpu");
}

#[tokio::test]
async fn test_health_check_missing_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "healthy" })))
        .mount(&server)
        .await;

    let err = check_health(&reqwest::Client::new(), &server.uri())
        .await
        .unwrap_err();

    assert!(matches!(err, CompareError::Json(_)));
}

#[tokio::test]
async fn test_health_check_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let err = check_health(&reqwest::Client::new(), &server.uri())
        .await
        .unwrap_err();

    assert!(matches!(err, CompareError::Unhealthy(502)));
}
