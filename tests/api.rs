use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use sentiment_predictor::client::RemoteClient;
use sentiment_predictor::server::{self, cors::CorsPolicy, gateway};
use sentiment_predictor::{SentimentClassifier, SentimentClient, SentimentLabel};
use serde_json::{Value, json};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceExt;

const ALLOWED_ORIGIN: &str = "http://localhost:5173";

fn model_router() -> Router {
    server::router(Arc::new(SentimentClassifier::default()))
}

fn gateway_router(model_addr: SocketAddr) -> Router {
    let state = gateway::GatewayState::new(&format!("http://{}", model_addr)).unwrap();
    let policy = CorsPolicy::new(vec![ALLOWED_ORIGIN.to_string()]);
    gateway::router(state, policy)
}

/// Start the model service on an ephemeral port
async fn spawn_model_service() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, model_router()).await.unwrap();
    });
    addr
}

/// An address nothing is listening on
async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

fn json_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

async fn predict(text: &str) -> Value {
    let body = json!({ "text": text }).to_string();
    let (status, body) = send(model_router(), json_request("/predict", &body)).await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn test_hate_you_is_very_negative() {
    for text in ["hate you", "I HATE YOU", "honestly, I hate you!"] {
        let body = predict(text).await;
        assert_eq!(body, json!({ "sentiment": "Very Negative", "score": -0.90 }), "{text}");
    }
}

#[tokio::test]
async fn test_love_you_in_shouted_sentence() {
    let body = predict("I LOVE YOU SO MUCH").await;
    assert_eq!(body, json!({ "sentiment": "Very Positive", "score": 0.95 }));
}

#[tokio::test]
async fn test_table_order_decides_between_phrases() {
    let body = predict("I love you, but this weather is terrible").await;
    assert_eq!(body, json!({ "sentiment": "Very Negative", "score": -0.80 }));
}

#[tokio::test]
async fn test_fallback_uses_analyzer() {
    let body = predict("The weather is fine today").await;
    assert_eq!(body["sentiment"], "Positive");
    let score = body["score"].as_f64().unwrap();
    assert!((score - 0.4167).abs() < 1e-3, "score was {score}");
}

#[tokio::test]
async fn test_empty_text_is_neutral() {
    let body = predict("").await;
    assert_eq!(body, json!({ "sentiment": "Neutral", "score": 0.0 }));
}

#[tokio::test]
async fn test_missing_text_is_client_error() {
    let (status, _) = send(model_router(), json_request("/predict", "{}")).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(model_router(), json_request("/predict", r#"{"text": 42}"#)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_json_is_client_error() {
    let (status, _) = send(model_router(), json_request("/predict", "{\"text\": ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let request = Request::builder()
        .method(Method::POST)
        .uri("/predict")
        .body(Body::from("text=hello"))
        .unwrap();
    let (status, _) = send(model_router(), request).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_only_post_predict_is_routed() {
    let request = Request::builder()
        .uri("/predict")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(model_router(), request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);

    let (status, _) = send(model_router(), json_request("/classify", r#"{"text": "hi"}"#)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_gateway_forwards_to_model_service() {
    let model_addr = spawn_model_service().await;

    let mut request = json_request("/api/predict", r#"{"text": "I hate you"}"#);
    request
        .headers_mut()
        .insert(header::ORIGIN, ALLOWED_ORIGIN.parse().unwrap());

    let response = gateway_router(model_addr).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        ALLOWED_ORIGIN
    );
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_CREDENTIALS],
        "true"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "sentiment": "Very Negative", "score": -0.90 }));
}

#[tokio::test]
async fn test_gateway_reports_unreachable_model() {
    let router = gateway_router(unused_addr().await);
    let (status, body) = send(router, json_request("/api/predict", r#"{"text": "hello"}"#)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "ML model request failed" }));
}

#[tokio::test]
async fn test_gateway_maps_upstream_rejection_to_failure() {
    let model_addr = spawn_model_service().await;
    let (status, body) = send(gateway_router(model_addr), json_request("/api/predict", "{}")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "ML model request failed" }));
}

#[tokio::test]
async fn test_gateway_rejects_non_json_body_before_forwarding() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/predict")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("hello"))
        .unwrap();
    let (status, _) = send(gateway_router(unused_addr().await), request).await;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_gateway_preflight() {
    let router = gateway_router(unused_addr().await);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/predict")
        .header(header::ORIGIN, ALLOWED_ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], ALLOWED_ORIGIN);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "GET, POST, OPTIONS");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/predict")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn test_remote_client_round_trip() {
    let model_addr = spawn_model_service().await;
    let client = RemoteClient::new(format!("http://{}/predict", model_addr)).unwrap();

    let prediction = client.predict("I LOVE YOU SO MUCH").await.unwrap();
    assert_eq!(prediction.sentiment, SentimentLabel::VeryPositive);
    assert_eq!(prediction.score, 0.95);

    let prediction = client.predict("").await.unwrap();
    assert_eq!(prediction.sentiment, SentimentLabel::Neutral);
}

#[tokio::test]
async fn test_remote_client_surfaces_server_errors() {
    let model_addr = spawn_model_service().await;
    let client = RemoteClient::new(format!("http://{}/missing", model_addr)).unwrap();

    let err = client.predict("hello").await.unwrap_err();
    assert!(err.to_string().contains("Server error: 404"));
}
