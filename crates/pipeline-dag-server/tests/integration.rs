//! Integration tests for pipeline-dag-server.
//!
//! These drive the full router in-process, including the CORS and body-limit
//! layers, to verify:
//! - The liveness and schema endpoints
//! - Pipeline analysis results on the wire
//! - Client-error rejection of malformed bodies
//! - Cross-origin behavior for the configured origin

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use pipeline_dag_server::{PipelineServer, ServerConfig};
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

mod helpers {
    use super::*;

    /// Router built from the default configuration.
    pub fn app() -> Router {
        app_with(ServerConfig::default())
    }

    pub fn app_with(config: ServerConfig) -> Router {
        PipelineServer::new(config)
            .expect("config should be valid")
            .router()
    }

    /// Send a request and decode the JSON response body (Null when empty).
    pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.expect("request should complete");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should be readable")
            .to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("body should be JSON")
        };
        (status, body)
    }

    pub fn post_json(body: &Value) -> Request<Body> {
        post_raw(&body.to_string())
    }

    pub fn post_raw(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/pipelines/parse")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build")
    }

    pub fn node(id: &str) -> Value {
        json!({
            "id": id,
            "type": "customInput",
            "position": {"x": 0.0, "y": 0.0},
            "data": {"id": id, "nodeType": "customInput"}
        })
    }

    pub fn edge(source: &str, target: &str) -> Value {
        json!({
            "id": format!("{source}->{target}"),
            "source": source,
            "target": target,
            "sourceHandle": format!("{source}-output"),
            "targetHandle": null
        })
    }

    pub fn pipeline(nodes: &[&str], edges: &[(&str, &str)]) -> Value {
        json!({
            "nodes": nodes.iter().map(|id| node(id)).collect::<Vec<_>>(),
            "edges": edges.iter().map(|(s, t)| edge(s, t)).collect::<Vec<_>>(),
        })
    }
}

use helpers::*;

// =========================================================================
// Liveness & Schema
// =========================================================================

#[tokio::test]
async fn test_ping() {
    let request = Request::get("/").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"Ping": "Pong"}));
}

#[tokio::test]
async fn test_schema_endpoint() {
    let request = Request::get("/schema").body(Body::empty()).unwrap();
    let (status, body) = send(app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["request"]["properties"]["edges"].is_object());
    assert!(body["response"]["properties"]["num_nodes"].is_object());
}

#[tokio::test]
async fn test_unknown_route() {
    let request = Request::get("/pipelines").body(Body::empty()).unwrap();
    let (status, _) = send(app(), request).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// =========================================================================
// Pipeline Analysis
// =========================================================================

#[rstest]
#[case::parallel_edges(&["A", "B"], &[("A", "B"), ("A", "B")], true)]
#[case::self_loop(&["A"], &[("A", "A")], false)]
#[case::chain(&["A", "B", "C"], &[("A", "B"), ("B", "C")], true)]
#[case::cycle(&["A", "B", "C"], &[("A", "B"), ("B", "C"), ("C", "A")], false)]
#[case::diamond(&["A", "B", "C", "D"], &[("A", "B"), ("A", "C"), ("B", "D"), ("C", "D")], true)]
#[case::dangling(&["A"], &[("A", "ghost"), ("ghost", "A")], true)]
#[tokio::test]
async fn test_parse_pipeline(
    #[case] nodes: &[&str],
    #[case] edges: &[(&str, &str)],
    #[case] is_dag: bool,
) {
    let (status, body) = send(app(), post_json(&pipeline(nodes, edges))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"num_nodes": nodes.len(), "num_edges": edges.len(), "is_dag": is_dag})
    );
}

#[tokio::test]
async fn test_parse_empty_pipeline() {
    let (status, body) = send(app(), post_json(&json!({"nodes": [], "edges": []}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"num_nodes": 0, "num_edges": 0, "is_dag": true}));
}

#[tokio::test]
async fn test_parse_ignores_unknown_fields() {
    let mut body = pipeline(&["A", "B"], &[("A", "B")]);
    body["viewport"] = json!({"x": 0, "y": 0, "zoom": 1});
    body["nodes"][0]["selected"] = json!(true);

    let (status, response) = send(app(), post_json(&body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["is_dag"], json!(true));
}

// =========================================================================
// Rejections
// =========================================================================

#[rstest]
#[case::missing_edges(json!({"nodes": []}))]
#[case::missing_node_type(json!({"nodes": [{"id": "A", "position": {}, "data": {}}], "edges": []}))]
#[case::numeric_id(json!({
    "nodes": [{"id": 1, "type": "t", "position": {}, "data": {}}],
    "edges": []
}))]
#[case::non_numeric_position(json!({
    "nodes": [{"id": "A", "type": "t", "position": {"x": "left"}, "data": {}}],
    "edges": []
}))]
#[case::data_not_object(json!({
    "nodes": [{"id": "A", "type": "t", "position": {}, "data": []}],
    "edges": []
}))]
#[case::edge_missing_target(json!({"nodes": [], "edges": [{"id": "e", "source": "A"}]}))]
#[case::nodes_not_list(json!({"nodes": {}, "edges": []}))]
#[tokio::test]
async fn test_schema_mismatch_is_unprocessable(#[case] body: Value) {
    let (status, response) = send(app(), post_json(&body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response["detail"].as_str().is_some_and(|d| !d.is_empty()));
}

#[tokio::test]
async fn test_invalid_json_is_bad_request() {
    let (status, response) = send(app(), post_raw("{\"nodes\": [")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(response["detail"].is_string());
}

#[tokio::test]
async fn test_missing_content_type() {
    let request = Request::post("/pipelines/parse")
        .body(Body::from(r#"{"nodes": [], "edges": []}"#))
        .unwrap();
    let (status, response) = send(app(), request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(response["detail"].is_string());
}

#[tokio::test]
async fn test_body_limit() {
    let config = ServerConfig {
        max_body_bytes: 64,
        ..ServerConfig::default()
    };
    let body = pipeline(&["A", "B", "C", "D"], &[("A", "B")]);
    let (status, _) = send(app_with(config), post_json(&body)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_get_parse_not_allowed() {
    let request = Request::get("/pipelines/parse").body(Body::empty()).unwrap();
    let (status, _) = send(app(), request).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// =========================================================================
// CORS
// =========================================================================

fn preflight(origin: &str) -> Request<Body> {
    Request::builder()
        .method(Method::OPTIONS)
        .uri("/pipelines/parse")
        .header(header::ORIGIN, origin)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_preflight_from_allowed_origin() {
    let response = app().oneshot(preflight("http://localhost:3000")).await.unwrap();
    let headers = response.headers();

    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://localhost:3000"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
    assert_eq!(headers.get(header::ACCESS_CONTROL_ALLOW_METHODS).unwrap(), "POST");
}

#[tokio::test]
async fn test_preflight_from_other_origin() {
    let response = app().oneshot(preflight("http://evil.example")).await.unwrap();
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn test_post_from_other_origin_has_no_cors_header() {
    let mut request = post_json(&pipeline(&["A", "B"], &[("A", "B")]));
    request
        .headers_mut()
        .insert(header::ORIGIN, "http://evil.example".parse().unwrap());

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}

#[tokio::test]
async fn test_configured_origin() {
    let config = ServerConfig {
        allowed_origin: "https://pipelines.example.com".to_string(),
        ..ServerConfig::default()
    };
    let mut request = post_json(&pipeline(&["A"], &[]));
    request
        .headers_mut()
        .insert(header::ORIGIN, "https://pipelines.example.com".parse().unwrap());

    let response = app_with(config).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://pipelines.example.com"
    );
}
