// Integration tests for CalcClient against a stub calculator service

use calcload_client::{CalcClient, ClientError, RemoteError};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_evaluate_decodes_successful_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("expr", "6*7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"result": 42, "error": "", "expr": "6*7"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = CalcClient::new(&server.uri()).unwrap();
    let result = client.evaluate("6*7").await.unwrap();

    assert_eq!(result.value, 42);
    assert_eq!(result.error, None);
    assert_eq!(result.expr, "6*7");
}

#[tokio::test]
async fn test_evaluate_reconstructs_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"result": 0, "error": "division by zero", "expr": "1/0"})),
        )
        .mount(&server)
        .await;

    let client = CalcClient::new(&server.uri()).unwrap();
    let result = client.evaluate("1/0").await.unwrap();

    assert_eq!(result.value, 0);
    assert_eq!(
        result.error,
        Some(RemoteError {
            message: "division by zero".to_string()
        })
    );
}

// The stub decodes the query parameter server-side; matching on the decoded
// value proves the expression survives one round of percent-encoding.
#[tokio::test]
async fn test_expression_round_trips_through_query_encoding() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("expr", "12+7"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"result": 19, "error": "", "expr": "12+7"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = CalcClient::new(&server.uri()).unwrap();
    let result = client.evaluate("12+7").await.unwrap();

    assert_eq!(result.value, 19);
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"result":42,"#))
        .mount(&server)
        .await;

    let client = CalcClient::new(&server.uri()).unwrap();
    let err = client.evaluate("1+1").await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
}

#[tokio::test]
async fn test_server_error_status_is_a_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = CalcClient::new(&server.uri()).unwrap();
    let err = client.evaluate("1+1").await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn test_unreachable_service_is_a_transport_error() {
    // nothing listens here; connection is refused immediately
    let client = CalcClient::new("http://127.0.0.1:1/").unwrap();
    let err = client.evaluate("1+1").await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
}
