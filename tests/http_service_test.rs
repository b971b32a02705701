use infohub::{
    CompletionService, Error, HttpCompletionService, QueryRequest, QueryResult, ResponseSchema,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn service_for(server: &MockServer) -> HttpCompletionService {
    HttpCompletionService::new("test-key".to_string(), server.uri())
        .expect("failed to create client")
}

fn weather_request() -> QueryRequest {
    QueryRequest::new("Get the current weather for Paris.")
        .unwrap()
        .with_internet_context()
        .with_schema(
            ResponseSchema::object()
                .string("city")
                .number("temperature"),
        )
}

#[tokio::test]
async fn test_structured_invoke_round_trip() {
    let server = MockServer::start().await;

    let expected_body = json!({
        "prompt": "Get the current weather for Paris.",
        "add_context_from_internet": true,
        "response_json_schema": {
            "type": "object",
            "properties": {
                "city": { "type": "string" },
                "temperature": { "type": "number" }
            }
        }
    });

    Mock::given(method("POST"))
        .and(path("/integrations/invoke-llm"))
        .and(header("Authorization", "Bearer test-key"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "city": "Paris",
            "temperature": 22.0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = service_for(&server)
        .invoke(&weather_request())
        .await
        .expect("invoke should succeed");

    assert_eq!(result.text("city"), Some("Paris"));
    assert_eq!(result.number("temperature"), Some(22.0));
}

#[tokio::test]
async fn test_schema_violating_body_is_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/integrations/invoke-llm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "city": "Paris",
            "temperature": "warm"
        })))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .invoke(&weather_request())
        .await
        .expect_err("type mismatch must fail");
    assert!(matches!(err, Error::SchemaMismatch(_)));
}

#[tokio::test]
async fn test_non_object_body_is_rejected_when_schema_requested() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/integrations/invoke-llm"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["not", "an", "object"])))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .invoke(&weather_request())
        .await
        .expect_err("non-object must fail");
    assert!(matches!(err, Error::SchemaMismatch(_)));
}

#[tokio::test]
async fn test_malformed_body_is_a_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/integrations/invoke-llm"))
        .respond_with(ResponseTemplate::new(200).set_body_string("definitely not json"))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .invoke(&weather_request())
        .await
        .expect_err("unparseable body must fail");
    assert!(matches!(err, Error::Service { .. }));
}

#[tokio::test]
async fn test_error_status_is_a_service_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/integrations/invoke-llm"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .invoke(&weather_request())
        .await
        .expect_err("500 must fail");
    match err {
        Error::Service { message } => {
            assert!(message.contains("500"));
            assert!(message.contains("upstream exploded"));
        }
        other => panic!("expected service error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_schema_less_invoke_returns_body_text_verbatim() {
    let server = MockServer::start().await;

    let expected_body = json!({
        "prompt": "Say something nice.",
        "add_context_from_internet": false
    });

    Mock::given(method("POST"))
        .and(path("/integrations/invoke-llm"))
        .and(body_json(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_string("You are doing great."))
        .expect(1)
        .mount(&server)
        .await;

    let request = QueryRequest::new("Say something nice.").unwrap();
    let result = service_for(&server)
        .invoke(&request)
        .await
        .expect("invoke should succeed");

    assert_eq!(result, QueryResult::Text("You are doing great.".to_string()));
}
