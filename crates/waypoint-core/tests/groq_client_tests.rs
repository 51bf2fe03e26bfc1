//! GroqClient against a local stand-in for the chat completions endpoint.

use std::{net::SocketAddr, sync::Arc, time::Duration};

use axum::{
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};
use waypoint_core::{
    llm::CompletionRequest, GroqClient, GroqConfig, LlmClient, LlmError, TaskPlanner,
};

/// Serves `router` on an ephemeral port and returns its base URL.
async fn spawn_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("test server failed");
    });
    format!("http://{addr}/openai")
}

fn client_for(base_url: String) -> GroqClient {
    GroqClient::new(
        GroqConfig::new("test-key")
            .with_base_url(base_url)
            .with_timeout(Duration::from_secs(5)),
    )
    .expect("Failed to create client")
}

async fn completion(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        == Some("Bearer test-key");
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "message": "Invalid API Key" } })),
        );
    }

    let prompt = body["messages"][0]["content"].as_str().unwrap_or_default();
    let answer = if prompt.contains("Plan a team offsite") {
        "1. Pick date\n2. Book venue\n3. Send invites"
    } else {
        "I am not sure."
    };

    (
        StatusCode::OK,
        Json(json!({
            "model": body["model"],
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": answer },
                "finish_reason": "stop"
            }],
            "usage": { "prompt_tokens": 40, "completion_tokens": 12 }
        })),
    )
}

#[tokio::test]
async fn test_complete_returns_text_and_usage() {
    let base_url =
        spawn_server(Router::new().route("/openai/v1/chat/completions", post(completion))).await;
    let client = client_for(base_url);

    let response = client
        .complete(CompletionRequest::user("Plan a team offsite"))
        .await
        .expect("completion should succeed");

    assert_eq!(
        response.content.as_deref(),
        Some("1. Pick date\n2. Book venue\n3. Send invites")
    );
    assert_eq!(response.usage.input_tokens, 40);
    assert_eq!(response.usage.output_tokens, 12);
}

#[tokio::test]
async fn test_planner_over_http() {
    let base_url =
        spawn_server(Router::new().route("/openai/v1/chat/completions", post(completion))).await;
    let planner = TaskPlanner::new(Arc::new(client_for(base_url)));

    let plan = planner.plan("Plan a team offsite").await.expect("plan");
    assert_eq!(plan.steps(), ["Pick date", "Book venue", "Send invites"]);

    let err = planner.plan("Something vague").await.unwrap_err();
    assert!(err.is_planning_failure());
}

#[tokio::test]
async fn test_api_error_carries_status_and_message() {
    let base_url =
        spawn_server(Router::new().route("/openai/v1/chat/completions", post(completion))).await;
    let client = GroqClient::new(GroqConfig::new("wrong-key").with_base_url(base_url)).unwrap();

    let err = client
        .complete(CompletionRequest::user("Plan a team offsite"))
        .await
        .unwrap_err();

    match err {
        LlmError::ApiError { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message, "Invalid API Key");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_reports_retry_after() {
    let router = Router::new().route(
        "/openai/v1/chat/completions",
        post(|| async { (StatusCode::TOO_MANY_REQUESTS, [("retry-after", "7")], "slow down") }),
    );
    let client = client_for(spawn_server(router).await);

    let err = client
        .complete(CompletionRequest::user("anything"))
        .await
        .unwrap_err();

    assert_eq!(err.retry_after(), Some(Duration::from_secs(7)));
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let router = Router::new().route(
        "/openai/v1/chat/completions",
        post(|| async { Json(json!({ "unexpected": true })) }),
    );
    let client = client_for(spawn_server(router).await);

    let err = client
        .complete(CompletionRequest::user("anything"))
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::InvalidResponse(_)), "got {err:?}");
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Bind then drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = client_for(format!("http://{addr}/openai"));
    let err = client
        .complete(CompletionRequest::user("anything"))
        .await
        .unwrap_err();

    assert!(matches!(err, LlmError::Network(_)), "got {err:?}");
}
