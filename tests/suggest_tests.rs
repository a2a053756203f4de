use nexus::config::SuggestSettings;
use nexus::model::{AI_GENERATED_TAG, Category, Status, TBD_DATE};
use nexus::storage::Roadmap;
use nexus::suggest::{
    GeminiProvider, IngestState, SuggestionFailure, SuggestionIngestor, SuggestionProvider,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const GENERATE_PATH: &str = "/v1beta/models/gemini-test:generateContent";

fn settings(server: &MockServer) -> SuggestSettings {
    SuggestSettings {
        endpoint: server.uri(),
        model: "gemini-test".to_string(),
        ..Default::default()
    }
}

fn provider(server: &MockServer) -> GeminiProvider {
    GeminiProvider::with_api_key(&settings(server), Some("test-key".to_string())).unwrap()
}

/// Wrap the model's text the way the generateContent endpoint does
fn gemini_reply(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {
                "role": "model",
                "parts": [{ "text": text }]
            },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn test_successful_request_yields_pending_candidates() {
    let server = MockServer::start().await;
    let ideas = json!([
        {
            "title": "Usage Alerts",
            "description": "Notify admins when quotas run low.",
            "category": "Analytics",
            "status": "PLANNED",
            "progress": 0
        },
        {
            "title": "SSO",
            "description": "Sign in with your identity provider.",
            "category": "Identity",
            "status": "SOMEDAY",
            "progress": "lots"
        }
    ]);

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(&ideas.to_string())))
        .expect(1)
        .mount(&server)
        .await;

    let provider = provider(&server);
    let mut ingestor = SuggestionIngestor::default();
    assert!(ingestor.submit(&provider, "A SaaS billing platform").await);

    assert_eq!(ingestor.state(), IngestState::Succeeded);
    assert!(ingestor.failure().is_none());
    assert_eq!(ingestor.pending().len(), 2);

    // Unknown category/status and non-numeric progress are coerced on accept
    let mut roadmap = Roadmap::seeded(9).unwrap();
    let ticket = ingestor.pending()[1].ticket;
    let item = ingestor.accept(ticket, &mut roadmap).unwrap().clone();
    assert_eq!(item.title, "SSO");
    assert_eq!(item.category, Category::CorePlatform);
    assert_eq!(item.status, Status::Planned);
    assert_eq!(item.progress, 0);
    assert_eq!(item.tags, vec![AI_GENERATED_TAG.to_string()]);
    assert_eq!(item.date.as_deref(), Some(TBD_DATE));
    assert_eq!(roadmap.len(), 7);
    assert_eq!(ingestor.pending().len(), 1);
}

#[tokio::test]
async fn test_prompt_carries_user_context() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply("[]")))
        .expect(1)
        .mount(&server)
        .await;

    let mut ingestor = SuggestionIngestor::default();
    assert!(ingestor.submit(&provider(&server), "greenhouse sensors").await);
    assert_eq!(ingestor.state(), IngestState::Succeeded);
    assert!(ingestor.pending().is_empty());

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let prompt = body["contents"][0]["parts"][0]["text"].as_str().unwrap();
    assert!(prompt.contains("greenhouse sensors"));
    assert_eq!(body["generationConfig"]["responseSchema"]["type"], "ARRAY");
}

#[tokio::test]
async fn test_server_error_is_request_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let mut ingestor = SuggestionIngestor::default();
    assert!(ingestor.submit(&provider(&server), "anything").await);

    assert_eq!(ingestor.state(), IngestState::Failed);
    assert_eq!(ingestor.failure(), Some(&SuggestionFailure::Request));
    assert!(ingestor.pending().is_empty());
}

#[tokio::test]
async fn test_non_json_text_is_request_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_reply("Here are some ideas: ...")),
        )
        .mount(&server)
        .await;

    let mut ingestor = SuggestionIngestor::default();
    ingestor.submit(&provider(&server), "anything").await;

    assert_eq!(ingestor.state(), IngestState::Failed);
    assert_eq!(
        ingestor.failure().map(SuggestionFailure::message).as_deref(),
        Some("Failed to generate suggestions. Please check your API key and try again.")
    );
}

#[tokio::test]
async fn test_missing_key_never_reaches_server() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply("[]")))
        .expect(0)
        .mount(&server)
        .await;

    let provider = GeminiProvider::with_api_key(&settings(&server), None).unwrap();
    assert!(provider.ensure_ready().is_err());

    let mut ingestor = SuggestionIngestor::default();
    assert!(ingestor.submit(&provider, "anything").await);

    assert_eq!(ingestor.state(), IngestState::Failed);
    assert_eq!(
        ingestor.failure(),
        Some(&SuggestionFailure::MissingCredential {
            var: "GEMINI_API_KEY".to_string()
        })
    );
}

#[tokio::test]
async fn test_failure_clears_previous_candidates() {
    let server = MockServer::start().await;
    let one_idea = json!([{
        "title": "Webhooks v2",
        "description": "Retries and signing.",
        "category": "Integrations",
        "status": "BACKLOG",
        "progress": 0
    }]);

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(&one_idea.to_string())))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let provider = provider(&server);
    let mut ingestor = SuggestionIngestor::default();

    ingestor.submit(&provider, "first").await;
    assert_eq!(ingestor.pending().len(), 1);

    ingestor.submit(&provider, "second").await;
    assert_eq!(ingestor.state(), IngestState::Failed);
    assert!(ingestor.pending().is_empty());
}
