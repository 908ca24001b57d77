use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use advertorial::application::ai::{AiGenerateError, AiPageGenerator, ProductBrief, TonePreset};
use advertorial::application::generator::Archetype;
use advertorial::config::ModelSettings;
use advertorial::domain::id::BlockIdGenerator;
use advertorial::infra::model::HttpCompletionClient;

fn settings_for(server: &MockServer) -> ModelSettings {
    let mut settings = ModelSettings::new("sk-test");
    settings.base_url = server.uri();
    settings
}

fn brief() -> ProductBrief {
    ProductBrief {
        title: "Glow Serum".into(),
        description: Some("A brightening serum with vitamin C.".into()),
        proof_points: vec!["93% saw brighter skin in 4 weeks".into()],
        ..ProductBrief::default()
    }
}

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ]
    })
}

#[tokio::test]
async fn generates_a_page_from_a_fenced_completion() {
    let server = MockServer::start().await;
    let content = "```json\n[\
        {\"type\":\"headline\",\"text\":\"Why Glow Serum Works\"},\
        {\"type\":\"text\",\"text\":\"Vitamin C at 15%.\"},\
        {\"type\":\"disclaimer\",\"text\":\"This is an advertisement.\"}\
    ]\n```";

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer sk-test"))
        .and(body_partial_json(json!({ "model": "gpt-4o-mini" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body(content)))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpCompletionClient::new(settings_for(&server)).expect("client");
    let generator = AiPageGenerator::new(client, &settings_for(&server));
    let ids = BlockIdGenerator::new();

    let blocks = generator
        .generate(&brief(), TonePreset::Conversational, Archetype::Minimal, &ids)
        .await
        .expect("generate");

    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[0].type_tag(), "headline");
    assert_eq!(blocks[2].type_tag(), "disclaimer");
    assert!(blocks.iter().all(|b| !b.id.is_empty()));
}

#[tokio::test]
async fn prompt_carries_brief_facts_and_archetype_ordering() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("[]")))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpCompletionClient::new(settings_for(&server)).expect("client");
    let generator = AiPageGenerator::new(client, &settings_for(&server));
    let ids = BlockIdGenerator::new();

    generator
        .generate(&brief(), TonePreset::Scientific, Archetype::Minimal, &ids)
        .await
        .expect("generate");

    let requests = server.received_requests().await.expect("recording enabled");
    let request: &Request = &requests[0];
    let body: serde_json::Value = serde_json::from_slice(&request.body).expect("json body");

    let system = body["messages"][0]["content"].as_str().expect("system text");
    assert!(system.contains("1. headline"));
    assert!(system.contains("3. disclaimer"));

    let user = body["messages"][1]["content"].as_str().expect("user text");
    assert!(user.contains("Glow Serum"));
    assert!(user.contains("93% saw brighter skin in 4 weeks"));
}

#[tokio::test]
async fn service_error_surfaces_as_model_call_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = HttpCompletionClient::new(settings_for(&server)).expect("client");
    let generator = AiPageGenerator::new(client, &settings_for(&server));
    let ids = BlockIdGenerator::new();

    let err = generator
        .generate(&brief(), TonePreset::Urgent, Archetype::Narrative, &ids)
        .await
        .expect_err("429 must fail");
    match err {
        AiGenerateError::ModelCall(inner) => {
            assert!(inner.to_string().contains("429"), "{inner}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn empty_choice_list_is_a_model_call_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = HttpCompletionClient::new(settings_for(&server)).expect("client");
    let generator = AiPageGenerator::new(client, &settings_for(&server));
    let ids = BlockIdGenerator::new();

    let err = generator
        .generate(&brief(), TonePreset::Editorial, Archetype::Report, &ids)
        .await
        .expect_err("empty choices must fail");
    assert!(matches!(err, AiGenerateError::ModelCall(_)));
}
