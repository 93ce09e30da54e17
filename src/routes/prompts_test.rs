use super::*;
use crate::state::test_helpers;
use serde_json::{Value, json};

const LONG_STRUCTURE: &str = r#"{"subject":{"en":["a cat","sitting"],"cn":["一只猫","坐着"]},"style":{"en":["oil painting"],"cn":["油画"]}}"#;

fn seeded_state() -> AppState {
    let mut first = test_helpers::record(1, "A cat on a sofa");
    first.prompt_cn = Some("沙发上的猫".into());
    first.image_url = Some("https://host.com/cat.png".into());
    first.structure = Some(json!(LONG_STRUCTURE));

    let no_structure = test_helpers::record(2, "Unstructured");

    let mut short = test_helpers::record(4, "Short structure");
    short.structure = Some(json!("{}"));

    test_helpers::test_app_state(vec![first, no_structure, short])
}

async fn error_body(err: ApiError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// =============================================================================
// GET /api/prompt/:id
// =============================================================================

#[tokio::test]
async fn get_prompt_returns_record_as_stored() {
    let Json(record) = get_prompt(State(seeded_state()), Path(1)).await.unwrap();
    assert_eq!(record.id, 1);
    assert_eq!(record.structure, Some(json!(LONG_STRUCTURE)));
}

#[tokio::test]
async fn get_prompt_missing_is_404() {
    let err = get_prompt(State(seeded_state()), Path(99)).await.unwrap_err();
    let (status, body) = error_body(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Prompt not found"}));
}

#[tokio::test]
async fn get_prompt_store_failure_is_500() {
    let err = get_prompt(State(test_helpers::failing_app_state()), Path(1)).await.unwrap_err();
    let (status, body) = error_body(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Internal Server Error"}));
}

// =============================================================================
// GET /api/prompt/:id/next
// =============================================================================

#[tokio::test]
async fn next_prompt_skips_records_without_structure() {
    let Json(next) = next_prompt_id(State(seeded_state()), Path(1)).await.unwrap();
    assert_eq!(next, NextIdResponse { next_id: 4 });
    assert_eq!(serde_json::to_value(&next).unwrap(), json!({"nextId": 4}));
}

#[tokio::test]
async fn next_prompt_past_end_is_404() {
    let err = next_prompt_id(State(seeded_state()), Path(4)).await.unwrap_err();
    let (status, body) = error_body(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"message": "No more prompts available"}));
}

#[tokio::test]
async fn next_prompt_store_failure_is_500() {
    let err = next_prompt_id(State(test_helpers::failing_app_state()), Path(1)).await.unwrap_err();
    let (status, body) = error_body(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"message": "Internal Server Error"}));
}

// =============================================================================
// GET /api/prompt/random
// =============================================================================

#[tokio::test]
async fn random_prompt_only_picks_long_structures() {
    let Json(random) = random_prompt_id(State(seeded_state())).await.unwrap();
    assert_eq!(random, RandomIdResponse { id: 1 });
}

#[tokio::test]
async fn random_prompt_without_candidates_is_404() {
    let state = test_helpers::test_app_state(vec![test_helpers::record(1, "Unstructured")]);
    let err = random_prompt_id(State(state)).await.unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn random_prompt_store_failure_is_500() {
    let err = random_prompt_id(State(test_helpers::failing_app_state())).await.unwrap_err();
    let (status, body) = error_body(err).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({"error": "Failed to fetch random prompt"}));
}

// =============================================================================
// GET /api/prompt/:id/graph
// =============================================================================

#[tokio::test]
async fn graph_defaults_to_english() {
    let Json(graph) = prompt_graph(State(seeded_state()), Path(1), Query(GraphQuery::default())).await.unwrap();
    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["root", "image-node", "field-subject", "item-subject-0", "item-subject-1", "field-style", "item-style-0"]
    );
    assert_eq!(graph.edges.len(), 6);
    assert_eq!(graph.nodes[0].data.label, "A cat on a sofa");
    assert_eq!(graph.nodes[1].data.image_url.as_deref(), Some("https://host.com/midjourney/cat.png"));
}

#[tokio::test]
async fn graph_in_chinese_uses_localized_text() {
    let mut state = seeded_state();
    state.labels = std::sync::Arc::new([("style".to_string(), "风格".to_string())].into_iter().collect());

    let Json(graph) = prompt_graph(State(state), Path(1), Query(GraphQuery { lang: Language::Cn })).await.unwrap();
    let label = |id: &str| graph.nodes.iter().find(|n| n.id == id).map(|n| n.data.label.clone());
    assert_eq!(label("root").as_deref(), Some("沙发上的猫"));
    assert_eq!(label("field-style").as_deref(), Some("风格"));
    assert_eq!(label("field-subject").as_deref(), Some("subject"));
    assert_eq!(label("item-subject-1").as_deref(), Some("坐着"));
}

#[tokio::test]
async fn graph_for_record_without_structure_is_root_only() {
    let Json(graph) = prompt_graph(State(seeded_state()), Path(2), Query(GraphQuery::default())).await.unwrap();
    assert_eq!(graph.nodes.len(), 1);
    assert!(graph.edges.is_empty());
}

#[tokio::test]
async fn graph_missing_record_is_404() {
    let err = prompt_graph(State(seeded_state()), Path(42), Query(GraphQuery::default())).await.unwrap_err();
    assert_eq!(err.status, StatusCode::NOT_FOUND);
}

#[test]
fn graph_query_parses_lang() {
    let query: GraphQuery = serde_json::from_value(json!({"lang": "cn"})).unwrap();
    assert_eq!(query.lang, Language::Cn);
    let query: GraphQuery = serde_json::from_value(json!({})).unwrap();
    assert_eq!(query.lang, Language::En);
}
