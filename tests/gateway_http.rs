use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use postbox::error::PostboxError;
use postbox::gateway::http::HttpGateway;
use postbox::gateway::PostBackend;
use postbox::model::PostDraft;

fn gateway_for(server: &MockServer) -> HttpGateway {
    HttpGateway::new(server.uri())
}

#[tokio::test]
async fn list_posts_decodes_the_collection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "title": "A", "body": "x", "userId": 1},
            {"id": 2, "title": "B", "body": "y", "userId": 1},
        ])))
        .mount(&server)
        .await;

    let posts = gateway_for(&server).list_posts().await.unwrap();
    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, 1);
    assert_eq!(posts[0].user_id, Some(1));
}

#[tokio::test]
async fn non_success_status_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = gateway_for(&server).list_posts().await;
    match result {
        Err(PostboxError::Transport(status)) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected transport error, got {:?}", other),
    }
}

#[tokio::test]
async fn create_sends_the_draft_without_an_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/posts"))
        .and(body_json(json!({"title": "T", "body": "b"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": 101, "title": "T", "body": "b"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let echoed = gateway_for(&server)
        .create_post(&PostDraft::new("T", "b"))
        .await
        .unwrap();

    // The mock always answers 101; the store is responsible for real ids.
    assert_eq!(echoed.id, 101);
}

#[tokio::test]
async fn update_puts_to_the_post_resource() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/posts/5"))
        .and(body_json(json!({"title": "T2", "body": "b2"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 5, "title": "T2", "body": "b2"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let echoed = gateway_for(&server)
        .update_post(5, &PostDraft::new("T2", "b2"))
        .await
        .unwrap();
    assert_eq!(echoed.id, 5);
    assert_eq!(echoed.title, "T2");
}

#[tokio::test]
async fn search_filters_on_title_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("title_like", "rust"))
        .and(query_param("body_like", "rust"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 9, "title": "rust posts", "body": "z", "userId": 2},
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let posts = gateway_for(&server).search_posts("rust").await.unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, 9);
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = gateway_for(&server).list_posts().await;
    assert!(matches!(result, Err(PostboxError::Decode(_))));
}
