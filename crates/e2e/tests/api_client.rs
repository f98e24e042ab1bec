//! API client behavior against a mock backend

use std::time::{Duration, Instant};

use serde_json::json;
use test_case::test_case;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use conduit_e2e::{ApiClient, Article, E2eError, User};

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(format!("{}/api/", server.uri()))
}

fn test_user() -> User {
    User {
        username: "alice_0a1b2c3d4e5f".to_string(),
        email: "alice_0a1b2c3d4e5f@example.com".to_string(),
        password: "Sup3rS3cret_0a1b2c3d4e5f".to_string(),
    }
}

#[tokio::test]
async fn register_user_unwraps_the_user_envelope() {
    let server = MockServer::start().await;
    let user = test_user();

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "user": user })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "user": { "username": user.username, "email": user.email }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let registered = client_for(&server).register_user(&user).await.unwrap();
    assert_eq!(registered.username, user.username);
    assert_eq!(registered.email, user.email);
    // The password is carried over from the request; the server never echoes it
    assert_eq!(registered.password, user.password);
}

#[tokio::test]
async fn get_auth_token_returns_the_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users/login"))
        .and(body_json(json!({
            "user": { "email": "alice@example.com", "password": "pw" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": {
                "username": "alice",
                "email": "alice@example.com",
                "token": "jwt.abc.def"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = client_for(&server)
        .get_auth_token("alice@example.com", "pw")
        .await
        .unwrap();
    assert_eq!(token, "jwt.abc.def");
}

#[tokio::test]
async fn create_article_sends_token_header_and_returns_slug() {
    let server = MockServer::start().await;
    let article = Article {
        title: "Hello_0a1b2c3d4e5f".to_string(),
        description: "desc".to_string(),
        body: "body".to_string(),
        tags: vec!["smoke".to_string()],
        slug: None,
    };

    Mock::given(method("POST"))
        .and(path("/api/articles"))
        .and(header("authorization", "Token jwt.abc.def"))
        .and(body_json(json!({
            "article": {
                "title": article.title,
                "description": article.description,
                "body": article.body,
                "tagList": article.tags,
            }
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "article": {
                "title": article.title,
                "description": article.description,
                "body": article.body,
                "tagList": article.tags,
                "slug": "hello-0a1b2c3d4e5f"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let created = client_for(&server)
        .create_article(&article, "jwt.abc.def")
        .await
        .unwrap();
    assert_eq!(created.slug.as_deref(), Some("hello-0a1b2c3d4e5f"));
    assert_eq!(created.tags, article.tags);
}

#[tokio::test]
async fn two_server_errors_then_success_lands_on_the_third_attempt() {
    let server = MockServer::start().await;
    let user = test_user();

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "user": { "username": user.username, "email": user.email }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let start = Instant::now();
    let registered = client_for(&server).register_user(&user).await.unwrap();

    assert_eq!(registered.username, user.username);
    // Linear backoff: 1s after the first failure, 2s after the second
    assert!(start.elapsed() >= Duration::from_millis(3000));
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[test_case(400)]
#[test_case(404)]
#[test_case(422)]
#[tokio::test]
async fn client_errors_fail_immediately_without_retry(status: u16) {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(status).set_body_string("rejected"))
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server)
        .register_user(&test_user())
        .await
        .unwrap_err();

    assert!(err.to_string().contains(&status.to_string()));
    assert!(err.to_string().contains("rejected"));
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test]
async fn exhausted_retries_report_the_final_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/users"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server).with_retries(2);
    let err = client.register_user(&test_user()).await.unwrap_err();

    match err {
        E2eError::Api { status, body } => {
            assert_eq!(status, 502);
            assert_eq!(body, "bad gateway");
        }
        other => panic!("expected Api error, got {other}"),
    }
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}

#[tokio::test]
async fn transport_errors_propagate_without_retry() {
    // Nothing listens on port 1
    let client = ApiClient::new("http://127.0.0.1:1/api/");
    let start = Instant::now();
    let err = client.register_user(&test_user()).await.unwrap_err();

    assert!(matches!(err, E2eError::Http(_)));
    // No backoff happened on the way out
    assert!(start.elapsed() < Duration::from_millis(1000));
}
