//! End-to-end tests of the REST client against a scripted HTTP server

mod support;

use sfgen_client::{Error, SalesforceClient, SalesforceConfig};
use support::MockServer;

const TOKEN_OK: &str = r#"{"access_token": "token-1", "instance_url": "INSTANCE", "token_type": "Bearer"}"#;

fn token_reply(server_url: &str, token: &str) -> String {
    TOKEN_OK
        .replace("INSTANCE", server_url)
        .replace("token-1", token)
}

fn client_for(server: &MockServer) -> SalesforceClient {
    let config = SalesforceConfig::new("client-id", "client-secret", "user@example.com", "pw")
        .with_login_url(server.url.clone());
    SalesforceClient::new(config).unwrap()
}

#[tokio::test]
async fn test_login_and_fetch_catalog() {
    // Token reply points back at a second server acting as the instance.
    let instance = MockServer::start(vec![(
        200,
        r#"{"encoding": "UTF-8", "sobjects": [{"name": "Contact"}, {"name": "Account"}]}"#,
    )])
    .await;
    let login = MockServer::start(vec![(200, token_reply(&instance.url, "token-1"))]).await;

    let client = client_for(&login);
    let objects = client.global_objects().await.unwrap();
    let catalog: Vec<_> = objects.catalog().into_iter().collect();
    assert_eq!(catalog, vec!["Account", "Contact"]);

    let login_requests = login.requests();
    assert_eq!(login_requests.len(), 1);
    assert_eq!(login_requests[0].method, "POST");
    assert_eq!(login_requests[0].path, "/services/oauth2/token");
    assert!(login_requests[0].body.contains("grant_type=password"));
    assert!(login_requests[0].body.contains("username=user%40example.com"));

    let data_requests = instance.requests();
    assert_eq!(data_requests[0].method, "GET");
    assert_eq!(data_requests[0].path, "/services/data/v25.0/sobjects/");
    assert_eq!(
        data_requests[0].authorization.as_deref(),
        Some("Bearer token-1")
    );
}

#[tokio::test]
async fn test_describe_reuses_session() {
    let instance = MockServer::start(vec![
        (200, r#"{"name": "Account", "fields": [{"name": "Id", "soapType": "tns:ID"}]}"#),
        (200, r#"{"name": "Contact", "fields": []}"#),
    ])
    .await;
    let login = MockServer::start(vec![(200, token_reply(&instance.url, "token-1"))]).await;

    let client = client_for(&login);
    let account = client.describe("Account").await.unwrap();
    let contact = client.describe("Contact").await.unwrap();

    assert_eq!(account.fields.len(), 1);
    assert_eq!(contact.name, "Contact");
    assert_eq!(login.requests().len(), 1);
    assert_eq!(
        instance.requests()[0].path,
        "/services/data/v25.0/sobjects/Account/describe/"
    );
}

#[tokio::test]
async fn test_expired_session_triggers_single_relogin() {
    let instance = MockServer::start(vec![
        (
            401,
            r#"[{"message": "Session expired or invalid", "errorCode": "INVALID_SESSION_ID"}]"#,
        ),
        (200, r#"{"name": "Account", "fields": []}"#),
    ])
    .await;
    let login = MockServer::start(vec![
        (200, token_reply(&instance.url, "token-1")),
        (200, token_reply(&instance.url, "token-2")),
    ])
    .await;

    let client = client_for(&login);
    let desc = client.describe("Account").await.unwrap();
    assert_eq!(desc.name, "Account");

    assert_eq!(login.requests().len(), 2);
    let data_requests = instance.requests();
    assert_eq!(data_requests.len(), 2);
    assert_eq!(data_requests[1].authorization.as_deref(), Some("Bearer token-2"));
}

#[tokio::test]
async fn test_bad_credentials_are_reported_as_authentication_error() {
    let login = MockServer::start(vec![(
        400,
        r#"{"error": "invalid_grant", "error_description": "authentication failure"}"#,
    )])
    .await;

    let client = client_for(&login);
    let err = client.global_objects().await.unwrap_err();

    assert!(err.is_authentication());
    assert!(err.to_string().contains("invalid_grant"));
}

#[tokio::test]
async fn test_unknown_sobject_is_api_error() {
    let instance = MockServer::start(vec![(
        404,
        r#"[{"message": "The requested resource does not exist", "errorCode": "NOT_FOUND"}]"#,
    )])
    .await;
    let login = MockServer::start(vec![(200, token_reply(&instance.url, "token-1"))]).await;

    let client = client_for(&login);
    match client.describe("Nope__c").await.unwrap_err() {
        Error::Api { status, errors } => {
            assert_eq!(status, 404);
            assert_eq!(errors[0].error_code, "NOT_FOUND");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[tokio::test]
async fn test_logout_revokes_token() {
    let instance = MockServer::start(vec![(200, r#"{"sobjects": []}"#)]).await;
    let login = MockServer::start(vec![
        (200, token_reply(&instance.url, "token-1")),
        (200, "{}".to_string()),
    ])
    .await;

    let client = client_for(&login);
    client.login().await.unwrap();
    client.global_objects().await.unwrap();
    client.logout().await.unwrap();

    let requests = login.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[1].path, "/services/oauth2/revoke");
    assert_eq!(requests[1].body, "token=token-1");
    assert!(!client.session().is_logged_in().await);
}
