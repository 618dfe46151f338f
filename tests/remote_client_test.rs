mod common;

use bytes::Bytes;
use common::{MockServer, ACCESS_KEY};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use uuid::Uuid;
use view_sdk::{ApiErrorEnum, RemoteClient, RestClient, SdkConfig, ViewError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Widget {
    name: String,
    size: i32,
}

fn client(server: &MockServer) -> RemoteClient {
    RemoteClient::new(server.config(Uuid::new_v4())).unwrap()
}

#[tokio::test]
async fn test_bearer_and_custom_headers_sent() {
    let server = MockServer::start().await;
    server.respond("GET", "/widgets/1", 200, r#"{"Name":"a","Size":1}"#);

    let config = server.config(Uuid::new_v4()).with_header("x-request-source", "tests");
    let client = RemoteClient::new(config).unwrap();
    let _: Option<Widget> = client.retrieve(&format!("{}/widgets/1", server.base_url)).await.unwrap();

    let request = server.last_request();
    assert_eq!(request.method, "GET");
    assert_eq!(request.header("authorization"), Some(format!("Bearer {}", ACCESS_KEY)));
    assert_eq!(request.header("x-request-source"), Some("tests".to_string()));
}

#[tokio::test]
async fn test_retrieve_parses_success_and_swallows_not_found() {
    let server = MockServer::start().await;
    server.respond("GET", "/widgets/1", 200, r#"{"Name":"gear","Size":12}"#);
    let client = client(&server);

    let found: Option<Widget> = client.retrieve(&format!("{}/widgets/1", server.base_url)).await.unwrap();
    assert_eq!(found, Some(Widget { name: "gear".to_string(), size: 12 }));

    let missing: Option<Widget> = client.retrieve(&format!("{}/widgets/2", server.base_url)).await.unwrap();
    assert_eq!(missing, None);
}

#[tokio::test]
async fn test_empty_success_body_is_none() {
    let server = MockServer::start().await;
    server.respond("GET", "/widgets/1", 200, "");
    let client = client(&server);

    let result: Option<Widget> = client.retrieve(&format!("{}/widgets/1", server.base_url)).await.unwrap();
    assert_eq!(result, None);
}

#[tokio::test]
async fn test_strict_mode_surfaces_api_error() {
    let server = MockServer::start().await;
    let client = RemoteClient::new(server.config(Uuid::new_v4()).with_strict(true)).unwrap();

    let result = client.retrieve::<Widget>(&format!("{}/widgets/9", server.base_url)).await;
    match result {
        Err(ViewError::Api { status, response: Some(error) }) => {
            assert_eq!(status, 404);
            assert_eq!(error.error, ApiErrorEnum::NotFound);
        }
        other => panic!("expected API error, got {:?}", other),
    }

    // exists answers false rather than failing
    assert!(!client.exists(&format!("{}/widgets/9", server.base_url)).await.unwrap());
}

#[tokio::test]
async fn test_create_puts_json() {
    let server = MockServer::start().await;
    server.respond("PUT", "/widgets", 201, r#"{"Name":"gear","Size":12}"#);
    let client = client(&server);

    let widget = Widget { name: "gear".to_string(), size: 12 };
    let created = client.create(&format!("{}/widgets", server.base_url), &widget).await.unwrap();
    assert_eq!(created, Some(widget));

    let request = server.last_request();
    assert_eq!(request.method, "PUT");
    assert_eq!(request.header("content-type"), Some("application/json".to_string()));
    assert_eq!(request.json()["Name"], "gear");
}

#[tokio::test]
async fn test_delete_exists_and_retrieve_many() {
    let server = MockServer::start().await;
    server.respond("DELETE", "/widgets/1", 204, "");
    server.respond("HEAD", "/widgets/1", 200, "");
    server.respond("GET", "/widgets", 200, r#"[{"Name":"a","Size":1},{"Name":"b","Size":2}]"#);
    let client = client(&server);
    let base = &server.base_url;

    assert!(client.delete(&format!("{}/widgets/1", base)).await.unwrap());
    assert!(!client.delete(&format!("{}/widgets/2", base)).await.unwrap());
    assert!(client.exists(&format!("{}/widgets/1", base)).await.unwrap());
    assert!(!client.exists(&format!("{}/widgets/2", base)).await.unwrap());

    let many: Vec<Widget> = client.retrieve_many(&format!("{}/widgets", base)).await.unwrap();
    assert_eq!(many.len(), 2);

    let none: Vec<Widget> = client.retrieve_many(&format!("{}/gadgets", base)).await.unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_bytes_round_trip() {
    let server = MockServer::start().await;
    server.respond("PUT", "/data/file.txt", 200, "");
    server.respond("GET", "/data/file.txt", 200, "hello world");
    let client = client(&server);
    let url = format!("{}/data/file.txt", server.base_url);

    assert!(client.put_bytes(&url, "text/plain", Bytes::from_static(b"hello world")).await.unwrap());
    let request = server.last_request();
    assert_eq!(request.header("content-type"), Some("text/plain".to_string()));
    assert_eq!(&request.body[..], b"hello world");

    let data = client.get_bytes(&url).await.unwrap();
    assert_eq!(data, Some(Bytes::from_static(b"hello world")));
    assert_eq!(client.get_bytes(&format!("{}/data/other", server.base_url)).await.unwrap(), None);
}

#[tokio::test]
async fn test_malformed_success_body_is_serialization_error() {
    let server = MockServer::start().await;
    server.respond("GET", "/widgets/1", 200, "{not json");
    let client = client(&server);

    let result = client.retrieve::<Widget>(&format!("{}/widgets/1", server.base_url)).await;
    assert!(matches!(result, Err(ViewError::Serialization(_))));
}

#[tokio::test]
async fn test_connection_refused_is_http_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = SdkConfig::new(&format!("http://{}", addr), Uuid::new_v4(), ACCESS_KEY);
    let client = RemoteClient::new(config).unwrap();
    let result = client.exists(&format!("http://{}/widgets/1", addr)).await;
    assert!(matches!(result, Err(ViewError::Http(_))));
}
