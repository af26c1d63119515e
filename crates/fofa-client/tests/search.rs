use fofa_client::{FieldMapping, FofaClient, FofaError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const EMAIL: &str = "user@example.com";
const KEY: &str = "0123456789abcdef";

fn client_for(server: &MockServer) -> FofaClient {
    FofaClient::builder(EMAIL, KEY)
        .base_url(server.uri())
        .build()
        .unwrap()
}

async fn mount_reply(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/api/v1/search/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn sends_credentials_encoded_query_fields_and_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search/all"))
        .and(query_param("email", EMAIL))
        .and(query_param("key", KEY))
        .and(query_param("qbase64", "ZG9tYWluPSJleGFtcGxlLmNvbSI="))
        .and(query_param("fields", "domain,host,ip,port,title,country,city"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"size":1,"results":[["example.com","1.2.3.4:80","1.2.3.4","80","Example","US","NYC"]]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let records = client_for(&server)
        .fetch_records(1, r#"domain="example.com""#, None)
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    let record = &records[0];
    assert_eq!(record.domain, "example.com");
    assert_eq!(record.host, "1.2.3.4:80");
    assert_eq!(record.ip, "1.2.3.4");
    assert_eq!(record.port, "80");
    assert_eq!(record.title, "Example");
    assert_eq!(record.country, "US");
    assert_eq!(record.city, "NYC");
}

#[tokio::test]
async fn custom_fields_and_page_are_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search/all"))
        .and(query_param("qbase64", "dGl0bGU9IuWQjuWPsCIgJiYgcG9ydD0iNDQzIg=="))
        .and(query_param("fields", "ip,domain"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"error":false,"size":2,"page":3,"results":[["1.1.1.1","a.com"],["2.2.2.2","b.com"]]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let results = client_for(&server)
        .search()
        .query(r#"title="后台" && port="443""#)
        .fields("ip,domain")
        .page(3)
        .send()
        .await
        .unwrap();

    assert_eq!(results.size, 2);
    assert_eq!(results.page, Some(3));
    assert_eq!(results.records[0].ip, "1.1.1.1");
    assert_eq!(results.records[0].domain, "a.com");
    assert_eq!(results.records[1].ip, "2.2.2.2");
    assert_eq!(results.records[1].domain, "b.com");
}

#[tokio::test]
async fn single_field_reply_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search/all"))
        .and(query_param("fields", "host"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"size":3,"results":["a.com","b.com:8080","https://c.com"]}"#),
        )
        .mount(&server)
        .await;

    let fields = FieldMapping::parse("host");
    let records = client_for(&server)
        .fetch_records(1, "port=\"8080\"", Some(&fields))
        .await
        .unwrap();

    let hosts: Vec<_> = records.iter().map(|r| r.host.as_str()).collect();
    assert_eq!(hosts, ["a.com", "b.com:8080", "https://c.com"]);
}

#[tokio::test]
async fn raw_returns_body_without_inspecting_it() {
    let server = MockServer::start().await;
    let body = r#"{"error":true,"errmsg":"[-700] Account Invalid"}"#;
    mount_reply(&server, body).await;

    let raw = client_for(&server)
        .fetch_raw(1, "port=\"80\"", None)
        .await
        .unwrap();
    assert_eq!(raw, body.as_bytes());
}

#[tokio::test]
async fn errmsg_becomes_remote_error() {
    let server = MockServer::start().await;
    mount_reply(
        &server,
        r#"{"error":true,"errmsg":"[-700] Account Invalid","size":1,"results":[["a"]]}"#,
    )
    .await;

    let err = client_for(&server)
        .fetch_records(1, "port=\"80\"", None)
        .await
        .unwrap_err();
    match err {
        FofaError::Remote(message) => assert_eq!(message, "[-700] Account Invalid"),
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_reply_is_no_data() {
    let server = MockServer::start().await;
    mount_reply(&server, r#"{"error":false,"size":0,"page":1,"results":[]}"#).await;

    let err = client_for(&server)
        .search()
        .query("port=\"1\"")
        .records()
        .await
        .unwrap_err();
    assert!(err.is_no_data());
}

#[tokio::test]
async fn results_of_wrong_type_is_format_error() {
    let server = MockServer::start().await;
    mount_reply(&server, r#"{"size":4,"results":null}"#).await;

    let err = client_for(&server)
        .search()
        .query("port=\"1\"")
        .records()
        .await
        .unwrap_err();
    assert!(matches!(err, FofaError::Format(_)));
}

#[tokio::test]
async fn non_success_status_maps_to_api_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .search()
        .query("port=\"80\"")
        .send()
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(502));
    assert!(err.to_string().contains("Bad Gateway"));
}

#[tokio::test]
async fn errmsg_on_failed_status_is_still_remote_error() {
    let server = MockServer::start().await;
    let body = r#"{"error":true,"errmsg":"[-700] Account Invalid"}"#;
    Mock::given(method("GET"))
        .and(path("/api/v1/search/all"))
        .respond_with(ResponseTemplate::new(401).set_body_string(body))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let raw = client.fetch_raw(1, "port=\"80\"", None).await.unwrap();
    assert_eq!(raw, body.as_bytes());

    let err = client.fetch_records(1, "port=\"80\"", None).await.unwrap_err();
    match err {
        FofaError::Remote(message) => assert_eq!(message, "[-700] Account Invalid"),
        other => panic!("expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client.fetch_records(1, "port=\"80\"", None).await.unwrap_err();
    assert!(err.is_auth_error());

    let err = client.fetch_raw(1, "port=\"80\"", None).await.unwrap_err();
    assert!(err.is_auth_error());
}

#[tokio::test]
async fn connection_failure_is_http_error() {
    let client = FofaClient::builder(EMAIL, KEY)
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();

    let err = client.fetch_raw(1, "port=\"80\"", None).await.unwrap_err();
    assert!(matches!(err, FofaError::Http(_)));
}

#[tokio::test]
async fn clients_share_across_tasks() {
    let server = MockServer::start().await;
    mount_reply(&server, r#"{"size":1,"results":[["a.com","h","1.1.1.1","80","t","US","X"]]}"#).await;

    let client = client_for(&server);
    let handles: Vec<_> = (1..=4)
        .map(|page| {
            let client = client.clone();
            tokio::spawn(async move { client.fetch_records(page, "port=\"80\"", None).await })
        })
        .collect();

    for handle in handles {
        let records = handle.await.unwrap().unwrap();
        assert_eq!(records[0].domain, "a.com");
    }
}
