use std::net::TcpListener;
use std::time::Duration;

use bulksms::{BulkSmsClient, BulkSmsError, GatewayConfig, SendRequest, StatusCode};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn gateway_replying(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/send"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;
    server
}

fn client_for(server: &MockServer) -> BulkSmsClient {
    let config =
        GatewayConfig::new(format!("{}/api/send", server.uri()), "acme", "p@ss word").unwrap();
    BulkSmsClient::from_config(&config.with_timeout(Duration::from_secs(5))).unwrap()
}

async fn received_form(server: &MockServer) -> Vec<(String, String)> {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one round trip");
    url::form_urlencoded::parse(&requests[0].body)
        .into_owned()
        .collect()
}

#[tokio::test]
async fn success_reply_posts_form_and_returns_description() {
    let server = gateway_replying("1101|OK").await;
    let client = client_for(&server);

    let description = client
        .send("01711111111,01811111111", "hello & welcome")
        .await
        .unwrap();
    assert_eq!(description, "Success");

    assert_eq!(
        received_form(&server).await,
        vec![
            ("username".to_owned(), "acme".to_owned()),
            ("password".to_owned(), "p@ss word".to_owned()),
            ("number".to_owned(), "01711111111,01811111111".to_owned()),
            ("message".to_owned(), "hello & welcome".to_owned()),
        ]
    );
}

#[tokio::test]
async fn empty_inputs_still_send_four_fields() {
    let server = gateway_replying("1003|empty").await;
    let client = client_for(&server);

    let description = client.send("", "").await.unwrap();
    assert_eq!(description, "Invalid message or empty message");

    let form = received_form(&server).await;
    let keys = form.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["username", "password", "number", "message"]);
    assert_eq!(form[2].1, "");
    assert_eq!(form[3].1, "");
}

#[tokio::test]
async fn rejection_is_returned_as_outcome() {
    let server = gateway_replying("1006|insufficient").await;
    let client = client_for(&server);

    let outcome = client
        .send_sms(SendRequest::new("01711111111", "hi"))
        .await
        .unwrap();
    assert_eq!(outcome.status_code, StatusCode::new(1006));
    assert_eq!(outcome.description, "insufficient Balance ");
    assert!(!outcome.is_success());
}

#[tokio::test]
async fn unknown_code_is_an_error() {
    let server = gateway_replying("9999|x").await;
    let client = client_for(&server);

    let err = client.send("01711111111", "hi").await.unwrap_err();
    assert!(matches!(
        err,
        BulkSmsError::UnknownStatusCode { ref code, .. } if code == "9999"
    ));
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let config = GatewayConfig::new(format!("http://{addr}/api/send"), "acme", "secret").unwrap();
    let client = BulkSmsClient::new(&config);

    let err = client.send("01711111111", "hi").await.unwrap_err();
    assert!(matches!(err, BulkSmsError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn server_error_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let err = client.send("01711111111", "hi").await.unwrap_err();
    assert!(matches!(
        err,
        BulkSmsError::HttpStatus { status: 502, .. }
    ));
}

#[tokio::test]
async fn client_error_status_still_decodes_status_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("1000|bad credentials"))
        .mount(&server)
        .await;
    let client = client_for(&server);

    let description = client.send("01711111111", "hi").await.unwrap();
    assert_eq!(description, "Invalid user or Password");
}

#[tokio::test]
async fn configured_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("user-agent", "acme-app/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1101|OK"))
        .expect(1)
        .mount(&server)
        .await;

    let config = GatewayConfig::new(format!("{}/api/send", server.uri()), "acme", "secret")
        .unwrap()
        .with_user_agent("acme-app/1.0");
    let client = BulkSmsClient::from_config(&config).unwrap();
    assert_eq!(client.send("01711111111", "hi").await.unwrap(), "Success");

    let client = BulkSmsClient::builder(&config)
        .user_agent("other-app/2.0")
        .build()
        .unwrap();
    let err = client.send("01711111111", "hi").await.unwrap_err();
    assert!(matches!(err, BulkSmsError::HttpStatus { status: 404, .. }), "got {err:?}");
}

#[tokio::test]
async fn configured_timeout_aborts_slow_gateway() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("1101|OK")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = GatewayConfig::new(format!("{}/api/send", server.uri()), "acme", "secret")
        .unwrap()
        .with_timeout(Duration::from_millis(200));
    let client = BulkSmsClient::from_config(&config).unwrap();

    let err = client.send("01711111111", "hi").await.unwrap_err();
    assert!(matches!(err, BulkSmsError::Transport(_)), "got {err:?}");
}
