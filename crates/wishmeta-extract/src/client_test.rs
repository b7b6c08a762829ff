use std::time::Duration;

use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn html_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body)
}

#[tokio::test]
async fn fetch_returns_body_and_final_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product"))
        .respond_with(html_response("<html><title>Lamp</title></html>"))
        .mount(&server)
        .await;

    let client = PageClient::new(5, "wishmeta-test/1.0").expect("client");
    let url = format!("{}/product", server.uri());
    let page = client.fetch(&url).await.expect("fetch");

    assert_eq!(page.body, "<html><title>Lamp</title></html>");
    assert_eq!(page.final_url, url);
}

#[tokio::test]
async fn fetch_sends_configured_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/product"))
        .and(header("user-agent", "desktop-browser/99"))
        .respond_with(html_response("<html></html>"))
        .expect(1)
        .mount(&server)
        .await;

    let client = PageClient::new(5, "desktop-browser/99").expect("client");
    client
        .fetch(&format!("{}/product", server.uri()))
        .await
        .expect("fetch");
}

#[tokio::test]
async fn fetch_returns_body_on_non_2xx_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string("<html><title>Soft 404</title></html>"),
        )
        .mount(&server)
        .await;

    let client = PageClient::new(5, "wishmeta-test/1.0").expect("client");
    let page = client
        .fetch(&format!("{}/gone", server.uri()))
        .await
        .expect("non-2xx fetch should still succeed");

    assert!(page.body.contains("Soft 404"));
}

#[tokio::test]
async fn fetch_follows_redirects_and_reports_final_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", format!("{}/new", server.uri())),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(html_response("<html></html>"))
        .mount(&server)
        .await;

    let client = PageClient::new(5, "wishmeta-test/1.0").expect("client");
    let page = client
        .fetch(&format!("{}/old", server.uri()))
        .await
        .expect("fetch");

    assert_eq!(page.final_url, format!("{}/new", server.uri()));
}

#[tokio::test]
async fn fetch_times_out_with_typed_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html_response("<html></html>").set_delay(Duration::from_secs(10)))
        .mount(&server)
        .await;

    let client = PageClient::new(1, "wishmeta-test/1.0").expect("client");
    let err = client
        .fetch(&format!("{}/slow", server.uri()))
        .await
        .expect_err("expected timeout");

    assert!(
        matches!(err, ExtractError::Timeout { timeout_secs: 1, .. }),
        "expected Timeout, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_maps_connection_failure_to_transport_error() {
    // Port 9 (discard) is a safe nothing-listens-here target.
    let client = PageClient::new(2, "wishmeta-test/1.0").expect("client");
    let err = client
        .fetch("http://127.0.0.1:9/unreachable")
        .await
        .expect_err("expected connection failure");

    assert!(
        matches!(
            err,
            ExtractError::Transport { .. } | ExtractError::Timeout { .. }
        ),
        "expected Transport or Timeout, got: {err:?}"
    );
}
