//! HTTP client tests against a local server.

use axum::Router;
use axum::extract::RawQuery;
use axum::http::StatusCode;
use axum::routing::get;
use std::net::SocketAddr;

use covidstat_common::{StatisticSnapshot, StatisticsClient, StatisticsSource};

const EXPECTED_QUERY: &str = "from=2020-06-24T00:00:00Z&to=2020-06-25T00:00:00Z";

/// Serve `router` on an ephemeral port and return its address.
async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    addr
}

/// Serve a fixed response for the Cambodia endpoint.
async fn serve_body(status: StatusCode, body: &'static str) -> SocketAddr {
    let router = Router::new().route(
        "/country/cambodia",
        get(move || async move { (status, body) }),
    );
    serve(router).await
}

fn client_for(addr: SocketAddr) -> StatisticsClient {
    StatisticsClient::new(StatisticsSource {
        base_url: format!("http://{}", addr),
        ..Default::default()
    })
}

#[tokio::test]
async fn test_fetch_latest_record() {
    let addr = serve_body(
        StatusCode::OK,
        r#"[{"Confirmed":100,"Active":10},{"Confirmed":150,"Active":20}]"#,
    )
    .await;

    let latest = client_for(addr).fetch_latest().await.unwrap();
    assert_eq!(latest, Some(StatisticSnapshot::new(150, 20)));
}

#[tokio::test]
async fn test_fetch_sends_date_window_verbatim() {
    let router = Router::new().route(
        "/country/cambodia",
        get(|RawQuery(query): RawQuery| async move {
            if query.as_deref() == Some(EXPECTED_QUERY) {
                (StatusCode::OK, r#"[{"Confirmed":1,"Active":1}]"#)
            } else {
                (StatusCode::BAD_REQUEST, "unexpected query")
            }
        }),
    );
    let addr = serve(router).await;

    let latest = client_for(addr).fetch_latest().await.unwrap();
    assert_eq!(latest, Some(StatisticSnapshot::new(1, 1)));
}

#[tokio::test]
async fn test_fetch_with_custom_http_client() {
    let addr = serve_body(StatusCode::OK, r#"[{"Confirmed":7,"Active":2}]"#).await;

    let http = reqwest::Client::builder()
        .user_agent("covidstat-tests")
        .build()
        .unwrap();
    let source = StatisticsSource {
        base_url: format!("http://{}", addr),
        ..Default::default()
    };
    let client = StatisticsClient::with_http_client(http, source);

    assert_eq!(client.source().country, "cambodia");
    assert!(client.source().endpoint_url().ends_with(EXPECTED_QUERY));

    let latest = client.fetch_latest().await.unwrap();
    assert_eq!(latest, Some(StatisticSnapshot::new(7, 2)));
}

#[tokio::test]
async fn test_fetch_empty_array() {
    let addr = serve_body(StatusCode::OK, "[]").await;

    let latest = client_for(addr).fetch_latest().await.unwrap();
    assert_eq!(latest, None);
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let addr = serve_body(StatusCode::OK, "<html>oops</html>").await;

    let err = client_for(addr).fetch_latest().await.unwrap_err();
    assert!(matches!(err, covidstat_common::Error::Json(_)));
}

#[tokio::test]
async fn test_fetch_error_status() {
    let addr = serve_body(StatusCode::INTERNAL_SERVER_ERROR, "[]").await;

    let err = client_for(addr).fetch_latest().await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(addr).fetch_latest().await.unwrap_err();
    assert!(err.is_transport());
}
