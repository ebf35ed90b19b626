//! tests/global_errors/500.rs
//! Ensures a failed hostname lookup neither crashes nor stops the server.

#[path = "../common/mod.rs"]
mod common;

use std::sync::atomic::Ordering;

use reqwest::StatusCode;

#[tokio::test]
async fn hostname_failure_returns_500_and_keeps_serving() {
    let source: common::FailingHostname = common::FailingHostname::default();
    let base_url: String = common::spawn_with_source(source.clone());
    let client: reqwest::Client = reqwest::Client::new();

    for _ in 0..2 {
        let resp: reqwest::Response = client
            .get(format!("{}/ping", base_url))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(resp.text().await.unwrap(), "Internal Server Error\n");
    }

    // Both lookups were attempted; the server stayed up in between.
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);

    // Method validation happens before the lookup.
    let resp: reqwest::Response = client
        .post(format!("{}/ping", base_url))
        .send()
        .await
        .expect("Failed to execute request.");
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}
