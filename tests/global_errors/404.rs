//! tests/global_errors/404.rs
//! Ensures that hitting an unknown route returns the default HTTP 404.

#[path = "../common/mod.rs"]
mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let base_url: String = common::spawn_app_named("worker-1");

    for path in ["/other", "/", "/ping/extra", "/pingx"] {
        let resp: reqwest::Response = reqwest::Client::new()
            .get(format!("{}{}", base_url, path))
            .send()
            .await
            .expect("Failed to execute request.");

        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "path {}", path);
    }
}
