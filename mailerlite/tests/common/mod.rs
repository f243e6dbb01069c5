#![allow(dead_code)]

use mailerlite::{Client, Config};
use wiremock::{matchers::any, Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "api-abcd1234";
pub const BASE_PATH: &str = "/api/v2";

pub async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let client = Client::new(
        Config::new(API_KEY).with_base_url(format!("{}{}", server.uri(), BASE_PATH)),
    )
    .unwrap();
    (server, client)
}

/// Fails the test on drop if the client reaches the server at all.
pub async fn expect_no_requests(server: &MockServer) {
    Mock::given(any())
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

pub fn api_path(path: &str) -> String {
    format!("{BASE_PATH}/{path}")
}
