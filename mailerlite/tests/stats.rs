mod common;

use common::{api_path, setup, API_KEY};
use mailerlite::models::ListOptions;
use serde_json::json;
use wiremock::{
    matchers::{header, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn reads_account_stats() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(api_path("stats")))
        .and(header("X-MailerLite-ApiKey", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subscribed": 1500,
            "unsubscribed": 20,
            "campaigns": 12,
            "sent_emails": 18000,
            "open_rate": 0.31,
            "click_rate": 0.04,
            "bounce_rate": 0.01
        })))
        .expect(1)
        .mount(&server)
        .await;

    let stats = client.stats().await.unwrap();
    assert_eq!(stats.subscribed, 1500);
    assert_eq!(stats.sent_emails, 18000);
    assert_eq!(stats.open_rate, 0.31);
}

#[tokio::test]
async fn reads_account_info() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(api_path("me")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "account": {
                "id": 1,
                "name": "ACME",
                "subdomain": "acme",
                "email": "owner@acme.test"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let account = client.account().await.unwrap();
    assert_eq!(account.name, "ACME");
    assert_eq!(account.subdomain.as_deref(), Some("acme"));
}

#[tokio::test]
async fn lists_segments() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(api_path("segments")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": 3,
                "title": "Engaged",
                "filter": {"rules": []},
                "total": 40,
                "sent": 5,
                "opened": {"count": 30, "rate": 75.0},
                "clicked": {"count": 10, "rate": 25.0},
                "created_at": "2026-01-01 00:00:00",
                "updated_at": "2026-01-02 00:00:00",
                "timed_out": false
            }],
            "meta": {
                "pagination": {
                    "total": 1,
                    "count": 1,
                    "per_page": 50,
                    "current_page": 1,
                    "total_pages": 1
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client.list_segments(&ListOptions::default()).await.unwrap();
    assert_eq!(page.data[0].title, "Engaged");
    assert_eq!(page.data[0].opened.count, 30);
    assert_eq!(page.meta.pagination.total, 1);
}
