mod common;

use common::{api_path, expect_no_requests, setup};
use futures_util::StreamExt;
use mailerlite::{
    models::{ImportRequest, ListOptions, NewGroup, NewSubscriber, SubscriberType},
    Client, Config, Error,
};
use serde_json::{json, Value};
use wiremock::{
    matchers::{body_json, method, path, query_param},
    Mock, ResponseTemplate,
};

fn group_json(id: u64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "total": 10,
        "active": 8,
        "unsubscribed": 1,
        "bounced": 1,
        "unconfirmed": 0,
        "junk": 0,
        "sent": 4,
        "opened": 3,
        "clicked": 1,
        "date_created": "2016-04-04 12:00:00",
        "date_updated": "2016-04-04 12:00:00"
    })
}

fn subscriber_json(id: u64) -> Value {
    json!({
        "id": id,
        "name": format!("Subscriber {id}"),
        "email": format!("sub{id}@example.com"),
        "sent": 0,
        "opened": 0,
        "clicked": 0,
        "type": "active",
        "fields": [],
        "date_subscribe": null,
        "date_unsubscribe": null,
        "date_created": "2016-04-04 12:00:00",
        "date_updated": null
    })
}

#[tokio::test]
async fn lists_groups_with_pagination() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(api_path("groups")))
        .and(query_param("limit", "2"))
        .and(query_param("offset", "4"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([group_json(1, "Newsletter"), group_json(2, "Customers")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let groups = client.list_groups(&ListOptions::new(2, 4)).await.unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[1].name, "Customers");
    assert_eq!(groups[0].active, 8);
}

#[tokio::test]
async fn creates_and_renames_a_group() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path(api_path("groups")))
        .and(body_json(json!({"name": "Newsletter"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(group_json(11, "Newsletter")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(api_path("groups/11")))
        .and(body_json(json!({"name": "Weekly"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(group_json(11, "Weekly")))
        .expect(1)
        .mount(&server)
        .await;

    let group = client.create_group(&NewGroup::new("Newsletter")).await.unwrap();
    assert_eq!(group.id, 11);

    let group = client
        .update_group(group.id, &NewGroup::new("Weekly"))
        .await
        .unwrap();
    assert_eq!(group.name, "Weekly");
}

#[tokio::test]
async fn missing_group_is_not_found() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(api_path("groups/404")))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(json!({"error": {"code": 123, "message": "Group not found"}})),
        )
        .mount(&server)
        .await;

    match client.get_group(404).await {
        Err(Error::NotFound(e)) => assert_eq!(e.message, "Group not found"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[tokio::test]
async fn deletes_a_group() {
    let (server, client) = setup().await;
    Mock::given(method("DELETE"))
        .and(path(api_path("groups/3")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client.delete_group(3).await.unwrap();
}

#[tokio::test]
async fn invalid_group_input_is_rejected_locally() {
    let (server, client) = setup().await;
    expect_no_requests(&server).await;

    assert!(matches!(
        client.create_group(&NewGroup::new("")).await,
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        client.add_group_subscriber(1, &NewSubscriber::new("nope")).await,
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        client
            .import_group_subscribers(1, &ImportRequest::new(vec![]))
            .await,
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        client.remove_group_subscriber(1, " ").await,
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(
        client.group_subscriber(1, "a/b").await,
        Err(Error::InvalidArgument(_))
    ));
    for dots in [".", ".."] {
        assert!(matches!(
            client.remove_group_subscriber(5, dots).await,
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            client.group_subscriber(5, dots).await,
            Err(Error::InvalidArgument(_))
        ));
    }
    let zero_limit = ListOptions {
        limit: Some(0),
        offset: None,
    };
    assert!(matches!(
        client.list_groups(&zero_limit).await,
        Err(Error::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn filters_subscribers_by_type() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(api_path("groups/5/subscribers/unsubscribed")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([subscriber_json(1)])))
        .expect(1)
        .mount(&server)
        .await;

    let subscribers = client
        .group_subscribers(5, Some(SubscriberType::Unsubscribed), &ListOptions::default())
        .await
        .unwrap();
    assert_eq!(subscribers[0].email, "sub1@example.com");
}

#[tokio::test]
async fn adds_and_removes_a_subscriber() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path(api_path("groups/5/subscribers")))
        .and(body_json(json!({
            "email": "sub9@example.com",
            "name": "Nine",
            "fields": {"company": "ACME"},
            "resubscribe": true
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(subscriber_json(9)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("groups/5/subscribers/sub9@example.com")))
        .respond_with(ResponseTemplate::new(200).set_body_json(subscriber_json(9)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(api_path("groups/5/subscribers/9")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut new = NewSubscriber::new("sub9@example.com")
        .with_name("Nine")
        .with_field("company", "ACME");
    new.resubscribe = Some(true);
    let added = client.add_group_subscriber(5, &new).await.unwrap();
    assert_eq!(added.id, 9);

    let found = client.group_subscriber(5, "sub9@example.com").await.unwrap();
    assert_eq!(found.kind, Some(SubscriberType::Active));

    client.remove_group_subscriber(5, "9").await.unwrap();
}

#[tokio::test]
async fn imports_subscribers() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path(api_path("groups/5/subscribers/import")))
        .and(body_json(json!({
            "subscribers": [
                {"email": "sub1@example.com"},
                {"email": "sub2@example.com"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "imported": [subscriber_json(1)],
            "updated": [],
            "unchanged": [subscriber_json(2)],
            "errors": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client
        .import_group_subscribers(
            5,
            &ImportRequest::new(vec![
                NewSubscriber::new("sub1@example.com"),
                NewSubscriber::new("sub2@example.com"),
            ]),
        )
        .await
        .unwrap();
    assert_eq!(result.imported.len(), 1);
    assert_eq!(result.unchanged[0].id, 2);
}

#[tokio::test]
async fn streams_every_page_of_subscribers() {
    let server = wiremock::MockServer::start().await;
    let base_url = format!("{}{}", server.uri(), common::BASE_PATH);
    let client = Client::new(Config::new(common::API_KEY).with_base_url(base_url))
        .unwrap()
        .with_page_size(2)
        .unwrap();

    let pages = [
        ("0", json!([subscriber_json(1), subscriber_json(2)])),
        ("2", json!([subscriber_json(3), subscriber_json(4)])),
        ("4", json!([subscriber_json(5)])),
    ];
    for (offset, body) in pages {
        Mock::given(method("GET"))
            .and(path(api_path("groups/8/subscribers")))
            .and(query_param("limit", "2"))
            .and(query_param("offset", offset))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;
    }

    let ids: Vec<u64> = client
        .stream_group_subscribers(8, None)
        .map(|res| res.unwrap().id)
        .collect()
        .await;
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn stream_stops_after_first_error() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path(api_path("groups/8/subscribers")))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let results: Vec<_> = client.stream_group_subscribers(8, None).collect().await;
    assert_eq!(results.len(), 1);
    assert!(matches!(results[0], Err(Error::ServerError(_))));
}
