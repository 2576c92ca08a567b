//! Offset pagination against a mock Brevo server

use brevo_client::{BrevoClient, Config, PageQuery};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> BrevoClient {
  BrevoClient::new(Config::new("test-key").with_base_url(server.uri())).expect("client")
}

fn lists_page(first_id: u64, len: u64) -> Value {
  let lists: Vec<Value> = (first_id..first_id + len)
    .map(|id| json!({"id": id, "name": format!("List {}", id), "uniqueSubscribers": 1}))
    .collect();
  json!({"lists": lists, "count": 130})
}

async fn mount_lists_page(server: &MockServer, offset: u64, body: Value, expected_calls: u64) {
  Mock::given(method("GET"))
    .and(path("/contacts/lists"))
    .and(query_param("limit", "50"))
    .and(query_param("offset", offset.to_string()))
    .and(query_param("sort", "asc"))
    .respond_with(ResponseTemplate::new(200).set_body_json(body))
    .expect(expected_calls)
    .mount(server)
    .await;
}

#[tokio::test]
async fn test_three_pages_are_concatenated() {
  let server = MockServer::start().await;
  mount_lists_page(&server, 0, lists_page(1, 50), 1).await;
  mount_lists_page(&server, 50, lists_page(51, 50), 1).await;
  mount_lists_page(&server, 100, lists_page(101, 30), 1).await;
  mount_lists_page(&server, 150, lists_page(131, 0), 0).await;

  let response = client_for(&server).lists().all().await.unwrap();
  assert_eq!(response.status(), 200);

  let data = response.into_data().unwrap();
  assert_eq!(data.count, 130);
  assert_eq!(data.lists.len(), 130);
  assert_eq!(data.lists.first().map(|l| l.id), Some(1));
  assert_eq!(data.lists.last().map(|l| l.id), Some(130));
}

#[tokio::test]
async fn test_small_collection_needs_one_call() {
  let server = MockServer::start().await;
  mount_lists_page(&server, 0, lists_page(1, 10), 1).await;
  mount_lists_page(&server, 50, lists_page(51, 0), 0).await;

  let data = client_for(&server).lists().all().await.unwrap().into_data().unwrap();
  assert_eq!(data.count, 10);
  assert_eq!(data.lists.len(), 10);
}

#[tokio::test]
async fn test_empty_collection_needs_one_call() {
  let server = MockServer::start().await;
  mount_lists_page(&server, 0, json!({"lists": [], "count": 0}), 1).await;

  let data = client_for(&server).lists().all().await.unwrap().into_data().unwrap();
  assert_eq!(data.count, 0);
  assert!(data.lists.is_empty());
}

#[tokio::test]
async fn test_exact_multiple_fetches_trailing_empty_page() {
  let server = MockServer::start().await;
  mount_lists_page(&server, 0, lists_page(1, 50), 1).await;
  mount_lists_page(&server, 50, json!({"count": 50}), 1).await;

  let data = client_for(&server).lists().all().await.unwrap().into_data().unwrap();
  assert_eq!(data.count, 50);
}

#[tokio::test]
async fn test_error_page_aborts_and_is_returned_verbatim() {
  let server = MockServer::start().await;
  mount_lists_page(&server, 0, lists_page(1, 50), 1).await;

  Mock::given(method("GET"))
    .and(path("/contacts/lists"))
    .and(query_param("offset", "50"))
    .respond_with(
      ResponseTemplate::new(429)
        .set_body_json(json!({"code": "too_many_requests", "message": "Slow down"})),
    )
    .expect(1)
    .mount(&server)
    .await;

  mount_lists_page(&server, 100, lists_page(101, 30), 0).await;

  let response = client_for(&server).lists().all().await.unwrap();
  assert_eq!(response.status(), 429);
  assert!(response.data().is_none());

  let error = response.error().unwrap();
  assert_eq!(error.status, 429);
  assert_eq!(error.message, "Slow down");
}

#[tokio::test]
async fn test_custom_page_size_and_raw_items() {
  let server = MockServer::start().await;

  for (offset, folders) in [(0, json!([{"id": 1}, {"id": 2}])), (2, json!([{"id": 3}]))] {
    Mock::given(method("GET"))
      .and(path("/contacts/folders"))
      .and(query_param("limit", "2"))
      .and(query_param("offset", offset.to_string()))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({"folders": folders})))
      .expect(1)
      .mount(&server)
      .await;
  }

  let query = PageQuery::new("/contacts/folders", "folders").page_size(2);
  let response = client_for(&server).fetch_all::<Value>(&query).await.unwrap();

  assert_eq!(
    response.into_data(),
    Some(json!({"count": 3, "folders": [{"id": 1}, {"id": 2}, {"id": 3}]}))
  );
}

#[tokio::test]
async fn test_oversized_page_stops_the_loop() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/contacts/folders"))
    .and(query_param("limit", "2"))
    .and(query_param("offset", "0"))
    .respond_with(
      ResponseTemplate::new(200).set_body_json(json!({"folders": [{"id": 1}, {"id": 2}, {"id": 3}]})),
    )
    .expect(1)
    .mount(&server)
    .await;

  Mock::given(method("GET"))
    .and(path("/contacts/folders"))
    .and(query_param("offset", "2"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({"folders": []})))
    .expect(0)
    .mount(&server)
    .await;

  let query = PageQuery::new("/contacts/folders", "folders").page_size(2);
  let data = client_for(&server).fetch_all::<Value>(&query).await.unwrap().into_data().unwrap();

  assert_eq!(data["count"], json!(3));
  assert_eq!(data["folders"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn test_list_contacts_and_folder_lists_paths() {
  let server = MockServer::start().await;

  Mock::given(method("GET"))
    .and(path("/contacts/lists/7/contacts"))
    .and(query_param("offset", "0"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({
      "contacts": [{"email": "a@b.io", "id": 1}, {"email": "c@d.io", "id": 2}],
      "count": 2
    })))
    .expect(1)
    .mount(&server)
    .await;

  Mock::given(method("GET"))
    .and(path("/contacts/folders/4/lists"))
    .and(query_param("offset", "0"))
    .respond_with(ResponseTemplate::new(200).set_body_json(lists_page(1, 3)))
    .expect(1)
    .mount(&server)
    .await;

  let client = client_for(&server);

  let contacts = client.lists().contacts(7).await.unwrap().into_data().unwrap();
  assert_eq!(contacts.count, 2);
  assert_eq!(contacts.contacts[1].email.as_deref(), Some("c@d.io"));

  let lists = client.folders().lists(4).await.unwrap().into_data().unwrap();
  assert_eq!(lists.count, 3);
}
