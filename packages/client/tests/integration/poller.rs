use std::time::Duration;

use client::{ReviewPoller, ReviewScope};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{ID_A, ID_B, api_path, client_for, review_json};

const WAIT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn first_fetch_happens_immediately() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("all-reviews")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([review_json(ID_A, "Kindle", 4)])),
        )
        .mount(&server)
        .await;

    let poller = ReviewPoller::spawn(
        client_for(&server),
        ReviewScope::All,
        Duration::from_secs(3600),
    );
    let mut rx = poller.subscribe();
    assert!(rx.borrow().is_pending());

    tokio::time::timeout(WAIT, rx.changed())
        .await
        .expect("snapshot should arrive")
        .expect("poller should still be running");

    let snapshot = poller.latest();
    assert_eq!(snapshot.generation, 1);
    assert_eq!(snapshot.reviews[0].product_name, "Kindle");
}

#[tokio::test]
async fn refresh_fetches_without_waiting_for_the_interval() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("mobile-reviews")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("mobile-reviews")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([review_json(ID_B, "Pixel 9", 5)])),
        )
        .mount(&server)
        .await;

    let poller = ReviewPoller::spawn(
        client_for(&server),
        ReviewScope::Mobile,
        Duration::from_secs(3600),
    );
    let mut rx = poller.subscribe();
    tokio::time::timeout(WAIT, rx.changed())
        .await
        .expect("first snapshot")
        .unwrap();
    assert!(rx.borrow_and_update().reviews.is_empty());

    poller.refresh();
    tokio::time::timeout(WAIT, rx.changed())
        .await
        .expect("refreshed snapshot")
        .unwrap();

    let snapshot = rx.borrow().clone();
    assert_eq!(snapshot.generation, 2);
    assert_eq!(snapshot.reviews.len(), 1);
}

#[tokio::test]
async fn failed_poll_keeps_previous_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("all-reviews")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([review_json(ID_A, "Kindle", 4)])),
        )
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(api_path("all-reviews")))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "code": "INTERNAL_ERROR",
            "error": "Internal server error",
        })))
        .mount(&server)
        .await;

    let poller = ReviewPoller::spawn(
        client_for(&server),
        ReviewScope::All,
        Duration::from_millis(20),
    );

    tokio::time::timeout(WAIT, async {
        while server.received_requests().await.unwrap_or_default().len() < 4 {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("poller should keep polling after failures");

    let snapshot = poller.latest();
    assert_eq!(snapshot.generation, 1);
    assert_eq!(snapshot.reviews[0].product_name, "Kindle");
}

#[tokio::test]
async fn zero_interval_still_polls() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(api_path("all-reviews")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let poller = ReviewPoller::spawn(client_for(&server), ReviewScope::All, Duration::ZERO);
    let mut rx = poller.subscribe();

    tokio::time::timeout(WAIT, rx.changed())
        .await
        .expect("snapshot should arrive")
        .expect("poller should still be running");

    assert!(!poller.latest().is_pending());
}
