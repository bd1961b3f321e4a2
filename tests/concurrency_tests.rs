//! Concurrency properties of the shortening core: code uniqueness,
//! lossless click counting and terminal deletion.

use std::collections::HashSet;

use linkshort::errors::ServiceError;
use linkshort::models::ShortenRequest;
use linkshort::repositories::LinkStore;

mod common;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_shortens_never_share_a_code() {
    let (_store, service) = common::memory_service();

    let mut handles = Vec::with_capacity(1000);
    for i in 0..1000 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service
                .shorten(ShortenRequest {
                    url: format!("https://example.com/page/{}", i),
                })
                .await
                .expect("shorten should succeed")
        }));
    }

    let mut codes = HashSet::new();
    for handle in handles {
        let response = handle.await.expect("task should not panic");
        assert_eq!(response.code.len(), common::CODE_LENGTH);
        assert!(response.short_url.starts_with(common::BASE_URL));
        assert!(
            codes.insert(response.code),
            "two callers received the same code"
        );
    }
    assert_eq!(codes.len(), 1000);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_resolves_lose_no_clicks() {
    let (store, service) = common::memory_service();

    let code = service
        .shorten(ShortenRequest {
            url: "https://example.com".into(),
        })
        .await
        .unwrap()
        .code;

    let mut handles = Vec::with_capacity(500);
    for _ in 0..500 {
        let service = service.clone();
        let code = code.clone();
        handles.push(tokio::spawn(async move {
            service.resolve(&code).await.expect("resolve should succeed");
        }));
    }
    for handle in handles {
        handle.await.expect("task should not panic");
    }

    let record = store.get(&code).await.unwrap().unwrap();
    assert_eq!(record.clicks, 500, "increments were lost");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn deletion_is_terminal_under_concurrent_resolutions() {
    let (store, service) = common::memory_service();

    let code = service
        .shorten(ShortenRequest {
            url: "https://example.com".into(),
        })
        .await
        .unwrap()
        .code;

    // Resolutions racing the delete may land on either side of it
    let mut handles = Vec::with_capacity(200);
    for _ in 0..200 {
        let service = service.clone();
        let code = code.clone();
        handles.push(tokio::spawn(async move {
            match service.resolve(&code).await {
                Ok(record) => {
                    assert_eq!(record.target, "https://example.com");
                }
                Err(ServiceError::NotFound(_)) => {}
                Err(other) => panic!("unexpected resolve error: {}", other),
            }
        }));
    }

    service.delete(&code).await.expect("delete should succeed");

    for handle in handles {
        handle.await.expect("task should not panic");
    }

    // Once the delete has completed the code must stay gone
    assert!(store.get(&code).await.unwrap().is_none());
    assert!(matches!(
        service.resolve(&code).await.unwrap_err(),
        ServiceError::NotFound(_)
    ));
    assert!(matches!(
        service.delete(&code).await.unwrap_err(),
        ServiceError::NotFound(_)
    ));
}

#[tokio::test]
async fn never_issued_code_resolves_to_not_found() {
    let (_store, service) = common::memory_service();

    assert!(matches!(
        service.resolve("zzzzzz").await.unwrap_err(),
        ServiceError::NotFound(_)
    ));
}
