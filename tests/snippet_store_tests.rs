//! Snippet store behavior against a file-backed SQLite database.

mod support;

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use snippetbox::adapter::outbound::sqlite::{PoolOptions, SqliteSnippetStore};
use snippetbox::application::SnippetService;
use snippetbox::domain::{Retention, SnippetId};
use snippetbox::error::StoreError;
use snippetbox::port::SnippetStore;

use support::temp_db::TempDb;

#[tokio::test]
async fn created_snippet_is_retrievable_with_its_lifetime() {
    let db = TempDb::create();
    let store = db.store();

    let id = store
        .create("O snail", "Climb Mount Fuji,\nBut slowly, slowly!", Retention::ONE_WEEK)
        .await
        .unwrap();
    let snippet = store.get(id).await.unwrap();

    assert_eq!(snippet.id, id);
    assert_eq!(snippet.title, "O snail");
    assert_eq!(snippet.content, "Climb Mount Fuji,\nBut slowly, slowly!");
    assert_eq!(snippet.lifetime(), chrono::Duration::days(7));
}

#[tokio::test]
async fn snippets_survive_reopening_the_database() {
    let db = TempDb::create();
    let id = db
        .store()
        .create("durable", "still here", Retention::ONE_DAY)
        .await
        .unwrap();

    let reopened = SqliteSnippetStore::open(&db.url(), &PoolOptions::default()).unwrap();
    let snippet = reopened.get(id).await.unwrap();

    assert_eq!(snippet.content, "still here");
}

#[tokio::test]
async fn expired_snippet_disappears_from_get_and_latest() {
    let db = TempDb::create();
    let store = db.store();
    let keep = store.create("keep", "k", Retention::ONE_DAY).await.unwrap();
    let gone = store.create("gone", "g", Retention::ONE_DAY).await.unwrap();

    db.expire(gone);

    assert!(matches!(
        store.get(gone).await,
        Err(StoreError::NotFound { id }) if id == gone
    ));
    let latest: Vec<SnippetId> = store.latest().await.unwrap().iter().map(|s| s.id).collect();
    assert_eq!(latest, vec![keep]);
}

#[tokio::test]
async fn latest_returns_ten_newest_live_snippets() {
    let db = TempDb::create();
    let store = db.store();

    let mut ids = Vec::new();
    for n in 0..12 {
        ids.push(
            store
                .create(&format!("s{n}"), "body", Retention::ONE_DAY)
                .await
                .unwrap(),
        );
    }
    // Expire two of the ten newest; the two oldest should fill the gap.
    db.expire(ids[11]);
    db.expire(ids[5]);

    let latest: Vec<SnippetId> = store.latest().await.unwrap().iter().map(|s| s.id).collect();

    let mut expected: Vec<SnippetId> = ids
        .iter()
        .copied()
        .filter(|id| *id != ids[11] && *id != ids[5])
        .collect();
    expected.reverse();
    assert_eq!(latest, expected);
    assert_eq!(latest.len(), 10);
}

#[tokio::test]
async fn concurrent_creates_get_unique_ids() {
    let db = TempDb::create_with(&PoolOptions {
        max_size: 4,
        ..PoolOptions::default()
    });
    let service = Arc::new(SnippetService::new(db.store()));

    let handles: Vec<_> = (0..20)
        .map(|n| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .create(&format!("title {n}"), "body", Retention::ONE_DAY)
                    .await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().unwrap());
    }

    assert_eq!(ids.len(), 20);
    assert_eq!(service.latest().await.unwrap().len(), 10);
}

#[tokio::test]
async fn reads_run_concurrently_with_writes() {
    let db = TempDb::create();
    let service = Arc::new(SnippetService::new(db.store()));
    let seed = service.create("seed", "s", Retention::ONE_DAY).await.unwrap();

    let writer = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            for n in 0..10 {
                service
                    .create(&format!("w{n}"), "w", Retention::ONE_DAY)
                    .await
                    .unwrap();
            }
        })
    };
    let reader = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            for _ in 0..10 {
                assert_eq!(service.get(seed).await.unwrap().title, "seed");
                assert!(!service.latest().await.unwrap().is_empty());
            }
        })
    };

    writer.await.unwrap();
    reader.await.unwrap();
}

#[tokio::test]
async fn generous_deadline_does_not_interfere() {
    let db = TempDb::create();
    let service =
        SnippetService::new(db.store()).with_deadline(Some(Duration::from_secs(10)));

    let id = service.create("t", "c", Retention::ONE_YEAR).await.unwrap();

    assert_eq!(service.get(id).await.unwrap().id, id);
    assert!(service.health_check().await.is_ok());
}

#[tokio::test]
async fn health_check_on_file_database() {
    let db = TempDb::create();
    assert!(db.path().exists());
    assert!(db.store().health_check().await.is_ok());
}
