//! Behaviour of the in-process resource store.

use std::sync::Arc;

use super::*;
use crate::domain::{ArticleFields, UserFields};
use rstest::{fixture, rstest};

#[fixture]
fn store() -> InMemoryResourceStore<ArticleFields> {
    InMemoryResourceStore::new()
}

fn article(title: &str) -> ArticleFields {
    ArticleFields {
        title: title.to_owned(),
        author: "Staff Writer".to_owned(),
        published: false,
    }
}

#[rstest]
#[tokio::test]
async fn create_then_get_returns_same_fields(store: InMemoryResourceStore<ArticleFields>) {
    let created = store.create(article("Launch")).await.expect("create");
    let fetched = store.get(created.id).await.expect("get");

    assert_eq!(fetched, created);
    assert_eq!(fetched.fields, article("Launch"));
}

#[rstest]
#[tokio::test]
async fn each_create_gets_a_distinct_id(store: InMemoryResourceStore<ArticleFields>) {
    let first = store.create(article("One")).await.expect("create");
    let second = store.create(article("One")).await.expect("create");

    assert_ne!(first.id, second.id);
}

#[rstest]
#[tokio::test]
async fn list_is_in_creation_order(store: InMemoryResourceStore<ArticleFields>) {
    assert!(store.list().await.expect("list").is_empty());

    let titles = ["First", "Second", "Third"];
    for title in titles {
        store.create(article(title)).await.expect("create");
    }

    let listed: Vec<_> = store
        .list()
        .await
        .expect("list")
        .into_iter()
        .map(|record| record.fields.title)
        .collect();
    assert_eq!(listed, titles);
}

#[rstest]
#[tokio::test]
async fn update_replaces_fields_and_keeps_id(store: InMemoryResourceStore<ArticleFields>) {
    let created = store.create(article("Draft")).await.expect("create");
    let replacement = ArticleFields {
        published: true,
        ..article("Final")
    };

    let updated = store
        .update(created.id, replacement.clone())
        .await
        .expect("update");

    assert_eq!(updated.id, created.id);
    assert_eq!(store.get(created.id).await.expect("get").fields, replacement);
}

#[rstest]
#[tokio::test]
async fn missing_ids_report_not_found(store: InMemoryResourceStore<ArticleFields>) {
    let id = ResourceId::generate();

    assert_eq!(
        store.get(id).await.expect_err("get"),
        ResourceStoreError::not_found(id)
    );
    assert_eq!(
        store.update(id, article("Ghost")).await.expect_err("update"),
        ResourceStoreError::not_found(id)
    );
    assert_eq!(
        store.delete(id).await.expect_err("delete"),
        ResourceStoreError::not_found(id)
    );
}

#[rstest]
#[tokio::test]
async fn deleted_ids_are_retired(store: InMemoryResourceStore<ArticleFields>) {
    let created = store.create(article("Short lived")).await.expect("create");

    store.delete(created.id).await.expect("first delete");
    assert!(store.delete(created.id).await.is_err());
    assert!(store.get(created.id).await.is_err());

    let state = store.state.read().expect("lock");
    assert!(state.retired.contains(&created.id));
}

#[tokio::test]
async fn poisoned_lock_reports_unavailable() {
    let store = Arc::new(InMemoryResourceStore::<UserFields>::new());
    let poisoner = Arc::clone(&store);
    let outcome = std::thread::spawn(move || {
        let _guard = poisoner.state.write().expect("lock");
        panic!("poison the store lock");
    })
    .join();
    assert!(outcome.is_err());

    let error = store.list().await.expect_err("lock poisoned");
    assert_eq!(
        error,
        ResourceStoreError::unavailable("user store lock poisoned")
    );
}
