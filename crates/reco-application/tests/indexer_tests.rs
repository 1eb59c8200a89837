//! Tests for the catalog indexer

mod common;

use std::sync::Arc;

use common::FailingEmbeddingProvider;
use reco_application::{CatalogIndexer, EmbeddingGateway};
use reco_domain::error::Error;
use reco_domain::value_objects::ProductAttributes;
use reco_providers::embedding::NullEmbeddingProvider;
use reco_providers::index::InMemoryVectorIndex;

fn product(name: &str, description: &str) -> ProductAttributes {
    ProductAttributes {
        name: name.to_string(),
        description: description.to_string(),
        category: "Sports".to_string(),
        tags: vec!["sport".to_string()],
        price: 40.0,
        brand: None,
    }
}

fn indexer_with_null_provider() -> CatalogIndexer {
    let gateway = Arc::new(EmbeddingGateway::new(Arc::new(
        NullEmbeddingProvider::with_dimensions(8),
    )));
    CatalogIndexer::new(gateway, Arc::new(InMemoryVectorIndex::new()))
}

#[tokio::test]
async fn indexing_stores_an_embedding_for_the_product() {
    let indexer = indexer_with_null_provider();
    indexer
        .index_product("p1", &product("Shoes", "Running shoes"))
        .await
        .unwrap();

    let stored = indexer.embedding_of("p1").await.unwrap();
    assert_eq!(stored.vector.len(), 8);
    assert_eq!(indexer.indexed_count().await.unwrap(), 1);
}

#[tokio::test]
async fn reindexing_with_changed_text_replaces_the_embedding() {
    let indexer = indexer_with_null_provider();
    indexer
        .index_product("p1", &product("Shoes", "Running shoes"))
        .await
        .unwrap();
    let before = indexer.embedding_of("p1").await.unwrap();

    indexer
        .index_product("p1", &product("Shoes", "Waterproof trail shoes"))
        .await
        .unwrap();
    let after = indexer.embedding_of("p1").await.unwrap();

    assert_ne!(before.vector, after.vector);
    assert_eq!(indexer.indexed_count().await.unwrap(), 1);
}

#[tokio::test]
async fn batch_indexing_stores_every_product() {
    let indexer = indexer_with_null_provider();
    let batch = vec![
        ("p1".to_string(), product("Shoes", "Running shoes")),
        ("p2".to_string(), product("Kettle", "Steel kettle")),
        ("p3".to_string(), product("Tent", "Two-person tent")),
    ];

    indexer.index_products(&batch).await.unwrap();
    assert_eq!(indexer.indexed_count().await.unwrap(), 3);
}

#[tokio::test]
async fn failed_batch_indexes_nothing() {
    let gateway = Arc::new(EmbeddingGateway::new(Arc::new(FailingEmbeddingProvider)));
    let indexer = CatalogIndexer::new(gateway, Arc::new(InMemoryVectorIndex::new()));

    let batch = vec![("p1".to_string(), product("Shoes", "Running shoes"))];
    let err = indexer.index_products(&batch).await.unwrap_err();

    assert!(matches!(err, Error::Embedding { .. }));
    assert_eq!(indexer.indexed_count().await.unwrap(), 0);
}

#[tokio::test]
async fn removal_is_idempotent_and_clears_the_entry() {
    let indexer = indexer_with_null_provider();
    indexer
        .index_product("p1", &product("Shoes", "Running shoes"))
        .await
        .unwrap();

    indexer.remove_product("p1").await.unwrap();
    indexer.remove_product("p1").await.unwrap();

    assert_eq!(indexer.indexed_count().await.unwrap(), 0);
    let err = indexer.embedding_of("p1").await.unwrap_err();
    assert!(matches!(err, Error::NotIndexed { .. }));
}

#[tokio::test]
async fn embedding_of_unknown_product_reports_not_indexed() {
    let indexer = indexer_with_null_provider();
    let err = indexer.embedding_of("ghost").await.unwrap_err();
    match err {
        Error::NotIndexed { id } => assert_eq!(id, "ghost"),
        other => panic!("expected NotIndexed, got {other:?}"),
    }
}
