//! Persistence of imported productions and their displayed cast.

use std::collections::HashMap;

use async_trait::async_trait;
use cast_model::CastMemberId;
use serde::Serialize;
use tokio::sync::RwLock;

use crate::documents::{CastMemberDocument, ProductionCastMemberRecord, ProductionDocument};
use crate::error::Result;

/// Document store the importer writes into.
///
/// Writes are keyed and idempotent: importing the same production twice
/// leaves the store in the same state.
#[async_trait]
pub trait CastStore: Send + Sync {
    async fn save_production(&self, key: &str, document: ProductionDocument) -> Result<()>;

    /// Create the person, or update the fields of an existing one.
    async fn merge_cast_member(&self, id: CastMemberId, document: CastMemberDocument)
        -> Result<()>;

    async fn save_production_cast_member(
        &self,
        key: &str,
        record: ProductionCastMemberRecord,
    ) -> Result<()>;
}

/// Everything a [`MemoryCastStore`] holds, ready to serialize.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreSnapshot {
    pub productions: HashMap<String, ProductionDocument>,
    pub cast_members: HashMap<CastMemberId, CastMemberDocument>,
    pub production_cast_members: HashMap<String, ProductionCastMemberRecord>,
}

/// In-process store backed by maps.
#[derive(Debug, Default)]
pub struct MemoryCastStore {
    productions: RwLock<HashMap<String, ProductionDocument>>,
    cast_members: RwLock<HashMap<CastMemberId, CastMemberDocument>>,
    production_cast_members: RwLock<HashMap<String, ProductionCastMemberRecord>>,
}

impl MemoryCastStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn production(&self, key: &str) -> Option<ProductionDocument> {
        self.productions.read().await.get(key).cloned()
    }

    pub async fn cast_member(&self, id: CastMemberId) -> Option<CastMemberDocument> {
        self.cast_members.read().await.get(&id).cloned()
    }

    pub async fn cast_member_count(&self) -> usize {
        self.cast_members.read().await.len()
    }

    /// Join records of one production, in display order.
    pub async fn production_cast(&self, production_key: &str) -> Vec<ProductionCastMemberRecord> {
        let mut records: Vec<ProductionCastMemberRecord> = self
            .production_cast_members
            .read()
            .await
            .values()
            .filter(|record| record.production_id == production_key)
            .cloned()
            .collect();
        records.sort_by_key(|record| record.order_number);
        records
    }

    pub async fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            productions: self.productions.read().await.clone(),
            cast_members: self.cast_members.read().await.clone(),
            production_cast_members: self.production_cast_members.read().await.clone(),
        }
    }
}

#[async_trait]
impl CastStore for MemoryCastStore {
    async fn save_production(&self, key: &str, document: ProductionDocument) -> Result<()> {
        self.productions
            .write()
            .await
            .insert(key.to_string(), document);
        Ok(())
    }

    async fn merge_cast_member(
        &self,
        id: CastMemberId,
        document: CastMemberDocument,
    ) -> Result<()> {
        let mut cast_members = self.cast_members.write().await;
        cast_members
            .entry(id)
            .and_modify(|existing| {
                existing.name.clone_from(&document.name);
                existing.image_url.clone_from(&document.image_url);
            })
            .or_insert(document);
        Ok(())
    }

    async fn save_production_cast_member(
        &self,
        key: &str,
        record: ProductionCastMemberRecord,
    ) -> Result<()> {
        self.production_cast_members
            .write()
            .await
            .insert(key.to_string(), record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cast_model::MediaType;

    fn person(name: &str, image_url: &str) -> CastMemberDocument {
        CastMemberDocument {
            name: name.to_string(),
            image_url: image_url.to_string(),
        }
    }

    #[tokio::test]
    async fn test_merge_updates_existing_member() {
        let store = MemoryCastStore::new();
        store.merge_cast_member(7, person("Old Name", "/old.jpg")).await.unwrap();
        store.merge_cast_member(7, person("New Name", "/new.jpg")).await.unwrap();

        assert_eq!(store.cast_member_count().await, 1);
        assert_eq!(store.cast_member(7).await, Some(person("New Name", "/new.jpg")));
    }

    #[tokio::test]
    async fn test_production_cast_in_display_order() {
        let store = MemoryCastStore::new();
        for (member, order) in [(3, 2), (1, 1), (9, 3)] {
            store
                .save_production_cast_member(
                    &format!("movie-1_{}", member),
                    ProductionCastMemberRecord {
                        production_id: "movie-1".to_string(),
                        cast_member_id: member,
                        role: "Role".to_string(),
                        order_number: order,
                    },
                )
                .await
                .unwrap();
        }

        let ids: Vec<u64> = store
            .production_cast("movie-1")
            .await
            .iter()
            .map(|r| r.cast_member_id)
            .collect();
        assert_eq!(ids, vec![1, 3, 9]);
        assert!(store.production_cast("movie-2").await.is_empty());
    }

    #[tokio::test]
    async fn test_save_production_overwrites() {
        let store = MemoryCastStore::new();
        let mut doc = ProductionDocument {
            media_type: MediaType::Movie,
            title: "Draft".to_string(),
            year: "1999".to_string(),
            image_url: "/placeholder.jpg".to_string(),
        };
        store.save_production("movie-1", doc.clone()).await.unwrap();
        doc.title = "Final".to_string();
        store.save_production("movie-1", doc.clone()).await.unwrap();

        assert_eq!(store.production("movie-1").await, Some(doc));
        assert_eq!(store.snapshot().await.productions.len(), 1);
    }
}
