//! In-memory entry store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{EntryId, EntryStatus, LocationId, QueueEntry};
use crate::domain::ports::EntryStore;

/// HashMap-backed [`EntryStore`].
#[derive(Default)]
pub struct MemoryEntryStore {
    entries: RwLock<HashMap<EntryId, QueueEntry>>,
    sequences: RwLock<HashMap<LocationId, u64>>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn insert(&self, entry: &QueueEntry) -> DomainResult<()> {
        self.entries
            .write()
            .await
            .insert(entry.id, entry.clone());
        Ok(())
    }

    async fn get(&self, id: EntryId) -> DomainResult<Option<QueueEntry>> {
        Ok(self.entries.read().await.get(&id).cloned())
    }

    async fn update(&self, entry: &QueueEntry) -> DomainResult<()> {
        let mut entries = self.entries.write().await;
        if !entries.contains_key(&entry.id) {
            return Err(DomainError::EntryNotFound(entry.id));
        }
        entries.insert(entry.id, entry.clone());
        Ok(())
    }

    async fn list_waiting(&self, location_id: LocationId) -> DomainResult<Vec<QueueEntry>> {
        let mut waiting: Vec<QueueEntry> = self
            .entries
            .read()
            .await
            .values()
            .filter(|e| e.location_id == location_id && e.status == EntryStatus::Waiting)
            .cloned()
            .collect();
        waiting.sort_by(|a, b| {
            a.arrived_at
                .cmp(&b.arrived_at)
                .then_with(|| a.sequence.cmp(&b.sequence))
        });
        Ok(waiting)
    }

    async fn next_sequence(&self, location_id: LocationId) -> DomainResult<u64> {
        let mut sequences = self.sequences.write().await;
        let next = sequences.entry(location_id).or_insert(0);
        *next += 1;
        Ok(*next)
    }

    async fn update_positions(
        &self,
        location_id: LocationId,
        positions: &[(EntryId, u32)],
    ) -> DomainResult<()> {
        let mut entries = self.entries.write().await;
        for (id, position) in positions {
            if let Some(entry) = entries.get_mut(id) {
                if entry.location_id == location_id {
                    entry.position = Some(*position);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ClientId, PriorityTier, ServiceTypeId};
    use chrono::Utc;

    #[tokio::test]
    async fn test_sequences_are_per_location_and_monotonic() {
        let store = MemoryEntryStore::new();
        let a = LocationId::new();
        let b = LocationId::new();

        assert_eq!(store.next_sequence(a).await.unwrap(), 1);
        assert_eq!(store.next_sequence(a).await.unwrap(), 2);
        assert_eq!(store.next_sequence(b).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_waiting_filters_and_orders() {
        let store = MemoryEntryStore::new();
        let location = LocationId::new();
        let now = Utc::now();

        let mut first = QueueEntry::new(
            location,
            ClientId::new(),
            ServiceTypeId::new(),
            PriorityTier::Normal,
            now,
            1,
        );
        let second = QueueEntry::new(
            location,
            ClientId::new(),
            ServiceTypeId::new(),
            PriorityTier::Normal,
            now + chrono::Duration::seconds(5),
            2,
        );
        store.insert(&second).await.unwrap();
        store.insert(&first).await.unwrap();

        let waiting = store.list_waiting(location).await.unwrap();
        assert_eq!(waiting.len(), 2);
        assert_eq!(waiting[0].id, first.id);

        first.cancel().unwrap();
        store.update(&first).await.unwrap();
        let waiting = store.list_waiting(location).await.unwrap();
        assert_eq!(waiting.len(), 1);
        assert_eq!(waiting[0].id, second.id);
    }

    #[tokio::test]
    async fn test_update_unknown_entry_fails() {
        let store = MemoryEntryStore::new();
        let orphan = QueueEntry::new(
            LocationId::new(),
            ClientId::new(),
            ServiceTypeId::new(),
            PriorityTier::Normal,
            Utc::now(),
            1,
        );
        assert!(matches!(
            store.update(&orphan).await,
            Err(DomainError::EntryNotFound(_))
        ));
    }
}
