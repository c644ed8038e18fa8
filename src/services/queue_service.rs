//! Queue coordinator service.
//!
//! Wires the pure engine (ordering, wait estimation, operating hours) to the
//! collaborator ports: check-in, lifecycle transitions, position persistence,
//! aggregate-cache invalidation, and best-effort notification.
//!
//! Every mutation for a location runs under that location's async lock, so
//! the ordering engine always sees a consistent waiting-set snapshot. Cache
//! invalidation happens strictly after the store mutation commits, and
//! notification delivery failures are logged and swallowed, never surfaced.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::Mutex as AsyncMutex;
use tracing::{info, instrument, warn};

use crate::adapters::cache::AggregateCache;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::models::{
    AgentId, ClientId, EntryId, EntryStatus, Location, LocationId, PriorityTier, QueueEntry,
    ServiceTypeId,
};
use crate::domain::ports::{
    AgentPool, ClientStore, EntryStore, Notifier, QueueEvent, ServiceCatalog,
};
use crate::services::hours::{HoursValidator, LocalMoment};
use crate::services::ordering::QueueOrdering;
use crate::services::wait_estimator::{format_wait, WaitEstimator};

/// Coordinates queue mutations and derived-value reads for locations.
pub struct QueueService {
    entries: Arc<dyn EntryStore>,
    clients: Arc<dyn ClientStore>,
    catalog: Arc<dyn ServiceCatalog>,
    agents: Arc<dyn AgentPool>,
    notifier: Arc<dyn Notifier>,
    aggregates: AggregateCache,
    ordering: QueueOrdering,
    estimator: WaitEstimator,
    hours: HoursValidator,
    location_locks: StdMutex<HashMap<LocationId, Arc<AsyncMutex<()>>>>,
}

impl QueueService {
    pub fn new(
        entries: Arc<dyn EntryStore>,
        clients: Arc<dyn ClientStore>,
        catalog: Arc<dyn ServiceCatalog>,
        agents: Arc<dyn AgentPool>,
        notifier: Arc<dyn Notifier>,
        aggregates: AggregateCache,
    ) -> Self {
        Self {
            entries,
            clients,
            catalog,
            agents,
            notifier,
            aggregates,
            ordering: QueueOrdering::new(),
            estimator: WaitEstimator::new(),
            hours: HoursValidator::new(),
            location_locks: StdMutex::new(HashMap::new()),
        }
    }

    /// Check a client in to a location's queue.
    ///
    /// Validates operating hours and waiting capacity, snapshots the
    /// client's loyalty state into a priority tier, creates the WAITING
    /// entry, and recomputes positions for the location.
    ///
    /// `arrived_at` is the arrival timestamp recorded on the entry; `local`
    /// is the caller-localized moment used for the hours check.
    #[instrument(skip(self, location, local), fields(location_id = %location.id), err)]
    pub async fn check_in(
        &self,
        location: &Location,
        client_id: ClientId,
        service_type_id: ServiceTypeId,
        arrived_at: DateTime<Utc>,
        local: LocalMoment,
    ) -> DomainResult<QueueEntry> {
        let lock = self.location_lock(location.id);
        let _guard = lock.lock().await;

        if !self.hours.is_open(location, local) {
            return Err(DomainError::LocationClosed(location.name.clone()));
        }

        // Validate the service reference up front so a dangling id never
        // produces an entry we cannot estimate
        if self
            .catalog
            .duration_minutes(service_type_id)
            .await?
            .is_none()
        {
            return Err(DomainError::ServiceTypeNotFound(service_type_id));
        }

        let waiting = self.entries.list_waiting(location.id).await?;
        if waiting.len() >= location.max_waiting as usize {
            return Err(DomainError::CapacityReached {
                location: location.name.clone(),
                max_waiting: location.max_waiting,
            });
        }

        let snapshot = self
            .clients
            .loyalty_snapshot(client_id)
            .await?
            .ok_or(DomainError::ClientNotFound(client_id))?;
        let tier = PriorityTier::classify(snapshot.visit_count, snapshot.is_vip);

        let sequence = self.entries.next_sequence(location.id).await?;
        let mut entry = QueueEntry::new(
            location.id,
            client_id,
            service_type_id,
            tier,
            arrived_at,
            sequence,
        );
        self.entries.insert(&entry).await?;

        let positions = self.refresh_positions(location).await?;
        entry.position = positions
            .iter()
            .find(|(id, _)| *id == entry.id)
            .map(|(_, pos)| *pos);

        info!(entry_id = %entry.id, %tier, position = ?entry.position, "client checked in");

        self.aggregates.invalidate_location(location.id).await;
        self.notify(QueueEvent::QueueChanged {
            location_id: location.id,
        })
        .await;

        Ok(entry)
    }

    /// Begin serving an entry: WAITING -> IN_SERVICE.
    #[instrument(skip(self, location), fields(location_id = %location.id), err)]
    pub async fn start_service(
        &self,
        location: &Location,
        entry_id: EntryId,
        agent_id: AgentId,
        now: DateTime<Utc>,
    ) -> DomainResult<QueueEntry> {
        let lock = self.location_lock(location.id);
        let _guard = lock.lock().await;

        let mut entry = self.load_entry(location, entry_id).await?;
        let from = entry.status;
        entry.start_service(agent_id, now)?;
        self.entries.update(&entry).await?;

        self.after_transition(location, &entry, from).await;
        Ok(entry)
    }

    /// Finish serving an entry: IN_SERVICE -> COMPLETED.
    ///
    /// On success the client's visit count is incremented, their last-visit
    /// timestamp set, and the service type's popularity bumped.
    #[instrument(skip(self, location), fields(location_id = %location.id), err)]
    pub async fn finish_service(
        &self,
        location: &Location,
        entry_id: EntryId,
        now: DateTime<Utc>,
    ) -> DomainResult<QueueEntry> {
        let lock = self.location_lock(location.id);
        let _guard = lock.lock().await;

        let mut entry = self.load_entry(location, entry_id).await?;
        let from = entry.status;
        entry.finish_service(now)?;
        self.entries.update(&entry).await?;

        self.clients.record_visit(entry.client_id, now).await?;
        self.catalog.record_completion(entry.service_type_id).await?;

        self.after_transition(location, &entry, from).await;
        Ok(entry)
    }

    /// Cancel a WAITING entry.
    #[instrument(skip(self, location), fields(location_id = %location.id), err)]
    pub async fn cancel(
        &self,
        location: &Location,
        entry_id: EntryId,
    ) -> DomainResult<QueueEntry> {
        let lock = self.location_lock(location.id);
        let _guard = lock.lock().await;

        let mut entry = self.load_entry(location, entry_id).await?;
        let from = entry.status;
        entry.cancel()?;
        self.entries.update(&entry).await?;

        self.after_transition(location, &entry, from).await;
        Ok(entry)
    }

    /// Mark an entry as a no-show, from WAITING or IN_SERVICE.
    #[instrument(skip(self, location), fields(location_id = %location.id), err)]
    pub async fn mark_no_show(
        &self,
        location: &Location,
        entry_id: EntryId,
    ) -> DomainResult<QueueEntry> {
        let lock = self.location_lock(location.id);
        let _guard = lock.lock().await;

        let mut entry = self.load_entry(location, entry_id).await?;
        let from = entry.status;
        entry.mark_no_show()?;
        self.entries.update(&entry).await?;

        self.after_transition(location, &entry, from).await;
        Ok(entry)
    }

    /// The location's waiting set in service order, positions filled in.
    ///
    /// Read-only: computed positions are returned but not persisted.
    #[instrument(skip(self, location), fields(location_id = %location.id), err)]
    pub async fn queue_snapshot(&self, location: &Location) -> DomainResult<Vec<QueueEntry>> {
        let waiting = self.entries.list_waiting(location.id).await?;
        let ordered: Vec<QueueEntry> = self
            .ordering
            .order(&waiting, location.priority_enabled)
            .into_iter()
            .cloned()
            .collect();
        Ok(ordered
            .into_iter()
            .enumerate()
            .map(|(idx, mut entry)| {
                entry.position = Some(u32::try_from(idx + 1).unwrap_or(u32::MAX));
                entry
            })
            .collect())
    }

    /// Estimated wait in minutes for a new arrival at the location.
    ///
    /// Served from the aggregate cache when fresh; a miss (or a cache fault)
    /// recomputes from the current waiting set and active-agent count.
    #[instrument(skip(self, location), fields(location_id = %location.id), err)]
    pub async fn estimated_wait(&self, location: &Location) -> DomainResult<u64> {
        if let Some(minutes) = self.aggregates.cached_wait(location.id).await {
            return Ok(minutes);
        }

        let waiting = self.entries.list_waiting(location.id).await?;
        let durations = self.durations_of(&waiting).await?;
        let active = self.agents.active_agent_count(location.id).await?;
        let minutes = self.estimator.estimate(&durations, active);

        self.aggregates.store_wait(location.id, minutes).await;
        Ok(minutes)
    }

    /// Human-readable form of [`Self::estimated_wait`].
    pub async fn estimated_wait_label(&self, location: &Location) -> DomainResult<String> {
        Ok(format_wait(self.estimated_wait(location).await?))
    }

    /// Estimated wait in minutes until the given entry's service starts,
    /// counting every entry ranked at or before it. Not cached.
    #[instrument(skip(self, location), fields(location_id = %location.id), err)]
    pub async fn entry_wait(
        &self,
        location: &Location,
        entry_id: EntryId,
    ) -> DomainResult<u64> {
        let waiting = self.entries.list_waiting(location.id).await?;
        let ordered = self.ordering.order(&waiting, location.priority_enabled);
        let rank = ordered
            .iter()
            .position(|e| e.id == entry_id)
            .ok_or(DomainError::EntryNotFound(entry_id))?;

        let ahead: Vec<QueueEntry> = ordered[..=rank].iter().map(|e| (*e).clone()).collect();
        let durations = self.durations_of(&ahead).await?;
        let active = self.agents.active_agent_count(location.id).await?;
        Ok(self.estimator.estimate(&durations, active))
    }

    /// Whether the location currently accepts check-ins.
    ///
    /// Served from the aggregate cache when fresh; `local` must already be
    /// localized by the caller.
    pub async fn is_open(&self, location: &Location, local: LocalMoment) -> bool {
        if let Some(open) = self.aggregates.cached_open(location.id).await {
            return open;
        }
        let open = self.hours.is_open(location, local);
        self.aggregates.store_open(location.id, open).await;
        open
    }

    /// Drop every cached aggregate, e.g. after a location settings change.
    pub async fn invalidate_location(&self, location_id: LocationId) {
        self.aggregates.invalidate_location(location_id).await;
    }

    fn location_lock(&self, id: LocationId) -> Arc<AsyncMutex<()>> {
        let mut locks = self
            .location_locks
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        locks
            .entry(id)
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }

    async fn load_entry(
        &self,
        location: &Location,
        entry_id: EntryId,
    ) -> DomainResult<QueueEntry> {
        let entry = self
            .entries
            .get(entry_id)
            .await?
            .ok_or(DomainError::EntryNotFound(entry_id))?;
        if entry.location_id != location.id {
            return Err(DomainError::EntryNotFound(entry_id));
        }
        Ok(entry)
    }

    /// Recompute and persist positions for the location's waiting set.
    async fn refresh_positions(&self, location: &Location) -> DomainResult<Vec<(EntryId, u32)>> {
        let waiting = self.entries.list_waiting(location.id).await?;
        let positions = self.ordering.positions(&waiting, location.priority_enabled);
        self.entries
            .update_positions(location.id, &positions)
            .await?;
        Ok(positions)
    }

    /// Shared tail of every lifecycle transition: reorder, invalidate
    /// strictly after the commit, then notify best-effort.
    async fn after_transition(&self, location: &Location, entry: &QueueEntry, from: EntryStatus) {
        if let Err(err) = self.refresh_positions(location).await {
            warn!(%err, "position refresh failed; positions recompute on next read");
        }
        self.aggregates.invalidate_location(location.id).await;

        info!(entry_id = %entry.id, %from, to = %entry.status, "entry transitioned");

        self.notify(QueueEvent::EntryStatusChanged {
            entry_id: entry.id,
            location_id: location.id,
            from,
            to: entry.status,
        })
        .await;
        self.notify(QueueEvent::QueueChanged {
            location_id: location.id,
        })
        .await;
    }

    async fn notify(&self, event: QueueEvent) {
        if let Err(err) = self.notifier.publish(event).await {
            warn!(%err, "notification delivery failed; continuing");
        }
    }

    async fn durations_of(&self, entries: &[QueueEntry]) -> DomainResult<Vec<u32>> {
        let mut durations = Vec::with_capacity(entries.len());
        for entry in entries {
            let minutes = self
                .catalog
                .duration_minutes(entry.service_type_id)
                .await?
                .ok_or(DomainError::ServiceTypeNotFound(entry.service_type_id))?;
            durations.push(minutes);
        }
        Ok(durations)
    }
}
