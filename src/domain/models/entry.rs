//! Queue entry domain model and lifecycle state machine.
//!
//! An entry is one client's place in a location's queue. It is created in
//! WAITING at check-in and only ever mutated through the guarded transitions
//! below; terminal states are final markers, never deleted by the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::{DomainError, DomainResult};

use super::ids::{AgentId, ClientId, EntryId, LocationId, ServiceTypeId};
use super::tier::PriorityTier;

/// Status of a queue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// Checked in, waiting to be served
    Waiting,
    /// Currently being served by an agent
    InService,
    /// Service finished normally
    Completed,
    /// Client cancelled before service started
    Cancelled,
    /// Client did not show up when called
    NoShow,
}

impl Default for EntryStatus {
    fn default() -> Self {
        Self::Waiting
    }
}

impl EntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::InService => "in_service",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::NoShow => "no_show",
        }
    }

    /// Check if this is a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled | Self::NoShow)
    }

    /// Valid transitions from this status.
    ///
    /// No-show is reachable from both WAITING and IN_SERVICE: a client can
    /// vanish before being called or walk away mid-call. The same rule
    /// applies at every call site.
    pub fn valid_transitions(&self) -> Vec<EntryStatus> {
        match self {
            Self::Waiting => vec![Self::InService, Self::Cancelled, Self::NoShow],
            Self::InService => vec![Self::Completed, Self::NoShow],
            Self::Completed | Self::Cancelled | Self::NoShow => vec![],
        }
    }

    pub fn can_transition_to(&self, new_status: Self) -> bool {
        self.valid_transitions().contains(&new_status)
    }
}

impl fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "waiting" => Ok(Self::Waiting),
            "in_service" => Ok(Self::InService),
            "completed" => Ok(Self::Completed),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            "no_show" => Ok(Self::NoShow),
            _ => Err(format!("invalid entry status: {s}")),
        }
    }
}

/// One client's place in a location's service queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueEntry {
    /// Unique identifier
    pub id: EntryId,
    /// Location whose queue this entry belongs to
    pub location_id: LocationId,
    /// Client who checked in
    pub client_id: ClientId,
    /// Requested service
    pub service_type_id: ServiceTypeId,
    /// Agent serving this entry, set when service starts
    pub agent_id: Option<AgentId>,
    /// Current status
    pub status: EntryStatus,
    /// Priority tier, snapshotted from the client's loyalty state at check-in
    pub tier: PriorityTier,
    /// Check-in timestamp; immutable after creation
    pub arrived_at: DateTime<Utc>,
    /// Creation sequence number, the stable tie-break for identical arrivals
    pub sequence: u64,
    /// When service started
    pub started_at: Option<DateTime<Utc>>,
    /// When service finished
    pub finished_at: Option<DateTime<Utc>>,
    /// 1-based rank among WAITING peers; derived, recomputed on every
    /// waiting-set change, never authoritative
    pub position: Option<u32>,
}

impl QueueEntry {
    /// Create a new WAITING entry at check-in.
    pub fn new(
        location_id: LocationId,
        client_id: ClientId,
        service_type_id: ServiceTypeId,
        tier: PriorityTier,
        arrived_at: DateTime<Utc>,
        sequence: u64,
    ) -> Self {
        Self {
            id: EntryId::new(),
            location_id,
            client_id,
            service_type_id,
            agent_id: None,
            status: EntryStatus::Waiting,
            tier,
            arrived_at,
            sequence,
            started_at: None,
            finished_at: None,
            position: None,
        }
    }

    /// Check if this entry can transition to the given status.
    pub fn can_transition_to(&self, new_status: EntryStatus) -> bool {
        self.status.can_transition_to(new_status)
    }

    /// Check if the entry is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    fn guard(&self, to: EntryStatus) -> DomainResult<()> {
        if self.can_transition_to(to) {
            Ok(())
        } else {
            Err(DomainError::InvalidTransition {
                from: self.status,
                to,
            })
        }
    }

    /// Begin service: WAITING -> IN_SERVICE.
    ///
    /// Assigns the serving agent and stamps `started_at`. Fails without
    /// touching any field if the entry is not WAITING.
    pub fn start_service(&mut self, agent_id: AgentId, now: DateTime<Utc>) -> DomainResult<()> {
        self.guard(EntryStatus::InService)?;
        self.status = EntryStatus::InService;
        self.agent_id = Some(agent_id);
        self.started_at = Some(now);
        Ok(())
    }

    /// Finish service: IN_SERVICE -> COMPLETED.
    ///
    /// Stamps `finished_at`. The caller applies the client visit count and
    /// service popularity side effects only after this succeeds.
    pub fn finish_service(&mut self, now: DateTime<Utc>) -> DomainResult<()> {
        self.guard(EntryStatus::Completed)?;
        self.status = EntryStatus::Completed;
        self.finished_at = Some(now);
        Ok(())
    }

    /// Cancel: WAITING -> CANCELLED.
    pub fn cancel(&mut self) -> DomainResult<()> {
        self.guard(EntryStatus::Cancelled)?;
        self.status = EntryStatus::Cancelled;
        Ok(())
    }

    /// Mark as a no-show, from WAITING or IN_SERVICE.
    pub fn mark_no_show(&mut self) -> DomainResult<()> {
        self.guard(EntryStatus::NoShow)?;
        self.status = EntryStatus::NoShow;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waiting_entry() -> QueueEntry {
        QueueEntry::new(
            LocationId::new(),
            ClientId::new(),
            ServiceTypeId::new(),
            PriorityTier::Normal,
            Utc::now(),
            1,
        )
    }

    #[test]
    fn test_new_entry_is_waiting() {
        let entry = waiting_entry();
        assert_eq!(entry.status, EntryStatus::Waiting);
        assert!(entry.agent_id.is_none());
        assert!(entry.position.is_none());
    }

    #[test]
    fn test_happy_path_waiting_to_completed() {
        let mut entry = waiting_entry();
        let agent = AgentId::new();
        let now = Utc::now();

        entry.start_service(agent, now).unwrap();
        assert_eq!(entry.status, EntryStatus::InService);
        assert_eq!(entry.agent_id, Some(agent));
        assert_eq!(entry.started_at, Some(now));

        entry.finish_service(now).unwrap();
        assert_eq!(entry.status, EntryStatus::Completed);
        assert_eq!(entry.finished_at, Some(now));
        assert!(entry.is_terminal());
    }

    #[test]
    fn test_cancel_only_from_waiting() {
        let mut entry = waiting_entry();
        entry.cancel().unwrap();
        assert_eq!(entry.status, EntryStatus::Cancelled);

        // Second cancel must fail, not silently succeed
        let err = entry.cancel().unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidTransition {
                from: EntryStatus::Cancelled,
                to: EntryStatus::Cancelled,
            }
        ));
    }

    #[test]
    fn test_cancel_rejected_once_in_service() {
        let mut entry = waiting_entry();
        entry.start_service(AgentId::new(), Utc::now()).unwrap();
        assert!(entry.cancel().is_err());
    }

    #[test]
    fn test_no_show_from_waiting_and_in_service() {
        let mut waiting = waiting_entry();
        waiting.mark_no_show().unwrap();
        assert_eq!(waiting.status, EntryStatus::NoShow);

        let mut serving = waiting_entry();
        serving.start_service(AgentId::new(), Utc::now()).unwrap();
        serving.mark_no_show().unwrap();
        assert_eq!(serving.status, EntryStatus::NoShow);
    }

    #[test]
    fn test_no_show_rejected_from_terminal() {
        let mut entry = waiting_entry();
        entry.cancel().unwrap();
        assert!(entry.mark_no_show().is_err());
    }

    #[test]
    fn test_failed_transition_leaves_entry_unmodified() {
        let mut entry = waiting_entry();
        let before = entry.clone();

        // finish_service requires IN_SERVICE; the failure must not write
        // any field
        assert!(entry.finish_service(Utc::now()).is_err());
        assert_eq!(entry.status, before.status);
        assert_eq!(entry.finished_at, before.finished_at);
        assert_eq!(entry.agent_id, before.agent_id);
    }

    #[test]
    fn test_start_service_not_idempotent() {
        let mut entry = waiting_entry();
        let first_agent = AgentId::new();
        let started = Utc::now();
        entry.start_service(first_agent, started).unwrap();

        let err = entry.start_service(AgentId::new(), Utc::now()).unwrap_err();
        assert!(matches!(err, DomainError::InvalidTransition { .. }));
        // The original assignment survives the rejected repeat
        assert_eq!(entry.agent_id, Some(first_agent));
        assert_eq!(entry.started_at, Some(started));
    }

    #[test]
    fn test_finish_not_idempotent() {
        let mut entry = waiting_entry();
        entry.start_service(AgentId::new(), Utc::now()).unwrap();
        entry.finish_service(Utc::now()).unwrap();
        assert!(entry.finish_service(Utc::now()).is_err());
    }

    #[test]
    fn test_terminal_states_have_no_transitions() {
        for status in [
            EntryStatus::Completed,
            EntryStatus::Cancelled,
            EntryStatus::NoShow,
        ] {
            assert!(status.valid_transitions().is_empty());
            assert!(status.is_terminal());
        }
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            EntryStatus::Waiting,
            EntryStatus::InService,
            EntryStatus::Completed,
            EntryStatus::Cancelled,
            EntryStatus::NoShow,
        ] {
            assert_eq!(status.as_str().parse::<EntryStatus>().unwrap(), status);
        }
        // Accept the single-l spelling as well
        assert_eq!(
            "canceled".parse::<EntryStatus>().unwrap(),
            EntryStatus::Cancelled
        );
    }
}
