//! Strongly-typed identifiers.
//!
//! Each entity gets its own UUID-backed newtype so that an entry id can never
//! be passed where a client id is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of a service location.
    LocationId
);
entity_id!(
    /// Identifier of a client.
    ClientId
);
entity_id!(
    /// Identifier of a service type offered at a location.
    ServiceTypeId
);
entity_id!(
    /// Identifier of an agent (barber).
    AgentId
);
entity_id!(
    /// Identifier of a queue entry.
    EntryId
);
