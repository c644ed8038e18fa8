//! Priority tier classification.
//!
//! A tier is derived once, at check-in, from the client's loyalty state at
//! that instant. Later changes to the client's visit count never reorder
//! entries that already exist.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visit-count threshold for the Bronze tier.
pub const BRONZE_VISITS: u32 = 5;
/// Visit-count threshold for the Silver tier.
pub const SILVER_VISITS: u32 = 10;
/// Visit-count threshold for the Gold tier.
pub const GOLD_VISITS: u32 = 20;

/// Priority classification used for queue ordering, lowest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PriorityTier {
    Normal = 0,
    Bronze = 1,
    Silver = 2,
    Gold = 3,
    Vip = 4,
}

impl Default for PriorityTier {
    fn default() -> Self {
        Self::Normal
    }
}

impl PriorityTier {
    /// Classify a client's loyalty snapshot into a tier.
    ///
    /// The VIP flag overrides everything; otherwise the tier follows the
    /// visit-count thresholds.
    pub fn classify(visit_count: u32, is_vip: bool) -> Self {
        if is_vip {
            Self::Vip
        } else if visit_count >= GOLD_VISITS {
            Self::Gold
        } else if visit_count >= SILVER_VISITS {
            Self::Silver
        } else if visit_count >= BRONZE_VISITS {
            Self::Bronze
        } else {
            Self::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bronze => "bronze",
            Self::Silver => "silver",
            Self::Gold => "gold",
            Self::Vip => "vip",
        }
    }

    /// Human-readable label for display surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Vip => "VIP",
        }
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PriorityTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "bronze" => Ok(Self::Bronze),
            "silver" => Ok(Self::Silver),
            "gold" => Ok(Self::Gold),
            "vip" => Ok(Self::Vip),
            _ => Err(format!("invalid priority tier: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(PriorityTier::classify(0, false), PriorityTier::Normal);
        assert_eq!(PriorityTier::classify(4, false), PriorityTier::Normal);
        assert_eq!(PriorityTier::classify(5, false), PriorityTier::Bronze);
        assert_eq!(PriorityTier::classify(9, false), PriorityTier::Bronze);
        assert_eq!(PriorityTier::classify(10, false), PriorityTier::Silver);
        assert_eq!(PriorityTier::classify(19, false), PriorityTier::Silver);
        assert_eq!(PriorityTier::classify(20, false), PriorityTier::Gold);
        assert_eq!(PriorityTier::classify(1000, false), PriorityTier::Gold);
    }

    #[test]
    fn test_vip_flag_overrides_visit_count() {
        assert_eq!(PriorityTier::classify(0, true), PriorityTier::Vip);
        assert_eq!(PriorityTier::classify(50, true), PriorityTier::Vip);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(PriorityTier::Vip > PriorityTier::Gold);
        assert!(PriorityTier::Gold > PriorityTier::Silver);
        assert!(PriorityTier::Silver > PriorityTier::Bronze);
        assert!(PriorityTier::Bronze > PriorityTier::Normal);
    }

    #[test]
    fn test_tier_round_trip() {
        for tier in [
            PriorityTier::Normal,
            PriorityTier::Bronze,
            PriorityTier::Silver,
            PriorityTier::Gold,
            PriorityTier::Vip,
        ] {
            assert_eq!(tier.as_str().parse::<PriorityTier>().unwrap(), tier);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("platinum".parse::<PriorityTier>().is_err());
    }
}
