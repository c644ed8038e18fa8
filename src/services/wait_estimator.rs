//! Wait-time estimation.
//!
//! Converts the durations of entries ahead in the queue plus the active
//! agent count into a predicted number of minutes.

/// Sentinel rendered for a zero-minute estimate.
pub const NO_WAIT: &str = "no wait";

/// Estimates wait time from queued durations and agent capacity.
#[derive(Debug, Clone, Copy, Default)]
pub struct WaitEstimator;

impl WaitEstimator {
    pub fn new() -> Self {
        Self
    }

    /// Predicted wait in whole minutes.
    ///
    /// Zero active agents is treated as one, not as an infinite wait: the
    /// roster being momentarily empty (shift change, break overlap) should
    /// degrade the estimate, not blow it up.
    pub fn estimate(&self, durations: &[u32], active_agent_count: usize) -> u64 {
        let effective_agents = active_agent_count.max(1) as u64;
        let total: u64 = durations.iter().map(|&d| u64::from(d)).sum();
        total / effective_agents
    }
}

/// Render an estimate in minutes as a human-readable label.
pub fn format_wait(minutes: u64) -> String {
    if minutes == 0 {
        return NO_WAIT.to_string();
    }
    if minutes < 60 {
        return format!("{minutes} minutes");
    }
    let hours = minutes / 60;
    let remainder = minutes % 60;
    if remainder == 0 {
        if hours == 1 {
            "1 hour".to_string()
        } else {
            format!("{hours} hours")
        }
    } else {
        format!("{hours}h {remainder}min")
    }
}
