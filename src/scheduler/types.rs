/*!
 * Scheduler Types
 * Policy selection and time quantum configuration
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::Ticks;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Scheduling policy selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulingPolicy {
    /// First-come first-served, non-preemptive
    Fcfs,
    /// Shortest remaining time first, preemptive at every tick
    ShortestRemainingTime,
    /// Round-robin with fixed time quantum
    RoundRobin,
}

impl SchedulingPolicy {
    pub const ALL: [SchedulingPolicy; 3] = [
        Self::Fcfs,
        Self::ShortestRemainingTime,
        Self::RoundRobin,
    ];

    /// Parse from string representation
    pub fn from_str(s: &str) -> SchedulerResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" | "first_come_first_served" => Ok(Self::Fcfs),
            "srt" | "srtf" | "shortest_remaining_time" => Ok(Self::ShortestRemainingTime),
            "rr" | "round_robin" | "roundrobin" => Ok(Self::RoundRobin),
            _ => Err(SchedulerError::InvalidPolicy(s.to_string())),
        }
    }

    /// Convert to string representation
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::ShortestRemainingTime => "srt",
            Self::RoundRobin => "round_robin",
        }
    }

    /// Human-readable name for menus and report headers
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come First-Served (FCFS)",
            Self::ShortestRemainingTime => "Shortest Remaining Time (SRT)",
            Self::RoundRobin => "Round-Robin (RR)",
        }
    }

    pub const fn needs_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }
}

impl fmt::Display for SchedulingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SchedulingPolicy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SchedulingPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Round-robin time quantum, in ticks
///
/// Construction rejects non-positive values, so a `TimeQuantum` in hand is
/// always usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Ticks);

impl TimeQuantum {
    pub fn new(ticks: i64) -> SchedulerResult<Self> {
        if ticks <= 0 {
            return Err(SchedulerError::InvalidQuantum(ticks));
        }
        Ok(Self(ticks as Ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = i64::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parsing() {
        assert_eq!(
            SchedulingPolicy::from_str("FCFS").unwrap(),
            SchedulingPolicy::Fcfs
        );
        assert_eq!(
            SchedulingPolicy::from_str("srtf").unwrap(),
            SchedulingPolicy::ShortestRemainingTime
        );
        assert_eq!(
            SchedulingPolicy::from_str("round_robin").unwrap(),
            SchedulingPolicy::RoundRobin
        );
        assert_eq!(
            SchedulingPolicy::from_str("lottery"),
            Err(SchedulerError::InvalidPolicy("lottery".to_string()))
        );
    }

    #[test]
    fn test_policy_serde_uses_names() {
        let json = serde_json::to_string(&SchedulingPolicy::ShortestRemainingTime).unwrap();
        assert_eq!(json, "\"srt\"");
        let back: SchedulingPolicy = serde_json::from_str("\"rr\"").unwrap();
        assert_eq!(back, SchedulingPolicy::RoundRobin);
    }

    #[test]
    fn test_time_quantum_validation() {
        assert_eq!(TimeQuantum::new(0), Err(SchedulerError::InvalidQuantum(0)));
        assert_eq!(TimeQuantum::new(-3), Err(SchedulerError::InvalidQuantum(-3)));
        assert_eq!(TimeQuantum::new(4).unwrap().ticks(), 4);
        assert!(serde_json::from_str::<TimeQuantum>("0").is_err());
    }
}
