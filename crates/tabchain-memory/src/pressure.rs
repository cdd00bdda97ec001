//! Memory pressure levels.
//!
//! Pressure is reported against a budget and never acts on its own:
//! - Low: < 50% of budget
//! - Medium: 50-80% of budget
//! - High: 80-100% of budget
//! - Critical: at or over budget

use crate::MemoryUsage;
use std::fmt;

/// Memory pressure levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MemoryPressureLevel {
    /// Under 50% of budget
    Low,
    /// 50-80% of budget
    Medium,
    /// 80-100% of budget
    High,
    /// At or over budget
    Critical,
}

impl MemoryPressureLevel {
    /// Determine pressure level from usage and budget
    pub fn from_usage(current: MemoryUsage, budget: MemoryUsage) -> Self {
        if budget.as_megabytes() <= 0.0 {
            return if current.as_megabytes() > 0.0 {
                Self::Critical
            } else {
                Self::Low
            };
        }

        let ratio = current.ratio_of(budget);

        if ratio >= 1.0 {
            Self::Critical
        } else if ratio >= 0.8 {
            Self::High
        } else if ratio >= 0.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low (normal operation)",
            Self::Medium => "Medium (consider evicting a tab)",
            Self::High => "High (evicting a tab is recommended)",
            Self::Critical => "Critical (over budget)",
        }
    }
}

impl fmt::Display for MemoryPressureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
