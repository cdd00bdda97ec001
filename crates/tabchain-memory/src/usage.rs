//! Memory quantity attached to a tab.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;
use thiserror::Error;

/// Digits shown after the decimal point when no precision is requested.
const DEFAULT_PRECISION: usize = 2;

/// Errors from parsing a memory amount
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MemoryError {
    #[error("Invalid memory amount: {0:?}")]
    NotANumber(String),

    #[error("Memory amount must be finite, got {0}")]
    NotFinite(f64),

    #[error("Memory amount cannot be negative, got {0}")]
    Negative(f64),
}

/// Memory used by a tab, in megabytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryUsage(f64);

impl MemoryUsage {
    /// The empty sum.
    pub const ZERO: Self = Self(0.0);

    /// Create a usage from a megabyte count.
    pub const fn from_megabytes(megabytes: f64) -> Self {
        Self(megabytes)
    }

    /// Get the usage in megabytes.
    pub const fn as_megabytes(self) -> f64 {
        self.0
    }

    /// Check if nothing is used.
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    /// Ratio of this usage to `budget`.
    pub fn ratio_of(self, budget: MemoryUsage) -> f64 {
        self.0 / budget.0
    }
}

impl From<f64> for MemoryUsage {
    fn from(megabytes: f64) -> Self {
        Self(megabytes)
    }
}

impl From<u32> for MemoryUsage {
    fn from(megabytes: u32) -> Self {
        Self(f64::from(megabytes))
    }
}

impl Add for MemoryUsage {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for MemoryUsage {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for MemoryUsage {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for MemoryUsage {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Sum for MemoryUsage {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a MemoryUsage> for MemoryUsage {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for MemoryUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        write!(f, "{:.*} MB", precision, self.0)
    }
}

impl FromStr for MemoryUsage {
    type Err = MemoryError;

    /// Parse a megabyte amount, with or without a trailing `MB`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed
            .strip_suffix("MB")
            .or_else(|| trimmed.strip_suffix("mb"))
            .unwrap_or(trimmed)
            .trim_end();

        let megabytes: f64 = number
            .parse()
            .map_err(|_| MemoryError::NotANumber(s.to_string()))?;

        if !megabytes.is_finite() {
            return Err(MemoryError::NotFinite(megabytes));
        }
        if megabytes < 0.0 {
            return Err(MemoryError::Negative(megabytes));
        }

        Ok(Self(megabytes))
    }
}
