//! Calendar time
//!
//! Business rules here care about the calendar year only (a vehicle cannot
//! be manufactured in the future, its age is counted in whole years). The
//! year is read through [`Clock`] so callers can pin it.

use chrono::{Datelike, Local};
use std::sync::Arc;

/// Source of the current calendar year
pub trait Clock: Send + Sync {
    /// Returns the current calendar year
    fn current_year(&self) -> i32;
}

/// Reads the local wall clock on every call
///
/// The local time zone decides the year, so near New Year a quote sees the
/// same year as the person requesting it on that host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// Always reports the same year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    year: i32,
}

impl FixedClock {
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.year
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn current_year(&self) -> i32 {
        (**self).current_year()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn current_year(&self) -> i32 {
        (**self).current_year()
    }
}
