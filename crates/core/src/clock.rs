//! Time providers.
//!
//! Visibility is decided against a [`Moment`]: a time of day in the server's local reference
//! time. Each request samples its clock once and threads the moment through listing and
//! dispatch.

use chrono::{Local, NaiveTime, Timelike};
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Moment(NaiveTime);

impl Moment {
    pub fn from_hms(hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, min, sec).map(Self)
    }

    /// Top of the given hour (`hour:00:00`).
    pub fn at_hour(hour: u32) -> Option<Self> {
        Self::from_hms(hour, 0, 0)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }
}

impl From<NaiveTime> for Moment {
    fn from(time: NaiveTime) -> Self {
        Self(time)
    }
}

impl fmt::Display for Moment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M:%S"))
    }
}

pub trait Clock: Send + Sync {
    fn now(&self) -> Moment;

    /// Short label for startup logs.
    fn describe(&self) -> String;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Moment {
        Moment::from(Local::now().time())
    }

    fn describe(&self) -> String {
        "system local time".to_string()
    }
}

/// Always reports the top of one fixed hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHourClock {
    moment: Moment,
}

impl FixedHourClock {
    /// `None` unless `hour` is in `0..=23`.
    pub fn new(hour: u32) -> Option<Self> {
        Moment::at_hour(hour).map(|moment| Self { moment })
    }
}

impl Clock for FixedHourClock {
    fn now(&self) -> Moment {
        self.moment
    }

    fn describe(&self) -> String {
        format!("fixed hour {:02}:00", self.moment.hour())
    }
}

/// Pick a clock from an optional hour override.
///
/// Absent or blank selects the system clock. A value that is not an integer in `0..=23` also
/// falls back to the system clock, with a warning.
pub fn clock_from_override(raw: Option<&str>) -> Arc<dyn Clock> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Arc::new(SystemClock);
    };

    match raw.parse::<u32>().ok().and_then(FixedHourClock::new) {
        Some(clock) => Arc::new(clock),
        None => {
            log::warn!("Ignoring hour override '{raw}' (expected an integer 0-23); using system time");
            Arc::new(SystemClock)
        }
    }
}
