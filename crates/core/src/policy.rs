use crate::clock::Moment;
use std::collections::HashMap;
use std::fmt;

/// Decides whether a tool may be advertised and called at a given moment.
///
/// Implementations must be pure: the answer depends only on `name` and `at`.
pub trait VisibilityPolicy: Send + Sync {
    fn is_visible(&self, name: &str, at: Moment) -> bool;

    /// Human-readable availability rule for `name`, if it is gated.
    fn availability(&self, _name: &str) -> Option<String> {
        None
    }
}

/// Half-open range of hours `[start, end)`.
///
/// `start > end` wraps past midnight; `start == end` never matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HourWindow {
    pub(crate) start: u32,
    pub(crate) end: u32,
}

impl HourWindow {
    /// `start` in `0..=23`, `end` in `0..=24`.
    pub fn new(start: u32, end: u32) -> Option<Self> {
        (start <= 23 && end <= 24).then_some(Self { start, end })
    }

    pub fn contains(&self, hour: u32) -> bool {
        if self.start <= self.end {
            self.start <= hour && hour < self.end
        } else {
            hour >= self.start || hour < self.end
        }
    }
}

impl fmt::Display for HourWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00-{:02}:00", self.start, self.end)
    }
}

/// Gates selected tools to hour windows; every other name is always visible.
#[derive(Debug, Clone, Default)]
pub struct HourWindowPolicy {
    windows: HashMap<String, HourWindow>,
}

impl HourWindowPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, name: impl Into<String>, window: HourWindow) -> Self {
        self.windows.insert(name.into(), window);
        self
    }

    pub fn window(&self, name: &str) -> Option<HourWindow> {
        self.windows.get(name).copied()
    }
}

impl VisibilityPolicy for HourWindowPolicy {
    fn is_visible(&self, name: &str, at: Moment) -> bool {
        self.window(name)
            .map_or(true, |window| window.contains(at.hour()))
    }

    fn availability(&self, name: &str) -> Option<String> {
        self.window(name).map(|window| window.to_string())
    }
}
