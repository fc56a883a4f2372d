use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Weekday;

/// The weekly workout schedule: weekday -> workout title.
///
/// Days without an entry (or with a blank title) are rest days unless an
/// exercise plan exists for them; that fallback lives in
/// [`Schedule::display_for`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: BTreeMap<Weekday, String>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self, day: Weekday) -> Option<&str> {
        self.entries
            .get(&day)
            .map(|s| s.as_str())
            .filter(|s| !s.trim().is_empty())
    }

    pub fn set_title(&mut self, day: Weekday, title: impl Into<String>) {
        self.entries.insert(day, title.into());
    }

    pub fn clear(&mut self, day: Weekday) {
        self.entries.remove(&day);
    }

    /// Human display for a day, given how many exercises are planned:
    /// a titled workout shows "<title> (<n> exercises)", an untitled day
    /// with planned exercises shows "<n> exercises", otherwise "Rest Day".
    pub fn display_for(&self, day: Weekday, exercise_count: usize) -> String {
        match self.title(day) {
            Some(title) => format!("{} ({} exercises)", title, exercise_count),
            None if exercise_count > 0 => format!("{} exercises", exercise_count),
            None => "Rest Day".to_string(),
        }
    }
}
