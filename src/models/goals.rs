use serde::{Deserialize, Serialize};

/// Daily/weekly health targets. Values are kept as the free-text numeric
/// strings the user typed; blank means no goal set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Goals {
    /// Daily calorie goal (kcal).
    pub calories: String,
    /// Daily water intake goal (liters).
    pub water: String,
    /// Weekly alcohol limit (drinks).
    pub alcohol: String,
}

impl Goals {
    pub fn is_empty(&self) -> bool {
        self.calories.trim().is_empty()
            && self.water.trim().is_empty()
            && self.alcohol.trim().is_empty()
    }
}
