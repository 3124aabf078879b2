use serde::{Deserialize, Serialize};

use crate::model::achievements::Achievement;
use crate::model::leveling::{LevelError, LevelProgress, level_for_points};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_points: i64,
    #[serde(default = "default_level")]
    pub level: i64,
    #[serde(default)]
    pub current_streak: i64,
    #[serde(default)]
    pub longest_streak: Option<i64>,
    #[serde(default)]
    pub coins: i64,
    #[serde(default)]
    pub rank: Option<i64>,
}

fn default_level() -> i64 {
    1
}

impl Default for UserStats {
    fn default() -> Self {
        Self {
            total_points: 0,
            level: default_level(),
            current_streak: 0,
            longest_streak: None,
            coins: 0,
            rank: None,
        }
    }
}

impl UserStats {
    /// Level implied by `total_points`, ignoring whatever level was reported.
    pub fn computed_level(&self) -> Result<i64, LevelError> {
        level_for_points(self.total_points)
    }

    /// Whether the reported level matches the points.
    pub fn level_is_consistent(&self) -> bool {
        self.computed_level()
            .is_ok_and(|computed| computed == self.level)
    }

    pub fn progress(&self) -> Result<LevelProgress, LevelError> {
        LevelProgress::compute(self.level, self.total_points)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardRequest {
    pub points: i64,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardResult {
    pub points_awarded: i64,
    pub total_points: i64,
    #[serde(default)]
    pub level: Option<i64>,
    #[serde(default)]
    pub coins: Option<i64>,
    #[serde(default)]
    pub new_achievements: Vec<Achievement>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakUpdate {
    pub current_streak: i64,
    #[serde(default)]
    pub longest_streak: Option<i64>,
    #[serde(default)]
    pub bonus_points: i64,
}
