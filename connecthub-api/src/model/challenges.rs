use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub progress: i64,
    #[serde(default = "default_target")]
    pub target: i64,
    #[serde(default)]
    pub completed: bool,
}

fn default_target() -> i64 {
    1
}

impl Challenge {
    /// Progress toward the target, treating a completed challenge as done.
    pub fn completion(&self) -> (i64, i64) {
        let target = self.target.max(1);
        if self.completed {
            return (target, target);
        }
        (self.progress.clamp(0, target), target)
    }
}
