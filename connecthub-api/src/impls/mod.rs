pub mod achievements;
pub mod challenges;
pub mod points;
pub mod rewards;
pub mod stats;
pub mod streak;
