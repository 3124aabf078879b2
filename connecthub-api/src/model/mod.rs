pub mod achievements;
pub mod challenges;
pub mod envelope;
pub mod leveling;
pub mod rewards;
pub mod stats;
