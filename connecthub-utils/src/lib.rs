/// Terminal card builders shared across commands.
pub mod card;
/// Shared formatting helpers (points, progress bars, streaks).
pub mod formatting;
/// Single source of truth for the interactive shell prefix.
pub const COMMAND_PREFIX: char = '!';
/// Page math for long listings.
pub mod pagination;
/// Pure parser helpers.
pub mod parse;
