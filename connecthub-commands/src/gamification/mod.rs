pub mod achievements;
pub mod award;
pub mod cards;
pub mod challenges;
pub mod progress;
pub mod rewards;
pub mod stats;
pub mod streak;

use tracing::warn;

use connecthub_core::state::Action;
use connecthub_core::{Context, Error};

use cards::failure_message;

/// Record a failed backend call in state and tell the user, without aborting.
pub(crate) fn report_failure(ctx: &mut Context<'_>, what: &str, error: &Error) {
    warn!(?error, command = what, "gamification request failed");

    let message = failure_message(what, error);
    ctx.apply(Action::Failed(message.clone()));
    ctx.say(message);
}

/// Echo the reducer's one-shot notice, if the last action left one.
pub(crate) fn say_notice(ctx: &mut Context<'_>) {
    if let Some(notice) = ctx.state().notice.clone() {
        ctx.say(notice);
    }
}
