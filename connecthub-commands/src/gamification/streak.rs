use connecthub_api::impls::streak::update_streak;
use connecthub_core::state::Action;
use connecthub_core::{Context, Error};

use crate::CommandMeta;
use crate::gamification::cards::streak_card;
use crate::gamification::{report_failure, say_notice};

pub const META: CommandMeta = CommandMeta {
    name: "streak",
    desc: "Check in for today and update your streak.",
    category: "gamification",
    usage: "!streak",
};

pub async fn streak(ctx: &mut Context<'_>) -> Result<(), Error> {
    match update_streak(&ctx.data().api).await {
        Ok(update) => {
            let rendered = streak_card(&update).render();
            ctx.apply(Action::StreakUpdated(update));
            ctx.say(rendered);
            say_notice(ctx);
        }
        Err(e) => report_failure(ctx, "streak", &e),
    }
    Ok(())
}
