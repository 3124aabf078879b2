use connecthub_api::impls::challenges::list_daily_challenges;
use connecthub_core::state::Action;
use connecthub_core::{Context, Error};

use crate::CommandMeta;
use crate::gamification::cards::challenges_card;
use crate::gamification::report_failure;

pub const META: CommandMeta = CommandMeta {
    name: "challenges",
    desc: "List today's challenges and how far along you are.",
    category: "gamification",
    usage: "!challenges",
};

pub async fn challenges(ctx: &mut Context<'_>) -> Result<(), Error> {
    match list_daily_challenges(&ctx.data().api).await {
        Ok(challenges) => {
            ctx.apply(Action::ChallengesLoaded(challenges));
            let rendered = challenges_card(&ctx.state().challenges).render();
            ctx.say(rendered);
        }
        Err(e) => report_failure(ctx, "challenges", &e),
    }
    Ok(())
}
