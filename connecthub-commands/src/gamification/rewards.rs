use connecthub_api::impls::rewards::list_rewards;
use connecthub_core::state::Action;
use connecthub_core::{Context, Error};

use crate::CommandMeta;
use crate::gamification::cards::rewards_card;
use crate::gamification::report_failure;

pub const META: CommandMeta = CommandMeta {
    name: "rewards",
    desc: "List rewards and whether your coins cover them.",
    category: "gamification",
    usage: "!rewards",
};

pub async fn rewards(ctx: &mut Context<'_>) -> Result<(), Error> {
    match list_rewards(&ctx.data().api).await {
        Ok(rewards) => {
            ctx.apply(Action::RewardsLoaded(rewards));
            let state = ctx.state();
            let coins = state.stats.as_ref().map(|stats| stats.coins);
            let rendered = rewards_card(&state.rewards, coins).render();
            ctx.say(rendered);
        }
        Err(e) => report_failure(ctx, "rewards", &e),
    }
    Ok(())
}
