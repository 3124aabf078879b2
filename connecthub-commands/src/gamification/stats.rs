use connecthub_api::impls::stats::get_stats;
use connecthub_core::state::Action;
use connecthub_core::{Context, Error};

use crate::CommandMeta;
use crate::gamification::cards::stats_card;
use crate::gamification::report_failure;

pub const META: CommandMeta = CommandMeta {
    name: "stats",
    desc: "Show your points, level, streak and coins.",
    category: "gamification",
    usage: "!stats",
};

pub async fn stats(ctx: &mut Context<'_>) -> Result<(), Error> {
    let stats = match get_stats(&ctx.data().api).await {
        Ok(stats) => stats,
        Err(e) => {
            report_failure(ctx, "stats", &e);
            return Ok(());
        }
    };

    ctx.apply(Action::StatsLoaded(stats));

    let rendered = ctx.state().stats.as_ref().map(|stats| stats_card(stats).render());
    if let Some(rendered) = rendered {
        ctx.say(rendered);
    }
    Ok(())
}
