use connecthub_api::impls::points::award_points;
use connecthub_core::state::Action;
use connecthub_core::{Context, Error};

use crate::CommandMeta;
use crate::gamification::cards::award_card;
use crate::gamification::{report_failure, say_notice};

pub const META: CommandMeta = CommandMeta {
    name: "award",
    desc: "Award points for an action.",
    category: "gamification",
    usage: "!award <points> <reason>",
};

pub async fn award(ctx: &mut Context<'_>, points: i64, reason: &str) -> Result<(), Error> {
    match award_points(&ctx.data().api, points, reason).await {
        Ok(result) => {
            ctx.apply(Action::PointsAwarded(result));
            let state = ctx.state();
            let rendered = state
                .last_award
                .as_ref()
                .map(|result| award_card(result, state.stats.as_ref()).render());
            if let Some(rendered) = rendered {
                ctx.say(rendered);
            }
            say_notice(ctx);
        }
        Err(e) => report_failure(ctx, "award", &e),
    }
    Ok(())
}
