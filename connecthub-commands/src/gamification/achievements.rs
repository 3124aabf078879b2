use connecthub_api::impls::achievements::list_achievements;
use connecthub_core::state::Action;
use connecthub_core::{Context, Error};
use connecthub_utils::card::build_paginated_card;
use connecthub_utils::pagination::paginate_lines;

use crate::CommandMeta;
use crate::gamification::cards::achievement_line;
use crate::gamification::report_failure;
use crate::utility::cards::page_out_of_range_message;

pub const META: CommandMeta = CommandMeta {
    name: "achievements",
    desc: "List achievements, unlocked first.",
    category: "gamification",
    usage: "!achievements [--page N]",
};

const ACHIEVEMENTS_PER_PAGE: usize = 10;

pub async fn achievements(ctx: &mut Context<'_>, page: usize) -> Result<(), Error> {
    let achievements = match list_achievements(&ctx.data().api).await {
        Ok(achievements) => achievements,
        Err(e) => {
            report_failure(ctx, "achievements", &e);
            return Ok(());
        }
    };

    ctx.apply(Action::AchievementsLoaded(achievements));

    let achievements = &ctx.state().achievements;
    if achievements.is_empty() {
        ctx.say("No achievements yet.");
        return Ok(());
    }

    let unlocked = achievements.iter().filter(|a| a.unlocked).count();
    let footer = format!("{}/{} unlocked", unlocked, achievements.len());
    let lines = achievements.iter().map(achievement_line).collect::<Vec<_>>();
    let pages = paginate_lines(&lines, ACHIEVEMENTS_PER_PAGE);

    let Some(body) = pages.get(page.max(1) - 1) else {
        ctx.say(page_out_of_range_message(page, pages.len()));
        return Ok(());
    };

    let rendered =
        build_paginated_card("Achievements", body.clone(), page, pages.len(), Some(footer.as_str()))
            .render();
    ctx.say(rendered);
    Ok(())
}
