use connecthub_api::impls::stats::get_stats;
use connecthub_api::model::leveling::LevelProgress;
use connecthub_core::state::Action;
use connecthub_core::{Context, Error};

use crate::CommandMeta;
use crate::gamification::cards::{level_error_message, progress_card};
use crate::gamification::report_failure;

pub const META: CommandMeta = CommandMeta {
    name: "progress",
    desc: "Show progress toward the next level.",
    category: "gamification",
    usage: "!progress [level points]",
};

pub async fn progress(
    ctx: &mut Context<'_>,
    level: Option<i64>,
    points: Option<i64>,
) -> Result<(), Error> {
    let computed = match (level, points) {
        (Some(level), Some(points)) => LevelProgress::compute(level, points),
        (Some(level), None) => {
            let Some(points) = current_points(ctx).await else {
                return Ok(());
            };
            LevelProgress::compute(level, points)
        }
        (None, _) => {
            let Some(points) = current_points(ctx).await else {
                return Ok(());
            };
            LevelProgress::for_points(points)
        }
    };

    match computed {
        Ok(progress) => ctx.say(progress_card(&progress).render()),
        Err(e) => ctx.say(level_error_message(&e)),
    }
    Ok(())
}

/// Points from the loaded stats, fetching them first if nothing is loaded.
async fn current_points(ctx: &mut Context<'_>) -> Option<i64> {
    if let Some(stats) = ctx.state().stats.as_ref() {
        return Some(stats.total_points);
    }

    match get_stats(&ctx.data().api).await {
        Ok(stats) => {
            let points = stats.total_points;
            ctx.apply(Action::StatsLoaded(stats));
            Some(points)
        }
        Err(e) => {
            report_failure(ctx, "stats", &e);
            None
        }
    }
}
