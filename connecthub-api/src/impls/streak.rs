use tracing::{info, warn};

use crate::cache::invalidate_stats;
use crate::client::GamificationApi;
use crate::model::stats::StreakUpdate;

/// Check in for today; the backend decides whether the streak grows or resets.
pub async fn update_streak(api: &GamificationApi) -> anyhow::Result<StreakUpdate> {
    let update: StreakUpdate = api.post_json::<(), _>("/streak/update", None).await?;
    info!(
        user_id = api.user_id(),
        current_streak = update.current_streak,
        bonus_points = update.bonus_points,
        "streak updated"
    );

    if let Err(err) = invalidate_stats(api.cache(), api.user_id()).await {
        warn!(?err, user_id = api.user_id(), "failed to invalidate cache after streak update");
    }

    Ok(update)
}
