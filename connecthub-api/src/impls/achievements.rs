use crate::cache::{CATALOG_CACHE_TTL, achievements_key};
use crate::client::GamificationApi;
use crate::model::achievements::Achievement;

/// Unlocked achievements first, then by name.
pub async fn list_achievements(api: &GamificationApi) -> anyhow::Result<Vec<Achievement>> {
    let cache_key = achievements_key(api.cache(), api.user_id());
    let mut achievements = api
        .cache()
        .get_or_load_json(&cache_key, CATALOG_CACHE_TTL, || async {
            Ok(api.get_json::<Vec<Achievement>>("/achievements").await?)
        })
        .await?;

    achievements.sort_by(|left, right| {
        right
            .unlocked
            .cmp(&left.unlocked)
            .then_with(|| left.name.cmp(&right.name))
    });

    Ok(achievements)
}
