use crate::cache::{STATS_CACHE_TTL, stats_key};
use crate::client::GamificationApi;
use crate::model::stats::UserStats;

pub async fn get_stats(api: &GamificationApi) -> anyhow::Result<UserStats> {
    let cache_key = stats_key(api.cache(), api.user_id());
    api.cache()
        .get_or_load_json(&cache_key, STATS_CACHE_TTL, || async {
            Ok(api.get_json::<UserStats>("/stats").await?)
        })
        .await
}
