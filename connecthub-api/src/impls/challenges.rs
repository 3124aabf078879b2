use crate::cache::{CATALOG_CACHE_TTL, daily_challenges_key};
use crate::client::GamificationApi;
use crate::model::challenges::Challenge;

pub async fn list_daily_challenges(api: &GamificationApi) -> anyhow::Result<Vec<Challenge>> {
    let cache_key = daily_challenges_key(api.cache(), api.user_id());
    api.cache()
        .get_or_load_json(&cache_key, CATALOG_CACHE_TTL, || async {
            Ok(api.get_json::<Vec<Challenge>>("/challenges/daily").await?)
        })
        .await
}
