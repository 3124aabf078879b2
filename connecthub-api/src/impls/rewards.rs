use crate::cache::{CATALOG_CACHE_TTL, rewards_key};
use crate::client::GamificationApi;
use crate::model::rewards::Reward;

pub async fn list_rewards(api: &GamificationApi) -> anyhow::Result<Vec<Reward>> {
    let cache_key = rewards_key(api.cache(), api.user_id());
    api.cache()
        .get_or_load_json(&cache_key, CATALOG_CACHE_TTL, || async {
            Ok(api.get_json::<Vec<Reward>>("/rewards").await?)
        })
        .await
}
