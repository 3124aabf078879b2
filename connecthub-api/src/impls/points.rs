use tracing::{info, warn};

use crate::cache::invalidate_after_award;
use crate::client::GamificationApi;
use crate::error::ApiError;
use crate::model::stats::{AwardRequest, AwardResult};

/// Longest reason the backend is sent; longer input is cut at a char boundary.
pub const MAX_REASON_CHARS: usize = 200;

/// Validate an award before any network I/O happens.
pub fn award_request(points: i64, reason: &str) -> Result<AwardRequest, ApiError> {
    if points <= 0 {
        return Err(ApiError::InvalidRequest(format!(
            "points must be positive, got {points}"
        )));
    }

    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ApiError::InvalidRequest(
            "a reason is required when awarding points".to_owned(),
        ));
    }

    Ok(AwardRequest {
        points,
        reason: reason.chars().take(MAX_REASON_CHARS).collect(),
    })
}

pub async fn award_points(
    api: &GamificationApi,
    points: i64,
    reason: &str,
) -> anyhow::Result<AwardResult> {
    let request = award_request(points, reason)?;

    let result: AwardResult = api.post_json("/points/award", Some(&request)).await?;
    info!(
        user_id = api.user_id(),
        points = result.points_awarded,
        total_points = result.total_points,
        "points awarded"
    );

    if let Err(err) = invalidate_after_award(api.cache(), api.user_id()).await {
        warn!(?err, user_id = api.user_id(), "failed to invalidate cache after award");
    }

    Ok(result)
}
