use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use connecthub_api::impls::{
    achievements::list_achievements, challenges::list_daily_challenges, points::award_points,
    rewards::list_rewards, stats::get_stats, streak::update_streak,
};
use connecthub_api::{ApiConfig, ApiError, CacheService, GamificationApi};

#[derive(Clone, Debug)]
struct Seen {
    path: &'static str,
    authorization: Option<String>,
    language: Option<String>,
    body: Option<Value>,
}

#[derive(Clone, Default)]
struct Backend {
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl Backend {
    fn record(&self, path: &'static str, headers: &HeaderMap, body: Option<Value>) {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned)
        };

        self.seen.lock().unwrap().push(Seen {
            path,
            authorization: header("authorization"),
            language: header("accept-language"),
            body,
        });
    }

    fn requests(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }
}

async fn stats(State(backend): State<Backend>, headers: HeaderMap) -> Json<Value> {
    backend.record("/stats", &headers, None);
    Json(json!({
        "data": { "totalPoints": 650, "level": 3, "currentStreak": 4, "coins": 12 }
    }))
}

async fn challenges(State(backend): State<Backend>, headers: HeaderMap) -> Json<Value> {
    backend.record("/challenges/daily", &headers, None);
    Json(json!([
        { "id": "c1", "title": "Post something", "points": 20, "progress": 0, "target": 1 },
        { "id": "c2", "title": "Like 5 posts", "points": 10, "progress": 3, "target": 5 }
    ]))
}

async fn achievements(State(backend): State<Backend>, headers: HeaderMap) -> Json<Value> {
    backend.record("/achievements", &headers, None);
    Json(json!([
        { "id": "a1", "name": "Zealot", "unlocked": false },
        { "id": "a2", "name": "Butterfly", "unlocked": true, "unlockedAt": "2026-10-01" },
        { "id": "a3", "name": "Alpha", "unlocked": false }
    ]))
}

async fn rewards(State(backend): State<Backend>, headers: HeaderMap) -> Json<Value> {
    backend.record("/rewards", &headers, None);
    Json(json!({ "data": [ { "id": "r1", "name": "Profile frame", "cost": 50 } ] }))
}

async fn award(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    backend.record("/points/award", &headers, Some(body.clone()));
    let points = body["points"].as_i64().unwrap_or_default();
    Json(json!({ "pointsAwarded": points, "totalPoints": 650 + points, "coins": 15 }))
}

async fn streak(State(backend): State<Backend>, headers: HeaderMap) -> Json<Value> {
    backend.record("/streak/update", &headers, None);
    Json(json!({ "currentStreak": 5, "longestStreak": 9, "bonusPoints": 10 }))
}

async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

fn router(backend: &Backend) -> Router {
    Router::new()
        .route("/api/v1/gamification/stats", get(stats))
        .route("/api/v1/gamification/challenges/daily", get(challenges))
        .route("/api/v1/gamification/achievements", get(achievements))
        .route("/api/v1/gamification/rewards", get(rewards))
        .route("/api/v1/gamification/points/award", post(award))
        .route("/api/v1/gamification/streak/update", post(streak))
        .with_state(backend.clone())
}

async fn start() -> (GamificationApi, Backend) {
    let backend = Backend::default();
    let base_url = spawn_backend(router(&backend)).await;
    let config = ApiConfig::new(base_url)
        .with_token("test-token")
        .with_language("es");
    (GamificationApi::new(config).unwrap(), backend)
}

#[tokio::test]
async fn stats_request_carries_credentials_and_language() {
    let (api, backend) = start().await;

    let stats = get_stats(&api).await.unwrap();
    assert_eq!(stats.total_points, 650);
    assert_eq!(stats.level, 3);
    assert_eq!(stats.coins, 12);

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].authorization.as_deref(), Some("Bearer test-token"));
    assert_eq!(requests[0].language.as_deref(), Some("es"));
}

#[tokio::test]
async fn lists_accept_bare_and_wrapped_arrays() {
    let (api, _backend) = start().await;

    let challenges = list_daily_challenges(&api).await.unwrap();
    assert_eq!(challenges.len(), 2);
    assert_eq!(challenges[1].completion(), (3, 5));

    let rewards = list_rewards(&api).await.unwrap();
    assert_eq!(rewards.len(), 1);
    assert!(rewards[0].available);
}

#[tokio::test]
async fn achievements_list_unlocked_first() {
    let (api, _backend) = start().await;

    let names = list_achievements(&api)
        .await
        .unwrap()
        .into_iter()
        .map(|achievement| achievement.name)
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["Butterfly", "Alpha", "Zealot"]);
}

#[tokio::test]
async fn award_posts_trimmed_reason() {
    let (api, backend) = start().await;

    let result = award_points(&api, 25, "  completed a challenge ").await.unwrap();
    assert_eq!(result.points_awarded, 25);
    assert_eq!(result.total_points, 675);
    assert_eq!(result.coins, Some(15));

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].path, "/points/award");
    assert_eq!(
        requests[0].body,
        Some(json!({ "points": 25, "reason": "completed a challenge" }))
    );
}

#[tokio::test]
async fn invalid_award_never_reaches_backend() {
    let (api, backend) = start().await;

    let err = award_points(&api, 0, "nothing").await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ApiError>(),
        Some(ApiError::InvalidRequest(_))
    ));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn streak_update_returns_bonus() {
    let (api, backend) = start().await;

    let update = update_streak(&api).await.unwrap();
    assert_eq!(update.current_streak, 5);
    assert_eq!(update.longest_streak, Some(9));
    assert_eq!(update.bonus_points, 10);
    assert_eq!(backend.requests()[0].path, "/streak/update");
}

#[tokio::test]
async fn rejected_requests_surface_status() {
    let router = Router::new().route(
        "/api/v1/gamification/stats",
        get(|| async { (StatusCode::UNAUTHORIZED, "token expired") }),
    );
    let base_url = spawn_backend(router).await;
    let api = GamificationApi::new(ApiConfig::new(base_url)).unwrap();

    let err = get_stats(&api).await.unwrap_err();
    let api_err = err.downcast_ref::<ApiError>().unwrap();
    assert_eq!(api_err.status(), Some(401));
    assert!(api_err.is_unauthorized());
    assert!(api_err.to_string().contains("token expired"));
}

#[tokio::test]
async fn malformed_payloads_are_decode_errors() {
    let router = Router::new()
        .route(
            "/api/v1/gamification/challenges/daily",
            get(|| async { "not json" }),
        )
        .route(
            "/api/v1/gamification/stats",
            get(|| async { Json(json!({ "success": false, "error": "user not found" })) }),
        );
    let base_url = spawn_backend(router).await;
    let api = GamificationApi::new(ApiConfig::new(base_url)).unwrap();

    let err = list_daily_challenges(&api).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ApiError>(),
        Some(ApiError::Decode { .. })
    ));

    let err = get_stats(&api).await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ApiError>(),
        Some(ApiError::Decode { .. })
    ));
}

#[tokio::test]
async fn writes_succeed_when_cache_is_unreachable() {
    let backend = Backend::default();
    let base_url = spawn_backend(router(&backend)).await;
    let cache = CacheService::redis("redis://127.0.0.1:1", "connecthub:test").unwrap();
    let api = GamificationApi::with_cache(ApiConfig::new(base_url), cache).unwrap();

    let result = award_points(&api, 10, "daily login").await.unwrap();
    assert_eq!(result.total_points, 660);

    let update = update_streak(&api).await.unwrap();
    assert_eq!(update.bonus_points, 10);

    let stats = get_stats(&api).await.unwrap();
    assert_eq!(stats.total_points, 650);

    let paths = backend
        .requests()
        .into_iter()
        .map(|seen| seen.path)
        .collect::<Vec<_>>();
    assert_eq!(paths, vec!["/points/award", "/streak/update", "/stats"]);
}
